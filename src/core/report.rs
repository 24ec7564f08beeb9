//! Account report generation
//!
//! Reports are plain lines of text. The rural opening credit line is chosen
//! from the account's kind, so there is one report operation for every
//! account category.

use crate::core::traits::ReportGenerator;
use crate::types::{Account, BankError};
use std::fmt;
use std::io::{self, Write};

/// Rendered account report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountReport {
    lines: Vec<String>,
}

impl AccountReport {
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Write every line, newline terminated
    pub fn write_to(&self, output: &mut dyn Write) -> io::Result<()> {
        for line in &self.lines {
            writeln!(output, "{}", line)?;
        }
        Ok(())
    }
}

impl fmt::Display for AccountReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.lines.join("\n"))
    }
}

/// Default report generator
#[derive(Debug, Clone, Copy, Default)]
pub struct AccountReportGenerator;

impl AccountReportGenerator {
    /// Base-only report: number, holder and balance, whatever the kind
    pub fn generate_summary(&self, account: Option<&Account>) -> Result<AccountReport, BankError> {
        let account = account.ok_or_else(|| BankError::missing_account("report"))?;

        Ok(AccountReport {
            lines: base_lines(account),
        })
    }
}

impl ReportGenerator for AccountReportGenerator {
    fn generate_report(&self, account: Option<&Account>) -> Result<AccountReport, BankError> {
        let account = account.ok_or_else(|| BankError::missing_account("report"))?;

        let mut lines = base_lines(account);
        if let Some(opening_credit) = account.opening_credit() {
            lines.push(format!("OpeningCredit: ${}", opening_credit));
        }

        Ok(AccountReport { lines })
    }
}

fn base_lines(account: &Account) -> Vec<String> {
    vec![
        format!("Account Number: {}", account.number()),
        format!("Account Holder: {}", account.holder()),
        format!("Balance: ${}", account.balance()),
    ]
}
