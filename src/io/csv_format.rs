//! CSV format handling for scenario files
//!
//! This module centralizes all CSV format concerns, providing:
//! - CsvRecord structure for deserialization
//! - Conversion from CSV records to scenario steps
//!
//! All functions are pure (no I/O) for easy testing.
//!
//! # Format
//!
//! ```text
//! op,account,holder,amount,extra
//! open_savings,56789,Ishaan,2000,0.05
//! deposit,56789,,500,
//! report,56789,,,
//! ```
//!
//! `extra` carries the interest rate for `open_savings` and the opening
//! credit for `open_rural`.

use crate::types::{AccountNumber, BankError, Step};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::str::FromStr;

/// CSV record structure for deserialization
#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
pub struct CsvRecord {
    pub op: String,
    #[serde(default)]
    pub account: Option<AccountNumber>,
    #[serde(default)]
    pub holder: Option<String>,
    #[serde(default)]
    pub amount: Option<String>,
    #[serde(default)]
    pub extra: Option<String>,
}

/// Convert a CsvRecord to a Step
///
/// Operation names are case-insensitive. Each operation checks that the
/// columns it needs are present and parse.
pub fn convert_csv_record(csv_record: CsvRecord) -> Result<Step, BankError> {
    let op = csv_record.op.trim().to_lowercase();

    let step = match op.as_str() {
        "open" => Step::Open {
            account: require_account(&csv_record, &op)?,
            holder: require_holder(&csv_record, &op)?,
            balance: require_decimal(csv_record.amount.as_deref(), "amount", &op)?,
        },
        "open_savings" => Step::OpenSavings {
            account: require_account(&csv_record, &op)?,
            holder: require_holder(&csv_record, &op)?,
            balance: require_decimal(csv_record.amount.as_deref(), "amount", &op)?,
            interest_rate: require_decimal(csv_record.extra.as_deref(), "extra", &op)?,
        },
        "open_rural" => Step::OpenRural {
            account: require_account(&csv_record, &op)?,
            holder: require_holder(&csv_record, &op)?,
            balance: require_decimal(csv_record.amount.as_deref(), "amount", &op)?,
            opening_credit: require_credit(csv_record.extra.as_deref(), &op)?,
        },
        "deposit" => Step::Deposit {
            account: require_account(&csv_record, &op)?,
            amount: require_decimal(csv_record.amount.as_deref(), "amount", &op)?,
        },
        "withdraw" | "withdrawal" => Step::Withdraw {
            account: require_account(&csv_record, &op)?,
            amount: require_decimal(csv_record.amount.as_deref(), "amount", &op)?,
        },
        "report" => Step::Report {
            account: require_account(&csv_record, &op)?,
        },
        "subscribe" => Step::Subscribe,
        "scheme_deposit" => Step::SchemeDeposit {
            amount: require_decimal(csv_record.amount.as_deref(), "amount", &op)?,
        },
        _ => {
            return Err(BankError::invalid_step(format!(
                "unknown operation '{}'",
                csv_record.op
            )))
        }
    };

    Ok(step)
}

fn non_empty(field: Option<&str>) -> Option<&str> {
    field.map(str::trim).filter(|value| !value.is_empty())
}

fn require_account(record: &CsvRecord, op: &str) -> Result<AccountNumber, BankError> {
    record
        .account
        .ok_or_else(|| BankError::invalid_step(format!("{} requires an account", op)))
}

fn require_holder(record: &CsvRecord, op: &str) -> Result<String, BankError> {
    non_empty(record.holder.as_deref())
        .map(str::to_string)
        .ok_or_else(|| BankError::invalid_step(format!("{} requires a holder", op)))
}

fn require_decimal(field: Option<&str>, column: &str, op: &str) -> Result<Decimal, BankError> {
    let value = non_empty(field)
        .ok_or_else(|| BankError::invalid_step(format!("{} requires {}", op, column)))?;

    Decimal::from_str(value).map_err(|_| {
        BankError::invalid_step(format!("invalid {} '{}' for {}", column, value, op))
    })
}

fn require_credit(field: Option<&str>, op: &str) -> Result<u64, BankError> {
    let value = non_empty(field)
        .ok_or_else(|| BankError::invalid_step(format!("{} requires extra", op)))?;

    value.parse::<u64>().map_err(|_| {
        BankError::invalid_step(format!("invalid opening credit '{}' for {}", value, op))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn csv_row(op: &str, account: Option<u32>, holder: &str, amount: &str, extra: &str) -> CsvRecord {
        let field = |value: &str| (!value.is_empty()).then(|| value.to_string());
        CsvRecord {
            op: op.to_string(),
            account,
            holder: field(holder),
            amount: field(amount),
            extra: field(extra),
        }
    }

    #[rstest]
    #[case::open(
        csv_row("open", Some(12345), "John Doe", "1000", ""),
        Step::Open { account: 12345, holder: "John Doe".to_string(), balance: Decimal::from(1000) }
    )]
    #[case::open_savings(
        csv_row("open_savings", Some(56789), "Ishaan", "2000", "0.05"),
        Step::OpenSavings { account: 56789, holder: "Ishaan".to_string(), balance: Decimal::from(2000), interest_rate: Decimal::new(5, 2) }
    )]
    #[case::open_rural(
        csv_row("open_rural", Some(1001), "Asha", "2000", "10000"),
        Step::OpenRural { account: 1001, holder: "Asha".to_string(), balance: Decimal::from(2000), opening_credit: 10000 }
    )]
    #[case::deposit(
        csv_row("deposit", Some(1), "", "500", ""),
        Step::Deposit { account: 1, amount: Decimal::from(500) }
    )]
    #[case::withdraw_alias(
        csv_row("withdrawal", Some(1), "", "200", ""),
        Step::Withdraw { account: 1, amount: Decimal::from(200) }
    )]
    #[case::uppercase(
        csv_row("REPORT", Some(1), "", "", ""),
        Step::Report { account: 1 }
    )]
    #[case::subscribe(csv_row("subscribe", None, "", "", ""), Step::Subscribe)]
    #[case::scheme_deposit(
        csv_row("scheme_deposit", None, "", "100000", ""),
        Step::SchemeDeposit { amount: Decimal::from(100000) }
    )]
    fn test_convert_valid_records(#[case] record: CsvRecord, #[case] expected: Step) {
        assert_eq!(convert_csv_record(record), Ok(expected));
    }

    #[rstest]
    #[case::unknown_op(csv_row("transfer", Some(1), "", "1", ""), "unknown operation 'transfer'")]
    #[case::missing_account(csv_row("deposit", None, "", "1", ""), "deposit requires an account")]
    #[case::missing_amount(csv_row("withdraw", Some(1), "", "", ""), "withdraw requires amount")]
    #[case::bad_amount(csv_row("deposit", Some(1), "", "abc", ""), "invalid amount 'abc' for deposit")]
    #[case::missing_holder(csv_row("open", Some(1), "  ", "1", ""), "open requires a holder")]
    #[case::missing_rate(csv_row("open_savings", Some(1), "A", "1", ""), "open_savings requires extra")]
    #[case::bad_credit(csv_row("open_rural", Some(1), "A", "1", "-5"), "invalid opening credit '-5' for open_rural")]
    fn test_convert_invalid_records(#[case] record: CsvRecord, #[case] message: &str) {
        assert_eq!(
            convert_csv_record(record),
            Err(BankError::invalid_step(message))
        );
    }
}
