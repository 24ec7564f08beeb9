//! Scenario runner
//!
//! This module provides the `ScenarioRunner`, which plays a sequence of
//! [`Step`]s against a [`Bank`], the normal and rural transaction managers, a
//! report generator and a [`GovtScheme`], writing every outcome line to an
//! output stream.
//!
//! The runner enforces:
//! - Steps are applied strictly in the order given
//! - Deposits and withdrawals go through the manager matching the account kind
//! - An unknown account number is handed to the executors as an absent
//!   account, so the operation fails with `MissingAccount`
//! - Per-step failures are logged and counted; only I/O failures on the
//!   output stream abort the run
//! - A scheme deposit that stops early still writes the outcomes it delivered

use crate::core::bank::Bank;
use crate::core::manager::TransactionManager;
use crate::core::report::AccountReportGenerator;
use crate::core::scheme::{open_rural_account, BroadcastSummary, GovtScheme};
use crate::core::traits::ReportGenerator;
use crate::types::{Account, AccountHandle, AccountNumber, BankError, Step};
use std::cell::RefMut;
use std::io::Write;
use std::rc::Rc;

/// Counts of steps processed by a runner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunSummary {
    /// Steps that completed
    pub applied: usize,
    /// Steps that failed with a recoverable error
    pub failed: usize,
    /// Input rows that never became a step
    pub rejected: usize,
}

/// Plays scenario steps against an in-memory bank
pub struct ScenarioRunner {
    bank: Bank,
    normal: Rc<TransactionManager>,
    rural: Rc<TransactionManager>,
    reports: AccountReportGenerator,
    scheme: GovtScheme,
    summary: RunSummary,
}

impl ScenarioRunner {
    pub fn new() -> Self {
        ScenarioRunner {
            bank: Bank::new(),
            normal: Rc::new(TransactionManager::normal()),
            rural: Rc::new(TransactionManager::rural()),
            reports: AccountReportGenerator,
            scheme: GovtScheme::new(),
            summary: RunSummary::default(),
        }
    }

    pub fn bank(&self) -> &Bank {
        &self.bank
    }

    pub fn scheme(&self) -> &GovtScheme {
        &self.scheme
    }

    pub fn summary(&self) -> RunSummary {
        self.summary
    }

    /// Run every step in order and return the counts
    ///
    /// # Errors
    ///
    /// Only fatal errors (writing to `output`) are returned.
    pub fn run<I>(&mut self, steps: I, output: &mut dyn Write) -> Result<RunSummary, BankError>
    where
        I: IntoIterator<Item = Step>,
    {
        for step in steps {
            self.process(step, output)?;
        }
        Ok(self.summary)
    }

    /// Apply one step, logging and counting recoverable failures
    pub fn process(&mut self, step: Step, output: &mut dyn Write) -> Result<(), BankError> {
        let name = step.name();

        match self.apply(step, output) {
            Ok(()) => {
                self.summary.applied += 1;
                Ok(())
            }
            Err(e @ BankError::IoError { .. }) => Err(e),
            Err(e) => {
                tracing::warn!(step = name, error = %e, "Step failed");
                self.summary.failed += 1;
                Ok(())
            }
        }
    }

    /// Record an input row that could not be turned into a step
    pub fn reject(&mut self, error: &BankError) {
        tracing::warn!(error = %error, "Skipping scenario row");
        self.summary.rejected += 1;
    }

    /// Apply one step, returning any error unchanged
    pub fn apply(&mut self, step: Step, output: &mut dyn Write) -> Result<(), BankError> {
        match step {
            Step::Open {
                account,
                holder,
                balance,
            } => {
                self.bank.open(Account::new(account, holder, balance))?;
            }
            Step::OpenSavings {
                account,
                holder,
                balance,
                interest_rate,
            } => {
                self.bank
                    .open(Account::savings(account, holder, balance, interest_rate))?;
            }
            Step::OpenRural {
                account,
                holder,
                balance,
                opening_credit,
            } => {
                // Check first so a duplicate never reaches the scheme
                if self.bank.contains(account) {
                    return Err(BankError::duplicate_account(account));
                }
                let handle = open_rural_account(
                    account,
                    holder,
                    balance,
                    opening_credit,
                    Some(&mut self.scheme),
                )?;
                self.bank.insert(handle)?;
            }
            Step::Deposit { account, amount } => {
                let handle = self.lookup(account);
                let mut guard = borrow_mut(handle.as_ref(), account)?;
                let manager = self.manager_for(guard.as_deref());
                let outcome = manager.execute_deposit(guard.as_deref_mut(), amount)?;
                writeln!(output, "{}", outcome)?;
            }
            Step::Withdraw { account, amount } => {
                let handle = self.lookup(account);
                let mut guard = borrow_mut(handle.as_ref(), account)?;
                let manager = self.manager_for(guard.as_deref());
                let outcome = manager.execute_withdrawal(guard.as_deref_mut(), amount)?;
                writeln!(output, "{}", outcome)?;
            }
            Step::Report { account } => {
                let handle = self.lookup(account);
                let guard = handle
                    .as_ref()
                    .map(|h| h.try_borrow())
                    .transpose()
                    .map_err(|_| BankError::account_busy(account))?;
                let report = self.reports.generate_report(guard.as_deref())?;
                report.write_to(output)?;
            }
            Step::Subscribe => {
                self.scheme.subscribe(Rc::clone(&self.rural));
            }
            Step::SchemeDeposit { amount } => match self.scheme.deposit_in_all(amount) {
                Ok(summary) => write_outcomes(&summary, output)?,
                Err(failure) => {
                    write_outcomes(&failure.summary, output)?;
                    return Err(failure.error);
                }
            },
        }

        Ok(())
    }

    fn lookup(&self, number: AccountNumber) -> Option<AccountHandle> {
        let handle = self.bank.get(number);
        if handle.is_none() {
            tracing::debug!(account = number, "Unknown account number");
        }
        handle
    }

    fn manager_for(&self, account: Option<&Account>) -> &TransactionManager {
        match account {
            Some(account) if account.is_rural() => self.rural.as_ref(),
            _ => self.normal.as_ref(),
        }
    }
}

impl Default for ScenarioRunner {
    fn default() -> Self {
        Self::new()
    }
}

fn write_outcomes(summary: &BroadcastSummary, output: &mut dyn Write) -> Result<(), BankError> {
    for outcome in summary.outcomes() {
        writeln!(output, "{}", outcome)?;
    }
    Ok(())
}

fn borrow_mut(
    handle: Option<&AccountHandle>,
    number: AccountNumber,
) -> Result<Option<RefMut<'_, Account>>, BankError> {
    handle
        .map(|h| h.try_borrow_mut())
        .transpose()
        .map_err(|_| BankError::account_busy(number))
}
