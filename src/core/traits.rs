//! Core traits for transactions, reports and scheme subscribers
//!
//! Callers depend on these abstractions rather than on the concrete
//! executors, so a manager or a scheme can be handed any implementation.

use crate::core::report::AccountReport;
use crate::types::{Account, BankError, TransactionOutcome};
use rust_decimal::Decimal;
use std::rc::Rc;

/// A balance-mutating operation on a single account
pub trait TransactionExecutor {
    /// Apply the transaction to `account`
    ///
    /// # Errors
    ///
    /// Returns [`BankError::MissingAccount`] when `account` is `None`, in
    /// which case nothing is mutated.
    fn execute_transaction(
        &self,
        account: Option<&mut Account>,
        amount: Decimal,
    ) -> Result<TransactionOutcome, BankError>;
}

/// Read-only textual projection of an account
pub trait ReportGenerator {
    /// Build the report for `account`
    ///
    /// # Errors
    ///
    /// Returns [`BankError::MissingAccount`] when `account` is `None`.
    fn generate_report(&self, account: Option<&Account>) -> Result<AccountReport, BankError>;
}

/// Handler notified once per enrolled account during a scheme broadcast
pub trait SchemeSubscriber {
    /// Subscriber name (for logging)
    fn name(&self) -> &str;

    /// Handle a bulk deposit notification for one account
    ///
    /// The subscriber is expected to perform the deposit itself; the scheme
    /// does not touch the balance.
    fn on_deposit(
        &self,
        account: &mut Account,
        amount: Decimal,
    ) -> Result<TransactionOutcome, BankError>;
}

impl<S: SchemeSubscriber + ?Sized> SchemeSubscriber for Rc<S> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn on_deposit(
        &self,
        account: &mut Account,
        amount: Decimal,
    ) -> Result<TransactionOutcome, BankError> {
        (**self).on_deposit(account, amount)
    }
}

impl<S: SchemeSubscriber + ?Sized> SchemeSubscriber for Box<S> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn on_deposit(
        &self,
        account: &mut Account,
        amount: Decimal,
    ) -> Result<TransactionOutcome, BankError> {
        (**self).on_deposit(account, amount)
    }
}

/// Adapter turning a closure into a [`SchemeSubscriber`]
pub struct FnSubscriber<F> {
    name: String,
    handler: F,
}

impl<F> FnSubscriber<F>
where
    F: Fn(&mut Account, Decimal) -> Result<TransactionOutcome, BankError>,
{
    pub fn new(name: impl Into<String>, handler: F) -> Self {
        FnSubscriber {
            name: name.into(),
            handler,
        }
    }
}

impl<F> SchemeSubscriber for FnSubscriber<F>
where
    F: Fn(&mut Account, Decimal) -> Result<TransactionOutcome, BankError>,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn on_deposit(
        &self,
        account: &mut Account,
        amount: Decimal,
    ) -> Result<TransactionOutcome, BankError> {
        (self.handler)(account, amount)
    }
}
