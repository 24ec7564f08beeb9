//! Transaction managers
//!
//! A `TransactionManager` bundles a deposit and a withdrawal executor for
//! one account category. The normal and rural managers share this single
//! implementation and differ only in their [`Channel`].

use crate::core::executor::{DepositTransactionExecutor, WithdrawalTransactionExecutor};
use crate::core::traits::{SchemeSubscriber, TransactionExecutor};
use crate::types::{Account, BankError, Channel, TransactionOutcome};
use rust_decimal::Decimal;

/// Deposit/withdrawal facade for one account category
pub struct TransactionManager {
    channel: Channel,
    deposit: Box<dyn TransactionExecutor>,
    withdrawal: Box<dyn TransactionExecutor>,
}

impl TransactionManager {
    /// Create a manager using the standard executors for `channel`
    pub fn new(channel: Channel) -> Self {
        TransactionManager::with_executors(
            channel,
            Box::new(DepositTransactionExecutor::new(channel)),
            Box::new(WithdrawalTransactionExecutor::new(channel)),
        )
    }

    /// Manager for standard and savings accounts
    pub fn normal() -> Self {
        TransactionManager::new(Channel::Normal)
    }

    /// Manager for rural accounts
    pub fn rural() -> Self {
        TransactionManager::new(Channel::Rural)
    }

    /// Create a manager with injected executors
    pub fn with_executors(
        channel: Channel,
        deposit: Box<dyn TransactionExecutor>,
        withdrawal: Box<dyn TransactionExecutor>,
    ) -> Self {
        TransactionManager {
            channel,
            deposit,
            withdrawal,
        }
    }

    pub fn channel(&self) -> Channel {
        self.channel
    }

    pub fn execute_deposit(
        &self,
        account: Option<&mut Account>,
        amount: Decimal,
    ) -> Result<TransactionOutcome, BankError> {
        self.deposit.execute_transaction(account, amount)
    }

    pub fn execute_withdrawal(
        &self,
        account: Option<&mut Account>,
        amount: Decimal,
    ) -> Result<TransactionOutcome, BankError> {
        self.withdrawal.execute_transaction(account, amount)
    }
}

impl SchemeSubscriber for TransactionManager {
    fn name(&self) -> &str {
        match self.channel {
            Channel::Normal => "normal-deposit",
            Channel::Rural => "rural-deposit",
        }
    }

    fn on_deposit(
        &self,
        account: &mut Account,
        amount: Decimal,
    ) -> Result<TransactionOutcome, BankError> {
        self.execute_deposit(Some(account), amount)
    }
}
