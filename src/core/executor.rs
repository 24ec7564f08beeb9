//! Deposit and withdrawal executors
//!
//! Both executors are stateless apart from the [`Channel`] that selects the
//! wording of their outcomes. Balance arithmetic is checked so an overflow
//! leaves the account untouched.

use crate::core::traits::TransactionExecutor;
use crate::types::{Account, BankError, Channel, TransactionOutcome};
use rust_decimal::Decimal;

/// Credits an account unconditionally
///
/// Negative amounts are not rejected; they simply reduce the balance.
#[derive(Debug, Clone, Copy, Default)]
pub struct DepositTransactionExecutor {
    channel: Channel,
}

impl DepositTransactionExecutor {
    pub fn new(channel: Channel) -> Self {
        DepositTransactionExecutor { channel }
    }
}

impl TransactionExecutor for DepositTransactionExecutor {
    fn execute_transaction(
        &self,
        account: Option<&mut Account>,
        amount: Decimal,
    ) -> Result<TransactionOutcome, BankError> {
        let account = account.ok_or_else(|| BankError::missing_account("deposit"))?;

        let balance = account
            .balance()
            .checked_add(amount)
            .ok_or_else(|| BankError::arithmetic_overflow("deposit", account.number()))?;

        account.set_balance(balance);
        tracing::debug!(account = account.number(), %amount, %balance, "Deposit applied");

        Ok(TransactionOutcome::Deposited {
            channel: self.channel,
            account: account.number(),
            amount,
            balance,
        })
    }
}

/// Debits an account when the balance covers the amount
#[derive(Debug, Clone, Copy, Default)]
pub struct WithdrawalTransactionExecutor {
    channel: Channel,
}

impl WithdrawalTransactionExecutor {
    pub fn new(channel: Channel) -> Self {
        WithdrawalTransactionExecutor { channel }
    }
}

impl TransactionExecutor for WithdrawalTransactionExecutor {
    fn execute_transaction(
        &self,
        account: Option<&mut Account>,
        amount: Decimal,
    ) -> Result<TransactionOutcome, BankError> {
        let account = account.ok_or_else(|| BankError::missing_account("withdrawal"))?;

        if account.balance() < amount {
            tracing::debug!(
                account = account.number(),
                %amount,
                balance = %account.balance(),
                "Withdrawal rejected"
            );
            return Ok(TransactionOutcome::InsufficientFunds {
                channel: self.channel,
                account: account.number(),
                amount,
            });
        }

        let balance = account
            .balance()
            .checked_sub(amount)
            .ok_or_else(|| BankError::arithmetic_overflow("withdrawal", account.number()))?;

        account.set_balance(balance);
        tracing::debug!(account = account.number(), %amount, %balance, "Withdrawal applied");

        Ok(TransactionOutcome::Withdrawn {
            channel: self.channel,
            account: account.number(),
            amount,
            balance,
        })
    }
}
