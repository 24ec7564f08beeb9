//! Error types for the bank
//!
//! Errors are designed to be descriptive and user-friendly for CLI output.
//!
//! # Error Categories
//!
//! - **Argument Errors**: an operation was handed no account
//! - **Broadcast Errors**: a strict scheme broadcast had no subscriber
//! - **Account Errors**: overflow, duplicate numbers, re-entrant borrows
//! - **Scenario Input Errors**: file I/O, CSV parsing, unknown steps

use super::account::AccountNumber;
use thiserror::Error;

/// Main error type for the bank
///
/// Insufficient funds is deliberately absent: a rejected withdrawal is a
/// [`TransactionOutcome`](super::TransactionOutcome), not an error.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BankError {
    /// An operation that requires an account was given none
    #[error("{operation} requires an account, but none was supplied")]
    MissingAccount {
        /// Operation that was attempted
        operation: String,
    },

    /// A strict broadcast was requested with no subscriber registered
    #[error("Government scheme has no deposit subscriber")]
    NoSubscriber,

    /// Balance arithmetic would overflow
    ///
    /// The transaction is rejected and the balance is left unchanged.
    #[error("Arithmetic overflow in {operation} for account {account}")]
    ArithmeticOverflow {
        /// Operation that would overflow
        operation: String,
        /// Account number
        account: AccountNumber,
    },

    /// The account is already mutably borrowed further up the call stack
    #[error("Account {account} is busy")]
    AccountBusy {
        /// Account number
        account: AccountNumber,
    },

    /// An account with this number was already opened
    #[error("Account {account} already exists")]
    DuplicateAccount {
        /// Account number
        account: AccountNumber,
    },

    /// I/O error occurred while reading a scenario or writing output
    #[error("I/O error: {message}")]
    IoError {
        /// Description of the I/O error
        message: String,
    },

    /// CSV parsing error occurred
    #[error("CSV parse error{}: {message}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    ParseError {
        /// Line number where the error occurred (if available)
        line: Option<u64>,
        /// Description of the parsing error
        message: String,
    },

    /// A scenario row could not be turned into a step
    #[error("Invalid step: {message}")]
    InvalidStep {
        /// Description of the problem
        message: String,
    },
}

impl From<std::io::Error> for BankError {
    fn from(error: std::io::Error) -> Self {
        BankError::IoError {
            message: error.to_string(),
        }
    }
}

impl From<csv::Error> for BankError {
    fn from(error: csv::Error) -> Self {
        let line = error.position().map(|pos| pos.line());

        BankError::ParseError {
            line,
            message: error.to_string(),
        }
    }
}

impl BankError {
    /// Create a MissingAccount error
    pub fn missing_account(operation: &str) -> Self {
        BankError::MissingAccount {
            operation: operation.to_string(),
        }
    }

    /// Create an ArithmeticOverflow error
    pub fn arithmetic_overflow(operation: &str, account: AccountNumber) -> Self {
        BankError::ArithmeticOverflow {
            operation: operation.to_string(),
            account,
        }
    }

    /// Create an AccountBusy error
    pub fn account_busy(account: AccountNumber) -> Self {
        BankError::AccountBusy { account }
    }

    /// Create a DuplicateAccount error
    pub fn duplicate_account(account: AccountNumber) -> Self {
        BankError::DuplicateAccount { account }
    }

    /// Create an InvalidStep error
    pub fn invalid_step(message: impl Into<String>) -> Self {
        BankError::InvalidStep {
            message: message.into(),
        }
    }
}
