//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `account`: Account state and kinds
//! - `outcome`: Results of deposits and withdrawals
//! - `step`: Scenario steps issued by a driver
//! - `error`: Error types for the bank

pub mod account;
pub mod error;
pub mod outcome;
pub mod step;

pub use account::{Account, AccountHandle, AccountKind, AccountNumber};
pub use error::BankError;
pub use outcome::{Channel, TransactionOutcome};
pub use step::{Scenario, Step};
