//! Core business logic module
//!
//! This module contains the banking components:
//! - `traits` - Abstractions the components depend on
//! - `executor` - Deposit and withdrawal executors
//! - `manager` - Per-category transaction managers
//! - `report` - Account report generation
//! - `scheme` - Government scheme broadcast
//! - `bank` - Account registry
//! - `runner` - Scenario playback

pub mod bank;
pub mod executor;
pub mod manager;
pub mod report;
pub mod runner;
pub mod scheme;
pub mod traits;

pub use bank::Bank;
pub use executor::{DepositTransactionExecutor, WithdrawalTransactionExecutor};
pub use manager::TransactionManager;
pub use report::{AccountReport, AccountReportGenerator};
pub use runner::{RunSummary, ScenarioRunner};
pub use scheme::{
    open_rural_account, BroadcastError, BroadcastSummary, GovtScheme, Notification,
};
pub use traits::{FnSubscriber, ReportGenerator, SchemeSubscriber, TransactionExecutor};
