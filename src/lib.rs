//! Solid Bank Library
//! # Overview
//!
//! A small in-memory bank built from layered abstractions: accounts hold
//! state, executors mutate balances, managers bundle executors per account
//! category, report generators project accounts into text, and a government
//! scheme broadcasts bulk deposits to enrolled rural accounts.
//!
//! # Architecture
//!
//! - [`types`] - Core data types (Account, TransactionOutcome, Step, BankError)
//! - [`cli`] - CLI arguments parsing and log setup
//! - [`core`] - Business logic components:
//!   - [`core::executor`] - Deposit and withdrawal executors
//!   - [`core::manager`] - Normal and rural transaction managers
//!   - [`core::report`] - Account reports
//!   - [`core::scheme`] - Government scheme broadcast
//!   - [`core::runner`] - Scenario playback against an account registry
//! - [`io`] - Scenario CSV reading
//! - [`strategy`] - Sync and async scenario processing
//!
//! # Outcomes and Errors
//!
//! - A rejected withdrawal is a normal [`TransactionOutcome`], never an error
//! - An absent account is a [`BankError::MissingAccount`]
//! - A strict broadcast with no subscriber is a [`BankError::NoSubscriber`]

// Module declarations
pub mod cli;
pub mod core;
pub mod io;
pub mod strategy;
pub mod types;

pub use self::core::{
    open_rural_account, AccountReportGenerator, BroadcastError, GovtScheme, ReportGenerator,
    RunSummary, ScenarioRunner, SchemeSubscriber, TransactionExecutor, TransactionManager,
};
pub use types::{
    Account, AccountHandle, AccountKind, AccountNumber, BankError, Channel, Scenario, Step,
    TransactionOutcome,
};
