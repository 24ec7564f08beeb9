//! Processing strategy module for scenario files
//!
//! This module defines the Strategy pattern for the complete scenario
//! pipeline: reading steps from a CSV file and playing them through a
//! [`ScenarioRunner`](crate::core::ScenarioRunner). Both strategies apply
//! steps in file order; they differ only in how the file is read.

use crate::cli::StrategyType;
use crate::core::RunSummary;
use crate::types::BankError;
use std::io::Write;
use std::path::Path;

pub mod r#async;
pub mod sync;

pub use self::r#async::{AsyncProcessingStrategy, BatchConfig};
pub use sync::SyncProcessingStrategy;

/// Processing strategy trait for scenario files
pub trait ProcessingStrategy: Send + Sync {
    /// Read steps from `input_path` and write their output to `output`
    ///
    /// # Errors
    ///
    /// Returns an error if the input file cannot be opened or the output
    /// cannot be written. Invalid rows and failed steps are logged and
    /// skipped.
    fn process(&self, input_path: &Path, output: &mut dyn Write) -> Result<RunSummary, BankError>;
}

/// Create a processing strategy based on the specified strategy type
///
/// `config` is only used by the async strategy.
pub fn create_strategy(
    strategy_type: StrategyType,
    config: Option<BatchConfig>,
) -> Box<dyn ProcessingStrategy> {
    match strategy_type {
        StrategyType::Sync => Box::new(SyncProcessingStrategy),
        StrategyType::Async => {
            let config = config.unwrap_or_default();
            Box::new(AsyncProcessingStrategy::new(config))
        }
    }
}
