//! Synchronous processing strategy
//!
//! Streams steps from a [`SyncReader`] straight into a
//! [`ScenarioRunner`], one row at a time.

use crate::core::{RunSummary, ScenarioRunner};
use crate::io::sync_reader::SyncReader;
use crate::strategy::ProcessingStrategy;
use crate::types::BankError;
use std::io::Write;
use std::path::Path;

/// Synchronous processing strategy
///
/// # Examples
///
/// ```no_run
/// use solid_bank::strategy::{ProcessingStrategy, SyncProcessingStrategy};
/// use std::path::Path;
///
/// let mut output = std::io::stdout();
/// SyncProcessingStrategy
///     .process(Path::new("scenario.csv"), &mut output)
///     .expect("Processing failed");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct SyncProcessingStrategy;

impl ProcessingStrategy for SyncProcessingStrategy {
    fn process(&self, input_path: &Path, output: &mut dyn Write) -> Result<RunSummary, BankError> {
        let reader = SyncReader::new(input_path)?;
        let mut runner = ScenarioRunner::new();

        for result in reader {
            match result {
                Ok(step) => runner.process(step, output)?,
                Err(e) => runner.reject(&e),
            }
        }

        output.flush()?;

        let summary = runner.summary();
        tracing::info!(
            applied = summary.applied,
            failed = summary.failed,
            rejected = summary.rejected,
            "Scenario finished"
        );
        Ok(summary)
    }
}
