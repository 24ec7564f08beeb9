//! Asynchronous processing strategy
//!
//! Reads the scenario file through tokio and csv-async in batches, then
//! applies each batch in order on the same task.
//!
//! ```text
//! AsyncProcessingStrategy
//!     ├── BatchConfig (batch_size)
//!     ├── AsyncReader (batch CSV reading)
//!     └── ScenarioRunner (in-order step playback)
//! ```
//!
//! The runner holds `Rc` handles, so everything runs on a current-thread
//! runtime.

use crate::core::{RunSummary, ScenarioRunner};
use crate::io::async_reader::AsyncReader;
use crate::strategy::ProcessingStrategy;
use crate::types::BankError;
use std::io::Write;
use std::path::Path;

/// Configuration for batch reading
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BatchConfig {
    /// Number of steps read per batch
    pub batch_size: usize,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self { batch_size: 1000 }
    }
}

impl BatchConfig {
    /// Create a BatchConfig, falling back to the default for zero
    pub fn new(batch_size: usize) -> Self {
        let default = Self::default();

        let batch_size = if batch_size == 0 {
            tracing::warn!(
                batch_size,
                default = default.batch_size,
                "Invalid batch_size, using default"
            );
            default.batch_size
        } else {
            batch_size
        };

        Self { batch_size }
    }
}

/// Asynchronous batch-reading strategy
#[derive(Debug, Clone)]
pub struct AsyncProcessingStrategy {
    config: BatchConfig,
}

impl AsyncProcessingStrategy {
    pub fn new(config: BatchConfig) -> Self {
        Self { config }
    }
}

impl ProcessingStrategy for AsyncProcessingStrategy {
    fn process(&self, input_path: &Path, output: &mut dyn Write) -> Result<RunSummary, BankError> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .build()
            .map_err(|e| BankError::IoError {
                message: format!("Failed to create tokio runtime: {}", e),
            })?;

        runtime.block_on(async {
            let file = tokio::fs::File::open(input_path)
                .await
                .map_err(|e| BankError::IoError {
                    message: format!("Failed to open file '{}': {}", input_path.display(), e),
                })?;

            // Wrap tokio file in a compatibility layer for csv-async
            let compat_file = tokio_util::compat::TokioAsyncReadCompatExt::compat(file);
            let mut reader = AsyncReader::new(compat_file);
            let mut runner = ScenarioRunner::new();

            loop {
                let batch = reader.read_batch(self.config.batch_size).await;
                if batch.is_empty() {
                    break;
                }

                for result in batch {
                    match result {
                        Ok(step) => runner.process(step, output)?,
                        Err(e) => runner.reject(&e),
                    }
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
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    fn create_temp_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(content.as_bytes())
            .expect("Failed to write to temp file");
        file.flush().expect("Failed to flush temp file");
        file
    }

    #[test]
    fn test_batch_config_zero_falls_back_to_default() {
        assert_eq!(BatchConfig::new(0), BatchConfig::default());
        assert_eq!(BatchConfig::new(5).batch_size, 5);
    }

    #[test]
    fn test_async_strategy_keeps_order_across_batches() {
        let file = create_temp_csv(
            "op,account,holder,amount,extra\n\
             open,1,A,100,\n\
             withdraw,1,,30,\n\
             withdraw,1,,80,\n\
             deposit,1,,10,\n\
             withdraw,1,,80,\n",
        );
        let strategy = AsyncProcessingStrategy::new(BatchConfig::new(2));
        let mut output = Vec::new();

        let summary = strategy.process(file.path(), &mut output).unwrap();

        assert_eq!(summary, RunSummary { applied: 5, failed: 0, rejected: 0 });
        assert_eq!(
            String::from_utf8(output).unwrap(),
            "Withdrawn $30 from account 1. New balance: $70\n\
             Insufficient funds in account 1 to withdraw $80.\n\
             Deposited $10 into account 1. New balance: $80\n\
             Withdrawn $80 from account 1. New balance: $0\n"
        );
    }

    #[test]
    fn test_async_strategy_counts_rejected_rows() {
        let file = create_temp_csv(
            "op,account,holder,amount,extra\n\
             open,1,A,100,\n\
             deposit,1,,oops,\n\
             transfer,1,,5,\n\
             deposit,2,,5,\n",
        );
        let strategy = AsyncProcessingStrategy::new(BatchConfig::new(2));
        let mut output = Vec::new();

        let summary = strategy.process(file.path(), &mut output).unwrap();

        assert_eq!(summary, RunSummary { applied: 1, failed: 1, rejected: 2 });
        assert!(output.is_empty());
    }

    #[test]
    fn test_async_strategy_handles_missing_file() {
        let strategy = AsyncProcessingStrategy::new(BatchConfig::default());
        let mut output = Vec::new();

        let result = strategy.process(Path::new("nonexistent.csv"), &mut output);

        assert!(matches!(result, Err(BankError::IoError { .. })));
    }
}
