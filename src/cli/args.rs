use crate::strategy::BatchConfig;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Run a banking scenario and print its outcome lines
#[derive(Parser, Debug)]
#[command(name = "solid-bank")]
#[command(about = "Run a banking scenario and print its outcome lines", long_about = None)]
pub struct CliArgs {
    /// Scenario CSV file; the built-in demo runs when omitted
    #[arg(value_name = "INPUT", help = "Path to a scenario CSV file (default: built-in demo)")]
    pub input_file: Option<PathBuf>,

    /// Reading strategy for the scenario file
    #[arg(
        long = "strategy",
        value_name = "STRATEGY",
        default_value = "sync",
        help = "Reading strategy: 'sync' or 'async'"
    )]
    pub strategy: StrategyType,

    /// Number of steps per batch (async mode only)
    #[arg(
        long = "batch-size",
        value_name = "SIZE",
        help = "Number of steps read per batch (default: 1000)"
    )]
    pub batch_size: Option<usize>,

    /// Log filter used when RUST_LOG is not set
    #[arg(
        long = "log-level",
        value_name = "FILTER",
        default_value = "warn",
        help = "Log filter when RUST_LOG is unset (e.g. 'debug', 'solid_bank=info')"
    )]
    pub log_level: String,
}

/// Available reading strategies
#[derive(Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum StrategyType {
    Sync,
    Async,
}

impl CliArgs {
    /// Create a BatchConfig from CLI arguments
    pub fn to_batch_config(&self) -> BatchConfig {
        match self.batch_size {
            Some(batch_size) => BatchConfig::new(batch_size),
            None => BatchConfig::default(),
        }
    }
}
