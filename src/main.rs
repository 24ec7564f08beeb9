//! Solid Bank CLI
//!
//! Runs a banking scenario and prints every outcome line to stdout.
//!
//! # Usage
//!
//! ```bash
//! cargo run                                   # built-in demo
//! cargo run -- scenario.csv
//! cargo run -- --strategy async --batch-size 500 scenario.csv
//! RUST_LOG=solid_bank=debug cargo run -- scenario.csv
//! ```
//!
//! # Exit Codes
//!
//! - 0: Success (individual failed steps are logged, not fatal)
//! - 1: Error (file not found, output not writable, etc.)

use solid_bank::cli;
use solid_bank::strategy;
use solid_bank::{Scenario, ScenarioRunner};
use std::process;

fn main() {
    let args = cli::parse_args();
    cli::init_tracing(&args.log_level);

    let mut output = std::io::stdout();
    let result = match &args.input_file {
        Some(path) => {
            let config = if matches!(args.strategy, cli::StrategyType::Async) {
                Some(args.to_batch_config())
            } else {
                None
            };
            strategy::create_strategy(args.strategy.clone(), config).process(path, &mut output)
        }
        None => ScenarioRunner::new().run(Scenario::demo().steps, &mut output),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
