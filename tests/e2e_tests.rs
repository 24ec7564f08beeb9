//! End-to-end integration tests
//!
//! These tests validate the complete scenario pipeline using predefined CSV
//! fixtures. Each test:
//! 1. Reads input.csv from a fixture directory
//! 2. Plays every step through the scenario runner
//! 3. Compares the text output with expected.txt
//!
//! Fixtures are located in tests/fixtures/ and cover:
//! - The savings account walkthrough
//! - Government scheme broadcasts, with and without a subscriber
//! - Insufficient funds, unknown and duplicate accounts
//! - Malformed rows, decimal precision and negative amounts
//! - Balance overflow when opening rural accounts and during scheme deposits
//!
//! Each test is run twice: once with the synchronous reader and once with the async reader.

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use solid_bank::cli::StrategyType;
    use solid_bank::strategy::{create_strategy, BatchConfig};
    use solid_bank::{Scenario, ScenarioRunner};
    use std::fs;
    use std::io::Write;
    use std::path::Path;
    use tempfile::NamedTempFile;

    /// Run a fixture and compare the output with expected.txt
    fn run_test_fixture(fixture_name: &str, strategy_type: StrategyType) {
        let fixture_dir = format!("tests/fixtures/{}", fixture_name);
        let input_path = format!("{}/input.csv", fixture_dir);
        let expected_path = format!("{}/expected.txt", fixture_dir);

        assert!(
            Path::new(&input_path).exists(),
            "Input file not found: {}",
            input_path
        );

        // Small batches so the async reader crosses batch boundaries
        let strategy = create_strategy(strategy_type.clone(), Some(BatchConfig::new(2)));
        let mut temp_output = NamedTempFile::new().expect("Failed to create temp file");

        strategy
            .process(Path::new(&input_path), &mut temp_output)
            .unwrap_or_else(|e| panic!("Failed to process scenario: {}", e));
        temp_output.flush().expect("Failed to flush temp file");

        let actual_output = fs::read_to_string(temp_output.path())
            .unwrap_or_else(|e| panic!("Failed to read temp output file: {}", e));
        let expected_output = fs::read_to_string(&expected_path)
            .unwrap_or_else(|e| panic!("Failed to read expected file {}: {}", expected_path, e));

        assert_eq!(
            actual_output, expected_output,
            "\n\nOutput mismatch for fixture: {} (strategy: {:?})\n\nActual output:\n{}\n\nExpected output:\n{}\n",
            fixture_name, strategy_type, actual_output, expected_output
        );
    }

    #[rstest]
    #[case("demo_scenario")]
    #[case("insufficient_funds")]
    #[case("govt_scheme")]
    #[case("scheme_without_subscriber")]
    #[case("invalid_references")]
    #[case("malformed_data")]
    #[case("precision_testing")]
    #[case("duplicate_accounts")]
    #[case("negative_amounts")]
    #[case("scheme_overflow")]
    fn test_fixtures(
        #[case] fixture: &str,
        #[values(StrategyType::Sync, StrategyType::Async)] strategy: StrategyType,
    ) {
        run_test_fixture(fixture, strategy);
    }

    #[test]
    fn test_built_in_demo_starts_with_savings_walkthrough() {
        let mut output = Vec::new();

        let summary = ScenarioRunner::new()
            .run(Scenario::demo().steps, &mut output)
            .expect("Demo failed");

        let output = String::from_utf8(output).unwrap();
        let expected =
            fs::read_to_string("tests/fixtures/demo_scenario/expected.txt").unwrap();
        assert!(output.starts_with(&expected));
        assert_eq!(summary.failed, 0);
    }
}
