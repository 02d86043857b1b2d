//! Authorizer CLI
//!
//! Command-line interface for authorizing account and spend events.
//!
//! # Usage
//!
//! ```bash
//! cargo run < operations.jsonl
//! cargo run -- operations.jsonl
//! cargo run -- --strategy async --batch-size 500 operations.jsonl
//! RUST_LOG=authorizer=info cargo run -- operations.jsonl
//! ```
//!
//! Each input line is processed through the timeline and one output line is
//! written to stdout for it. Logs go to stderr.
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (file not found, file not readable, output not writable, etc.)

use authorizer::cli;
use authorizer::strategy;
use std::process;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = cli::parse_args();

    let strategy = {
        let config = if matches!(args.strategy, cli::StrategyType::Async) {
            Some(args.to_batch_config())
        } else {
            None
        };
        strategy::create_strategy(args.strategy.clone(), args.to_rule_config(), config)
    };

    // Outcomes go to stdout, one line per event
    let mut output = std::io::stdout().lock();
    if let Err(e) = strategy.process(args.input_file.as_deref(), &mut output) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
