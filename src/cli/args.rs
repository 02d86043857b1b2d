use crate::core::RuleConfig;
use crate::strategy::BatchConfig;
use chrono::TimeDelta;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Authorize account events and spends read as JSON lines
#[derive(Parser, Debug)]
#[command(name = "authorizer")]
#[command(about = "Authorize account events and spends read as JSON lines", long_about = None)]
pub struct CliArgs {
    /// Input file with one JSON record per line (standard input when omitted)
    #[arg(value_name = "INPUT", help = "Path to the input file (default: stdin)")]
    pub input_file: Option<PathBuf>,

    /// Input strategy to use for reading records
    #[arg(
        long = "strategy",
        value_name = "STRATEGY",
        default_value = "sync",
        help = "Input strategy: 'sync' for synchronous or 'async' for asynchronous"
    )]
    pub strategy: StrategyType,

    /// Number of records read per batch (async mode only)
    #[arg(
        long = "batch-size",
        value_name = "SIZE",
        help = "Number of records read per batch (default: 1000)"
    )]
    pub batch_size: Option<usize>,

    /// Width of the window used by the frequency and duplicate rules
    #[arg(
        long = "window-seconds",
        value_name = "SECONDS",
        help = "Window for high-frequency and double-transaction rules (default: 120)"
    )]
    pub window_seconds: Option<i64>,

    /// Accepted spends inside the window that trigger high-frequency-small-interval
    #[arg(
        long = "high-frequency-limit",
        value_name = "COUNT",
        help = "Prior spends in the window that trigger high-frequency-small-interval (default: 3)"
    )]
    pub high_frequency_limit: Option<usize>,

    /// Accepted same-merchant spends inside the window that trigger double-transaction
    #[arg(
        long = "double-transaction-limit",
        value_name = "COUNT",
        help = "Prior same-merchant spends in the window that trigger double-transaction (default: 1)"
    )]
    pub double_transaction_limit: Option<usize>,
}

/// Available input strategies
#[derive(Clone, Debug, ValueEnum)]
pub enum StrategyType {
    Sync,
    Async,
}

impl CliArgs {
    /// Create a RuleConfig from CLI arguments
    ///
    /// Missing values fall back to the defaults. Invalid values are reported
    /// by `RuleConfig::new` and replaced with defaults as well.
    pub fn to_rule_config(&self) -> RuleConfig {
        let default = RuleConfig::default();

        if self.window_seconds.is_none()
            && self.high_frequency_limit.is_none()
            && self.double_transaction_limit.is_none()
        {
            return default;
        }

        let window = self
            .window_seconds
            .map(|secs| TimeDelta::try_seconds(secs).unwrap_or(TimeDelta::zero()))
            .unwrap_or(default.window);

        RuleConfig::new(
            window,
            self.high_frequency_limit
                .unwrap_or(default.high_frequency_threshold),
            self.double_transaction_limit
                .unwrap_or(default.double_transaction_threshold),
        )
    }

    /// Create a BatchConfig from CLI arguments
    pub fn to_batch_config(&self) -> BatchConfig {
        match self.batch_size {
            Some(batch_size) => BatchConfig::new(batch_size),
            None => BatchConfig::default(),
        }
    }
}
