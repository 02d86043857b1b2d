//! Processing strategy module
//!
//! This module defines the Strategy pattern for complete processing pipelines,
//! encompassing input reading, parsing, timeline processing and output. This
//! allows different input implementations (synchronous, asynchronous batch)
//! to be selected at runtime. Both strategies drive a single timeline in
//! arrival order.

use crate::cli::StrategyType;
use crate::core::RuleConfig;
use crate::types::AuthorizerError;
use std::io::Write;
use std::path::Path;

pub mod r#async;
pub mod sync;

pub use self::r#async::{AsyncProcessingStrategy, BatchConfig};
pub use sync::SyncProcessingStrategy;

/// Processing strategy trait for complete processing pipelines
///
/// Each strategy reads events from the input, processes them through a
/// timeline and writes one output line per processed event.
pub trait ProcessingStrategy {
    /// Process events from the input and write one outcome per event
    ///
    /// # Arguments
    ///
    /// * `input_path` - Path to the input file, `None` to read standard input
    /// * `output` - Mutable reference to a writer for outputting outcomes
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The input file cannot be opened
    /// - A fatal I/O error occurs during reading or writing
    ///
    /// Malformed records are logged and skipped; they do not cause this
    /// method to return an error.
    fn process(&self, input_path: Option<&Path>, output: &mut dyn Write)
        -> Result<(), AuthorizerError>;
}

/// Create a processing strategy based on the specified strategy type
///
/// # Arguments
///
/// * `strategy_type` - The type of processing strategy to create (Sync or Async)
/// * `rules` - Rule configuration for the timeline
/// * `config` - Optional batch configuration (ignored for sync)
pub fn create_strategy(
    strategy_type: StrategyType,
    rules: RuleConfig,
    config: Option<BatchConfig>,
) -> Box<dyn ProcessingStrategy> {
    match strategy_type {
        StrategyType::Sync => Box::new(SyncProcessingStrategy::new(rules)),
        StrategyType::Async => {
            let config = config.unwrap_or_default();
            Box::new(AsyncProcessingStrategy::new(rules, config))
        }
    }
}

/// Log a record-level error and decide whether processing may continue
///
/// I/O failures are fatal; every other error only skips the record.
pub(crate) fn skip_or_fail(error: AuthorizerError) -> Result<(), AuthorizerError> {
    match error {
        AuthorizerError::IoError { .. } => Err(error),
        other => {
            tracing::warn!("Skipping record: {}", other);
            Ok(())
        }
    }
}
