//! Asynchronous batch reading strategy
//!
//! This module provides an implementation of the ProcessingStrategy trait
//! that reads input through tokio in batches. Events are still applied to a
//! single timeline one at a time and in arrival order; only the input side is
//! asynchronous. Output is flushed after every batch, and a batch is cut short
//! when no more input is buffered, so piped stdin is answered as it arrives.
//!
//! # Architecture
//!
//! ```text
//! AsyncProcessingStrategy
//!     ├── BatchConfig (batch_size)
//!     ├── AsyncReader (batch line reading)
//!     └── Timeline (sequential authorization)
//! ```

use crate::core::{RuleConfig, Timeline};
use crate::io::async_reader::AsyncReader;
use crate::io::json_format::write_outcome;
use crate::strategy::ProcessingStrategy;
use crate::types::AuthorizerError;
use std::io::Write;
use std::path::Path;
use tokio::io::AsyncRead;

/// Configuration for batch reading
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BatchConfig {
    /// Number of events read per batch
    pub batch_size: usize,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self { batch_size: 1000 }
    }
}

impl BatchConfig {
    /// Create a new BatchConfig with custom values
    ///
    /// A zero batch size falls back to the default with a warning.
    pub fn new(batch_size: usize) -> Self {
        let default = Self::default();

        let batch_size = if batch_size == 0 {
            tracing::warn!(
                "Invalid batch_size ({}), using default ({})",
                batch_size,
                default.batch_size
            );
            default.batch_size
        } else {
            batch_size
        };

        Self { batch_size }
    }
}

/// Asynchronous batch reading strategy
#[derive(Debug, Clone, Default)]
pub struct AsyncProcessingStrategy {
    rules: RuleConfig,
    config: BatchConfig,
}

impl AsyncProcessingStrategy {
    /// Create a new AsyncProcessingStrategy
    ///
    /// # Arguments
    ///
    /// * `rules` - Rule configuration for the timeline
    /// * `config` - BatchConfig with batch_size
    pub fn new(rules: RuleConfig, config: BatchConfig) -> Self {
        Self { rules, config }
    }
}

impl ProcessingStrategy for AsyncProcessingStrategy {
    /// Process events from the input and write one outcome per event
    ///
    /// 1. Creates a current-thread tokio runtime
    /// 2. Opens the input file (or standard input) asynchronously
    /// 3. Reads events in batches using AsyncReader
    /// 4. Processes each event of a batch through the Timeline and writes its outcome
    fn process(
        &self,
        input_path: Option<&Path>,
        output: &mut dyn Write,
    ) -> Result<(), AuthorizerError> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .build()
            .map_err(|e| AuthorizerError::RuntimeError {
                message: format!("Failed to create tokio runtime: {}", e),
            })?;

        runtime.block_on(async {
            let input: Box<dyn AsyncRead + Unpin> = match input_path {
                Some(path) => {
                    let file = tokio::fs::File::open(path).await.map_err(|e| {
                        match e.kind() {
                            std::io::ErrorKind::NotFound => AuthorizerError::FileNotFound {
                                path: path.display().to_string(),
                            },
                            _ => AuthorizerError::from(e),
                        }
                    })?;
                    Box::new(file)
                }
                None => Box::new(tokio::io::stdin()),
            };

            let mut reader = AsyncReader::new(input);
            let mut timeline = Timeline::with_config(self.rules.clone());

            loop {
                let batch = reader.read_batch(self.config.batch_size).await?;

                // An empty batch means the input is exhausted
                if batch.is_empty() {
                    break;
                }

                for event in batch {
                    timeline.process(event);
                    if let Some(outcome) = timeline.last() {
                        write_outcome(outcome, output)?;
                    }
                }
                output.flush()?;
            }

            tracing::debug!(events = timeline.len(), "input exhausted");
            output.flush()?;
            Ok::<(), AuthorizerError>(())
        })
    }
}
