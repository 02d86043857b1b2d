//! Synchronous processing strategy
//!
//! This module provides a synchronous, single-threaded implementation of the
//! ProcessingStrategy trait. It orchestrates processing by coordinating
//! between the SyncReader (for input) and the Timeline (for business logic).
//!
//! # Design
//!
//! The SyncProcessingStrategy focuses on orchestration, delegating:
//! - Line parsing to `SyncReader` (iterator interface)
//! - Authorization to `Timeline` (business logic)
//! - Output to `json_format::write_outcome` (format handling)

use crate::core::{RuleConfig, Timeline};
use crate::io::json_format::write_outcome;
use crate::io::sync_reader::SyncReader;
use crate::strategy::{skip_or_fail, ProcessingStrategy};
use crate::types::AuthorizerError;
use std::io::Write;
use std::path::Path;

/// Synchronous processing strategy
///
/// # Examples
///
/// ```no_run
/// use authorizer::core::RuleConfig;
/// use authorizer::strategy::{ProcessingStrategy, SyncProcessingStrategy};
/// use std::path::Path;
/// use std::io;
///
/// let strategy = SyncProcessingStrategy::new(RuleConfig::default());
/// let mut output = io::stdout();
///
/// strategy.process(Some(Path::new("operations.jsonl")), &mut output)
///     .expect("Processing failed");
/// ```
#[derive(Debug, Clone, Default)]
pub struct SyncProcessingStrategy {
    rules: RuleConfig,
}

impl SyncProcessingStrategy {
    /// Create a new SyncProcessingStrategy with the given rule configuration
    pub fn new(rules: RuleConfig) -> Self {
        Self { rules }
    }
}

impl ProcessingStrategy for SyncProcessingStrategy {
    /// Process events from the input and write one outcome per event
    ///
    /// 1. Opens a SyncReader over the input file or standard input
    /// 2. Creates a Timeline with the configured rules
    /// 3. Processes each parsed event and writes its outcome immediately
    fn process(
        &self,
        input_path: Option<&Path>,
        output: &mut dyn Write,
    ) -> Result<(), AuthorizerError> {
        let reader = match input_path {
            Some(path) => SyncReader::open(path)?,
            None => SyncReader::stdin(),
        };

        let mut timeline = Timeline::with_config(self.rules.clone());

        for result in reader {
            match result {
                Ok(event) => {
                    timeline.process(event);
                    if let Some(outcome) = timeline.last() {
                        write_outcome(outcome, output)?;
                    }
                }
                Err(e) => skip_or_fail(e)?,
            }
        }

        tracing::debug!(events = timeline.len(), "input exhausted");
        output.flush()?;
        Ok(())
    }
}
