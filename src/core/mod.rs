//! Core business logic module
//!
//! This module contains the event-timeline engine:
//! - `history` - Backward lookups of the last valid account state
//! - `validation` - Rulebook evaluation for candidate spends
//! - `timeline` - Append-only log and event dispatch

pub mod history;
pub mod timeline;
pub mod validation;

pub use timeline::Timeline;
pub use validation::RuleConfig;
