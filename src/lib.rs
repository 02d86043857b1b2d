//! Authorizer Library
//! # Overview
//!
//! This library authorizes a chronological stream of account and spend events
//! against a fixed rulebook, reporting for every event whether it was accepted
//! and which rules it violated.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (Account, Transaction, Event, Outcome, Violation)
//! - [`cli`] - CLI arguments parsing
//! - [`core`] - Business logic components:
//!   - [`core::timeline`] - Append-only log and event dispatch
//!   - [`core::history`] - Recovery of the last valid account state
//!   - [`core::validation`] - Rulebook evaluation for spends
//! - [`io`] - JSON-lines input and output
//! - [`strategy`] - Sync and async processing pipelines
//!
//! # Rules
//!
//! - **account-already-initialized**: the account was created earlier
//! - **account-not-initialized**: a spend arrived before the account exists (fatal)
//! - **card-not-active**: no valid state has an active card (fatal)
//! - **insufficient-limit**: the spend exceeds the available limit
//! - **high-frequency-small-interval**: 3 accepted spends within 2 minutes
//! - **double-transaction**: an accepted spend at the same merchant within 2 minutes
//!
//! A rejected event never changes the account state.

// Module declarations
pub mod cli;
pub mod core;
pub mod io;
pub mod strategy;
pub mod types;

pub use crate::core::{RuleConfig, Timeline};
pub use io::{parse_line, render_outcome, write_outcome};
pub use types::{Account, AuthorizerError, Event, Outcome, Transaction, Violation};
