//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `account`: Account state snapshots
//! - `transaction`: Spends, input events and recorded outcomes
//! - `violation`: Business rule violations
//! - `error`: Error types for the authorizer

pub mod account;
pub mod error;
pub mod transaction;
pub mod violation;

pub use account::Account;
pub use error::AuthorizerError;
pub use transaction::{Event, Outcome, Transaction};
pub use violation::Violation;
