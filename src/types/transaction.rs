//! Transaction and event types for the authorizer
//!
//! This module defines the spend record, the tagged input event and the
//! outcome recorded by the timeline for every processed event.

use super::account::Account;
use super::violation::Violation;
use chrono::{DateTime, Utc};

/// A spend observed at a merchant
///
/// Immutable once observed. The amount is validated as non-negative by the
/// parser before a transaction can reach the timeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    /// Name of the merchant that sent the transaction
    pub merchant: String,

    /// Amount in whole currency units
    pub amount: i64,

    /// When the transaction happened, in UTC
    pub time: DateTime<Utc>,
}

impl Transaction {
    /// Create a new transaction
    pub fn new(merchant: impl Into<String>, amount: i64, time: DateTime<Utc>) -> Self {
        Transaction {
            merchant: merchant.into(),
            amount,
            time,
        }
    }
}

/// Input event fed to the timeline
///
/// Exactly one payload is present by construction, so a record carrying
/// neither (or both) an account and a transaction cannot be represented.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Account creation with its initial state
    Initialization(Account),

    /// Spend against the account
    Spend(Transaction),
}

impl Event {
    /// The transaction carried by this event, if it is a spend
    pub fn as_spend(&self) -> Option<&Transaction> {
        match self {
            Event::Spend(tx) => Some(tx),
            Event::Initialization(_) => None,
        }
    }
}

/// One recorded entry of the timeline
///
/// Combines the input event with its verdict and the account state as of
/// this entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    /// The event as received
    pub event: Event,

    /// Violated rules, in evaluation order
    ///
    /// Empty when the event was accepted.
    pub violations: Vec<Violation>,

    /// Account state as of this entry
    ///
    /// For accepted entries this is the new state. For rejected entries it is
    /// the last valid state, or `None` when no valid state exists yet.
    pub snapshot: Option<Account>,
}

impl Outcome {
    /// Whether the event was accepted (no violations)
    pub fn is_accepted(&self) -> bool {
        self.violations.is_empty()
    }
}
