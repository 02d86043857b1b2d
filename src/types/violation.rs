//! Business rule violations
//!
//! Violations are not errors: a rejected event is a normal outcome that is
//! recorded in the timeline and reported to the caller.

use serde::Serialize;
use std::fmt;

/// Rule failure attached to a rejected outcome
///
/// Serializes to the kebab-case tag used in the output records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Violation {
    /// An account was already initialized earlier in the timeline
    AccountAlreadyInitialized,

    /// A spend arrived before any accepted initialization
    AccountNotInitialized,

    /// No accepted entry carries an active card
    CardNotActive,

    /// The spend amount exceeds the available limit
    InsufficientLimit,

    /// Too many accepted spends inside the window
    HighFrequencySmallInterval,

    /// An accepted spend at the same merchant inside the window
    DoubleTransaction,
}

impl Violation {
    /// The tag string of this violation
    pub fn as_str(&self) -> &'static str {
        match self {
            Violation::AccountAlreadyInitialized => "account-already-initialized",
            Violation::AccountNotInitialized => "account-not-initialized",
            Violation::CardNotActive => "card-not-active",
            Violation::InsufficientLimit => "insufficient-limit",
            Violation::HighFrequencySmallInterval => "high-frequency-small-interval",
            Violation::DoubleTransaction => "double-transaction",
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::already_initialized(Violation::AccountAlreadyInitialized, "account-already-initialized")]
    #[case::not_initialized(Violation::AccountNotInitialized, "account-not-initialized")]
    #[case::card_not_active(Violation::CardNotActive, "card-not-active")]
    #[case::insufficient_limit(Violation::InsufficientLimit, "insufficient-limit")]
    #[case::high_frequency(Violation::HighFrequencySmallInterval, "high-frequency-small-interval")]
    #[case::double_transaction(Violation::DoubleTransaction, "double-transaction")]
    fn test_violation_tags(#[case] violation: Violation, #[case] tag: &str) {
        assert_eq!(violation.to_string(), tag);
        assert_eq!(
            serde_json::to_string(&violation).unwrap(),
            format!("\"{}\"", tag)
        );
    }
}
