//! Spend validation rules
//!
//! A candidate spend is checked against the rulebook in a fixed order:
//!
//! 1. `account-not-initialized` (fatal)
//! 2. `card-not-active` (fatal)
//! 3. `insufficient-limit`
//! 4. `high-frequency-small-interval`
//! 5. `double-transaction`
//!
//! A fatal rule returns immediately with that single violation. Rules 3 to 5
//! are independent and every one that fires is reported, in the order above.

use crate::core::history::{
    count_accepted_spends_within, last_active_state, last_initialized_state,
};
use crate::types::{Outcome, Transaction, Violation};
use chrono::TimeDelta;

/// Thresholds for the windowed rules
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RuleConfig {
    /// Maximum distance between two spends for them to share a window
    pub window: TimeDelta,
    /// Accepted spends inside the window that trigger `high-frequency-small-interval`
    pub high_frequency_threshold: usize,
    /// Accepted same-merchant spends inside the window that trigger `double-transaction`
    pub double_transaction_threshold: usize,
}

impl Default for RuleConfig {
    fn default() -> Self {
        Self {
            window: TimeDelta::minutes(2),
            high_frequency_threshold: 3,
            double_transaction_threshold: 1,
        }
    }
}

impl RuleConfig {
    /// Create a new RuleConfig with custom values
    ///
    /// A non-positive window or a zero threshold falls back to the default
    /// value with a warning.
    pub fn new(
        window: TimeDelta,
        high_frequency_threshold: usize,
        double_transaction_threshold: usize,
    ) -> Self {
        let default = Self::default();

        let window = if window <= TimeDelta::zero() {
            tracing::warn!(
                "Invalid window ({}s), using default ({}s)",
                window.num_seconds(),
                default.window.num_seconds()
            );
            default.window
        } else {
            window
        };

        let high_frequency_threshold = if high_frequency_threshold == 0 {
            tracing::warn!(
                "Invalid high_frequency_threshold ({}), using default ({})",
                high_frequency_threshold,
                default.high_frequency_threshold
            );
            default.high_frequency_threshold
        } else {
            high_frequency_threshold
        };

        let double_transaction_threshold = if double_transaction_threshold == 0 {
            tracing::warn!(
                "Invalid double_transaction_threshold ({}), using default ({})",
                double_transaction_threshold,
                default.double_transaction_threshold
            );
            default.double_transaction_threshold
        } else {
            double_transaction_threshold
        };

        Self {
            window,
            high_frequency_threshold,
            double_transaction_threshold,
        }
    }
}

/// Validate a candidate spend against the history recorded so far
///
/// # Arguments
///
/// * `tx` - The candidate spend (not yet in `history`)
/// * `available_limit` - Limit of the last valid state, 0 if none exists
/// * `history` - The timeline log, oldest entry first
/// * `config` - Window and thresholds for the windowed rules
///
/// # Returns
///
/// The violated rules in evaluation order. Empty when the spend is accepted.
pub fn validate(
    tx: &Transaction,
    available_limit: i64,
    history: &[Outcome],
    config: &RuleConfig,
) -> Vec<Violation> {
    if last_initialized_state(history).is_none() {
        return vec![Violation::AccountNotInitialized];
    }

    if last_active_state(history).is_none() {
        return vec![Violation::CardNotActive];
    }

    let mut violations = Vec::new();

    if tx.amount > available_limit {
        violations.push(Violation::InsufficientLimit);
    }

    if count_accepted_spends_within(history, tx, config.window, false)
        >= config.high_frequency_threshold
    {
        violations.push(Violation::HighFrequencySmallInterval);
    }

    if count_accepted_spends_within(history, tx, config.window, true)
        >= config.double_transaction_threshold
    {
        violations.push(Violation::DoubleTransaction);
    }

    violations
}
