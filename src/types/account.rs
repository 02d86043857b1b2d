//! Account-related types for the authorizer
//!
//! This module defines the Account structure that captures spending
//! capacity at a point in the timeline.

/// Account state
///
/// Represents the spending capacity of the single account handled by a
/// timeline. Every accepted outcome carries a snapshot of this struct.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Account {
    /// Whether the card can be used to transact
    ///
    /// Initialization may submit an inactive card. Spends are rejected until
    /// an accepted entry carries an active snapshot.
    pub active_card: bool,

    /// Limit still available for spending, in whole currency units
    pub available_limit: i64,
}

impl Account {
    /// Create a new account snapshot
    ///
    /// # Arguments
    ///
    /// * `active_card` - Whether the card can transact
    /// * `available_limit` - Spending limit in whole currency units
    pub fn new(active_card: bool, available_limit: i64) -> Self {
        Account {
            active_card,
            available_limit,
        }
    }

    /// Derive the state left after an accepted spend of `amount`
    ///
    /// An accepted spend always leaves the card active.
    pub fn debit(&self, amount: i64) -> Self {
        Account {
            active_card: true,
            available_limit: self.available_limit - amount,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::active(Account::new(true, 100), 20, Account::new(true, 80))]
    #[case::whole_limit(Account::new(true, 100), 100, Account::new(true, 0))]
    #[case::zero_amount(Account::new(true, 5), 0, Account::new(true, 5))]
    fn test_debit(#[case] account: Account, #[case] amount: i64, #[case] expected: Account) {
        assert_eq!(account.debit(amount), expected);
    }
}
