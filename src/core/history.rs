//! History lookups over the timeline log
//!
//! The log may contain rejected entries, so the current account state is
//! recovered by scanning backward from the newest entry and stopping at the
//! first accepted entry that matches. The log is scanned linearly; it is
//! never sorted or searched by bisection, since the predicates are not
//! monotonic over any ordering of the entries.

use crate::types::{Account, Outcome, Transaction};
use chrono::TimeDelta;

/// Find the most recent accepted snapshot satisfying `predicate`
///
/// # Arguments
///
/// * `history` - The timeline log, oldest entry first
/// * `predicate` - Extra condition on the snapshot
///
/// # Returns
///
/// * `Some(Account)` - Snapshot of the newest matching accepted entry
/// * `None` - If no accepted entry matches
pub fn last_state_matching<P>(history: &[Outcome], predicate: P) -> Option<Account>
where
    P: Fn(&Account) -> bool,
{
    history
        .iter()
        .rev()
        .filter(|outcome| outcome.is_accepted())
        .filter_map(|outcome| outcome.snapshot)
        .find(|account| predicate(account))
}

/// Most recent state of an initialized account
pub fn last_initialized_state(history: &[Outcome]) -> Option<Account> {
    last_state_matching(history, |_| true)
}

/// Most recent state of an initialized account with an active card
pub fn last_active_state(history: &[Outcome]) -> Option<Account> {
    last_state_matching(history, |account| account.active_card)
}

/// Count accepted spends whose time lies within `window` of `tx`
///
/// The difference is taken in both directions, so entries timestamped after
/// `tx` count as well. With `same_merchant` set, only spends at the merchant
/// of `tx` are counted. `tx` itself is not part of `history`.
pub fn count_accepted_spends_within(
    history: &[Outcome],
    tx: &Transaction,
    window: TimeDelta,
    same_merchant: bool,
) -> usize {
    history
        .iter()
        .filter(|outcome| outcome.is_accepted())
        .filter_map(|outcome| outcome.event.as_spend())
        .filter(|prior| !same_merchant || prior.merchant == tx.merchant)
        .filter(|prior| (prior.time - tx.time).abs() <= window)
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Event, Violation};
    use chrono::{DateTime, Utc};

    fn at(time: &str) -> DateTime<Utc> {
        time.parse().unwrap()
    }

    fn init(active_card: bool, limit: i64) -> Outcome {
        let account = Account::new(active_card, limit);
        Outcome {
            event: Event::Initialization(account),
            violations: vec![],
            snapshot: Some(account),
        }
    }

    fn spend(merchant: &str, amount: i64, time: &str, snapshot: Account) -> Outcome {
        Outcome {
            event: Event::Spend(Transaction::new(merchant, amount, at(time))),
            violations: vec![],
            snapshot: Some(snapshot),
        }
    }

    fn rejected(mut outcome: Outcome, violation: Violation) -> Outcome {
        outcome.violations.push(violation);
        outcome
    }

    #[test]
    fn test_empty_history_has_no_state() {
        assert_eq!(last_initialized_state(&[]), None);
        assert_eq!(last_active_state(&[]), None);
    }

    #[test]
    fn test_last_initialized_state_returns_newest_accepted() {
        let history = vec![
            init(true, 100),
            spend("Habbib's", 20, "2019-02-13T10:00:00Z", Account::new(true, 80)),
            spend("Subway", 10, "2019-02-13T10:01:00Z", Account::new(true, 70)),
        ];

        assert_eq!(last_initialized_state(&history), Some(Account::new(true, 70)));
    }

    #[test]
    fn test_rejected_entries_are_skipped() {
        let history = vec![
            init(true, 100),
            spend("Habbib's", 20, "2019-02-13T10:00:00Z", Account::new(true, 80)),
            rejected(
                spend("Subway", 500, "2019-02-13T10:01:00Z", Account::new(true, 999)),
                Violation::InsufficientLimit,
            ),
        ];

        assert_eq!(last_initialized_state(&history), Some(Account::new(true, 80)));
    }

    #[test]
    fn test_rejected_entry_without_snapshot_is_skipped() {
        let history = vec![Outcome {
            event: Event::Spend(Transaction::new("Subway", 5, at("2019-02-13T10:00:00Z"))),
            violations: vec![Violation::AccountNotInitialized],
            snapshot: None,
        }];

        assert_eq!(last_initialized_state(&history), None);
    }

    #[test]
    fn test_last_active_state_requires_active_card() {
        let history = vec![init(false, 100)];

        assert_eq!(last_initialized_state(&history), Some(Account::new(false, 100)));
        assert_eq!(last_active_state(&history), None);
    }

    #[test]
    fn test_count_uses_absolute_difference() {
        let history = vec![
            init(true, 100),
            spend("Habbib's", 1, "2019-02-13T10:00:00Z", Account::new(true, 99)),
            spend("Subway", 1, "2019-02-13T10:03:00Z", Account::new(true, 98)),
            spend("Habbib's", 1, "2019-02-13T10:05:00Z", Account::new(true, 97)),
        ];
        let tx = Transaction::new("Habbib's", 1, at("2019-02-13T10:02:00Z"));
        let window = TimeDelta::minutes(2);

        // 10:00 is exactly two minutes before, 10:03 one minute after, 10:05 too far
        assert_eq!(count_accepted_spends_within(&history, &tx, window, false), 2);
        assert_eq!(count_accepted_spends_within(&history, &tx, window, true), 1);
    }

    #[test]
    fn test_count_ignores_rejected_spends() {
        let history = vec![
            init(true, 10),
            rejected(
                spend("Habbib's", 50, "2019-02-13T10:00:00Z", Account::new(true, 10)),
                Violation::InsufficientLimit,
            ),
        ];
        let tx = Transaction::new("Habbib's", 1, at("2019-02-13T10:00:30Z"));

        assert_eq!(
            count_accepted_spends_within(&history, &tx, TimeDelta::minutes(2), true),
            0
        );
    }
}
