//! Event timeline
//!
//! This module provides the Timeline, the append-only log of outcomes that
//! drives authorization. Every processed event appends exactly one outcome,
//! accepted or rejected, and entries are never mutated or removed.
//!
//! The timeline trusts arrival order. Events are not reordered by their
//! timestamps.

use crate::core::history::last_initialized_state;
use crate::core::validation::{validate, RuleConfig};
use crate::types::{Account, Event, Outcome, Transaction, Violation};

/// Append-only log of processed events
///
/// Owns the ordered sequence of outcomes. It carries no internal
/// synchronization and is driven by a single caller.
#[derive(Debug, Clone, Default)]
pub struct Timeline {
    events: Vec<Outcome>,
    rules: RuleConfig,
}

impl Timeline {
    /// Create an empty timeline with the default rule configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty timeline with a custom rule configuration
    pub fn with_config(rules: RuleConfig) -> Self {
        Timeline {
            events: Vec::new(),
            rules,
        }
    }

    /// Process a single event
    ///
    /// Routes the event to account initialization or spend handling and
    /// appends the resulting outcome.
    ///
    /// # Returns
    ///
    /// The outcome that was appended for this event.
    pub fn process(&mut self, event: Event) -> &Outcome {
        match event {
            Event::Initialization(account) => self.init(account),
            Event::Spend(tx) => self.add(tx),
        }

        let outcome = &self.events[self.events.len() - 1];
        if outcome.is_accepted() {
            tracing::debug!(snapshot = ?outcome.snapshot, "event accepted");
        } else {
            let violations: Vec<&str> = outcome.violations.iter().map(Violation::as_str).collect();
            tracing::info!(?violations, snapshot = ?outcome.snapshot, "event rejected");
        }
        outcome
    }

    /// The most recently appended outcome, or `None` for an empty timeline
    pub fn last(&self) -> Option<&Outcome> {
        self.events.last()
    }

    /// The full ordered log
    pub fn events(&self) -> &[Outcome] {
        &self.events
    }

    /// Number of recorded outcomes
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether no event has been processed yet
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Initialize the account
    ///
    /// Only the first initialization is accepted. Later ones are rejected and
    /// keep the existing state; the submitted account is discarded.
    fn init(&mut self, account: Account) {
        let outcome = match last_initialized_state(&self.events) {
            None => Outcome {
                event: Event::Initialization(account),
                violations: Vec::new(),
                snapshot: Some(account),
            },
            Some(existing) => Outcome {
                event: Event::Initialization(account),
                violations: vec![Violation::AccountAlreadyInitialized],
                snapshot: Some(existing),
            },
        };

        self.events.push(outcome);
    }

    /// Authorize a spend
    ///
    /// A rejected spend keeps the last valid state unchanged. An accepted one
    /// debits the available limit.
    fn add(&mut self, tx: Transaction) {
        let last_state = last_initialized_state(&self.events);
        let available_limit = last_state.map_or(0, |account| account.available_limit);

        let violations = validate(&tx, available_limit, &self.events, &self.rules);

        // Acceptance implies an initialized account, so `last_state` is set
        let snapshot = if violations.is_empty() {
            last_state.map(|account| account.debit(tx.amount))
        } else {
            last_state
        };

        self.events.push(Outcome {
            event: Event::Spend(tx),
            violations,
            snapshot,
        });
    }
}
