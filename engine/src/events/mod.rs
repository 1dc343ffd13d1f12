//! Ledger event log
//!
//! Every mutation the ledger accepts is recorded as a `LedgerEvent`. The log
//! is the integration point for the surrounding application: a notification
//! collaborator drains it to tell counter-parties about confirmed or declined
//! settlements, and it doubles as an audit trail of what happened and when
//! (in acceptance order).
//!
//! Delivery of notifications is out of scope here; the engine only emits.

use crate::models::expense::ExpenseCategory;

/// A state change accepted by the ledger.
#[derive(Debug, Clone, PartialEq)]
pub enum LedgerEvent {
    /// A member joined the trip
    PersonAdded { person_id: String, name: String },

    /// A member left the trip (only possible while nothing references them)
    PersonRemoved { person_id: String },

    /// A member's budget limit changed
    BudgetLimitChanged {
        person_id: String,
        old_limit: i64,
        new_limit: i64,
    },

    /// An expense was accepted into the ledger
    ExpenseAdded {
        expense_id: String,
        paid_by: String,
        amount: i64,
        category: ExpenseCategory,
    },

    /// An expense was deleted; it no longer affects balances
    ExpenseRemoved { expense_id: String, amount: i64 },

    /// A debtor recorded a real-world payment, awaiting confirmation
    SettlementProposed {
        settlement_id: String,
        from: String,
        to: String,
        amount: i64,
    },

    /// The receiver confirmed a settlement; it now affects balances
    SettlementConfirmed {
        settlement_id: String,
        from: String,
        to: String,
        amount: i64,
    },

    /// The receiver declined a settlement; balances are unaffected
    SettlementDeclined {
        settlement_id: String,
        from: String,
        to: String,
        amount: i64,
    },
}

impl LedgerEvent {
    /// Get event type as string (for filtering)
    pub fn event_type(&self) -> &'static str {
        match self {
            LedgerEvent::PersonAdded { .. } => "PersonAdded",
            LedgerEvent::PersonRemoved { .. } => "PersonRemoved",
            LedgerEvent::BudgetLimitChanged { .. } => "BudgetLimitChanged",
            LedgerEvent::ExpenseAdded { .. } => "ExpenseAdded",
            LedgerEvent::ExpenseRemoved { .. } => "ExpenseRemoved",
            LedgerEvent::SettlementProposed { .. } => "SettlementProposed",
            LedgerEvent::SettlementConfirmed { .. } => "SettlementConfirmed",
            LedgerEvent::SettlementDeclined { .. } => "SettlementDeclined",
        }
    }

    /// Get settlement ID if the event relates to a settlement
    pub fn settlement_id(&self) -> Option<&str> {
        match self {
            LedgerEvent::SettlementProposed { settlement_id, .. }
            | LedgerEvent::SettlementConfirmed { settlement_id, .. }
            | LedgerEvent::SettlementDeclined { settlement_id, .. } => Some(settlement_id),
            _ => None,
        }
    }

    /// Whether the event concerns the given person (as member, payer, or
    /// settlement party). This is what a notification collaborator filters on.
    pub fn concerns(&self, person_id: &str) -> bool {
        match self {
            LedgerEvent::PersonAdded { person_id: id, .. }
            | LedgerEvent::PersonRemoved { person_id: id }
            | LedgerEvent::BudgetLimitChanged { person_id: id, .. } => id == person_id,
            LedgerEvent::ExpenseAdded { paid_by, .. } => paid_by == person_id,
            LedgerEvent::ExpenseRemoved { .. } => false,
            LedgerEvent::SettlementProposed { from, to, .. }
            | LedgerEvent::SettlementConfirmed { from, to, .. }
            | LedgerEvent::SettlementDeclined { from, to, .. } => {
                from == person_id || to == person_id
            }
        }
    }
}

/// Event log for storing and querying ledger events.
///
/// This is a simple wrapper around Vec<LedgerEvent> with convenience methods.
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    events: Vec<LedgerEvent>,
}

impl EventLog {
    /// Create a new empty event log
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Add an event to the log
    pub fn log(&mut self, event: LedgerEvent) {
        self.events.push(event);
    }

    /// Get the number of events logged
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Check if the log is empty
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Get all events, in acceptance order
    pub fn events(&self) -> &[LedgerEvent] {
        &self.events
    }

    /// Get events of a specific type
    pub fn events_of_type(&self, event_type: &str) -> Vec<&LedgerEvent> {
        self.events
            .iter()
            .filter(|e| e.event_type() == event_type)
            .collect()
    }

    /// Get events concerning a specific person
    pub fn events_for_person(&self, person_id: &str) -> Vec<&LedgerEvent> {
        self.events
            .iter()
            .filter(|e| e.concerns(person_id))
            .collect()
    }

    /// Clear all events
    pub fn clear(&mut self) {
        self.events.clear();
    }
}
