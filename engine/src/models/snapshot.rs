//! Ledger snapshots
//!
//! Serializable capture of a trip ledger's persisted state: members,
//! expenses, and settlement records. The event log is deliberately excluded;
//! it describes mutations, not state.
//!
//! Restoring replays the snapshot through the ledger's validating operations,
//! so a snapshot that references unknown people, breaks the split-sum
//! invariant, or duplicates ids is rejected loudly instead of silently
//! producing a ledger that computes wrong balances.

use serde::{Deserialize, Serialize};

use crate::models::expense::Expense;
use crate::models::ledger::{LedgerError, TripLedger};
use crate::models::person::Person;
use crate::models::settlement_record::SettlementRecord;

/// Point-in-time capture of a ledger's persisted state.
///
/// # Example
/// ```
/// use trip_settle_core::{LedgerSnapshot, Person, TripLedger};
///
/// let mut ledger = TripLedger::new();
/// ledger
///     .add_person(Person::new("sarah".to_string(), "Sarah".to_string()))
///     .unwrap();
///
/// let snapshot = LedgerSnapshot::capture(&ledger);
/// let restored = snapshot.restore().unwrap();
/// assert_eq!(restored.num_people(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerSnapshot {
    /// Trip members, sorted by id
    pub people: Vec<Person>,

    /// Expenses in acceptance order
    pub expenses: Vec<Expense>,

    /// Settlement records in proposal order, whatever their status
    pub settlements: Vec<SettlementRecord>,
}

impl LedgerSnapshot {
    /// Capture the persisted state of a ledger.
    pub fn capture(ledger: &TripLedger) -> Self {
        Self {
            people: ledger.people().into_iter().cloned().collect(),
            expenses: ledger.expenses().to_vec(),
            settlements: ledger.settlements().to_vec(),
        }
    }

    /// Rebuild a ledger from this snapshot, re-validating everything.
    ///
    /// The restored ledger starts with an empty event log: restore is not a
    /// user action, and the mutations it replays were already notified when
    /// they first happened.
    pub fn restore(self) -> Result<TripLedger, LedgerError> {
        let mut ledger = TripLedger::new();

        for person in self.people {
            ledger.add_person(person)?;
        }
        for expense in self.expenses {
            ledger.add_expense(expense)?;
        }
        for settlement in self.settlements {
            ledger.insert_settlement(settlement)?;
        }

        ledger.clear_events();
        Ok(ledger)
    }
}
