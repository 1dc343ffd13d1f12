//! Trip ledger
//!
//! The complete expense-sharing state for one trip: members, expenses, and
//! settlement records, plus the event log of accepted mutations.
//!
//! The ledger is the validation boundary. Everything it accepts satisfies:
//!
//! 1. **Canonical ids**: every payer, split person, and settlement party
//!    refers to a member of this trip
//! 2. **Exact splits**: each expense's splits sum to exactly its amount in
//!    cents, so balances always sum to zero
//! 3. **Referential integrity**: a member cannot be removed while an expense
//!    or settlement references them
//!
//! Balance vectors and suggested transfers are always derived from the
//! current ledger contents on demand (see `settlement`); nothing here caches
//! a balance.
//!
//! CRITICAL: All money values are i64 (cents)

use std::collections::HashMap;

use thiserror::Error;

use crate::events::{EventLog, LedgerEvent};
use crate::models::expense::Expense;
use crate::models::person::Person;
use crate::models::settlement_record::SettlementRecord;

/// Errors that can occur when mutating the ledger
#[derive(Debug, Error, PartialEq)]
pub enum LedgerError {
    #[error("person {person_id} is already a member of this trip")]
    DuplicatePerson { person_id: String },

    #[error("person {person_id} is not a member of this trip")]
    UnknownPerson { person_id: String },

    #[error("person {person_id} is still referenced by expenses or settlements")]
    PersonInUse { person_id: String },

    #[error("budget limit for {person_id} must be non-negative, got {limit}")]
    NegativeBudgetLimit { person_id: String, limit: i64 },

    #[error("amount must be positive, got {amount}")]
    NonPositiveAmount { amount: i64 },

    #[error("expense must be split among at least one person")]
    EmptySplits,

    #[error("split for {person_id} must be non-negative, got {amount}")]
    NegativeSplit { person_id: String, amount: i64 },

    #[error("splits sum to {split_total} but the expense amount is {amount}")]
    SplitSumMismatch { amount: i64, split_total: i64 },

    #[error("expense {expense_id} already exists")]
    DuplicateExpense { expense_id: String },

    #[error("expense {expense_id} not found")]
    ExpenseNotFound { expense_id: String },

    #[error("settlement {settlement_id} already exists")]
    DuplicateSettlement { settlement_id: String },

    #[error("settlement cannot pay {person_id} back to themselves")]
    SelfSettlement { person_id: String },
}

/// Complete expense-sharing state for one trip.
///
/// # Example
///
/// ```rust
/// use trip_settle_core::{Person, TripLedger};
///
/// let mut ledger = TripLedger::new();
/// ledger
///     .add_person(Person::new("sarah".to_string(), "Sarah".to_string()))
///     .unwrap();
/// ledger
///     .add_person(Person::new("mike".to_string(), "Mike".to_string()))
///     .unwrap();
///
/// assert_eq!(ledger.num_people(), 2);
/// assert!(ledger.expenses().is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct TripLedger {
    /// Trip members, indexed by person id
    people: HashMap<String, Person>,

    /// Accepted expenses, in acceptance order
    expenses: Vec<Expense>,

    /// Settlement records, in proposal order
    settlements: Vec<SettlementRecord>,

    /// Log of accepted mutations (not part of the persisted snapshot)
    events: EventLog,
}

impl TripLedger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    // ------------------------------------------------------------------
    // Members
    // ------------------------------------------------------------------

    /// Add a member to the trip.
    pub fn add_person(&mut self, person: Person) -> Result<(), LedgerError> {
        if self.people.contains_key(person.id()) {
            return Err(LedgerError::DuplicatePerson {
                person_id: person.id().to_string(),
            });
        }

        self.events.log(LedgerEvent::PersonAdded {
            person_id: person.id().to_string(),
            name: person.name().to_string(),
        });
        self.people.insert(person.id().to_string(), person);
        Ok(())
    }

    /// Remove a member.
    ///
    /// Fails with `PersonInUse` while any expense (as payer or split) or any
    /// settlement record still references the person.
    pub fn remove_person(&mut self, person_id: &str) -> Result<Person, LedgerError> {
        if !self.people.contains_key(person_id) {
            return Err(LedgerError::UnknownPerson {
                person_id: person_id.to_string(),
            });
        }

        let referenced_by_expense = self.expenses.iter().any(|e| {
            e.paid_by() == person_id || e.splits().iter().any(|s| s.person_id == person_id)
        });
        let referenced_by_settlement = self
            .settlements
            .iter()
            .any(|s| s.from() == person_id || s.to() == person_id);

        if referenced_by_expense || referenced_by_settlement {
            return Err(LedgerError::PersonInUse {
                person_id: person_id.to_string(),
            });
        }

        let person = self
            .people
            .remove(person_id)
            .ok_or_else(|| LedgerError::UnknownPerson {
                person_id: person_id.to_string(),
            })?;
        self.events.log(LedgerEvent::PersonRemoved {
            person_id: person_id.to_string(),
        });
        Ok(person)
    }

    /// Change a member's budget limit.
    pub fn set_budget_limit(&mut self, person_id: &str, limit: i64) -> Result<(), LedgerError> {
        if limit < 0 {
            return Err(LedgerError::NegativeBudgetLimit {
                person_id: person_id.to_string(),
                limit,
            });
        }

        let person = self
            .people
            .get_mut(person_id)
            .ok_or_else(|| LedgerError::UnknownPerson {
                person_id: person_id.to_string(),
            })?;

        let old_limit = person.budget_limit();
        person.set_budget_limit(limit);
        self.events.log(LedgerEvent::BudgetLimitChanged {
            person_id: person_id.to_string(),
            old_limit,
            new_limit: limit,
        });
        Ok(())
    }

    /// Look up a member
    pub fn person(&self, person_id: &str) -> Option<&Person> {
        self.people.get(person_id)
    }

    /// Whether the given id is a member of this trip
    pub fn has_person(&self, person_id: &str) -> bool {
        self.people.contains_key(person_id)
    }

    /// All members, sorted by id for deterministic iteration
    pub fn people(&self) -> Vec<&Person> {
        let mut people: Vec<&Person> = self.people.values().collect();
        people.sort_by(|a, b| a.id().cmp(b.id()));
        people
    }

    /// Number of members
    pub fn num_people(&self) -> usize {
        self.people.len()
    }

    // ------------------------------------------------------------------
    // Expenses
    // ------------------------------------------------------------------

    /// Accept an expense into the ledger.
    ///
    /// Validates that the amount is positive, the payer and every split
    /// person are members, no split is negative, and the splits sum to
    /// exactly the expense amount in cents. Returns the expense id.
    pub fn add_expense(&mut self, expense: Expense) -> Result<String, LedgerError> {
        if expense.amount() <= 0 {
            return Err(LedgerError::NonPositiveAmount {
                amount: expense.amount(),
            });
        }
        if self.expenses.iter().any(|e| e.id() == expense.id()) {
            return Err(LedgerError::DuplicateExpense {
                expense_id: expense.id().to_string(),
            });
        }
        if !self.people.contains_key(expense.paid_by()) {
            return Err(LedgerError::UnknownPerson {
                person_id: expense.paid_by().to_string(),
            });
        }
        if expense.splits().is_empty() {
            return Err(LedgerError::EmptySplits);
        }
        for split in expense.splits() {
            if !self.people.contains_key(split.person_id.as_str()) {
                return Err(LedgerError::UnknownPerson {
                    person_id: split.person_id.clone(),
                });
            }
            if split.amount < 0 {
                return Err(LedgerError::NegativeSplit {
                    person_id: split.person_id.clone(),
                    amount: split.amount,
                });
            }
        }

        // Exact in cents. Even division never leaves a remainder (see
        // Split::divide_evenly) and the expense entry form rejects manual
        // splits that disagree with the total, so a mismatch is bad data.
        let split_total = expense.split_total();
        if split_total != expense.amount() {
            return Err(LedgerError::SplitSumMismatch {
                amount: expense.amount(),
                split_total,
            });
        }

        let expense_id = expense.id().to_string();
        self.events.log(LedgerEvent::ExpenseAdded {
            expense_id: expense_id.clone(),
            paid_by: expense.paid_by().to_string(),
            amount: expense.amount(),
            category: expense.category(),
        });
        self.expenses.push(expense);
        Ok(expense_id)
    }

    /// Delete an expense, removing it from all future balance computations.
    pub fn remove_expense(&mut self, expense_id: &str) -> Result<Expense, LedgerError> {
        let index = self
            .expenses
            .iter()
            .position(|e| e.id() == expense_id)
            .ok_or_else(|| LedgerError::ExpenseNotFound {
                expense_id: expense_id.to_string(),
            })?;

        let expense = self.expenses.remove(index);
        self.events.log(LedgerEvent::ExpenseRemoved {
            expense_id: expense_id.to_string(),
            amount: expense.amount(),
        });
        Ok(expense)
    }

    /// All accepted expenses, in acceptance order
    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    /// Look up an expense
    pub fn expense(&self, expense_id: &str) -> Option<&Expense> {
        self.expenses.iter().find(|e| e.id() == expense_id)
    }

    // ------------------------------------------------------------------
    // Settlements
    // ------------------------------------------------------------------

    /// All settlement records, in proposal order
    pub fn settlements(&self) -> &[SettlementRecord] {
        &self.settlements
    }

    /// Look up a settlement record
    pub fn settlement(&self, settlement_id: &str) -> Option<&SettlementRecord> {
        self.settlements.iter().find(|s| s.id() == settlement_id)
    }

    /// Completed settlements only; the subset that feeds balance aggregation
    pub fn completed_settlements(&self) -> impl Iterator<Item = &SettlementRecord> {
        self.settlements.iter().filter(|s| s.is_completed())
    }

    pub(crate) fn settlement_mut(&mut self, settlement_id: &str) -> Option<&mut SettlementRecord> {
        self.settlements.iter_mut().find(|s| s.id() == settlement_id)
    }

    /// Append a settlement record without validation.
    ///
    /// For the lifecycle functions, which validate parties and amount before
    /// constructing the record.
    pub(crate) fn push_settlement(&mut self, record: SettlementRecord) {
        self.settlements.push(record);
    }

    /// Insert a settlement record after validating its parties and amount.
    ///
    /// Used by snapshot restore, which replays persisted records in any
    /// status and cannot trust the snapshot's contents.
    pub(crate) fn insert_settlement(
        &mut self,
        record: SettlementRecord,
    ) -> Result<(), LedgerError> {
        if self.settlements.iter().any(|s| s.id() == record.id()) {
            return Err(LedgerError::DuplicateSettlement {
                settlement_id: record.id().to_string(),
            });
        }
        if record.amount() <= 0 {
            return Err(LedgerError::NonPositiveAmount {
                amount: record.amount(),
            });
        }
        if record.from() == record.to() {
            return Err(LedgerError::SelfSettlement {
                person_id: record.from().to_string(),
            });
        }
        for person_id in [record.from(), record.to()] {
            if !self.people.contains_key(person_id) {
                return Err(LedgerError::UnknownPerson {
                    person_id: person_id.to_string(),
                });
            }
        }

        self.push_settlement(record);
        Ok(())
    }

    // ------------------------------------------------------------------
    // Events
    // ------------------------------------------------------------------

    /// Log of accepted mutations
    pub fn events(&self) -> &EventLog {
        &self.events
    }

    pub(crate) fn log_event(&mut self, event: LedgerEvent) {
        self.events.log(event);
    }

    pub(crate) fn clear_events(&mut self) {
        self.events.clear();
    }
}
