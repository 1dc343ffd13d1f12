//! Balance aggregation
//!
//! Reduces the ledger's expenses and completed settlements into one net
//! balance per person:
//!
//! - Positive balance: net creditor, others owe them money
//! - Negative balance: net debtor, they owe money to others
//! - Zero: settled
//!
//! # Algorithm
//!
//! 1. Zero-initialize a balance for every trip member
//! 2. For each expense: credit the payer the full amount
//! 3. For each split: debit the owing person their share
//! 4. For each **completed** settlement: credit the payer (`from`), debit
//!    the receiver (`to`) — the real-world payment reduced that debt
//!
//! # Critical Invariants
//!
//! 1. **Zero sum**: splits sum exactly to their expense amount and
//!    settlements move money between two members, so the balances always
//!    sum to exactly zero
//! 2. **Always derived**: balances are recomputed from the ledger on every
//!    call and never cached or incrementally patched, so a read can never
//!    observe a stale vector
//!
//! Pending and declined settlements are invisible here by design; only a
//! confirmed payment changes what anyone owes.
//!
//! CRITICAL: All money values are i64 (cents)

use std::collections::BTreeMap;

use crate::models::ledger::TripLedger;

/// Net balance per person id (i64 cents).
///
/// BTreeMap so iteration order is deterministic.
pub type BalanceVector = BTreeMap<String, i64>;

/// Compute the net balance of every trip member.
///
/// Pure read over the ledger snapshot; no state changes. The ledger's
/// validation guarantees every id seen here is a member, so the computation
/// cannot encounter an unknown person.
///
/// # Example
///
/// ```rust
/// use chrono::NaiveDate;
/// use trip_settle_core::settlement::compute_balances;
/// use trip_settle_core::{Expense, ExpenseCategory, Person, Split, TripLedger};
///
/// let mut ledger = TripLedger::new();
/// ledger
///     .add_person(Person::new("alice".to_string(), "Alice".to_string()))
///     .unwrap();
/// ledger
///     .add_person(Person::new("bob".to_string(), "Bob".to_string()))
///     .unwrap();
///
/// // Alice fronts $100.00, split evenly
/// ledger
///     .add_expense(Expense::new(
///         "Dinner".to_string(),
///         10_000,
///         "alice".to_string(),
///         NaiveDate::from_ymd_opt(2025, 6, 12).unwrap(),
///         ExpenseCategory::Food,
///         Split::divide_evenly(10_000, &["alice", "bob"]),
///     ))
///     .unwrap();
///
/// let balances = compute_balances(&ledger);
/// assert_eq!(balances["alice"], 5_000); // owed $50.00
/// assert_eq!(balances["bob"], -5_000); // owes $50.00
/// ```
pub fn compute_balances(ledger: &TripLedger) -> BalanceVector {
    let mut balances: BalanceVector = ledger
        .people()
        .iter()
        .map(|p| (p.id().to_string(), 0))
        .collect();

    for expense in ledger.expenses() {
        if let Some(balance) = balances.get_mut(expense.paid_by()) {
            *balance += expense.amount();
        }
        for split in expense.splits() {
            if let Some(balance) = balances.get_mut(split.person_id.as_str()) {
                *balance -= split.amount;
            }
        }
    }

    for settlement in ledger.completed_settlements() {
        if let Some(balance) = balances.get_mut(settlement.from()) {
            *balance += settlement.amount();
        }
        if let Some(balance) = balances.get_mut(settlement.to()) {
            *balance -= settlement.amount();
        }
    }

    balances
}
