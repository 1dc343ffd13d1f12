//! Settlement Module
//!
//! The core of the engine: turning a trip's expense history into "who owes
//! whom" and tracking the real-world payments that pay those debts down.
//!
//! Three sub-steps, in dependency order:
//!
//! - **balance**: net balance per person from expenses + completed settlements
//! - **minimize**: greedy minimal transfer list from a balance vector
//! - **lifecycle**: pending → completed/declined tracking of recorded
//!   payments, feeding completed ones back into the next aggregation
//!
//! # Critical Invariants
//!
//! 1. **Zero sum**: a ledger-derived balance vector sums to exactly zero
//! 2. **Derived, never cached**: every read recomputes from the current
//!    ledger; there is no incremental balance mutation path to go stale
//! 3. **Completed only**: pending and declined settlements never move a
//!    balance
//!
//! # Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use trip_settle_core::settlement;
//! use trip_settle_core::{Expense, ExpenseCategory, Person, Split, TripLedger};
//!
//! let mut ledger = TripLedger::new();
//! for (id, name) in [("alice", "Alice"), ("bob", "Bob")] {
//!     ledger
//!         .add_person(Person::new(id.to_string(), name.to_string()))
//!         .unwrap();
//! }
//!
//! ledger
//!     .add_expense(Expense::new(
//!         "Rental car".to_string(),
//!         10_000,
//!         "alice".to_string(),
//!         NaiveDate::from_ymd_opt(2025, 6, 14).unwrap(),
//!         ExpenseCategory::Transportation,
//!         Split::divide_evenly(10_000, &["alice", "bob"]),
//!     ))
//!     .unwrap();
//!
//! let transfers = settlement::settlement_plan(&ledger).unwrap();
//! assert_eq!(transfers.len(), 1);
//! assert_eq!(transfers[0].from, "bob");
//! assert_eq!(transfers[0].to, "alice");
//! assert_eq!(transfers[0].amount, 5_000);
//! ```

pub mod balance;
pub mod lifecycle;
pub mod minimize;

// Re-export public API
pub use balance::{compute_balances, BalanceVector};
pub use lifecycle::LifecycleError;
pub use minimize::{suggest_transfers, ImbalanceError, MinimizerConfig, SuggestedTransfer};

use crate::models::ledger::TripLedger;

/// Aggregate balances and minimize transfers in one step, with the default
/// configuration. Recomputed from the ledger on every call.
///
/// # Errors
///
/// Returns [`ImbalanceError`] if the derived balances do not net to zero
/// within tolerance, which indicates corrupt upstream data (a ledger built
/// through the validating operations cannot produce this).
pub fn settlement_plan(ledger: &TripLedger) -> Result<Vec<SuggestedTransfer>, ImbalanceError> {
    let balances = compute_balances(ledger);
    suggest_transfers(&balances, &MinimizerConfig::default())
}
