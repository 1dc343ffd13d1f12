//! Budget and spending reports
//!
//! Derived views over the same expense data the settlement engine consumes:
//! how much each person has spent (their split shares, not what they
//! fronted), how that compares to their budget limit, and where the money
//! went by category.
//!
//! Like balances, every report is recomputed from the ledger on demand.
//!
//! CRITICAL: All money values are i64 (cents)

use std::collections::BTreeMap;

use serde::Serialize;

use crate::models::expense::ExpenseCategory;
use crate::models::ledger::TripLedger;

/// How much one person has spent (sum of their split shares).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PersonSpending {
    /// Person id
    pub person_id: String,

    /// Display name
    pub name: String,

    /// Total of this person's splits across all expenses (i64 cents)
    pub spent: i64,
}

/// One person's spending measured against their budget limit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BudgetStatus {
    /// Person id
    pub person_id: String,

    /// Individual spending ceiling (i64 cents)
    pub limit: i64,

    /// Total spent so far (i64 cents)
    pub spent: i64,

    /// Limit minus spent; negative when over budget
    pub remaining: i64,

    /// Whether spending exceeds the limit
    pub over_budget: bool,
}

/// Per-person spending, sorted by person id.
pub fn person_spending(ledger: &TripLedger) -> Vec<PersonSpending> {
    ledger
        .people()
        .iter()
        .map(|person| {
            let spent = ledger
                .expenses()
                .iter()
                .filter_map(|e| e.split_for(person.id()))
                .sum();
            PersonSpending {
                person_id: person.id().to_string(),
                name: person.name().to_string(),
                spent,
            }
        })
        .collect()
}

/// Per-person spending vs budget limit, sorted by person id.
pub fn budget_status(ledger: &TripLedger) -> Vec<BudgetStatus> {
    person_spending(ledger)
        .into_iter()
        .map(|spending| {
            // person_spending only reports current members
            let limit = ledger
                .person(&spending.person_id)
                .map(|p| p.budget_limit())
                .unwrap_or(0);
            BudgetStatus {
                person_id: spending.person_id,
                limit,
                spent: spending.spent,
                remaining: limit - spending.spent,
                over_budget: spending.spent > limit,
            }
        })
        .collect()
}

/// Sum of all members' budget limits (i64 cents).
pub fn trip_budget(ledger: &TripLedger) -> i64 {
    ledger.people().iter().map(|p| p.budget_limit()).sum()
}

/// Sum of all expense amounts (i64 cents).
pub fn total_spent(ledger: &TripLedger) -> i64 {
    ledger.expenses().iter().map(|e| e.amount()).sum()
}

/// Total spent per category. Categories with no expenses are omitted.
pub fn category_totals(ledger: &TripLedger) -> BTreeMap<ExpenseCategory, i64> {
    let mut totals = BTreeMap::new();
    for expense in ledger.expenses() {
        *totals.entry(expense.category()).or_insert(0) += expense.amount();
    }
    totals
}

/// Suggest a new budget limit for someone who has outgrown theirs: spending
/// rounded up to the next whole $100.
///
/// # Example
/// ```
/// use trip_settle_core::budget::suggested_limit;
///
/// assert_eq!(suggested_limit(8_437), 10_000); // $84.37 → $100
/// assert_eq!(suggested_limit(10_000), 10_000); // already round
/// assert_eq!(suggested_limit(10_001), 20_000);
/// ```
pub fn suggested_limit(spent: i64) -> i64 {
    const STEP: i64 = 10_000; // $100 in cents
    if spent <= 0 {
        return 0;
    }
    ((spent + STEP - 1) / STEP) * STEP
}
