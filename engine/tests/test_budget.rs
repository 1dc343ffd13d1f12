//! Budget report tests
//!
//! Spending is measured by split shares (what each person consumed), not by
//! who fronted the money.
//! CRITICAL: All money values are i64 (cents)

use chrono::NaiveDate;
use trip_settle_core::budget;
use trip_settle_core::{Expense, ExpenseCategory, Person, Split, TripLedger};

// ============================================================================
// Test Helpers
// ============================================================================

fn date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 12).unwrap()
}

fn trip() -> TripLedger {
    let mut ledger = TripLedger::new();
    for (id, name, limit) in [("sarah", "Sarah", 80_000), ("mike", "Mike", 10_000)] {
        ledger
            .add_person(Person::new(id.to_string(), name.to_string()).with_budget_limit(limit))
            .unwrap();
    }
    // $90 accommodation paid by Sarah, split evenly
    ledger
        .add_expense(Expense::new(
            "Apartment".to_string(),
            9_000,
            "sarah".to_string(),
            date(),
            ExpenseCategory::Accommodation,
            Split::divide_evenly(9_000, &["sarah", "mike"]),
        ))
        .unwrap();
    // $120 food paid by Mike, Mike eats most of it
    ledger
        .add_expense(Expense::new(
            "Groceries".to_string(),
            12_000,
            "mike".to_string(),
            date(),
            ExpenseCategory::Food,
            vec![
                Split::new("sarah".to_string(), 4_000),
                Split::new("mike".to_string(), 8_000),
            ],
        ))
        .unwrap();
    ledger
}

// ============================================================================
// Reports
// ============================================================================

#[test]
fn test_person_spending_counts_splits_not_fronting() {
    let ledger = trip();
    let spending = budget::person_spending(&ledger);

    assert_eq!(spending.len(), 2);
    // Sorted by id: mike, sarah
    assert_eq!(spending[0].person_id, "mike");
    assert_eq!(spending[0].spent, 4_500 + 8_000);
    assert_eq!(spending[1].person_id, "sarah");
    assert_eq!(spending[1].spent, 4_500 + 4_000);
}

#[test]
fn test_budget_status_flags_overspender() {
    let ledger = trip();
    let statuses = budget::budget_status(&ledger);

    let mike = &statuses[0];
    assert_eq!(mike.person_id, "mike");
    assert_eq!(mike.limit, 10_000);
    assert_eq!(mike.spent, 12_500);
    assert_eq!(mike.remaining, -2_500);
    assert!(mike.over_budget);

    let sarah = &statuses[1];
    assert_eq!(sarah.remaining, 80_000 - 8_500);
    assert!(!sarah.over_budget);
}

#[test]
fn test_trip_totals() {
    let ledger = trip();
    assert_eq!(budget::trip_budget(&ledger), 90_000);
    assert_eq!(budget::total_spent(&ledger), 21_000);
}

#[test]
fn test_category_totals() {
    let ledger = trip();
    let totals = budget::category_totals(&ledger);

    assert_eq!(totals[&ExpenseCategory::Accommodation], 9_000);
    assert_eq!(totals[&ExpenseCategory::Food], 12_000);
    assert!(!totals.contains_key(&ExpenseCategory::Shopping));
}

#[test]
fn test_suggested_limit_covers_overspend() {
    let ledger = trip();
    let statuses = budget::budget_status(&ledger);
    let mike = &statuses[0];

    let suggested = budget::suggested_limit(mike.spent);
    assert_eq!(suggested, 20_000, "$125 spent rounds up to $200");
    assert!(suggested >= mike.spent);
}

#[test]
fn test_empty_ledger_reports() {
    let ledger = TripLedger::new();
    assert!(budget::person_spending(&ledger).is_empty());
    assert_eq!(budget::trip_budget(&ledger), 0);
    assert_eq!(budget::total_spent(&ledger), 0);
    assert!(budget::category_totals(&ledger).is_empty());
}
