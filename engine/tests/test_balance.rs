//! Balance aggregation tests
//!
//! Covers the end-to-end path from expenses to net balances, including the
//! feedback loop where confirmed settlements reduce what people owe.
//! CRITICAL: All money values are i64 (cents)

use chrono::NaiveDate;
use trip_settle_core::settlement::{compute_balances, lifecycle, settlement_plan};
use trip_settle_core::{Expense, ExpenseCategory, Person, Split, TripLedger};

// ============================================================================
// Test Helpers
// ============================================================================

fn date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 12).unwrap()
}

fn ledger_with(people: &[(&str, &str)]) -> TripLedger {
    let mut ledger = TripLedger::new();
    for (id, name) in people {
        ledger
            .add_person(Person::new(id.to_string(), name.to_string()))
            .unwrap();
    }
    ledger
}

fn expense(description: &str, amount: i64, paid_by: &str, splits: Vec<Split>) -> Expense {
    Expense::new(
        description.to_string(),
        amount,
        paid_by.to_string(),
        date(),
        ExpenseCategory::Other,
        splits,
    )
}

// ============================================================================
// Aggregation
// ============================================================================

#[test]
fn test_two_people_one_expense() {
    // Alice pays $100.00, split evenly: Alice is owed $50, Bob owes $50
    let mut ledger = ledger_with(&[("alice", "Alice"), ("bob", "Bob")]);
    ledger
        .add_expense(expense(
            "Hotel",
            10_000,
            "alice",
            Split::divide_evenly(10_000, &["alice", "bob"]),
        ))
        .unwrap();

    let balances = compute_balances(&ledger);
    assert_eq!(balances["alice"], 5_000);
    assert_eq!(balances["bob"], -5_000);

    let transfers = settlement_plan(&ledger).unwrap();
    assert_eq!(transfers.len(), 1, "one transfer settles two people");
    assert_eq!(transfers[0].from, "bob");
    assert_eq!(transfers[0].to, "alice");
    assert_eq!(transfers[0].amount, 5_000);
}

#[test]
fn test_three_people_two_expenses() {
    // Expense 1: $90 paid by A, split evenly among A, B, C ($30 each)
    // Expense 2: $60 paid by B, split evenly among A, B, C ($20 each)
    // A = 90 - 30 - 20 = +40; B = 60 - 30 - 20 = +10; C = -50
    let mut ledger = ledger_with(&[("a", "A"), ("b", "B"), ("c", "C")]);
    ledger
        .add_expense(expense(
            "Groceries",
            9_000,
            "a",
            Split::divide_evenly(9_000, &["a", "b", "c"]),
        ))
        .unwrap();
    ledger
        .add_expense(expense(
            "Fuel",
            6_000,
            "b",
            Split::divide_evenly(6_000, &["a", "b", "c"]),
        ))
        .unwrap();

    let balances = compute_balances(&ledger);
    assert_eq!(balances["a"], 4_000);
    assert_eq!(balances["b"], 1_000);
    assert_eq!(balances["c"], -5_000);

    // C must pay out exactly $50, split across both creditors
    let transfers = settlement_plan(&ledger).unwrap();
    assert_eq!(transfers.len(), 2);
    assert_eq!(transfers[0].from, "c");
    assert_eq!(transfers[0].to, "a");
    assert_eq!(transfers[0].amount, 4_000);
    assert_eq!(transfers[1].from, "c");
    assert_eq!(transfers[1].to, "b");
    assert_eq!(transfers[1].amount, 1_000);
    assert_eq!(
        transfers.iter().map(|t| t.amount).sum::<i64>(),
        5_000,
        "total transferred from C equals C's debt"
    );
}

#[test]
fn test_zero_sum_invariant() {
    let mut ledger = ledger_with(&[("a", "A"), ("b", "B"), ("c", "C"), ("d", "D")]);
    ledger
        .add_expense(expense(
            "Apartment",
            100_00,
            "a",
            Split::divide_evenly(100_00, &["a", "b", "c"]),
        ))
        .unwrap();
    ledger
        .add_expense(expense(
            "Tour",
            77_77,
            "d",
            Split::divide_evenly(77_77, &["a", "b", "c", "d"]),
        ))
        .unwrap();

    let balances = compute_balances(&ledger);
    assert_eq!(balances.values().sum::<i64>(), 0);
}

#[test]
fn test_aggregation_is_idempotent() {
    let mut ledger = ledger_with(&[("a", "A"), ("b", "B")]);
    ledger
        .add_expense(expense(
            "Tickets",
            12_345,
            "a",
            Split::divide_evenly(12_345, &["a", "b"]),
        ))
        .unwrap();

    let first = compute_balances(&ledger);
    let second = compute_balances(&ledger);
    assert_eq!(first, second);
}

#[test]
fn test_person_with_no_expenses_is_zero() {
    let mut ledger = ledger_with(&[("a", "A"), ("b", "B"), ("idle", "Idle")]);
    ledger
        .add_expense(expense(
            "Dinner",
            4_000,
            "a",
            Split::divide_evenly(4_000, &["a", "b"]),
        ))
        .unwrap();

    let balances = compute_balances(&ledger);
    assert_eq!(balances["idle"], 0);
    assert_eq!(balances.len(), 3, "every member appears in the vector");
}

#[test]
fn test_removing_expense_removes_its_contribution() {
    let mut ledger = ledger_with(&[("a", "A"), ("b", "B")]);
    let expense_id = ledger
        .add_expense(expense(
            "Dinner",
            4_000,
            "a",
            Split::divide_evenly(4_000, &["a", "b"]),
        ))
        .unwrap();

    assert_eq!(compute_balances(&ledger)["a"], 2_000);

    ledger.remove_expense(&expense_id).unwrap();
    let balances = compute_balances(&ledger);
    assert_eq!(balances["a"], 0);
    assert_eq!(balances["b"], 0);
}

// ============================================================================
// Settlement feedback
// ============================================================================

#[test]
fn test_completed_settlement_clears_balances() {
    let mut ledger = ledger_with(&[("alice", "Alice"), ("bob", "Bob")]);
    ledger
        .add_expense(expense(
            "Hotel",
            10_000,
            "alice",
            Split::divide_evenly(10_000, &["alice", "bob"]),
        ))
        .unwrap();

    // Bob records the $50 payment, Alice confirms it
    let settlement_id = lifecycle::propose(&mut ledger, "bob", "alice", 5_000).unwrap();
    lifecycle::confirm(&mut ledger, "alice", &settlement_id).unwrap();

    let balances = compute_balances(&ledger);
    assert_eq!(balances["alice"], 0);
    assert_eq!(balances["bob"], 0);
    assert!(
        settlement_plan(&ledger).unwrap().is_empty(),
        "nothing left to transfer once the debt is paid"
    );
}

#[test]
fn test_pending_settlement_does_not_affect_balances() {
    let mut ledger = ledger_with(&[("alice", "Alice"), ("bob", "Bob")]);
    ledger
        .add_expense(expense(
            "Hotel",
            10_000,
            "alice",
            Split::divide_evenly(10_000, &["alice", "bob"]),
        ))
        .unwrap();

    lifecycle::propose(&mut ledger, "bob", "alice", 5_000).unwrap();

    let balances = compute_balances(&ledger);
    assert_eq!(balances["alice"], 5_000, "pending payment changes nothing");
    assert_eq!(balances["bob"], -5_000);
}

#[test]
fn test_declined_settlement_does_not_affect_balances() {
    let mut ledger = ledger_with(&[("alice", "Alice"), ("bob", "Bob")]);
    ledger
        .add_expense(expense(
            "Hotel",
            10_000,
            "alice",
            Split::divide_evenly(10_000, &["alice", "bob"]),
        ))
        .unwrap();

    let before = compute_balances(&ledger);

    let settlement_id = lifecycle::propose(&mut ledger, "bob", "alice", 5_000).unwrap();
    lifecycle::decline(&mut ledger, "alice", &settlement_id).unwrap();

    assert_eq!(compute_balances(&ledger), before);
    assert!(ledger.settlement(&settlement_id).unwrap().is_declined());
}

#[test]
fn test_partial_settlement_leaves_remainder() {
    let mut ledger = ledger_with(&[("alice", "Alice"), ("bob", "Bob")]);
    ledger
        .add_expense(expense(
            "Hotel",
            10_000,
            "alice",
            Split::divide_evenly(10_000, &["alice", "bob"]),
        ))
        .unwrap();

    // Bob pays back $30 of the $50 he owes
    let settlement_id = lifecycle::propose(&mut ledger, "bob", "alice", 3_000).unwrap();
    lifecycle::confirm(&mut ledger, "alice", &settlement_id).unwrap();

    let balances = compute_balances(&ledger);
    assert_eq!(balances["alice"], 2_000);
    assert_eq!(balances["bob"], -2_000);

    let transfers = settlement_plan(&ledger).unwrap();
    assert_eq!(transfers.len(), 1);
    assert_eq!(transfers[0].amount, 2_000);
}
