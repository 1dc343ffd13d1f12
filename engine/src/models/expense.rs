//! Expense model
//!
//! Represents one shared cost on a trip. Each expense has:
//! - A payer (the person who fronted the money)
//! - A total amount (i64 cents)
//! - A set of per-person owed shares (splits)
//! - A calendar date and a category
//! - An optional link to a trip itinerary event
//!
//! The splits must sum to exactly the expense amount in cents; the ledger
//! rejects expenses that violate this. `Split::divide_evenly` produces exact
//! even shares, distributing remainder cents deterministically.
//!
//! Expenses are immutable once accepted by the ledger. Deleting one removes
//! it from all future balance computations.
//!
//! CRITICAL: All money values are i64 (cents)

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::money::divide_evenly;

/// Fixed set of expense categories.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum ExpenseCategory {
    Accommodation,
    Transportation,
    Food,
    Entertainment,
    Activities,
    Shopping,
    #[default]
    Other,
}

impl ExpenseCategory {
    /// Human-readable category name
    pub fn as_str(&self) -> &'static str {
        match self {
            ExpenseCategory::Accommodation => "accommodation",
            ExpenseCategory::Transportation => "transportation",
            ExpenseCategory::Food => "food",
            ExpenseCategory::Entertainment => "entertainment",
            ExpenseCategory::Activities => "activities",
            ExpenseCategory::Shopping => "shopping",
            ExpenseCategory::Other => "other",
        }
    }

    /// All categories, in display order
    pub fn all() -> [ExpenseCategory; 7] {
        [
            ExpenseCategory::Accommodation,
            ExpenseCategory::Transportation,
            ExpenseCategory::Food,
            ExpenseCategory::Entertainment,
            ExpenseCategory::Activities,
            ExpenseCategory::Shopping,
            ExpenseCategory::Other,
        ]
    }
}

/// One person's assigned share of an expense.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Split {
    /// Person who owes this share
    pub person_id: String,

    /// Owed amount (i64 cents)
    pub amount: i64,
}

impl Split {
    /// Create a single share.
    pub fn new(person_id: String, amount: i64) -> Self {
        Self { person_id, amount }
    }

    /// Split `amount` evenly among the given people, exact in cents.
    ///
    /// Remainder cents go one each to the earliest participants, so the
    /// shares always sum to exactly `amount`.
    ///
    /// # Panics
    /// Panics if `person_ids` is empty or `amount` is negative.
    ///
    /// # Example
    /// ```
    /// use trip_settle_core::Split;
    ///
    /// let splits = Split::divide_evenly(9_000, &["sarah", "mike", "jessica"]);
    /// assert_eq!(splits.len(), 3);
    /// assert_eq!(splits[0].amount, 3_000);
    /// assert_eq!(splits.iter().map(|s| s.amount).sum::<i64>(), 9_000);
    /// ```
    pub fn divide_evenly(amount: i64, person_ids: &[&str]) -> Vec<Split> {
        assert!(!person_ids.is_empty(), "cannot split among zero people");

        divide_evenly(amount, person_ids.len())
            .into_iter()
            .zip(person_ids)
            .map(|(share, person_id)| Split::new(person_id.to_string(), share))
            .collect()
    }
}

/// A shared cost fronted by one person and owed by several.
///
/// # Example
/// ```
/// use chrono::NaiveDate;
/// use trip_settle_core::{Expense, ExpenseCategory, Split};
///
/// let expense = Expense::new(
///     "Reykjavik apartment".to_string(),
///     10_000, // $100.00 in cents
///     "sarah".to_string(),
///     NaiveDate::from_ymd_opt(2025, 6, 12).unwrap(),
///     ExpenseCategory::Accommodation,
///     Split::divide_evenly(10_000, &["sarah", "mike"]),
/// );
///
/// assert_eq!(expense.amount(), 10_000);
/// assert_eq!(expense.split_total(), 10_000);
/// assert!(!expense.id().is_empty()); // Should have a UUID
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    /// Unique expense identifier (UUID)
    id: String,

    /// What the money was spent on
    description: String,

    /// Total cost (i64 cents)
    amount: i64,

    /// Person who fronted the money
    paid_by: String,

    /// Calendar date the cost was incurred
    date: NaiveDate,

    /// Expense category
    category: ExpenseCategory,

    /// Optional link to a trip itinerary event
    ///
    /// Opaque here; whether the id refers to a real itinerary event is the
    /// persistence layer's concern, not the engine's.
    event_id: Option<String>,

    /// Per-person owed shares
    splits: Vec<Split>,
}

impl Expense {
    /// Create a new expense.
    ///
    /// # Panics
    /// Panics if `amount` is not positive. Split consistency (known people,
    /// shares summing to the amount) is checked by the ledger on insert, not
    /// here.
    pub fn new(
        description: String,
        amount: i64,
        paid_by: String,
        date: NaiveDate,
        category: ExpenseCategory,
        splits: Vec<Split>,
    ) -> Self {
        assert!(amount > 0, "expense amount must be positive");

        Self {
            id: uuid::Uuid::new_v4().to_string(),
            description,
            amount,
            paid_by,
            date,
            category,
            event_id: None,
            splits,
        }
    }

    /// Link this expense to an itinerary event (builder style).
    pub fn with_event(mut self, event_id: String) -> Self {
        self.event_id = Some(event_id);
        self
    }

    /// Expense identifier
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Description
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Total cost (i64 cents)
    pub fn amount(&self) -> i64 {
        self.amount
    }

    /// Person who fronted the money
    pub fn paid_by(&self) -> &str {
        &self.paid_by
    }

    /// Date the cost was incurred
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Category
    pub fn category(&self) -> ExpenseCategory {
        self.category
    }

    /// Linked itinerary event, if any
    pub fn event_id(&self) -> Option<&str> {
        self.event_id.as_deref()
    }

    /// Per-person owed shares
    pub fn splits(&self) -> &[Split] {
        &self.splits
    }

    /// Sum of all split amounts (i64 cents)
    pub fn split_total(&self) -> i64 {
        self.splits.iter().map(|s| s.amount).sum()
    }

    /// This person's share, if they are part of the split
    pub fn split_for(&self, person_id: &str) -> Option<i64> {
        self.splits
            .iter()
            .find(|s| s.person_id == person_id)
            .map(|s| s.amount)
    }
}
