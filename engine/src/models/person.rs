//! Person (trip member) model
//!
//! Represents one member of a trip. Each person has:
//! - An opaque identifier, unique within the trip
//! - A display name
//! - An individual budget limit (i64 cents)
//!
//! The identifier is the single canonical key used everywhere in the engine:
//! expense payers, splits, and settlement parties all reference it. Matching
//! by any other field is never attempted.
//!
//! CRITICAL: All money values are i64 (cents)

use serde::{Deserialize, Serialize};

/// A member of a trip.
///
/// # Example
/// ```
/// use trip_settle_core::Person;
///
/// let person = Person::new("sarah".to_string(), "Sarah".to_string())
///     .with_budget_limit(80_000); // $800.00
///
/// assert_eq!(person.id(), "sarah");
/// assert_eq!(person.budget_limit(), 80_000);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    /// Unique identifier within the trip
    id: String,

    /// Display name
    name: String,

    /// Individual spending ceiling (i64 cents, never negative)
    budget_limit: i64,
}

impl Person {
    /// Create a new person with a zero budget limit.
    pub fn new(id: String, name: String) -> Self {
        Self {
            id,
            name,
            budget_limit: 0,
        }
    }

    /// Set the budget limit (builder style).
    ///
    /// # Panics
    /// Panics if `budget_limit` is negative.
    pub fn with_budget_limit(mut self, budget_limit: i64) -> Self {
        assert!(budget_limit >= 0, "budget limit must be non-negative");
        self.budget_limit = budget_limit;
        self
    }

    /// Person identifier
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Display name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Individual spending ceiling (i64 cents)
    pub fn budget_limit(&self) -> i64 {
        self.budget_limit
    }

    /// Overwrite the budget limit. Validation happens at the ledger boundary.
    pub(crate) fn set_budget_limit(&mut self, budget_limit: i64) {
        self.budget_limit = budget_limit;
    }
}
