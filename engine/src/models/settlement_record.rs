//! Settlement record model
//!
//! A settlement record tracks one real-world payment made to pay down a debt
//! suggested by the transfer minimizer. The debtor records the payment, the
//! receiving party ratifies it.
//!
//! # State machine
//!
//! ```text
//! Pending ──confirm──► Completed   (terminal)
//!    └─────decline──► Declined     (terminal)
//! ```
//!
//! Only `Completed` records feed back into balance aggregation. Declined
//! records are retained for the audit trail but never affect balances.
//!
//! CRITICAL: All money values are i64 (cents)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Settlement lifecycle status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SettlementStatus {
    /// Recorded by the debtor, awaiting the receiver's confirmation
    Pending,

    /// Confirmed by the receiver; affects all future balance computations
    Completed {
        /// When the receiver confirmed
        confirmed_at: DateTime<Utc>,
    },

    /// Rejected by the receiver; kept for the audit trail, never affects balances
    Declined {
        /// When the receiver declined
        declined_at: DateTime<Utc>,
    },
}

/// Errors that can occur during settlement record transitions
#[derive(Debug, Error, PartialEq)]
pub enum SettlementRecordError {
    #[error("settlement is already resolved; no transitions out of a terminal state")]
    AlreadyResolved,
}

/// A recorded real-world payment from one person to another.
///
/// # Example
/// ```
/// use trip_settle_core::SettlementRecord;
///
/// let mut record = SettlementRecord::new(
///     "mike".to_string(),
///     "sarah".to_string(),
///     5_000, // $50.00 in cents
/// );
///
/// assert!(record.is_pending());
/// record.confirm().unwrap();
/// assert!(record.is_completed());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettlementRecord {
    /// Unique settlement identifier (UUID)
    id: String,

    /// The debtor: person paying down their debt
    from: String,

    /// The creditor: person receiving the payment
    to: String,

    /// Payment amount (i64 cents)
    amount: i64,

    /// Current lifecycle status
    status: SettlementStatus,

    /// When the payment was recorded
    created_at: DateTime<Utc>,
}

impl SettlementRecord {
    /// Create a new pending settlement record.
    ///
    /// # Panics
    /// Panics if `amount` is not positive or `from == to`. The lifecycle
    /// functions validate user input and return errors before constructing;
    /// reaching these asserts means a caller bug.
    pub fn new(from: String, to: String, amount: i64) -> Self {
        assert!(amount > 0, "settlement amount must be positive");
        assert!(from != to, "cannot settle with yourself");

        Self {
            id: uuid::Uuid::new_v4().to_string(),
            from,
            to,
            amount,
            status: SettlementStatus::Pending,
            created_at: Utc::now(),
        }
    }

    /// Settlement identifier
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The paying (debtor) side
    pub fn from(&self) -> &str {
        &self.from
    }

    /// The receiving (creditor) side
    pub fn to(&self) -> &str {
        &self.to
    }

    /// Payment amount (i64 cents)
    pub fn amount(&self) -> i64 {
        self.amount
    }

    /// Current status
    pub fn status(&self) -> &SettlementStatus {
        &self.status
    }

    /// When the payment was recorded
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Whether the record is awaiting confirmation
    pub fn is_pending(&self) -> bool {
        self.status == SettlementStatus::Pending
    }

    /// Whether the record was confirmed by the receiver
    pub fn is_completed(&self) -> bool {
        matches!(self.status, SettlementStatus::Completed { .. })
    }

    /// Whether the record was declined by the receiver
    pub fn is_declined(&self) -> bool {
        matches!(self.status, SettlementStatus::Declined { .. })
    }

    /// Transition `Pending → Completed`.
    ///
    /// Fails if the record is already in a terminal state.
    pub fn confirm(&mut self) -> Result<(), SettlementRecordError> {
        if !self.is_pending() {
            return Err(SettlementRecordError::AlreadyResolved);
        }
        self.status = SettlementStatus::Completed {
            confirmed_at: Utc::now(),
        };
        Ok(())
    }

    /// Transition `Pending → Declined`.
    ///
    /// Fails if the record is already in a terminal state.
    pub fn decline(&mut self) -> Result<(), SettlementRecordError> {
        if !self.is_pending() {
            return Err(SettlementRecordError::AlreadyResolved);
        }
        self.status = SettlementStatus::Declined {
            declined_at: Utc::now(),
        };
        Ok(())
    }
}
