//! Settlement lifecycle
//!
//! Materializes suggested transfers into tracked settlement records and
//! drives them through their state machine:
//!
//! ```text
//! propose (debtor) ──► Pending ──confirm (receiver)──► Completed
//!                         └───────decline (receiver)──► Declined
//! ```
//!
//! Authorization is party-based: the debtor records the payment they made
//! (`propose`), and only the receiving party may ratify or reject it
//! (`confirm` / `decline`). Each transition logs a ledger event; a
//! notification collaborator picks those up to tell the counter-party.
//!
//! Confirming changes nothing in place — the next balance read folds the
//! completed amount in, because balances are always recomputed from the
//! ledger (see `settlement::balance`).

use thiserror::Error;

use crate::events::LedgerEvent;
use crate::models::ledger::TripLedger;
use crate::models::settlement_record::SettlementRecord;

/// Errors that can occur during settlement lifecycle transitions
#[derive(Debug, Error, PartialEq)]
pub enum LifecycleError {
    #[error("settlement {settlement_id} not found")]
    NotFound { settlement_id: String },

    #[error("{actor} may not act on this settlement; only {required} can")]
    NotAuthorized { actor: String, required: String },

    #[error("settlement {settlement_id} is already resolved")]
    AlreadyResolved { settlement_id: String },

    #[error("person {person_id} is not a member of this trip")]
    UnknownPerson { person_id: String },

    #[error("cannot record a settlement with yourself")]
    SelfSettlement,

    #[error("settlement amount must be positive, got {amount}")]
    NonPositiveAmount { amount: i64 },
}

/// Record a real-world payment from the acting debtor to `to`.
///
/// The actor is the paying side: people record the payments they made, not
/// the ones they are owed. Creates a `Pending` record and returns its id;
/// balances are unaffected until the receiver confirms.
///
/// # Example
///
/// ```rust
/// use trip_settle_core::settlement::lifecycle;
/// use trip_settle_core::{Person, TripLedger};
///
/// let mut ledger = TripLedger::new();
/// ledger
///     .add_person(Person::new("mike".to_string(), "Mike".to_string()))
///     .unwrap();
/// ledger
///     .add_person(Person::new("sarah".to_string(), "Sarah".to_string()))
///     .unwrap();
///
/// let id = lifecycle::propose(&mut ledger, "mike", "sarah", 5_000).unwrap();
/// assert!(ledger.settlement(&id).unwrap().is_pending());
/// ```
pub fn propose(
    ledger: &mut TripLedger,
    actor: &str,
    to: &str,
    amount: i64,
) -> Result<String, LifecycleError> {
    if amount <= 0 {
        return Err(LifecycleError::NonPositiveAmount { amount });
    }
    if actor == to {
        return Err(LifecycleError::SelfSettlement);
    }
    for person_id in [actor, to] {
        if !ledger.has_person(person_id) {
            return Err(LifecycleError::UnknownPerson {
                person_id: person_id.to_string(),
            });
        }
    }

    let record = SettlementRecord::new(actor.to_string(), to.to_string(), amount);
    let settlement_id = record.id().to_string();
    ledger.push_settlement(record);

    ledger.log_event(LedgerEvent::SettlementProposed {
        settlement_id: settlement_id.clone(),
        from: actor.to_string(),
        to: to.to_string(),
        amount,
    });
    Ok(settlement_id)
}

/// Confirm a pending settlement. Receiver only.
///
/// Transitions `Pending → Completed`; the next balance read folds the amount
/// into both parties' balances.
pub fn confirm(
    ledger: &mut TripLedger,
    actor: &str,
    settlement_id: &str,
) -> Result<(), LifecycleError> {
    let record =
        ledger
            .settlement_mut(settlement_id)
            .ok_or_else(|| LifecycleError::NotFound {
                settlement_id: settlement_id.to_string(),
            })?;

    if record.to() != actor {
        return Err(LifecycleError::NotAuthorized {
            actor: actor.to_string(),
            required: record.to().to_string(),
        });
    }

    record
        .confirm()
        .map_err(|_| LifecycleError::AlreadyResolved {
            settlement_id: settlement_id.to_string(),
        })?;

    let (from, to, amount) = (
        record.from().to_string(),
        record.to().to_string(),
        record.amount(),
    );
    ledger.log_event(LedgerEvent::SettlementConfirmed {
        settlement_id: settlement_id.to_string(),
        from,
        to,
        amount,
    });
    Ok(())
}

/// Decline a pending settlement. Receiver only.
///
/// Transitions `Pending → Declined`. The record stays in the ledger for the
/// audit trail but never affects balances.
pub fn decline(
    ledger: &mut TripLedger,
    actor: &str,
    settlement_id: &str,
) -> Result<(), LifecycleError> {
    let record =
        ledger
            .settlement_mut(settlement_id)
            .ok_or_else(|| LifecycleError::NotFound {
                settlement_id: settlement_id.to_string(),
            })?;

    if record.to() != actor {
        return Err(LifecycleError::NotAuthorized {
            actor: actor.to_string(),
            required: record.to().to_string(),
        });
    }

    record
        .decline()
        .map_err(|_| LifecycleError::AlreadyResolved {
            settlement_id: settlement_id.to_string(),
        })?;

    let (from, to, amount) = (
        record.from().to_string(),
        record.to().to_string(),
        record.amount(),
    );
    ledger.log_event(LedgerEvent::SettlementDeclined {
        settlement_id: settlement_id.to_string(),
        from,
        to,
        amount,
    });
    Ok(())
}
