//! Transfer minimization
//!
//! Converts a net-balance vector into a short list of pairwise transfers
//! (debtor → creditor) that settles every balance.
//!
//! # Algorithm (greedy two-pointer)
//!
//! 1. Partition people into creditors (balance > ε) and debtors
//!    (balance < −ε), recording absolute amounts; |balance| ≤ ε counts as
//!    settled and is excluded
//! 2. Sort both lists descending by amount (id tiebreak), so the output is
//!    deterministic and large debts pair with large credits first
//! 3. Walk both lists with two pointers, transferring
//!    `min(debtor remainder, creditor remainder)` each step and advancing
//!    whichever side drops to ≤ ε
//!
//! Each step fully resolves at least one party, so the loop terminates and
//! emits at most `debtors + creditors − 1` transfers. That is not always the
//! globally optimal count, but it is minimal for the common case and never
//! pathological.
//!
//! # Integrity
//!
//! A well-formed ledger nets to zero, so debtor and creditor totals match.
//! If they differ by more than ε the input is corrupt upstream; rather than
//! silently leaving a residual party unsettled, the mismatch is logged and
//! returned as an [`ImbalanceError`].
//!
//! CRITICAL: All money values are i64 (cents)

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::money::EPSILON_CENTS;
use crate::settlement::balance::BalanceVector;

/// Configuration for transfer minimization
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MinimizerConfig {
    /// Settled tolerance in cents; balances within ±epsilon are ignored
    pub epsilon: i64,

    /// Sort creditors and debtors descending by amount before pairing.
    /// Not required for correctness, but keeps the transfer list stable
    /// across recomputations.
    pub sort_descending: bool,
}

impl Default for MinimizerConfig {
    fn default() -> Self {
        Self {
            epsilon: EPSILON_CENTS,
            sort_descending: true,
        }
    }
}

/// One suggested transfer: `from` pays `to`.
///
/// Ephemeral, never persisted; recomputed whenever expenses or completed
/// settlements change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestedTransfer {
    /// The debtor: person who should pay
    pub from: String,

    /// The creditor: person who should receive
    pub to: String,

    /// Transfer amount (i64 cents)
    pub amount: i64,
}

/// Debtor and creditor totals disagree: the balance vector does not net to
/// zero within tolerance. Upstream data is inconsistent.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("balances do not net to zero: debtors owe {debtor_total}, creditors are owed {creditor_total}")]
pub struct ImbalanceError {
    /// Sum of all debts (i64 cents, positive)
    pub debtor_total: i64,

    /// Sum of all credits (i64 cents, positive)
    pub creditor_total: i64,
}

/// Compute a minimal list of transfers that settles the given balances.
///
/// # Example
///
/// ```rust
/// use std::collections::BTreeMap;
/// use trip_settle_core::settlement::{suggest_transfers, MinimizerConfig};
///
/// let balances = BTreeMap::from([
///     ("alice".to_string(), 5_000),
///     ("bob".to_string(), -5_000),
/// ]);
///
/// let transfers = suggest_transfers(&balances, &MinimizerConfig::default()).unwrap();
/// assert_eq!(transfers.len(), 1);
/// assert_eq!(transfers[0].from, "bob");
/// assert_eq!(transfers[0].to, "alice");
/// assert_eq!(transfers[0].amount, 5_000);
/// ```
pub fn suggest_transfers(
    balances: &BalanceVector,
    config: &MinimizerConfig,
) -> Result<Vec<SuggestedTransfer>, ImbalanceError> {
    let epsilon = config.epsilon;

    // Partition; store absolute amounts for both sides.
    let mut creditors: Vec<(String, i64)> = Vec::new();
    let mut debtors: Vec<(String, i64)> = Vec::new();
    for (person_id, &balance) in balances {
        if balance > epsilon {
            creditors.push((person_id.clone(), balance));
        } else if balance < -epsilon {
            debtors.push((person_id.clone(), -balance));
        }
    }

    let debtor_total: i64 = debtors.iter().map(|(_, amount)| amount).sum();
    let creditor_total: i64 = creditors.iter().map(|(_, amount)| amount).sum();
    if (debtor_total - creditor_total).abs() > epsilon {
        tracing::warn!(
            debtor_total,
            creditor_total,
            "balance vector does not net to zero; refusing to emit transfers"
        );
        return Err(ImbalanceError {
            debtor_total,
            creditor_total,
        });
    }

    if config.sort_descending {
        creditors.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        debtors.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    }

    let mut transfers = Vec::new();
    let mut i = 0; // debtors
    let mut j = 0; // creditors

    while i < debtors.len() && j < creditors.len() {
        let amount = debtors[i].1.min(creditors[j].1);

        // Guards against residual leftovers; a transfer of a cent or less
        // is noise, not a debt worth chasing.
        if amount > epsilon {
            transfers.push(SuggestedTransfer {
                from: debtors[i].0.clone(),
                to: creditors[j].0.clone(),
                amount,
            });
        }

        debtors[i].1 -= amount;
        creditors[j].1 -= amount;

        if debtors[i].1 <= epsilon {
            i += 1;
        }
        if creditors[j].1 <= epsilon {
            j += 1;
        }
    }

    Ok(transfers)
}
