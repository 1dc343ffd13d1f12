//! Trip Settle Core - Settlement Engine
//!
//! Expense splitting and debt settlement for group trips.
//!
//! # Architecture
//!
//! - **money**: Cent arithmetic helpers and the settled-tolerance epsilon
//! - **models**: Domain types (Person, Expense, SettlementRecord, TripLedger)
//! - **settlement**: Balance aggregation, transfer minimization, settlement
//!   lifecycle
//! - **budget**: Spending and budget-limit reports
//! - **events**: Ledger event log (notification/audit integration point)
//!
//! # Critical Invariants
//!
//! 1. All money values are i64 (cents)
//! 2. Splits sum exactly to their expense amount, so balances net to zero
//! 3. Balances and transfer suggestions are derived on every read, never
//!    cached or incrementally mutated
//! 4. Only completed settlements feed back into balance aggregation

// Module declarations
pub mod budget;
pub mod events;
pub mod models;
pub mod money;
pub mod settlement;

// Re-exports for convenience
pub use events::{EventLog, LedgerEvent};
pub use models::{
    expense::{Expense, ExpenseCategory, Split},
    ledger::{LedgerError, TripLedger},
    person::Person,
    settlement_record::{SettlementRecord, SettlementRecordError, SettlementStatus},
    snapshot::LedgerSnapshot,
};
pub use settlement::{
    compute_balances, settlement_plan, suggest_transfers, BalanceVector, ImbalanceError,
    LifecycleError, MinimizerConfig, SuggestedTransfer,
};
