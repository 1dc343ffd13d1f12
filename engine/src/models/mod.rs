//! Domain models for the settlement engine

pub mod expense;
pub mod ledger;
pub mod person;
pub mod settlement_record;
pub mod snapshot;

// Re-exports
pub use expense::{Expense, ExpenseCategory, Split};
pub use ledger::{LedgerError, TripLedger};
pub use person::Person;
pub use settlement_record::{SettlementRecord, SettlementRecordError, SettlementStatus};
pub use snapshot::LedgerSnapshot;
