//! Rating-based voting ledger state machine
//!
//! This crate provides the ledger core: candidate registry, phase control,
//! vote admission and rating aggregation. Every operation takes the caller
//! identity explicitly and returns a typed result; failed calls leave the
//! ledger untouched.

pub mod access;
pub mod config;
pub mod error;
pub mod ledger;
pub mod shared;

pub use access::AccessControl;
pub use config::LedgerConfig;
pub use error::{LedgerError, LedgerResult};
pub use ledger::VotingLedger;
pub use shared::SharedLedger;
