//! Core voting-ledger data structures
//!
//! This crate provides the fundamental building blocks for the voting ledger:
//! - Basic types (Address, CandidateId, Rating)
//! - Candidate structure and rating aggregation
//! - Core error types

pub mod candidate;
pub mod error;
pub mod types;

// Re-export commonly used types
pub use candidate::*;
pub use error::*;
pub use types::*;
