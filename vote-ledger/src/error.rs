//! Ledger error types

use thiserror::Error;
use vote_core::{Address, CandidateId, Rating};

/// Ledger error type
///
/// Every variant is recoverable by the caller; a failed operation leaves the
/// ledger untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    /// Caller is not the owner for an owner-only operation
    #[error("Unauthorized account: {caller}")]
    Unauthorized { caller: Address },

    /// Candidate id already registered
    #[error("Candidate {id} already exists")]
    AlreadyExists { id: CandidateId },

    /// Candidate id is the reserved absent sentinel
    #[error("Invalid candidate id: {id}")]
    InvalidCandidateId { id: CandidateId },

    /// Vote cast while the phase is inactive
    #[error("Voting not active")]
    VotingInactive,

    /// Rating outside the admissible range
    #[error("Rating must be 0-100, got {rating}")]
    InvalidRating { rating: Rating },

    /// No candidate registered under this id
    #[error("Invalid candidate: {id}")]
    UnknownCandidate { id: CandidateId },

    /// Caller already voted for this candidate
    #[error("Already voted: {voter} for candidate {id}")]
    DuplicateVote { voter: Address, id: CandidateId },

    /// Average requested for a candidate with zero recorded votes
    #[error("No votes for candidate {id}")]
    NoVotes { id: CandidateId },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<serde_json::Error> for LedgerError {
    fn from(err: serde_json::Error) -> Self {
        LedgerError::Config(err.to_string())
    }
}

/// Result type for ledger operations
pub type LedgerResult<T> = Result<T, LedgerError>;
