//! Thread-safe ledger wrapper

use crate::ledger::VotingLedger;
use crate::LedgerResult;
use parking_lot::RwLock;
use std::sync::Arc;
use vote_core::{Address, Candidate, CandidateId, Rating};

/// Thread-safe voting ledger
///
/// Serializes every call on one internal lock: mutating operations hold the
/// write lock for their full duration, reads hold the read lock, and no
/// guard escapes a method. Reads hand back owned copies, never references
/// into the guarded state.
pub struct SharedLedger {
    inner: Arc<RwLock<VotingLedger>>,
}

impl SharedLedger {
    /// Wrap an existing ledger
    pub fn new(ledger: VotingLedger) -> Self {
        Self {
            inner: Arc::new(RwLock::new(ledger)),
        }
    }

    /// Create a fresh ledger owned by `owner`
    pub fn with_owner(owner: Address) -> Self {
        Self::new(VotingLedger::new(owner))
    }

    /// Get the owner identity
    pub fn owner(&self) -> Address {
        self.inner.read().owner()
    }

    /// Whether votes are currently admitted
    pub fn voting_active(&self) -> bool {
        self.inner.read().voting_active()
    }

    /// Number of registered candidates
    pub fn candidate_count(&self) -> u64 {
        self.inner.read().candidate_count()
    }

    /// Look up a candidate
    pub fn get_candidate(&self, id: CandidateId) -> Option<Candidate> {
        self.inner.read().get_candidate(id)
    }

    /// Whether `voter` has already voted for `candidate_id`
    pub fn has_voted(&self, voter: Address, candidate_id: CandidateId) -> bool {
        self.inner.read().has_voted(voter, candidate_id)
    }

    /// Register a new candidate. Owner only.
    pub fn add_candidate(&self, caller: Address, id: CandidateId) -> LedgerResult<()> {
        self.inner.write().add_candidate(caller, id)
    }

    /// Open the voting phase. Owner only.
    pub fn start_voting(&self, caller: Address) -> LedgerResult<()> {
        self.inner.write().start_voting(caller)
    }

    /// Close the voting phase. Owner only.
    pub fn end_voting(&self, caller: Address) -> LedgerResult<()> {
        self.inner.write().end_voting(caller)
    }

    /// Cast one rating for a candidate
    pub fn submit_vote(
        &self,
        caller: Address,
        candidate_id: CandidateId,
        rating: Rating,
    ) -> LedgerResult<()> {
        self.inner.write().submit_vote(caller, candidate_id, rating)
    }

    /// Average rating for a candidate, floor-divided
    pub fn average_rating(&self, candidate_id: CandidateId) -> LedgerResult<u64> {
        self.inner.read().average_rating(candidate_id)
    }
}

impl Clone for SharedLedger {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}
