//! Voting ledger state machine

use crate::access::AccessControl;
use crate::{LedgerError, LedgerResult};
use std::collections::{HashMap, HashSet};
use tracing::{debug, info};
use vote_core::{Address, Candidate, CandidateId, Rating, MAX_RATING};

/// Rating-based voting ledger
///
/// Owns the candidate registry, the phase flag and the ballot record. Every
/// operation takes the caller identity explicitly, checks its preconditions
/// before touching any state, and either applies fully or returns a typed
/// failure with the ledger unchanged.
#[derive(Debug, Clone)]
pub struct VotingLedger {
    /// Owner gating for registration and phase control
    access: AccessControl,
    /// Registered candidates keyed by id
    candidates: HashMap<CandidateId, Candidate>,
    /// Whether votes are currently admitted
    voting_active: bool,
    /// (voter, candidate) pairs already cast; append-only
    ballots: HashSet<(Address, CandidateId)>,
}

impl VotingLedger {
    /// Create a new ledger owned by `owner`, with voting inactive and no
    /// candidates registered
    pub fn new(owner: Address) -> Self {
        Self {
            access: AccessControl::new(owner),
            candidates: HashMap::new(),
            voting_active: false,
            ballots: HashSet::new(),
        }
    }

    /// Get the owner identity
    pub fn owner(&self) -> Address {
        self.access.owner()
    }

    /// Whether votes are currently admitted
    pub fn voting_active(&self) -> bool {
        self.voting_active
    }

    /// Number of registered candidates
    ///
    /// External enumeration scans `1..=candidate_count()` and skips ids for
    /// which [`get_candidate`](Self::get_candidate) returns `None`; ids are
    /// not guaranteed dense.
    pub fn candidate_count(&self) -> u64 {
        self.candidates.len() as u64
    }

    /// Look up a candidate, returning an owned copy
    pub fn get_candidate(&self, id: CandidateId) -> Option<Candidate> {
        self.candidates.get(&id).copied()
    }

    /// Whether `voter` has already voted for `candidate_id`
    pub fn has_voted(&self, voter: Address, candidate_id: CandidateId) -> bool {
        self.ballots.contains(&(voter, candidate_id))
    }

    /// Register a new candidate. Owner only.
    ///
    /// Re-registering an existing id is rejected with `AlreadyExists` and
    /// leaves the accumulated totals untouched.
    pub fn add_candidate(&mut self, caller: Address, id: CandidateId) -> LedgerResult<()> {
        self.access.require_owner(caller)?;

        // 0 is the absent sentinel, never a valid id
        if id == 0 {
            return Err(LedgerError::InvalidCandidateId { id });
        }

        if self.candidates.contains_key(&id) {
            return Err(LedgerError::AlreadyExists { id });
        }

        self.candidates.insert(id, Candidate::new(id));
        info!("Candidate {} registered", id);
        Ok(())
    }

    /// Open the voting phase. Owner only, idempotent.
    pub fn start_voting(&mut self, caller: Address) -> LedgerResult<()> {
        self.access.require_owner(caller)?;
        self.voting_active = true;
        info!("Voting started");
        Ok(())
    }

    /// Close the voting phase. Owner only, idempotent.
    pub fn end_voting(&mut self, caller: Address) -> LedgerResult<()> {
        self.access.require_owner(caller)?;
        self.voting_active = false;
        info!("Voting ended");
        Ok(())
    }

    /// Cast one rating for a candidate
    ///
    /// Preconditions are checked strictly in this order: phase active,
    /// rating in range, candidate registered, pair not yet voted. On success
    /// the total, the count and the ballot entry update together.
    pub fn submit_vote(
        &mut self,
        caller: Address,
        candidate_id: CandidateId,
        rating: Rating,
    ) -> LedgerResult<()> {
        if !self.voting_active {
            return Err(LedgerError::VotingInactive);
        }

        if rating > MAX_RATING {
            return Err(LedgerError::InvalidRating { rating });
        }

        let candidate = match self.candidates.get_mut(&candidate_id) {
            Some(candidate) => candidate,
            None => return Err(LedgerError::UnknownCandidate { id: candidate_id }),
        };

        if self.ballots.contains(&(caller, candidate_id)) {
            return Err(LedgerError::DuplicateVote {
                voter: caller,
                id: candidate_id,
            });
        }

        // All preconditions passed; apply the three mutations together.
        candidate.record_rating(rating);
        self.ballots.insert((caller, candidate_id));

        debug!(
            "Vote recorded: {} rated candidate {} at {}",
            caller, candidate_id, rating
        );
        Ok(())
    }

    /// Average rating for a candidate, floor-divided
    pub fn average_rating(&self, candidate_id: CandidateId) -> LedgerResult<u64> {
        let candidate = self
            .candidates
            .get(&candidate_id)
            .ok_or(LedgerError::UnknownCandidate { id: candidate_id })?;

        candidate
            .average_rating()
            .ok_or(LedgerError::NoVotes { id: candidate_id })
    }
}
