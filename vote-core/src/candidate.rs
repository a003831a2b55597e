//! Candidate model and rating aggregation

use crate::types::{CandidateId, Rating, MAX_RATING};
use serde::{Deserialize, Serialize};

/// A registered candidate accumulating ratings
///
/// Both accumulators are `u64` and monotonically non-decreasing: a vote adds
/// at most `MAX_RATING` to the total, and every accepted vote is backed by a
/// unique in-memory ballot entry, so the counters cannot realistically
/// overflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    /// Candidate id (echo of the registry key; never 0)
    pub id: CandidateId,
    /// Sum of all ratings received
    pub total_rating: u64,
    /// Number of ratings received
    pub vote_count: u64,
}

impl Candidate {
    /// Create a new candidate with no votes
    pub fn new(id: CandidateId) -> Self {
        Self {
            id,
            total_rating: 0,
            vote_count: 0,
        }
    }

    /// Check if any votes have been recorded
    pub fn has_votes(&self) -> bool {
        self.vote_count > 0
    }

    /// Record one rating
    pub fn record_rating(&mut self, rating: Rating) {
        debug_assert!(rating <= MAX_RATING);
        self.total_rating += u64::from(rating);
        self.vote_count += 1;
    }

    /// Average rating, floor-divided (75 and 30 over 2 votes yields 52)
    ///
    /// Returns `None` when no votes have been recorded.
    pub fn average_rating(&self) -> Option<u64> {
        if self.vote_count == 0 {
            return None;
        }
        Some(self.total_rating / self.vote_count)
    }
}
