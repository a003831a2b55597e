//! Ledger genesis configuration

use crate::ledger::VotingLedger;
use crate::{LedgerError, LedgerResult};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tracing::debug;
use vote_core::{Address, CandidateId};

/// Genesis configuration for a voting ledger
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerConfig {
    /// Owner address as a hex string
    pub owner: String,
    /// Candidate ids registered at construction
    pub candidates: Vec<CandidateId>,
}

impl LedgerConfig {
    /// Create a new configuration
    pub fn new(owner: Address, candidates: Vec<CandidateId>) -> Self {
        Self {
            owner: owner.to_string(),
            candidates,
        }
    }

    /// Load configuration from file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> LedgerResult<Self> {
        let content = fs::read_to_string(path.as_ref())
            .map_err(|e| LedgerError::Config(format!("Failed to read config file: {}", e)))?;

        let config: LedgerConfig = serde_json::from_str(&content)?;
        config.validate()?;
        debug!("Ledger config loaded from {}", path.as_ref().display());
        Ok(config)
    }

    /// Save configuration to file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> LedgerResult<()> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path.as_ref(), content)
            .map_err(|e| LedgerError::Config(format!("Failed to write config file: {}", e)))?;
        Ok(())
    }

    /// Parse the configured owner address
    pub fn owner_address(&self) -> LedgerResult<Address> {
        Address::from_hex(&self.owner)
            .map_err(|e| LedgerError::Config(format!("Invalid owner address: {}", e)))
    }

    /// Validate the configuration
    pub fn validate(&self) -> LedgerResult<()> {
        self.owner_address()?;

        let mut seen = HashSet::new();
        for &id in &self.candidates {
            if id == 0 {
                return Err(LedgerError::Config(
                    "Candidate id 0 is reserved".to_string(),
                ));
            }
            if !seen.insert(id) {
                return Err(LedgerError::Config(format!("Duplicate candidate id {}", id)));
            }
        }

        Ok(())
    }

    /// Build a ledger from this configuration
    ///
    /// The configured candidates are registered on behalf of the owner;
    /// voting starts inactive.
    pub fn build(&self) -> LedgerResult<VotingLedger> {
        self.validate()?;

        let owner = self.owner_address()?;
        let mut ledger = VotingLedger::new(owner);
        for &id in &self.candidates {
            ledger.add_candidate(owner, id)?;
        }

        Ok(ledger)
    }
}
