//! Owner access control

use crate::{LedgerError, LedgerResult};
use vote_core::Address;

/// Single privileged identity, fixed at construction
///
/// There is no ownership transfer; the owner set here stays the owner for
/// the lifetime of the ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccessControl {
    owner: Address,
}

impl AccessControl {
    /// Create access control owned by `owner`
    pub fn new(owner: Address) -> Self {
        Self { owner }
    }

    /// Get the owner identity
    pub fn owner(&self) -> Address {
        self.owner
    }

    /// Check whether `caller` is the owner
    pub fn is_owner(&self, caller: Address) -> bool {
        caller == self.owner
    }

    /// Fail with `Unauthorized` unless `caller` is the owner
    pub fn require_owner(&self, caller: Address) -> LedgerResult<()> {
        if !self.is_owner(caller) {
            return Err(LedgerError::Unauthorized { caller });
        }
        Ok(())
    }
}
