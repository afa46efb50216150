//! Errors for the router's owned state.

use cinder_bridge_primitives::types::{AccountId, RequestIndex};
use thiserror::Error;

/// Error while reading or mutating the burn-request ledger.
#[derive(Debug, Clone, Error)]
pub enum LedgerError {
    /// No claim exists at the given index for the locker.
    #[error("no burn request at index {index} for locker {locker} (have {len})")]
    WrongIndex {
        /// The locker whose claim list was addressed.
        locker: AccountId,
        /// The out-of-range index.
        index: RequestIndex,
        /// Number of claims recorded for the locker.
        len: u64,
    },

    /// The claim was already settled by a proof or a dispute.
    #[error("burn request {index} for locker {locker} is already settled")]
    AlreadySettled {
        /// The locker whose claim was addressed.
        locker: AccountId,
        /// The index of the settled claim.
        index: RequestIndex,
    },
}

/// Result type for ledger operations.
pub type LedgerResult<T> = Result<T, LedgerError>;
