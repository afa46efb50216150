//! Errors for the shared primitives and the collaborator boundaries.

use thiserror::Error;

use crate::{script::ScriptType, types::AccountId};

/// Error while parsing an account identity.
#[derive(Debug, Clone, Error)]
pub enum AccountIdError {
    /// The encoded identity has the wrong byte length.
    #[error("account id must be 20 bytes, got {0}")]
    InvalidLength(usize),

    /// The identity is not valid hex.
    #[error("account id is not valid hex")]
    InvalidHex,
}

/// Error validating a user-supplied destination script.
#[derive(Debug, Clone, Error)]
pub enum ScriptError {
    /// The type tag is not one of the supported script kinds.
    #[error("unknown script type tag {0}")]
    UnknownType(u8),

    /// The script payload length does not match the tagged type.
    #[error("{ty} script payload must be {expected} bytes, got {got}")]
    InvalidLength {
        /// The tagged script type.
        ty: ScriptType,
        /// Payload length the type requires.
        expected: usize,
        /// Payload length that was supplied.
        got: usize,
    },
}

/// Failure surfaced by the header relay.
#[derive(Debug, Clone, Error)]
pub enum RelayError {
    /// The fee paid for proof verification is below the relay's requirement.
    #[error("relay fee too low: paid {paid}, required {required}")]
    InsufficientFee {
        /// Fee offered to the relay.
        paid: u64,
        /// Fee the relay demands.
        required: u64,
    },

    /// The relay could not evaluate the query.
    #[error("relay rejected the query: {0}")]
    Query(String),
}

/// Failure surfaced by the locker registry.
#[derive(Debug, Clone, Error)]
pub enum RegistryError {
    /// The registry refused a burn request.
    #[error("registry burn failed: {0}")]
    Burn(String),

    /// The registry refused a slash request for the given locker.
    #[error("slash of locker {locker} failed: {reason}")]
    Slash {
        /// The locker that was to be slashed.
        locker: AccountId,
        /// The registry's stated reason.
        reason: String,
    },
}

/// Failure surfaced by the wrapped-token ledger.
#[derive(Debug, Clone, Error)]
pub enum TokenError {
    /// Pulling tokens from a holder into custody failed.
    #[error("transfer of {amount} from {from} failed: {reason}")]
    TransferInFailed {
        /// The debited holder.
        from: AccountId,
        /// Token amount that was to be pulled.
        amount: u64,
        /// The ledger's stated reason.
        reason: String,
    },

    /// Paying tokens out of custody failed.
    #[error("transfer of {amount} to {to} failed: {reason}")]
    TransferFailed {
        /// The credited holder.
        to: AccountId,
        /// Token amount that was to be paid.
        amount: u64,
        /// The ledger's stated reason.
        reason: String,
    },
}

/// Failure surfaced by the exchange connector.
#[derive(Debug, Clone, Error)]
pub enum ConnectorError {
    /// The connector could not execute the swap at all.
    #[error("swap execution failed: {0}")]
    Swap(String),
}
