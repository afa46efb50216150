//! Error types for router operations.

use bitcoin::Txid;
use cinder_bridge_db::errors::LedgerError;
use cinder_bridge_params::errors::ParamsError;
use cinder_bridge_primitives::{
    errors::{ConnectorError, RegistryError, RelayError, ScriptError, TokenError},
    types::RequestIndex,
};
use thiserror::Error;

/// Everything the router can reject a call with.
///
/// Validation failures come first; the tail wraps errors surfaced by the collaborators the
/// router consults.
#[derive(Debug, Error)]
pub enum RouterError {
    /// The destination script failed validation.
    #[error("invalid destination script: {0}")]
    InvalidScript(#[from] ScriptError),

    /// The amount is too small to survive the configured fees.
    #[error("amount {amount} does not cover the bitcoin fee requirement of {fee}")]
    LowAmount {
        /// Amount offered by the caller.
        amount: u64,
        /// Minimum the call required.
        fee: u64,
    },

    /// No registered locker owns the given locking script.
    #[error("no registered locker owns the given locking script")]
    NotLocker,

    /// A payment transaction must carry a zero locktime.
    #[error("payment transaction locktime must be zero")]
    NonZeroLockTime,

    /// The claim and output index lists of a proof differ in length.
    #[error("claim and output index lists must pair up, got {claims} and {vouts}")]
    WrongIndexes {
        /// Length of the claim index list.
        claims: usize,
        /// Length of the output index list.
        vouts: usize,
    },

    /// An index list of a proof is not strictly increasing.
    #[error("proof index lists must be strictly increasing")]
    UnsortedIndexes,

    /// The transaction is not finalized on the header relay.
    #[error("transaction {0} is not finalized on the relay")]
    NotFinalized(Txid),

    /// The claim was already settled or already listed in this dispute.
    #[error("burn request {index} is already settled")]
    AlreadyPaid {
        /// Index of the offending claim.
        index: RequestIndex,
    },

    /// The claim's transfer deadline has not passed yet.
    #[error("transfer deadline {deadline} has not passed at relay height {height}")]
    DeadlineNotPassed {
        /// Deadline recorded on the claim.
        deadline: u64,
        /// Last submitted relay height.
        height: u64,
    },

    /// The transaction was already consumed as a burn proof or theft evidence.
    #[error("transaction {0} was already used as a burn proof")]
    AlreadyUsed(Txid),

    /// A theft proof's field lists have the wrong lengths.
    #[error("theft proof must carry two versions, two locktimes and three indexes")]
    WrongInputs,

    /// The theft proof's transaction chain does not hold together.
    #[error("transaction chain does not prove a spend of the locker's output")]
    WrongOutputTx,

    /// An exchange path must end in the wrapped token.
    #[error("exchange path must end with the wrapped token")]
    InvalidPath,

    /// The amounts list of an exchange does not match its path.
    #[error("amounts list length {amounts} does not match path length {path}")]
    WrongAmounts {
        /// Length of the amounts list.
        amounts: usize,
        /// Length of the path.
        path: usize,
    },

    /// The connector reported a failed swap.
    #[error("exchange connector reported a failed swap")]
    ExchangeFailed,

    /// The submitted protocol fee rate is out of range.
    #[error("invalid protocol fee: {0}")]
    InvalidFee(ParamsError),

    /// The submitted slasher reward rate is out of range.
    #[error("invalid slasher reward: {0}")]
    InvalidReward(ParamsError),

    /// The transfer deadline must exceed the relay's finalization parameter.
    #[error("transfer deadline {deadline} must exceed the relay finalization parameter {finalization}")]
    LowDeadline {
        /// Deadline the caller asked for.
        deadline: u64,
        /// Finalization parameter of the relay.
        finalization: u64,
    },

    /// The zero account cannot serve as an endpoint.
    #[error("the zero account cannot be used here")]
    ZeroAddress,

    /// The caller is not the configured authority.
    #[error("caller is not the configured authority")]
    NotAuthorized,

    /// A burn-request ledger lookup failed.
    #[error(transparent)]
    Ledger(#[from] LedgerError),

    /// The header relay rejected a query.
    #[error("header relay: {0}")]
    Relay(#[from] RelayError),

    /// The locker registry rejected a call.
    #[error("locker registry: {0}")]
    Registry(#[from] RegistryError),

    /// The token ledger rejected a transfer.
    #[error("token ledger: {0}")]
    Token(#[from] TokenError),

    /// The exchange connector failed outright.
    #[error("exchange connector: {0}")]
    Connector(#[from] ConnectorError),
}

/// Result alias for router operations.
pub type RouterResult<T> = Result<T, RouterError>;
