//! Notification values returned by the router's mutating operations.
//!
//! Every state transition hands back a typed record of what happened so hosts can emit
//! events, index them, or feed them into downstream accounting without re-deriving the
//! outcome from state.

use bitcoin::{Amount, ScriptBuf, Txid};
use cinder_bridge_primitives::{
    script::UserScript,
    types::{AccountId, BitcoinBlockHeight, RequestIndex},
};
use serde::{Deserialize, Serialize};

/// Where the wrapped tokens of a new claim came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RequestOrigin {
    /// The sender burned wrapped tokens they already held.
    Direct,

    /// The sender swapped another token into the wrapped token first.
    Exchanged {
        /// Token the sender paid with.
        input_token: AccountId,

        /// Amount of the input token the swap consumed.
        input_amount: u64,
    },
}

/// A new redemption claim was recorded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BurnRequested {
    /// Account whose wrapped tokens were burned.
    pub sender: AccountId,

    /// Bitcoin destination the locker must pay.
    pub user_script: UserScript,

    /// Wrapped-token amount that entered the redemption.
    pub amount: u64,

    /// Exact Bitcoin payment the locker owes.
    #[serde(with = "bitcoin::amount::serde::as_sat")]
    pub burnt_amount: Amount,

    /// Locker responsible for the payout.
    pub locker: AccountId,

    /// Position of the claim in the locker's ledger.
    pub index: RequestIndex,

    /// Height by which the payment must be proven.
    pub deadline: BitcoinBlockHeight,

    /// Provenance of the burned tokens.
    pub origin: RequestOrigin,
}

/// A single claim was settled by a proven payment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BurnPaid {
    /// Locker the claim was recorded against.
    pub locker: AccountId,

    /// Position of the claim in the locker's ledger.
    pub index: RequestIndex,

    /// Transaction that paid the claim.
    pub txid: Txid,

    /// Output of the transaction that matched the claim.
    pub vout_index: u32,
}

/// Outcome of a burn-proof submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProofOutcome {
    /// Transaction the proof was about.
    pub txid: Txid,

    /// Claims settled by this submission, in claim-index order.
    pub settled: Vec<BurnPaid>,

    /// Whether the transaction entered the used-proof registry.
    ///
    /// Admission requires at least one settlement and every unmatched output returning to
    /// the locker.
    pub admitted: bool,
}

impl ProofOutcome {
    /// Whether the submission changed nothing.
    pub fn is_noop(&self) -> bool {
        self.settled.is_empty() && !self.admitted
    }
}

/// An expired claim was settled by slashing its locker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BurnDisputed {
    /// Locker that missed the deadline.
    pub locker: AccountId,

    /// Position of the claim in the locker's ledger.
    pub index: RequestIndex,

    /// Collateral seized, equal to the claim's expected payout.
    #[serde(with = "bitcoin::amount::serde::as_sat")]
    pub slashed: Amount,

    /// Account the seized collateral went to, the claim's sender.
    pub beneficiary: AccountId,
}

/// A locker was slashed for spending locked funds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LockerSlashed {
    /// The slashed locker.
    pub locker: AccountId,

    /// Locking script the stolen output belonged to.
    pub locking_script: ScriptBuf,

    /// Height the theft transaction was included at.
    pub block_height: BitcoinBlockHeight,

    /// Transaction whose output the locker stole.
    pub txid: Txid,

    /// Stolen amount plus the reporter's reward.
    #[serde(with = "bitcoin::amount::serde::as_sat")]
    pub total_slashed: Amount,
}

/// An `(old, new)` pair recording a parameter change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParamUpdate<T> {
    /// Value before the change.
    pub old: T,

    /// Value after the change.
    pub new: T,
}
