//! The Bitcoin block-header relay consumed by the router.

use bitcoin::Txid;

use crate::{
    errors::RelayError,
    spv::TxInclusionProof,
    types::{AccountId, BitcoinBlockHeight},
};

/// Chain-height oracle and SPV verifier backed by an external header relay.
///
/// Implementations own header sourcing and fee-for-proof accounting; the router only consumes
/// the answers and treats every error as fatal for the operation in flight.
pub trait HeaderRelay {
    /// The on-chain identity of the relay endpoint.
    fn address(&self) -> AccountId;

    /// Height of the most recent block header the relay has accepted.
    fn last_submitted_height(&self) -> BitcoinBlockHeight;

    /// Number of confirmations the relay requires before treating a block as final.
    fn finalization_parameter(&self) -> u64;

    /// Checks that `txid` is included in the block at `block_height`, buried under at least
    /// `required_confirmations` accepted headers.
    ///
    /// `Ok(false)` means the proof did not verify against the relay's view of the chain;
    /// errors carry the relay's own failure modes such as fee accounting.
    fn check_tx_proof(
        &mut self,
        txid: Txid,
        block_height: BitcoinBlockHeight,
        proof: &TxInclusionProof,
        required_confirmations: u64,
    ) -> Result<bool, RelayError>;
}
