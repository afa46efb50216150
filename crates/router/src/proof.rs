//! Burn-proof verification and claim settlement.

use bitcoin::{absolute::LockTime, Script, Transaction};
use cinder_bridge_primitives::{
    registry::LockerRegistry,
    relay::HeaderRelay,
    spv::TxInclusionProof,
    token::TokenLedger,
    types::{BitcoinBlockHeight, RequestIndex},
};
use tracing::{debug, info, warn};

use crate::{
    errors::{RouterError, RouterResult},
    events::{BurnPaid, ProofOutcome},
    router::BurnRouter,
};

impl<R, K, T> BurnRouter<R, K, T>
where
    R: HeaderRelay,
    K: LockerRegistry,
    T: TokenLedger,
{
    /// Verifies an SPV-proven payment and settles every claim it exactly matches.
    ///
    /// `claim_indexes` and `vout_indexes` pair element-wise and must both be strictly
    /// increasing so no claim or output can be claimed twice in one call. A pair whose
    /// output does not match its claim (settled already, past deadline at `block_height`,
    /// wrong script, wrong value, or no such output) is skipped without failing the rest.
    ///
    /// The transaction id is admitted into the used-proof registry only when at least one
    /// claim settled and every output not consumed by a settlement pays the locker's own
    /// locking script. Resubmitting an already-used transaction is a no-op with an empty
    /// outcome.
    pub fn submit_burn_proof(
        &mut self,
        tx: &Transaction,
        block_height: BitcoinBlockHeight,
        proof: &TxInclusionProof,
        locker_locking_script: &Script,
        claim_indexes: &[RequestIndex],
        vout_indexes: &[u32],
    ) -> RouterResult<ProofOutcome> {
        if tx.lock_time != LockTime::ZERO {
            return Err(RouterError::NonZeroLockTime);
        }
        let locker = self.locker_for(locker_locking_script)?;

        let txid = tx.compute_txid();
        let confirmations = self.relay.finalization_parameter();
        if !self
            .relay
            .check_tx_proof(txid, block_height, proof, confirmations)?
        {
            return Err(RouterError::NotFinalized(txid));
        }

        validate_claim_pairs(claim_indexes, vout_indexes)?;
        // bounds for the whole batch up front, so a bad index settles nothing
        for &index in claim_indexes {
            self.requests.get(locker, index)?;
        }

        if self.used_proofs.contains(&txid) {
            debug!(%txid, "burn proof already consumed, ignoring");
            return Ok(ProofOutcome {
                txid,
                settled: Vec::new(),
                admitted: false,
            });
        }

        let mut settled = Vec::new();
        for (&index, &vout) in claim_indexes.iter().zip(vout_indexes) {
            let request = self.requests.get(locker, index)?;
            if request.is_transferred {
                debug!(%locker, %index, "claim already settled, skipping");
                continue;
            }
            if request.deadline < block_height {
                debug!(
                    %locker,
                    %index,
                    deadline = request.deadline,
                    block_height,
                    "proof arrived past the claim deadline, skipping"
                );
                continue;
            }
            let Some(output) = tx.output.get(vout as usize) else {
                debug!(%locker, %index, vout, "transaction has no output at claimed position, skipping");
                continue;
            };
            if output.script_pubkey != request.user_script.script_pubkey()
                || output.value != request.burnt_amount
            {
                debug!(%locker, %index, vout, "output does not match claim, skipping");
                continue;
            }

            self.requests.mark_transferred(locker, index)?;
            info!(%locker, %index, %txid, vout, "claim settled by burn proof");
            settled.push(BurnPaid {
                locker,
                index,
                txid,
                vout_index: vout,
            });
        }

        let admitted =
            !settled.is_empty() && change_returns_to_locker(tx, &settled, locker_locking_script);
        if admitted {
            self.used_proofs.insert(txid);
            info!(%txid, claims = settled.len(), "burn proof admitted");
        } else if !settled.is_empty() {
            warn!(%txid, "unmatched outputs do not all return to the locker, proof not admitted");
        }

        Ok(ProofOutcome {
            txid,
            settled,
            admitted,
        })
    }
}

/// Whether every output not consumed by a settlement pays the locker's locking script.
///
/// This is what lets a transaction be marked used: once all change demonstrably returns to
/// the locker, the same transaction can never double as theft evidence.
fn change_returns_to_locker(
    tx: &Transaction,
    settled: &[BurnPaid],
    locker_locking_script: &Script,
) -> bool {
    tx.output
        .iter()
        .enumerate()
        .filter(|(vout, _)| {
            !settled
                .iter()
                .any(|paid| paid.vout_index == *vout as u32)
        })
        .all(|(_, output)| output.script_pubkey.as_script() == locker_locking_script)
}

/// Checks the pairing discipline of a proof's index lists.
fn validate_claim_pairs(claim_indexes: &[RequestIndex], vout_indexes: &[u32]) -> RouterResult<()> {
    if claim_indexes.len() != vout_indexes.len() {
        return Err(RouterError::WrongIndexes {
            claims: claim_indexes.len(),
            vouts: vout_indexes.len(),
        });
    }
    if !strictly_increasing(claim_indexes) || !strictly_increasing(vout_indexes) {
        return Err(RouterError::UnsortedIndexes);
    }
    Ok(())
}

fn strictly_increasing<N: PartialOrd>(values: &[N]) -> bool {
    values.windows(2).all(|pair| pair[0] < pair[1])
}
