//! Dispute paths: idle lockers that miss deadlines and lockers that spend locked funds.

use std::collections::HashSet;

use bitcoin::{
    absolute::LockTime, transaction::Version, Amount, OutPoint, Script, Transaction, TxIn, TxOut,
};
use cinder_bridge_primitives::{
    fees,
    registry::LockerRegistry,
    relay::HeaderRelay,
    spv::TxInclusionProof,
    token::TokenLedger,
    types::{AccountId, BitcoinBlockHeight, RequestIndex},
};
use tracing::info;

use crate::{
    errors::{RouterError, RouterResult},
    events::{BurnDisputed, LockerSlashed},
    router::BurnRouter,
};

/// Raw material of a theft dispute: the fields of two chained transactions plus an inclusion
/// proof for the first.
///
/// `versions` and `lock_times` carry exactly two elements, input transaction first. `indexes`
/// carries exactly three: the vin position in the output transaction, the vout position in
/// the input transaction, and the block height the input transaction was included at. Any
/// other shape is rejected with [`RouterError::WrongInputs`].
#[derive(Debug, Clone)]
pub struct TheftProof {
    /// Transaction versions, input transaction first.
    pub versions: Vec<Version>,

    /// Inputs of the input transaction.
    pub input_vin: Vec<TxIn>,

    /// Outputs of the input transaction.
    pub input_vout: Vec<TxOut>,

    /// Inputs of the output transaction.
    pub output_vin: Vec<TxIn>,

    /// Outputs of the output transaction.
    pub output_vout: Vec<TxOut>,

    /// Locktimes, input transaction first.
    pub lock_times: Vec<LockTime>,

    /// Inclusion proof for the input transaction.
    pub inclusion_proof: TxInclusionProof,

    /// `[vin index in the output tx, vout index in the input tx, block height]`.
    pub indexes: Vec<u64>,
}

/// A theft proof with its transactions assembled and its indexes unpacked.
struct TheftCase {
    input_tx: Transaction,
    output_tx: Transaction,
    output_vin_index: usize,
    input_vout_index: usize,
    block_height: BitcoinBlockHeight,
    inclusion_proof: TxInclusionProof,
}

impl TheftProof {
    fn into_case(self) -> RouterResult<TheftCase> {
        let [input_version, output_version] = self.versions[..] else {
            return Err(RouterError::WrongInputs);
        };
        let [input_lock_time, output_lock_time] = self.lock_times[..] else {
            return Err(RouterError::WrongInputs);
        };
        let [vin_index, vout_index, block_height] = self.indexes[..] else {
            return Err(RouterError::WrongInputs);
        };

        Ok(TheftCase {
            input_tx: Transaction {
                version: input_version,
                lock_time: input_lock_time,
                input: self.input_vin,
                output: self.input_vout,
            },
            output_tx: Transaction {
                version: output_version,
                lock_time: output_lock_time,
                input: self.output_vin,
                output: self.output_vout,
            },
            output_vin_index: vin_index as usize,
            input_vout_index: vout_index as usize,
            block_height,
            inclusion_proof: self.inclusion_proof,
        })
    }
}

impl<R, K, T> BurnRouter<R, K, T>
where
    R: HeaderRelay,
    K: LockerRegistry,
    T: TokenLedger,
{
    /// Slashes the locker owning `locker_locking_script` for every listed claim that expired
    /// unpaid, paying each claim's expected payout to its sender.
    ///
    /// The whole list is validated before anything mutates: every index must address an
    /// unsettled claim, listed once, whose deadline lies strictly below the relay's last
    /// submitted height. Claims then settle one at a time; if the registry rejects a slash
    /// partway through, the claims slashed before it stay settled.
    pub fn dispute_idle_locker(
        &mut self,
        locker_locking_script: &Script,
        claim_indexes: &[RequestIndex],
    ) -> RouterResult<Vec<BurnDisputed>> {
        let locker = self.locker_for(locker_locking_script)?;
        let height = self.relay.last_submitted_height();

        let mut seen = HashSet::new();
        for &index in claim_indexes {
            let request = self.requests.get(locker, index)?;
            if request.is_transferred || !seen.insert(index) {
                return Err(RouterError::AlreadyPaid { index });
            }
            if request.deadline >= height {
                return Err(RouterError::DeadlineNotPassed {
                    deadline: request.deadline,
                    height,
                });
            }
        }

        let mut disputed = Vec::with_capacity(claim_indexes.len());
        for &index in claim_indexes {
            let request = self.requests.get(locker, index)?;
            let (slashed, beneficiary) = (request.burnt_amount, request.sender);

            self.lockers.slash_idle_locker(locker, slashed, beneficiary)?;
            self.requests.mark_transferred(locker, index)?;

            info!(%locker, %index, %slashed, %beneficiary, "idle locker slashed for expired claim");
            disputed.push(BurnDisputed {
                locker,
                index,
                slashed,
                beneficiary,
            });
        }

        Ok(disputed)
    }

    /// Proves the locker owning `locker_locking_script` spent one of its own outputs outside
    /// any claim payout, slashes it, and rewards `slasher`.
    ///
    /// The input transaction must be finalized on the relay and not already consumed as a
    /// burn proof or prior theft evidence. The chain must hold together twice over: the
    /// input transaction's claimed output pays the locker's locking script, and the output
    /// transaction's claimed input spends exactly that outpoint. On success the input
    /// transaction id is marked used so the same evidence cannot be replayed.
    pub fn dispute_thief_locker(
        &mut self,
        slasher: AccountId,
        locker_locking_script: &Script,
        proof: TheftProof,
    ) -> RouterResult<LockerSlashed> {
        let case = proof.into_case()?;
        let locker = self.locker_for(locker_locking_script)?;

        let input_txid = case.input_tx.compute_txid();
        let confirmations = self.relay.finalization_parameter();
        if !self.relay.check_tx_proof(
            input_txid,
            case.block_height,
            &case.inclusion_proof,
            confirmations,
        )? {
            return Err(RouterError::NotFinalized(input_txid));
        }
        if self.used_proofs.contains(&input_txid) {
            return Err(RouterError::AlreadyUsed(input_txid));
        }

        let stolen = locker_owned_output(&case.input_tx, case.input_vout_index, locker_locking_script)?;
        spends_outpoint(
            &case.output_tx,
            case.output_vin_index,
            OutPoint {
                txid: input_txid,
                vout: case.input_vout_index as u32,
            },
        )?;

        let reward = fees::slasher_reward(stolen, self.params.slasher_reward);
        self.lockers
            .slash_thief_locker(locker, reward, slasher, stolen)?;
        self.used_proofs.insert(input_txid);

        let total_slashed = stolen + reward;
        info!(%locker, %input_txid, %stolen, %reward, "thief locker slashed");

        Ok(LockerSlashed {
            locker,
            locking_script: locker_locking_script.to_owned(),
            block_height: case.block_height,
            txid: input_txid,
            total_slashed,
        })
    }
}

/// First chain link: the input transaction's output at `vout_index` must pay the locker's
/// own locking script. Returns that output's value, the stolen amount.
fn locker_owned_output(
    tx: &Transaction,
    vout_index: usize,
    locker_locking_script: &Script,
) -> RouterResult<Amount> {
    match tx.output.get(vout_index) {
        Some(output) if output.script_pubkey.as_script() == locker_locking_script => {
            Ok(output.value)
        }
        _ => Err(RouterError::WrongOutputTx),
    }
}

/// Second chain link: the output transaction's input at `vin_index` must consume exactly
/// `outpoint`.
fn spends_outpoint(tx: &Transaction, vin_index: usize, outpoint: OutPoint) -> RouterResult<()> {
    match tx.input.get(vin_index) {
        Some(input) if input.previous_output == outpoint => Ok(()),
        _ => Err(RouterError::WrongOutputTx),
    }
}
