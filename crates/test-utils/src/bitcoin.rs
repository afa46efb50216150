//! Module to generate arbitrary Bitcoin values for testing.

use bitcoin::{
    absolute::LockTime,
    hashes::Hash,
    key::rand::{rngs::OsRng, Rng},
    transaction::Version,
    Amount, OutPoint, ScriptBuf, Sequence, Transaction, TxIn, TxOut, Txid, Witness,
};
use cinder_bridge_primitives::{
    script::{ScriptType, UserScript},
    types::{AccountId, ACCOUNT_ID_LEN},
};

/// Generates a random transaction ID.
pub fn generate_txid() -> Txid {
    let mut txid = [0u8; 32];
    OsRng.fill(&mut txid);

    Txid::from_slice(&txid).expect("should be able to generate arbitrary txid")
}

/// Generates a random outpoint.
pub fn generate_outpoint() -> OutPoint {
    let vout: u32 = OsRng.gen();

    OutPoint {
        txid: generate_txid(),
        vout,
    }
}

/// Generates a random account identity.
pub fn generate_account_id() -> AccountId {
    let mut bytes = [0u8; ACCOUNT_ID_LEN];
    OsRng.fill(&mut bytes);

    AccountId::new(bytes)
}

/// Generates a random destination script of the given type.
pub fn generate_user_script(ty: ScriptType) -> UserScript {
    match ty {
        ScriptType::P2wsh => {
            let mut payload = [0u8; 32];
            OsRng.fill(&mut payload);
            UserScript::P2wsh(payload)
        }
        ty => {
            let mut payload = [0u8; 20];
            OsRng.fill(&mut payload);
            UserScript::new(&payload, ty).expect("20-byte payload fits every 20-byte type")
        }
    }
}

/// Generates a random P2PKH locking script, the shape lockers register with.
pub fn generate_locking_script() -> ScriptBuf {
    generate_user_script(ScriptType::P2pkh).script_pubkey()
}

/// Creates a zero-locktime payment transaction with the given outputs and a single random
/// input.
pub fn generate_payment_tx(outputs: Vec<TxOut>) -> Transaction {
    Transaction {
        version: Version::TWO,
        lock_time: LockTime::ZERO,
        input: vec![TxIn {
            previous_output: generate_outpoint(),
            script_sig: ScriptBuf::new(),
            sequence: Sequence::MAX,
            witness: Witness::new(),
        }],
        output: outputs,
    }
}

/// Creates a transaction spending `previous_output`, with a single throwaway output.
pub fn generate_spending_tx(previous_output: OutPoint) -> Transaction {
    Transaction {
        version: Version::TWO,
        lock_time: LockTime::ZERO,
        input: vec![TxIn {
            previous_output,
            script_sig: ScriptBuf::new(),
            sequence: Sequence::MAX,
            witness: Witness::new(),
        }],
        output: vec![TxOut {
            value: Amount::from_sat(OsRng.gen::<u32>() as u64),
            script_pubkey: ScriptBuf::new(),
        }],
    }
}
