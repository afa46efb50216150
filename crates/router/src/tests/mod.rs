//! Shared fixtures for the router operation tests.
//!
//! Every scenario runs against a [`Harness`]: a router wired to scriptable mocks, with
//! handles kept so tests can steer responses and inspect recorded collaborator calls
//! mid-scenario. Amounts follow one canonical redemption so expected values stay readable
//! across files.

mod admin;

use bitcoin::{Amount, ScriptBuf, Transaction, TxOut};
use cinder_bridge_params::{router::RouterParams, types::Bps};
use cinder_bridge_primitives::{
    script::ScriptType,
    spv::TxInclusionProof,
    types::{AccountId, BitcoinBlockHeight},
};
use cinder_bridge_test_utils::{
    bitcoin::{generate_account_id, generate_locking_script, generate_payment_tx},
    mocks::{MockLockers, MockRelay, MockToken},
};

use crate::{
    events::BurnRequested,
    router::{BurnRouter, RouterAccounts},
};

// ===== Test Constants =====

/// Relay tip height every harness starts at.
pub(super) const INITIAL_HEIGHT: BitcoinBlockHeight = 100;
/// Finalization parameter of the harness relay.
pub(super) const FINALIZATION: u64 = 3;
/// Transfer deadline of the harness router, in relay blocks.
pub(super) const TRANSFER_DEADLINE: u64 = 20;
/// Bitcoin network-fee estimate of the harness router, in sats.
pub(super) const BITCOIN_FEE: u64 = 10_000;
/// The canonical requested amount: 5 bps fee leaves 100_010_000 for the burn.
pub(super) const REQUESTED_AMOUNT: u64 = 100_060_030;
/// Protocol fee taken from [`REQUESTED_AMOUNT`].
pub(super) const EXPECTED_FEE: u64 = 50_030;
/// Bitcoin payout expected for [`REQUESTED_AMOUNT`]: the burnt amount minus the fee estimate.
pub(super) const EXPECTED_PAYOUT: u64 = 100_000_000;

/// P2PKH payload used as the canonical user destination.
pub(super) const USER_PKH: [u8; 20] = [
    0x4b, 0x1d, 0x7a, 0x52, 0x31, 0x0c, 0x9e, 0x81, 0x05, 0x66, 0xf3, 0x2a, 0x08, 0xd7, 0x14,
    0xc1, 0xe5, 0x9f, 0x02, 0xb8,
];

/// A router wired to scriptable mocks, with the handles tests need.
pub(super) struct Harness {
    pub(super) router: BurnRouter<MockRelay, MockLockers, MockToken>,
    pub(super) relay: MockRelay,
    pub(super) lockers: MockLockers,
    pub(super) token: MockToken,
    pub(super) authority: AccountId,
    pub(super) treasury: AccountId,
    pub(super) sender: AccountId,
    pub(super) locker: AccountId,
    pub(super) locker_script: ScriptBuf,
}

/// Builds a harness with the canonical parameters and one registered locker.
pub(super) fn harness() -> Harness {
    let relay = MockRelay::new(INITIAL_HEIGHT, FINALIZATION);
    let lockers = MockLockers::new();
    let token = MockToken::new();

    let authority = generate_account_id();
    let treasury = generate_account_id();
    let sender = generate_account_id();
    let locker = generate_account_id();
    let locker_script = generate_locking_script();
    lockers.register(locker_script.clone(), locker);

    let params = RouterParams {
        protocol_fee: Bps::new(5).unwrap(),
        slasher_reward: Bps::new(5).unwrap(),
        transfer_deadline: TRANSFER_DEADLINE,
        bitcoin_fee: Amount::from_sat(BITCOIN_FEE),
    };
    let router = BurnRouter::new(
        params,
        RouterAccounts {
            authority,
            account: generate_account_id(),
            treasury,
        },
        relay.clone(),
        lockers.clone(),
        token.clone(),
    )
    .expect("harness configuration is valid");

    Harness {
        router,
        relay,
        lockers,
        token,
        authority,
        treasury,
        sender,
        locker,
        locker_script,
    }
}

/// Records a claim with the canonical amounts against the harness locker.
pub(super) fn create_claim(harness: &mut Harness) -> BurnRequested {
    harness
        .router
        .request_burn(
            harness.sender,
            REQUESTED_AMOUNT,
            &USER_PKH,
            ScriptType::P2pkh,
            &harness.locker_script,
        )
        .expect("claim creation succeeds")
}

/// A payment transaction settling `event`'s claim at output 0, change to the locker at 1.
pub(super) fn settlement_tx(harness: &Harness, event: &BurnRequested) -> Transaction {
    generate_payment_tx(vec![
        TxOut {
            value: event.burnt_amount,
            script_pubkey: event.user_script.script_pubkey(),
        },
        TxOut {
            value: Amount::from_sat(5_000),
            script_pubkey: harness.locker_script.clone(),
        },
    ])
}

/// A single-leaf inclusion proof; the mock relay never inspects it.
pub(super) fn inclusion_proof() -> TxInclusionProof {
    TxInclusionProof::single(0)
}
