//! Scriptable in-memory implementations of the router's collaborator traits.
//!
//! Each mock is a cheap handle around shared state, so a test can keep a clone, hand another
//! clone to the router, and then steer responses or inspect recorded calls mid-scenario.

use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

use bitcoin::{Amount, Script, ScriptBuf, Txid};
use cinder_bridge_params::types::Bps;
use cinder_bridge_primitives::{
    connector::ExchangeConnector,
    errors::{ConnectorError, RegistryError, RelayError, TokenError},
    registry::LockerRegistry,
    relay::HeaderRelay,
    spv::TxInclusionProof,
    token::TokenLedger,
    types::{AccountId, BitcoinBlockHeight},
};

use crate::bitcoin::generate_account_id;

/// One recorded `check_tx_proof` query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayCheck {
    /// Queried transaction id.
    pub txid: Txid,
    /// Claimed containing block height.
    pub block_height: BitcoinBlockHeight,
    /// Confirmations the router demanded.
    pub required_confirmations: u64,
}

#[derive(Debug)]
struct RelayState {
    address: AccountId,
    last_submitted_height: BitcoinBlockHeight,
    finalization_parameter: u64,
    proof_response: Result<bool, RelayError>,
    checks: Vec<RelayCheck>,
}

/// Scriptable header relay.
#[derive(Debug, Clone)]
pub struct MockRelay(Arc<Mutex<RelayState>>);

impl MockRelay {
    /// Creates a relay at the given height that accepts every proof.
    pub fn new(last_submitted_height: BitcoinBlockHeight, finalization_parameter: u64) -> Self {
        Self(Arc::new(Mutex::new(RelayState {
            address: generate_account_id(),
            last_submitted_height,
            finalization_parameter,
            proof_response: Ok(true),
            checks: Vec::new(),
        })))
    }

    /// Overrides the relay's endpoint identity.
    pub fn set_address(&self, address: AccountId) {
        self.state().address = address;
    }

    /// Moves the relay's tip to `height`.
    pub fn set_last_submitted_height(&self, height: BitcoinBlockHeight) {
        self.state().last_submitted_height = height;
    }

    /// Changes the relay's finalization parameter.
    pub fn set_finalization_parameter(&self, blocks: u64) {
        self.state().finalization_parameter = blocks;
    }

    /// Sets the response every subsequent `check_tx_proof` call returns.
    pub fn set_proof_response(&self, response: Result<bool, RelayError>) {
        self.state().proof_response = response;
    }

    /// Returns the recorded proof queries.
    pub fn checks(&self) -> Vec<RelayCheck> {
        self.state().checks.clone()
    }

    fn state(&self) -> std::sync::MutexGuard<'_, RelayState> {
        self.0.lock().expect("mock relay state poisoned")
    }
}

impl HeaderRelay for MockRelay {
    fn address(&self) -> AccountId {
        self.state().address
    }

    fn last_submitted_height(&self) -> BitcoinBlockHeight {
        self.state().last_submitted_height
    }

    fn finalization_parameter(&self) -> u64 {
        self.state().finalization_parameter
    }

    fn check_tx_proof(
        &mut self,
        txid: Txid,
        block_height: BitcoinBlockHeight,
        _proof: &TxInclusionProof,
        required_confirmations: u64,
    ) -> Result<bool, RelayError> {
        let mut state = self.state();
        state.checks.push(RelayCheck {
            txid,
            block_height,
            required_confirmations,
        });
        state.proof_response.clone()
    }
}

/// One recorded registry burn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BurnCall {
    /// Locking script the burn was issued against.
    pub locking_script: ScriptBuf,
    /// Amount the router asked to burn.
    pub requested: u64,
    /// Amount the registry reported as burnt.
    pub burnt: u64,
}

/// One recorded idle-locker slash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdleSlash {
    /// Slashed locker.
    pub locker: AccountId,
    /// Collateral value slashed.
    pub amount: Amount,
    /// Recipient of the slashed value.
    pub beneficiary: AccountId,
}

/// One recorded thief-locker slash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThiefSlash {
    /// Slashed locker.
    pub locker: AccountId,
    /// Reward paid to the reporter.
    pub reward: Amount,
    /// The reporter.
    pub slasher: AccountId,
    /// Stolen value disposed per registry policy.
    pub stolen: Amount,
}

#[derive(Debug)]
struct LockersState {
    address: AccountId,
    lockers: HashMap<ScriptBuf, AccountId>,
    locker_fee: Bps,
    burn_failure: Option<RegistryError>,
    slash_failure: Option<RegistryError>,
    burns: Vec<BurnCall>,
    idle_slashes: Vec<IdleSlash>,
    thief_slashes: Vec<ThiefSlash>,
}

/// Scriptable locker registry.
///
/// The locker's own fee on burns is an explicit knob so tests can exercise nonzero fees
/// instead of relying on the zero-fee default.
#[derive(Debug, Clone)]
pub struct MockLockers(Arc<Mutex<LockersState>>);

impl MockLockers {
    /// Creates an empty registry with a zero locker fee.
    pub fn new() -> Self {
        Self(Arc::new(Mutex::new(LockersState {
            address: generate_account_id(),
            lockers: HashMap::new(),
            locker_fee: Bps::ZERO,
            burn_failure: None,
            slash_failure: None,
            burns: Vec::new(),
            idle_slashes: Vec::new(),
            thief_slashes: Vec::new(),
        })))
    }

    /// Overrides the registry's endpoint identity.
    pub fn set_address(&self, address: AccountId) {
        self.state().address = address;
    }

    /// Registers `locking_script` as belonging to `locker`.
    pub fn register(&self, locking_script: ScriptBuf, locker: AccountId) {
        self.state().lockers.insert(locking_script, locker);
    }

    /// Sets the fee the registry keeps out of every burn, in basis points.
    pub fn set_locker_fee(&self, fee: Bps) {
        self.state().locker_fee = fee;
    }

    /// Makes every subsequent burn fail with `error`.
    pub fn fail_burns(&self, error: RegistryError) {
        self.state().burn_failure = Some(error);
    }

    /// Makes every subsequent slash fail with `error`.
    pub fn fail_slashes(&self, error: RegistryError) {
        self.state().slash_failure = Some(error);
    }

    /// Returns the recorded burns.
    pub fn burns(&self) -> Vec<BurnCall> {
        self.state().burns.clone()
    }

    /// Returns the recorded idle-locker slashes.
    pub fn idle_slashes(&self) -> Vec<IdleSlash> {
        self.state().idle_slashes.clone()
    }

    /// Returns the recorded thief-locker slashes.
    pub fn thief_slashes(&self) -> Vec<ThiefSlash> {
        self.state().thief_slashes.clone()
    }

    fn state(&self) -> std::sync::MutexGuard<'_, LockersState> {
        self.0.lock().expect("mock registry state poisoned")
    }
}

impl Default for MockLockers {
    fn default() -> Self {
        Self::new()
    }
}

impl LockerRegistry for MockLockers {
    fn address(&self) -> AccountId {
        self.state().address
    }

    fn is_locker(&self, locking_script: &Script) -> bool {
        self.state().lockers.contains_key(locking_script)
    }

    fn locker_target_address(&self, locking_script: &Script) -> Option<AccountId> {
        self.state().lockers.get(locking_script).copied()
    }

    fn burn(&mut self, locking_script: &Script, amount: u64) -> Result<u64, RegistryError> {
        let mut state = self.state();
        if let Some(error) = &state.burn_failure {
            return Err(error.clone());
        }

        let burnt = amount - state.locker_fee.apply(amount);
        state.burns.push(BurnCall {
            locking_script: locking_script.to_owned(),
            requested: amount,
            burnt,
        });
        Ok(burnt)
    }

    fn slash_idle_locker(
        &mut self,
        locker: AccountId,
        amount: Amount,
        beneficiary: AccountId,
    ) -> Result<(), RegistryError> {
        let mut state = self.state();
        if let Some(error) = &state.slash_failure {
            return Err(error.clone());
        }

        state.idle_slashes.push(IdleSlash {
            locker,
            amount,
            beneficiary,
        });
        Ok(())
    }

    fn slash_thief_locker(
        &mut self,
        locker: AccountId,
        reward: Amount,
        slasher: AccountId,
        stolen: Amount,
    ) -> Result<(), RegistryError> {
        let mut state = self.state();
        if let Some(error) = &state.slash_failure {
            return Err(error.clone());
        }

        state.thief_slashes.push(ThiefSlash {
            locker,
            reward,
            slasher,
            stolen,
        });
        Ok(())
    }
}

#[derive(Debug)]
struct TokenState {
    address: AccountId,
    transfer_in_failure: Option<TokenError>,
    transfer_failure: Option<TokenError>,
    transfers_in: Vec<(AccountId, u64)>,
    transfers: Vec<(AccountId, u64)>,
}

/// Scriptable wrapped-token ledger.
#[derive(Debug, Clone)]
pub struct MockToken(Arc<Mutex<TokenState>>);

impl MockToken {
    /// Creates a ledger that accepts every transfer.
    pub fn new() -> Self {
        Self(Arc::new(Mutex::new(TokenState {
            address: generate_account_id(),
            transfer_in_failure: None,
            transfer_failure: None,
            transfers_in: Vec::new(),
            transfers: Vec::new(),
        })))
    }

    /// Overrides the ledger's endpoint identity.
    pub fn set_address(&self, address: AccountId) {
        self.state().address = address;
    }

    /// Makes every subsequent `transfer_in` fail with `error`.
    pub fn fail_transfers_in(&self, error: TokenError) {
        self.state().transfer_in_failure = Some(error);
    }

    /// Makes every subsequent `transfer` fail with `error`.
    pub fn fail_transfers(&self, error: TokenError) {
        self.state().transfer_failure = Some(error);
    }

    /// Returns the recorded (from, amount) pulls into custody.
    pub fn transfers_in(&self) -> Vec<(AccountId, u64)> {
        self.state().transfers_in.clone()
    }

    /// Returns the recorded (to, amount) payouts from custody.
    pub fn transfers(&self) -> Vec<(AccountId, u64)> {
        self.state().transfers.clone()
    }

    fn state(&self) -> std::sync::MutexGuard<'_, TokenState> {
        self.0.lock().expect("mock token state poisoned")
    }
}

impl Default for MockToken {
    fn default() -> Self {
        Self::new()
    }
}

impl TokenLedger for MockToken {
    fn address(&self) -> AccountId {
        self.state().address
    }

    fn transfer_in(&mut self, from: AccountId, amount: u64) -> Result<(), TokenError> {
        let mut state = self.state();
        if let Some(error) = &state.transfer_in_failure {
            return Err(error.clone());
        }

        state.transfers_in.push((from, amount));
        Ok(())
    }

    fn transfer(&mut self, to: AccountId, amount: u64) -> Result<(), TokenError> {
        let mut state = self.state();
        if let Some(error) = &state.transfer_failure {
            return Err(error.clone());
        }

        state.transfers.push((to, amount));
        Ok(())
    }
}

/// One recorded swap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwapCall {
    /// Amount bound per path element.
    pub amounts: Vec<u64>,
    /// Token path.
    pub path: Vec<AccountId>,
    /// Whether the input end was exact.
    pub is_input_fixed: bool,
    /// Recipient of the swapped output.
    pub recipient: AccountId,
    /// Swap deadline forwarded by the caller.
    pub deadline: u64,
}

#[derive(Debug)]
struct ConnectorState {
    response: Result<(bool, Vec<u64>), ConnectorError>,
    swaps: Vec<SwapCall>,
}

/// Scriptable exchange connector.
#[derive(Debug, Clone)]
pub struct MockConnector(Arc<Mutex<ConnectorState>>);

impl MockConnector {
    /// Creates a connector whose swaps succeed with the given realized amounts.
    pub fn succeeding(amounts: Vec<u64>) -> Self {
        Self(Arc::new(Mutex::new(ConnectorState {
            response: Ok((true, amounts)),
            swaps: Vec::new(),
        })))
    }

    /// Creates a connector whose swaps report failure.
    pub fn failing() -> Self {
        Self(Arc::new(Mutex::new(ConnectorState {
            response: Ok((false, Vec::new())),
            swaps: Vec::new(),
        })))
    }

    /// Creates a connector whose swaps error out entirely.
    pub fn erroring(error: ConnectorError) -> Self {
        Self(Arc::new(Mutex::new(ConnectorState {
            response: Err(error),
            swaps: Vec::new(),
        })))
    }

    /// Returns the recorded swaps.
    pub fn swaps(&self) -> Vec<SwapCall> {
        self.state().swaps.clone()
    }

    fn state(&self) -> std::sync::MutexGuard<'_, ConnectorState> {
        self.0.lock().expect("mock connector state poisoned")
    }
}

impl ExchangeConnector for MockConnector {
    fn swap(
        &mut self,
        amounts: &[u64],
        path: &[AccountId],
        is_input_fixed: bool,
        recipient: AccountId,
        deadline: u64,
    ) -> Result<(bool, Vec<u64>), ConnectorError> {
        let mut state = self.state();
        state.swaps.push(SwapCall {
            amounts: amounts.to_vec(),
            path: path.to_vec(),
            is_input_fixed,
            recipient,
            deadline,
        });
        state.response.clone()
    }
}
