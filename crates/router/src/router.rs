//! Construction, configuration and read-only views of the burn router.

use bitcoin::{Amount, Txid};
use cinder_bridge_db::{
    proofs::UsedProofRegistry,
    requests::{BurnRequest, BurnRequestTable},
};
use cinder_bridge_params::{router::RouterParams, types::Bps};
use cinder_bridge_primitives::{
    registry::LockerRegistry,
    relay::HeaderRelay,
    token::TokenLedger,
    types::{AccountId, RequestIndex},
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{
    errors::{RouterError, RouterResult},
    events::ParamUpdate,
};

/// The privileged and self-referential accounts a router is constructed with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouterAccounts {
    /// Account allowed to change parameters and endpoints.
    pub authority: AccountId,

    /// The router's own ledger identity, used as the recipient of exchange outputs.
    pub account: AccountId,

    /// Account protocol fees are forwarded to.
    pub treasury: AccountId,
}

/// The redemption settlement engine.
///
/// Owns the burn-request ledger and the used-proof registry; consults the header relay,
/// locker registry and token ledger through the traits the host wires in. Operations are
/// synchronous state transitions that validate before they mutate.
#[derive(Debug)]
pub struct BurnRouter<R, K, T> {
    pub(crate) params: RouterParams,
    pub(crate) authority: AccountId,
    pub(crate) account: AccountId,
    pub(crate) treasury: AccountId,
    pub(crate) relay: R,
    pub(crate) lockers: K,
    pub(crate) token: T,
    pub(crate) requests: BurnRequestTable,
    pub(crate) used_proofs: UsedProofRegistry,
}

impl<R, K, T> BurnRouter<R, K, T>
where
    R: HeaderRelay,
    K: LockerRegistry,
    T: TokenLedger,
{
    /// Creates a router over the given collaborators.
    ///
    /// Applies the same validation as the individual setters: no zero accounts anywhere and
    /// a transfer deadline strictly above the relay's finalization parameter, so a claim can
    /// never expire before its payment had a chance to finalize.
    pub fn new(
        params: RouterParams,
        accounts: RouterAccounts,
        relay: R,
        lockers: K,
        token: T,
    ) -> RouterResult<Self> {
        let endpoints = [
            accounts.authority,
            accounts.account,
            accounts.treasury,
            relay.address(),
            lockers.address(),
            token.address(),
        ];
        if endpoints.iter().any(AccountId::is_zero) {
            return Err(RouterError::ZeroAddress);
        }

        let finalization = relay.finalization_parameter();
        if params.transfer_deadline <= finalization {
            return Err(RouterError::LowDeadline {
                deadline: params.transfer_deadline,
                finalization,
            });
        }

        info!(
            authority = %accounts.authority,
            treasury = %accounts.treasury,
            relay = %relay.address(),
            lockers = %lockers.address(),
            token = %token.address(),
            "burn router initialized"
        );

        Ok(Self {
            params,
            authority: accounts.authority,
            account: accounts.account,
            treasury: accounts.treasury,
            relay,
            lockers,
            token,
            requests: BurnRequestTable::new(),
            used_proofs: UsedProofRegistry::new(),
        })
    }

    fn ensure_authority(&self, caller: AccountId) -> RouterResult<()> {
        if caller != self.authority {
            return Err(RouterError::NotAuthorized);
        }
        Ok(())
    }

    /// Replaces the protocol fee rate, returning the old and new values.
    pub fn set_protocol_fee(
        &mut self,
        caller: AccountId,
        fee_bps: u16,
    ) -> RouterResult<ParamUpdate<Bps>> {
        self.ensure_authority(caller)?;
        let new = Bps::new(fee_bps).map_err(RouterError::InvalidFee)?;
        let old = std::mem::replace(&mut self.params.protocol_fee, new);
        info!(%old, %new, "protocol fee updated");
        Ok(ParamUpdate { old, new })
    }

    /// Replaces the slasher reward rate, returning the old and new values.
    pub fn set_slasher_reward(
        &mut self,
        caller: AccountId,
        reward_bps: u16,
    ) -> RouterResult<ParamUpdate<Bps>> {
        self.ensure_authority(caller)?;
        let new = Bps::new(reward_bps).map_err(RouterError::InvalidReward)?;
        let old = std::mem::replace(&mut self.params.slasher_reward, new);
        info!(%old, %new, "slasher reward updated");
        Ok(ParamUpdate { old, new })
    }

    /// Replaces the transfer deadline, in relay blocks.
    ///
    /// The new value must exceed the relay's current finalization parameter.
    pub fn set_transfer_deadline(
        &mut self,
        caller: AccountId,
        blocks: u64,
    ) -> RouterResult<ParamUpdate<u64>> {
        self.ensure_authority(caller)?;
        let finalization = self.relay.finalization_parameter();
        if blocks <= finalization {
            return Err(RouterError::LowDeadline {
                deadline: blocks,
                finalization,
            });
        }
        let old = std::mem::replace(&mut self.params.transfer_deadline, blocks);
        info!(old, new = blocks, "transfer deadline updated");
        Ok(ParamUpdate { old, new: blocks })
    }

    /// Replaces the Bitcoin fee estimate deducted from every payout.
    pub fn set_bitcoin_fee(
        &mut self,
        caller: AccountId,
        fee: Amount,
    ) -> RouterResult<ParamUpdate<Amount>> {
        self.ensure_authority(caller)?;
        let old = std::mem::replace(&mut self.params.bitcoin_fee, fee);
        info!(%old, new = %fee, "bitcoin fee estimate updated");
        Ok(ParamUpdate { old, new: fee })
    }

    /// Swaps in a new header relay.
    pub fn set_relay(&mut self, caller: AccountId, relay: R) -> RouterResult<ParamUpdate<AccountId>> {
        self.ensure_authority(caller)?;
        if relay.address().is_zero() {
            return Err(RouterError::ZeroAddress);
        }
        let old = std::mem::replace(&mut self.relay, relay);
        let update = ParamUpdate {
            old: old.address(),
            new: self.relay.address(),
        };
        info!(old = %update.old, new = %update.new, "header relay updated");
        Ok(update)
    }

    /// Swaps in a new locker registry.
    pub fn set_lockers(
        &mut self,
        caller: AccountId,
        lockers: K,
    ) -> RouterResult<ParamUpdate<AccountId>> {
        self.ensure_authority(caller)?;
        if lockers.address().is_zero() {
            return Err(RouterError::ZeroAddress);
        }
        let old = std::mem::replace(&mut self.lockers, lockers);
        let update = ParamUpdate {
            old: old.address(),
            new: self.lockers.address(),
        };
        info!(old = %update.old, new = %update.new, "locker registry updated");
        Ok(update)
    }

    /// Swaps in a new token ledger.
    pub fn set_token(&mut self, caller: AccountId, token: T) -> RouterResult<ParamUpdate<AccountId>> {
        self.ensure_authority(caller)?;
        if token.address().is_zero() {
            return Err(RouterError::ZeroAddress);
        }
        let old = std::mem::replace(&mut self.token, token);
        let update = ParamUpdate {
            old: old.address(),
            new: self.token.address(),
        };
        info!(old = %update.old, new = %update.new, "token ledger updated");
        Ok(update)
    }

    /// Redirects protocol fees to a new treasury account.
    pub fn set_treasury(
        &mut self,
        caller: AccountId,
        treasury: AccountId,
    ) -> RouterResult<ParamUpdate<AccountId>> {
        self.ensure_authority(caller)?;
        if treasury.is_zero() {
            return Err(RouterError::ZeroAddress);
        }
        let old = std::mem::replace(&mut self.treasury, treasury);
        info!(%old, new = %treasury, "treasury updated");
        Ok(ParamUpdate { old, new: treasury })
    }

    /// Current router parameters.
    pub const fn params(&self) -> &RouterParams {
        &self.params
    }

    /// The account allowed to reconfigure the router.
    pub const fn authority(&self) -> AccountId {
        self.authority
    }

    /// The router's own ledger identity.
    pub const fn account(&self) -> AccountId {
        self.account
    }

    /// The account receiving protocol fees.
    pub const fn treasury(&self) -> AccountId {
        self.treasury
    }

    /// The header relay in use.
    pub const fn relay(&self) -> &R {
        &self.relay
    }

    /// The locker registry in use.
    pub const fn lockers(&self) -> &K {
        &self.lockers
    }

    /// The token ledger in use.
    pub const fn token(&self) -> &T {
        &self.token
    }

    /// Number of claims ever recorded against `locker`.
    pub fn burn_request_count(&self, locker: AccountId) -> u64 {
        self.requests.count(locker)
    }

    /// The claim at `(locker, index)`.
    pub fn burn_request(&self, locker: AccountId, index: RequestIndex) -> RouterResult<&BurnRequest> {
        Ok(self.requests.get(locker, index)?)
    }

    /// Whether the claim at `(locker, index)` has been settled.
    pub fn is_transferred(&self, locker: AccountId, index: RequestIndex) -> RouterResult<bool> {
        Ok(self.requests.is_transferred(locker, index)?)
    }

    /// Whether `txid` has been consumed as a burn proof or theft evidence.
    pub fn is_used_as_burn_proof(&self, txid: &Txid) -> bool {
        self.used_proofs.contains(txid)
    }
}
