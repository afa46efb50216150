//! Claim creation: direct burns and the exchange pre-step.

use bitcoin::Script;
use cinder_bridge_db::requests::BurnRequest;
use cinder_bridge_primitives::{
    connector::ExchangeConnector,
    fees,
    registry::LockerRegistry,
    relay::HeaderRelay,
    script::{ScriptType, UserScript},
    token::TokenLedger,
    types::AccountId,
};
use tracing::info;

use crate::{
    errors::{RouterError, RouterResult},
    events::{BurnRequested, RequestOrigin},
    router::BurnRouter,
};

/// A swap-then-burn order for [`BurnRouter::swap_and_burn`].
#[derive(Debug, Clone, Copy)]
pub struct ExchangeOrder<'a> {
    /// Amount bound for every element of `path`.
    pub amounts: &'a [u64],

    /// Token path the swap walks, ending in the wrapped token.
    pub path: &'a [AccountId],

    /// Whether the input end of the swap is exact.
    pub is_input_fixed: bool,

    /// Deadline forwarded verbatim to the swap venue.
    pub deadline: u64,
}

impl<R, K, T> BurnRouter<R, K, T>
where
    R: HeaderRelay,
    K: LockerRegistry,
    T: TokenLedger,
{
    /// Burns `amount` wrapped tokens from `sender` and records a redemption claim against
    /// the locker owning `locker_locking_script`.
    ///
    /// The destination script is validated first, the protocol fee goes to the treasury, the
    /// remainder is burned through the registry, and the claim's payout is fixed at the
    /// registry's burnt amount minus the Bitcoin fee estimate. The locker must prove payment
    /// before `last_submitted_height + transfer_deadline`.
    pub fn request_burn(
        &mut self,
        sender: AccountId,
        amount: u64,
        user_script: &[u8],
        script_type: ScriptType,
        locker_locking_script: &Script,
    ) -> RouterResult<BurnRequested> {
        let user_script = UserScript::new(user_script, script_type)?;

        let fee = self.params.bitcoin_fee.to_sat();
        if amount <= fee {
            return Err(RouterError::LowAmount { amount, fee });
        }
        let locker = self.locker_for(locker_locking_script)?;

        self.token.transfer_in(sender, amount)?;
        self.create_request(
            sender,
            amount,
            user_script,
            locker,
            locker_locking_script,
            RequestOrigin::Direct,
        )
    }

    /// Swaps into the wrapped token through `connector`, then records a claim exactly like a
    /// direct burn of the realized output.
    ///
    /// The path must end in the wrapped token and carry one amount bound per hop. The
    /// realized wrapped output must exceed twice the Bitcoin fee estimate, leaving room for
    /// the payout deduction on top of a sane remainder. The swap venue pulls the input token
    /// itself and credits the router's own account, so no wrapped-token `transfer_in`
    /// happens here.
    pub fn swap_and_burn<C: ExchangeConnector>(
        &mut self,
        connector: &mut C,
        sender: AccountId,
        order: ExchangeOrder<'_>,
        user_script: &[u8],
        script_type: ScriptType,
        locker_locking_script: &Script,
    ) -> RouterResult<BurnRequested> {
        let user_script = UserScript::new(user_script, script_type)?;

        let wrapped = self.token.address();
        if order.path.len() < 2 || order.path.last() != Some(&wrapped) {
            return Err(RouterError::InvalidPath);
        }
        if order.amounts.len() != order.path.len() {
            return Err(RouterError::WrongAmounts {
                amounts: order.amounts.len(),
                path: order.path.len(),
            });
        }
        let locker = self.locker_for(locker_locking_script)?;

        let (ok, realized) = connector.swap(
            order.amounts,
            order.path,
            order.is_input_fixed,
            self.account,
            order.deadline,
        )?;
        if !ok {
            return Err(RouterError::ExchangeFailed);
        }
        let (Some(&spent), Some(&amount)) = (realized.first(), realized.last()) else {
            return Err(RouterError::ExchangeFailed);
        };

        let fee = 2 * self.params.bitcoin_fee.to_sat();
        if amount <= fee {
            return Err(RouterError::LowAmount { amount, fee });
        }

        self.create_request(
            sender,
            amount,
            user_script,
            locker,
            locker_locking_script,
            RequestOrigin::Exchanged {
                input_token: order.path[0],
                input_amount: spent,
            },
        )
    }

    /// Resolves a locking script to its registered locker.
    pub(crate) fn locker_for(&self, locking_script: &Script) -> RouterResult<AccountId> {
        if !self.lockers.is_locker(locking_script) {
            return Err(RouterError::NotLocker);
        }
        self.lockers
            .locker_target_address(locking_script)
            .ok_or(RouterError::NotLocker)
    }

    /// Shared tail of both burn paths: fee transfer, registry burn, ledger append.
    fn create_request(
        &mut self,
        sender: AccountId,
        amount: u64,
        user_script: UserScript,
        locker: AccountId,
        locker_locking_script: &Script,
        origin: RequestOrigin,
    ) -> RouterResult<BurnRequested> {
        let protocol_fee = fees::protocol_fee(amount, self.params.protocol_fee);
        let net = fees::net_after_fee(amount, self.params.protocol_fee);

        self.token.transfer(self.treasury, protocol_fee)?;
        let burnt = self.lockers.burn(locker_locking_script, net)?;
        let burnt_amount =
            fees::expected_payout(burnt, self.params.bitcoin_fee).ok_or(RouterError::LowAmount {
                amount: burnt,
                fee: self.params.bitcoin_fee.to_sat(),
            })?;

        let deadline = self.relay.last_submitted_height() + self.params.transfer_deadline;
        let index = self.requests.append(
            locker,
            BurnRequest {
                amount,
                burnt_amount,
                sender,
                user_script: user_script.clone(),
                deadline,
                is_transferred: false,
            },
        );

        info!(
            %sender,
            %locker,
            %index,
            amount,
            payout = %burnt_amount,
            deadline,
            "burn request recorded"
        );

        Ok(BurnRequested {
            sender,
            user_script,
            amount,
            burnt_amount,
            locker,
            index,
            deadline,
            origin,
        })
    }
}
