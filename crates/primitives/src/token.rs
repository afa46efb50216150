//! The wrapped-token ledger consumed by the router.

use crate::{errors::TokenError, types::AccountId};

/// Minimal transfer surface of the wrapped-token ledger.
///
/// Minting and burning of the wrapped supply happen behind the locker registry's burn
/// operation; the router itself only moves balances it custodies.
pub trait TokenLedger {
    /// The on-chain identity of the token endpoint.
    fn address(&self) -> AccountId;

    /// Pulls `amount` tokens from `from` into the router's custody.
    fn transfer_in(&mut self, from: AccountId, amount: u64) -> Result<(), TokenError>;

    /// Pays `amount` tokens out of the router's custody to `to`.
    fn transfer(&mut self, to: AccountId, amount: u64) -> Result<(), TokenError>;
}
