//! The locker registry holding custodian collateral.

use bitcoin::{Amount, Script};

use crate::{errors::RegistryError, types::AccountId};

/// Collateral custody and slashing surface of the locker registry.
///
/// The router never touches collateral itself; it resolves locking scripts to locker
/// identities, forwards burns, and requests slashes. How the registry disposes of slashed
/// collateral is its own policy.
pub trait LockerRegistry {
    /// The on-chain identity of the registry endpoint.
    fn address(&self) -> AccountId;

    /// Whether `locking_script` belongs to a registered locker.
    fn is_locker(&self, locking_script: &Script) -> bool;

    /// Resolves a locking script to the owning locker's identity.
    fn locker_target_address(&self, locking_script: &Script) -> Option<AccountId>;

    /// Burns `amount` wrapped tokens against the locker owning `locking_script`, returning
    /// the amount net of the locker's own fee.
    fn burn(&mut self, locking_script: &Script, amount: u64) -> Result<u64, RegistryError>;

    /// Slashes a locker that failed to pay a claim, sending `amount` worth of collateral to
    /// `beneficiary`.
    fn slash_idle_locker(
        &mut self,
        locker: AccountId,
        amount: Amount,
        beneficiary: AccountId,
    ) -> Result<(), RegistryError>;

    /// Slashes a locker that moved custodied funds, paying `reward` to `slasher` and
    /// disposing of the `stolen` value per registry policy.
    fn slash_thief_locker(
        &mut self,
        locker: AccountId,
        reward: Amount,
        slasher: AccountId,
        stolen: Amount,
    ) -> Result<(), RegistryError>;
}
