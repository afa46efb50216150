//! Settlement engine for redemptions of a Bitcoin-backed wrapped token.
//!
//! The [`router::BurnRouter`] records redemption claims when wrapped tokens are burned,
//! settles them against SPV-proven Bitcoin payments, and slashes lockers that miss their
//! deadlines or spend locked funds elsewhere. Hosts plug in their own relay, locker
//! registry, token ledger and exchange connector through the traits in
//! `cinder-bridge-primitives`.

pub mod burn;
pub mod dispute;
pub mod errors;
pub mod events;
pub mod proof;
pub mod router;

#[cfg(test)]
mod tests;
