//! This crate contains the tunable parameters that dictate the behavior of the redemption
//! router: fee and reward rates, dispute timing, and the Bitcoin network-fee estimate baked
//! into every payout computation.

pub(crate) mod default;
pub mod errors;
pub mod router;
pub mod types;
