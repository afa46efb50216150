//! Default values for the redemption router.

use bitcoin::Amount;

use crate::types::Bps;

/// Default protocol fee charged on each redemption, in basis points.
pub(crate) const PROTOCOL_FEE: Bps = match Bps::new(5) {
    Ok(bps) => bps,
    Err(_) => unreachable!(),
};

/// Default share of a stolen value paid to the reporter of a theft dispute, in basis points.
pub(crate) const SLASHER_REWARD: Bps = match Bps::new(5) {
    Ok(bps) => bps,
    Err(_) => unreachable!(),
};

/// Default number of relay-chain blocks a locker has to pay out a claim.
pub(crate) const TRANSFER_DEADLINE: u64 = 20;

/// Default estimate of the Bitcoin network fee a locker pays to serve a claim.
pub(crate) const BITCOIN_FEE: Amount = Amount::from_sat(10_000);
