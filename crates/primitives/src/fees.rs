//! Pure fee arithmetic for redemption amounts.
//!
//! All rates round down; the remainder always stays with the redeeming holder, never with the
//! fee recipient.

use bitcoin::Amount;
use cinder_bridge_params::types::Bps;

/// Protocol fee taken from a requested amount.
pub const fn protocol_fee(requested: u64, rate: Bps) -> u64 {
    rate.apply(requested)
}

/// Amount forwarded to the locker registry's burn, after the protocol fee.
pub const fn net_after_fee(requested: u64, rate: Bps) -> u64 {
    requested - protocol_fee(requested, rate)
}

/// Expected Bitcoin-side payment for a burnt amount, after the fixed network-fee estimate.
///
/// `None` when the burnt amount does not cover the estimate.
pub fn expected_payout(burnt: u64, bitcoin_fee: Amount) -> Option<Amount> {
    Amount::from_sat(burnt).checked_sub(bitcoin_fee)
}

/// Reward owed to the reporter of a theft, as a share of the stolen value.
pub fn slasher_reward(stolen: Amount, rate: Bps) -> Amount {
    Amount::from_sat(rate.apply(stolen.to_sat()))
}

#[cfg(test)]
mod tests {
    use proptest::{prelude::any, proptest};

    use super::*;

    /// The arithmetic walked by every request: 100_060_030 units at 5 bps leaves 100_010_000
    /// for the registry burn, and a 10_000 sat fee estimate leaves a 1 BTC payout.
    #[test]
    fn reference_amounts() {
        let rate = Bps::new(5).unwrap();
        let requested = 100_060_030;

        assert_eq!(protocol_fee(requested, rate), 50_030);
        assert_eq!(net_after_fee(requested, rate), 100_010_000);
        assert_eq!(
            expected_payout(net_after_fee(requested, rate), Amount::from_sat(10_000)),
            Some(Amount::from_sat(100_000_000)),
        );
    }

    #[test]
    fn payout_underflow() {
        assert_eq!(expected_payout(9_999, Amount::from_sat(10_000)), None);
        assert_eq!(
            expected_payout(10_000, Amount::from_sat(10_000)),
            Some(Amount::ZERO),
        );
    }

    #[test]
    fn reward_rounds_down() {
        let rate = Bps::new(5).unwrap();
        assert_eq!(
            slasher_reward(Amount::from_sat(1_000_000), rate),
            Amount::from_sat(500),
        );
        assert_eq!(slasher_reward(Amount::from_sat(1_999), rate), Amount::ZERO);
    }

    proptest! {
        #[test]
        fn fee_plus_net_is_total(requested in any::<u64>(), bps in 0u16..=10_000) {
            let rate = Bps::new(bps).unwrap();
            let fee = protocol_fee(requested, rate);
            let net = net_after_fee(requested, rate);

            assert_eq!(fee + net, requested);
            assert_eq!(fee, ((requested as u128 * bps as u128) / 10_000) as u64);
        }

        #[test]
        fn fee_never_exceeds_total(requested in any::<u64>(), bps in 0u16..=10_000) {
            let rate = Bps::new(bps).unwrap();
            assert!(protocol_fee(requested, rate) <= requested);
        }
    }
}
