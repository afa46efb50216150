//! Parameters governing fee math and dispute timing in the redemption router.

use bitcoin::Amount;
use serde::{Deserialize, Serialize};

use crate::{
    default::{BITCOIN_FEE, PROTOCOL_FEE, SLASHER_REWARD, TRANSFER_DEADLINE},
    types::Bps,
};

/// The tunable parameters of the redemption router.
///
/// Owned by the router and replaced field-wise through its privileged setters; every change
/// surfaces as an (old, new) pair so hosts can audit parameter history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouterParams {
    /// Protocol fee charged on each redemption, in basis points of the requested amount.
    pub protocol_fee: Bps,

    /// Share of a stolen value paid to the reporter of a theft dispute, in basis points.
    pub slasher_reward: Bps,

    /// Number of relay-chain blocks a locker has to pay out a claim after it is created.
    ///
    /// Must strictly exceed the relay's finalization parameter; the router enforces this at
    /// construction and on every update.
    pub transfer_deadline: u64,

    /// Fixed estimate of the Bitcoin network fee a locker pays to serve a claim, deducted
    /// from the burnt amount when computing the expected payout.
    #[serde(with = "bitcoin::amount::serde::as_sat")]
    pub bitcoin_fee: Amount,
}

impl Default for RouterParams {
    fn default() -> Self {
        Self {
            protocol_fee: PROTOCOL_FEE,
            slasher_reward: SLASHER_REWARD,
            transfer_deadline: TRANSFER_DEADLINE,
            bitcoin_fee: BITCOIN_FEE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_router_params_serde() {
        let params = RouterParams::default();
        let serialized = toml::to_string(&params).unwrap();

        let deserialized: RouterParams = toml::from_str(&serialized).unwrap();

        assert_eq!(params, deserialized);

        let params_toml = r#"
            protocol_fee = 5
            slasher_reward = 5
            transfer_deadline = 20
            bitcoin_fee = 10000
        "#;
        assert!(
            toml::from_str::<RouterParams>(params_toml).is_ok(),
            "must be able to deserialize RouterParams from a toml"
        );
    }

    #[test]
    fn test_router_params_reject_out_of_range_rate() {
        let params_toml = r#"
            protocol_fee = 10001
            slasher_reward = 5
            transfer_deadline = 20
            bitcoin_fee = 10000
        "#;
        assert!(
            toml::from_str::<RouterParams>(params_toml).is_err(),
            "rates above 10000 bps must fail to deserialize"
        );
    }
}
