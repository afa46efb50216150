//! Unit tests for construction and the authority-gated setters.
#[cfg(test)]
mod tests {
    use bitcoin::Amount;
    use cinder_bridge_params::{router::RouterParams, types::Bps};
    use cinder_bridge_primitives::{relay::HeaderRelay, types::AccountId};
    use cinder_bridge_test_utils::{
        bitcoin::generate_account_id,
        mocks::{MockLockers, MockRelay, MockToken},
    };

    use crate::{
        errors::RouterError,
        events::ParamUpdate,
        router::{BurnRouter, RouterAccounts},
        tests::*,
    };

    fn try_build(
        accounts: RouterAccounts,
        relay: MockRelay,
    ) -> Result<BurnRouter<MockRelay, MockLockers, MockToken>, RouterError> {
        BurnRouter::new(
            RouterParams::default(),
            accounts,
            relay,
            MockLockers::new(),
            MockToken::new(),
        )
    }

    fn accounts() -> RouterAccounts {
        RouterAccounts {
            authority: generate_account_id(),
            account: generate_account_id(),
            treasury: generate_account_id(),
        }
    }

    #[test]
    fn construction_rejects_zero_accounts() {
        let mut zero_authority = accounts();
        zero_authority.authority = AccountId::ZERO;
        assert!(matches!(
            try_build(zero_authority, MockRelay::new(INITIAL_HEIGHT, FINALIZATION)),
            Err(RouterError::ZeroAddress)
        ));

        let mut zero_treasury = accounts();
        zero_treasury.treasury = AccountId::ZERO;
        assert!(matches!(
            try_build(zero_treasury, MockRelay::new(INITIAL_HEIGHT, FINALIZATION)),
            Err(RouterError::ZeroAddress)
        ));

        let zero_relay = MockRelay::new(INITIAL_HEIGHT, FINALIZATION);
        zero_relay.set_address(AccountId::ZERO);
        assert!(matches!(
            try_build(accounts(), zero_relay),
            Err(RouterError::ZeroAddress)
        ));
    }

    #[test]
    fn construction_rejects_deadline_within_finalization() {
        // RouterParams::default() has transfer_deadline 20; a relay requiring 20 leaves no
        // window for a payment to finalize before the claim expires
        let relay = MockRelay::new(INITIAL_HEIGHT, 20);
        assert!(matches!(
            try_build(accounts(), relay),
            Err(RouterError::LowDeadline {
                deadline: 20,
                finalization: 20,
            })
        ));
    }

    #[test]
    fn setters_require_the_authority() {
        let mut harness = harness();
        let stranger = generate_account_id();

        assert!(matches!(
            harness.router.set_protocol_fee(stranger, 10),
            Err(RouterError::NotAuthorized)
        ));
        assert!(matches!(
            harness.router.set_slasher_reward(stranger, 10),
            Err(RouterError::NotAuthorized)
        ));
        assert!(matches!(
            harness.router.set_transfer_deadline(stranger, 50),
            Err(RouterError::NotAuthorized)
        ));
        assert!(matches!(
            harness.router.set_bitcoin_fee(stranger, Amount::from_sat(1)),
            Err(RouterError::NotAuthorized)
        ));
        assert!(matches!(
            harness
                .router
                .set_relay(stranger, MockRelay::new(INITIAL_HEIGHT, FINALIZATION)),
            Err(RouterError::NotAuthorized)
        ));
        assert!(matches!(
            harness.router.set_lockers(stranger, MockLockers::new()),
            Err(RouterError::NotAuthorized)
        ));
        assert!(matches!(
            harness.router.set_token(stranger, MockToken::new()),
            Err(RouterError::NotAuthorized)
        ));
        assert!(matches!(
            harness.router.set_treasury(stranger, generate_account_id()),
            Err(RouterError::NotAuthorized)
        ));
    }

    #[test]
    fn fee_rates_are_range_checked() {
        let mut harness = harness();

        let update = harness.router.set_protocol_fee(harness.authority, 20).unwrap();
        assert_eq!(
            update,
            ParamUpdate {
                old: Bps::new(5).unwrap(),
                new: Bps::new(20).unwrap(),
            },
        );
        assert_eq!(harness.router.params().protocol_fee, Bps::new(20).unwrap());

        assert!(matches!(
            harness.router.set_protocol_fee(harness.authority, 10_001),
            Err(RouterError::InvalidFee(_))
        ));
        assert!(matches!(
            harness.router.set_slasher_reward(harness.authority, 10_001),
            Err(RouterError::InvalidReward(_))
        ));
    }

    #[test]
    fn transfer_deadline_must_clear_finalization() {
        let mut harness = harness();

        assert!(matches!(
            harness
                .router
                .set_transfer_deadline(harness.authority, FINALIZATION),
            Err(RouterError::LowDeadline { .. })
        ));

        let update = harness
            .router
            .set_transfer_deadline(harness.authority, FINALIZATION + 1)
            .unwrap();
        assert_eq!(
            update,
            ParamUpdate {
                old: TRANSFER_DEADLINE,
                new: FINALIZATION + 1,
            },
        );

        // the next claim expires on the new schedule
        let event = create_claim(&mut harness);
        assert_eq!(event.deadline, INITIAL_HEIGHT + FINALIZATION + 1);
    }

    #[test]
    fn bitcoin_fee_applies_to_subsequent_claims() {
        let mut harness = harness();

        let update = harness
            .router
            .set_bitcoin_fee(harness.authority, Amount::from_sat(25_000))
            .unwrap();
        assert_eq!(update.old, Amount::from_sat(BITCOIN_FEE));

        let event = create_claim(&mut harness);
        assert_eq!(
            event.burnt_amount,
            Amount::from_sat(EXPECTED_PAYOUT + BITCOIN_FEE - 25_000),
        );
    }

    #[test]
    fn endpoints_can_be_replaced() {
        let mut harness = harness();

        let new_relay = MockRelay::new(INITIAL_HEIGHT + 40, FINALIZATION);
        let new_address = new_relay.address();
        let update = harness
            .router
            .set_relay(harness.authority, new_relay)
            .unwrap();
        assert_eq!(update.new, new_address);

        // claim deadlines now follow the new relay's tip
        let event = create_claim(&mut harness);
        assert_eq!(event.deadline, INITIAL_HEIGHT + 40 + TRANSFER_DEADLINE);

        let zero_token = MockToken::new();
        zero_token.set_address(AccountId::ZERO);
        assert!(matches!(
            harness.router.set_token(harness.authority, zero_token),
            Err(RouterError::ZeroAddress)
        ));
    }

    #[test]
    fn treasury_change_redirects_fees() {
        let mut harness = harness();
        let new_treasury = generate_account_id();

        let update = harness
            .router
            .set_treasury(harness.authority, new_treasury)
            .unwrap();
        assert_eq!(
            update,
            ParamUpdate {
                old: harness.treasury,
                new: new_treasury,
            },
        );
        assert!(matches!(
            harness.router.set_treasury(harness.authority, AccountId::ZERO),
            Err(RouterError::ZeroAddress)
        ));

        create_claim(&mut harness);
        assert_eq!(harness.token.transfers(), vec![(new_treasury, EXPECTED_FEE)]);
    }
}
