use basket::{
    testutils::PRICE_SCALE,
    types::{OperationalState, TradingRole},
};
use pretty_assertions::assert_eq;
use soroban_sdk::{testutils::Address as _, Address};

use super::setup::{mint, TradingTest};
use crate::storage::Config;

#[test]
fn initializes_config_and_admin_role() {
    let test = TradingTest::setup();

    assert_eq!(
        test.trading.query_config(),
        Config {
            admin: test.admin.clone(),
            base_token: test.base.address.clone(),
            router: test.router.address.clone(),
        }
    );
    assert!(test.trading.has_role(&TradingRole::Admin, &test.admin));
    assert_eq!(test.trading.get_state(), OperationalState::Active);
}

#[test]
#[should_panic(expected = "Error(Contract, #30)")]
fn initializing_twice_fails() {
    let test = TradingTest::setup();

    test.trading
        .initialize(&test.admin, &test.base.address, &test.router.address);
}

#[test]
fn registrar_grants_only_trader() {
    let test = TradingTest::setup();
    let registrar = Address::generate(&test.env);
    let container = Address::generate(&test.env);

    test.trading
        .grant_role(&test.admin, &TradingRole::Registrar, &registrar);
    test.trading
        .grant_role(&registrar, &TradingRole::Trader, &container);
    assert!(test.trading.has_role(&TradingRole::Trader, &container));

    assert!(test
        .trading
        .try_grant_role(&registrar, &TradingRole::Admin, &container)
        .is_err());
    assert!(!test.trading.has_role(&TradingRole::Admin, &container));
}

#[test]
fn admin_revokes_roles() {
    let test = TradingTest::setup();
    let trader = test.trader(0);

    test.trading
        .revoke_role(&test.admin, &TradingRole::Trader, &trader);

    assert!(!test.trading.has_role(&TradingRole::Trader, &trader));
}

#[test]
#[should_panic(expected = "Error(Contract, #20)")]
fn non_admin_can_not_grant_roles() {
    let test = TradingTest::setup();
    let user = Address::generate(&test.env);

    test.trading
        .grant_role(&user, &TradingRole::Trader, &user);
}

#[test]
fn pause_blocks_trading_until_unpaused() {
    let test = TradingTest::setup();
    let owner = test.trader(100 * PRICE_SCALE);
    let basket = test.basket(&[50, 50]);

    test.trading.pause(&test.admin);
    assert_eq!(test.trading.get_state(), OperationalState::Paused);
    assert!(test
        .trading
        .try_buy_asset_list(&owner, &basket, &1_000)
        .is_err());
    assert!(test.trading.try_pause(&test.admin).is_err());

    test.trading.unpause(&test.admin);
    assert_eq!(test.trading.get_state(), OperationalState::Active);
    test.trading.buy_asset_list(&owner, &basket, &1_000);
}

#[test]
#[should_panic(expected = "Error(Contract, #33)")]
fn paused_engine_rejects_swaps() {
    let test = TradingTest::setup();
    let owner = test.trader(0);

    test.trading.pause(&test.admin);
    test.trading
        .swap_asset(&owner, &1, &test.asset(0), &test.asset(1));
}

#[test]
#[should_panic(expected = "Error(Contract, #20)")]
fn only_admin_pauses() {
    let test = TradingTest::setup();
    let user = Address::generate(&test.env);

    test.trading.pause(&user);
}

#[test]
fn admin_sweeps_base_currency() {
    let test = TradingTest::setup();
    let receiver = Address::generate(&test.env);
    mint(&test.env, &test.base.address, &test.trading.address, 500);

    test.trading.transfer_to(&test.admin, &receiver, &500);

    assert_eq!(test.base.balance(&receiver), 500);
    assert_eq!(test.base.balance(&test.trading.address), 0);
}

#[test]
fn admin_updates_router() {
    let test = TradingTest::setup();
    let router = Address::generate(&test.env);

    test.trading.update_router(&test.admin, &router);

    assert_eq!(test.trading.query_config().router, router);
}
