use basket::{
    testutils::PRICE_SCALE,
    types::{AssetAllocation, TradingRole},
};
use pretty_assertions::assert_eq;
use soroban_sdk::{vec, Address, Vec};

use super::setup::TradingTest;

const UNIT: i128 = PRICE_SCALE;

fn value_of(test: &TradingTest, owner: &Address, asset: &Address) -> i128 {
    let balance = test.trading.get_asset_balance(asset, owner);
    test.router.quote(asset, &test.base.address, &balance)
}

fn assert_weights(test: &TradingTest, owner: &Address, targets: &Vec<AssetAllocation>) {
    let total = test.trading.get_portfolio_value(owner);
    for allocation in targets.iter() {
        let target = total * i128::from(allocation.percentage) / 100;
        let actual = value_of(test, owner, &allocation.asset);
        assert!(
            (actual - target).abs() <= 10,
            "asset off target: {} vs {}",
            actual,
            target
        );
    }
}

#[test]
fn converges_after_price_drift() {
    let test = TradingTest::setup();
    let owner = test.trader(100 * UNIT);
    let basket = test.basket(&[50, 30, 20]);
    test.trading.buy_asset_list(&owner, &basket, &(100 * UNIT));

    // asset 0 rallies from 2.0 to 3.0 and becomes over-weight
    test.router.set_price(&test.asset(0), &(3 * PRICE_SCALE));
    let value_before = test.trading.get_portfolio_value(&owner);
    assert_eq!(value_before, 125 * UNIT);

    test.trading.rebalance_asset_list(&owner, &basket);

    assert_weights(&test, &owner, &basket);
    assert!(test.trading.get_portfolio_value(&owner) >= value_before - 10);
    assert_eq!(test.base.balance(&test.trading.address), 0);
}

#[test]
fn moves_into_a_new_basket() {
    let test = TradingTest::setup();
    let owner = test.trader(100 * UNIT);
    test.trading
        .buy_asset_list(&owner, &test.basket(&[50, 30, 20]), &(100 * UNIT));

    let target = vec![
        &test.env,
        AssetAllocation {
            asset: test.asset(0),
            percentage: 40,
        },
        AssetAllocation {
            asset: test.asset(3),
            percentage: 60,
        },
    ];
    test.trading.rebalance_asset_list(&owner, &target);

    // dropped assets are fully liquidated
    assert_eq!(test.trading.get_asset_balance(&test.asset(1), &owner), 0);
    assert_eq!(test.trading.get_asset_balance(&test.asset(2), &owner), 0);
    assert_eq!(test.trading.get_asset_balance(&test.asset(0), &owner), 20 * UNIT);
    assert_eq!(test.trading.get_asset_balance(&test.asset(3), &owner), 15 * UNIT);
    assert_weights(&test, &owner, &target);
    assert_eq!(test.trading.get_portfolio_value(&owner), 100 * UNIT);
}

#[test]
fn balanced_portfolio_is_left_alone() {
    let test = TradingTest::setup();
    let owner = test.trader(100 * UNIT);
    let basket = test.basket(&[50, 30, 20]);
    test.trading.buy_asset_list(&owner, &basket, &(100 * UNIT));

    test.trading.rebalance_asset_list(&owner, &basket);

    assert_eq!(test.trading.get_asset_balance(&test.asset(0), &owner), 25 * UNIT);
    assert_eq!(test.trading.get_asset_balance(&test.asset(1), &owner), 60 * UNIT);
    assert_eq!(test.trading.get_asset_balance(&test.asset(2), &owner), 20 * UNIT);
}

#[test]
#[should_panic(expected = "Error(Contract, #1)")]
fn rejects_invalid_target() {
    let test = TradingTest::setup();
    let owner = test.trader(100 * UNIT);
    test.trading
        .buy_asset_list(&owner, &test.basket(&[50, 30, 20]), &(100 * UNIT));

    test.trading
        .rebalance_asset_list(&owner, &test.basket(&[50, 30, 30]));
}

#[test]
#[should_panic(expected = "Error(Contract, #20)")]
fn requires_trader_role() {
    let test = TradingTest::setup();
    let owner = test.trader(100 * UNIT);
    let basket = test.basket(&[50, 30, 20]);
    test.trading.buy_asset_list(&owner, &basket, &(100 * UNIT));
    test.trading
        .revoke_role(&test.admin, &TradingRole::Trader, &owner);

    test.trading.rebalance_asset_list(&owner, &basket);
}
