use basket::{
    constants::PERCENTAGE_PRECISION,
    testutils::{count_events, PRICE_SCALE},
    types::{AssetBalance, TradingRole},
};
use pretty_assertions::assert_eq;
use soroban_sdk::{testutils::Address as _, vec, Address};
use test_case::test_case;

use super::setup::{mint, TradingTest};

const UNIT: i128 = PRICE_SCALE;

#[test]
fn buys_basket_proportionally() {
    let test = TradingTest::setup();
    let owner = test.trader(100 * UNIT);

    let received = test
        .trading
        .buy_asset_list(&owner, &test.basket(&[50, 30, 20]), &(100 * UNIT));

    assert_eq!(
        count_events(&test.env, &test.trading.address, "trade_asset"),
        3
    );
    assert_eq!(
        received,
        vec![
            &test.env,
            AssetBalance {
                asset: test.asset(0),
                balance: 25 * UNIT
            },
            AssetBalance {
                asset: test.asset(1),
                balance: 60 * UNIT
            },
            AssetBalance {
                asset: test.asset(2),
                balance: 20 * UNIT
            },
        ]
    );
    assert_eq!(test.base.balance(&owner), 0);
    assert_eq!(
        test.trading.get_asset_balance(&test.asset(0), &owner),
        25 * UNIT
    );
    assert_eq!(test.trading.get_assets_owned(&owner), received);
    assert_eq!(test.trading.get_portfolio_value(&owner), 100 * UNIT);
}

#[test]
#[should_panic(expected = "Error(Contract, #1)")]
fn buy_rejects_basket_not_summing_to_100() {
    let test = TradingTest::setup();
    let owner = test.trader(100 * UNIT);

    test.trading
        .buy_asset_list(&owner, &test.basket(&[50, 30, 10]), &(100 * UNIT));
}

#[test]
#[should_panic(expected = "Error(Contract, #5)")]
fn buy_rejects_zero_amount() {
    let test = TradingTest::setup();
    let owner = test.trader(100 * UNIT);

    test.trading
        .buy_asset_list(&owner, &test.basket(&[50, 50]), &0);
}

#[test]
fn sells_share_of_each_asset() {
    let test = TradingTest::setup();
    let owner = test.trader(100 * UNIT);
    let basket = test.basket(&[50, 30, 20]);
    test.trading.buy_asset_list(&owner, &basket, &(100 * UNIT));

    let proceeds = test
        .trading
        .sell_asset_list(&owner, &basket, &(50 * PERCENTAGE_PRECISION));

    assert_eq!(proceeds, 50 * UNIT);
    assert_eq!(test.base.balance(&owner), 50 * UNIT);
    assert_eq!(
        test.trading.get_asset_balance(&test.asset(0), &owner),
        25 * UNIT / 2
    );
    assert_eq!(
        test.trading.get_asset_balance(&test.asset(1), &owner),
        30 * UNIT
    );
    assert_eq!(
        test.trading.get_asset_balance(&test.asset(2), &owner),
        10 * UNIT
    );
    assert_eq!(test.base.balance(&test.trading.address), 0);
}

#[test]
fn selling_everything_empties_the_ledger() {
    let test = TradingTest::setup();
    let owner = test.trader(100 * UNIT);
    let basket = test.basket(&[50, 30, 20]);
    test.trading.buy_asset_list(&owner, &basket, &(100 * UNIT));

    let proceeds = test
        .trading
        .sell_asset_list(&owner, &basket, &(100 * PERCENTAGE_PRECISION));

    assert_eq!(proceeds, 100 * UNIT);
    assert_eq!(test.trading.get_portfolio_value(&owner), 0);
    assert_eq!(test.trading.get_assets_owned(&owner), vec![&test.env]);
}

#[test]
fn emptied_asset_leaves_the_owned_list() {
    let test = TradingTest::setup();
    let owner = test.trader(100 * UNIT);
    test.trading
        .buy_asset_list(&owner, &test.basket(&[50, 30, 20]), &(100 * UNIT));

    // all 25 units of asset 0
    test.trading
        .swap_asset(&owner, &(25 * UNIT), &test.asset(0), &test.asset(3));

    let owned = test.trading.get_assets_owned(&owner);
    assert_eq!(owned.len(), 3);
    assert!(owned.iter().all(|held| held.asset != test.asset(0)));
    assert_eq!(test.trading.get_asset_balance(&test.asset(0), &owner), 0);
    assert_eq!(test.trading.get_portfolio_value(&owner), 100 * UNIT);

    // buying it again puts it back
    let owner_funds = 10 * UNIT;
    mint(&test.env, &test.base.address, &owner, owner_funds);
    test.trading
        .buy_asset_list(&owner, &test.basket(&[100, 0, 0]), &owner_funds);
    assert_eq!(test.trading.get_assets_owned(&owner).len(), 4);
}

#[test_case(100 * PERCENTAGE_PRECISION + 1 => panics "Error(Contract, #3)" ; "above one hundred percent")]
#[test_case(-1 => panics "Error(Contract, #5)" ; "negative share")]
fn sell_rejects_share_out_of_range(share_pct: i128) {
    let test = TradingTest::setup();
    let owner = test.trader(100 * UNIT);
    let basket = test.basket(&[50, 30, 20]);
    test.trading.buy_asset_list(&owner, &basket, &(100 * UNIT));

    test.trading.sell_asset_list(&owner, &basket, &share_pct);
}

#[test]
#[should_panic(expected = "Error(Contract, #20)")]
fn sell_requires_trader_role() {
    let test = TradingTest::setup();
    let owner = Address::generate(&test.env);
    mint(&test.env, &test.base.address, &owner, 100 * UNIT);
    let basket = test.basket(&[50, 30, 20]);
    test.trading.buy_asset_list(&owner, &basket, &(100 * UNIT));

    test.trading
        .sell_asset_list(&owner, &basket, &(50 * PERCENTAGE_PRECISION));
}

#[test]
fn swaps_between_assets() {
    let test = TradingTest::setup();
    let owner = test.trader(100 * UNIT);
    test.trading
        .buy_asset_list(&owner, &test.basket(&[50, 30, 20]), &(100 * UNIT));

    // 10 units of asset 0 are worth 20 base, i.e. 5 units of asset 3
    let amount_out = test
        .trading
        .swap_asset(&owner, &(10 * UNIT), &test.asset(0), &test.asset(3));

    assert_eq!(amount_out, 5 * UNIT);
    assert_eq!(
        test.trading.get_asset_balance(&test.asset(0), &owner),
        15 * UNIT
    );
    assert_eq!(
        test.trading.get_asset_balance(&test.asset(3), &owner),
        5 * UNIT
    );
    assert_eq!(test.trading.get_assets_owned(&owner).len(), 4);
    assert_eq!(test.trading.get_portfolio_value(&owner), 100 * UNIT);
}

#[test]
#[should_panic(expected = "Error(Contract, #42)")]
fn swap_more_than_balance_fails() {
    let test = TradingTest::setup();
    let owner = test.trader(100 * UNIT);
    test.trading
        .buy_asset_list(&owner, &test.basket(&[50, 30, 20]), &(100 * UNIT));

    test.trading
        .swap_asset(&owner, &(25 * UNIT + 1), &test.asset(0), &test.asset(1));
}

/// `None` stands for the base currency
#[test_case(Some(0), Some(0) => panics "Error(Contract, #8)" ; "same asset")]
#[test_case(Some(0), None => panics "Error(Contract, #8)" ; "into base currency")]
#[test_case(None, Some(1) => panics "Error(Contract, #8)" ; "from base currency")]
fn swap_rejects_invalid_pair(from: Option<u32>, to: Option<u32>) {
    let test = TradingTest::setup();
    let owner = test.trader(100 * UNIT);
    test.trading
        .buy_asset_list(&owner, &test.basket(&[50, 30, 20]), &(100 * UNIT));

    let side = |index: Option<u32>| match index {
        Some(index) => test.asset(index),
        None => test.base.address.clone(),
    };
    test.trading
        .swap_asset(&owner, &UNIT, &side(from), &side(to));
}

#[test]
fn venue_failure_leaves_state_untouched() {
    let test = TradingTest::setup();
    let owner = test.trader(100 * UNIT);
    let basket = test.basket(&[50, 30, 20]);
    test.trading.buy_asset_list(&owner, &basket, &(50 * UNIT));

    test.router.set_failing(&true);

    assert!(test
        .trading
        .try_buy_asset_list(&owner, &basket, &(50 * UNIT))
        .is_err());
    assert!(test
        .trading
        .try_sell_asset_list(&owner, &basket, &(100 * PERCENTAGE_PRECISION))
        .is_err());

    assert_eq!(test.base.balance(&owner), 50 * UNIT);
    assert_eq!(
        test.trading.get_asset_balance(&test.asset(0), &owner),
        25 * UNIT / 2
    );
    assert_eq!(test.trading.get_portfolio_value(&owner), 50 * UNIT);
}

#[test]
fn ledgers_are_isolated_per_owner() {
    let test = TradingTest::setup();
    let first = test.trader(100 * UNIT);
    let second = test.trader(40 * UNIT);
    let basket = test.basket(&[50, 30, 20]);

    test.trading.buy_asset_list(&first, &basket, &(100 * UNIT));
    test.trading.buy_asset_list(&second, &basket, &(40 * UNIT));
    test.trading
        .sell_asset_list(&second, &basket, &(100 * PERCENTAGE_PRECISION));

    assert_eq!(test.trading.get_portfolio_value(&first), 100 * UNIT);
    assert_eq!(test.trading.get_portfolio_value(&second), 0);
    assert!(test.trading.has_role(&TradingRole::Trader, &second));
}
