use basket::types::{AssetAllocation, OperationalState};
use pretty_assertions::assert_eq;
use soroban_sdk::vec;

use super::setup::{ContainerTest, UNIT};

#[test]
fn set_asset_list_liquidates_and_rebuys() {
    let test = ContainerTest::setup();
    let basket = vec![
        &test.env,
        AssetAllocation {
            asset: test.asset(2),
            percentage: 50,
        },
        AssetAllocation {
            asset: test.asset(4),
            percentage: 50,
        },
    ];

    test.container.set_asset_list(&test.manager, &basket);

    assert_eq!(test.container.get_asset_list(), basket);
    assert_eq!(
        test.trading
            .get_asset_balance(&test.asset(0), &test.container.address),
        0
    );
    // 2 units split in half, both assets priced 1.0
    assert_eq!(
        test.trading
            .get_asset_balance(&test.asset(2), &test.container.address),
        UNIT
    );
    assert_eq!(
        test.trading
            .get_asset_balance(&test.asset(4), &test.container.address),
        UNIT
    );
    assert_eq!(test.container.get_nav(), 2 * UNIT);
}

#[test]
#[should_panic(expected = "Error(Contract, #1)")]
fn set_asset_list_rejects_invalid_basket() {
    let test = ContainerTest::setup();

    test.container
        .set_asset_list(&test.manager, &test.basket(&[50, 40]));
}

#[test]
#[should_panic(expected = "Error(Contract, #20)")]
fn set_asset_list_requires_manager() {
    let test = ContainerTest::setup();

    test.container
        .set_asset_list(&test.admin, &test.basket(&[50, 50]));
}

#[test]
fn rebalance_moves_only_the_deltas() {
    let test = ContainerTest::setup();
    let basket = test.basket(&[25, 10, 25, 10, 30]);

    test.container.rebalance_asset_list(&test.manager, &basket);

    assert_eq!(test.container.get_asset_list(), basket);
    // asset 0 drops from 0.9 to 0.5 units of value, asset 4 grows from 0.2 to 0.6
    assert_eq!(
        test.trading
            .get_asset_balance(&test.asset(0), &test.container.address),
        2500000
    );
    assert_eq!(
        test.trading
            .get_asset_balance(&test.asset(4), &test.container.address),
        6000000
    );
    assert_eq!(
        test.trading
            .get_asset_balance(&test.asset(1), &test.container.address),
        4000000
    );
    assert_eq!(test.container.get_nav(), 2 * UNIT);
}

#[test]
fn close_liquidates_into_reserve() {
    let test = ContainerTest::setup();
    let investor = test.investor(85 * UNIT / 10);
    test.container.deposit(&investor, &(85 * UNIT / 10));

    let reserved = test.container.close_container(&test.manager);

    assert_eq!(reserved, 105 * UNIT / 10);
    assert_eq!(test.container.get_reserved_balance(), reserved);
    assert_eq!(test.base.balance(&test.container.address), reserved);
    assert_eq!(test.container.get_state(), OperationalState::Closed);
    assert!(!test.container.is_active());
    assert_eq!(test.trading.get_portfolio_value(&test.container.address), 0);
}

#[test]
fn holders_redeem_from_reserve_after_close() {
    let test = ContainerTest::setup();
    let investor = test.investor(85 * UNIT / 10);
    let shares = test.container.deposit(&investor, &(85 * UNIT / 10));
    test.container.close_container(&test.manager);
    test.approve(&investor, shares);

    let proceeds = test.container.withdrawal_request(&investor, &shares);

    // 17595 of 26250 shares after the 8% exit fee
    assert_eq!(proceeds, 70380000);
    assert_eq!(test.container.get_reserved_balance(), 34620000);
    assert_eq!(test.container.withdraw(&investor), proceeds);
    assert_eq!(test.base.balance(&investor), proceeds);
}

#[test]
#[should_panic(expected = "Error(Contract, #32)")]
fn deposit_after_close_fails() {
    let test = ContainerTest::setup();
    test.container.close_container(&test.manager);
    let investor = test.investor(85 * UNIT / 10);

    test.container.deposit(&investor, &(85 * UNIT / 10));
}

#[test]
#[should_panic(expected = "Error(Contract, #32)")]
fn close_twice_fails() {
    let test = ContainerTest::setup();
    test.container.close_container(&test.manager);

    test.container.close_container(&test.manager);
}

#[test]
#[should_panic(expected = "Error(Contract, #32)")]
fn rebalance_after_close_fails() {
    let test = ContainerTest::setup();
    test.container.close_container(&test.manager);

    test.container
        .rebalance_asset_list(&test.manager, &test.basket(&[50, 50]));
}

#[test]
#[should_panic(expected = "Error(Contract, #20)")]
fn close_requires_manager() {
    let test = ContainerTest::setup();

    test.container.close_container(&test.admin);
}
