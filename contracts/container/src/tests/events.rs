use basket::testutils::last_event;
use pretty_assertions::assert_eq;
use soroban_sdk::{Address, Env, IntoVal, Symbol, TryFromVal, Val, Vec};

use super::setup::{ContainerTest, UNIT};

fn topics(env: &Env, name: &str, account: Option<&Address>) -> Vec<Val> {
    match account {
        Some(account) => (Symbol::new(env, name), account.clone()).into_val(env),
        None => (Symbol::new(env, name),).into_val(env),
    }
}

fn event_data<T: TryFromVal<Env, Val>>(
    test: &ContainerTest,
    name: &str,
    account: Option<&Address>,
) -> T {
    let (found, data) = last_event(&test.env, &test.container.address, name)
        .unwrap_or_else(|| panic!("no {} event", name));
    assert_eq!(found, topics(&test.env, name, account));
    T::try_from_val(&test.env, &data).unwrap_or_else(|_| panic!("bad {} data", name))
}

#[test]
fn deposit_publishes_amount_and_shares() {
    let test = ContainerTest::setup();
    let investor = test.investor(85 * UNIT / 10);

    test.container.deposit(&investor, &(85 * UNIT / 10));

    let (amount, shares): (i128, i128) = event_data(&test, "deposited", Some(&investor));
    assert_eq!((amount, shares), (85 * UNIT / 10, 19125 * UNIT));
}

#[test]
fn withdrawal_publishes_request_then_payment() {
    let test = ContainerTest::setup();
    let investor = test.investor(85 * UNIT / 10);
    let shares = test.container.deposit(&investor, &(85 * UNIT / 10));
    test.approve(&investor, shares);

    let proceeds = test.container.withdrawal_request(&investor, &shares);
    let requested: (i128, i128) = event_data(&test, "withdrawal_requested", Some(&investor));
    assert_eq!(requested, (shares, proceeds));

    test.container.withdraw(&investor);
    let sent: i128 = event_data(&test, "withdrawal_sent", Some(&investor));
    assert_eq!(sent, proceeds);
}

#[test]
fn close_publishes_reserve() {
    let test = ContainerTest::setup();

    let reserved = test.container.close_container(&test.manager);

    let published: i128 = event_data(&test, "container_closed", None);
    assert_eq!(published, reserved);
    assert_eq!(published, 2 * UNIT);
}

#[test]
fn whitelist_changes_are_published() {
    let test = ContainerTest::setup();
    let investor = test.investor(0);

    test.container
        .include_in_whitelist(&test.manager, &investor);
    let whitelisted: bool = event_data(&test, "whitelist_updated", Some(&investor));
    assert!(whitelisted);

    test.container
        .remove_from_whitelist(&test.manager, &investor);
    let whitelisted: bool = event_data(&test, "whitelist_updated", Some(&investor));
    assert!(!whitelisted);
}
