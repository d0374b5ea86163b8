use basket::{
    testutils::{MockPriceFeed, MockPriceFeedClient},
    types::Asset,
};
use soroban_sdk::{testutils::Address as _, Address, Env};

use crate::contract::{PriceOracle, PriceOracleClient};

pub const FEED_DECIMALS: u32 = 8;
pub const MAX_AGE: u64 = 300;

pub fn deploy_price_feed_contract<'a>(env: &Env, price: i128) -> MockPriceFeedClient<'a> {
    let feed = MockPriceFeedClient::new(env, &env.register(MockPriceFeed, (FEED_DECIMALS,)));
    feed.set_price(&price, &env.ledger().timestamp());
    feed
}

pub fn deploy_price_oracle_contract<'a>(
    env: &Env,
    admin: &Address,
    price_feed: &Address,
) -> PriceOracleClient<'a> {
    let oracle = PriceOracleClient::new(env, &env.register(PriceOracle, ()));
    let base = Asset::Stellar(Address::generate(env));

    oracle.initialize(admin, price_feed, &base, &MAX_AGE);

    oracle
}
