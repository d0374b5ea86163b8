use basket::types::Asset;
use soroban_sdk::{Address, Env};

use crate::storage::Config;

pub trait PriceOracleTrait {
    fn initialize(env: Env, admin: Address, price_feed: Address, asset: Asset, max_age: u64);

    fn set_price_feed_address(env: Env, sender: Address, price_feed: Address);

    fn update_config(env: Env, sender: Address, asset: Option<Asset>, max_age: Option<u64>);

    // ################################################################
    //                             Queries
    // ################################################################

    /// USD price of one unit of base currency, scaled by `decimals()`
    fn get_latest_price(env: Env) -> i128;

    fn decimals(env: Env) -> u32;

    /// USD value of `amount` base currency, in the decimals of `amount`
    fn get_usd_value(env: Env, amount: i128) -> i128;

    fn get_price_feed_address(env: Env) -> Address;

    fn get_admin(env: Env) -> Address;

    fn query_config(env: Env) -> Config;
}
