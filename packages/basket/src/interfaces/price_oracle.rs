use soroban_sdk::{contractclient, Env};

#[contractclient(name = "PriceOracleClient")]
pub trait PriceOracleInterface {
    /// USD price of one unit of base currency, with `decimals()` decimals
    fn get_latest_price(env: Env) -> i128;

    fn decimals(env: Env) -> u32;
}
