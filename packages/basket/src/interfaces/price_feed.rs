use soroban_sdk::{contractclient, Env};

use crate::types::{Asset, PriceData};

/// External price network (Reflector style feed)
#[contractclient(name = "PriceFeedClient")]
pub trait PriceFeedInterface {
    fn decimals(env: Env) -> u32;

    fn lastprice(env: Env, asset: Asset) -> Option<PriceData>;
}
