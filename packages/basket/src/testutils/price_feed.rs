use soroban_sdk::{contract, contractimpl, contracttype, Env};

use crate::types::{Asset, PriceData};

#[derive(Clone)]
#[contracttype]
enum DataKey {
    Decimals,
    Price,
}

/// Feed answering the same price for every asset
#[contract]
pub struct MockPriceFeed;

#[contractimpl]
impl MockPriceFeed {
    pub fn __constructor(env: Env, decimals: u32) {
        env.storage().instance().set(&DataKey::Decimals, &decimals);
    }

    pub fn set_price(env: Env, price: i128, timestamp: u64) {
        env.storage()
            .instance()
            .set(&DataKey::Price, &PriceData { price, timestamp });
    }

    pub fn clear_price(env: Env) {
        env.storage().instance().remove(&DataKey::Price);
    }

    pub fn decimals(env: Env) -> u32 {
        env.storage()
            .instance()
            .get(&DataKey::Decimals)
            .unwrap_or(8)
    }

    pub fn lastprice(env: Env, _asset: Asset) -> Option<PriceData> {
        env.storage().instance().get(&DataKey::Price)
    }
}
