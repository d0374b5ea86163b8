use soroban_sdk::{Address, Env, Symbol};

pub struct PriceOracleEvents {}

impl PriceOracleEvents {
    /// - topics - `["initialize", admin: Address]`
    /// - data - `[price_feed: Address]`
    pub fn initialize(env: &Env, admin: Address, price_feed: Address) {
        let topics = (Symbol::new(env, "initialize"), admin);
        env.events().publish(topics, price_feed);
    }

    /// Emitted when the adapter is pointed at another feed
    ///
    /// - topics - `["new_price_feed_address"]`
    /// - data - `[price_feed: Address]`
    pub fn new_price_feed_address(env: &Env, price_feed: Address) {
        let topics = (Symbol::new(env, "new_price_feed_address"),);
        env.events().publish(topics, price_feed);
    }
}
