use soroban_sdk::{Address, BytesN, Env, Symbol};

pub struct FactoryEvents {}

impl FactoryEvents {
    /// - topics - `["initialize", admin: Address]`
    /// - data - `[base_token: Address, trading: Address, price_oracle: Address]`
    pub fn initialize(
        env: &Env,
        admin: Address,
        base_token: Address,
        trading: Address,
        price_oracle: Address,
    ) {
        let topics = (Symbol::new(env, "initialize"), admin);
        env.events()
            .publish(topics, (base_token, trading, price_oracle));
    }

    /// Emitted when a container and its share token are deployed
    ///
    /// - topics - `["new_container", container: Address]`
    /// - data - `[manager: Address, share_token: Address]`
    pub fn new_container(env: &Env, container: Address, manager: Address, share_token: Address) {
        let topics = (Symbol::new(env, "new_container"), container);
        env.events().publish(topics, (manager, share_token));
    }

    /// - topics - `["new_price_feed_address"]`
    /// - data - `[address: Address]`
    pub fn new_price_feed_address(env: &Env, address: Address) {
        let topics = (Symbol::new(env, "new_price_feed_address"),);
        env.events().publish(topics, address);
    }

    /// - topics - `["new_trading_address"]`
    /// - data - `[address: Address]`
    pub fn new_trading_address(env: &Env, address: Address) {
        let topics = (Symbol::new(env, "new_trading_address"),);
        env.events().publish(topics, address);
    }

    pub fn update_wasm_hashes(
        env: &Env,
        container_wasm_hash: BytesN<32>,
        share_token_wasm_hash: BytesN<32>,
    ) {
        let topics = (Symbol::new(env, "update_wasm_hashes"),);
        env.events()
            .publish(topics, (container_wasm_hash, share_token_wasm_hash));
    }
}
