use basket::types::AssetAllocation;
use soroban_sdk::{Address, Env, Symbol, Vec};

pub struct ContainerEvents {}

impl ContainerEvents {
    /// Emitted when the container is initialized
    ///
    /// - topics - `["initialize", manager: Address]`
    /// - data - `[share_token: Address, initial_deposit: i128]`
    pub fn initialize(env: &Env, manager: Address, share_token: Address, initial_deposit: i128) {
        let topics = (Symbol::new(env, "initialize"), manager);
        env.events()
            .publish(topics, (share_token, initial_deposit));
    }

    /// Emitted when an investor buys into the basket
    ///
    /// - topics - `["deposited", investor: Address]`
    /// - data - `[amount: i128, shares: i128]`
    pub fn deposited(env: &Env, investor: Address, amount: i128, shares: i128) {
        let topics = (Symbol::new(env, "deposited"), investor);
        env.events().publish(topics, (amount, shares));
    }

    /// Emitted when shares are burned and their proceeds queued
    ///
    /// - topics - `["withdrawal_requested", investor: Address]`
    /// - data - `[share_amount: i128, proceeds: i128]`
    pub fn withdrawal_requested(env: &Env, investor: Address, share_amount: i128, proceeds: i128) {
        let topics = (Symbol::new(env, "withdrawal_requested"), investor);
        env.events().publish(topics, (share_amount, proceeds));
    }

    /// - topics - `["withdrawal_sent", investor: Address]`
    /// - data - `[amount: i128]`
    pub fn withdrawal_sent(env: &Env, investor: Address, amount: i128) {
        let topics = (Symbol::new(env, "withdrawal_sent"), investor);
        env.events().publish(topics, amount);
    }

    /// Emitted once the basket has been liquidated for good
    ///
    /// - topics - `["container_closed"]`
    /// - data - `[reserved: i128]`
    pub fn container_closed(env: &Env, reserved: i128) {
        let topics = (Symbol::new(env, "container_closed"),);
        env.events().publish(topics, reserved);
    }

    pub fn asset_list_updated(env: &Env, basket: Vec<AssetAllocation>) {
        let topics = (Symbol::new(env, "asset_list_updated"),);
        env.events().publish(topics, basket);
    }

    pub fn whitelist_updated(env: &Env, account: Address, whitelisted: bool) {
        let topics = (Symbol::new(env, "whitelist_updated"), account);
        env.events().publish(topics, whitelisted);
    }

    pub fn min_deposit_updated(env: &Env, min_deposit_usd: i128) {
        let topics = (Symbol::new(env, "min_deposit_updated"),);
        env.events().publish(topics, min_deposit_usd);
    }

    /// - topics - `["paused", admin: Address]`
    pub fn paused(env: &Env, admin: Address) {
        let topics = (Symbol::new(env, "paused"), admin);
        env.events().publish(topics, ());
    }

    /// - topics - `["unpaused", admin: Address]`
    pub fn unpaused(env: &Env, admin: Address) {
        let topics = (Symbol::new(env, "unpaused"), admin);
        env.events().publish(topics, ());
    }

    /// - topics - `["new_price_feed_address"]`
    /// - data - `[address: Address]`
    pub fn new_price_feed_address(env: &Env, address: Address) {
        let topics = (Symbol::new(env, "new_price_feed_address"),);
        env.events().publish(topics, address);
    }
}
