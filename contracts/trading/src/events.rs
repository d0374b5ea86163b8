use basket::types::TradingRole;
use soroban_sdk::{Address, Env, Symbol};

pub struct TradingEvents {}

impl TradingEvents {
    /// Emitted when the engine is initialized
    ///
    /// - topics - `["initialize", admin: Address]`
    /// - data - `[base_token: Address, router: Address]`
    pub fn initialize(env: &Env, admin: Address, base_token: Address, router: Address) {
        let topics = (Symbol::new(env, "initialize"), admin);
        env.events().publish(topics, (base_token, router));
    }

    /// Emitted for every leg executed against the swap venue
    ///
    /// - topics - `["trade_asset", owner: Address]`
    /// - data - `[asset_in: Address, asset_out: Address, amount_in: i128, amount_out: i128]`
    pub fn trade_asset(
        env: &Env,
        owner: Address,
        asset_in: Address,
        asset_out: Address,
        amount_in: i128,
        amount_out: i128,
    ) {
        let topics = (Symbol::new(env, "trade_asset"), owner);
        env.events()
            .publish(topics, (asset_in, asset_out, amount_in, amount_out));
    }

    pub fn role_granted(env: &Env, role: TradingRole, account: Address) {
        let topics = (Symbol::new(env, "role_granted"), account);
        env.events().publish(topics, role);
    }

    pub fn role_revoked(env: &Env, role: TradingRole, account: Address) {
        let topics = (Symbol::new(env, "role_revoked"), account);
        env.events().publish(topics, role);
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

    /// Emitted when base currency is swept out of the engine
    ///
    /// - topics - `["transfer", to: Address]`
    /// - data - `[amount: i128]`
    pub fn transfer(env: &Env, to: Address, amount: i128) {
        let topics = (Symbol::new(env, "transfer"), to);
        env.events().publish(topics, amount);
    }

    pub fn update_router(env: &Env, router: Address) {
        let topics = (Symbol::new(env, "update_router"),);
        env.events().publish(topics, router);
    }
}
