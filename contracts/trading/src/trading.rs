use basket::types::{AssetAllocation, AssetBalance, OperationalState, TradingRole};
use soroban_sdk::{Address, Env, Vec};

use crate::storage::Config;

pub trait TradingTrait {
    fn initialize(env: Env, admin: Address, base_token: Address, router: Address);

    fn grant_role(env: Env, sender: Address, role: TradingRole, account: Address);

    fn revoke_role(env: Env, sender: Address, role: TradingRole, account: Address);

    fn pause(env: Env, sender: Address);

    fn unpause(env: Env, sender: Address);

    fn update_router(env: Env, sender: Address, router: Address);

    /// Sends base currency held by the engine to `to`
    fn transfer_to(env: Env, sender: Address, to: Address, amount: i128);

    // ################################################################
    //                             Trading
    // ################################################################

    fn buy_asset_list(
        env: Env,
        owner: Address,
        allocations: Vec<AssetAllocation>,
        amount_in: i128,
    ) -> Vec<AssetBalance>;

    fn sell_asset_list(
        env: Env,
        owner: Address,
        allocations: Vec<AssetAllocation>,
        share_pct: i128,
    ) -> i128;

    fn rebalance_asset_list(env: Env, owner: Address, allocations: Vec<AssetAllocation>);

    fn swap_asset(
        env: Env,
        owner: Address,
        amount_in: i128,
        asset_from: Address,
        asset_to: Address,
    ) -> i128;

    // ################################################################
    //                             Queries
    // ################################################################

    fn get_asset_balance(env: Env, asset: Address, owner: Address) -> i128;

    fn get_assets_owned(env: Env, owner: Address) -> Vec<AssetBalance>;

    fn get_portfolio_value(env: Env, owner: Address) -> i128;

    fn has_role(env: Env, role: TradingRole, account: Address) -> bool;

    fn get_state(env: Env) -> OperationalState;

    fn query_config(env: Env) -> Config;
}
