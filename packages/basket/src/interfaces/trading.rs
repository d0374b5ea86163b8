use soroban_sdk::{contractclient, Address, Env, Vec};

use crate::types::{AssetAllocation, AssetBalance, TradingRole};

#[contractclient(name = "TradingClient")]
pub trait TradingInterface {
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

    fn grant_role(env: Env, sender: Address, role: TradingRole, account: Address);

    fn get_assets_owned(env: Env, owner: Address) -> Vec<AssetBalance>;

    fn get_portfolio_value(env: Env, owner: Address) -> i128;
}
