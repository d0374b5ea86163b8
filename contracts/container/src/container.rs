use basket::types::{AssetAllocation, ContainerParams, OperationalState, WithdrawalStatus};
use soroban_sdk::{Address, Env, Vec};

use crate::storage::ContainerInfo;

pub trait ContainerTrait {
    #[allow(clippy::too_many_arguments)]
    fn initialize(
        env: Env,
        factory: Address,
        admin: Address,
        manager: Address,
        params: ContainerParams,
        basket: Vec<AssetAllocation>,
        base_token: Address,
        share_token: Address,
        trading: Address,
        price_oracle: Address,
        initial_deposit: i128,
    );

    // ################################################################
    //                             Investor
    // ################################################################

    /// Buys the basket with `amount` base currency and returns the shares
    /// minted to `investor`
    fn deposit(env: Env, investor: Address, amount: i128) -> i128;

    /// Burns `share_amount` shares (the container must hold an allowance)
    /// and queues their proceeds for `withdraw`
    fn withdrawal_request(env: Env, holder: Address, share_amount: i128) -> i128;

    fn withdraw(env: Env, holder: Address) -> i128;

    // ################################################################
    //                             Manager
    // ################################################################

    fn set_asset_list(env: Env, sender: Address, basket: Vec<AssetAllocation>);

    fn rebalance_asset_list(env: Env, sender: Address, basket: Vec<AssetAllocation>);

    fn close_container(env: Env, sender: Address) -> i128;

    fn include_in_whitelist(env: Env, sender: Address, account: Address);

    fn remove_from_whitelist(env: Env, sender: Address, account: Address);

    // ################################################################
    //                             Admin
    // ################################################################

    fn pause(env: Env, sender: Address);

    fn unpause(env: Env, sender: Address);

    fn set_min_deposit_usd(env: Env, sender: Address, min_deposit_usd: i128);

    fn set_price_oracle(env: Env, sender: Address, price_oracle: Address);

    // ################################################################
    //                             Queries
    // ################################################################

    fn in_whitelist(env: Env, account: Address) -> bool;

    fn get_manager(env: Env) -> Address;

    fn get_entry_fee(env: Env) -> u32;

    fn get_exit_fee(env: Env) -> u32;

    fn get_min_deposit_usd(env: Env) -> i128;

    /// Smallest deposit accepted at the current price, in base currency
    fn get_min_deposit_amount(env: Env) -> i128;

    fn get_price_oracle(env: Env) -> Address;

    fn get_share_token(env: Env) -> Address;

    fn get_asset_list(env: Env) -> Vec<AssetAllocation>;

    /// Base currency per share, scaled by `RATE_PRECISION`
    fn get_share_rate(env: Env) -> i128;

    fn get_nav(env: Env) -> i128;

    fn get_pending_withdrawal(env: Env, holder: Address) -> i128;

    fn get_withdrawal_status(env: Env, holder: Address) -> WithdrawalStatus;

    fn get_total_pending(env: Env) -> i128;

    fn get_reserved_balance(env: Env) -> i128;

    fn get_share_balance(env: Env, holder: Address) -> i128;

    fn is_active(env: Env) -> bool;

    fn get_state(env: Env) -> OperationalState;

    fn query_container(env: Env) -> ContainerInfo;
}
