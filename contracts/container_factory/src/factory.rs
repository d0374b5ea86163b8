use basket::types::{AssetAllocation, ContainerParams};
use soroban_sdk::{Address, BytesN, Env, Vec};

use crate::storage::Config;

pub trait ContainerFactoryTrait {
    #[allow(clippy::too_many_arguments)]
    fn initialize(
        env: Env,
        admin: Address,
        container_wasm_hash: BytesN<32>,
        share_token_wasm_hash: BytesN<32>,
        base_token: Address,
        trading: Address,
        price_oracle: Address,
    );

    /// Deploys a container and its share token, funds it with
    /// `initial_deposit` from `manager` and buys the basket
    fn create_container(
        env: Env,
        manager: Address,
        initial_deposit: i128,
        params: ContainerParams,
        basket: Vec<AssetAllocation>,
    ) -> Address;

    fn set_price_feed_address(env: Env, sender: Address, price_oracle: Address);

    fn set_trading_address(env: Env, sender: Address, trading: Address);

    fn update_wasm_hashes(
        env: Env,
        sender: Address,
        container_wasm_hash: BytesN<32>,
        share_token_wasm_hash: BytesN<32>,
    );

    // ################################################################
    //                             Queries
    // ################################################################

    fn is_factory_created(env: Env, container: Address) -> bool;

    fn query_containers(env: Env) -> Vec<Address>;

    fn get_price_feed_address(env: Env) -> Address;

    fn get_trading_address(env: Env) -> Address;

    fn get_admin(env: Env) -> Address;

    fn get_config(env: Env) -> Config;
}
