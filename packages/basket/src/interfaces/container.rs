use soroban_sdk::{contractclient, Address, Env, Vec};

use crate::types::{AssetAllocation, ContainerParams};

#[contractclient(name = "ContainerClient")]
pub trait ContainerInterface {
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

    fn get_manager(env: Env) -> Address;

    fn get_share_token(env: Env) -> Address;
}
