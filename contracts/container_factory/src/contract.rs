use basket::{
    constants::{INSTANCE_BUMP_AMOUNT, INSTANCE_LIFETIME_THRESHOLD},
    error::ErrorCode,
    interfaces::{ContainerClient, TradingClient},
    math::allocation::validate_allocations,
    ok_or_panic,
    types::{AssetAllocation, ContainerParams, TradingRole},
};
use soroban_sdk::{
    contract, contractimpl, contractmeta, log, panic_with_error, token, Address, BytesN, Env, Vec,
};

use crate::{
    events::FactoryEvents,
    factory::ContainerFactoryTrait,
    storage::{
        add_container, get_config, get_container_vec, is_initialized, is_registered, save_config,
        save_container_vec, set_initialized, Config,
    },
    utils::{deploy_container_contract, deploy_share_token_contract},
};

contractmeta!(
    key = "Description",
    val = "Factory deploying basket containers and their share tokens"
);

#[contract]
pub struct ContainerFactory;

fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

fn check_admin(env: &Env, config: &Config, sender: &Address) {
    if config.admin != *sender {
        log!(env, "Factory: sender is not the admin");
        panic_with_error!(env, ErrorCode::NotAuthorized);
    }
}

#[contractimpl]
impl ContainerFactoryTrait for ContainerFactory {
    #[allow(clippy::too_many_arguments)]
    fn initialize(
        env: Env,
        admin: Address,
        container_wasm_hash: BytesN<32>,
        share_token_wasm_hash: BytesN<32>,
        base_token: Address,
        trading: Address,
        price_oracle: Address,
    ) {
        if is_initialized(&env) {
            log!(
                &env,
                "Factory: Initialize: initializing contract twice is not allowed"
            );
            panic_with_error!(&env, ErrorCode::AlreadyInitialized);
        }

        set_initialized(&env);

        save_config(
            &env,
            Config {
                admin: admin.clone(),
                container_wasm_hash,
                share_token_wasm_hash,
                base_token: base_token.clone(),
                trading: trading.clone(),
                price_oracle: price_oracle.clone(),
            },
        );

        save_container_vec(&env, Vec::new(&env));

        FactoryEvents::initialize(&env, admin, base_token, trading, price_oracle);
    }

    fn create_container(
        env: Env,
        manager: Address,
        initial_deposit: i128,
        params: ContainerParams,
        basket: Vec<AssetAllocation>,
    ) -> Address {
        manager.require_auth();
        bump_instance(&env);

        let config = get_config(&env);

        ok_or_panic!(&env, params.validate(&env));
        ok_or_panic!(&env, validate_allocations(&env, &basket, &config.base_token));
        if initial_deposit <= 0 {
            log!(&env, "Factory: initial deposit must be positive");
            panic_with_error!(&env, ErrorCode::InvalidAmount);
        }

        let index = get_container_vec(&env).len();
        let container = deploy_container_contract(&env, config.container_wasm_hash, index);
        let base = token::Client::new(&env, &config.base_token);
        let share_token = deploy_share_token_contract(
            &env,
            config.share_token_wasm_hash,
            &container,
            base.decimals(),
            params.share_name.clone(),
            params.share_symbol.clone(),
        );

        base.transfer(&manager, &container, &initial_deposit);

        let factory = env.current_contract_address();
        TradingClient::new(&env, &config.trading).grant_role(
            &factory,
            &TradingRole::Trader,
            &container,
        );

        ContainerClient::new(&env, &container).initialize(
            &factory,
            &config.admin,
            &manager,
            &params,
            &basket,
            &config.base_token,
            &share_token,
            &config.trading,
            &config.price_oracle,
            &initial_deposit,
        );

        add_container(&env, &container);

        FactoryEvents::new_container(&env, container.clone(), manager, share_token);

        container
    }

    fn set_price_feed_address(env: Env, sender: Address, price_oracle: Address) {
        sender.require_auth();
        bump_instance(&env);

        let config = get_config(&env);
        check_admin(&env, &config, &sender);

        save_config(
            &env,
            Config {
                price_oracle: price_oracle.clone(),
                ..config
            },
        );

        FactoryEvents::new_price_feed_address(&env, price_oracle);
    }

    fn set_trading_address(env: Env, sender: Address, trading: Address) {
        sender.require_auth();
        bump_instance(&env);

        let config = get_config(&env);
        check_admin(&env, &config, &sender);

        save_config(
            &env,
            Config {
                trading: trading.clone(),
                ..config
            },
        );

        FactoryEvents::new_trading_address(&env, trading);
    }

    fn update_wasm_hashes(
        env: Env,
        sender: Address,
        container_wasm_hash: BytesN<32>,
        share_token_wasm_hash: BytesN<32>,
    ) {
        sender.require_auth();
        bump_instance(&env);

        let config = get_config(&env);
        check_admin(&env, &config, &sender);

        save_config(
            &env,
            Config {
                container_wasm_hash: container_wasm_hash.clone(),
                share_token_wasm_hash: share_token_wasm_hash.clone(),
                ..config
            },
        );

        FactoryEvents::update_wasm_hashes(&env, container_wasm_hash, share_token_wasm_hash);
    }

    // ################################################################
    //                             Queries
    // ################################################################

    fn is_factory_created(env: Env, container: Address) -> bool {
        bump_instance(&env);
        is_registered(&env, &container)
    }

    fn query_containers(env: Env) -> Vec<Address> {
        bump_instance(&env);
        get_container_vec(&env)
    }

    fn get_price_feed_address(env: Env) -> Address {
        bump_instance(&env);
        get_config(&env).price_oracle
    }

    fn get_trading_address(env: Env) -> Address {
        bump_instance(&env);
        get_config(&env).trading
    }

    fn get_admin(env: Env) -> Address {
        bump_instance(&env);
        get_config(&env).admin
    }

    fn get_config(env: Env) -> Config {
        bump_instance(&env);
        get_config(&env)
    }
}

