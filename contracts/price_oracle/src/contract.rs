use basket::{
    constants::{DEFAULT_MAX_PRICE_AGE, INSTANCE_BUMP_AMOUNT, INSTANCE_LIFETIME_THRESHOLD},
    error::ErrorCode,
    interfaces::PriceFeedClient,
    math::oracle::{usd_value, validate_price},
    ok_or_panic,
    types::Asset,
};
use soroban_sdk::{contract, contractimpl, contractmeta, log, panic_with_error, Address, Env};

use crate::{
    events::PriceOracleEvents,
    oracle::PriceOracleTrait,
    storage::{get_config, is_initialized, save_config, set_initialized, Config},
};

contractmeta!(
    key = "Description",
    val = "Adapter reading the USD price of the base currency from an external feed"
);

#[contract]
pub struct PriceOracle;

fn check_admin(env: &Env, sender: &Address, config: &Config) {
    if *sender != config.admin {
        log!(env, "Price Oracle: sender is not the admin");
        panic_with_error!(env, ErrorCode::NotAuthorized);
    }
}

fn read_decimals(env: &Env, price_feed: &Address) -> u32 {
    match PriceFeedClient::new(env, price_feed).try_decimals() {
        Ok(Ok(decimals)) => decimals,
        _ => {
            log!(env, "Price Oracle: feed does not answer decimals");
            panic_with_error!(env, ErrorCode::OracleUnavailable);
        }
    }
}

fn read_price(env: &Env, config: &Config) -> i128 {
    let price_data = match PriceFeedClient::new(env, &config.price_feed).try_lastprice(&config.asset)
    {
        Ok(Ok(price_data)) => price_data,
        _ => {
            log!(env, "Price Oracle: feed call failed");
            panic_with_error!(env, ErrorCode::OracleUnavailable);
        }
    };

    ok_or_panic!(
        env,
        validate_price(env, price_data, env.ledger().timestamp(), config.max_age)
    )
}

#[contractimpl]
impl PriceOracleTrait for PriceOracle {
    fn initialize(env: Env, admin: Address, price_feed: Address, asset: Asset, max_age: u64) {
        if is_initialized(&env) {
            log!(
                &env,
                "Price Oracle: Initialize: initializing contract twice is not allowed"
            );
            panic_with_error!(&env, ErrorCode::AlreadyInitialized);
        }

        set_initialized(&env);

        let max_age = if max_age == 0 {
            DEFAULT_MAX_PRICE_AGE
        } else {
            max_age
        };

        save_config(
            &env,
            Config {
                admin: admin.clone(),
                price_feed: price_feed.clone(),
                asset,
                max_age,
            },
        );

        PriceOracleEvents::initialize(&env, admin, price_feed);
    }

    fn set_price_feed_address(env: Env, sender: Address, price_feed: Address) {
        sender.require_auth();
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        let config = get_config(&env);
        check_admin(&env, &sender, &config);

        // the new feed must answer before it is trusted
        read_decimals(&env, &price_feed);
        let candidate = Config {
            price_feed: price_feed.clone(),
            ..config
        };
        read_price(&env, &candidate);

        save_config(&env, candidate);

        PriceOracleEvents::new_price_feed_address(&env, price_feed);
    }

    fn update_config(env: Env, sender: Address, asset: Option<Asset>, max_age: Option<u64>) {
        sender.require_auth();
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        let mut config = get_config(&env);
        check_admin(&env, &sender, &config);

        if let Some(asset) = asset {
            config.asset = asset;
        }

        if let Some(max_age) = max_age {
            config.max_age = max_age;
        }

        save_config(&env, config);
    }

    // ################################################################
    //                             Queries
    // ################################################################

    fn get_latest_price(env: Env) -> i128 {
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        let config = get_config(&env);
        read_price(&env, &config)
    }

    fn decimals(env: Env) -> u32 {
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        read_decimals(&env, &get_config(&env).price_feed)
    }

    fn get_usd_value(env: Env, amount: i128) -> i128 {
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        let config = get_config(&env);
        let price = read_price(&env, &config);
        let decimals = read_decimals(&env, &config.price_feed);

        ok_or_panic!(&env, usd_value(&env, amount, price, decimals))
    }

    fn get_price_feed_address(env: Env) -> Address {
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
        get_config(&env).price_feed
    }

    fn get_admin(env: Env) -> Address {
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
        get_config(&env).admin
    }

    fn query_config(env: Env) -> Config {
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
        get_config(&env)
    }
}
