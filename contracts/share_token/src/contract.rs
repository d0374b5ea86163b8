use crate::admin::{check_not_paused, is_paused, read_administrator, write_administrator, write_paused};
use crate::allowance::{read_allowance, spend_allowance, write_allowance};
use crate::balance::{
    decrease_total_supply, increase_total_supply, read_balance, read_total_supply,
    receive_balance, spend_balance,
};
use crate::metadata::{read_decimal, read_name, read_symbol, write_metadata};
use basket::{
    constants::{INSTANCE_BUMP_AMOUNT, INSTANCE_LIFETIME_THRESHOLD, MAX_TOKEN_DECIMALS},
    error::ErrorCode,
};
use soroban_sdk::token::{self, Interface as _};
use soroban_sdk::{
    contract, contractimpl, contractmeta, log, panic_with_error, symbol_short, Address, Env,
    String,
};
use soroban_token_sdk::metadata::TokenMetadata;
use soroban_token_sdk::TokenUtils;

fn check_nonnegative_amount(env: &Env, amount: i128) {
    if amount < 0 {
        log!(env, "Share Token: negative amount is not allowed: {}", amount);
        panic_with_error!(env, ErrorCode::InvalidAmount);
    }
}

/// Burning is reserved to the owning container
fn check_admin_burner(env: &Env, burner: &Address) {
    if *burner != read_administrator(env) {
        log!(env, "Share Token: only the container can burn shares");
        panic_with_error!(env, ErrorCode::NotAuthorized);
    }
}

contractmeta!(
    key = "Description",
    val = "Token representing ownership in a basket container"
);

#[contract]
pub struct ShareToken;

#[contractimpl]
impl ShareToken {
    pub fn __constructor(env: Env, admin: Address, decimal: u32, name: String, symbol: String) {
        if decimal > MAX_TOKEN_DECIMALS {
            log!(&env, "Share Token: Decimal must not be greater than 18");
            panic_with_error!(&env, ErrorCode::InvalidDecimals);
        }
        write_administrator(&env, &admin);
        write_paused(&env, false);
        write_metadata(
            &env,
            TokenMetadata {
                decimal,
                name,
                symbol,
            },
        );
    }

    pub fn mint(env: Env, to: Address, amount: i128) {
        check_nonnegative_amount(&env, amount);
        let admin = read_administrator(&env);
        admin.require_auth();
        check_not_paused(&env);

        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        receive_balance(&env, to.clone(), amount);
        increase_total_supply(&env, amount);
        TokenUtils::new(&env).events().mint(admin, to, amount);
    }

    pub fn pause(env: Env) {
        let admin = read_administrator(&env);
        admin.require_auth();

        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        write_paused(&env, true);
        env.events().publish((symbol_short!("paused"),), admin);
    }

    pub fn unpause(env: Env) {
        let admin = read_administrator(&env);
        admin.require_auth();

        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        write_paused(&env, false);
        env.events().publish((symbol_short!("unpaused"),), admin);
    }

    // ################################################################
    //                             Queries
    // ################################################################

    pub fn total_supply(env: Env) -> i128 {
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
        read_total_supply(&env)
    }

    pub fn paused(env: Env) -> bool {
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
        is_paused(&env)
    }

    pub fn admin(env: Env) -> Address {
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
        read_administrator(&env)
    }
}

#[contractimpl]
impl token::Interface for ShareToken {
    fn allowance(env: Env, from: Address, spender: Address) -> i128 {
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
        read_allowance(&env, from, spender).amount
    }

    fn approve(env: Env, from: Address, spender: Address, amount: i128, expiration_ledger: u32) {
        check_nonnegative_amount(&env, amount);
        from.require_auth();
        check_not_paused(&env);

        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        write_allowance(&env, from.clone(), spender.clone(), amount, expiration_ledger);
        TokenUtils::new(&env)
            .events()
            .approve(from, spender, amount, expiration_ledger);
    }

    fn balance(env: Env, id: Address) -> i128 {
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
        read_balance(&env, id)
    }

    fn transfer(env: Env, from: Address, to: Address, amount: i128) {
        check_nonnegative_amount(&env, amount);
        from.require_auth();
        check_not_paused(&env);

        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        spend_balance(&env, from.clone(), amount);
        receive_balance(&env, to.clone(), amount);
        TokenUtils::new(&env).events().transfer(from, to, amount);
    }

    fn transfer_from(env: Env, spender: Address, from: Address, to: Address, amount: i128) {
        check_nonnegative_amount(&env, amount);
        spender.require_auth();
        check_not_paused(&env);

        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        spend_allowance(&env, from.clone(), spender, amount);
        spend_balance(&env, from.clone(), amount);
        receive_balance(&env, to.clone(), amount);
        TokenUtils::new(&env).events().transfer(from, to, amount)
    }

    fn burn(env: Env, from: Address, amount: i128) {
        check_nonnegative_amount(&env, amount);
        from.require_auth();
        check_admin_burner(&env, &from);
        check_not_paused(&env);

        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        spend_balance(&env, from.clone(), amount);
        decrease_total_supply(&env, amount);
        TokenUtils::new(&env).events().burn(from, amount);
    }

    fn burn_from(env: Env, spender: Address, from: Address, amount: i128) {
        check_nonnegative_amount(&env, amount);
        spender.require_auth();
        check_admin_burner(&env, &spender);
        check_not_paused(&env);

        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        spend_allowance(&env, from.clone(), spender, amount);
        spend_balance(&env, from.clone(), amount);
        decrease_total_supply(&env, amount);
        TokenUtils::new(&env).events().burn(from, amount)
    }

    fn decimals(env: Env) -> u32 {
        read_decimal(&env)
    }

    fn name(env: Env) -> String {
        read_name(&env)
    }

    fn symbol(env: Env) -> String {
        read_symbol(&env)
    }
}
