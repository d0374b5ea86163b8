use soroban_sdk::{
    contract, contractimpl, contracttype, log, panic_with_error, token, Address, Env,
};

use crate::{error::ErrorCode, math::fixed_point::mul_div_floor};

/// Prices are quoted in base currency with 7 decimals
pub const PRICE_SCALE: i128 = 10_000_000;

#[derive(Clone)]
#[contracttype]
enum DataKey {
    Price(Address),
    Failing,
}

/// Venue swapping at fixed prices out of its own inventory. Tests must fund
/// the router with every asset it is expected to pay out.
#[contract]
pub struct MockSwapRouter;

#[contractimpl]
impl MockSwapRouter {
    pub fn set_price(env: Env, asset: Address, price: i128) {
        env.storage()
            .persistent()
            .set(&DataKey::Price(asset), &price);
    }

    pub fn set_failing(env: Env, failing: bool) {
        env.storage().instance().set(&DataKey::Failing, &failing);
    }

    pub fn quote(env: Env, asset_in: Address, asset_out: Address, amount_in: i128) -> i128 {
        let price_in = read_price(&env, &asset_in);
        let price_out = read_price(&env, &asset_out);

        match mul_div_floor(&env, amount_in, price_in, price_out) {
            Ok(amount_out) => amount_out,
            Err(error_code) => panic_with_error!(&env, error_code),
        }
    }

    pub fn swap_exact_in(
        env: Env,
        asset_in: Address,
        asset_out: Address,
        amount_in: i128,
        to: Address,
    ) -> i128 {
        let failing: bool = env
            .storage()
            .instance()
            .get(&DataKey::Failing)
            .unwrap_or(false);
        if failing {
            log!(&env, "MockSwapRouter: venue unavailable");
            panic_with_error!(&env, ErrorCode::SwapFailed);
        }

        let amount_out = Self::quote(env.clone(), asset_in, asset_out.clone(), amount_in);
        token::Client::new(&env, &asset_out).transfer(
            &env.current_contract_address(),
            &to,
            &amount_out,
        );

        amount_out
    }
}

fn read_price(env: &Env, asset: &Address) -> i128 {
    env.storage()
        .persistent()
        .get(&DataKey::Price(asset.clone()))
        .unwrap_or_else(|| {
            log!(env, "MockSwapRouter: no price for asset");
            panic_with_error!(env, ErrorCode::SwapFailed)
        })
}
