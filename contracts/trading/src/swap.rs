use basket::{error::ErrorCode, interfaces::SwapRouterClient};
use soroban_sdk::{log, panic_with_error, token, Address, Env};

use crate::storage::Config;

/// Sells `amount_in` of `asset_in` held by the engine for `asset_out` on the
/// configured venue. Any venue failure aborts the whole invocation.
pub fn swap_exact_in(
    env: &Env,
    config: &Config,
    asset_in: &Address,
    asset_out: &Address,
    amount_in: i128,
) -> i128 {
    let trading = env.current_contract_address();

    token::Client::new(env, asset_in).transfer(&trading, &config.router, &amount_in);

    let amount_out = match SwapRouterClient::new(env, &config.router).try_swap_exact_in(
        asset_in,
        asset_out,
        &amount_in,
        &trading,
    ) {
        Ok(Ok(amount_out)) => amount_out,
        _ => {
            log!(env, "Trading: swap failed on the venue");
            panic_with_error!(env, ErrorCode::SwapFailed);
        }
    };

    if amount_out < 0 {
        log!(env, "Trading: venue returned a negative amount");
        panic_with_error!(env, ErrorCode::SwapFailed);
    }

    amount_out
}

/// Value of `amount` of `asset` in base currency, as quoted by the venue
pub fn quote_in_base(env: &Env, config: &Config, asset: &Address, amount: i128) -> i128 {
    if amount == 0 {
        return 0;
    }

    match SwapRouterClient::new(env, &config.router).try_quote(asset, &config.base_token, &amount)
    {
        Ok(Ok(value)) => value,
        _ => {
            log!(env, "Trading: venue could not quote asset");
            panic_with_error!(env, ErrorCode::SwapFailed);
        }
    }
}
