use soroban_sdk::{log, Env};

use crate::{
    error::{BasketResult, ErrorCode},
    math::{fixed_point::mul_div_floor, safe_math::SafeMath},
    types::PriceData,
    validate,
};

pub fn pow10(env: &Env, decimals: u32) -> BasketResult<i128> {
    match 10_i128.checked_pow(decimals) {
        Some(result) => Ok(result),
        None => {
            log!(env, "Math error thrown at {}:{}", file!(), line!());
            Err(ErrorCode::MathError)
        }
    }
}

/// USD value of `amount` base currency units, kept in the same decimals as
/// `amount`.
pub fn usd_value(env: &Env, amount: i128, price: i128, price_decimals: u32) -> BasketResult<i128> {
    mul_div_floor(env, amount, price, pow10(env, price_decimals)?)
}

/// Whether `amount` (with `amount_decimals`) is worth at least `min_usd`
/// whole dollars.
pub fn meets_minimum_usd(
    env: &Env,
    amount: i128,
    amount_decimals: u32,
    price: i128,
    price_decimals: u32,
    min_usd: i128,
) -> BasketResult<bool> {
    let value = usd_value(env, amount, price, price_decimals)?;
    let floor = min_usd.safe_mul(pow10(env, amount_decimals)?, env)?;
    Ok(value >= floor)
}

/// Smallest amount (with `amount_decimals`) worth `min_usd` whole dollars,
/// rounded up so that it always passes `meets_minimum_usd`.
pub fn min_deposit_amount(
    env: &Env,
    amount_decimals: u32,
    price: i128,
    price_decimals: u32,
    min_usd: i128,
) -> BasketResult<i128> {
    validate!(
        env,
        price > 0,
        ErrorCode::OracleNonPositive,
        "Oracle: price {} is not positive",
        price
    )?;
    min_usd
        .safe_mul(pow10(env, amount_decimals)?, env)?
        .safe_mul(pow10(env, price_decimals)?, env)?
        .safe_div_ceil(price, env)
}

/// Rejects a feed answer that is missing, non positive or older than
/// `max_age` seconds.
pub fn validate_price(
    env: &Env,
    price_data: Option<PriceData>,
    now: u64,
    max_age: u64,
) -> BasketResult<i128> {
    let price_data = match price_data {
        Some(price_data) => price_data,
        None => {
            log!(env, "Oracle: no price available");
            return Err(ErrorCode::OracleUnavailable);
        }
    };

    validate!(
        env,
        price_data.price > 0,
        ErrorCode::OracleNonPositive,
        "Oracle: price {} is not positive",
        price_data.price
    )?;
    validate!(
        env,
        now.saturating_sub(price_data.timestamp) <= max_age,
        ErrorCode::OracleStale,
        "Oracle: price from {} is stale",
        price_data.timestamp
    )?;

    Ok(price_data.price)
}
