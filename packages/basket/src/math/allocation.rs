use soroban_sdk::{log, Address, Env, Vec};

use crate::{
    constants::{FULL_SHARE_PCT, MAX_PERCENTAGE, MAX_PERCENTAGE_I128},
    error::{BasketResult, ErrorCode},
    math::{fixed_point::mul_div_floor, safe_math::SafeMath},
    types::AssetAllocation,
    validate,
};

/// Checks that a basket is usable: at least one asset, no duplicates, never
/// the base currency, and percentages summing to exactly 100.
pub fn validate_allocations(
    env: &Env,
    allocations: &Vec<AssetAllocation>,
    base_token: &Address,
) -> BasketResult {
    validate!(
        env,
        !allocations.is_empty(),
        ErrorCode::InvalidAllocation,
        "Basket must hold at least one asset"
    )?;

    let mut seen: Vec<Address> = Vec::new(env);
    let mut total: u32 = 0;

    for allocation in allocations.iter() {
        validate!(
            env,
            allocation.asset != *base_token,
            ErrorCode::InvalidAllocation,
            "Basket can not hold the base currency"
        )?;
        validate!(
            env,
            !seen.contains(&allocation.asset),
            ErrorCode::InvalidAllocation,
            "Basket lists an asset twice"
        )?;
        seen.push_back(allocation.asset.clone());

        total = total.safe_add(allocation.percentage, env)?;
    }

    validate!(
        env,
        total == MAX_PERCENTAGE,
        ErrorCode::InvalidAllocation,
        "Basket percentages sum to {}, expected 100",
        total
    )?;

    Ok(())
}

/// Splits `amount` across the allocations by percentage. Every leg rounds
/// down except the last weighted one, which receives the remainder.
pub fn split_by_allocation(
    env: &Env,
    allocations: &Vec<AssetAllocation>,
    amount: i128,
) -> BasketResult<Vec<i128>> {
    let mut legs: Vec<i128> = Vec::new(env);
    let mut remaining = amount;
    let mut last = 0;
    for (i, allocation) in allocations.iter().enumerate() {
        if allocation.percentage > 0 {
            last = i;
        }
    }

    for (i, allocation) in allocations.iter().enumerate() {
        let leg = if i == last {
            remaining
        } else {
            mul_div_floor(
                env,
                amount,
                i128::from(allocation.percentage),
                MAX_PERCENTAGE_I128,
            )?
        };
        remaining = remaining.safe_sub(leg, env)?;
        legs.push_back(leg);
    }

    Ok(legs)
}

/// Portion of `balance` sold for a fixed point `share_pct`, rounded down.
pub fn sell_amount(env: &Env, balance: i128, share_pct: i128) -> BasketResult<i128> {
    validate!(
        env,
        share_pct <= FULL_SHARE_PCT,
        ErrorCode::ShareTooHigh,
        "Trading: Share percentage > 100"
    )?;
    validate!(env, share_pct >= 0, ErrorCode::InvalidAmount)?;

    mul_div_floor(env, balance, share_pct, FULL_SHARE_PCT)
}
