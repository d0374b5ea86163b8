use basket::{
    constants::MAX_PERCENTAGE_I128,
    error::BasketResult,
    math::{fixed_point::mul_div_floor, safe_math::SafeMath},
};
use soroban_sdk::{contracttype, Address, Env, Vec};

/// Current position of one asset measured against its target weight
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Holding {
    pub asset: Address,
    pub balance: i128,
    /// Value of `balance` in base currency
    pub value: i128,
    pub target_pct: u32,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RebalanceLeg {
    pub asset: Address,
    pub amount: i128,
}

/// Over-weight assets yield sell legs (amounts of the asset). Under-weight
/// assets yield deficits (amounts of base currency). Sell amounts round down;
/// an asset with no target weight is sold entirely.
pub fn plan_rebalance(
    env: &Env,
    holdings: &Vec<Holding>,
) -> BasketResult<(Vec<RebalanceLeg>, Vec<RebalanceLeg>)> {
    let mut total_value: i128 = 0;
    for holding in holdings.iter() {
        total_value = total_value.safe_add(holding.value, env)?;
    }

    let mut sells: Vec<RebalanceLeg> = Vec::new(env);
    let mut deficits: Vec<RebalanceLeg> = Vec::new(env);

    for holding in holdings.iter() {
        let target_value = mul_div_floor(
            env,
            total_value,
            i128::from(holding.target_pct),
            MAX_PERCENTAGE_I128,
        )?;

        if holding.value > target_value {
            let amount = if holding.target_pct == 0 {
                holding.balance
            } else {
                let excess = holding.value.safe_sub(target_value, env)?;
                mul_div_floor(env, holding.balance, excess, holding.value)?
            };
            if amount > 0 {
                sells.push_back(RebalanceLeg {
                    asset: holding.asset.clone(),
                    amount,
                });
            }
        } else if target_value > holding.value {
            deficits.push_back(RebalanceLeg {
                asset: holding.asset.clone(),
                amount: target_value.safe_sub(holding.value, env)?,
            });
        }
    }

    Ok((sells, deficits))
}

/// Spreads `amount` over `weights` in proportion to each leg's amount. The
/// last leg receives whatever rounding leaves over.
pub fn split_by_weight(
    env: &Env,
    weights: &Vec<RebalanceLeg>,
    amount: i128,
) -> BasketResult<Vec<RebalanceLeg>> {
    let mut total_weight: i128 = 0;
    for leg in weights.iter() {
        total_weight = total_weight.safe_add(leg.amount, env)?;
    }

    let mut legs: Vec<RebalanceLeg> = Vec::new(env);
    if total_weight == 0 {
        return Ok(legs);
    }

    let mut remaining = amount;
    let last = weights.len() - 1;
    for (i, leg) in weights.iter().enumerate() {
        let share = if i as u32 == last {
            remaining
        } else {
            mul_div_floor(env, amount, leg.amount, total_weight)?
        };
        remaining = remaining.safe_sub(share, env)?;
        legs.push_back(RebalanceLeg {
            asset: leg.asset,
            amount: share,
        });
    }

    Ok(legs)
}
