use soroban_sdk::Env;

use crate::{
    constants::{MAX_PERCENTAGE_I128, PERCENTAGE_PRECISION, RATE_PRECISION},
    error::BasketResult,
    math::{
        fixed_point::{mul_div_ceil, mul_div_floor},
        safe_math::SafeMath,
    },
};

/// Base currency per share fixed at creation, scaled by `RATE_PRECISION`.
pub fn creation_rate(env: &Env, initial_deposit: i128, initial_supply: i128) -> BasketResult<i128> {
    mul_div_floor(env, initial_deposit, RATE_PRECISION, initial_supply)
}

/// Current base currency per share, scaled by `RATE_PRECISION`. Falls back to
/// the creation rate while there is no supply or no value to measure.
pub fn share_rate(
    env: &Env,
    nav: i128,
    total_supply: i128,
    creation_rate: i128,
) -> BasketResult<i128> {
    if total_supply == 0 || nav == 0 {
        return Ok(creation_rate);
    }
    mul_div_floor(env, nav, RATE_PRECISION, total_supply)
}

/// Shares owed for a deposit of `amount` base currency, before fees.
pub fn shares_for_deposit(
    env: &Env,
    amount: i128,
    nav: i128,
    total_supply: i128,
    creation_rate: i128,
) -> BasketResult<i128> {
    if total_supply == 0 || nav == 0 {
        return mul_div_floor(env, amount, RATE_PRECISION, creation_rate);
    }
    mul_div_floor(env, amount, total_supply, nav)
}

/// Splits `shares` into the part kept by the holder and the fee, in that
/// order. The kept part rounds down so the fee takes the remainder.
pub fn split_entry_fee(env: &Env, shares: i128, fee_pct: u32) -> BasketResult<(i128, i128)> {
    let kept = mul_div_floor(
        env,
        shares,
        MAX_PERCENTAGE_I128.safe_sub(i128::from(fee_pct), env)?,
        MAX_PERCENTAGE_I128,
    )?;
    let fee = shares.safe_sub(kept, env)?;
    Ok((kept, fee))
}

pub fn exit_fee(env: &Env, share_amount: i128, fee_pct: u32) -> BasketResult<i128> {
    mul_div_ceil(env, share_amount, i128::from(fee_pct), MAX_PERCENTAGE_I128)
}

/// Fraction of the basket owned by `net_shares`, expressed as a fixed point
/// percentage (`100 * PERCENTAGE_PRECISION` is the whole basket).
pub fn liquidation_pct(env: &Env, net_shares: i128, total_supply: i128) -> BasketResult<i128> {
    mul_div_floor(
        env,
        net_shares,
        MAX_PERCENTAGE_I128.safe_mul(PERCENTAGE_PRECISION, env)?,
        total_supply,
    )
}

/// Pro-rata claim of `net_shares` on the reserve of a closed container.
pub fn reserved_claim(
    env: &Env,
    reserved: i128,
    net_shares: i128,
    total_supply: i128,
) -> BasketResult<i128> {
    mul_div_floor(env, reserved, net_shares, total_supply)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::error::ErrorCode;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test]
    fn creation_rate_and_first_deposits() {
        let env = Env::default();
        // 2 units against 5000 shares, 7 decimals each
        let rate = creation_rate(&env, 2_0000000, 5000_0000000).unwrap();
        assert_eq!(rate, 400_000_000_000_000);

        // 8.5 units at the same rate
        let shares = shares_for_deposit(&env, 8_5000000, 0, 0, rate).unwrap();
        assert_eq!(shares, 21250_0000000);

        // identical when measured against an unchanged NAV
        let shares = shares_for_deposit(&env, 8_5000000, 2_0000000, 5000_0000000, rate).unwrap();
        assert_eq!(shares, 21250_0000000);
    }

    #[test]
    fn share_rate_tracks_nav() {
        let env = Env::default();
        let rate = creation_rate(&env, 2_0000000, 5000_0000000).unwrap();

        assert_eq!(share_rate(&env, 0, 5000_0000000, rate).unwrap(), rate);
        assert_eq!(share_rate(&env, 4_0000000, 0, rate).unwrap(), rate);
        assert_eq!(
            share_rate(&env, 4_0000000, 5000_0000000, rate).unwrap(),
            2 * rate
        );
    }

    #[test_case(21250_0000000, 10, 19125_0000000, 2125_0000000 ; "ten percent")]
    #[test_case(1_000, 0, 1_000, 0 ; "no fee")]
    #[test_case(999, 10, 899, 100 ; "fee takes the remainder")]
    fn entry_fee_split(shares: i128, fee_pct: u32, kept: i128, fee: i128) {
        let env = Env::default();
        assert_eq!(split_entry_fee(&env, shares, fee_pct), Ok((kept, fee)));
    }

    #[test]
    fn exit_fee_rounds_up() {
        let env = Env::default();
        assert_eq!(exit_fee(&env, 19125_0000000, 8), Ok(1530_0000000));
        assert_eq!(exit_fee(&env, 1_001, 8), Ok(81));
        assert_eq!(exit_fee(&env, 1_000, 0), Ok(0));
    }

    #[test]
    fn liquidation_percentage() {
        let env = Env::default();
        assert_eq!(
            liquidation_pct(&env, 50, 100),
            Ok(50 * PERCENTAGE_PRECISION)
        );
        assert_eq!(
            liquidation_pct(&env, 100, 100),
            Ok(100 * PERCENTAGE_PRECISION)
        );
        assert_eq!(liquidation_pct(&env, 1, 0), Err(ErrorCode::MathError));
    }

    #[test]
    fn eighteen_decimal_amounts() {
        let env = Env::default();
        let unit = 1_000_000_000_000_000_000_i128;

        // 1000 units against 5000 shares
        let rate = creation_rate(&env, 1000 * unit, 5000 * unit).unwrap();
        assert_eq!(rate, RATE_PRECISION / 5);

        let shares = shares_for_deposit(&env, 10 * unit, 0, 0, rate).unwrap();
        assert_eq!(shares, 50 * unit);
        assert_eq!(
            share_rate(&env, 2000 * unit, 5000 * unit, rate),
            Ok(2 * RATE_PRECISION / 5)
        );

        assert_eq!(
            liquidation_pct(&env, 2 * unit, 4 * unit),
            Ok(50 * PERCENTAGE_PRECISION)
        );
        assert_eq!(
            liquidation_pct(&env, 5000 * unit, 5000 * unit),
            Ok(100 * PERCENTAGE_PRECISION)
        );
        assert_eq!(
            reserved_claim(&env, 105 * unit, 1000 * unit, 5000 * unit),
            Ok(21 * unit)
        );
    }

    #[test]
    fn closed_claim() {
        let env = Env::default();
        assert_eq!(reserved_claim(&env, 10_0000000, 25, 100), Ok(2_5000000));
    }
}
