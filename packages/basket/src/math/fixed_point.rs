use soroban_fixed_point_math::SorobanFixedPoint;
use soroban_sdk::{log, Env};

use crate::error::{BasketResult, ErrorCode};

/// `x * y / denominator`, rounded toward zero. Products that overflow `i128`
/// are carried out in `I256`.
#[track_caller]
pub fn mul_div_floor(env: &Env, x: i128, y: i128, denominator: i128) -> BasketResult<i128> {
    check_denominator(env, denominator)?;
    Ok(x.fixed_mul_floor(env, &y, &denominator))
}

/// `x * y / denominator`, rounded away from zero
#[track_caller]
pub fn mul_div_ceil(env: &Env, x: i128, y: i128, denominator: i128) -> BasketResult<i128> {
    check_denominator(env, denominator)?;
    Ok(x.fixed_mul_ceil(env, &y, &denominator))
}

#[track_caller]
fn check_denominator(env: &Env, denominator: i128) -> BasketResult {
    if denominator == 0 {
        log!(env, "Math error thrown at {}:{}", file!(), line!());
        return Err(ErrorCode::MathError);
    }
    Ok(())
}
