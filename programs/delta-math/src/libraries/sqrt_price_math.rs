use super::big_num::U256;
use super::checked_shift::checked_shl_q64;
use super::fixed_point_64;
use super::full_math::full_mul;
use super::rounding_math::{div_rounding_u64, Rounding};
use crate::error::ErrorCode;
use anchor_lang::prelude::*;

/// Gets the token_a delta between two prices, for given amount of liquidity (formula 6.30)
///
/// # Formula
///
/// * `Δa = L * (1 / √P_lower - 1 / √P_upper)`
/// * i.e. `L * (√P_upper - √P_lower) * 2^64 / (√P_upper * √P_lower)` in Q64.64
///
/// Fails with `ScaleOverflow` if `L * |√P_upper - √P_lower| >= 2^192`, with
/// `DivisionByZero` if a price is zero, and with `ResultOverflow` if the amount
/// does not fit u64.
///
/// # Arguments
///
/// * `sqrt_price_0_x64` - A sqrt price
/// * `sqrt_price_1_x64` - Another sqrt price, in either order
/// * `liquidity` - The amount of usable liquidity
/// * `round_up`- Whether to round the amount up or down
///
pub fn get_delta_a(
    sqrt_price_0_x64: u128,
    sqrt_price_1_x64: u128,
    liquidity: u128,
    round_up: bool,
) -> Result<u64> {
    let sqrt_price_delta = sqrt_price_0_x64.abs_diff(sqrt_price_1_x64);
    if sqrt_price_delta == 0 || liquidity == 0 {
        return Ok(0);
    }

    let numerator = checked_shl_q64(full_mul(liquidity, sqrt_price_delta))?;
    let denominator = full_mul(sqrt_price_0_x64, sqrt_price_1_x64);

    #[cfg(feature = "enable-log")]
    msg!(
        "get_delta_a, numerator: {}, denominator: {}, round_up: {}",
        numerator,
        denominator,
        round_up
    );
    div_rounding_u64(numerator, denominator, Rounding::from(round_up))
}

/// Gets the token_b delta between two prices, for given amount of liquidity (formula 6.30)
///
/// # Formula
///
/// * `Δb = L * (√P_upper - √P_lower)`, i.e. `L * |Δ√P| / 2^64` in Q64.64
///
/// The Q64 factor sits in the denominator, so no shift and no `ScaleOverflow`
/// case exists on this side. Fails with `ResultOverflow` if the amount does not
/// fit u64.
///
/// # Arguments
///
/// * `sqrt_price_0_x64` - A sqrt price
/// * `sqrt_price_1_x64` - Another sqrt price, in either order
/// * `liquidity` - The amount of usable liquidity
/// * `round_up`- Whether to round the amount up or down
///
pub fn get_delta_b(
    sqrt_price_0_x64: u128,
    sqrt_price_1_x64: u128,
    liquidity: u128,
    round_up: bool,
) -> Result<u64> {
    let sqrt_price_delta = sqrt_price_0_x64.abs_diff(sqrt_price_1_x64);
    if sqrt_price_delta == 0 || liquidity == 0 {
        return Ok(0);
    }

    div_rounding_u64(
        full_mul(liquidity, sqrt_price_delta),
        U256::from(fixed_point_64::Q64),
        Rounding::from(round_up),
    )
}

fn signed_liquidity(liquidity_delta: i128) -> Result<(u128, bool)> {
    require!(
        liquidity_delta != i128::MIN,
        ErrorCode::InvalidLiquidityDelta
    );
    Ok((liquidity_delta.unsigned_abs(), liquidity_delta > 0))
}

/// Helper function to get signed token_a delta between two prices,
/// for the given change in liquidity
///
/// Adding liquidity rounds up (the amount owed to the pool), removing rounds
/// down (the amount paid out) and is returned negated.
///
/// # Arguments
///
/// * `sqrt_price_0_x64` - A sqrt price
/// * `sqrt_price_1_x64` - Another sqrt price
/// * `liquidity_delta` - The change in liquidity for which to compute amount_a delta
///
pub fn get_delta_a_signed(
    sqrt_price_0_x64: u128,
    sqrt_price_1_x64: u128,
    liquidity_delta: i128,
) -> Result<i128> {
    let (liquidity, add) = signed_liquidity(liquidity_delta)?;
    let amount = i128::from(get_delta_a(
        sqrt_price_0_x64,
        sqrt_price_1_x64,
        liquidity,
        add,
    )?);
    Ok(if add { amount } else { -amount })
}

/// Helper function to get signed token_b delta between two prices,
/// for the given change in liquidity
///
/// # Arguments
///
/// * `sqrt_price_0_x64` - A sqrt price
/// * `sqrt_price_1_x64` - Another sqrt price
/// * `liquidity_delta` - The change in liquidity for which to compute amount_b delta
///
pub fn get_delta_b_signed(
    sqrt_price_0_x64: u128,
    sqrt_price_1_x64: u128,
    liquidity_delta: i128,
) -> Result<i128> {
    let (liquidity, add) = signed_liquidity(liquidity_delta)?;
    let amount = i128::from(get_delta_b(
        sqrt_price_0_x64,
        sqrt_price_1_x64,
        liquidity,
        add,
    )?);
    Ok(if add { amount } else { -amount })
}
