///! Liquidity amount functions
///! Provides functions for computing liquidity amounts from token amounts and prices
///! Implements formulae 6.29 and 6.30
///
use super::big_num::{Upcast512, U256};
use super::fixed_point_64;
use super::full_math::{full_mul, full_mul_u256};
use super::rounding_math::{div_rounding_u128, Rounding};
use super::sqrt_price_math::{get_delta_a, get_delta_b};
use anchor_lang::prelude::*;

/// Computes the amount of liquidity received for a given amount of token_a and price range
/// Calculates ΔL = Δa (√P_upper x √P_lower)/(√P_upper - √P_lower)
///
/// Both sides of the fraction are exact wide products, `amount * √P_a * √P_b` over
/// `|√P_b - √P_a| * 2^64`, followed by a single rounding division. The Q64 factor is
/// a multiplication of the denominator, never a left shift of the numerator.
///
/// Fails with `DivisionByZero` for an empty range and with `ResultOverflow`
/// if the liquidity does not fit u128.
///
/// # Arguments
///
/// * `sqrt_price_0_x64` - A sqrt price representing the first tick boundary
/// * `sqrt_price_1_x64` - A sqrt price representing the second tick boundary
/// * `amount_a` - The amount_a being sent in
/// * `round_up` - Whether to round the liquidity up or down
///
pub fn get_liquidity_from_amount_a(
    sqrt_price_0_x64: u128,
    sqrt_price_1_x64: u128,
    amount_a: u64,
    round_up: bool,
) -> Result<u128> {
    let sqrt_price_delta = sqrt_price_0_x64.abs_diff(sqrt_price_1_x64);

    // at most 320 bits
    let numerator = full_mul_u256(
        full_mul(sqrt_price_0_x64, sqrt_price_1_x64),
        u128::from(amount_a),
    );
    // at most 192 bits
    let denominator = full_mul(sqrt_price_delta, fixed_point_64::Q64).as_u512();

    #[cfg(feature = "enable-log")]
    msg!(
        "get_liquidity_from_amount_a, numerator: {}, denominator: {}, round_up: {}",
        numerator,
        denominator,
        round_up
    );
    div_rounding_u128(numerator, denominator, Rounding::from(round_up))
}

/// Computes the amount of liquidity received for a given amount of token_b and price range
/// Calculates ΔL = Δb / (√P_upper - √P_lower)
///
/// # Arguments
///
/// * `sqrt_price_0_x64` - A sqrt price representing the first tick boundary
/// * `sqrt_price_1_x64` - A sqrt price representing the second tick boundary
/// * `amount_b` - The amount_b being sent in
/// * `round_up` - Whether to round the liquidity up or down
///
pub fn get_liquidity_from_amount_b(
    sqrt_price_0_x64: u128,
    sqrt_price_1_x64: u128,
    amount_b: u64,
    round_up: bool,
) -> Result<u128> {
    let sqrt_price_delta = sqrt_price_0_x64.abs_diff(sqrt_price_1_x64);

    div_rounding_u128(
        full_mul(u128::from(amount_b), fixed_point_64::Q64),
        U256::from(sqrt_price_delta),
        Rounding::from(round_up),
    )
}

/// Computes the maximum amount of liquidity received for a given amount of token_a, token_b, the current
/// pool prices and the prices at the tick boundaries
///
/// # Arguments
///
/// * `sqrt_price_x64` - A sqrt price representing the current pool prices
/// * `sqrt_price_a_x64` - A sqrt price representing the first tick boundary
/// * `sqrt_price_b_x64` - A sqrt price representing the second tick boundary
/// * `amount_a` - The amount of token_a being sent in
/// * `amount_b` - The amount of token_b being sent in
/// * `round_up` - Whether to round the liquidity up or down
///
pub fn get_liquidity_for_amounts(
    sqrt_price_x64: u128,
    mut sqrt_price_a_x64: u128,
    mut sqrt_price_b_x64: u128,
    amount_a: u64,
    amount_b: u64,
    round_up: bool,
) -> Result<u128> {
    // sqrt_price_a_x64 should hold the smaller value
    if sqrt_price_a_x64 > sqrt_price_b_x64 {
        std::mem::swap(&mut sqrt_price_a_x64, &mut sqrt_price_b_x64);
    };

    if sqrt_price_x64 <= sqrt_price_a_x64 {
        // If P ≤ P_lower, only token_a liquidity is active
        get_liquidity_from_amount_a(sqrt_price_a_x64, sqrt_price_b_x64, amount_a, round_up)
    } else if sqrt_price_x64 < sqrt_price_b_x64 {
        // If P_lower < P < P_upper, active liquidity is the minimum of the liquidity provided
        // by token_a and token_b
        Ok(u128::min(
            get_liquidity_from_amount_a(sqrt_price_x64, sqrt_price_b_x64, amount_a, round_up)?,
            get_liquidity_from_amount_b(sqrt_price_a_x64, sqrt_price_x64, amount_b, round_up)?,
        ))
    } else {
        // If P ≥ P_upper, only token_b liquidity is active
        get_liquidity_from_amount_b(sqrt_price_a_x64, sqrt_price_b_x64, amount_b, round_up)
    }
}

/// Computes the token_a and token_b value for a given amount of liquidity, the current
/// pool prices and the prices at the tick boundaries
///
/// # Arguments
///
/// * `sqrt_price_x64` - A sqrt price representing the current pool prices
/// * `sqrt_price_a_x64` - A sqrt price representing the first tick boundary
/// * `sqrt_price_b_x64` - A sqrt price representing the second tick boundary
/// * `liquidity` - The liquidity being valued
/// * `round_up` - Whether to round the amounts up or down
///
pub fn get_amounts_for_liquidity(
    sqrt_price_x64: u128,
    mut sqrt_price_a_x64: u128,
    mut sqrt_price_b_x64: u128,
    liquidity: u128,
    round_up: bool,
) -> Result<(u64, u64)> {
    // sqrt_price_a_x64 should hold the smaller value
    if sqrt_price_a_x64 > sqrt_price_b_x64 {
        std::mem::swap(&mut sqrt_price_a_x64, &mut sqrt_price_b_x64);
    };

    if sqrt_price_x64 <= sqrt_price_a_x64 {
        // If P ≤ P_lower, active liquidity is entirely in token_a
        Ok((
            get_delta_a(sqrt_price_a_x64, sqrt_price_b_x64, liquidity, round_up)?,
            0,
        ))
    } else if sqrt_price_x64 < sqrt_price_b_x64 {
        // If P_lower < P < P_upper, active liquidity is in token_a and token_b
        Ok((
            get_delta_a(sqrt_price_x64, sqrt_price_b_x64, liquidity, round_up)?,
            get_delta_b(sqrt_price_a_x64, sqrt_price_x64, liquidity, round_up)?,
        ))
    } else {
        // If P ≥ P_upper, active liquidity is entirely in token_b
        Ok((
            0,
            get_delta_b(sqrt_price_a_x64, sqrt_price_b_x64, liquidity, round_up)?,
        ))
    }
}
