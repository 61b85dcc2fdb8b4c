///! Math library for liquidity
///
use super::sqrt_price_math::{get_delta_a_signed, get_delta_b_signed};
use crate::error::ErrorCode;
use anchor_lang::prelude::*;

/// Add a signed liquidity delta to liquidity and revert if it overflows or underflows
///
/// # Arguments
///
/// * `x` - The liquidity (L) before change
/// * `y` - The delta (ΔL) by which liquidity should be changed
///
pub fn add_delta(x: u128, y: i128) -> Result<u128> {
    if y < 0 {
        x.checked_sub(y.unsigned_abs()).ok_or_else(|| {
            #[cfg(feature = "enable-log")]
            msg!("add_delta underflow, liquidity: {}, delta: {}", x, y);
            ErrorCode::LiquiditySubValueErr.into()
        })
    } else {
        x.checked_add(y as u128).ok_or_else(|| {
            #[cfg(feature = "enable-log")]
            msg!("add_delta overflow, liquidity: {}, delta: {}", x, y);
            ErrorCode::LiquidityAddValueErr.into()
        })
    }
}

/// Computes the signed token deltas of a position update at the current price.
///
/// Positive values are owed to the pool, negative values are paid out by it.
///
/// # Arguments
///
/// * `sqrt_price_x64` - The current sqrt price of the pool
/// * `sqrt_price_lower_x64` - A sqrt price bounding the position
/// * `sqrt_price_upper_x64` - The other sqrt price bounding the position
/// * `liquidity_delta` - The change in the position's liquidity
///
pub fn get_delta_amounts_signed(
    sqrt_price_x64: u128,
    mut sqrt_price_lower_x64: u128,
    mut sqrt_price_upper_x64: u128,
    liquidity_delta: i128,
) -> Result<(i128, i128)> {
    if sqrt_price_lower_x64 > sqrt_price_upper_x64 {
        std::mem::swap(&mut sqrt_price_lower_x64, &mut sqrt_price_upper_x64);
    };

    let mut amount_a = 0;
    let mut amount_b = 0;
    if sqrt_price_x64 < sqrt_price_lower_x64 {
        // current price is below the range, the position is entirely token_a
        amount_a = get_delta_a_signed(sqrt_price_lower_x64, sqrt_price_upper_x64, liquidity_delta)?;
    } else if sqrt_price_x64 < sqrt_price_upper_x64 {
        amount_a = get_delta_a_signed(sqrt_price_x64, sqrt_price_upper_x64, liquidity_delta)?;
        amount_b = get_delta_b_signed(sqrt_price_lower_x64, sqrt_price_x64, liquidity_delta)?;
    } else {
        amount_b = get_delta_b_signed(sqrt_price_lower_x64, sqrt_price_upper_x64, liquidity_delta)?;
    }
    Ok((amount_a, amount_b))
}

#[cfg(test)]
mod liquidity_math_test {
    use super::*;
    use crate::libraries::fixed_point_64::Q64;
    use crate::libraries::sqrt_price_math::{get_delta_a, get_delta_b};

    #[test]
    fn add_delta_adds_and_subtracts() {
        assert_eq!(add_delta(1, 0).unwrap(), 1);
        assert_eq!(add_delta(1, -1).unwrap(), 0);
        assert_eq!(add_delta(1, 1).unwrap(), 2);
        assert_eq!(add_delta(u128::MAX, i128::MIN).unwrap(), u128::MAX - (1u128 << 127));
    }

    #[test]
    fn add_delta_overflows() {
        assert_eq!(
            add_delta(u128::MAX - 14, 15).unwrap_err(),
            ErrorCode::LiquidityAddValueErr.into()
        );
    }

    #[test]
    fn add_delta_underflows() {
        assert_eq!(add_delta(0, -1).unwrap_err(), ErrorCode::LiquiditySubValueErr.into());
        assert_eq!(add_delta(3, -4).unwrap_err(), ErrorCode::LiquiditySubValueErr.into());
    }

    #[test]
    fn delta_amounts_below_range() {
        let (lower, upper) = (2 * Q64, 4 * Q64);
        let (a, b) = get_delta_amounts_signed(Q64, upper, lower, 1_000_000).unwrap();
        assert_eq!(a, i128::from(get_delta_a(lower, upper, 1_000_000, true).unwrap()));
        assert_eq!(a, 250_000);
        assert_eq!(b, 0);
    }

    #[test]
    fn delta_amounts_in_range() {
        let (lower, upper) = (Q64, 4 * Q64);
        let (a, b) = get_delta_amounts_signed(2 * Q64, lower, upper, 1_000_000).unwrap();
        assert_eq!(a, 250_000);
        assert_eq!(b, 1_000_000);

        // removing the same liquidity pays the amounts back, rounded down
        let (a, b) = get_delta_amounts_signed(2 * Q64, lower, upper, -1_000_000).unwrap();
        assert_eq!(a, -250_000);
        assert_eq!(b, -1_000_000);
    }

    #[test]
    fn delta_amounts_above_range() {
        let (lower, upper) = (Q64, 3 * Q64);
        let (a, b) = get_delta_amounts_signed(3 * Q64, lower, upper, 7).unwrap();
        assert_eq!(a, 0);
        assert_eq!(b, i128::from(get_delta_b(lower, upper, 7, true).unwrap()));
        assert_eq!(b, 14);
    }

    #[test]
    fn delta_amounts_rounding_favors_the_pool() {
        // √P from 1 to 3, L = 1: Δa = 2/3
        let (a, _) = get_delta_amounts_signed(0, Q64, 3 * Q64, 1).unwrap();
        assert_eq!(a, 1);
        let (a, _) = get_delta_amounts_signed(0, Q64, 3 * Q64, -1).unwrap();
        assert_eq!(a, 0);
    }

    #[test]
    fn delta_amounts_propagate_errors() {
        assert_eq!(
            get_delta_amounts_signed(0, 1, u128::MAX, i128::MAX).unwrap_err(),
            ErrorCode::ScaleOverflow.into()
        );
    }
}
