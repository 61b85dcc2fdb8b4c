/// Helper functions for unit tests
///
/// The reference formulas use arbitrary precision integers so they share no
/// code with the fixed width engine they check.
use super::big_num::{U256, U512};
use super::fixed_point_64;
use num_bigint::BigUint;

pub fn u256_to_big(v: U256) -> BigUint {
    let bytes: Vec<u8> = v.0.iter().flat_map(|w| w.to_le_bytes()).collect();
    BigUint::from_bytes_le(&bytes)
}

pub fn u512_to_big(v: U512) -> BigUint {
    let bytes: Vec<u8> = v.0.iter().flat_map(|w| w.to_le_bytes()).collect();
    BigUint::from_bytes_le(&bytes)
}

fn div_big(n: BigUint, d: BigUint, round_up: bool) -> BigUint {
    let q = &n / &d;
    if round_up && q.clone() * &d != n {
        q + 1u8
    } else {
        q
    }
}

fn abs_diff(a: u128, b: u128) -> BigUint {
    BigUint::from(if a > b { a - b } else { b - a })
}

/// `L * |p1 - p0| * 2^64 / (p0 * p1)`
pub fn reference_delta_a(p0: u128, p1: u128, liquidity: u128, round_up: bool) -> BigUint {
    let n = BigUint::from(liquidity) * abs_diff(p0, p1) * BigUint::from(fixed_point_64::Q64);
    div_big(n, BigUint::from(p0) * BigUint::from(p1), round_up)
}

/// `L * |p1 - p0| / 2^64`
pub fn reference_delta_b(p0: u128, p1: u128, liquidity: u128, round_up: bool) -> BigUint {
    let n = BigUint::from(liquidity) * abs_diff(p0, p1);
    div_big(n, BigUint::from(fixed_point_64::Q64), round_up)
}

/// `amount * p0 * p1 / (|p1 - p0| * 2^64)`
pub fn reference_liquidity_a(p0: u128, p1: u128, amount: u64, round_up: bool) -> BigUint {
    let n = BigUint::from(amount) * BigUint::from(p0) * BigUint::from(p1);
    div_big(
        n,
        abs_diff(p0, p1) * BigUint::from(fixed_point_64::Q64),
        round_up,
    )
}

/// `amount * 2^64 / |p1 - p0|`
pub fn reference_liquidity_b(p0: u128, p1: u128, amount: u64, round_up: bool) -> BigUint {
    let n = BigUint::from(amount) * BigUint::from(fixed_point_64::Q64);
    div_big(n, abs_diff(p0, p1), round_up)
}

/// Get sqrt current price from reserves of token_b and token_a
///
/// # Formula
/// `P = reserve_b / reserve_a`
///
pub fn encode_price_sqrt_x64(reserve_b: u64, reserve_a: u64) -> u128 {
    ((reserve_b as f64 / reserve_a as f64).sqrt() * fixed_point_64::Q64 as f64).round() as u128
}
