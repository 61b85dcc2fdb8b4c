/// A library for handling Q64.64 fixed point numbers
/// Used in sqrt_price_math.rs and liquidity_amounts.rs
use super::big_num::U256;

pub const Q64: u128 = (u64::MAX as u128) + 1; // 2^64
pub const RESOLUTION: u8 = 64;

/// Bit width of the wide intermediate container
pub const U256_BITS: usize = 256;

/// The minimum sqrt price of a tick range, 1.0001^(-443636/2) in Q64.64
pub const MIN_SQRT_PRICE_X64: u128 = 4295048016;
/// The maximum sqrt price of a tick range, 1.0001^(443636/2) in Q64.64
pub const MAX_SQRT_PRICE_X64: u128 = 79226673521066979257578248091;

/// Smallest value whose left shift by `shift` loses a bit of a `total_bits` wide container,
/// i.e. `1 << (total_bits - shift)`.
///
/// Only defined for `0 < shift < total_bits <= 256`.
pub const fn shl_overflow_threshold(total_bits: usize, shift: usize) -> U256 {
    let bit = total_bits - shift;
    let mut words = [0u64; 4];
    words[bit / 64] = 1u64 << (bit % 64);
    U256(words)
}

/// `2^192`. Any value at or above it overflows `U256` when scaled by `2^64`
pub const Q64_SHL_OVERFLOW_THRESHOLD: U256 =
    shl_overflow_threshold(U256_BITS, RESOLUTION as usize);

#[cfg(test)]
mod fixed_point_64_test {
    use super::*;

    #[test]
    fn q64_threshold_is_two_pow_192() {
        assert_eq!(Q64_SHL_OVERFLOW_THRESHOLD, U256([0, 0, 0, 1]));
        assert_eq!(Q64_SHL_OVERFLOW_THRESHOLD, U256::one() << 192u32);
    }

    #[test]
    fn threshold_follows_the_shift() {
        assert_eq!(shl_overflow_threshold(256, 1), U256::one() << 255u32);
        assert_eq!(shl_overflow_threshold(256, 255), U256::from(2u8));
        assert_eq!(shl_overflow_threshold(256, 100), U256::one() << 156u32);
        assert_eq!(shl_overflow_threshold(128, 64), U256::from(Q64));
    }

    #[test]
    fn q64_is_one_shifted_by_resolution() {
        assert_eq!(Q64, 1u128 << RESOLUTION);
    }
}
