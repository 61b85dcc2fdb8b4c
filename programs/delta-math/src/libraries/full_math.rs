//! Exact double width products.
//!
//! Two native width operands are always widened before they are multiplied, so
//! the product can never be truncated on the way in. The products here are
//! lossless by construction and therefore infallible.

use super::big_num::{Upcast512, U256, U512};

/// Returns the exact 256 bit product of two u128 values.
///
/// `(2^128 - 1)^2 < 2^256`, so the result always fits.
pub fn full_mul(a: u128, b: u128) -> U256 {
    U256::from(a) * U256::from(b)
}

/// Returns the exact product of a 256 bit and a 128 bit value.
///
/// The result needs at most 384 bits and is carried in a `U512`.
pub fn full_mul_u256(a: U256, b: u128) -> U512 {
    a.as_u512() * U512::from(b)
}
