///! Left shifts of wide values that refuse to drop bits
///
use super::big_num::U256;
use super::fixed_point_64::{self, shl_overflow_threshold, Q64_SHL_OVERFLOW_THRESHOLD};
use crate::error::ErrorCode;
use anchor_lang::prelude::*;

/// Multiplies `v` by `2^64`.
///
/// Fails with `ScaleOverflow` iff `v >= 2^192`, i.e. when any bit at position
/// 192 or higher is set and would be shifted out of the container.
pub fn checked_shl_q64(v: U256) -> Result<U256> {
    if v >= Q64_SHL_OVERFLOW_THRESHOLD {
        #[cfg(feature = "enable-log")]
        msg!("checked_shl_q64 overflow, value: {}", v);
        return err!(ErrorCode::ScaleOverflow);
    }
    Ok(v << fixed_point_64::RESOLUTION)
}

/// Multiplies `v` by `2^shift`, failing with `ScaleOverflow` instead of losing high bits.
pub fn checked_shl(v: U256, shift: usize) -> Result<U256> {
    if shift == 0 {
        return Ok(v);
    }
    let overflow = if shift >= fixed_point_64::U256_BITS {
        !v.is_zero()
    } else {
        v >= shl_overflow_threshold(fixed_point_64::U256_BITS, shift)
    };
    if overflow {
        #[cfg(feature = "enable-log")]
        msg!("checked_shl overflow, value: {}, shift: {}", v, shift);
        return err!(ErrorCode::ScaleOverflow);
    }
    if shift >= fixed_point_64::U256_BITS {
        return Ok(U256::zero());
    }
    Ok(v << shift)
}
