///! Checked arithmetic on the wide integer types
///! Every failure is a typed error, nothing wraps or masks
use super::big_num::{U256, U512};
use crate::error::ErrorCode;
use anchor_lang::prelude::*;

/// Narrowing conversions that refuse to drop set bits.
///
/// Unlike `as_u64`/`as_u128` these never panic and never mask: a value that
/// does not fit the target width is reported as `ResultOverflow`.
pub trait CheckedDowncast {
    fn to_u64(self) -> Result<u64>;
    fn to_u128(self) -> Result<u128>;
}

impl CheckedDowncast for U256 {
    fn to_u64(self) -> Result<u64> {
        if self > U256::from(u64::MAX) {
            #[cfg(feature = "enable-log")]
            msg!("U256 {} does not fit u64", self);
            return err!(ErrorCode::ResultOverflow);
        }
        Ok(self.low_u64())
    }

    fn to_u128(self) -> Result<u128> {
        if self > U256::from(u128::MAX) {
            #[cfg(feature = "enable-log")]
            msg!("U256 {} does not fit u128", self);
            return err!(ErrorCode::ResultOverflow);
        }
        Ok(self.as_u128())
    }
}

impl CheckedDowncast for U512 {
    fn to_u64(self) -> Result<u64> {
        if self > U512::from(u64::MAX) {
            #[cfg(feature = "enable-log")]
            msg!("U512 {} does not fit u64", self);
            return err!(ErrorCode::ResultOverflow);
        }
        Ok(self.low_u64())
    }

    fn to_u128(self) -> Result<u128> {
        if self > U512::from(u128::MAX) {
            #[cfg(feature = "enable-log")]
            msg!("U512 {} does not fit u128", self);
            return err!(ErrorCode::ResultOverflow);
        }
        Ok(self.as_u128())
    }
}

/// Checked 256 bit addition and subtraction returning typed errors
pub trait WideMath: Sized {
    fn safe_add(self, v: Self) -> Result<Self>;
    fn safe_sub(self, v: Self) -> Result<Self>;
}

impl WideMath for U256 {
    fn safe_add(self, v: Self) -> Result<Self> {
        self.checked_add(v).ok_or_else(|| {
            #[cfg(feature = "enable-log")]
            msg!("Wide overflow in safe_add: {} + {}", self, v);
            ErrorCode::Overflow.into()
        })
    }

    fn safe_sub(self, v: Self) -> Result<Self> {
        self.checked_sub(v).ok_or_else(|| {
            #[cfg(feature = "enable-log")]
            msg!("Wide underflow in safe_sub: {} - {}", self, v);
            ErrorCode::Underflow.into()
        })
    }
}
