use super::big_num::{U256, U512};
use super::checked_math::CheckedDowncast;
use crate::error::ErrorCode;
use anchor_lang::prelude::*;

/// Rounding direction of a division
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rounding {
    /// Truncate toward zero
    Down,
    /// Round any non-zero remainder away from zero
    Up,
}

impl From<bool> for Rounding {
    fn from(round_up: bool) -> Self {
        if round_up {
            Rounding::Up
        } else {
            Rounding::Down
        }
    }
}

pub trait DivRounding: Sized {
    /// Returns `floor(self / denom)` or `ceil(self / denom)`
    ///
    /// The ceiling is taken from the remainder, so no `self + denom - 1`
    /// intermediate is ever formed and the operation cannot overflow.
    fn div_rounding(self, denom: Self, rounding: Rounding) -> Result<Self>;
}

macro_rules! impl_div_rounding {
    ($type:ty) => {
        impl DivRounding for $type {
            fn div_rounding(self, denom: Self, rounding: Rounding) -> Result<Self> {
                if denom.is_zero() {
                    #[cfg(feature = "enable-log")]
                    msg!("Division by zero in div_rounding: {} / {}", self, denom);
                    return err!(ErrorCode::DivisionByZero);
                }
                let (quotient, remainder) = self.div_mod(denom);
                if rounding == Rounding::Up && !remainder.is_zero() {
                    // quotient == MAX only when denom == 1, which leaves no remainder
                    Ok(quotient + <$type>::one())
                } else {
                    Ok(quotient)
                }
            }
        }
    };
}

impl_div_rounding!(U256);
impl_div_rounding!(U512);

/// Divides and narrows to u64, `ResultOverflow` if the quotient does not fit
pub fn div_rounding_u64<T>(numerator: T, denominator: T, rounding: Rounding) -> Result<u64>
where
    T: DivRounding + CheckedDowncast,
{
    numerator.div_rounding(denominator, rounding)?.to_u64()
}

/// Divides and narrows to u128, `ResultOverflow` if the quotient does not fit
pub fn div_rounding_u128<T>(numerator: T, denominator: T, rounding: Rounding) -> Result<u128>
where
    T: DivRounding + CheckedDowncast,
{
    numerator.div_rounding(denominator, rounding)?.to_u128()
}
