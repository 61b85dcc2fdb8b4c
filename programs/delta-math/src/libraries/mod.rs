pub mod big_num;
pub mod checked_math;
pub mod checked_shift;
pub mod fixed_point_64;
pub mod full_math;
pub mod liquidity_amounts;
pub mod liquidity_math;
pub mod rounding_math;
pub mod sqrt_price_math;
#[cfg(test)]
pub mod test_utils;

pub use big_num::*;
pub use checked_math::*;
pub use checked_shift::*;
pub use fixed_point_64::*;
pub use full_math::*;
pub use liquidity_amounts::*;
pub use liquidity_math::*;
pub use rounding_math::*;
pub use sqrt_price_math::*;
