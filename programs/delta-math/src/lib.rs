//! Liquidity and token delta math for concentrated liquidity pools.
//!
//! Prices are square roots in Q64.64. Every intermediate that can exceed
//! 128 bits is carried in a fixed width `U256`/`U512`, and every narrowing
//! step either returns the exact value or an [`error::ErrorCode`].
pub mod error;
pub mod libraries;

pub use error::ErrorCode;
pub use libraries::*;
