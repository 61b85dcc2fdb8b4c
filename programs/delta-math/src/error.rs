use anchor_lang::prelude::*;

#[error_code]
pub enum ErrorCode {
    /// Wide arithmetic
    #[msg("Subtrahend is greater than minuend")]
    Underflow,
    #[msg("Wide addition exceeds 256 bits")]
    Overflow,

    // the shifted value would not fit in the 256 bit container
    #[msg("Fixed point scaling overflow")]
    ScaleOverflow,
    // the exact result does not fit in the output type
    #[msg("Result exceeds the output width")]
    ResultOverflow,
    #[msg("Division by zero")]
    DivisionByZero,

    // Liquidity Sub
    #[msg("Liquidity sub delta L must be smaller than before")]
    LiquiditySubValueErr,
    // Liquidity Add
    #[msg("Liquidity add delta L must be greater, or equal to before")]
    LiquidityAddValueErr,
    #[msg("Liquidity delta must be greater than i128::MIN")]
    InvalidLiquidityDelta,
}
