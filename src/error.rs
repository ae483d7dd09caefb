use crate::rational::Rational;
use thiserror::Error;

/// Failure of a single calculator step.
///
/// The solver treats every variant as "reject this candidate"; callers driving
/// a [`Calculator`](crate::Calculator) directly see them as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EvalError {
    #[error("operator needs {required} values but the stack holds {available}")]
    InsufficientStack { required: usize, available: usize },

    #[error("divided by zero")]
    DivisionByZero,

    #[error("result {value} exceeds the magnitude ceiling {ceiling}")]
    MagnitudeExceeded { value: Rational, ceiling: Rational },

    #[error("arithmetic overflowed 64-bit rational range")]
    Overflow,

    #[error("no value in stack")]
    EmptyStack,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PresentError {
    #[error("operator '{operator}' at position {position} has fewer than two operands")]
    MissingOperands { operator: String, position: usize },

    #[error("formula leaves {0} expressions instead of exactly one")]
    Unbalanced(usize),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("invalid number '{0}'")]
    InvalidNumber(String),

    #[error("zero denominator in '{0}'")]
    ZeroDenominator(String),

    #[error("unknown token '{0}'")]
    UnknownToken(String),
}
