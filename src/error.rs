//! Error types for the arithmetic operations

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("factorial is not defined for negative input {0}")]
    NegativeInput(i32),

    #[error("{lhs} + {rhs} overflows i32")]
    AddOverflow { lhs: i32, rhs: i32 },

    #[error("{0}! overflows i32")]
    FactorialOverflow(i32),
}

pub type Result<T> = std::result::Result<T, Error>;
