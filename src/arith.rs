//! Integer addition and factorial over `i32`
//!
//! `add` wraps on overflow so it is total and commutative for every pair of
//! inputs. `factorial` refuses to wrap: negative input and results past
//! `i32::MAX` come back as [`Error`] values.

use tracing::debug;

use crate::error::{Error, Result};

/// Sum of `a` and `b`, wrapping on overflow (two's complement).
pub fn add(a: i32, b: i32) -> i32 {
    a.wrapping_add(b)
}

/// Sum of `a` and `b`, or [`Error::AddOverflow`] if it does not fit in `i32`.
pub fn checked_add(a: i32, b: i32) -> Result<i32> {
    a.checked_add(b).ok_or(Error::AddOverflow { lhs: a, rhs: b })
}

/// Product `1 * 2 * ... * n`, with `factorial(0) == 1`.
///
/// # Errors
/// - [`Error::NegativeInput`] when `n < 0`
/// - [`Error::FactorialOverflow`] when `n!` exceeds `i32::MAX` (any `n > 12`)
pub fn factorial(n: i32) -> Result<i32> {
    if n < 0 {
        return Err(Error::NegativeInput(n));
    }

    let mut product: i32 = 1;
    for i in 2..=n {
        product = product.checked_mul(i).ok_or(Error::FactorialOverflow(n))?;
    }

    debug!("{}! = {}", n, product);
    Ok(product)
}
