//! Integer addition producing a [`Sum`] record
//!
//! The record carries both operands alongside their sum so callers can
//! report the whole equation without threading the inputs separately.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from checked arithmetic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ArithError {
    /// The sum does not fit in an `i32`
    #[error("{a} + {b} overflows a 32-bit integer")]
    Overflow {
        /// First operand
        a: i32,
        /// Second operand
        b: i32,
    },
}

/// Both operands of an addition and their sum
///
/// Invariant: `sum == a + b` (modulo 2^32 for [`add`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Sum {
    /// First operand
    pub a: i32,
    /// Second operand
    pub b: i32,
    /// `a + b`
    pub sum: i32,
}

/// Add two integers
///
/// Overflow wraps in two's complement; use [`checked_add`] when the operands
/// come from outside the program.
#[must_use]
pub const fn add(a: i32, b: i32) -> Sum {
    Sum {
        a,
        b,
        sum: a.wrapping_add(b),
    }
}

/// Add two integers, failing instead of wrapping on overflow
pub const fn checked_add(a: i32, b: i32) -> Result<Sum, ArithError> {
    match a.checked_add(b) {
        Some(sum) => Ok(Sum { a, b, sum }),
        None => Err(ArithError::Overflow { a, b }),
    }
}
