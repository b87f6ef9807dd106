//! The `dual_core` crate provides forward-mode automatic differentiation over `f64`.
//! A `Dual` carries a function value and its first derivative through every operation,
//! so composing ordinary arithmetic yields an exact derivative at the evaluation point.
//!
//! Key components:
//! - **Dual**: the `real + dual·ε` value type, its operators, and elementary functions.
//! - **Errors**: `DualError`, returned by every operation with a restricted domain.
//! - **Derivative**: helpers that seed a variable, evaluate a closure, and read back
//!   the value and derivative.
pub mod derivative;
pub mod dual;
pub mod error;
mod ops;

pub use dual::{Dual, Exponent, TAN_POLE_TOLERANCE};
pub use error::{DualError, DualResult};
