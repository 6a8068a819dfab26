//! Fixed-precision 128-bit decimal arithmetic kernel for SQL `DECIMAL(p,
//! s)` types with `p <= 38`.
//!
//! The crate stores a decimal's unscaled coefficient as a 127-bit
//! sign-magnitude integer ([`UnscaledDecimal128`]) and exposes the
//! arithmetic a query engine needs to implement `DECIMAL` end to end:
//! addition with overflow detection, multiplication (checked and widening),
//! division with remainder via Knuth's Algorithm D, half-up rescaling by
//! powers of ten, comparison, and the 16-byte wire layout callers store
//! directly in page formats. The scale itself is not part of this type;
//! callers pair a scale with each value and choose when to
//! [`UnscaledDecimal128::rescale`].
//!
//! `#![feature(bigint_helper_methods)]` is used throughout the limb-level
//! modules for `carrying_add`/`borrowing_sub`, the same way this crate's
//! ancestor used it for its own multi-precision integer types.

#![feature(bigint_helper_methods)]

mod constants;
mod decimal;
mod error;
mod magnitude;
mod shift;
mod wide;


pub use constants::{MAX_PRECISION, MAX_UNSCALED, MIN_UNSCALED};
pub use decimal::UnscaledDecimal128;
pub use error::{Error, Result};
pub use shift::{shift_left_multi_precision, shift_left_pair, shift_right_multi_precision};
