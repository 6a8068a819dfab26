//! Error type shared by every fallible operation in the kernel.

use thiserror::Error;

/// The two ways a decimal operation can fail.
///
/// Every fallible function in this crate returns `Result<T, Error>`; there is
/// no third error kind and no variant carries a payload, since the caller
/// already has the operands that produced the failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// The mathematically correct result has magnitude greater than
    /// [`crate::MAX_UNSCALED`], or a conversion target cannot hold the value.
    #[error("Decimal overflow")]
    Overflow,
    /// [`crate::divide`] was called with a rescaled divisor of zero.
    #[error("Division by zero")]
    DivisionByZero,
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
