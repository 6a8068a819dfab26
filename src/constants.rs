//! Shared bounds and the power-of-ten table.
//!
//! Every component that needs a power of ten or the representable range
//! reads from here, so the bound is defined exactly once.

/// `10^k` for `k` in `0..=38`, computed once at compile time.
pub const POWERS_OF_TEN: [u128; 39] = {
    let mut table = [1u128; 39];
    let mut i = 1;
    while i <= 38 {
        table[i] = table[i - 1] * 10;
        i += 1;
    }
    table
};

/// The largest magnitude an unscaled value may carry: `10^38 - 1`.
pub const MAX_UNSCALED: u128 = POWERS_OF_TEN[38] - 1;

/// The most negative unscaled value: `-(10^38 - 1)`.
pub const MIN_UNSCALED: i128 = -(MAX_UNSCALED as i128);

/// Highest precision this crate's `overflows`/`rescale` accept.
pub const MAX_PRECISION: u32 = 38;
