//! Signed arbitrary-precision integer: storage and invariants.
//!
//! `BigInt` is a signed-magnitude integer backed by a little-endian array
//! of 32-bit limbs. It is not a general-purpose big-integer library: its
//! surface is exactly what Poly1305 needs to evaluate `Σ mᵢ·rⁿ⁻ⁱ mod
//! (2¹³⁰ − 5)`, plus the conversions required to move key material and
//! tags in and out of byte form.
//!
//! # Invariants
//!
//! - `sign == 0` iff `limbs.is_empty()`. Zero has a single, canonical
//!   representation.
//! - When `limbs` is non-empty, its most significant limb is non-zero —
//!   there are no leading-zero limbs.
//!
//! Every constructor and arithmetic operation in this module restores these
//! invariants before returning, so callers never observe a non-canonical
//! value.

use std::cmp::Ordering;

/// Errors produced by `BigInt` arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BigIntError {
    /// The divisor was zero (sign `0` or an empty magnitude).
    DivisionByZero,
    /// A limb buffer could not be grown to the required capacity.
    AllocationFailure,
}

/// Signed arbitrary-precision integer.
///
/// Represented as a sign in `{-1, 0, 1}` and a little-endian `u32` limb
/// buffer holding the magnitude. The buffer is empty exactly when the value
/// is zero.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BigInt {
    pub(super) sign: i8,
    pub(super) limbs: Vec<u32>,
}

impl BigInt {
    /// The canonical representation of zero.
    pub fn zero() -> Self {
        BigInt {
            sign: 0,
            limbs: Vec::new(),
        }
    }

    /// Returns the sign of the value: `-1`, `0`, or `1`.
    pub fn sign(&self) -> i8 {
        self.sign
    }

    /// Returns `true` if the value is canonical zero.
    pub fn is_zero(&self) -> bool {
        self.sign == 0
    }

    /// Number of 32-bit limbs backing the magnitude (`0` for zero).
    pub fn limb_count(&self) -> usize {
        self.limbs.len()
    }

    /// Builds a `BigInt` from a raw sign and limb buffer, restoring the
    /// canonical-zero and no-leading-zero-limb invariants.
    ///
    /// `sign` is ignored (forced to `0`) when the stripped magnitude turns
    /// out to be empty.
    pub(super) fn from_raw(sign: i8, mut limbs: Vec<u32>) -> Self {
        while matches!(limbs.last(), Some(0)) {
            limbs.pop();
        }

        if limbs.is_empty() {
            BigInt { sign: 0, limbs }
        } else {
            BigInt { sign, limbs }
        }
    }

    /// Attempts to grow `buf` to `additional` more elements, surfacing an
    /// allocator failure as [`BigIntError::AllocationFailure`] instead of
    /// aborting the process.
    pub(super) fn try_grow(buf: &mut Vec<u32>, additional: usize) -> Result<(), BigIntError> {
        buf.try_reserve(additional)
            .map_err(|_| BigIntError::AllocationFailure)
    }

    /// Compares the magnitudes `|self|` and `|other|`.
    ///
    /// Size is compared first (more limbs means a larger magnitude, since
    /// leading-zero limbs are never retained), then limbs are compared from
    /// the most significant down.
    pub fn cmp_abs(&self, other: &BigInt) -> Ordering {
        if self.limbs.len() != other.limbs.len() {
            return self.limbs.len().cmp(&other.limbs.len());
        }

        for (a, b) in self.limbs.iter().rev().zip(other.limbs.iter().rev()) {
            match a.cmp(b) {
                Ordering::Equal => continue,
                ord => return ord,
            }
        }

        Ordering::Equal
    }
}

impl Default for BigInt {
    fn default() -> Self {
        BigInt::zero()
    }
}
