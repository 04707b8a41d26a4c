//! Low-level Poly1305 accumulator, evaluated over [`BigInt`].
//!
//! Unlike a radix-2^26 fast reducer, this accumulator evaluates the
//! Poly1305 polynomial the way RFC 8439 describes it: `h = (h + block) * r
//! mod (2^130 - 5)`, computed directly on arbitrary-precision integers. It
//! exists to give the crate's [`BigInt`] layer a real cryptographic
//! consumer, per this crate's design goals.
//!
//! This type must remain internal to the crate: reusing an instance or its
//! one-time key across messages breaks Poly1305's security guarantees.

use crate::primitives::{BigInt, BigIntError};

/// `2^130 - 5`, the prime Poly1305 evaluates its polynomial modulo.
fn prime() -> BigInt {
    BigInt::from_be_hex(1, "3fffffffffffffffffffffffffffffffb")
}

/// Clamps the Poly1305 `r` value in place, per RFC 8439: the top four bits
/// of bytes 3, 7, 11, 15 are cleared, and the bottom two bits of bytes 4,
/// 8, 12 are cleared (all indices in little-endian byte order).
fn clamp(r: &mut [u8; 16]) {
    r[3] &= 0x0f;
    r[7] &= 0x0f;
    r[11] &= 0x0f;
    r[15] &= 0x0f;
    r[4] &= 0xfc;
    r[8] &= 0xfc;
    r[12] &= 0xfc;
}

/// Internal Poly1305 state.
///
/// A fresh instance must be created for each message; it is consumed by
/// [`Poly1305::finalize`].
pub(crate) struct Poly1305 {
    r: BigInt,
    s: BigInt,
    acc: BigInt,
    prime: BigInt,
}

impl Poly1305 {
    /// Creates a new Poly1305 instance from a one-time 32-byte key.
    ///
    /// `one_time_key[0..16]` becomes the clamped multiplier `r`;
    /// `one_time_key[16..32]` becomes the additive term `s`.
    pub(crate) fn new(one_time_key: &[u8; 32]) -> Self {
        let mut r_bytes = [0u8; 16];
        r_bytes.copy_from_slice(&one_time_key[0..16]);
        clamp(&mut r_bytes);

        let r = BigInt::from_le_bytes(1, &r_bytes);
        let s = BigInt::from_le_bytes(1, &one_time_key[16..32]);

        Poly1305 {
            r,
            s,
            acc: BigInt::zero(),
            prime: prime(),
        }
    }

    /// Absorbs a single message block (at most 16 bytes) into the
    /// accumulator.
    ///
    /// The block is copied into a 17-byte little-endian buffer with an
    /// implicit `1` bit appended one byte past the block's length, then
    /// folded in as `acc = ((acc + block) * r) mod (2^130 - 5)`.
    pub(crate) fn update_block(&mut self, block: &[u8]) -> Result<(), BigIntError> {
        let mut padded = [0u8; 17];
        padded[..block.len()].copy_from_slice(block);
        padded[block.len()] = 0x01;

        let coeff = BigInt::from_le_bytes(1, &padded);

        self.acc = self.acc.add(&coeff)?;
        self.acc = self.acc.mul(&self.r)?;
        self.acc = self.acc.mod_crypto(&self.prime)?;

        Ok(())
    }

    /// Finalizes the computation and returns the 16-byte authentication
    /// tag.
    ///
    /// Adds `s` without further reduction and serializes the low 128 bits
    /// of the result as little-endian bytes (silently truncating the wider
    /// intermediate value, same as [`BigInt::to_le_bytes`] always does).
    pub(crate) fn finalize(self) -> Result<[u8; 16], BigIntError> {
        let total = self.acc.add(&self.s)?;

        let mut tag = [0u8; 16];
        tag.copy_from_slice(&total.to_le_bytes(16));
        Ok(tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_zeroes_the_documented_bits() {
        let mut r = [0xffu8; 16];
        clamp(&mut r);

        assert_eq!(r[3] & 0xf0, 0);
        assert_eq!(r[7] & 0xf0, 0);
        assert_eq!(r[11] & 0xf0, 0);
        assert_eq!(r[15] & 0xf0, 0);
        assert_eq!(r[4] & 0x03, 0);
        assert_eq!(r[8] & 0x03, 0);
        assert_eq!(r[12] & 0x03, 0);
    }
}
