//! Byte, hex, and decimal conversions for [`BigInt`].
//!
//! All constructors here take an explicit sign supplied by the caller; they
//! never infer it from the input (decimal strings are the one exception,
//! which read a leading `-`/`+` the way the original C parser does).
//! Invalid hex or decimal input produces a canonical zero rather than an
//! error — see spec §7 on `InvalidEncoding`.

use super::core::BigInt;

fn hex_nibble(c: u8) -> Option<u32> {
    match c {
        b'0'..=b'9' => Some((c - b'0') as u32),
        b'a'..=b'f' => Some((c - b'a' + 10) as u32),
        b'A'..=b'F' => Some((c - b'A' + 10) as u32),
        _ => None,
    }
}

impl BigInt {
    /// Builds a `BigInt` from a big-endian byte array (index `0` holds the
    /// most significant byte).
    pub fn from_be_bytes(sign: i8, bytes: &[u8]) -> Self {
        let mut be_reversed: Vec<u8> = bytes.to_vec();
        be_reversed.reverse();
        Self::from_le_bytes(sign, &be_reversed)
    }

    /// Builds a `BigInt` from a little-endian byte array (index `0` holds
    /// the least significant byte).
    pub fn from_le_bytes(sign: i8, bytes: &[u8]) -> Self {
        let mut limbs = vec![0u32; bytes.len().div_ceil(4)];

        for (i, &b) in bytes.iter().enumerate() {
            limbs[i / 4] |= (b as u32) << ((i % 4) * 8);
        }

        BigInt::from_raw(sign, limbs)
    }

    /// Builds a `BigInt` from a big-endian hexadecimal string.
    ///
    /// Returns canonical zero if the string contains a non-hex character.
    pub fn from_be_hex(sign: i8, hex: &str) -> Self {
        match decode_hex_be(hex) {
            Some(bytes) => Self::from_be_bytes(sign, &bytes),
            None => BigInt::zero(),
        }
    }

    /// Builds a `BigInt` from a little-endian hexadecimal string (each byte
    /// still written as `high_nibble low_nibble`, but byte order in the
    /// string runs least-significant first).
    ///
    /// Returns canonical zero if the string contains a non-hex character.
    pub fn from_le_hex(sign: i8, hex: &str) -> Self {
        match decode_hex_le(hex) {
            Some(bytes) => Self::from_le_bytes(sign, &bytes),
            None => BigInt::zero(),
        }
    }

    /// Builds a `BigInt` from a decimal string, with an optional leading
    /// `+`/`-` sign.
    ///
    /// Uses the schoolbook "accumulator × 10 + digit" algorithm, expanding
    /// the limb buffer whenever a carry escapes the current size. Returns
    /// canonical zero on an empty string, a bare sign, or a non-digit
    /// character.
    pub fn from_dec(dec: &str) -> Self {
        let (sign, digits) = match dec.as_bytes().first() {
            Some(b'-') => (-1i8, &dec[1..]),
            Some(b'+') => (1i8, &dec[1..]),
            Some(_) => (1i8, dec),
            None => return BigInt::zero(),
        };

        if digits.is_empty() {
            return BigInt::zero();
        }

        let mut limbs: Vec<u32> = Vec::new();

        for &c in digits.as_bytes() {
            if !c.is_ascii_digit() {
                return BigInt::zero();
            }

            let mut carry = (c - b'0') as u64;
            for limb in limbs.iter_mut() {
                let product = *limb as u64 * 10 + carry;
                *limb = product as u32;
                carry = product >> 32;
            }

            if carry > 0 {
                limbs.push(carry as u32);
            }
        }

        BigInt::from_raw(sign, limbs)
    }

    /// Serializes the magnitude to `len` big-endian bytes, zero-padded on
    /// the high end or silently truncated on the high end if `len` is
    /// smaller than the magnitude.
    pub fn to_be_bytes(&self, len: usize) -> Vec<u8> {
        let mut out = self.to_le_bytes(len);
        out.reverse();
        out
    }

    /// Serializes the magnitude to `len` little-endian bytes, zero-padded
    /// or silently truncated on the high end as described in
    /// [`to_be_bytes`](Self::to_be_bytes).
    pub fn to_le_bytes(&self, len: usize) -> Vec<u8> {
        let mut out = vec![0u8; len];

        for (i, byte) in out.iter_mut().enumerate() {
            let limb_idx = i / 4;
            let shift = (i % 4) * 8;

            if limb_idx < self.limbs.len() {
                *byte = (self.limbs[limb_idx] >> shift) as u8;
            }
        }

        out
    }
}

fn decode_hex_be(hex: &str) -> Option<Vec<u8>> {
    let hex = hex.as_bytes();
    let mut out = Vec::with_capacity(hex.len().div_ceil(2));
    let mut i = hex.len();

    while i > 0 {
        let low = hex_nibble(hex[i - 1])?;
        let high = if i >= 2 { hex_nibble(hex[i - 2])? } else { 0 };
        out.push(((high << 4) | low) as u8);
        i = i.saturating_sub(2);
    }

    out.reverse();
    Some(out)
}

fn decode_hex_le(hex: &str) -> Option<Vec<u8>> {
    let hex = hex.as_bytes();
    let mut out = Vec::with_capacity(hex.len().div_ceil(2));
    let mut i = 0;

    while i < hex.len() {
        let high = hex_nibble(hex[i])?;
        let low = if i + 1 < hex.len() {
            hex_nibble(hex[i + 1])?
        } else {
            0
        };
        out.push(((high << 4) | low) as u8);
        i += 2;
    }

    Some(out)
}
