//! Magnitude and signed arithmetic for [`BigInt`].
//!
//! The magnitude operations (`add_abs`, `sub_abs`, `mul_abs`) are schoolbook
//! algorithms operating purely on the limb buffers; the signed operations
//! (`add`, `sub`, `mul`) dispatch on sign and delegate to them.

use std::cmp::Ordering;

use super::core::{BigInt, BigIntError};

impl BigInt {
    /// `|self| + |other|`, always returning a non-negative result.
    ///
    /// Schoolbook addition with a 64-bit carry; the result has
    /// `max(size_a, size_b)` limbs plus a potential carry limb, with
    /// leading zero limbs stripped.
    pub fn add_abs(&self, other: &BigInt) -> Result<BigInt, BigIntError> {
        let max_size = self.limbs.len().max(other.limbs.len());

        let mut out = Vec::new();
        BigInt::try_grow(&mut out, max_size + 1)?;
        out.resize(max_size, 0);

        let mut carry = 0u64;
        for i in 0..max_size {
            let a = *self.limbs.get(i).unwrap_or(&0) as u64;
            let b = *other.limbs.get(i).unwrap_or(&0) as u64;
            let sum = a + b + carry;
            out[i] = sum as u32;
            carry = sum >> 32;
        }

        if carry != 0 {
            out.push(carry as u32);
        }

        Ok(BigInt::from_raw(1, out))
    }

    /// `|self| - |other|`, requiring `|self| >= |other|`.
    ///
    /// Schoolbook subtraction with a borrow captured from the 32nd bit of a
    /// widened difference. Callers must ensure the magnitude ordering holds;
    /// this function does not check it (matching the spec's division
    /// algorithm, which always calls it with that invariant already
    /// established).
    pub fn sub_abs(&self, other: &BigInt) -> Result<BigInt, BigIntError> {
        let mut out = Vec::new();
        BigInt::try_grow(&mut out, self.limbs.len())?;
        out.resize(self.limbs.len(), 0);

        let mut borrow = 0u64;
        for i in 0..self.limbs.len() {
            let a = self.limbs[i] as u64;
            let b = *other.limbs.get(i).unwrap_or(&0) as u64;
            let diff = a.wrapping_sub(b).wrapping_sub(borrow);
            out[i] = diff as u32;
            borrow = (diff >> 32) & 1;
        }

        Ok(BigInt::from_raw(1, out))
    }

    /// `|self| * |other|`.
    ///
    /// Schoolbook multiplication accumulating into a buffer of
    /// `size_self + size_other` limbs, each partial product computed in
    /// 64-bit arithmetic.
    pub fn mul_abs(&self, other: &BigInt) -> Result<BigInt, BigIntError> {
        if self.is_zero() || other.is_zero() {
            return Ok(BigInt::zero());
        }

        let result_size = self.limbs.len() + other.limbs.len();
        let mut out = Vec::new();
        BigInt::try_grow(&mut out, result_size)?;
        out.resize(result_size, 0);

        for (i, &a) in self.limbs.iter().enumerate() {
            let mut carry = 0u64;
            for (j, &b) in other.limbs.iter().enumerate() {
                let product = a as u64 * b as u64 + out[i + j] as u64 + carry;
                out[i + j] = product as u32;
                carry = product >> 32;
            }
            out[i + other.limbs.len()] = carry as u32;
        }

        Ok(BigInt::from_raw(1, out))
    }

    /// Signed addition: `self + other`.
    ///
    /// Same-sign operands add magnitudes and keep the shared sign.
    /// Different-sign operands subtract the smaller magnitude from the
    /// larger; the larger magnitude's sign wins, and equal magnitudes
    /// canonicalize to zero.
    pub fn add(&self, other: &BigInt) -> Result<BigInt, BigIntError> {
        if self.is_zero() {
            return Ok(other.clone());
        }
        if other.is_zero() {
            return Ok(self.clone());
        }

        if self.sign == other.sign {
            let mut result = self.add_abs(other)?;
            result.sign = self.sign;
            Ok(result)
        } else {
            match self.cmp_abs(other) {
                Ordering::Greater | Ordering::Equal => {
                    let mut result = self.sub_abs(other)?;
                    if !result.is_zero() {
                        result.sign = self.sign;
                    }
                    Ok(result)
                }
                Ordering::Less => {
                    let mut result = other.sub_abs(self)?;
                    if !result.is_zero() {
                        result.sign = other.sign;
                    }
                    Ok(result)
                }
            }
        }
    }

    /// Signed subtraction: `self - other`, defined as `self + (-other)`.
    pub fn sub(&self, other: &BigInt) -> Result<BigInt, BigIntError> {
        let negated = BigInt {
            sign: -other.sign,
            limbs: other.limbs.clone(),
        };
        self.add(&negated)
    }

    /// Signed multiplication: `self * other`.
    ///
    /// The result's sign is the product of the operand signs, or zero if
    /// either operand is zero.
    pub fn mul(&self, other: &BigInt) -> Result<BigInt, BigIntError> {
        if self.is_zero() || other.is_zero() {
            return Ok(BigInt::zero());
        }

        let mut result = self.mul_abs(other)?;
        if !result.is_zero() {
            result.sign = self.sign * other.sign;
        }
        Ok(result)
    }
}
