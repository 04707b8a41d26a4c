//! Binary long division for [`BigInt`].
//!
//! Division walks the numerator's magnitude one bit at a time, from the
//! most significant bit down, shifting a running remainder and comparing it
//! against the denominator — the same algorithm a person would use doing
//! long division by hand, just in base 2. It is not fast, but it is simple
//! enough to audit, which is the point of this module.

use super::core::{BigInt, BigIntError};

impl BigInt {
    /// Number of bits needed to represent `|self|` (`0` for zero).
    fn bit_length(&self) -> usize {
        match self.limbs.last() {
            None => 0,
            Some(&msl) => (self.limbs.len() - 1) * 32 + (32 - msl.leading_zeros() as usize),
        }
    }

    /// Returns the bit at position `i` (0 = least significant) of `|self|`.
    fn bit(&self, i: usize) -> u32 {
        let limb_idx = i / 32;
        let bit_idx = i % 32;
        (self.limbs.get(limb_idx).copied().unwrap_or(0) >> bit_idx) & 1
    }

    /// Shifts `|self|` left by one bit in place, growing the limb buffer
    /// when a carry escapes the current size.
    fn shl1(&mut self) -> Result<(), BigIntError> {
        if self.is_zero() {
            return Ok(());
        }

        let mut carry = 0u32;
        for limb in self.limbs.iter_mut() {
            let next_carry = *limb >> 31;
            *limb = (*limb << 1) | carry;
            carry = next_carry;
        }

        if carry != 0 {
            BigInt::try_grow(&mut self.limbs, 1)?;
            self.limbs.push(carry);
        }

        Ok(())
    }

    /// Computes quotient and remainder of `self / divisor` using truncated
    /// (toward-zero) division semantics: the quotient's sign is the product
    /// of the operand signs, and the remainder's sign follows the
    /// numerator.
    ///
    /// Fails with [`BigIntError::DivisionByZero`] if `divisor` is zero.
    pub fn div_mod(&self, divisor: &BigInt) -> Result<(BigInt, BigInt), BigIntError> {
        if divisor.is_zero() {
            return Err(BigIntError::DivisionByZero);
        }

        if self.cmp_abs(divisor) == std::cmp::Ordering::Less {
            return Ok((BigInt::zero(), self.clone()));
        }

        let total_bits = self.bit_length();

        let mut quotient_limbs = Vec::new();
        BigInt::try_grow(&mut quotient_limbs, self.limbs.len())?;
        quotient_limbs.resize(self.limbs.len(), 0);

        let mut remainder = BigInt::zero();

        for i in (0..total_bits).rev() {
            remainder.shl1()?;

            if self.bit(i) == 1 {
                if remainder.is_zero() {
                    remainder.sign = 1;
                    remainder.limbs.push(1);
                } else {
                    remainder.limbs[0] |= 1;
                }
            }

            if remainder.cmp_abs(divisor) != std::cmp::Ordering::Less {
                remainder = remainder.sub_abs(divisor)?;
                quotient_limbs[i / 32] |= 1u32 << (i % 32);
            }
        }

        let quotient = BigInt::from_raw(self.sign * divisor.sign, quotient_limbs);
        if !remainder.is_zero() {
            remainder.sign = self.sign;
        }

        Ok((quotient, remainder))
    }

    /// Truncated quotient `self / divisor`.
    pub fn div(&self, divisor: &BigInt) -> Result<BigInt, BigIntError> {
        Ok(self.div_mod(divisor)?.0)
    }

    /// Truncated-toward-zero remainder `self % divisor` (sign matches the
    /// numerator).
    pub fn rem(&self, divisor: &BigInt) -> Result<BigInt, BigIntError> {
        Ok(self.div_mod(divisor)?.1)
    }

    /// Euclidean modulo: the unique representative of `self mod divisor` in
    /// `[0, |divisor|)`.
    ///
    /// Computes the truncated remainder and, if it came out negative, adds
    /// `|divisor|` to bring it into range. Poly1305 only ever calls this on
    /// a non-negative accumulator, so the correction branch is never
    /// exercised in the hot path, but it must remain correct regardless.
    pub fn mod_crypto(&self, divisor: &BigInt) -> Result<BigInt, BigIntError> {
        let remainder = self.rem(divisor)?;

        if remainder.sign < 0 {
            let divisor_abs = BigInt {
                sign: 1,
                limbs: divisor.limbs.clone(),
            };
            remainder.add(&divisor_abs)
        } else {
            Ok(remainder)
        }
    }
}
