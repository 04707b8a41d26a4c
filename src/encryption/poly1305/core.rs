//! ChaCha20-Poly1305 authenticated encryption (RFC 8439).
//!
//! This module implements the ChaCha20-Poly1305 AEAD construction as
//! specified in RFC 8439. It combines:
//!
//! - ChaCha20 as a stream cipher for confidentiality
//! - Poly1305 (evaluated over [`crate::primitives::BigInt`]) as a one-time
//!   MAC for authentication
//!
//! ## Design goals
//!
//! - Constant-time authentication check
//! - Explicit nonce and key management
//! - Clear separation between cipher and MAC
//!
//! ## Security notes
//!
//! - The caller must ensure `(key, nonce)` uniqueness, where `nonce =
//!   constant || iv`.
//! - Reusing a `(key, nonce)` pair breaks security.

use super::mac::Poly1305;
use crate::chacha20::{Chacha20Error, chacha20_apply, chacha20_block};
use crate::primitives::BigIntError;

/// Errors that can occur during ChaCha20-Poly1305 encryption or decryption.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Chacha20Poly1305Error {
    /// The authentication tag verification failed. Unique to decryption;
    /// no plaintext is returned when this occurs.
    AuthenticationFailed,
    /// A buffer required by the construction (the MAC input, or a BigInt
    /// limb array) could not be allocated.
    AllocationFailure,
    /// The plaintext or ciphertext is long enough that the ChaCha20 block
    /// counter would wrap before the last block is generated.
    InputTooLong,
}

impl From<Chacha20Error> for Chacha20Poly1305Error {
    fn from(_: Chacha20Error) -> Self {
        Chacha20Poly1305Error::InputTooLong
    }
}

impl From<BigIntError> for Chacha20Poly1305Error {
    fn from(err: BigIntError) -> Self {
        match err {
            BigIntError::AllocationFailure => Chacha20Poly1305Error::AllocationFailure,
            // The modulus `2^130 - 5` is a fixed, non-zero constant, so
            // Poly1305's internal reduction can never actually divide by
            // zero. Mapped conservatively rather than left unreachable.
            BigIntError::DivisionByZero => Chacha20Poly1305Error::AllocationFailure,
        }
    }
}

/// Encrypts and authenticates a message using ChaCha20-Poly1305.
///
/// # Parameters
///
/// - `key`: 256-bit secret key
/// - `iv`: 64-bit IV
/// - `constant`: 32-bit constant prefix (together with `iv` forms the
///   96-bit ChaCha20 nonce as `constant || iv`)
/// - `plaintext`: message to encrypt
/// - `aad`: associated data, authenticated but not encrypted
///
/// # Algorithm
///
/// 1. Derive the Poly1305 one-time key using `ChaCha20(key, nonce, counter = 0)`
/// 2. Encrypt the plaintext using ChaCha20 starting at counter = 1
/// 3. Construct the MAC input:
///    - AAD || pad16
///    - ciphertext || pad16
///    - len(AAD) || len(ciphertext)
/// 4. Compute the Poly1305 authentication tag
///
/// Returns the ciphertext (same length as `plaintext`) and the 16-byte tag.
pub fn encrypt(
    key: &[u8; 32],
    iv: &[u8; 8],
    constant: &[u8; 4],
    plaintext: &[u8],
    aad: &[u8],
) -> Result<(Vec<u8>, [u8; 16]), Chacha20Poly1305Error> {
    let nonce = build_nonce(constant, iv);

    let block0 = chacha20_block(key, 0, &nonce);
    let mut otk = [0u8; 32];
    otk.copy_from_slice(&block0[..32]);

    let ciphertext = if plaintext.is_empty() {
        Vec::new()
    } else {
        chacha20_apply(key, 1, &nonce, plaintext)?
    };

    let tag = auth(&otk, aad, &ciphertext)?;

    otk.fill(0);

    Ok((ciphertext, tag))
}

/// Decrypts and authenticates a message using ChaCha20-Poly1305.
///
/// # Algorithm
///
/// 1. Recompute the Poly1305 one-time key
/// 2. Rebuild the MAC input exactly as in [`encrypt`]
/// 3. Verify the authentication tag in constant time
/// 4. Decrypt the ciphertext only if authentication succeeds
///
/// No plaintext is returned under any failure path.
pub fn decrypt(
    key: &[u8; 32],
    iv: &[u8; 8],
    constant: &[u8; 4],
    ciphertext: &[u8],
    aad: &[u8],
    tag: &[u8; 16],
) -> Result<Vec<u8>, Chacha20Poly1305Error> {
    let nonce = build_nonce(constant, iv);

    let block0 = chacha20_block(key, 0, &nonce);
    let mut otk = [0u8; 32];
    otk.copy_from_slice(&block0[..32]);

    let expected_tag = auth(&otk, aad, ciphertext)?;

    let mut diff = 0u8;
    for i in 0..16 {
        diff |= expected_tag[i] ^ tag[i];
    }

    otk.fill(0);

    if diff != 0 {
        return Err(Chacha20Poly1305Error::AuthenticationFailed);
    }

    if ciphertext.is_empty() {
        Ok(Vec::new())
    } else {
        Ok(chacha20_apply(key, 1, &nonce, ciphertext)?)
    }
}

/// Builds the 96-bit ChaCha20 nonce as `constant (4 bytes) || iv (8 bytes)`.
fn build_nonce(constant: &[u8; 4], iv: &[u8; 8]) -> [u8; 12] {
    let mut nonce = [0u8; 12];
    nonce[..4].copy_from_slice(constant);
    nonce[4..].copy_from_slice(iv);
    nonce
}

/// Pads a buffer with zero bytes until its length is a multiple of 16.
///
/// This is required by the Poly1305 input format defined in RFC 8439.
#[inline(always)]
fn pad16(buf: &mut Vec<u8>) {
    let rem = buf.len() % 16;
    if rem != 0 {
        buf.resize(buf.len() + (16 - rem), 0);
    }
}

/// Length of `n` bytes rounded up to the next multiple of 16.
fn padded_len(n: usize) -> usize {
    let rem = n % 16;
    if rem == 0 { n } else { n + (16 - rem) }
}

/// Assembles the MAC input `AAD || pad16(AAD) || CT || pad16(CT) ||
/// le64(|AAD|) || le64(|CT|)` and computes its Poly1305 tag.
///
/// The buffer is sized exactly once, per spec.md §5, through
/// [`Vec::try_reserve_exact`] so that an allocation failure here surfaces as
/// [`Chacha20Poly1305Error::AllocationFailure`] instead of aborting the
/// process — the same discipline [`crate::primitives::BigInt`] applies to
/// its own limb buffers.
fn auth(
    one_time_key: &[u8; 32],
    aad: &[u8],
    ciphertext: &[u8],
) -> Result<[u8; 16], Chacha20Poly1305Error> {
    let total_len = padded_len(aad.len()) + padded_len(ciphertext.len()) + 16;

    let mut mac_data = Vec::new();
    mac_data
        .try_reserve_exact(total_len)
        .map_err(|_| Chacha20Poly1305Error::AllocationFailure)?;

    mac_data.extend_from_slice(aad);
    pad16(&mut mac_data);

    mac_data.extend_from_slice(ciphertext);
    pad16(&mut mac_data);

    mac_data.extend_from_slice(&(aad.len() as u64).to_le_bytes());
    mac_data.extend_from_slice(&(ciphertext.len() as u64).to_le_bytes());

    let mut mac = Poly1305::new(one_time_key);
    for chunk in mac_data.chunks(16) {
        mac.update_block(chunk)?;
    }

    Ok(mac.finalize()?)
}
