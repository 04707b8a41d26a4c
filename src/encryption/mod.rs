//! ChaCha20-Poly1305 authenticated encryption (RFC 8439).
//!
//! This module exposes the ChaCha20-Poly1305 AEAD construction, plus its
//! two standalone building blocks (`poly1305_mac` and `poly1305_key_gen`),
//! by re-exporting the internal Poly1305-based implementation under clear,
//! unambiguous names.
//!
//! The underlying implementation is split internally for clarity and
//! safety, but users of this module interact only with the functions below.

mod poly1305;

use crate::chacha20::chacha20_block;
use crate::primitives::BigIntError;
use poly1305::mac::Poly1305;

/// ChaCha20-Poly1305 AEAD construction.
///
/// This is a re-export of the internal Poly1305-based implementation,
/// providing authenticated encryption with associated data (AEAD) as
/// specified in RFC 8439.
///
/// # Notes
///
/// - This module combines ChaCha20 for encryption and Poly1305 for
///   authentication.
/// - The API enforces one-time Poly1305 key usage internally.
/// - Nonce reuse with the same key is catastrophic and must be avoided.
pub use poly1305::core as chacha20poly1305;
pub use poly1305::core::Chacha20Poly1305Error;

/// Encrypts and authenticates `plaintext` under `key`/`iv`/`constant`,
/// authenticating `aad` alongside it without encrypting it.
///
/// `nonce = constant || iv`. Returns the ciphertext (same length as
/// `plaintext`) and the 16-byte authentication tag.
pub fn aead_encrypt(
    key: &[u8; 32],
    iv: &[u8; 8],
    constant: &[u8; 4],
    plaintext: &[u8],
    aad: &[u8],
) -> Result<(Vec<u8>, [u8; 16]), Chacha20Poly1305Error> {
    chacha20poly1305::encrypt(key, iv, constant, plaintext, aad)
}

/// Verifies `tag` over `ciphertext`/`aad` under `key`/`iv`/`constant`, and
/// only decrypts `ciphertext` if verification succeeds.
///
/// No plaintext is returned on any failure path.
pub fn aead_decrypt(
    key: &[u8; 32],
    iv: &[u8; 8],
    constant: &[u8; 4],
    ciphertext: &[u8],
    aad: &[u8],
    tag: &[u8; 16],
) -> Result<Vec<u8>, Chacha20Poly1305Error> {
    chacha20poly1305::decrypt(key, iv, constant, ciphertext, aad, tag)
}

/// Computes the standalone Poly1305 authentication tag of `message` under
/// the given one-time `key`.
///
/// Exposed for conformance testing against RFC 8439 §2.5.2; the AEAD
/// construction above derives its own one-time key internally and does not
/// go through this entry point directly.
pub fn poly1305_mac(key: &[u8; 32], message: &[u8]) -> Result<[u8; 16], BigIntError> {
    let mut mac = Poly1305::new(key);
    for chunk in message.chunks(16) {
        mac.update_block(chunk)?;
    }
    mac.finalize()
}

/// Derives the one-time Poly1305 key from ChaCha20 block 0 under
/// `chacha_key`/`nonce`.
pub fn poly1305_key_gen(chacha_key: &[u8; 32], nonce: &[u8; 12]) -> [u8; 32] {
    let block0 = chacha20_block(chacha_key, 0, nonce);
    let mut key = [0u8; 32];
    key.copy_from_slice(&block0[..32]);
    key
}
