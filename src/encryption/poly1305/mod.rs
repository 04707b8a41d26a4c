//! Poly1305 message authentication code (RFC 8439), and the ChaCha20-Poly1305
//! AEAD composition built on top of it.
//!
//! The implementation is split into two layers:
//!
//! - `mac`: the low-level Poly1305 accumulator, evaluated over
//!   [`crate::primitives::BigInt`]
//! - `core`: the AEAD composition — key derivation, MAC input assembly,
//!   and the public `encrypt`/`decrypt` entry points
//!
//! This module is **not** intended to be used directly by end users; it is
//! re-exported as [`crate::encryption::chacha20poly1305`].

/// ChaCha20-Poly1305 AEAD composition.
///
/// Derives the one-time Poly1305 key from ChaCha20 block 0, encrypts with
/// ChaCha20 starting at block 1, assembles the MAC input from AAD and
/// ciphertext, and verifies the tag in constant time on decryption.
pub mod core;

/// Low-level Poly1305 accumulator.
///
/// This module contains the internal Poly1305 state machine: key clamping,
/// block absorption, and final tag computation, all evaluated over
/// arbitrary-precision integers.
///
/// This module is cryptographically sensitive and must remain internal.
pub(crate) mod mac;
