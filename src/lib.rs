//! ChaCha20-Poly1305 authenticated encryption (RFC 8439)
//!
//! This crate implements the ChaCha20-Poly1305 AEAD construction together
//! with the arbitrary-precision integer layer its Poly1305 authenticator
//! evaluates its polynomial on.
//!
//! The focus is on **clarity, predictability, and auditability**, rather
//! than on providing a large or high-level cryptographic API. Components
//! are explicit in their semantics and suitable for security-critical code,
//! but this crate makes no claim of side-channel hardening beyond
//! constant-time tag comparison, and no claim of constant-time big-integer
//! arithmetic.
//!
//! # Module overview
//!
//! - `chacha20`
//!   The ChaCha20 block function and keystream application (RFC 8439 §2.3
//!   / §2.4). Dependency-free, fixed-size, no heap allocation.
//!
//! - `primitives`
//!   [`primitives::BigInt`], a signed arbitrary-precision integer used by
//!   Poly1305 to evaluate its polynomial modulo `2^130 - 5`. The one
//!   primitive in this crate that allocates.
//!
//! - `encryption`
//!   The Poly1305 one-time authenticator (built on `BigInt`) and the
//!   ChaCha20-Poly1305 AEAD composition (built on `chacha20` and
//!   `encryption::poly1305`). This is the crate's primary public surface:
//!   [`encryption::aead_encrypt`], [`encryption::aead_decrypt`],
//!   [`encryption::poly1305_mac`], [`encryption::poly1305_key_gen`].
//!
//! # Design goals
//!
//! - Minimal and explicit APIs
//! - Stable, well-defined semantics matching RFC 8439 byte-for-byte
//! - Clear separation between cryptographic code and supporting primitives
//!
//! # Non-goals
//!
//! - No XChaCha20, HChaCha20, or original 64-bit-nonce ChaCha.
//! - No streaming/incremental API; operations consume a full plaintext or
//!   ciphertext in memory.
//! - No misuse resistance for nonce reuse — the caller is responsible for
//!   `(key, nonce)` uniqueness.
//!
//! This crate is not intended to replace full-featured, externally audited
//! cryptographic libraries, but to serve as a small, auditable
//! implementation of a single, well-specified construction.

pub mod chacha20;
pub mod encryption;
pub mod primitives;

pub(crate) mod hex;
