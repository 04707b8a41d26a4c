//! Signed arbitrary-precision integer arithmetic.
//!
//! This module is split for clarity:
//!
//! - `core`: the `BigInt` type itself, its invariants, and magnitude
//!   comparison.
//! - `convert`: byte/hex/decimal constructors and byte serialization.
//! - `ops`: magnitude and signed add/sub/mul.
//! - `div`: binary long division, truncated remainder, and Euclidean
//!   modulo.
//!
//! `BigInt` exists to give Poly1305 (see
//! [`crate::encryption::poly1305`]) a reference-quality modular polynomial
//! evaluator to run its one-time authenticator on. It is not meant to
//! compete with a general-purpose big-integer crate.

mod convert;
mod core;
mod div;
mod ops;

pub use self::core::{BigInt, BigIntError};
