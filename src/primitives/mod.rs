//! Fixed and arbitrary-precision integer primitives.
//!
//! Currently exposes [`bigint`], a signed arbitrary-precision integer used
//! by the Poly1305 authenticator to evaluate its polynomial modulo
//! `2^130 - 5`. Unlike the rest of this crate's primitives, `BigInt` is the
//! one type that allocates: its limb storage grows with the magnitude of
//! the value it represents.

pub mod bigint;

pub use bigint::{BigInt, BigIntError};
