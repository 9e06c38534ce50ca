//! Prime-order groups and pairing-friendly field towers with constant-time
//! implementations.
//!
//! This crate provides the arithmetic core shared by elliptic-curve
//! protocols:
//!
//! - the BLS12-381 extension-field tower `Fp → Fp2 → Fp6 → Fp12`, together
//!   with the alternate `Fp4`-based representation used to speed up sparse
//!   line multiplications in pairing computation;
//! - a uniform [`Group`](group::Group) contract over prime-order groups
//!   (NIST P-256/P-384/P-521 and Ristretto255) with fixed byte encodings,
//!   uniform sampling, and RFC 9380 hash-to-group entry points;
//! - the RFC 9380 `expand_message_xmd` / `expand_message_xof` primitives.
//!
//! # Security Features
//!
//! Every operation on field elements, scalars, and group elements executes a
//! data-independent sequence of instructions; equality and zero tests are
//! computed as masks via the `subtle` crate and conditional selection never
//! branches on secrets. The sole variable-time escape hatch is
//! [`Fp12::exp_vartime`](ec::bls12_381::Fp12::exp_vartime), which must never
//! see a secret exponent.
//!
//! **Warning:** Unaudited implementation. Use at your own risk.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

extern crate alloc;

// Error module and re-exports
pub mod error;
pub use error::{Error, Result};

// Elliptic curve primitives
pub mod ec;

// Prime-order group abstraction, concrete groups, and message expansion
pub mod group;
pub use group::{Element, Expander, Group, Params, Scalar};
pub use group::{ExpanderXmd, ExpanderXof};
pub use group::{Ristretto255, P256, P384, P521};
