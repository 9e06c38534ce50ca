//! Elliptic Curve Primitives
//!
//! This module hosts the curve-specific arithmetic layers. The BLS12-381
//! extension-field tower lives here; the NIST prime curves and
//! Ristretto255 are provided through the adapters in [`crate::group`].

pub mod bls12_381;
