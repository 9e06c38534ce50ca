//! BLS12-381 pairing-friendly field arithmetic.
//!
//! This module provides the tower of extension fields over the BLS12-381
//! base prime, up to and including the pairing target field Fp12 and its
//! alternate `Fp4`-basis representation consumed by Miller-loop code.
//!
//! **Warning:** Unaudited implementation. Use at your own risk.

mod field;

#[cfg(test)]
mod tests;

pub use field::fp::Fp;
pub use field::fp12::Fp12;
pub use field::fp12alt::{Fp12Alt, LineValue};
pub use field::fp2::Fp2;
pub use field::fp4::Fp4;
pub use field::fp6::Fp6;
