//! NIST prime-curve groups P-256, P-384, and P-521.
//!
//! Thin adapters over the RustCrypto curve arithmetic. Point and scalar
//! representations, constant-time ladders, and the SSWU map live in the
//! backend crates; this module pins down the uniform contract: SEC1
//! encodings with both identity forms, capped rejection sampling, and the
//! per-curve RFC 9380 XMD suites.

use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

use elliptic_curve::bigint::{U256, U384, U576};
use elliptic_curve::hash2curve::{ExpandMsgXmd, GroupDigest};
use elliptic_curve::ops::Reduce;
use elliptic_curve::sec1::{EncodedPoint, FromEncodedPoint, ToEncodedPoint};
use elliptic_curve::{Curve, Field, PrimeField};
use rand_core::RngCore;
use subtle::{Choice, ConstantTimeEq, CtOption};

use crate::error::{Error, Result};
use crate::group::{Element, Group, Params, Scalar};

/// Upper bound on rejection-sampling iterations; an adversarial random
/// source surfaces `EntropyExhausted` instead of spinning forever.
const SAMPLE_RETRIES: usize = 128;

macro_rules! nist_group {
    (
        $(#[$doc:meta])*
        $group:ident, $element:ident, $scalar:ident,
        $curve:ty, $backend:ident, $uint:ty, $hash:ty,
        $name:literal, $elem_len:literal, $comp_len:literal, $scalar_len:literal
    ) => {
        $(#[$doc])*
        #[derive(Clone, Copy, Debug)]
        pub struct $group;

        /// Element of the group.
        #[derive(Clone, Copy)]
        pub struct $element($backend::ProjectivePoint);

        /// Scalar of the group.
        #[derive(Clone, Copy)]
        pub struct $scalar($backend::Scalar);

        impl fmt::Display for $group {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str($name)
            }
        }

        impl fmt::Debug for $element {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!(stringify!($element), "("))?;
                for b in self.marshal_binary_compress() {
                    write!(f, "{:02x}", b)?;
                }
                f.write_str(")")
            }
        }

        impl fmt::Debug for $scalar {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!(stringify!($scalar), "("))?;
                for b in self.marshal_binary() {
                    write!(f, "{:02x}", b)?;
                }
                f.write_str(")")
            }
        }

        impl ConstantTimeEq for $element {
            fn ct_eq(&self, other: &Self) -> Choice {
                self.0.ct_eq(&other.0)
            }
        }

        impl Eq for $element {}
        impl PartialEq for $element {
            fn eq(&self, other: &Self) -> bool {
                bool::from(self.ct_eq(other))
            }
        }

        impl ConstantTimeEq for $scalar {
            fn ct_eq(&self, other: &Self) -> Choice {
                self.0.ct_eq(&other.0)
            }
        }

        impl Eq for $scalar {}
        impl PartialEq for $scalar {
            fn eq(&self, other: &Self) -> bool {
                bool::from(self.ct_eq(other))
            }
        }

        impl Group for $group {
            type Element = $element;
            type Scalar = $scalar;

            const NAME: &'static str = $name;

            fn identity() -> $element {
                $element($backend::ProjectivePoint::IDENTITY)
            }

            fn generator() -> $element {
                $element($backend::ProjectivePoint::GENERATOR)
            }

            fn order() -> $scalar {
                $scalar(<$backend::Scalar as Reduce<$uint>>::reduce(
                    <$curve as Curve>::ORDER,
                ))
            }

            fn params() -> Params {
                Params {
                    element_length: $elem_len,
                    compressed_element_length: $comp_len,
                    scalar_length: $scalar_len,
                }
            }

            fn random_element<R: RngCore + ?Sized>(rng: &mut R) -> Result<$element> {
                let k = Self::random_scalar(rng)?;
                Ok($element::mul_gen(&k))
            }

            fn random_scalar<R: RngCore + ?Sized>(rng: &mut R) -> Result<$scalar> {
                let mut repr = $backend::FieldBytes::default();
                for _ in 0..SAMPLE_RETRIES {
                    rng.try_fill_bytes(&mut repr).map_err(|_| {
                        Error::EntropyExhausted {
                            context: concat!($name, "::random_scalar"),
                        }
                    })?;
                    let s: CtOption<$backend::Scalar> =
                        $backend::Scalar::from_repr(repr.clone());
                    if let Some(s) = Option::<$backend::Scalar>::from(s) {
                        return Ok($scalar(s));
                    }
                }
                Err(Error::EntropyExhausted {
                    context: concat!($name, "::random_scalar"),
                })
            }

            fn hash_to_element(msg: &[u8], dst: &[u8]) -> Result<$element> {
                <$curve>::hash_from_bytes::<ExpandMsgXmd<$hash>>(&[msg], &[dst])
                    .map($element)
                    .map_err(|_| Error::InvalidLength {
                        context: concat!($name, "::hash_to_element"),
                        expected: 255,
                        actual: dst.len(),
                    })
            }

            fn hash_to_scalar(msg: &[u8], dst: &[u8]) -> Result<$scalar> {
                <$curve>::hash_to_scalar::<ExpandMsgXmd<$hash>>(&[msg], &[dst])
                    .map($scalar)
                    .map_err(|_| Error::InvalidLength {
                        context: concat!($name, "::hash_to_scalar"),
                        expected: 255,
                        actual: dst.len(),
                    })
            }
        }

        impl $element {
            fn encode(&self, compress: bool) -> Vec<u8> {
                let len = if compress { $comp_len } else { $elem_len };
                if bool::from(self.is_identity()) {
                    return vec![0u8; len];
                }
                self.0.to_affine().to_encoded_point(compress).as_bytes().to_vec()
            }
        }

        impl Element for $element {
            type Group = $group;

            fn add(&self, rhs: &Self) -> Self {
                $element(self.0 + rhs.0)
            }

            fn dbl(&self) -> Self {
                $element(self.0 + self.0)
            }

            fn neg(&self) -> Self {
                $element(-self.0)
            }

            fn mul(&self, k: &$scalar) -> Self {
                $element(self.0 * k.0)
            }

            fn mul_gen(k: &$scalar) -> Self {
                $element($backend::ProjectivePoint::GENERATOR * k.0)
            }

            fn is_identity(&self) -> Choice {
                self.0.ct_eq(&$backend::ProjectivePoint::IDENTITY)
            }

            fn marshal_binary(&self) -> Vec<u8> {
                self.encode(false)
            }

            fn marshal_binary_compress(&self) -> Vec<u8> {
                self.encode(true)
            }

            fn unmarshal_binary(bytes: &[u8]) -> Result<Self> {
                let valid_len = bytes.len() == $elem_len
                    || bytes.len() == $comp_len
                    || bytes.len() == 1;
                if !valid_len {
                    return Err(Error::InvalidLength {
                        context: concat!($name, "::unmarshal_binary"),
                        expected: $elem_len,
                        actual: bytes.len(),
                    });
                }

                // Both identity encodings: all-zero vector or single 0x00.
                if bytes.iter().all(|&b| b == 0) {
                    return Ok(<$group as Group>::identity());
                }

                let enc = EncodedPoint::<$curve>::from_bytes(bytes).map_err(|_| {
                    Error::OutOfRange {
                        context: concat!($name, "::unmarshal_binary"),
                    }
                })?;
                Option::<$backend::AffinePoint>::from(
                    $backend::AffinePoint::from_encoded_point(&enc),
                )
                .map(|p| $element($backend::ProjectivePoint::from(p)))
                .ok_or(Error::OutOfRange {
                    context: concat!($name, "::unmarshal_binary"),
                })
            }
        }

        impl Scalar for $scalar {
            type Group = $group;

            fn zero() -> Self {
                $scalar(<$backend::Scalar as Field>::ZERO)
            }

            fn one() -> Self {
                $scalar(<$backend::Scalar as Field>::ONE)
            }

            fn add(&self, rhs: &Self) -> Self {
                $scalar(self.0 + rhs.0)
            }

            fn sub(&self, rhs: &Self) -> Self {
                $scalar(self.0 - rhs.0)
            }

            fn mul(&self, rhs: &Self) -> Self {
                $scalar(self.0 * rhs.0)
            }

            fn neg(&self) -> Self {
                $scalar(-self.0)
            }

            fn inv(&self) -> Self {
                let inv = self.0.invert();
                $scalar(inv.unwrap_or(<$backend::Scalar as Field>::ZERO))
            }

            fn is_zero(&self) -> Choice {
                <$backend::Scalar as Field>::is_zero(&self.0)
            }

            fn marshal_binary(&self) -> Vec<u8> {
                self.0.to_repr().to_vec()
            }

            fn unmarshal_binary(bytes: &[u8]) -> Result<Self> {
                if bytes.len() != $scalar_len {
                    return Err(Error::InvalidLength {
                        context: concat!($name, "::unmarshal_binary"),
                        expected: $scalar_len,
                        actual: bytes.len(),
                    });
                }
                let repr = $backend::FieldBytes::clone_from_slice(bytes);
                Option::<$backend::Scalar>::from($backend::Scalar::from_repr(repr))
                    .map($scalar)
                    .ok_or(Error::OutOfRange {
                        context: concat!($name, "::unmarshal_binary"),
                    })
            }
        }
    };
}

nist_group!(
    /// The NIST P-256 group (secp256r1) with the
    /// `P256_XMD:SHA-256_SSWU_RO_` hash suite.
    P256, P256Element, P256Scalar,
    p256::NistP256, p256, U256, sha2::Sha256,
    "P-256", 65, 33, 32
);

nist_group!(
    /// The NIST P-384 group (secp384r1) with the
    /// `P384_XMD:SHA-384_SSWU_RO_` hash suite.
    P384, P384Element, P384Scalar,
    p384::NistP384, p384, U384, sha2::Sha384,
    "P-384", 97, 49, 48
);

nist_group!(
    /// The NIST P-521 group (secp521r1) with the
    /// `P521_XMD:SHA-512_SSWU_RO_` hash suite.
    P521, P521Element, P521Scalar,
    p521::NistP521, p521, U576, sha2::Sha512,
    "P-521", 133, 67, 66
);
