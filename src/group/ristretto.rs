//! The Ristretto255 prime-order group.
//!
//! Adapter over `curve25519-dalek`. Ristretto255 is already prime-order,
//! so no cofactor handling is needed; both element encodings coincide at
//! 32 bytes, and hashing to the group feeds 64 expander bytes through the
//! one-way map, matching the `ristretto255_XMD:SHA-512_R255MAP_RO_` suite.

use alloc::vec::Vec;
use core::fmt;

use curve25519_dalek::constants::RISTRETTO_BASEPOINT_POINT;
use curve25519_dalek::ristretto::{CompressedRistretto, RistrettoPoint};
use curve25519_dalek::scalar::Scalar as DalekScalar;
use curve25519_dalek::traits::Identity;
use rand_core::RngCore;
use sha2::Sha512;
use subtle::{Choice, ConstantTimeEq};

use crate::error::{Error, Result};
use crate::group::expander::{Expander, ExpanderXmd};
use crate::group::{Element, Group, Params, Scalar};

/// The group order ℓ = 2²⁵² + 27742317777372353535851937790883648493,
/// little-endian.
const ORDER_BYTES: [u8; 32] = [
    0xed, 0xd3, 0xf5, 0x5c, 0x1a, 0x63, 0x12, 0x58, 0xd6, 0x9c, 0xf7, 0xa2, 0xde, 0xf9, 0xde,
    0x14, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x10,
];

/// Number of uniform bytes consumed by the map to the group and by wide
/// scalar reduction.
const UNIFORM_BYTES: usize = 64;

/// The Ristretto255 group over edwards25519.
#[derive(Clone, Copy, Debug)]
pub struct Ristretto255;

/// Element of the Ristretto255 group.
#[derive(Clone, Copy)]
pub struct RistrettoElement(RistrettoPoint);

/// Scalar of the Ristretto255 group.
#[derive(Clone, Copy)]
pub struct RistrettoScalar(DalekScalar);

impl fmt::Display for Ristretto255 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(Self::NAME)
    }
}

impl fmt::Debug for RistrettoElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RistrettoElement(")?;
        for b in self.0.compress().as_bytes() {
            write!(f, "{:02x}", b)?;
        }
        f.write_str(")")
    }
}

impl fmt::Debug for RistrettoScalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RistrettoScalar(")?;
        for b in self.0.as_bytes() {
            write!(f, "{:02x}", b)?;
        }
        f.write_str(")")
    }
}

impl ConstantTimeEq for RistrettoElement {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0.ct_eq(&other.0)
    }
}

impl Eq for RistrettoElement {}
impl PartialEq for RistrettoElement {
    fn eq(&self, other: &Self) -> bool {
        bool::from(self.ct_eq(other))
    }
}

impl ConstantTimeEq for RistrettoScalar {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0.ct_eq(&other.0)
    }
}

impl Eq for RistrettoScalar {}
impl PartialEq for RistrettoScalar {
    fn eq(&self, other: &Self) -> bool {
        bool::from(self.ct_eq(other))
    }
}

fn uniform_bytes<R: RngCore + ?Sized>(rng: &mut R, context: &'static str) -> Result<[u8; 64]> {
    let mut buf = [0u8; UNIFORM_BYTES];
    rng.try_fill_bytes(&mut buf)
        .map_err(|_| Error::EntropyExhausted { context })?;
    Ok(buf)
}

impl Group for Ristretto255 {
    type Element = RistrettoElement;
    type Scalar = RistrettoScalar;

    const NAME: &'static str = "ristretto255";

    fn identity() -> RistrettoElement {
        RistrettoElement(RistrettoPoint::identity())
    }

    fn generator() -> RistrettoElement {
        RistrettoElement(RISTRETTO_BASEPOINT_POINT)
    }

    fn order() -> RistrettoScalar {
        RistrettoScalar(DalekScalar::from_bytes_mod_order(ORDER_BYTES))
    }

    fn params() -> Params {
        Params {
            element_length: 32,
            compressed_element_length: 32,
            scalar_length: 32,
        }
    }

    fn random_element<R: RngCore + ?Sized>(rng: &mut R) -> Result<RistrettoElement> {
        let buf = uniform_bytes(rng, "ristretto255::random_element")?;
        Ok(RistrettoElement(RistrettoPoint::from_uniform_bytes(&buf)))
    }

    fn random_scalar<R: RngCore + ?Sized>(rng: &mut R) -> Result<RistrettoScalar> {
        let buf = uniform_bytes(rng, "ristretto255::random_scalar")?;
        Ok(RistrettoScalar(DalekScalar::from_bytes_mod_order_wide(
            &buf,
        )))
    }

    fn hash_to_element(msg: &[u8], dst: &[u8]) -> Result<RistrettoElement> {
        let uniform = ExpanderXmd::<Sha512>::new(dst).expand(msg, UNIFORM_BYTES)?;
        let mut buf = [0u8; UNIFORM_BYTES];
        buf.copy_from_slice(&uniform);
        Ok(RistrettoElement(RistrettoPoint::from_uniform_bytes(&buf)))
    }

    fn hash_to_scalar(msg: &[u8], dst: &[u8]) -> Result<RistrettoScalar> {
        let uniform = ExpanderXmd::<Sha512>::new(dst).expand(msg, UNIFORM_BYTES)?;
        let mut buf = [0u8; UNIFORM_BYTES];
        buf.copy_from_slice(&uniform);
        Ok(RistrettoScalar(DalekScalar::from_bytes_mod_order_wide(
            &buf,
        )))
    }
}

impl Element for RistrettoElement {
    type Group = Ristretto255;

    fn add(&self, rhs: &Self) -> Self {
        RistrettoElement(self.0 + rhs.0)
    }

    fn dbl(&self) -> Self {
        RistrettoElement(self.0 + self.0)
    }

    fn neg(&self) -> Self {
        RistrettoElement(-self.0)
    }

    fn mul(&self, k: &RistrettoScalar) -> Self {
        RistrettoElement(self.0 * k.0)
    }

    fn mul_gen(k: &RistrettoScalar) -> Self {
        RistrettoElement(RistrettoPoint::mul_base(&k.0))
    }

    fn is_identity(&self) -> Choice {
        self.0.ct_eq(&RistrettoPoint::identity())
    }

    fn marshal_binary(&self) -> Vec<u8> {
        self.0.compress().as_bytes().to_vec()
    }

    fn marshal_binary_compress(&self) -> Vec<u8> {
        self.marshal_binary()
    }

    fn unmarshal_binary(bytes: &[u8]) -> Result<Self> {
        // Single 0x00 byte form of the identity.
        if bytes.len() == 1 && bytes[0] == 0 {
            return Ok(Ristretto255::identity());
        }
        if bytes.len() != 32 {
            return Err(Error::InvalidLength {
                context: "ristretto255::unmarshal_binary",
                expected: 32,
                actual: bytes.len(),
            });
        }
        let compressed = CompressedRistretto::from_slice(bytes).map_err(|_| {
            Error::InvalidLength {
                context: "ristretto255::unmarshal_binary",
                expected: 32,
                actual: bytes.len(),
            }
        })?;
        compressed
            .decompress()
            .map(RistrettoElement)
            .ok_or(Error::OutOfRange {
                context: "ristretto255::unmarshal_binary",
            })
    }
}

impl Scalar for RistrettoScalar {
    type Group = Ristretto255;

    fn zero() -> Self {
        RistrettoScalar(DalekScalar::ZERO)
    }

    fn one() -> Self {
        RistrettoScalar(DalekScalar::ONE)
    }

    fn add(&self, rhs: &Self) -> Self {
        RistrettoScalar(self.0 + rhs.0)
    }

    fn sub(&self, rhs: &Self) -> Self {
        RistrettoScalar(self.0 - rhs.0)
    }

    fn mul(&self, rhs: &Self) -> Self {
        RistrettoScalar(self.0 * rhs.0)
    }

    fn neg(&self) -> Self {
        RistrettoScalar(-self.0)
    }

    fn inv(&self) -> Self {
        // x^(ℓ-2); the exponentiation maps zero to zero, keeping the
        // operation total.
        RistrettoScalar(self.0.invert())
    }

    fn marshal_binary(&self) -> Vec<u8> {
        self.0.as_bytes().to_vec()
    }

    fn unmarshal_binary(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != 32 {
            return Err(Error::InvalidLength {
                context: "ristretto255::unmarshal_binary",
                expected: 32,
                actual: bytes.len(),
            });
        }
        let mut buf = [0u8; 32];
        buf.copy_from_slice(bytes);
        Option::<DalekScalar>::from(DalekScalar::from_canonical_bytes(buf))
            .map(RistrettoScalar)
            .ok_or(Error::OutOfRange {
                context: "ristretto255::unmarshal_binary",
            })
    }
}
