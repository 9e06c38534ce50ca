//! Prime-order group abstraction.
//!
//! This module defines a single contract over prime-order groups (the
//! NIST curves P-256, P-384, and P-521, and Ristretto255) together with
//! the RFC 9380 message-expansion primitives used to hash arbitrary input
//! into group elements and scalars.
//!
//! The contract is expressed as the [`Group`] trait with associated
//! [`Element`] and [`Scalar`] value types. It exists for protocol code and
//! tests that quantify over groups; concrete call sites are expected to
//! monomorphize, never to box.

use alloc::vec::Vec;
use core::fmt;

use rand_core::RngCore;
use subtle::{Choice, ConstantTimeEq};

use crate::error::Result;

pub mod expander;
mod nist;
mod ristretto;


pub use expander::{Expander, ExpanderXmd, ExpanderXof, Xof};
pub use nist::{P256Element, P256Scalar, P384Element, P384Scalar, P521Element, P521Scalar};
pub use nist::{P256, P384, P521};
pub use ristretto::{Ristretto255, RistrettoElement, RistrettoScalar};

/// Byte lengths of the fixed encodings of a group.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Params {
    /// Length of an uncompressed element encoding.
    pub element_length: usize,
    /// Length of a compressed element encoding.
    pub compressed_element_length: usize,
    /// Length of a scalar encoding.
    pub scalar_length: usize,
}

/// A prime-order group of order r.
///
/// Implementations guarantee the abelian group laws on elements, the field
/// laws on scalars, and that every operation except the explicitly
/// variable-time ones runs in time independent of secret data.
pub trait Group: 'static + Copy + Clone + fmt::Debug {
    /// Group element value type.
    type Element: Element<Group = Self>;
    /// Scalar value type, integers modulo the group order.
    type Scalar: Scalar<Group = Self>;

    /// Canonical name of the group.
    const NAME: &'static str;

    /// Returns a fresh element set to the identity.
    fn new_element() -> Self::Element {
        Self::identity()
    }

    /// Returns a fresh scalar set to zero.
    fn new_scalar() -> Self::Scalar {
        <Self::Scalar as Scalar>::zero()
    }

    /// The neutral element.
    fn identity() -> Self::Element;

    /// The fixed generator.
    fn generator() -> Self::Element;

    /// The group order r carried into the scalar field (that is, reduced
    /// modulo r).
    fn order() -> Self::Scalar;

    /// Encoding lengths for this group.
    fn params() -> Params;

    /// Samples a uniform element using the supplied byte source.
    ///
    /// Fails with [`EntropyExhausted`](crate::Error::EntropyExhausted) when
    /// the source does.
    fn random_element<R: RngCore + ?Sized>(rng: &mut R) -> Result<Self::Element>;

    /// Samples a uniform scalar using the supplied byte source.
    ///
    /// Rejection sampling is capped, so an adversarial source surfaces
    /// [`EntropyExhausted`](crate::Error::EntropyExhausted) instead of
    /// looping forever.
    fn random_scalar<R: RngCore + ?Sized>(rng: &mut R) -> Result<Self::Scalar>;

    /// Hashes `msg` to a uniform group element, domain-separated by `dst`,
    /// per RFC 9380.
    fn hash_to_element(msg: &[u8], dst: &[u8]) -> Result<Self::Element>;

    /// Hashes `msg` to a uniform scalar, domain-separated by `dst`, per
    /// RFC 9380.
    fn hash_to_scalar(msg: &[u8], dst: &[u8]) -> Result<Self::Scalar>;
}

/// An element of a prime-order group.
pub trait Element: Copy + Clone + fmt::Debug + ConstantTimeEq + Sized {
    /// The group this element belongs to.
    type Group: Group<Element = Self>;

    /// Group addition.
    fn add(&self, rhs: &Self) -> Self;

    /// Doubling; equal to `self.add(self)`.
    fn dbl(&self) -> Self;

    /// Group negation.
    fn neg(&self) -> Self;

    /// Scalar multiplication `k·P`, constant-time in `k`.
    fn mul(&self, k: &<Self::Group as Group>::Scalar) -> Self;

    /// Fixed-base scalar multiplication `k·G`, constant-time in `k`. May
    /// use precomputed tables of the generator.
    fn mul_gen(k: &<Self::Group as Group>::Scalar) -> Self;

    /// Mask-valued test against the neutral element.
    fn is_identity(&self) -> Choice;

    /// Mask-valued equality test.
    fn is_equal(&self, rhs: &Self) -> Choice {
        self.ct_eq(rhs)
    }

    /// Canonical uncompressed encoding. The identity encodes as the
    /// all-zero string.
    fn marshal_binary(&self) -> Vec<u8>;

    /// Canonical compressed encoding.
    fn marshal_binary_compress(&self) -> Vec<u8>;

    /// Decodes either encoding produced by this group, rejecting
    /// off-curve or non-canonical input. The identity is accepted both as
    /// an all-zero string and as the single byte `0x00`.
    fn unmarshal_binary(bytes: &[u8]) -> Result<Self>;
}

/// A scalar of a prime-order group: an integer modulo the group order.
pub trait Scalar: Copy + Clone + fmt::Debug + ConstantTimeEq + Sized {
    /// The group this scalar belongs to.
    type Group: Group<Scalar = Self>;

    /// The additive identity.
    fn zero() -> Self;

    /// The multiplicative identity.
    fn one() -> Self;

    /// Addition modulo the group order.
    fn add(&self, rhs: &Self) -> Self;

    /// Subtraction modulo the group order.
    fn sub(&self, rhs: &Self) -> Self;

    /// Multiplication modulo the group order.
    fn mul(&self, rhs: &Self) -> Self;

    /// Negation modulo the group order.
    fn neg(&self) -> Self;

    /// Multiplicative inverse; defined to be zero on zero input so that
    /// the operation stays total and constant-time. Callers that care
    /// must test [`is_zero`](Scalar::is_zero) first.
    fn inv(&self) -> Self;

    /// Mask-valued test for zero.
    fn is_zero(&self) -> Choice {
        self.ct_eq(&Self::zero())
    }

    /// Mask-valued equality test.
    fn is_equal(&self, rhs: &Self) -> Choice {
        self.ct_eq(rhs)
    }

    /// Canonical fixed-length encoding.
    fn marshal_binary(&self) -> Vec<u8>;

    /// Decodes the canonical encoding, rejecting values not below the
    /// group order.
    fn unmarshal_binary(bytes: &[u8]) -> Result<Self>;
}
