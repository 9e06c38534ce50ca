//! Quadratic extension `Fp4 = Fp2[s]/(s² − (u+1))`.
//!
//! Fp4 only appears inside the alternate `Fp12Alt` tower, where its
//! generator `s` is identified with `w³` (the non-residue `t` of that
//! basis). [`Fp4::mul_by_t`] and [`Fp4::mul_by_fp2`] are the two
//! specialized products the sparse line multiplication relies on.

use core::fmt;

use subtle::{Choice, ConditionallySelectable, ConstantTimeEq, CtOption};

use super::fp2::Fp2;

/// Element `c0 + c1·s` of Fp4, with `s² = u + 1`.
#[derive(Copy, Clone, Default)]
pub struct Fp4 {
    /// Coefficient of s⁰
    pub c0: Fp2,
    /// Coefficient of s¹
    pub c1: Fp2,
}

impl Fp4 {
    /// Length in bytes of the canonical encoding.
    pub const SIZE: usize = 2 * Fp2::SIZE;

    /// Additive identity.
    #[inline]
    pub const fn zero() -> Fp4 {
        Fp4 {
            c0: Fp2::zero(),
            c1: Fp2::zero(),
        }
    }

    /// Multiplicative identity.
    #[inline]
    pub const fn one() -> Fp4 {
        Fp4 {
            c0: Fp2::one(),
            c1: Fp2::zero(),
        }
    }

    /// Mask-valued test for the additive identity.
    pub fn is_zero(&self) -> Choice {
        self.c0.is_zero() & self.c1.is_zero()
    }

    /// Componentwise addition.
    #[inline]
    pub const fn add(&self, rhs: &Fp4) -> Fp4 {
        Fp4 {
            c0: self.c0.add(&rhs.c0),
            c1: self.c1.add(&rhs.c1),
        }
    }

    /// Componentwise subtraction.
    #[inline]
    pub const fn sub(&self, rhs: &Fp4) -> Fp4 {
        Fp4 {
            c0: self.c0.sub(&rhs.c0),
            c1: self.c1.sub(&rhs.c1),
        }
    }

    /// Componentwise negation.
    #[inline]
    pub const fn neg(&self) -> Fp4 {
        Fp4 {
            c0: self.c0.neg(),
            c1: self.c1.neg(),
        }
    }

    /// Doubling.
    #[inline]
    pub const fn double(&self) -> Fp4 {
        self.add(self)
    }

    /// Karatsuba multiplication with the s² = u+1 twist.
    #[inline]
    pub const fn mul(&self, rhs: &Fp4) -> Fp4 {
        let aa = self.c0.mul(&rhs.c0);
        let bb = self.c1.mul(&rhs.c1);
        let cross = self.c0.add(&self.c1).mul(&rhs.c0.add(&rhs.c1));

        Fp4 {
            c0: aa.add(&bb.mul_by_nonresidue()),
            c1: cross.sub(&aa).sub(&bb),
        }
    }

    /// Squaring, complex formula with the s² = u+1 twist.
    #[inline]
    pub const fn square(&self) -> Fp4 {
        let aa = self.c0.square();
        let bb = self.c1.square();
        let prod = self.c0.mul(&self.c1);

        Fp4 {
            c0: aa.add(&bb.mul_by_nonresidue()),
            c1: prod.double(),
        }
    }

    /// Multiplication by the non-residue `t = s`:
    /// `(c0 + c1·s)·s = c1·(u+1) + c0·s`.
    #[inline]
    pub const fn mul_by_t(&self) -> Fp4 {
        Fp4 {
            c0: self.c1.mul_by_nonresidue(),
            c1: self.c0,
        }
    }

    /// Scaling by an element of the Fp2 subfield.
    #[inline]
    pub const fn mul_by_fp2(&self, rhs: &Fp2) -> Fp4 {
        Fp4 {
            c0: self.c0.mul(rhs),
            c1: self.c1.mul(rhs),
        }
    }

    /// Multiplicative inverse, `(c0 − c1·s) / (c0² − (u+1)·c1²)`. Returns
    /// `None` for zero.
    pub fn invert(&self) -> CtOption<Fp4> {
        (self.c0.square() - self.c1.square().mul_by_nonresidue())
            .invert()
            .map(|t| Fp4 {
                c0: self.c0 * t,
                c1: (self.c1 * t).neg(),
            })
    }

    /// Decodes the canonical 192-byte encoding `c1 ‖ c0` (higher-degree
    /// coefficient first).
    pub fn from_bytes(bytes: &[u8; 192]) -> CtOption<Fp4> {
        let mut b1 = [0u8; 96];
        let mut b0 = [0u8; 96];
        b1.copy_from_slice(&bytes[..96]);
        b0.copy_from_slice(&bytes[96..]);

        Fp2::from_bytes(&b1).and_then(|c1| Fp2::from_bytes(&b0).map(|c0| Fp4 { c0, c1 }))
    }

    /// Canonical 192-byte encoding `c1 ‖ c0`.
    pub fn to_bytes(self) -> [u8; 192] {
        let mut res = [0u8; 192];
        res[..96].copy_from_slice(&self.c1.to_bytes());
        res[96..].copy_from_slice(&self.c0.to_bytes());
        res
    }
}

impl From<Fp2> for Fp4 {
    fn from(f: Fp2) -> Fp4 {
        Fp4 {
            c0: f,
            c1: Fp2::zero(),
        }
    }
}

impl fmt::Debug for Fp4 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({:?}) + ({:?})*s", self.c0, self.c1)
    }
}

#[cfg(feature = "zeroize")]
impl zeroize::DefaultIsZeroes for Fp4 {}

impl ConstantTimeEq for Fp4 {
    fn ct_eq(&self, other: &Fp4) -> Choice {
        self.c0.ct_eq(&other.c0) & self.c1.ct_eq(&other.c1)
    }
}

impl ConditionallySelectable for Fp4 {
    fn conditional_select(a: &Fp4, b: &Fp4, choice: Choice) -> Fp4 {
        Fp4 {
            c0: Fp2::conditional_select(&a.c0, &b.c0, choice),
            c1: Fp2::conditional_select(&a.c1, &b.c1, choice),
        }
    }
}

impl Eq for Fp4 {}
impl PartialEq for Fp4 {
    #[inline]
    fn eq(&self, other: &Fp4) -> bool {
        bool::from(self.ct_eq(other))
    }
}

impl_binops_additive!(Fp4);
impl_binops_multiplicative!(Fp4);
