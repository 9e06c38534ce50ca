//! Alternate representation `Fp12Alt = Fp4[w]/(w³ − t)` of the pairing
//! target field.
//!
//! `Fp12Alt` holds the same underlying element as [`Fp12`], reorganized so
//! that the sparse "line" values produced by Miller-loop steps can be
//! multiplied in with far fewer Fp2 products. Writing everything in terms
//! of `w` with `w⁶ = u+1`, the identifications are `v = w²` and `t = w³`,
//! and the two bases are related by a pure permutation of coefficients.

use core::fmt;

use subtle::{Choice, ConstantTimeEq};

use super::fp12::Fp12;
use super::fp2::Fp2;
use super::fp4::Fp4;

/// Element `c0 + c1·w + c2·w²` of Fp12Alt, with `w³ = t` and each
/// coefficient in Fp4.
#[derive(Copy, Clone, Default)]
pub struct Fp12Alt {
    /// Coefficient of w⁰
    pub c0: Fp4,
    /// Coefficient of w¹
    pub c1: Fp4,
    /// Coefficient of w²
    pub c2: Fp4,
}

/// Sparse element `l0 + l1·w² + l2·w³` produced by a Miller-loop line
/// evaluation, with all three coefficients in Fp2.
#[derive(Copy, Clone, Default)]
pub struct LineValue {
    /// Coefficient of w⁰
    pub l0: Fp2,
    /// Coefficient of w²
    pub l1: Fp2,
    /// Coefficient of w³
    pub l2: Fp2,
}

impl Fp12Alt {
    /// Multiplicative identity.
    #[inline]
    pub const fn one() -> Fp12Alt {
        Fp12Alt {
            c0: Fp4::one(),
            c1: Fp4::zero(),
            c2: Fp4::zero(),
        }
    }

    /// Change of basis from the `Fp6[w]` tower. A pure index shuffle:
    /// the w^k coefficient of the element (0 ≤ k < 6, over the w⁶ = u+1
    /// presentation) lands at position (k mod 3, k div 3).
    #[inline]
    pub const fn from_fp12(x: &Fp12) -> Fp12Alt {
        Fp12Alt {
            c0: Fp4 {
                c0: x.c0.c0, // w^0
                c1: x.c1.c1, // w^3
            },
            c1: Fp4 {
                c0: x.c1.c0, // w^1
                c1: x.c0.c2, // w^4
            },
            c2: Fp4 {
                c0: x.c0.c1, // w^2
                c1: x.c1.c2, // w^5
            },
        }
    }

    /// Change of basis back to the `Fp6[w]` tower; exact inverse of
    /// [`Fp12Alt::from_fp12`].
    #[inline]
    pub const fn to_fp12(&self) -> Fp12 {
        let mut z = Fp12::zero();
        z.c0.c0 = self.c0.c0; // w^0
        z.c1.c0 = self.c1.c0; // w^1
        z.c0.c1 = self.c2.c0; // w^2
        z.c1.c1 = self.c0.c1; // w^3
        z.c0.c2 = self.c1.c1; // w^4
        z.c1.c2 = self.c2.c1; // w^5
        z
    }

    /// Componentwise addition.
    #[inline]
    pub const fn add(&self, rhs: &Fp12Alt) -> Fp12Alt {
        Fp12Alt {
            c0: self.c0.add(&rhs.c0),
            c1: self.c1.add(&rhs.c1),
            c2: self.c2.add(&rhs.c2),
        }
    }

    /// Componentwise subtraction.
    #[inline]
    pub const fn sub(&self, rhs: &Fp12Alt) -> Fp12Alt {
        Fp12Alt {
            c0: self.c0.sub(&rhs.c0),
            c1: self.c1.sub(&rhs.c1),
            c2: self.c2.sub(&rhs.c2),
        }
    }

    /// Componentwise negation.
    #[inline]
    pub const fn neg(&self) -> Fp12Alt {
        Fp12Alt {
            c0: self.c0.neg(),
            c1: self.c1.neg(),
            c2: self.c2.neg(),
        }
    }

    /// Karatsuba multiplication for cubic extensions with the w³ = t
    /// twist: three diagonal products v0, v1, v2 and three cross products.
    #[inline]
    pub const fn mul(&self, rhs: &Fp12Alt) -> Fp12Alt {
        let v0 = self.c0.mul(&rhs.c0);
        let v1 = self.c1.mul(&rhs.c1);
        let v2 = self.c2.mul(&rhs.c2);

        let p0 = self.c1.add(&self.c2).mul(&rhs.c1.add(&rhs.c2));
        let p1 = self.c0.add(&self.c1).mul(&rhs.c0.add(&rhs.c1));
        let p2 = self.c0.add(&self.c2).mul(&rhs.c0.add(&rhs.c2));

        Fp12Alt {
            c0: p0.sub(&v1).sub(&v2).mul_by_t().add(&v0),
            c1: p1.sub(&v0).sub(&v1).add(&v2.mul_by_t()),
            c2: p2.sub(&v0).add(&v1).sub(&v2),
        }
    }

    /// Chung–Hasan SQR3 squaring.
    #[inline]
    pub const fn square(&self) -> Fp12Alt {
        let s0 = self.c0.square();
        let s1 = self.c0.mul(&self.c1).double();
        let s2 = self.c0.add(&self.c2).sub(&self.c1).square();
        let s3 = self.c1.mul(&self.c2).double();
        let s4 = self.c2.square();

        Fp12Alt {
            c0: s3.mul_by_t().add(&s0),
            c1: s4.mul_by_t().add(&s1),
            c2: s1.add(&s2).add(&s3).sub(&s0).sub(&s4),
        }
    }

    /// Multiplication by a sparse line value.
    ///
    /// In this basis the line `l0 + l1·w² + l2·w³` is the element
    /// `((l0, l2), 0, (l1, 0))`: the w³ coefficient folds into the s-part
    /// of the first Fp4, the w² coefficient sits alone in the Fp2 subfield
    /// of the last. The general product is specialized accordingly: the
    /// middle diagonal vanishes, and two products collapse to subfield
    /// scalings.
    #[inline]
    pub const fn mul_line(&self, line: &LineValue) -> Fp12Alt {
        let y0 = Fp4 {
            c0: line.l0,
            c1: line.l2,
        };
        let y2 = line.l1;

        let v0 = self.c0.mul(&y0);
        let v2 = self.c2.mul_by_fp2(&y2);

        let p0 = self.c1.add(&self.c2).mul_by_fp2(&y2);
        let p1 = self.c0.add(&self.c1).mul(&y0);

        // (y0 + y2 as an Fp4): only the s-free component picks up l1.
        let ty = Fp4 {
            c0: y0.c0.add(&y2),
            c1: y0.c1,
        };
        let p2 = self.c0.add(&self.c2).mul(&ty);

        Fp12Alt {
            c0: p0.sub(&v2).mul_by_t().add(&v0),
            c1: p1.sub(&v0).add(&v2.mul_by_t()),
            c2: p2.sub(&v0).sub(&v2),
        }
    }
}

impl LineValue {
    /// Multiplicative identity: `l0 = 1`, the rest zero.
    #[inline]
    pub const fn one() -> LineValue {
        LineValue {
            l0: Fp2::one(),
            l1: Fp2::zero(),
            l2: Fp2::zero(),
        }
    }

    /// Mask-valued test for the all-zero line.
    pub fn is_zero(&self) -> Choice {
        self.l0.is_zero() & self.l1.is_zero() & self.l2.is_zero()
    }
}

impl From<&Fp12> for Fp12Alt {
    fn from(x: &Fp12) -> Fp12Alt {
        Fp12Alt::from_fp12(x)
    }
}

impl From<&Fp12Alt> for Fp12 {
    fn from(x: &Fp12Alt) -> Fp12 {
        x.to_fp12()
    }
}

impl fmt::Debug for Fp12Alt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "({:?}) + ({:?})*w + ({:?})*w^2",
            self.c0, self.c1, self.c2
        )
    }
}

impl fmt::Debug for LineValue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "({:?}) + ({:?})*w^2 + ({:?})*w^3",
            self.l0, self.l1, self.l2
        )
    }
}

impl ConstantTimeEq for Fp12Alt {
    fn ct_eq(&self, other: &Fp12Alt) -> Choice {
        self.c0.ct_eq(&other.c0) & self.c1.ct_eq(&other.c1) & self.c2.ct_eq(&other.c2)
    }
}

impl Eq for Fp12Alt {}
impl PartialEq for Fp12Alt {
    #[inline]
    fn eq(&self, other: &Fp12Alt) -> bool {
        bool::from(self.ct_eq(other))
    }
}

impl_binops_additive!(Fp12Alt);
impl_binops_multiplicative!(Fp12Alt);
