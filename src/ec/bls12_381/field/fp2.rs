//! Quadratic extension `Fp2 = Fp[u]/(u² + 1)`.

use core::fmt;

use rand_core::RngCore;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq, CtOption};

use super::fp::Fp;

/// Element `c0 + c1·u` of Fp2, with `u² = −1`.
#[derive(Copy, Clone, Default)]
pub struct Fp2 {
    /// Coefficient of u⁰
    pub c0: Fp,
    /// Coefficient of u¹
    pub c1: Fp,
}

impl Fp2 {
    /// Length in bytes of the canonical encoding.
    pub const SIZE: usize = 2 * Fp::SIZE;

    /// Additive identity.
    #[inline]
    pub const fn zero() -> Fp2 {
        Fp2 {
            c0: Fp::zero(),
            c1: Fp::zero(),
        }
    }

    /// Multiplicative identity.
    #[inline]
    pub const fn one() -> Fp2 {
        Fp2 {
            c0: Fp::one(),
            c1: Fp::zero(),
        }
    }

    /// Mask-valued test for the additive identity.
    pub fn is_zero(&self) -> Choice {
        self.c0.is_zero() & self.c1.is_zero()
    }

    /// Complex conjugation, `c0 − c1·u`.
    #[inline]
    pub const fn conjugate(&self) -> Fp2 {
        Fp2 {
            c0: self.c0,
            c1: self.c1.neg(),
        }
    }

    /// The p-power Frobenius. Since p ≡ 3 (mod 4) this is conjugation.
    #[inline]
    pub const fn frobenius_map(&self) -> Fp2 {
        self.conjugate()
    }

    /// Multiplication by the sextic non-residue `u + 1`.
    #[inline]
    pub const fn mul_by_nonresidue(&self) -> Fp2 {
        // (c0 + c1·u)(1 + u) = (c0 − c1) + (c0 + c1)·u
        Fp2 {
            c0: self.c0.sub(&self.c1),
            c1: self.c0.add(&self.c1),
        }
    }

    /// Componentwise addition.
    #[inline]
    pub const fn add(&self, rhs: &Fp2) -> Fp2 {
        Fp2 {
            c0: self.c0.add(&rhs.c0),
            c1: self.c1.add(&rhs.c1),
        }
    }

    /// Componentwise subtraction.
    #[inline]
    pub const fn sub(&self, rhs: &Fp2) -> Fp2 {
        Fp2 {
            c0: self.c0.sub(&rhs.c0),
            c1: self.c1.sub(&rhs.c1),
        }
    }

    /// Componentwise negation.
    #[inline]
    pub const fn neg(&self) -> Fp2 {
        Fp2 {
            c0: self.c0.neg(),
            c1: self.c1.neg(),
        }
    }

    /// Doubling.
    #[inline]
    pub const fn double(&self) -> Fp2 {
        self.add(self)
    }

    /// Karatsuba multiplication: three base-field products
    /// `c0·d0`, `c1·d1`, `(c0+c1)(d0+d1)`.
    #[inline]
    pub const fn mul(&self, rhs: &Fp2) -> Fp2 {
        let aa = self.c0.mul(&rhs.c0);
        let bb = self.c1.mul(&rhs.c1);
        let cross = self.c0.add(&self.c1).mul(&rhs.c0.add(&rhs.c1));

        Fp2 {
            c0: aa.sub(&bb),
            c1: cross.sub(&aa).sub(&bb),
        }
    }

    /// Complex squaring: `(c0+c1)(c0−c1) + 2·c0·c1·u`.
    #[inline]
    pub const fn square(&self) -> Fp2 {
        let sum = self.c0.add(&self.c1);
        let diff = self.c0.sub(&self.c1);
        let prod = self.c0.mul(&self.c1);

        Fp2 {
            c0: sum.mul(&diff),
            c1: prod.double(),
        }
    }

    /// Multiplicative inverse, `conj(a) / (c0² + c1²)`. Returns `None` for
    /// zero.
    pub fn invert(&self) -> CtOption<Fp2> {
        (self.c0.square() + self.c1.square()).invert().map(|t| Fp2 {
            c0: self.c0 * t,
            c1: (self.c1 * t).neg(),
        })
    }

    /// Decodes the canonical 96-byte encoding `c1 ‖ c0` (higher-degree
    /// coefficient first). Rejects componentwise non-canonical values.
    pub fn from_bytes(bytes: &[u8; 96]) -> CtOption<Fp2> {
        let mut b1 = [0u8; 48];
        let mut b0 = [0u8; 48];
        b1.copy_from_slice(&bytes[..48]);
        b0.copy_from_slice(&bytes[48..]);

        Fp::from_bytes(&b1).and_then(|c1| Fp::from_bytes(&b0).map(|c0| Fp2 { c0, c1 }))
    }

    /// Canonical 96-byte encoding `c1 ‖ c0`.
    pub fn to_bytes(self) -> [u8; 96] {
        let mut res = [0u8; 96];
        res[..48].copy_from_slice(&self.c1.to_bytes());
        res[48..].copy_from_slice(&self.c0.to_bytes());
        res
    }

    /// Uniform random element.
    pub(crate) fn random(mut rng: impl RngCore) -> Fp2 {
        Fp2 {
            c0: Fp::random(&mut rng),
            c1: Fp::random(&mut rng),
        }
    }
}

impl From<Fp> for Fp2 {
    fn from(f: Fp) -> Fp2 {
        Fp2 {
            c0: f,
            c1: Fp::zero(),
        }
    }
}

impl fmt::Debug for Fp2 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?} + {:?}*u", self.c0, self.c1)
    }
}

#[cfg(feature = "zeroize")]
impl zeroize::DefaultIsZeroes for Fp2 {}

impl ConstantTimeEq for Fp2 {
    fn ct_eq(&self, other: &Fp2) -> Choice {
        self.c0.ct_eq(&other.c0) & self.c1.ct_eq(&other.c1)
    }
}

impl ConditionallySelectable for Fp2 {
    fn conditional_select(a: &Fp2, b: &Fp2, choice: Choice) -> Fp2 {
        Fp2 {
            c0: Fp::conditional_select(&a.c0, &b.c0, choice),
            c1: Fp::conditional_select(&a.c1, &b.c1, choice),
        }
    }
}

impl Eq for Fp2 {}
impl PartialEq for Fp2 {
    #[inline]
    fn eq(&self, other: &Fp2) -> bool {
        bool::from(self.ct_eq(other))
    }
}

impl_binops_additive!(Fp2);
impl_binops_multiplicative!(Fp2);
