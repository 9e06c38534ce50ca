//! Cubic extension `Fp6 = Fp2[v]/(v³ − (u+1))`.

use core::fmt;

use rand_core::RngCore;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq, CtOption};

use super::fp::Fp;
use super::fp2::Fp2;

/// (u+1)^((p−1)/3), the multiplier of the v-coefficient under the p-power
/// Frobenius. Purely imaginary.
const FROB6_V1: Fp2 = Fp2 {
    c0: Fp::from_raw_unchecked([0, 0, 0, 0, 0, 0]),
    c1: Fp::from_raw_unchecked([
        0xcd03_c9e4_8671_f071,
        0x5dab_2246_1fcd_a5d2,
        0x5870_42af_d385_1b95,
        0x8eb6_0ebe_01ba_cb9e,
        0x03f9_7d6e_83d0_50d2,
        0x18f0_2065_5463_8741,
    ]),
};

/// (u+1)^((2p−2)/3), the multiplier of the v²-coefficient under the p-power
/// Frobenius. Purely real.
const FROB6_V2: Fp2 = Fp2 {
    c0: Fp::from_raw_unchecked([
        0x890d_c9e4_8675_45c3,
        0x2af3_2253_3285_a5d5,
        0x5088_0866_309b_7e2c,
        0xa20d_1b8c_7e88_1024,
        0x14e4_f04f_e2db_9068,
        0x14e5_6d3f_1564_853a,
    ]),
    c1: Fp::from_raw_unchecked([0, 0, 0, 0, 0, 0]),
};

/// Element `c0 + c1·v + c2·v²` of Fp6, with `v³ = u + 1`.
#[derive(Copy, Clone, Default)]
pub struct Fp6 {
    /// Coefficient of v⁰
    pub c0: Fp2,
    /// Coefficient of v¹
    pub c1: Fp2,
    /// Coefficient of v²
    pub c2: Fp2,
}

impl Fp6 {
    /// Length in bytes of the canonical encoding.
    pub const SIZE: usize = 3 * Fp2::SIZE;

    /// Additive identity.
    #[inline]
    pub const fn zero() -> Fp6 {
        Fp6 {
            c0: Fp2::zero(),
            c1: Fp2::zero(),
            c2: Fp2::zero(),
        }
    }

    /// Multiplicative identity.
    #[inline]
    pub const fn one() -> Fp6 {
        Fp6 {
            c0: Fp2::one(),
            c1: Fp2::zero(),
            c2: Fp2::zero(),
        }
    }

    /// Mask-valued test for the additive identity.
    pub fn is_zero(&self) -> Choice {
        self.c0.is_zero() & self.c1.is_zero() & self.c2.is_zero()
    }

    /// Componentwise addition.
    #[inline]
    pub const fn add(&self, rhs: &Fp6) -> Fp6 {
        Fp6 {
            c0: self.c0.add(&rhs.c0),
            c1: self.c1.add(&rhs.c1),
            c2: self.c2.add(&rhs.c2),
        }
    }

    /// Componentwise subtraction.
    #[inline]
    pub const fn sub(&self, rhs: &Fp6) -> Fp6 {
        Fp6 {
            c0: self.c0.sub(&rhs.c0),
            c1: self.c1.sub(&rhs.c1),
            c2: self.c2.sub(&rhs.c2),
        }
    }

    /// Componentwise negation.
    #[inline]
    pub const fn neg(&self) -> Fp6 {
        Fp6 {
            c0: self.c0.neg(),
            c1: self.c1.neg(),
            c2: self.c2.neg(),
        }
    }

    /// Multiplication by `v`, the cyclic shift
    /// `(c0, c1, c2) ↦ (c2·(u+1), c0, c1)`.
    ///
    /// Exposed so that Fp12 multiplication can fold the v-twist without a
    /// general Fp6 product.
    #[inline]
    pub const fn mul_beta(&self) -> Fp6 {
        Fp6 {
            c0: self.c2.mul_by_nonresidue(),
            c1: self.c0,
            c2: self.c1,
        }
    }

    /// Karatsuba multiplication for cubic extensions: three diagonal
    /// products and three cross sums, with the v³ = u+1 twist.
    #[inline]
    pub const fn mul(&self, rhs: &Fp6) -> Fp6 {
        let v0 = self.c0.mul(&rhs.c0);
        let v1 = self.c1.mul(&rhs.c1);
        let v2 = self.c2.mul(&rhs.c2);

        let p0 = self.c1.add(&self.c2).mul(&rhs.c1.add(&rhs.c2));
        let p1 = self.c0.add(&self.c1).mul(&rhs.c0.add(&rhs.c1));
        let p2 = self.c0.add(&self.c2).mul(&rhs.c0.add(&rhs.c2));

        Fp6 {
            c0: p0.sub(&v1).sub(&v2).mul_by_nonresidue().add(&v0),
            c1: p1.sub(&v0).sub(&v1).add(&v2.mul_by_nonresidue()),
            c2: p2.sub(&v0).sub(&v2).add(&v1),
        }
    }

    /// Squaring via the five-product SQR3 schedule.
    #[inline]
    pub const fn square(&self) -> Fp6 {
        let s0 = self.c0.square();
        let s1 = self.c0.mul(&self.c1).double();
        let s2 = self.c0.add(&self.c2).sub(&self.c1).square();
        let s3 = self.c1.mul(&self.c2).double();
        let s4 = self.c2.square();

        Fp6 {
            c0: s3.mul_by_nonresidue().add(&s0),
            c1: s4.mul_by_nonresidue().add(&s1),
            c2: s1.add(&s2).add(&s3).sub(&s0).sub(&s4),
        }
    }

    /// The p-power Frobenius: conjugate each coefficient, then scale the
    /// v and v² coefficients by the fixed cube-root multipliers.
    #[inline]
    pub const fn frobenius_map(&self) -> Fp6 {
        Fp6 {
            c0: self.c0.frobenius_map(),
            c1: self.c1.frobenius_map().mul(&FROB6_V1),
            c2: self.c2.frobenius_map().mul(&FROB6_V2),
        }
    }

    /// Multiplicative inverse via the adjugate of the multiplication
    /// matrix. Returns `None` for zero.
    pub fn invert(&self) -> CtOption<Fp6> {
        let t0 = self.c0.square() - (self.c1 * self.c2).mul_by_nonresidue();
        let t1 = self.c2.square().mul_by_nonresidue() - self.c0 * self.c1;
        let t2 = self.c1.square() - self.c0 * self.c2;

        let det = ((self.c1 * t2 + self.c2 * t1).mul_by_nonresidue()) + self.c0 * t0;

        det.invert().map(|d| Fp6 {
            c0: t0 * d,
            c1: t1 * d,
            c2: t2 * d,
        })
    }

    /// Decodes the canonical 288-byte encoding `c2 ‖ c1 ‖ c0`
    /// (higher-degree coefficient first).
    pub fn from_bytes(bytes: &[u8; 288]) -> CtOption<Fp6> {
        let mut b2 = [0u8; 96];
        let mut b1 = [0u8; 96];
        let mut b0 = [0u8; 96];
        b2.copy_from_slice(&bytes[..96]);
        b1.copy_from_slice(&bytes[96..192]);
        b0.copy_from_slice(&bytes[192..]);

        Fp2::from_bytes(&b2).and_then(|c2| {
            Fp2::from_bytes(&b1)
                .and_then(|c1| Fp2::from_bytes(&b0).map(|c0| Fp6 { c0, c1, c2 }))
        })
    }

    /// Canonical 288-byte encoding `c2 ‖ c1 ‖ c0`.
    pub fn to_bytes(self) -> [u8; 288] {
        let mut res = [0u8; 288];
        res[..96].copy_from_slice(&self.c2.to_bytes());
        res[96..192].copy_from_slice(&self.c1.to_bytes());
        res[192..].copy_from_slice(&self.c0.to_bytes());
        res
    }

    /// Uniform random element.
    pub(crate) fn random(mut rng: impl RngCore) -> Fp6 {
        Fp6 {
            c0: Fp2::random(&mut rng),
            c1: Fp2::random(&mut rng),
            c2: Fp2::random(&mut rng),
        }
    }
}

impl From<Fp2> for Fp6 {
    fn from(f: Fp2) -> Fp6 {
        Fp6 {
            c0: f,
            c1: Fp2::zero(),
            c2: Fp2::zero(),
        }
    }
}

impl fmt::Debug for Fp6 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({:?}) + ({:?})*v + ({:?})*v^2", self.c0, self.c1, self.c2)
    }
}

#[cfg(feature = "zeroize")]
impl zeroize::DefaultIsZeroes for Fp6 {}

impl ConstantTimeEq for Fp6 {
    fn ct_eq(&self, other: &Fp6) -> Choice {
        self.c0.ct_eq(&other.c0) & self.c1.ct_eq(&other.c1) & self.c2.ct_eq(&other.c2)
    }
}

impl ConditionallySelectable for Fp6 {
    fn conditional_select(a: &Fp6, b: &Fp6, choice: Choice) -> Fp6 {
        Fp6 {
            c0: Fp2::conditional_select(&a.c0, &b.c0, choice),
            c1: Fp2::conditional_select(&a.c1, &b.c1, choice),
            c2: Fp2::conditional_select(&a.c2, &b.c2, choice),
        }
    }
}

impl Eq for Fp6 {}
impl PartialEq for Fp6 {
    #[inline]
    fn eq(&self, other: &Fp6) -> bool {
        bool::from(self.ct_eq(other))
    }
}

impl_binops_additive!(Fp6);
impl_binops_multiplicative!(Fp6);
