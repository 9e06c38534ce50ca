//! Quadratic extension `Fp12 = Fp6[w]/(w² − v)`, the target field of the
//! BLS12-381 pairing.

use core::fmt;

use rand_core::RngCore;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq, CtOption};

use super::fp::Fp;
use super::fp2::Fp2;
use super::fp6::Fp6;

/// (u+1)^((p−1)/6), the multiplier of the w-coefficient under the p-power
/// Frobenius:
///
/// ```text
/// c0 = 0x1904d3bf02bb0667c231beb4202c0d1f0fd603fd3cbd5f4f7b2443d784bab9c4f67ea53d63e7813d8d0775ed92235fb8
/// c1 = 0x00fc3e2b36c4e03288e9e902231f9fb854a14787b6c7b36fec0c8ec971f63c5f282d5ac14d6c7ec22cf78a126ddc4af3
/// ```
pub(crate) const FROB12_W1: Fp2 = Fp2 {
    c0: Fp::from_raw_unchecked([
        0x0708_9552_b319_d465,
        0xc669_5f92_b50a_8313,
        0x97e8_3ccc_d117_228f,
        0xa35b_aeca_b2dc_29ee,
        0x1ce3_93ea_5daa_ce4d,
        0x08f2_220f_b0fb_66eb,
    ]),
    c1: Fp::from_raw_unchecked([
        0xb2f6_6aad_4ce5_d646,
        0x5842_a06b_fc49_7cec,
        0xcf48_95d4_2599_d394,
        0xc11b_9cba_40a8_e8d0,
        0x2e38_13cb_e5a0_de89,
        0x110e_efda_8884_7faf,
    ]),
};

/// Element `c0 + c1·w` of Fp12, with `w² = v`.
#[derive(Copy, Clone, Default)]
pub struct Fp12 {
    /// Coefficient of w⁰
    pub c0: Fp6,
    /// Coefficient of w¹
    pub c1: Fp6,
}

impl Fp12 {
    /// Length in bytes of the canonical encoding.
    pub const SIZE: usize = 2 * Fp6::SIZE;

    /// Additive identity.
    #[inline]
    pub const fn zero() -> Fp12 {
        Fp12 {
            c0: Fp6::zero(),
            c1: Fp6::zero(),
        }
    }

    /// Multiplicative identity.
    #[inline]
    pub const fn one() -> Fp12 {
        Fp12 {
            c0: Fp6::one(),
            c1: Fp6::zero(),
        }
    }

    /// Mask-valued test for the additive identity.
    pub fn is_zero(&self) -> Choice {
        self.c0.is_zero() & self.c1.is_zero()
    }

    /// Componentwise addition.
    #[inline]
    pub const fn add(&self, rhs: &Fp12) -> Fp12 {
        Fp12 {
            c0: self.c0.add(&rhs.c0),
            c1: self.c1.add(&rhs.c1),
        }
    }

    /// Componentwise subtraction.
    #[inline]
    pub const fn sub(&self, rhs: &Fp12) -> Fp12 {
        Fp12 {
            c0: self.c0.sub(&rhs.c0),
            c1: self.c1.sub(&rhs.c1),
        }
    }

    /// Componentwise negation.
    #[inline]
    pub const fn neg(&self) -> Fp12 {
        Fp12 {
            c0: self.c0.neg(),
            c1: self.c1.neg(),
        }
    }

    /// Conjugation over Fp6, negating the w-coefficient. For unitary
    /// elements (pairing outputs) this is inversion.
    #[inline]
    pub const fn cjg(&self) -> Fp12 {
        Fp12 {
            c0: self.c0,
            c1: self.c1.neg(),
        }
    }

    /// One Karatsuba step over Fp6 with the w² = v twist.
    #[inline]
    pub const fn mul(&self, rhs: &Fp12) -> Fp12 {
        let aa = self.c0.mul(&rhs.c0);
        let bb = self.c1.mul(&rhs.c1);
        let cross = self.c0.add(&self.c1).mul(&rhs.c0.add(&rhs.c1));

        Fp12 {
            c0: aa.add(&bb.mul_beta()),
            c1: cross.sub(&aa).sub(&bb),
        }
    }

    /// Complex squaring: `c0² + c1²·v + 2·c0·c1·w`.
    #[inline]
    pub const fn square(&self) -> Fp12 {
        let aa = self.c0.square();
        let bb = self.c1.square();
        let prod = self.c0.mul(&self.c1);

        Fp12 {
            c0: aa.add(&bb.mul_beta()),
            c1: prod.add(&prod),
        }
    }

    /// Multiplicative inverse, `cjg(a) / (c0² − c1²·v)`. Returns `None`
    /// for zero.
    pub fn invert(&self) -> CtOption<Fp12> {
        (self.c0.square() - self.c1.square().mul_beta())
            .invert()
            .map(|den| Fp12 {
                c0: self.c0 * den,
                c1: (self.c1 * den).neg(),
            })
    }

    /// The p-power Frobenius: Frobenius on each Fp6 coefficient, then the
    /// w-coefficient is scaled by the fixed twelfth-root multiplier.
    #[inline]
    pub fn frobenius_map(&self) -> Fp12 {
        Fp12 {
            c0: self.c0.frobenius_map(),
            c1: self.c1.frobenius_map().mul(&Fp6::from(FROB12_W1)),
        }
    }

    /// The linear map `(c0, c1) ↦ (c0 − c1, c0 + c1)` induced by the
    /// basis-change convention of the alternate tower. This is NOT
    /// multiplication by v; see [`Fp6::mul_beta`] for that operation on
    /// the coefficients.
    #[inline]
    pub const fn mul_beta(&self) -> Fp12 {
        Fp12 {
            c0: self.c0.sub(&self.c1),
            c1: self.c0.add(&self.c1),
        }
    }

    /// Exponentiation by an arbitrary big-endian exponent, left-to-right
    /// square and multiply. The empty or all-zero exponent yields one.
    ///
    /// Runs in time dependent on `n`. MUST NOT be used with secret
    /// exponents.
    pub fn exp_vartime(&self, n: &[u8]) -> Fp12 {
        let mut res = Fp12::one();
        for byte in n.iter() {
            for i in (0..8).rev() {
                res = res.square();
                if (byte >> i) & 1 == 1 {
                    res = res.mul(self);
                }
            }
        }
        res
    }

    /// Decodes the canonical 576-byte encoding `c0 ‖ c1` (storage order:
    /// the w⁰ half first, matching the serialization of pairing outputs).
    pub fn from_bytes(bytes: &[u8; 576]) -> CtOption<Fp12> {
        let mut b0 = [0u8; 288];
        let mut b1 = [0u8; 288];
        b0.copy_from_slice(&bytes[..288]);
        b1.copy_from_slice(&bytes[288..]);

        Fp6::from_bytes(&b0).and_then(|c0| Fp6::from_bytes(&b1).map(|c1| Fp12 { c0, c1 }))
    }

    /// Canonical 576-byte encoding `c0 ‖ c1`.
    pub fn to_bytes(self) -> [u8; 576] {
        let mut res = [0u8; 576];
        res[..288].copy_from_slice(&self.c0.to_bytes());
        res[288..].copy_from_slice(&self.c1.to_bytes());
        res
    }

    /// Uniform random element.
    pub(crate) fn random(mut rng: impl RngCore) -> Fp12 {
        Fp12 {
            c0: Fp6::random(&mut rng),
            c1: Fp6::random(&mut rng),
        }
    }
}

impl From<Fp6> for Fp12 {
    fn from(f: Fp6) -> Fp12 {
        Fp12 {
            c0: f,
            c1: Fp6::zero(),
        }
    }
}

impl fmt::Debug for Fp12 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({:?}) + ({:?})*w", self.c0, self.c1)
    }
}

#[cfg(feature = "zeroize")]
impl zeroize::DefaultIsZeroes for Fp12 {}

impl ConstantTimeEq for Fp12 {
    fn ct_eq(&self, other: &Fp12) -> Choice {
        self.c0.ct_eq(&other.c0) & self.c1.ct_eq(&other.c1)
    }
}

impl ConditionallySelectable for Fp12 {
    fn conditional_select(a: &Fp12, b: &Fp12, choice: Choice) -> Fp12 {
        Fp12 {
            c0: Fp6::conditional_select(&a.c0, &b.c0, choice),
            c1: Fp6::conditional_select(&a.c1, &b.c1, choice),
        }
    }
}

impl Eq for Fp12 {}
impl PartialEq for Fp12 {
    #[inline]
    fn eq(&self, other: &Fp12) -> bool {
        bool::from(self.ct_eq(other))
    }
}

impl_binops_additive!(Fp12);
impl_binops_multiplicative!(Fp12);
