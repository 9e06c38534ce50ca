//! Extension-field tower for BLS12-381.
//!
//! The tower is built as
//!
//! ```text
//! Fp2  = Fp[u]  / (u² + 1)
//! Fp4  = Fp2[s] / (s² − (u+1))
//! Fp6  = Fp2[v] / (v³ − (u+1))
//! Fp12 = Fp6[w] / (w² − v)
//! ```
//!
//! together with the isomorphic reorganization `Fp12Alt = Fp4[w]/(w³ − t)`
//! used to fold sparse line multiplications during pairing computation.
//!
//! All types are plain values: trivially copyable, zero value = additive
//! identity, equality structural and constant-time.

// Implements Add/Sub (all reference/value combinations) plus the assignment
// operators in terms of the type's inherent `add`/`sub`.
macro_rules! impl_binops_additive {
    ($t:ty) => {
        impl<'a, 'b> core::ops::Add<&'b $t> for &'a $t {
            type Output = $t;
            #[inline]
            fn add(self, rhs: &'b $t) -> $t {
                <$t>::add(self, rhs)
            }
        }

        impl<'a, 'b> core::ops::Sub<&'b $t> for &'a $t {
            type Output = $t;
            #[inline]
            fn sub(self, rhs: &'b $t) -> $t {
                <$t>::sub(self, rhs)
            }
        }

        impl<'b> core::ops::Add<&'b $t> for $t {
            type Output = $t;
            #[inline]
            fn add(self, rhs: &'b $t) -> $t {
                &self + rhs
            }
        }

        impl<'a> core::ops::Add<$t> for &'a $t {
            type Output = $t;
            #[inline]
            fn add(self, rhs: $t) -> $t {
                self + &rhs
            }
        }

        impl core::ops::Add<$t> for $t {
            type Output = $t;
            #[inline]
            fn add(self, rhs: $t) -> $t {
                &self + &rhs
            }
        }

        impl<'b> core::ops::Sub<&'b $t> for $t {
            type Output = $t;
            #[inline]
            fn sub(self, rhs: &'b $t) -> $t {
                &self - rhs
            }
        }

        impl<'a> core::ops::Sub<$t> for &'a $t {
            type Output = $t;
            #[inline]
            fn sub(self, rhs: $t) -> $t {
                self - &rhs
            }
        }

        impl core::ops::Sub<$t> for $t {
            type Output = $t;
            #[inline]
            fn sub(self, rhs: $t) -> $t {
                &self - &rhs
            }
        }

        impl core::ops::AddAssign<$t> for $t {
            #[inline]
            fn add_assign(&mut self, rhs: $t) {
                *self = &*self + &rhs;
            }
        }

        impl core::ops::SubAssign<$t> for $t {
            #[inline]
            fn sub_assign(&mut self, rhs: $t) {
                *self = &*self - &rhs;
            }
        }

        impl<'b> core::ops::AddAssign<&'b $t> for $t {
            #[inline]
            fn add_assign(&mut self, rhs: &'b $t) {
                *self = &*self + rhs;
            }
        }

        impl<'b> core::ops::SubAssign<&'b $t> for $t {
            #[inline]
            fn sub_assign(&mut self, rhs: &'b $t) {
                *self = &*self - rhs;
            }
        }

        impl<'a> core::ops::Neg for &'a $t {
            type Output = $t;
            #[inline]
            fn neg(self) -> $t {
                <$t>::neg(self)
            }
        }

        impl core::ops::Neg for $t {
            type Output = $t;
            #[inline]
            fn neg(self) -> $t {
                -&self
            }
        }
    };
}

// Implements Mul (all reference/value combinations) plus MulAssign in terms
// of the type's inherent `mul`.
macro_rules! impl_binops_multiplicative {
    ($t:ty) => {
        impl<'a, 'b> core::ops::Mul<&'b $t> for &'a $t {
            type Output = $t;
            #[inline]
            fn mul(self, rhs: &'b $t) -> $t {
                <$t>::mul(self, rhs)
            }
        }

        impl<'b> core::ops::Mul<&'b $t> for $t {
            type Output = $t;
            #[inline]
            fn mul(self, rhs: &'b $t) -> $t {
                &self * rhs
            }
        }

        impl<'a> core::ops::Mul<$t> for &'a $t {
            type Output = $t;
            #[inline]
            fn mul(self, rhs: $t) -> $t {
                self * &rhs
            }
        }

        impl core::ops::Mul<$t> for $t {
            type Output = $t;
            #[inline]
            fn mul(self, rhs: $t) -> $t {
                &self * &rhs
            }
        }

        impl core::ops::MulAssign<$t> for $t {
            #[inline]
            fn mul_assign(&mut self, rhs: $t) {
                *self = &*self * &rhs;
            }
        }

        impl<'b> core::ops::MulAssign<&'b $t> for $t {
            #[inline]
            fn mul_assign(&mut self, rhs: &'b $t) {
                *self = &*self * rhs;
            }
        }
    };
}

pub mod fp;
pub mod fp12;
pub mod fp12alt;
pub mod fp2;
pub mod fp4;
pub mod fp6;
