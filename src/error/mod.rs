//! Error handling for group and field operations

use core::fmt;

/// The error type for group, scalar, and expander operations.
///
/// Field-element decoding inside the tower reports failure through
/// `subtle::CtOption` to stay constant-time; this enum is the boundary
/// representation handed to callers of the group and expander APIs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// An encoded value was non-canonical: a field element not below the
    /// modulus, a scalar not below the group order, or a point not on the
    /// curve.
    OutOfRange {
        /// Operation that rejected the encoding
        context: &'static str,
    },

    /// A length outside the permitted range was supplied.
    InvalidLength {
        /// Operation that rejected the length
        context: &'static str,
        /// Length that was expected or the maximum permitted
        expected: usize,
        /// Length that was supplied
        actual: usize,
    },

    /// The supplied random byte source failed or kept producing values that
    /// had to be rejected.
    EntropyExhausted {
        /// Operation that exhausted the source
        context: &'static str,
    },
}

/// Result type for group, scalar, and expander operations.
pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::OutOfRange { context } => {
                write!(f, "non-canonical encoding in {}", context)
            }
            Error::InvalidLength {
                context,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "invalid length in {}: expected at most {}, got {}",
                    context, expected, actual
                )
            }
            Error::EntropyExhausted { context } => {
                write!(f, "random byte source exhausted in {}", context)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_carry_context() {
        let e = Error::OutOfRange { context: "Fp::from_bytes" };
        assert!(e.to_string().contains("Fp::from_bytes"));

        let e = Error::InvalidLength {
            context: "Expander::expand",
            expected: 65535,
            actual: 70000,
        };
        let s = e.to_string();
        assert!(s.contains("65535") && s.contains("70000"));

        let e = Error::EntropyExhausted { context: "random_scalar" };
        assert!(e.to_string().contains("random_scalar"));
    }
}
