//! Error type

use core::fmt::{self, Display};

/// Result type with the `weierstrass` crate's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;

/// Curve arithmetic errors.
///
/// Every variant describes a violated precondition rather than a transient
/// condition: retrying the same operation with the same inputs fails again.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    /// Scalar outside the domain of the operation: zero passed to a modular
    /// inverse, a modulus below 2, or a multiplier which reduces to zero.
    Domain,

    /// No modular inverse exists since the input shares a factor with the
    /// modulus.
    NotInvertible,

    /// Input or computed point does not satisfy the curve equation.
    InvalidPoint,

    /// Adding a point to its own negation, whose sum is the point at infinity
    /// and therefore has no affine coordinates.
    UndefinedResult,

    /// The curve's field does not support the requested operation, i.e.
    /// point decompression when `p ≢ 3 (mod 4)`.
    UnsupportedCurve,

    /// Malformed SEC1 point encoding.
    Encoding,
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Error::Domain => "scalar outside of operation domain",
            Error::NotInvertible => "value not invertible modulo field prime",
            Error::InvalidPoint => "point not on curve",
            Error::UndefinedResult => "result is the point at infinity",
            Error::UnsupportedCurve => "operation unsupported for curve field",
            Error::Encoding => "malformed SEC1 point encoding",
        })
    }
}

impl core::error::Error for Error {}

impl From<sec1::Error> for Error {
    fn from(_: sec1::Error) -> Error {
        Error::Encoding
    }
}
