//! Affine curve points.

use num_bigint::{BigInt, BigUint, Sign};
use num_integer::Integer;

/// Point on a Weierstrass curve in affine coordinates.
///
/// A plain coordinate pair: whether it actually lies on a given curve is
/// decided by [`Curve::is_on_curve`](crate::Curve::is_on_curve). There is no
/// affine representation of the point at infinity; see [`Point`](crate::Point)
/// for that.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct AffinePoint {
    /// x-coordinate
    pub(crate) x: BigUint,

    /// y-coordinate
    pub(crate) y: BigUint,
}

impl AffinePoint {
    /// Create a point from its affine coordinates.
    pub fn new(x: impl Into<BigUint>, y: impl Into<BigUint>) -> Self {
        Self {
            x: x.into(),
            y: y.into(),
        }
    }

    /// Create a point from unsigned big-endian encodings of its coordinates.
    pub fn from_be_bytes(x: &[u8], y: &[u8]) -> Self {
        Self::new(BigUint::from_bytes_be(x), BigUint::from_bytes_be(y))
    }

    /// x-coordinate
    pub fn x(&self) -> &BigUint {
        &self.x
    }

    /// y-coordinate
    pub fn y(&self) -> &BigUint {
        &self.y
    }

    /// Is the y-coordinate odd?
    pub fn y_is_odd(&self) -> bool {
        self.y.is_odd()
    }

    /// Decompose the point into its `(x, y)` coordinates.
    pub fn into_coordinates(self) -> (BigUint, BigUint) {
        (self.x, self.y)
    }

    /// Coordinates as signed field elements.
    pub(crate) fn to_field_elements(&self) -> (BigInt, BigInt) {
        (
            BigInt::from(self.x.clone()),
            BigInt::from(self.y.clone()),
        )
    }

    /// Build a point from canonical field elements.
    pub(crate) fn from_field_elements(x: BigInt, y: BigInt) -> Self {
        Self {
            x: magnitude(x),
            y: magnitude(y),
        }
    }
}

impl From<(BigUint, BigUint)> for AffinePoint {
    fn from((x, y): (BigUint, BigUint)) -> Self {
        Self { x, y }
    }
}

/// Magnitude of a canonical (hence non-negative) residue.
fn magnitude(n: BigInt) -> BigUint {
    debug_assert_ne!(n.sign(), Sign::Minus);
    n.into_parts().1
}
