//! Curve points including the point at infinity.

use crate::AffinePoint;

/// Point on a Weierstrass curve: either the additive identity (the point at
/// infinity) or a finite point in affine coordinates.
///
/// The group operations on [`Point`] provided by [`Curve`](crate::Curve) are
/// total, unlike their [`AffinePoint`] counterparts.
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub enum Point {
    /// Additive identity of the group a.k.a. the point at infinity.
    #[default]
    Identity,

    /// Finite point.
    Affine(AffinePoint),
}

impl Point {
    /// Is this point the point at infinity?
    pub fn is_identity(&self) -> bool {
        matches!(self, Point::Identity)
    }

    /// Borrow the affine coordinates of a finite point.
    pub fn as_affine(&self) -> Option<&AffinePoint> {
        match self {
            Point::Identity => None,
            Point::Affine(point) => Some(point),
        }
    }

    /// Convert into affine coordinates, or `None` for the identity.
    pub fn into_affine(self) -> Option<AffinePoint> {
        match self {
            Point::Identity => None,
            Point::Affine(point) => Some(point),
        }
    }
}

impl From<AffinePoint> for Point {
    fn from(point: AffinePoint) -> Point {
        Point::Affine(point)
    }
}

impl From<Option<AffinePoint>> for Point {
    fn from(point: Option<AffinePoint>) -> Point {
        point.map_or(Point::Identity, Point::Affine)
    }
}
