//! Group law of a short Weierstrass curve.

use crate::{AffinePoint, CurveParams, Error, Point, Result, modular};
use num_bigint::{BigInt, BigUint};
use num_integer::Integer;
use num_traits::Zero;

/// Short Weierstrass curve `y² = x³ + a·x + b` over the prime field `𝔽p`.
///
/// Provides two flavours of the group law:
///
/// - affine operations ([`Curve::add`], [`Curve::multiply`], ...) which have
///   no way to express the point at infinity: `P + (-P)` is reported as
///   [`Error::UndefinedResult`], while doubling a point with `y = 0` fails
///   with [`Error::Domain`] from inverting `2·y = 0`;
/// - total operations over [`Point`] ([`Curve::add_points`],
///   [`Curve::mul_point`], ...) which return [`Point::Identity`] instead.
///
/// All operations validate their inputs with [`Curve::is_on_curve`] and fail
/// with [`Error::InvalidPoint`] otherwise.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Curve {
    params: CurveParams,
}

impl Curve {
    /// Create a curve from its parameters.
    pub fn new(params: CurveParams) -> Self {
        Self { params }
    }

    /// Create a curve from unsigned big-endian encodings of the field prime
    /// and the equation coefficients `a` and `b`.
    pub fn from_be_bytes(prime: &[u8], a: &[u8], b: &[u8]) -> Result<Self> {
        CurveParams::from_be_bytes(prime, a, b).map(Self::new)
    }

    /// Curve parameters.
    pub fn params(&self) -> &CurveParams {
        &self.params
    }

    pub(crate) fn prime(&self) -> &BigInt {
        self.params.prime()
    }

    /// Does `point` satisfy the curve equation?
    ///
    /// Coordinates must be canonical field elements, i.e. less than `p`.
    pub fn is_on_curve(&self, point: &AffinePoint) -> bool {
        let p = self.prime();
        let (x, y) = point.to_field_elements();

        if x >= *p || y >= *p {
            return false;
        }

        let lhs = modular::mul(&y, &y, p);
        modular::sub(&lhs, &self.params.rhs(&x), p).is_zero()
    }

    /// Is `point` either the identity or a finite point on the curve?
    pub fn contains(&self, point: &Point) -> bool {
        match point {
            Point::Identity => true,
            Point::Affine(point) => self.is_on_curve(point),
        }
    }

    /// Compute `-point`.
    pub fn negate(&self, point: &AffinePoint) -> Result<AffinePoint> {
        self.check(point)?;

        let (x, y) = point.to_field_elements();
        Ok(AffinePoint::from_field_elements(
            x,
            modular::neg(&y, self.prime()),
        ))
    }

    /// Compute `lhs + rhs` using the chord-and-tangent rule.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidPoint`] if either input is not on the curve.
    /// - [`Error::UndefinedResult`] if `lhs.x = rhs.x` and `lhs.y ≠ rhs.y`.
    /// - [`Error::Domain`] if `lhs = rhs` with `y = 0`.
    pub fn add(&self, lhs: &AffinePoint, rhs: &AffinePoint) -> Result<AffinePoint> {
        self.check(lhs)?;
        self.check(rhs)?;
        self.add_affine(lhs, rhs)?.ok_or(Error::UndefinedResult)
    }

    /// Compute `point + point`.
    ///
    /// Fails with [`Error::Domain`] for points of order two, i.e. points with
    /// `y = 0`, whose tangent slope has no inverse.
    pub fn double(&self, point: &AffinePoint) -> Result<AffinePoint> {
        self.add(point, point)
    }

    /// Compute `n·point` by double-and-add.
    ///
    /// The multiplier is checked against the group order when the curve
    /// parameters carry one, and against the field prime otherwise. The
    /// latter is only a heuristic: it does not catch multiples of the group
    /// order, which fail with [`Error::UndefinedResult`] during the ladder.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidPoint`] if `point` is not on the curve.
    /// - [`Error::Domain`] if `n` reduces to zero, or if the ladder doubles a
    ///   point with `y = 0`.
    /// - [`Error::UndefinedResult`] if an intermediate sum is the identity.
    ///
    /// The addend is not doubled after the most significant bit, so `1·P` is
    /// `P` even for a point of order two.
    #[tracing::instrument(level = "trace", skip_all, fields(bits = n.bits()))]
    pub fn multiply(&self, point: &AffinePoint, n: &BigUint) -> Result<AffinePoint> {
        self.check(point)?;

        let domain = self.params.order().unwrap_or(self.prime());
        if modular::reduce(&BigInt::from(n.clone()), domain).is_zero() {
            tracing::debug!("multiplier reduces to zero");
            return Err(Error::Domain);
        }

        let mut n = n.clone();
        let mut acc: Option<AffinePoint> = None;
        let mut addend = point.clone();

        while !n.is_zero() {
            if n.is_odd() {
                acc = Some(match acc {
                    None => addend.clone(),
                    Some(acc) => self
                        .add_affine(&acc, &addend)?
                        .ok_or(Error::UndefinedResult)?,
                });
            }

            n >>= 1u8;

            if !n.is_zero() {
                addend = self
                    .add_affine(&addend, &addend)?
                    .ok_or(Error::UndefinedResult)?;
            }
        }

        acc.ok_or(Error::Domain)
    }

    /// Compute `-point`, mapping the identity to itself.
    pub fn negate_point(&self, point: &Point) -> Result<Point> {
        match point {
            Point::Identity => Ok(Point::Identity),
            Point::Affine(point) => self.negate(point).map(Point::Affine),
        }
    }

    /// Compute `lhs + rhs`.
    ///
    /// Unlike [`Curve::add`] this is total: `P + (-P)` is [`Point::Identity`].
    pub fn add_points(&self, lhs: &Point, rhs: &Point) -> Result<Point> {
        self.check_point(lhs)?;
        self.check_point(rhs)?;
        self.add_inner(lhs, rhs)
    }

    /// Compute `point + point`.
    pub fn double_point(&self, point: &Point) -> Result<Point> {
        self.add_points(point, point)
    }

    /// Compute `n·point` by double-and-add, starting from the identity.
    ///
    /// `n = 0` yields [`Point::Identity`]. When the curve parameters carry the
    /// group order, `n` is reduced by it first.
    #[tracing::instrument(level = "trace", skip_all, fields(bits = n.bits()))]
    pub fn mul_point(&self, point: &Point, n: &BigUint) -> Result<Point> {
        self.check_point(point)?;

        let mut n = match self.params.order() {
            Some(order) => n % order.magnitude(),
            None => n.clone(),
        };
        let mut acc = Point::Identity;
        let mut addend = point.clone();

        while !n.is_zero() {
            if n.is_odd() {
                acc = self.add_inner(&acc, &addend)?;
            }

            n >>= 1u8;

            if !n.is_zero() {
                addend = self.add_inner(&addend, &addend)?;
            }
        }

        Ok(acc)
    }

    /// Fail with [`Error::InvalidPoint`] unless `point` is on the curve.
    fn check(&self, point: &AffinePoint) -> Result<()> {
        if self.is_on_curve(point) {
            Ok(())
        } else {
            tracing::debug!(x = %point.x, y = %point.y, "point not on curve");
            Err(Error::InvalidPoint)
        }
    }

    fn check_point(&self, point: &Point) -> Result<()> {
        match point {
            Point::Identity => Ok(()),
            Point::Affine(point) => self.check(point),
        }
    }

    /// Total addition of validated points.
    fn add_inner(&self, lhs: &Point, rhs: &Point) -> Result<Point> {
        match (lhs, rhs) {
            (Point::Identity, point) | (point, Point::Identity) => Ok(point.clone()),
            // Vertical tangent at a point of order two
            (Point::Affine(lhs), Point::Affine(rhs)) if lhs == rhs && lhs.y.is_zero() => {
                Ok(Point::Identity)
            }
            (Point::Affine(lhs), Point::Affine(rhs)) => self.add_affine(lhs, rhs).map(Point::from),
        }
    }

    /// Chord-and-tangent addition of validated points.
    ///
    /// Returns `None` for `P + (-P)`. Doubling a point with `y = 0` fails with
    /// [`Error::Domain`] from the zero inverse.
    fn add_affine(&self, lhs: &AffinePoint, rhs: &AffinePoint) -> Result<Option<AffinePoint>> {
        let p = self.prime();
        let (x1, y1) = lhs.to_field_elements();
        let (x2, y2) = rhs.to_field_elements();

        let slope = if x1 == x2 {
            // Vertical chord
            if y1 != y2 {
                return Ok(None);
            }

            // (3·x² + a) / 2·y
            let numerator = modular::add(
                &modular::mul(&BigInt::from(3u8), &modular::mul(&x1, &x1, p), p),
                self.params.a(),
                p,
            );
            let denominator = modular::mul(&BigInt::from(2u8), &y1, p);
            modular::mul(&numerator, &modular::inverse(&denominator, p)?, p)
        } else {
            // (y1 - y2) / (x1 - x2)
            let numerator = modular::sub(&y1, &y2, p);
            let denominator = modular::sub(&x1, &x2, p);
            modular::mul(&numerator, &modular::inverse(&denominator, p)?, p)
        };

        let x3 = modular::sub(
            &modular::sub(&modular::mul(&slope, &slope, p), &x1, p),
            &x2,
            p,
        );
        let y3 = modular::sub(
            &modular::mul(&slope, &modular::sub(&x1, &x3, p), p),
            &y1,
            p,
        );

        let sum = AffinePoint::from_field_elements(x3, y3);
        if !self.is_on_curve(&sum) {
            tracing::debug!("sum left the curve; field and curve parameters disagree");
            return Err(Error::InvalidPoint);
        }

        Ok(Some(sum))
    }
}

impl From<CurveParams> for Curve {
    fn from(params: CurveParams) -> Curve {
        Curve::new(params)
    }
}
