//! SEC1 point encoding.
//!
//! Points are serialized according to the `Elliptic-Curve-Point-to-Octet-String`
//! algorithm described in SEC 1: Elliptic Curve Cryptography (Version 2.0)
//! section 2.3.3 (page 10):
//!
//! <https://www.secg.org/sec1-v2.pdf>
//!
//! Coordinates are big-endian and zero-padded to
//! [`CurveParams::field_size`](crate::CurveParams::field_size) bytes.

use crate::{AffinePoint, Curve, Error, Point, Result, modular};
use alloc::{vec, vec::Vec};
use num_bigint::{BigInt, BigUint};
use num_integer::Integer;
use sec1::point::Tag;

impl Curve {
    /// Serialize `point` in compressed (`0x02`/`0x03` tag followed by `x`)
    /// or uncompressed (`0x04` tag followed by `x` and `y`) form.
    ///
    /// The point is not validated against the curve.
    ///
    /// # Errors
    ///
    /// [`Error::Encoding`] if a coordinate is too wide for the field size.
    pub fn serialize(&self, point: &AffinePoint, compress: bool) -> Result<Vec<u8>> {
        let size = self.params().field_size();
        let tag = if !compress {
            Tag::Uncompressed
        } else if point.y_is_odd() {
            Tag::CompressedOddY
        } else {
            Tag::CompressedEvenY
        };

        let mut bytes = vec![0u8; tag.message_len(size)];
        bytes[0] = tag as u8;
        write_coordinate(&mut bytes[1..(size + 1)], &point.x)?;

        if !compress {
            write_coordinate(&mut bytes[(size + 1)..], &point.y)?;
        }

        Ok(bytes)
    }

    /// Serialize `point`, encoding the identity as the single byte `0x00`.
    pub fn serialize_point(&self, point: &Point, compress: bool) -> Result<Vec<u8>> {
        match point {
            Point::Identity => Ok(vec![Tag::Identity as u8]),
            Point::Affine(point) => self.serialize(point, compress),
        }
    }

    /// Parse a compressed or uncompressed SEC1-encoded point.
    ///
    /// Compressed points are decompressed with [`Curve::decompress`]. The
    /// result is *not* checked to be on the curve: use [`Curve::is_on_curve`]
    /// when the input is untrusted.
    ///
    /// # Errors
    ///
    /// - [`Error::Encoding`] for an unknown tag, a length which does not match
    ///   the tag, a coordinate `≥ p`, or the identity encoding.
    /// - [`Error::UnsupportedCurve`] for compressed input when `p ≢ 3 (mod 4)`.
    pub fn parse(&self, bytes: &[u8]) -> Result<AffinePoint> {
        self.parse_point(bytes)?.into_affine().ok_or(Error::Encoding)
    }

    /// Parse a SEC1-encoded point, accepting the identity encoding `0x00`.
    pub fn parse_point(&self, bytes: &[u8]) -> Result<Point> {
        let size = self.params().field_size();
        let tag = Tag::from_u8(*bytes.first().ok_or(Error::Encoding)?)?;

        if bytes.len() != tag.message_len(size) {
            tracing::debug!(len = bytes.len(), ?tag, "encoded point has wrong length");
            return Err(Error::Encoding);
        }

        match tag {
            Tag::Identity => Ok(Point::Identity),
            Tag::CompressedEvenY | Tag::CompressedOddY => {
                let x = self.read_coordinate(&bytes[1..])?;
                self.decompress(&x, tag == Tag::CompressedOddY)
                    .map(Point::Affine)
            }
            Tag::Uncompressed => {
                let x = self.read_coordinate(&bytes[1..(size + 1)])?;
                let y = self.read_coordinate(&bytes[(size + 1)..])?;
                Ok(Point::Affine(AffinePoint { x, y }))
            }
            _ => Err(Error::Encoding),
        }
    }

    /// Recover the point with the given `x`-coordinate and `y` parity.
    ///
    /// Computes `y = (x³ + a·x + b)^((p + 1) / 4)` and negates it if its
    /// parity does not match `y_is_odd`. If `x³ + a·x + b` is not a square
    /// the returned point is not on the curve; no check is performed.
    ///
    /// # Errors
    ///
    /// - [`Error::UnsupportedCurve`] unless `p ≡ 3 (mod 4)`.
    /// - [`Error::Encoding`] if `x ≥ p`, as for parsed coordinates.
    pub fn decompress(&self, x: &BigUint, y_is_odd: bool) -> Result<AffinePoint> {
        let p = self.prime();
        let x = BigInt::from(x.clone());

        if x >= *p {
            tracing::debug!("x-coordinate exceeds field modulus");
            return Err(Error::Encoding);
        }

        let beta = modular::sqrt(&self.params().rhs(&x), p)?;
        let y = if beta.is_odd() == y_is_odd {
            beta
        } else {
            modular::neg(&beta, p)
        };

        Ok(AffinePoint::from_field_elements(x, y))
    }

    /// Decode a big-endian coordinate, rejecting values `≥ p`.
    fn read_coordinate(&self, bytes: &[u8]) -> Result<BigUint> {
        let n = BigUint::from_bytes_be(bytes);

        if BigInt::from(n.clone()) >= *self.prime() {
            tracing::debug!("encoded coordinate exceeds field modulus");
            return Err(Error::Encoding);
        }

        Ok(n)
    }
}

/// Write `n` big-endian into `out`, left-padded with zeroes.
fn write_coordinate(out: &mut [u8], n: &BigUint) -> Result<()> {
    let bytes = n.to_bytes_be();
    let offset = out
        .len()
        .checked_sub(bytes.len())
        .ok_or(Error::Encoding)?;

    out[offset..].copy_from_slice(&bytes);
    Ok(())
}
