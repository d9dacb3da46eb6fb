//! Curve parameters.

use crate::{Error, Result, modular};
use num_bigint::{BigInt, BigUint};
use num_traits::Zero;

#[cfg(feature = "serde")]
use alloc::vec::Vec;
#[cfg(feature = "serde")]
use serdect::serde::{Deserialize, Serialize, de, ser};

/// Minimum width in bytes of a serialized field element.
const MIN_FIELD_SIZE: usize = 32;

/// Parameters of the short Weierstrass curve `y² = x³ + a·x + b (mod p)`.
///
/// The coefficients are stored in canonical form, i.e. reduced modulo `p`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CurveParams {
    /// Field prime `p`.
    prime: BigInt,

    /// Coefficient `a` in the curve equation.
    a: BigInt,

    /// Coefficient `b` in the curve equation.
    b: BigInt,

    /// Order of the group generated by the points of interest, if known.
    order: Option<BigInt>,
}

impl CurveParams {
    /// Create curve parameters from the field prime and the equation
    /// coefficients.
    ///
    /// Primality of `prime` is not checked.
    ///
    /// # Errors
    ///
    /// [`Error::Domain`] if `prime < 2`.
    pub fn new(prime: BigUint, a: BigUint, b: BigUint) -> Result<Self> {
        let prime = BigInt::from(prime);
        if prime < BigInt::from(2u8) {
            tracing::debug!(%prime, "rejecting field modulus below 2");
            return Err(Error::Domain);
        }

        let a = modular::reduce(&BigInt::from(a), &prime);
        let b = modular::reduce(&BigInt::from(b), &prime);

        Ok(Self {
            prime,
            a,
            b,
            order: None,
        })
    }

    /// Parameters whose prime is at least 2 and whose coefficients are
    /// already reduced.
    #[cfg(any(feature = "dev", test))]
    pub(crate) fn from_canonical(prime: &[u8], a: u8, b: u8) -> Self {
        let prime = BigInt::from(BigUint::from_bytes_be(prime));
        let (a, b) = (BigInt::from(a), BigInt::from(b));
        debug_assert!(prime > a && prime > b && prime >= BigInt::from(2u8));

        Self {
            prime,
            a,
            b,
            order: None,
        }
    }

    /// Create curve parameters from unsigned big-endian encodings of the
    /// field prime and the equation coefficients.
    pub fn from_be_bytes(prime: &[u8], a: &[u8], b: &[u8]) -> Result<Self> {
        Self::new(
            BigUint::from_bytes_be(prime),
            BigUint::from_bytes_be(a),
            BigUint::from_bytes_be(b),
        )
    }

    /// Attach the order of the group the points of interest live in.
    ///
    /// When present, scalar multiplication checks its multiplier against the
    /// order instead of the field prime.
    ///
    /// # Errors
    ///
    /// [`Error::Domain`] if `order` is zero.
    pub fn with_order(mut self, order: BigUint) -> Result<Self> {
        if order.is_zero() {
            return Err(Error::Domain);
        }

        self.order = Some(BigInt::from(order));
        Ok(self)
    }

    /// Field prime `p`.
    pub fn prime(&self) -> &BigInt {
        &self.prime
    }

    /// Coefficient `a`.
    pub fn a(&self) -> &BigInt {
        &self.a
    }

    /// Coefficient `b`.
    pub fn b(&self) -> &BigInt {
        &self.b
    }

    /// Group order, if one was attached with [`CurveParams::with_order`].
    pub fn order(&self) -> Option<&BigInt> {
        self.order.as_ref()
    }

    /// Width in bytes of a serialized coordinate: 32, or the byte length of
    /// the prime when it is wider.
    pub fn field_size(&self) -> usize {
        let bits = self.prime.bits() as usize;
        bits.div_ceil(8).max(MIN_FIELD_SIZE)
    }

    /// Can points on this curve be decompressed, i.e. is `p ≡ 3 (mod 4)`?
    pub fn supports_sqrt(&self) -> bool {
        modular::has_sqrt(&self.prime)
    }

    /// Right-hand side of the curve equation: `x³ + a·x + b mod p`.
    pub(crate) fn rhs(&self, x: &BigInt) -> BigInt {
        let p = &self.prime;
        let x3 = modular::mul(&modular::mul(x, x, p), x, p);
        let ax = modular::mul(&self.a, x, p);
        modular::add(&modular::add(&x3, &ax, p), &self.b, p)
    }
}

/// Magnitude of a non-negative integer as big-endian bytes.
#[cfg(feature = "serde")]
fn to_be_bytes(n: &BigInt) -> Vec<u8> {
    n.to_bytes_be().1
}

#[cfg(feature = "serde")]
impl Serialize for CurveParams {
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: ser::Serializer,
    {
        (
            HexBytes(to_be_bytes(&self.prime)),
            HexBytes(to_be_bytes(&self.a)),
            HexBytes(to_be_bytes(&self.b)),
            self.order.as_ref().map(|n| HexBytes(to_be_bytes(n))),
        )
            .serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for CurveParams {
    fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        let (prime, a, b, order) =
            <(HexBytes, HexBytes, HexBytes, Option<HexBytes>)>::deserialize(deserializer)?;

        let params = Self::from_be_bytes(&prime.0, &a.0, &b.0).map_err(de::Error::custom)?;

        match order {
            Some(order) => params
                .with_order(BigUint::from_bytes_be(&order.0))
                .map_err(de::Error::custom),
            None => Ok(params),
        }
    }
}

/// Big-endian integer serialized as hex in human-readable formats and as raw
/// bytes otherwise.
#[cfg(feature = "serde")]
struct HexBytes(Vec<u8>);

#[cfg(feature = "serde")]
impl Serialize for HexBytes {
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: ser::Serializer,
    {
        serdect::slice::serialize_hex_lower_or_bin(&self.0, serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for HexBytes {
    fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        serdect::slice::deserialize_hex_or_bin_vec(deserializer).map(HexBytes)
    }
}

#[cfg(test)]
mod tests {
    use super::CurveParams;
    use crate::{Error, dev::SECP256K1_P};
    use num_bigint::{BigInt, BigUint};

    #[test]
    fn from_be_bytes() {
        let params = CurveParams::from_be_bytes(&[17], &[2], &[2]).unwrap();
        assert_eq!(params.prime(), &BigInt::from(17));
        assert_eq!(params.a(), &BigInt::from(2));
        assert_eq!(params.b(), &BigInt::from(2));
        assert_eq!(params.order(), None);
    }

    #[test]
    fn coefficients_are_reduced() {
        let params = CurveParams::from_be_bytes(&[17], &[19], &[0, 0, 17]).unwrap();
        assert_eq!(params.a(), &BigInt::from(2));
        assert_eq!(params.b(), &BigInt::from(0));
    }

    #[test]
    fn rejects_degenerate_prime() {
        assert_eq!(
            CurveParams::from_be_bytes(&[], &[2], &[2]),
            Err(Error::Domain)
        );
        assert_eq!(
            CurveParams::from_be_bytes(&[1], &[2], &[2]),
            Err(Error::Domain)
        );
    }

    #[test]
    fn dev_curves_match_parsed_parameters() {
        use crate::dev;

        assert_eq!(
            dev::secp256k1_params(),
            CurveParams::from_be_bytes(&SECP256K1_P, &[0], &[7]).unwrap()
        );
        assert_eq!(
            dev::curve17().params(),
            &CurveParams::from_be_bytes(&[17], &[2], &[2]).unwrap()
        );
        assert_eq!(
            dev::curve23().params(),
            &CurveParams::from_be_bytes(&[23], &[1], &[1]).unwrap()
        );
    }

    #[test]
    fn with_order() {
        let params = CurveParams::from_be_bytes(&[17], &[2], &[2]).unwrap();
        assert_eq!(
            params.clone().with_order(BigUint::from(0u8)),
            Err(Error::Domain)
        );

        let params = params.with_order(BigUint::from(19u8)).unwrap();
        assert_eq!(params.order(), Some(&BigInt::from(19)));
    }

    #[test]
    fn field_size() {
        let toy = CurveParams::from_be_bytes(&[17], &[2], &[2]).unwrap();
        assert_eq!(toy.field_size(), 32);

        let secp256k1 = CurveParams::from_be_bytes(&SECP256K1_P, &[0], &[7]).unwrap();
        assert_eq!(secp256k1.field_size(), 32);

        let mut p521 = [0xffu8; 66];
        p521[0] = 0x01;
        let p521 = CurveParams::from_be_bytes(&p521, &[0], &[7]).unwrap();
        assert_eq!(p521.field_size(), 66);
    }

    #[test]
    fn supports_sqrt() {
        let toy = CurveParams::from_be_bytes(&[17], &[2], &[2]).unwrap();
        assert!(!toy.supports_sqrt());

        let secp256k1 = CurveParams::from_be_bytes(&SECP256K1_P, &[0], &[7]).unwrap();
        assert!(secp256k1.supports_sqrt());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_round_trip() {
        let params = CurveParams::from_be_bytes(&SECP256K1_P, &[0], &[7]).unwrap();
        let json = serde_json::to_string(&params).unwrap();
        assert_eq!(
            json,
            "[\"fffffffffffffffffffffffffffffffffffffffffffffffffffffffefffffc2f\",\"00\",\"07\",null]"
        );
        assert_eq!(serde_json::from_str::<CurveParams>(&json).unwrap(), params);

        let params = params.with_order(BigUint::from(19u8)).unwrap();
        let json = serde_json::to_string(&params).unwrap();
        assert_eq!(serde_json::from_str::<CurveParams>(&json).unwrap(), params);
    }
}
