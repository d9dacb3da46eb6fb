//! Development-related functionality: sample curves for tests and benchmarks.

use crate::{AffinePoint, Curve, CurveParams};
use hex_literal::hex;

/// secp256k1 base field prime.
pub const SECP256K1_P: [u8; 32] =
    hex!("FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEFFFFFC2F");

/// Order of the secp256k1 group.
pub const SECP256K1_N: [u8; 32] =
    hex!("FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEBAAEDCE6AF48A03BBFD25E8CD0364141");

/// x-coordinate of the secp256k1 generator.
pub const SECP256K1_GX: [u8; 32] =
    hex!("79BE667EF9DCBBAC55A06295CE870B07029BFCDB2DCE28D959F2815B16F81798");

/// y-coordinate of the secp256k1 generator.
pub const SECP256K1_GY: [u8; 32] =
    hex!("483ADA7726A3C4655DA4FBFC0E1108A8FD17B448A68554199C47D08FFB10D4B8");

/// secp256k1: `y² = x³ + 7` over `𝔽p`, without an attached group order.
pub fn secp256k1() -> Curve {
    Curve::new(secp256k1_params())
}

/// secp256k1 curve parameters, without an attached group order.
pub fn secp256k1_params() -> CurveParams {
    CurveParams::from_canonical(&SECP256K1_P, 0, 7)
}

/// secp256k1 generator.
pub fn secp256k1_generator() -> AffinePoint {
    AffinePoint::from_be_bytes(&SECP256K1_GX, &SECP256K1_GY)
}

/// `y² = x³ + 2x + 2` over `𝔽17`.
///
/// Its 18 affine points and the identity form a cyclic group of order 19
/// generated by [`curve17_generator`]. `17 ≡ 1 (mod 4)`, so points cannot be
/// decompressed.
pub fn curve17() -> Curve {
    Curve::new(CurveParams::from_canonical(&[17], 2, 2))
}

/// The point `(5, 1)` on [`curve17`].
pub fn curve17_generator() -> AffinePoint {
    AffinePoint::new(5u32, 1u32)
}

/// `y² = x³ + x + 1` over `𝔽23`, where `23 ≡ 3 (mod 4)`.
///
/// The group has order 28; `(4, 0)` is its point of order two.
pub fn curve23() -> Curve {
    Curve::new(CurveParams::from_canonical(&[23], 1, 1))
}
