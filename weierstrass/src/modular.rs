//! Arithmetic modulo a prime supplied at runtime.
//!
//! Every function returns its result in canonical form, i.e. in the range
//! `[0, p)`, regardless of the sign or magnitude of its inputs. [`reduce`] is
//! the only place where canonicalization happens.

use crate::{Error, Result};
use core::mem;
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, Zero};

/// Reduce `v` to its canonical residue modulo `p`.
///
/// Negative inputs are mapped into `[0, p)` as well, so `reduce(-1, p)`
/// returns `p - 1`. The modulus must be positive.
pub fn reduce(v: &BigInt, p: &BigInt) -> BigInt {
    debug_assert!(p.is_positive(), "modulus must be positive");
    v.mod_floor(p)
}

/// Compute `a + b mod p`.
pub fn add(a: &BigInt, b: &BigInt, p: &BigInt) -> BigInt {
    reduce(&(a + b), p)
}

/// Compute `a - b mod p`.
pub fn sub(a: &BigInt, b: &BigInt, p: &BigInt) -> BigInt {
    reduce(&(a - b), p)
}

/// Compute `a * b mod p`.
pub fn mul(a: &BigInt, b: &BigInt, p: &BigInt) -> BigInt {
    reduce(&(a * b), p)
}

/// Compute `-a mod p`.
pub fn neg(a: &BigInt, p: &BigInt) -> BigInt {
    reduce(&-a, p)
}

/// Compute the multiplicative inverse of `k` modulo `p` using the extended
/// Euclidean algorithm.
///
/// Negative `k` is accepted and treated as its canonical residue.
///
/// # Errors
///
/// - [`Error::Domain`] if `k` is zero or `p < 2`.
/// - [`Error::NotInvertible`] if `gcd(k, p) ≠ 1`.
pub fn inverse(k: &BigInt, p: &BigInt) -> Result<BigInt> {
    if k.is_zero() || *p < BigInt::from(2u8) {
        return Err(Error::Domain);
    }

    let k = reduce(k, p);

    // Remainder sequence together with both Bézout coefficient sequences,
    // maintaining `old_s * k + old_t * p == old_r` throughout.
    let (mut old_r, mut r) = (k.clone(), p.clone());
    let (mut old_s, mut s) = (BigInt::one(), BigInt::zero());
    let (mut old_t, mut t) = (BigInt::zero(), BigInt::one());

    while !r.is_zero() {
        let quotient = &old_r / &r;

        let next_r = &old_r - &quotient * &r;
        old_r = mem::replace(&mut r, next_r);

        let next_s = &old_s - &quotient * &s;
        old_s = mem::replace(&mut s, next_s);

        let next_t = &old_t - &quotient * &t;
        old_t = mem::replace(&mut t, next_t);
    }

    debug_assert_eq!(&old_s * &k + &old_t * p, old_r);

    if !old_r.is_one() {
        return Err(Error::NotInvertible);
    }

    let inv = reduce(&old_s, p);
    debug_assert!(mul(&k, &inv, p).is_one());
    Ok(inv)
}

/// Does the field modulo `p` admit the `(p + 1) / 4` square root, i.e. is
/// `p ≡ 3 (mod 4)`?
pub fn has_sqrt(p: &BigInt) -> bool {
    reduce(p, &BigInt::from(4u8)) == BigInt::from(3u8)
}

/// Compute a square root of `v` modulo `p` as `v^((p + 1) / 4) mod p`.
///
/// The result is only a square root when `v` is a quadratic residue; no
/// check is performed, so callers must validate the result when `v` may be
/// a non-residue.
///
/// # Errors
///
/// [`Error::UnsupportedCurve`] unless `p ≡ 3 (mod 4)`.
pub fn sqrt(v: &BigInt, p: &BigInt) -> Result<BigInt> {
    if !has_sqrt(p) {
        return Err(Error::UnsupportedCurve);
    }

    let exp = (p + 1u8) >> 2;
    Ok(reduce(v, p).modpow(&exp, p))
}
