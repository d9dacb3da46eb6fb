//! secp256k1 arithmetic tests.

use hex_literal::hex;
use num_bigint::BigUint;
use proptest::{prelude::*, test_runner::Config};
use weierstrass::{
    AffinePoint, Curve, Error, Point,
    dev::{SECP256K1_N as N, secp256k1 as curve, secp256k1_generator as generator, secp256k1_params},
};

/// Multiples of the generator as `(k, x, y)`.
const MUL_TEST_VECTORS: &[(u32, [u8; 32], [u8; 32])] = &[
    (
        1,
        hex!("79BE667EF9DCBBAC55A06295CE870B07029BFCDB2DCE28D959F2815B16F81798"),
        hex!("483ADA7726A3C4655DA4FBFC0E1108A8FD17B448A68554199C47D08FFB10D4B8"),
    ),
    (
        2,
        hex!("C6047F9441ED7D6D3045406E95C07CD85C778E4B8CEF3CA7ABAC09B95C709EE5"),
        hex!("1AE168FEA63DC339A3C58419466CEAEEF7F632653266D0E1236431A950CFE52A"),
    ),
    (
        3,
        hex!("F9308A019258C31049344F85F89D5229B531C845836F99B08601F113BCE036F9"),
        hex!("388F7B0F632DE8140FE337E62A37F3566500A99934C2231B6CB9FD7584B8E672"),
    ),
    (
        7,
        hex!("5CBDF0646E5DB4EAA398F365F2EA7A0E3D419B7E0330E39CE92BDDEDCAC4F9BC"),
        hex!("6AEBCA40BA255960A3178D6D861A54DBA813D0B813FDE7B5A5082628087264DA"),
    ),
    (
        0xdeadbeef,
        hex!("76D2FDF1302D1FA9556F4DF94EC84CEFBA6D482E54F47C6C2A238C1BAA560F0E"),
        hex!("B754AC7E7A3E09C44184CB451A4F5FB557F32053EB015DFFEBB655B5CFD54D8A"),
    ),
];

#[test]
fn generator_is_on_curve() {
    assert!(curve().is_on_curve(&generator()));
}

#[test]
fn test_vector_multiply() {
    let curve = curve();
    let g = generator();

    for (k, x, y) in MUL_TEST_VECTORS {
        let point = curve.multiply(&g, &BigUint::from(*k)).unwrap();
        assert_eq!(point, AffinePoint::from_be_bytes(x, y));
    }
}

#[test]
fn test_vector_repeated_add() {
    let curve = curve();
    let g = generator();
    let two_g = curve.add(&g, &g).unwrap();
    let three_g = curve.add(&two_g, &g).unwrap();

    assert_eq!(two_g, AffinePoint::from_be_bytes(&MUL_TEST_VECTORS[1].1, &MUL_TEST_VECTORS[1].2));
    assert_eq!(three_g, AffinePoint::from_be_bytes(&MUL_TEST_VECTORS[2].1, &MUL_TEST_VECTORS[2].2));
}

#[test]
fn multiply_by_order() {
    let curve = curve();
    let g = generator();
    let n = BigUint::from_bytes_be(&N);

    // Field-prime domain check lets the order through; the ladder then
    // reaches G + (-G)
    assert_eq!(curve.multiply(&g, &n), Err(Error::UndefinedResult));
    assert_eq!(curve.mul_point(&g.clone().into(), &n), Ok(Point::Identity));

    let curve = Curve::new(secp256k1_params().with_order(n.clone()).unwrap());
    assert_eq!(curve.multiply(&g, &n), Err(Error::Domain));
    assert_eq!(curve.mul_point(&g.into(), &n), Ok(Point::Identity));
}

#[test]
fn multiply_by_order_minus_one() {
    let curve = curve();
    let g = generator();
    let n_minus_one = BigUint::from_bytes_be(&N) - 1u8;

    assert_eq!(curve.multiply(&g, &n_minus_one).unwrap(), curve.negate(&g).unwrap());
}

#[test]
fn serialize_vectors() {
    let curve = curve();

    for (k, x, y) in MUL_TEST_VECTORS {
        let point = AffinePoint::from_be_bytes(x, y);

        let compressed = curve.serialize(&point, true).unwrap();
        assert_eq!(compressed[0], if y[31] & 1 == 1 { 0x03 } else { 0x02 }, "k = {k}");
        assert_eq!(&compressed[1..], x);

        let uncompressed = curve.serialize(&point, false).unwrap();
        assert_eq!(uncompressed[0], 0x04);
        assert_eq!(&uncompressed[1..33], x);
        assert_eq!(&uncompressed[33..], y);
    }
}

prop_compose! {
    fn scalar()(k in 1u64..) -> BigUint {
        BigUint::from(k)
    }
}

prop_compose! {
    fn point()(k in scalar()) -> AffinePoint {
        curve().multiply(&generator(), &k).unwrap()
    }
}

proptest! {
    #![proptest_config(Config::with_cases(32))]

    #[test]
    fn negation(p in point()) {
        let curve = curve();
        let neg = curve.negate(&p).unwrap();

        prop_assert!(curve.is_on_curve(&neg));
        prop_assert_eq!(curve.negate(&neg).unwrap(), p.clone());
        prop_assert_eq!(curve.add(&p, &neg), Err(Error::UndefinedResult));
    }

    #[test]
    fn commutativity(p in point(), q in point()) {
        prop_assume!(p.x() != q.x());

        let curve = curve();
        let sum = curve.add(&p, &q).unwrap();

        prop_assert!(curve.is_on_curve(&sum));
        prop_assert_eq!(sum, curve.add(&q, &p).unwrap());
    }

    #[test]
    fn distributivity(m in scalar(), n in scalar()) {
        let curve = curve();
        let g = generator();

        let lhs = curve
            .add(
                &curve.multiply(&g, &m).unwrap(),
                &curve.multiply(&g, &n).unwrap(),
            )
            .unwrap();

        prop_assert_eq!(lhs, curve.multiply(&g, &(m + n)).unwrap());
    }

    #[test]
    fn compressed_round_trip(p in point()) {
        let curve = curve();
        let bytes = curve.serialize(&p, true).unwrap();
        prop_assert_eq!(curve.parse(&bytes).unwrap(), p);
    }

    #[test]
    fn uncompressed_round_trip(p in point()) {
        let curve = curve();
        let bytes = curve.serialize(&p, false).unwrap();
        prop_assert_eq!(curve.parse(&bytes).unwrap(), p);
    }
}
