#![no_main]
// Targets: secp256k1 and y² = x³ + x + 1 over 𝔽23 (p ≡ 3 mod 4), and
// y² = x³ + 2x + 2 over 𝔽17 (p ≡ 1 mod 4)
use libfuzzer_sys::fuzz_target;
use num_bigint::BigUint;
use weierstrass::{Curve, Error, Point, dev};

fn test_group(curve: &Curve, p1: &Point, p2: &Point, s: &BigUint) {
    let sum = curve.add_points(p1, p2).unwrap();
    let neg_sum = curve.negate_point(&sum).unwrap();

    // Test that negation works correctly
    assert_eq!(curve.add_points(&sum, &neg_sum).unwrap(), Point::Identity);

    // Test that addition and doubling are consistent
    assert_eq!(
        curve.double_point(p1).unwrap(),
        curve.add_points(p1, p1).unwrap()
    );

    // Test scalar multiplication distributive property
    let scalar_mul = curve.mul_point(p1, s).unwrap();
    assert_eq!(
        curve.add_points(&scalar_mul, &scalar_mul).unwrap(),
        curve.mul_point(p1, &(s + s)).unwrap()
    );
}

fn test_curve(curve: &Curve, data: &[u8]) {
    let size = curve.params().field_size();
    let (lhs, rest) = data.split_at(data.len().min(2 * size + 1));
    let (rhs, scalar) = rest.split_at(rest.len().min(2 * size + 1));

    let parsed = [lhs, rhs].map(|bytes| match curve.parse_point(bytes) {
        Ok(point) => Some(point),
        Err(Error::Encoding | Error::UnsupportedCurve) => None,
        Err(err) => panic!("unexpected parse error: {err}"),
    });

    // Parsed points are not validated; only on-curve points enter the group tests
    if let [Some(p1), Some(p2)] = parsed {
        if curve.contains(&p1) && curve.contains(&p2) {
            let s = BigUint::from_bytes_be(&scalar[..scalar.len().min(8)]);
            test_group(curve, &p1, &p2, &s);

            // Re-encoding a valid point is lossless
            for compress in [true, false] {
                let bytes = curve.serialize_point(&p1, compress).unwrap();
                if curve.params().supports_sqrt() || !compress {
                    assert_eq!(curve.parse_point(&bytes).unwrap(), p1);
                }
            }
        }
    }
}

fuzz_target!(|data: &[u8]| {
    test_curve(&dev::secp256k1(), data);
    test_curve(&dev::curve17(), data);
    test_curve(&dev::curve23(), data);
});
