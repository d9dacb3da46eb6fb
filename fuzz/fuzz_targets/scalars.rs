#![no_main]
use libfuzzer_sys::fuzz_target;
use num_bigint::{BigInt, Sign};
use weierstrass::{Error, modular};

fn test_field(p: &BigInt, fe1: &BigInt, fe2: &BigInt, fe3: &BigInt) {
    let add = |a: &BigInt, b: &BigInt| modular::add(a, b, p);
    let mul = |a: &BigInt, b: &BigInt| modular::mul(a, b, p);

    // Canonical form
    for fe in [fe1, fe2, fe3] {
        let r = modular::reduce(fe, p);
        assert!(r >= BigInt::from(0) && &r < p);
    }

    // Associativity
    assert_eq!(add(fe1, &add(fe2, fe3)), add(&add(fe1, fe2), fe3));
    assert_eq!(mul(fe1, &mul(fe2, fe3)), mul(&mul(fe1, fe2), fe3));

    // Commutativity
    assert_eq!(add(fe1, fe2), add(fe2, fe1));
    assert_eq!(mul(fe1, fe2), mul(fe2, fe1));

    // Inverse
    assert_eq!(modular::sub(fe1, fe1, p), BigInt::from(0));
    match modular::inverse(fe1, p) {
        Ok(inv) => assert_eq!(mul(fe1, &inv), BigInt::from(1)),
        Err(Error::Domain | Error::NotInvertible) => {}
        Err(err) => panic!("unexpected inverse error: {err}"),
    }
}

fuzz_target!(|data: &[u8]| {
    if data.len() < 4 {
        return;
    }

    let chunk = data.len() / 4;
    let [p, fe1, fe2, fe3] = [0, 1, 2, 3].map(|i| {
        let bytes = &data[i * chunk..(i + 1) * chunk];
        let sign = if bytes[0] & 1 == 1 { Sign::Minus } else { Sign::Plus };
        BigInt::from_bytes_be(sign, bytes)
    });

    // Any modulus of at least 2 works, prime or not
    let p = BigInt::from(p.magnitude().clone());
    if p < BigInt::from(2) {
        return;
    }

    test_field(&p, &fe1, &fe2, &fe3);
});
