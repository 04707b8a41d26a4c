use chachapoly::primitives::BigInt;

#[test]
fn round_trip_le_bytes() {
    let n = BigInt::from_dec("123456789012345678901234567890");
    let bytes = n.to_le_bytes(16);
    let back = BigInt::from_le_bytes(1, &bytes);
    assert_eq!(back, n);
}

#[test]
fn add_then_sub_is_identity() {
    let a = BigInt::from_dec("98765432109876543210");
    let b = BigInt::from_dec("12345678901234567890");

    let sum = a.add(&b).unwrap();
    let back = sum.sub(&b).unwrap();

    assert_eq!(back, a);
}

#[test]
fn mul_then_div_is_identity() {
    let a = BigInt::from_dec("340282366920938463463374607431768211455");
    let b = BigInt::from_dec("65537");

    let product = a.mul(&b).unwrap();
    let back = product.div(&b).unwrap();

    assert_eq!(back, a);
}

#[test]
fn sub_self_is_canonical_zero() {
    let a = BigInt::from_dec("42");
    let zero = a.sub(&a).unwrap();

    assert!(zero.is_zero());
    assert_eq!(zero.sign(), 0);
    assert_eq!(zero.limb_count(), 0);
}

#[test]
fn mod_crypto_is_euclidean() {
    let a = BigInt::from_dec("-7");
    let n = BigInt::from_dec("5");

    let r = a.mod_crypto(&n).unwrap();

    assert_eq!(r.sign(), 1);
    assert_eq!(r.to_be_bytes(1), vec![3]);
}

#[test]
fn mod_crypto_on_positive_accumulator_matches_truncated_mod() {
    let a = BigInt::from_dec("123456789");
    let n = BigInt::from_dec("97");

    let euclidean = a.mod_crypto(&n).unwrap();
    let truncated = a.rem(&n).unwrap();

    assert_eq!(euclidean, truncated);
}

#[test]
fn division_by_zero_is_rejected() {
    let a = BigInt::from_dec("1");
    let zero = BigInt::zero();

    assert!(a.div_mod(&zero).is_err());
}

#[test]
fn invalid_decimal_produces_canonical_zero() {
    let n = BigInt::from_dec("12x45");
    assert!(n.is_zero());
}

#[test]
fn invalid_hex_produces_canonical_zero() {
    let n = BigInt::from_be_hex(1, "zz");
    assert!(n.is_zero());
}

#[test]
fn to_bytes_truncates_when_shorter_than_magnitude() {
    let n = BigInt::from_dec("4294967296"); // 2^32, needs 5 bytes little-endian
    let truncated = n.to_le_bytes(4);
    assert_eq!(truncated, vec![0, 0, 0, 0]);
}

#[test]
fn be_and_le_hex_constructors_agree_with_bytes() {
    let be = BigInt::from_be_hex(1, "0123456789abcdef");
    let le = BigInt::from_le_hex(1, "efcdab8967452301");
    assert_eq!(be, le);
}
