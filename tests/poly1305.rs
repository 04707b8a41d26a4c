use chachapoly::encryption::poly1305_mac;

fn hex_to_bytes(s: &str) -> Vec<u8> {
    (0..s.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(&s[i..i + 2], 16).unwrap())
        .collect()
}

#[test]
fn mac_vector_rfc8439_2_5_2() {
    let key: [u8; 32] = hex_to_bytes(
        "85d6be7857556d337f4452fe42d506a80103808afb0db2fd4abff6af4149f51b",
    )
    .try_into()
    .unwrap();

    let message = b"Cryptographic Forum Research Group";
    let tag = poly1305_mac(&key, message).unwrap();

    assert_eq!(
        tag,
        hex_to_bytes("a8061dc1305136c6c22b8baf0c0127a9")
            .as_slice()
    );
}

#[test]
fn mac_is_deterministic() {
    let key = [0x42u8; 32];
    let message = b"repeat this message";

    let a = poly1305_mac(&key, message).unwrap();
    let b = poly1305_mac(&key, message).unwrap();

    assert_eq!(a, b);
}

#[test]
fn mac_empty_message_is_well_defined() {
    let key = [0x11u8; 32];
    let tag = poly1305_mac(&key, &[]).unwrap();

    // Accumulator stays zero, so the tag is exactly `s`.
    assert_eq!(tag, key[16..32]);
}

#[test]
fn mac_changes_with_a_single_bit_flip() {
    let key = [0x99u8; 32];
    let mut message = b"some fairly ordinary message body".to_vec();

    let original = poly1305_mac(&key, &message).unwrap();

    message[3] ^= 0x01;
    let flipped = poly1305_mac(&key, &message).unwrap();

    assert_ne!(original, flipped);
}

#[test]
fn mac_handles_block_boundary_lengths() {
    let key = [0x07u8; 32];

    for len in [0, 1, 15, 16, 17, 31, 32, 33, 64, 65] {
        let message = vec![0xab; len];
        // Must not error for any of these lengths.
        assert!(poly1305_mac(&key, &message).is_ok(), "length {len} failed");
    }
}
