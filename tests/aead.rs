use chachapoly::encryption::{Chacha20Poly1305Error, aead_decrypt, aead_encrypt};

fn hex_to_bytes(s: &str) -> Vec<u8> {
    let s: String = s.chars().filter(|c| !c.is_whitespace()).collect();
    (0..s.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(&s[i..i + 2], 16).unwrap())
        .collect()
}

fn rfc8439_vector() -> ([u8; 32], [u8; 8], [u8; 4], Vec<u8>, Vec<u8>) {
    let key: [u8; 32] = hex_to_bytes(concat!(
        "808182838485868788898a8b8c8d8e8f",
        "909192939495969798999a9b9c9d9e9f"
    ))
    .try_into()
    .unwrap();
    let constant: [u8; 4] = hex_to_bytes("07000000").try_into().unwrap();
    let iv: [u8; 8] = hex_to_bytes("4041424344454647").try_into().unwrap();
    let aad = hex_to_bytes("50515253c0c1c2c3c4c5c6c7");
    let plaintext =
        b"Ladies and Gentlemen of the class of '99: If I could offer you only one tip for \
          the future, sunscreen would be it."
            .to_vec();

    (key, iv, constant, plaintext, aad)
}

#[test]
fn aead_vector_rfc8439_2_8_2() {
    let (key, iv, constant, plaintext, aad) = rfc8439_vector();

    let (ciphertext, tag) = aead_encrypt(&key, &iv, &constant, &plaintext, &aad).unwrap();

    assert_eq!(
        &ciphertext[..16],
        hex_to_bytes("d31a8d34648e60db7b86afbc53ef7ec2").as_slice()
    );
    assert_eq!(
        tag,
        hex_to_bytes("1ae10b594f09e26a7e902ecbd0600691").as_slice()
    );

    let decrypted = aead_decrypt(&key, &iv, &constant, &ciphertext, &aad, &tag).unwrap();
    assert_eq!(decrypted, plaintext);
}

#[test]
fn round_trip_with_associated_data() {
    let key = [0x5cu8; 32];
    let iv = [0xa1u8; 8];
    let constant = [0x00, 0x00, 0x00, 0x01];
    let plaintext = b"the eagle flies at midnight".to_vec();
    let aad = b"header-v1".to_vec();

    let (ciphertext, tag) = aead_encrypt(&key, &iv, &constant, &plaintext, &aad).unwrap();
    let decrypted = aead_decrypt(&key, &iv, &constant, &ciphertext, &aad, &tag).unwrap();

    assert_eq!(decrypted, plaintext);
}

#[test]
fn empty_plaintext_and_aad_round_trip() {
    let key = [0x01u8; 32];
    let iv = [0x02u8; 8];
    let constant = [0x03u8; 4];

    let (ciphertext, tag) = aead_encrypt(&key, &iv, &constant, &[], &[]).unwrap();
    assert!(ciphertext.is_empty());

    let decrypted = aead_decrypt(&key, &iv, &constant, &ciphertext, &[], &tag).unwrap();
    assert!(decrypted.is_empty());
}

#[test]
fn bit_flip_in_ciphertext_fails_authentication() {
    let (key, iv, constant, plaintext, aad) = rfc8439_vector();
    let (mut ciphertext, tag) = aead_encrypt(&key, &iv, &constant, &plaintext, &aad).unwrap();

    ciphertext[0] ^= 0x01;

    assert_eq!(
        aead_decrypt(&key, &iv, &constant, &ciphertext, &aad, &tag),
        Err(Chacha20Poly1305Error::AuthenticationFailed)
    );
}

#[test]
fn bit_flip_in_aad_fails_authentication() {
    let (key, iv, constant, plaintext, mut aad) = rfc8439_vector();
    let (ciphertext, tag) = aead_encrypt(&key, &iv, &constant, &plaintext, &aad).unwrap();

    aad[0] ^= 0x01;

    assert_eq!(
        aead_decrypt(&key, &iv, &constant, &ciphertext, &aad, &tag),
        Err(Chacha20Poly1305Error::AuthenticationFailed)
    );
}

#[test]
fn bit_flip_in_tag_fails_authentication() {
    let (key, iv, constant, plaintext, aad) = rfc8439_vector();
    let (ciphertext, mut tag) = aead_encrypt(&key, &iv, &constant, &plaintext, &aad).unwrap();

    tag[15] ^= 0x80;

    assert_eq!(
        aead_decrypt(&key, &iv, &constant, &ciphertext, &aad, &tag),
        Err(Chacha20Poly1305Error::AuthenticationFailed)
    );
}

#[test]
fn encryption_is_deterministic_for_fixed_inputs() {
    let (key, iv, constant, plaintext, aad) = rfc8439_vector();

    let (ct1, tag1) = aead_encrypt(&key, &iv, &constant, &plaintext, &aad).unwrap();
    let (ct2, tag2) = aead_encrypt(&key, &iv, &constant, &plaintext, &aad).unwrap();

    assert_eq!(ct1, ct2);
    assert_eq!(tag1, tag2);
}

#[test]
fn lengths_around_the_padding_boundary_round_trip() {
    let key = [0x22u8; 32];
    let iv = [0x33u8; 8];
    let constant = [0x44u8; 4];

    for len in [0, 1, 15, 16, 17, 63, 64, 65] {
        let plaintext = vec![0xcc; len];
        let aad = vec![0x11; len];

        let (ciphertext, tag) = aead_encrypt(&key, &iv, &constant, &plaintext, &aad).unwrap();
        let decrypted = aead_decrypt(&key, &iv, &constant, &ciphertext, &aad, &tag).unwrap();

        assert_eq!(decrypted, plaintext, "length {len} failed to round-trip");
    }
}
