use chachapoly::encryption::aead_encrypt;

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

pub fn bench_aead_encrypt_1500_bytes(c: &mut Criterion) {
    let key = [0u8; 32];
    let iv = [0u8; 8];
    let constant = [0u8; 4];
    let plaintext = vec![0u8; 1500];
    let aad = [0u8; 12];

    c.bench_function("aead_encrypt 1500 bytes", |b| {
        b.iter(|| {
            aead_encrypt(
                black_box(&key),
                black_box(&iv),
                black_box(&constant),
                black_box(&plaintext),
                black_box(&aad),
            )
        })
    });
}

criterion_group!(benches, bench_aead_encrypt_1500_bytes);
criterion_main!(benches);
