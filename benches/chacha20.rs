use chachapoly::chacha20::{chacha20_apply, chacha20_block};

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

pub fn bench_chacha20_block(c: &mut Criterion) {
    let key = [0u8; 32];
    let nonce = [0u8; 12];

    c.bench_function("chacha20_block", |b| {
        b.iter(|| chacha20_block(black_box(&key), black_box(0), black_box(&nonce)))
    });
}

pub fn bench_chacha20_apply_1500_bytes(c: &mut Criterion) {
    let key = [0u8; 32];
    let nonce = [0u8; 12];
    let data = vec![0u8; 1500];

    c.bench_function("chacha20_apply 1500 bytes", |b| {
        b.iter(|| chacha20_apply(black_box(&key), black_box(0), black_box(&nonce), black_box(&data)))
    });
}

criterion_group!(benches, bench_chacha20_block, bench_chacha20_apply_1500_bytes);
criterion_main!(benches);
