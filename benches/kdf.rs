//! benches/kdf.rs
//! PBKDF2-HMAC-SHA256 at the fixed envelope work factor
use aesenvelope_rs::aliases::{Aes256Key32, PasswordString, Salt16};
use aesenvelope_rs::derive_key;
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use std::time::Duration;

fn kdf_benches(c: &mut Criterion) {
    let mut group = c.benchmark_group("KDF");
    group.measurement_time(Duration::from_secs(8));
    group.sample_size(20);

    let pw = PasswordString::new("benchmark-password".to_string());
    let salt = Salt16::new([0x42; 16]);

    group.bench_function("pbkdf2_sha256_10000", |b| {
        b.iter(|| {
            let mut key = Aes256Key32::new([0u8; 32].into());
            derive_key(black_box(&pw), black_box(&salt), &mut key).unwrap();
            black_box(key);
        });
    });

    group.finish();
}

criterion_group!(benches, kdf_benches);
criterion_main!(benches);
