use criterion::{black_box, criterion_group, criterion_main, Criterion};
use lib0::{Decoder, Encoder};

const SAMPLES: [u64; 6] = [0, 127, 128, 65535, 4294967295, u64::MAX];

fn encode_var_uint(c: &mut Criterion) {
    c.bench_function("write_var_uint", |b| {
        b.iter(|| {
            let mut encoder = Encoder::with_capacity(64);
            for n in SAMPLES {
                encoder.write_var_uint(black_box(n));
            }
            encoder.to_bytes()
        })
    });

    c.bench_function("write_var_int", |b| {
        b.iter(|| {
            let mut encoder = Encoder::with_capacity(64);
            for n in SAMPLES {
                encoder.write_var_int(black_box(n as i64));
            }
            encoder.to_bytes()
        })
    });
}

fn decode_var_uint(c: &mut Criterion) {
    let mut encoder = Encoder::new();
    for n in SAMPLES {
        encoder.write_var_uint(n);
    }
    let bytes = encoder.to_bytes();

    c.bench_function("read_var_uint", |b| {
        b.iter(|| {
            let mut decoder = Decoder::new(black_box(&bytes));
            let mut sum = 0u64;
            while decoder.has_content() {
                sum = sum.wrapping_add(decoder.read_var_uint().unwrap());
            }
            sum
        })
    });
}

criterion_group!(benches, encode_var_uint, decode_var_uint);
criterion_main!(benches);
