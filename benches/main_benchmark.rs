use splitfp::{decompose, get_special_test_values, Unpacked};

fn test_unpack_sweep() {
    for i in 0..4096u32 {
        black_box(Unpacked::from_bits(i.wrapping_mul(0x0004_081F)));
    }
}

fn test_decompose_specials() {
    for v in get_special_test_values() {
        black_box(decompose(v));
    }
}

fn test_decompose_sweep() {
    for i in 0..4096u32 {
        black_box(decompose(f32::from_bits(i << 19)));
    }
}

use criterion::{black_box, criterion_group, criterion_main, Criterion};

pub fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("unpack_sweep", |b| b.iter(test_unpack_sweep));
    c.bench_function("decompose_specials", |b| {
        b.iter(test_decompose_specials)
    });
    c.bench_function("decompose_sweep", |b| b.iter(test_decompose_sweep));
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
