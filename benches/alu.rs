//! Benchmarks for the gate-level ALU.
//!
//! Measures the ripple model against native integer arithmetic. The
//! model is expected to lose by orders of magnitude — the point of these
//! numbers is to document the cost of bit-accurate gate simulation, and
//! to catch accidental regressions in the ripple loops.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use ripple_alu::alu::{Alu, Alu16};
use ripple_alu::register::{Reg16, Register};

// =============================================================================
// Ripple arithmetic vs native
// =============================================================================

fn bench_add(c: &mut Criterion) {
    let mut group = c.benchmark_group("add");
    group.throughput(Throughput::Elements(1));

    let mut alu = Alu16::new();
    let rhs = Reg16::from_u32(0x3456);

    group.bench_function("ripple_16bit", |b| {
        b.iter(|| {
            let mut acc = Reg16::from_u32(black_box(0x1234));
            alu.add(&mut acc, black_box(&rhs));
            black_box(acc)
        });
    });

    group.bench_function("native_16bit", |b| {
        b.iter(|| black_box(black_box(0x1234u16).wrapping_add(black_box(0x3456))));
    });

    group.finish();
}

fn bench_add_widths(c: &mut Criterion) {
    let mut group = c.benchmark_group("add_widths");
    group.throughput(Throughput::Elements(1));

    fn ripple<const W: usize>(b: &mut criterion::Bencher<'_>) {
        let mut alu = Alu::<W>::new();
        let rhs = Register::<W>::from_u32(0x5A5A_5A5A);
        b.iter(|| {
            let mut acc = Register::<W>::from_u32(black_box(0xA5A5_A5A5));
            alu.add(&mut acc, black_box(&rhs));
            black_box(acc)
        });
    }

    group.bench_with_input(BenchmarkId::new("ripple", 8), &8, |b, _| ripple::<8>(b));
    group.bench_with_input(BenchmarkId::new("ripple", 16), &16, |b, _| ripple::<16>(b));
    group.bench_with_input(BenchmarkId::new("ripple", 32), &32, |b, _| ripple::<32>(b));

    group.finish();
}

fn bench_mul(c: &mut Criterion) {
    let mut group = c.benchmark_group("mul");
    group.throughput(Throughput::Elements(1));

    let mut alu = Alu16::new();
    let rhs = Reg16::from_u32(0x0321);

    group.bench_function("shift_and_add_16bit", |b| {
        b.iter(|| {
            let mut acc = Reg16::from_u32(black_box(0x0123));
            alu.mul(&mut acc, black_box(&rhs));
            black_box(acc)
        });
    });

    group.bench_function("native_16bit", |b| {
        b.iter(|| black_box(black_box(0x0123u16).wrapping_mul(black_box(0x0321))));
    });

    group.finish();
}

fn bench_div(c: &mut Criterion) {
    let mut group = c.benchmark_group("div");
    group.throughput(Throughput::Elements(1));

    let mut alu = Alu16::new();
    let divisor = Reg16::from_u32(7);

    // Repeated subtraction is O(quotient); keep the quotient moderate.
    group.bench_function("repeated_sub_16bit", |b| {
        b.iter(|| {
            let mut acc = Reg16::from_u32(black_box(1000));
            alu.div(&mut acc, black_box(&divisor));
            black_box(acc)
        });
    });

    group.bench_function("native_16bit", |b| {
        b.iter(|| black_box(black_box(1000u16) / black_box(7)));
    });

    group.finish();
}

// =============================================================================
// Shifts and rotates
// =============================================================================

fn bench_shift_rotate(c: &mut Criterion) {
    let mut group = c.benchmark_group("shift_rotate");
    group.throughput(Throughput::Elements(1));

    let mut alu = Alu16::new();

    group.bench_function("shl_4", |b| {
        b.iter(|| {
            let mut acc = Reg16::from_u32(black_box(0xBEEF));
            alu.shl(&mut acc, black_box(4));
            black_box(acc)
        });
    });

    group.bench_function("sar_4", |b| {
        b.iter(|| {
            let mut acc = Reg16::from_u32(black_box(0xBEEF));
            alu.sar(&mut acc, black_box(4));
            black_box(acc)
        });
    });

    group.bench_function("rol_4", |b| {
        b.iter(|| {
            let mut acc = Reg16::from_u32(black_box(0xBEEF));
            alu.rol(&mut acc, black_box(4));
            black_box(acc)
        });
    });

    group.bench_function("rol_15", |b| {
        b.iter(|| {
            let mut acc = Reg16::from_u32(black_box(0xBEEF));
            alu.rol(&mut acc, black_box(15));
            black_box(acc)
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_add,
    bench_add_widths,
    bench_mul,
    bench_div,
    bench_shift_rotate,
);
criterion_main!(benches);
