//! Benchmarks for register operations.
//!
//! Every operation is constant time; rendering and the bit view are
//! O(word size). These numbers guard against regressions in the masking
//! and formatting paths.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use progcalc::{bits, BinaryOp, Radix, Register, WordSize};

// ============================================================================
// Benchmark: binary operators per word size
// ============================================================================

fn bench_binary_ops(c: &mut Criterion) {
    let mut group = c.benchmark_group("register_binary");
    group.throughput(Throughput::Elements(1));

    for w in WordSize::ALL {
        let mut reg = Register::new();
        reg.set_word_size(w);

        for op in [BinaryOp::Add, BinaryOp::Multiply, BinaryOp::Divide, BinaryOp::RoL] {
            group.bench_with_input(
                BenchmarkId::new(op.label(), w.name()),
                &op,
                |b, &op| {
                    b.iter(|| black_box(reg.apply(black_box(op), black_box(-12345), black_box(7))));
                },
            );
        }
    }

    group.finish();
}

// ============================================================================
// Benchmark: word size switching (re-mask)
// ============================================================================

fn bench_word_size_switch(c: &mut Criterion) {
    let mut group = c.benchmark_group("register_word_size");
    group.throughput(Throughput::Elements(4));

    group.bench_function("cycle_all", |b| {
        let mut reg = Register::new();
        reg.set_value(-1);
        b.iter(|| {
            for w in WordSize::ALL {
                reg.set_word_size(black_box(w));
            }
            black_box(reg.value())
        });
    });

    group.finish();
}

// ============================================================================
// Benchmark: rendering
// ============================================================================

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("register_render");

    for radix in Radix::ALL {
        group.bench_with_input(BenchmarkId::new("qword", radix.name()), &radix, |b, &r| {
            b.iter(|| black_box(r.render(black_box(0x8000_0000_DEAD_BEEF), WordSize::Qword)));
        });
    }

    group.bench_function("parse_hex_qword", |b| {
        b.iter(|| black_box(Radix::Hex.parse(black_box("8000_0000_DEAD_BEEF"), WordSize::Qword)));
    });

    group.bench_function("bit_view_qword", |b| {
        b.iter(|| black_box(bits::bit_view(black_box(0x8000_0000_DEAD_BEEF), WordSize::Qword)));
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_binary_ops,
    bench_word_size_switch,
    bench_render,
);
criterion_main!(benches);
