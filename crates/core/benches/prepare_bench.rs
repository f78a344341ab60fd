//! Benchmarks for `StringPrep::prepare`.
//!
//! Benchmark groups:
//! - `prepare_profiles`: one short identifier through every profile
//! - `prepare_length`: Nameprep throughput as input grows
//! - `range_lookup`: raw membership tests on the largest table

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

use strprep_core::table::rfc3454::A_1;
use strprep_core::{ProfileId, ProfileRegistry};

/// Mixed-script input with case, deletions and compatibility forms.
fn sample_input(n: usize) -> String {
    let pieces = ["User", "\u{00AD}", "Stra\u{00DF}e", "\u{FB01}", "\u{C548}\u{B155}", "42"];
    pieces.iter().cycle().take(n).copied().collect()
}

fn bench_profiles(c: &mut Criterion) {
    let registry = ProfileRegistry::builder().eager(true).build();
    let mut group = c.benchmark_group("prepare_profiles");
    for id in ProfileId::ALL {
        let prep = registry.get(id);
        group.bench_with_input(BenchmarkId::from_parameter(id), "JulietCapulet", |b, input| {
            b.iter(|| prep.prepare(black_box(input), false))
        });
    }
    group.finish();
}

fn bench_length(c: &mut Criterion) {
    let registry = ProfileRegistry::new();
    let prep = registry.get(ProfileId::NamePrep);
    let mut group = c.benchmark_group("prepare_length");
    for n in [6, 60, 600] {
        let input = sample_input(n);
        group.throughput(Throughput::Bytes(input.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &input, |b, input| {
            b.iter(|| prep.prepare(black_box(input), true))
        });
    }
    group.finish();
}

fn bench_range_lookup(c: &mut Criterion) {
    c.bench_function("range_lookup", |b| {
        b.iter(|| {
            (0u32..0x3000)
                .step_by(7)
                .filter(|&cp| A_1.contains(black_box(cp)))
                .count()
        })
    });
}

criterion_group!(benches, bench_profiles, bench_length, bench_range_lookup);
criterion_main!(benches);
