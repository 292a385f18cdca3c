//! Tokenizer throughput benchmarks.
//!
//! Measures end-to-end tokenization (read-ahead, rollback, classification,
//! keyword lookup) across source sizes and buffer half capacities.

use std::hint::black_box;

use clex::{Tokenizer, TokenizerConfig};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

/// Generate N small C functions.
fn generate_n_functions(n: usize) -> String {
    (0..n)
        .map(|i| format!("int func{i}(int x) {{ if (x >= {i}) return x + {i}; return x; }}"))
        .collect::<Vec<_>>()
        .join("\n")
}

fn bench_throughput(c: &mut Criterion) {
    let mut group = c.benchmark_group("clex/throughput");

    for num_functions in [10, 100, 1000, 5000] {
        let source = generate_n_functions(num_functions);
        group.throughput(Throughput::Bytes(source.len() as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(num_functions),
            &source,
            |b, src| {
                b.iter(|| {
                    let Ok(tokenizer) = Tokenizer::new(src.as_bytes()) else {
                        return;
                    };
                    for token in tokenizer {
                        let _ = black_box(token);
                    }
                });
            },
        );
    }

    group.finish();
}

fn bench_half_capacity(c: &mut Criterion) {
    let mut group = c.benchmark_group("clex/half_capacity");
    let source = generate_n_functions(1000);
    group.throughput(Throughput::Bytes(source.len() as u64));

    for half in [16, 256, 1024, 8192] {
        let config = TokenizerConfig::default().with_half_capacity(half);
        group.bench_with_input(BenchmarkId::from_parameter(half), &source, |b, src| {
            b.iter(|| {
                let Ok(tokenizer) = Tokenizer::with_config(src.as_bytes(), config) else {
                    return;
                };
                for token in tokenizer {
                    let _ = black_box(token);
                }
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_throughput, bench_half_capacity);
criterion_main!(benches);
