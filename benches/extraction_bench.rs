//! Benchmark for single-file tag extraction throughput

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use gotags::{extract_source, ExtractOptions, TypeRegistry};
use std::hint::black_box;
use std::path::Path;

/// Build a synthetic Go file with `types` types, each with a constructor
/// and two methods.
fn synthetic_source(types: usize) -> String {
    let mut source = String::from("package bench\n\n");
    for i in 0..types {
        source.push_str(&format!(
            "type T{i} struct {{\n\tvalues map[string][]*T{i}\n}}\n\n\
             func NewT{i}(size int) *T{i} {{\n\treturn &T{i}{{}}\n}}\n\n\
             func (t *T{i}) Get(key string) ([]*T{i}, bool) {{\n\tv, ok := t.values[key]\n\treturn v, ok\n}}\n\n\
             func (t T{i}) Each(fn func(k string, v []*T{i}) error) error {{\n\treturn nil\n}}\n\n"
        ));
    }
    source
}

fn bench_extract_source(c: &mut Criterion) {
    let mut group = c.benchmark_group("extract_source");
    let options = ExtractOptions::default();

    for types in [10, 100, 500] {
        let source = synthetic_source(types);
        group.bench_with_input(BenchmarkId::from_parameter(types), &source, |b, source| {
            b.iter(|| {
                let mut registry = TypeRegistry::new();
                let tags = extract_source(
                    black_box(source),
                    Path::new("bench.go"),
                    &mut registry,
                    &options,
                )
                .unwrap();
                black_box(tags)
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_extract_source);
criterion_main!(benches);
