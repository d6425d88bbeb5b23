use std::collections::BTreeMap;

use agreemap::analysis::aggregate_counts;
use agreemap::dataset::Record;
use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

const RECORD_COUNT: usize = 10_000;

fn synthetic_records() -> Vec<Record> {
    let labels = ["dog", "cat"];
    (0..RECORD_COUNT)
        .map(|i| {
            let label = labels[i % 2];
            let mut predictions = BTreeMap::new();
            predictions.insert("A".to_string(), labels[i % 3 % 2].to_string());
            predictions.insert("B".to_string(), labels[i % 5 % 2].to_string());
            Record {
                label: label.to_string(),
                x: (i % 97) as f32,
                y: (i % 89) as f32,
                predictions,
            }
        })
        .collect()
}

fn bench_aggregate(c: &mut Criterion) {
    let records = synthetic_records();
    let classifiers = vec!["A".to_string(), "B".to_string()];
    let labels = vec!["dog".to_string(), "cat".to_string()];
    c.bench_with_input(
        BenchmarkId::new("aggregate_counts", RECORD_COUNT),
        &records,
        |b, records| {
            b.iter(|| {
                black_box(aggregate_counts(
                    black_box(records),
                    &classifiers,
                    &labels,
                ))
            })
        },
    );
}

criterion_group!(benches, bench_aggregate);
criterion_main!(benches);
