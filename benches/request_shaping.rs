//! Benchmarks for request shaping performance
//!
//! This benchmark measures:
//! - Path template resolution and scoping-field removal
//! - Pagination flattening overhead
//! - Batch row extraction for bulk mutations

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use platform_client::{LogicalRequest, PageRequest, RequestShaper, SortInstruction};
use serde_json::json;

fn bench_shaping(c: &mut Criterion) {
    let shaper = RequestShaper::new();
    let mut group = c.benchmark_group("request_shaping");
    group.throughput(Throughput::Elements(1));

    group.bench_function("scoped_paginated_get", |b| {
        let request = LogicalRequest::get("/v1/organizationId/code-rule")
            .param("ruleCode", "ABC")
            .param("ruleName", "order number")
            .page(
                PageRequest::new(2, 20)
                    .sorted_by(SortInstruction::asc("ruleCode"))
                    .sorted_by(SortInstruction::desc("creationDate")),
            )
            .scoped(5u64);
        b.iter(|| shaper.shape(black_box(&request)).unwrap());
    });

    group.bench_function("batch_delete_50_rows", |b| {
        let rows: Vec<_> = (0..50)
            .map(|i| json!({ "ruleId": i, "objectVersionNumber": 0 }))
            .collect();
        let request = LogicalRequest::delete("/v1/organizationId/code-rule")
            .param("selectedRows", rows)
            .scoped(5u64);
        b.iter(|| shaper.shape(black_box(&request)).unwrap());
    });

    group.bench_function("unscoped_passthrough_get", |b| {
        let request = LogicalRequest::get("/v1/lovs/value").param("lovCode", "HPFM.LEVEL");
        b.iter(|| shaper.shape(black_box(&request)).unwrap());
    });

    group.finish();
}

criterion_group!(benches, bench_shaping);
criterion_main!(benches);
