use criterion::{black_box, criterion_group, criterion_main, Criterion};

use proteon_core::config::RerankWeights;
use proteon_core::models::{PassageRecord, SearchFilters, Similarity};
use proteon_retrieval::Reranker;

fn synthetic_passages(n: usize) -> Vec<PassageRecord> {
    (0..n)
        .map(|i| PassageRecord {
            id: format!("chunk-{i}"),
            pmcid: format!("PMC{}", i / 4),
            pmid: (i % 3 == 0).then(|| format!("{}", 30_000 + i)),
            title: "Benchmark passage".into(),
            year: 2000 + (i % 26) as i32,
            text: String::new(),
            similarity: Similarity::new((i % 100) as f64 / 100.0),
            proteins: vec!["TP53".into()],
            theories: vec!["genomic_instability".into()],
        })
        .collect()
}

fn bench_rerank(c: &mut Criterion) {
    let reranker = Reranker::new(RerankWeights::default());
    let passages = synthetic_passages(1_000);
    let filters = SearchFilters {
        protein: Some("TP53".into()),
        theories: vec![],
    };

    c.bench_function("rerank_1000", |b| {
        b.iter(|| {
            let ranked = reranker.rerank(
                black_box(passages.clone()),
                black_box(&filters),
                50,
                2025,
            );
            black_box(ranked)
        })
    });
}

criterion_group!(benches, bench_rerank);
criterion_main!(benches);
