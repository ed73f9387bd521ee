use std::hint::black_box;
use std::sync::Arc;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use transeval::embedding::{EMBEDDING_DIM, SentenceEmbedder, TextEmbedder};
use transeval::scoring::{SimilarityScorer, cosine_similarity};

fn unit_vector(dim: usize, seed: u32) -> Vec<f32> {
    let raw: Vec<f32> = (0..dim)
        .map(|i| ((i as u32).wrapping_mul(2_654_435_761).wrapping_add(seed) % 1000) as f32 - 500.0)
        .collect();
    let norm = raw.iter().map(|x| x * x).sum::<f32>().sqrt();
    raw.into_iter().map(|x| x / norm).collect()
}

fn bench_cosine(c: &mut Criterion) {
    let mut group = c.benchmark_group("cosine_similarity");

    for dim in [128usize, EMBEDDING_DIM, 1024] {
        let a = unit_vector(dim, 1);
        let b = unit_vector(dim, 2);
        group.throughput(Throughput::Elements(dim as u64));
        group.bench_with_input(BenchmarkId::from_parameter(dim), &dim, |bencher, _| {
            bencher.iter(|| cosine_similarity(black_box(&a), black_box(&b)))
        });
    }

    group.finish();
}

fn bench_stub_scorer(c: &mut Criterion) {
    let embedder = Arc::new(SentenceEmbedder::stub().expect("stub embedder"));
    let scorer = SimilarityScorer::new(embedder.clone());

    let reference = "こんにちは 世界。今日はいい天気ですね。";
    let candidate = "こんにちは、世界。今日は良い天気です。";

    c.bench_function("stub_embed", |b| {
        b.iter(|| embedder.embed(black_box(reference)))
    });

    c.bench_function("stub_similarity", |b| {
        b.iter(|| scorer.similarity(black_box(reference), black_box(candidate)))
    });
}

criterion_group!(benches, bench_cosine, bench_stub_scorer);
criterion_main!(benches);
