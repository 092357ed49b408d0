//! Performance benchmarks for rs-dedup.
//!
//! Run with: `cargo bench`
//!
//! Benchmarks include:
//! - Cache churn with distinct keys (worst case: every insert evicts)
//! - Duplicate detection over a mixed stream of repeats and novel text
//! - Content fingerprinting throughput on a paragraph-sized input

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use rs_dedup::fingerprint::content_fingerprint;
use rs_dedup::{DuplicateDetector, FrequencyCache, Options};

const SAMPLE_PARAGRAPH: &str = "This is a paragraph of meaningful article content. \
    It contains enough significant words to exercise the fingerprint tokenizer \
    and the normalization step under realistic conditions, similar to what a \
    content extractor would feed through the deduplication filter.";

fn bench_cache_churn(c: &mut Criterion) {
    let keys: Vec<String> = (0..2048).map(|i| format!("cache key number {i}")).collect();

    c.bench_function("cache_churn_distinct_keys", |b| {
        b.iter(|| {
            #[allow(clippy::unwrap_used)]
            let mut cache = FrequencyCache::with_capacity(1024).unwrap();
            for key in &keys {
                cache.put(black_box(key), 1);
            }
            cache.len()
        });
    });
}

fn bench_duplicate_detection(c: &mut Criterion) {
    let novel: Vec<String> = (0..256)
        .map(|i| format!("{SAMPLE_PARAGRAPH} variant number {i}"))
        .collect();

    c.bench_function("detect_mixed_stream", |b| {
        b.iter(|| {
            #[allow(clippy::unwrap_used)]
            let mut detector = DuplicateDetector::new(&Options::default()).unwrap();
            let mut repeats = 0usize;
            for text in &novel {
                // Interleave a chronic repeat with novel paragraphs.
                if detector.is_duplicate(black_box(SAMPLE_PARAGRAPH)) {
                    repeats += 1;
                }
                detector.is_duplicate(black_box(text));
            }
            repeats
        });
    });
}

fn bench_fingerprint(c: &mut Criterion) {
    let mut group = c.benchmark_group("fingerprint");
    group.throughput(Throughput::Bytes(SAMPLE_PARAGRAPH.len() as u64));
    group.bench_function("paragraph", |b| {
        b.iter(|| content_fingerprint(black_box(SAMPLE_PARAGRAPH)));
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_cache_churn,
    bench_duplicate_detection,
    bench_fingerprint
);
criterion_main!(benches);
