use criterion::{Criterion, criterion_group, criterion_main};
mod common;

fn bench_tokenize(c: &mut Criterion) {
    let mut group = c.benchmark_group("parsing");
    group.sample_size(10);

    let content = common::generate_report(100);
    group.bench_function("tokenize", |b| {
        b.iter(|| {
            let blocks = repolens_engine::tokenize(std::hint::black_box(&content));
            std::hint::black_box(blocks);
        });
    });

    group.finish();
}

criterion_group!(benches, bench_tokenize);
criterion_main!(benches);
