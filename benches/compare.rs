use criterion::{criterion_group, criterion_main, Criterion};
use ctph::similarity::edit::edit_distance;
use ctph::{compare, digest};

fn text(lines: std::ops::Range<usize>) -> Vec<u8> {
    lines
        .flat_map(|i| format!("line {i}: the quick brown fox jumps over the lazy dog\n").into_bytes())
        .collect()
}

fn bench_compare(c: &mut Criterion) {
    let Ok(a) = digest(&text(0..200)) else { return };
    let Ok(b) = digest(&text(10..210)) else { return };
    let (sa, sb) = (a.to_string(), b.to_string());

    let mut group = c.benchmark_group("compare");
    group.bench_function("parse_and_compare", |bench| bench.iter(|| compare(&sa, &sb)));
    group.bench_function("compare_hashes", |bench| bench.iter(|| a.compare(&b)));
    group.bench_function("edit_distance_64", |bench| {
        let x = [b'A'; 64];
        let y = [b'B'; 64];
        bench.iter(|| edit_distance(&x, &y))
    });
    group.finish();
}

criterion_group!(benches, bench_compare);
criterion_main!(benches);
