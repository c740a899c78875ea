use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use firmware_assets::asset_pipeline::{
    emit_byte_array, emit_gamma_table, BlobToHeaderPipeline, EmbedConfig, GammaConfig,
    GammaParams, GammaTable,
};
use std::hint::black_box;
use std::io::Cursor;

fn generate_mock_blob(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i.wrapping_mul(31) % 256) as u8).collect()
}

fn benchmark_blob_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("emit_by_size");

    let sizes = vec![
        (1_000, "1KB"),
        (30_000, "30KB"),
        (200_000, "200KB"),
    ];

    for (len, label) in sizes {
        let blob = generate_mock_blob(len);

        group.bench_with_input(BenchmarkId::from_parameter(label), &blob, |b, blob| {
            let config = EmbedConfig::default();
            b.iter(|| emit_byte_array(black_box(blob), &config));
        });
    }

    group.finish();
}

fn benchmark_pipeline_write(c: &mut Criterion) {
    let blob = generate_mock_blob(30_000);
    let pipeline = BlobToHeaderPipeline::new(EmbedConfig::default());

    c.bench_function("pipeline_convert_30KB", |b| {
        b.iter(|| {
            let mut output = Cursor::new(Vec::with_capacity(160_000));
            let _ = pipeline.convert(black_box(&blob), &mut output);
        });
    });
}

fn benchmark_gamma(c: &mut Criterion) {
    let mut group = c.benchmark_group("gamma_table");

    for max_in in [255u32, 4095] {
        let params = GammaParams { gamma: 2.8, max_in, max_out: 255 };
        group.bench_with_input(BenchmarkId::from_parameter(max_in), &params, |b, params| {
            let config = GammaConfig::default();
            b.iter(|| {
                let table = GammaTable::compute(black_box(*params)).unwrap();
                emit_gamma_table(&table, &config)
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_blob_sizes,
    benchmark_pipeline_write,
    benchmark_gamma
);
criterion_main!(benches);
