// SPDX-License-Identifier: MPL-2.0
use criterion::{criterion_group, criterion_main, Criterion};
use skysight::application::port::SegmentationSource;
use skysight::domain::gallery::{SampleId, SAMPLE_IMAGES};
use skysight::infrastructure::embedded::{asset_bytes, parse_document, response_path};
use skysight::infrastructure::EmbeddedSource;
use std::hint::black_box;

fn segmentation_loading_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("segmentation_loading");

    let id = SampleId::new(3);
    let Some(document) = asset_bytes(&response_path(id)) else {
        eprintln!("bundled document for sample {id} is missing");
        return;
    };

    group.bench_function("parse_document", |b| {
        b.iter(|| {
            let _ = black_box(parse_document(black_box(id), black_box(&document)));
        });
    });

    group.bench_function("resolve_all_samples", |b| {
        b.iter(|| {
            for sample in &SAMPLE_IMAGES {
                let _ = black_box(EmbeddedSource.resolve(sample.id));
            }
        });
    });

    group.finish();
}

criterion_group!(benches, segmentation_loading_benchmark);
criterion_main!(benches);
