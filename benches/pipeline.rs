//! Benchmarks for the swatch pipeline.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;

use swatch::extract::{extract_palette, histogram, ExtractOptions, PixelBuffer, MAX_DIMENSION};
use swatch::render::GradientSpec;
use swatch::{serialize, Catalog, ColorModel, Palette};

/// A smooth two-axis colour ramp at the extractor's size cap.
fn ramp(size: u32) -> PixelBuffer {
    let mut data = Vec::with_capacity((size * size * 4) as usize);
    for y in 0..size {
        for x in 0..size {
            data.extend_from_slice(&[(x * 255 / size) as u8, (y * 255 / size) as u8, 128, 255]);
        }
    }
    PixelBuffer::from_raw(size, size, data).unwrap()
}

// -- Extraction benchmarks --

fn bench_extraction(c: &mut Criterion) {
    let mut group = c.benchmark_group("extraction");
    let options = ExtractOptions::default();
    let buffer = ramp(MAX_DIMENSION);

    group.bench_function("histogram_200", |b| {
        b.iter(|| histogram(black_box(&buffer), &options))
    });

    group.bench_function("extract_palette_200", |b| {
        b.iter(|| extract_palette(black_box(&buffer), &options))
    });

    let every_pixel = ExtractOptions {
        pixel_step: 1,
        ..ExtractOptions::default()
    };
    group.bench_function("extract_palette_200_unsampled", |b| {
        b.iter(|| extract_palette(black_box(&buffer), &every_pixel))
    });

    group.finish();
}

// -- Palette and token benchmarks --

fn bench_tokens(c: &mut Criterion) {
    let mut group = c.benchmark_group("tokens");
    let catalog = Catalog::builtin().unwrap();

    group.bench_function("regenerate_default", |b| {
        let mut rng = StdRng::seed_from_u64(1);
        let palette = Palette::generate(ColorModel::Default, &mut rng);
        b.iter(|| palette.regenerate(black_box(ColorModel::Default), &mut rng))
    });

    let palette = Palette::generate(ColorModel::Triadic, &mut StdRng::seed_from_u64(2));
    let font_scale = catalog.font_scale("golden-ratio").unwrap();
    let typography = catalog.typography_pairing("inter-system").unwrap();
    let gradient = catalog.gradient("sunset-linear").unwrap();
    let texture = catalog.texture("waves").unwrap();

    group.bench_function("serialize_css", |b| {
        b.iter(|| serialize(black_box(&palette), font_scale, typography, gradient, texture))
    });

    group.finish();
}

// -- Rendering benchmarks --

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");
    let catalog = Catalog::builtin().unwrap();
    let linear = GradientSpec::from_gradient(catalog.gradient("ocean-linear").unwrap()).unwrap();

    group.bench_function("rasterize_400x200", |b| {
        b.iter(|| black_box(&linear).rasterize(400, 200).unwrap())
    });

    group.finish();
}

criterion_group!(benches, bench_extraction, bench_tokens, bench_render);
criterion_main!(benches);
