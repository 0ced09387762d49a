// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Criterion benchmarks for the bildwerk-ops transforms. Benchmarks adaptive
// thresholding and morphological opening on a small synthetic test image.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use image::{GrayImage, Luma, Rgb, RgbImage};

use bildwerk_core::types::{MorphMode, ThresholdMethod};
use bildwerk_ops::{morphology, threshold};

// ---------------------------------------------------------------------------
// Benchmarks
// ---------------------------------------------------------------------------

/// Dark background with a bright rectangle — enough structure that the
/// adaptive statistic actually varies across the image.
fn synthetic_gray(width: u32, height: u32) -> GrayImage {
    let mut img = GrayImage::from_pixel(width, height, Luma([30u8]));
    for y in height / 6..height * 5 / 6 {
        for x in width / 6..width * 5 / 6 {
            img.put_pixel(x, y, Luma([240u8]));
        }
    }
    img
}

fn bench_adaptive_threshold(c: &mut Criterion) {
    let img = synthetic_gray(256, 256);

    c.bench_function("adaptive_threshold mean (256x256)", |b| {
        b.iter(|| black_box(threshold::adaptive(black_box(&img), ThresholdMethod::Mean)));
    });
    c.bench_function("adaptive_threshold gaussian (256x256)", |b| {
        b.iter(|| black_box(threshold::adaptive(black_box(&img), ThresholdMethod::Gaussian)));
    });
}

fn bench_morphology(c: &mut Criterion) {
    let img = RgbImage::from_pixel(256, 256, Rgb([128, 64, 200]));

    c.bench_function("morphological open rgb (256x256)", |b| {
        b.iter(|| black_box(morphology::morphological(black_box(&img), MorphMode::Open)));
    });
}

criterion_group!(benches, bench_adaptive_threshold, bench_morphology);
criterion_main!(benches);
