// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Adaptive thresholding — binarize each pixel against a statistic of its
// 11x11 neighbourhood (plain mean or Gaussian-weighted mean) minus a fixed
// offset. The mean path uses an integral image; the Gaussian path a
// separable weighted sum.

use image::{GrayImage, Luma};

use bildwerk_core::types::ThresholdMethod;

/// Neighbourhood half-width; the window is 11x11.
const BLOCK_RADIUS: u32 = 5;

/// Constant subtracted from the neighbourhood statistic.
const OFFSET: f64 = 2.0;

/// Binarize a greyscale image with a locally adaptive threshold.
///
/// Each output pixel is 255 where the input exceeds its neighbourhood
/// statistic minus [`OFFSET`], and 0 otherwise, so the result contains only
/// the two values {0, 255}.
pub fn adaptive(gray: &GrayImage, method: ThresholdMethod) -> GrayImage {
    let stats = match method {
        ThresholdMethod::Mean => local_means(gray),
        ThresholdMethod::Gaussian => gaussian_weighted_means(gray),
    };

    let (width, height) = gray.dimensions();
    let mut output = GrayImage::new(width, height);
    for y in 0..height {
        for x in 0..width {
            let stat = stats[(y * width + x) as usize];
            let value = f64::from(gray.get_pixel(x, y).0[0]);
            let binary = if value > stat - OFFSET { 255u8 } else { 0u8 };
            output.put_pixel(x, y, Luma([binary]));
        }
    }
    output
}

// -- Plain mean (integral image) ----------------------------------------------

/// Mean of the neighbourhood window around every pixel, with the window
/// clipped to the image bounds.
fn local_means(gray: &GrayImage) -> Vec<f64> {
    let (width, height) = gray.dimensions();
    let integral = compute_integral_image(gray);

    let mut means = Vec::with_capacity((width * height) as usize);
    for y in 0..height {
        for x in 0..width {
            means.push(region_mean(&integral, width, height, x, y, BLOCK_RADIUS));
        }
    }
    means
}

/// Compute the integral (summed-area table) of a greyscale image.
///
/// `integral[y * (width+1) + x]` contains the sum of all pixel values in the
/// rectangle [0, 0) to (x, y) (exclusive on both axes). The table has
/// dimensions `(width+1) x (height+1)` with a zero-padded border.
fn compute_integral_image(gray: &GrayImage) -> Vec<u64> {
    let (w, h) = gray.dimensions();
    let stride = (w + 1) as usize;
    let mut table = vec![0u64; stride * (h + 1) as usize];

    for y in 0..h {
        let mut row_sum: u64 = 0;
        for x in 0..w {
            row_sum += gray.get_pixel(x, y).0[0] as u64;
            let idx = (y + 1) as usize * stride + (x + 1) as usize;
            let above = y as usize * stride + (x + 1) as usize;
            table[idx] = row_sum + table[above];
        }
    }

    table
}

/// Mean pixel value within a square region centred on (cx, cy) with the given
/// radius, using the precomputed integral image.
fn region_mean(
    integral: &[u64],
    img_width: u32,
    img_height: u32,
    cx: u32,
    cy: u32,
    radius: u32,
) -> f64 {
    let stride = (img_width + 1) as usize;

    // Clamp the region to image bounds.
    let x1 = cx.saturating_sub(radius) as usize;
    let y1 = cy.saturating_sub(radius) as usize;
    let x2 = ((cx + radius + 1) as usize).min(img_width as usize);
    let y2 = ((cy + radius + 1) as usize).min(img_height as usize);

    let area = ((x2 - x1) * (y2 - y1)) as f64;
    if area == 0.0 {
        return 128.0;
    }

    // Summed-area table lookup: S = I[y2][x2] - I[y1][x2] - I[y2][x1] + I[y1][x1]
    let sum = integral[y2 * stride + x2] as f64
        - integral[y1 * stride + x2] as f64
        - integral[y2 * stride + x1] as f64
        + integral[y1 * stride + x1] as f64;

    sum / area
}

// -- Gaussian-weighted mean ----------------------------------------------------

/// Gaussian-weighted mean of the neighbourhood window around every pixel,
/// computed as two separable 11-tap passes with edge samples replicated.
fn gaussian_weighted_means(gray: &GrayImage) -> Vec<f64> {
    let (width, height) = gray.dimensions();
    let window = gaussian_window();

    // Horizontal pass.
    let mut rows = vec![0.0f64; (width * height) as usize];
    for y in 0..height {
        for x in 0..width {
            let mut acc = 0.0;
            for (k, weight) in window.iter().enumerate() {
                let nx = clamp_index(i64::from(x) + k as i64 - i64::from(BLOCK_RADIUS), width);
                acc += weight * f64::from(gray.get_pixel(nx, y).0[0]);
            }
            rows[(y * width + x) as usize] = acc;
        }
    }

    // Vertical pass over the horizontal sums.
    let mut means = vec![0.0f64; (width * height) as usize];
    for y in 0..height {
        for x in 0..width {
            let mut acc = 0.0;
            for (k, weight) in window.iter().enumerate() {
                let ny = clamp_index(i64::from(y) + k as i64 - i64::from(BLOCK_RADIUS), height);
                acc += weight * rows[(ny * width + x) as usize];
            }
            means[(y * width + x) as usize] = acc;
        }
    }

    means
}

/// Normalised 11-tap Gaussian window. Sigma follows the usual auto-derivation
/// for the block size: 0.3 * ((11 - 1) * 0.5 - 1) + 0.8 = 2.0.
fn gaussian_window() -> [f64; (2 * BLOCK_RADIUS + 1) as usize] {
    const SIGMA: f64 = 2.0;
    let mut window = [0.0f64; (2 * BLOCK_RADIUS + 1) as usize];
    let mut sum = 0.0;
    for (i, slot) in window.iter_mut().enumerate() {
        let d = i as f64 - f64::from(BLOCK_RADIUS);
        *slot = (-(d * d) / (2.0 * SIGMA * SIGMA)).exp();
        sum += *slot;
    }
    for slot in window.iter_mut() {
        *slot /= sum;
    }
    window
}

/// Replicate-border index clamp.
fn clamp_index(i: i64, len: u32) -> u32 {
    i.clamp(0, i64::from(len) - 1) as u32
}
