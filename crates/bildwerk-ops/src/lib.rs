// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// bildwerk-ops — Classical image transforms for Bildwerk.
//
// Provides stateless image-to-image operations (crop, border, resize,
// morphological open/close, Gaussian smoothing, adaptive thresholding, Sobel
// and Laplacian edge detection), the image codec boundary, and a chaining
// pipeline facade over all of them.

pub mod codec;
pub mod edges;
pub mod geometry;
pub mod morphology;
pub mod pipeline;
pub mod smooth;
pub mod threshold;

// Re-export the primary entry points so callers can use `bildwerk_ops::ImagePipeline` etc.
pub use edges::GradientImage;
pub use pipeline::ImagePipeline;
