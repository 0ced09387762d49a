// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Gaussian smoothing — delegates the convolution to imageproc.

use image::{GrayImage, RgbImage};
use imageproc::filter::gaussian_blur_f32;

/// Sigma a 5x5 Gaussian kernel implies under the usual auto-derivation
/// 0.3 * ((k - 1) * 0.5 - 1) + 0.8 with k = 5.
const SMOOTH_SIGMA: f32 = 1.1;

/// Smooth a colour image with the fixed small Gaussian.
///
/// Removes high-frequency content (noise) while keeping the overall
/// structure; shape and sample type are unchanged.
pub fn gaussian(image: &RgbImage) -> RgbImage {
    gaussian_blur_f32(image, SMOOTH_SIGMA)
}

/// Greyscale variant of [`gaussian`].
pub fn gaussian_luma(image: &GrayImage) -> GrayImage {
    gaussian_blur_f32(image, SMOOTH_SIGMA)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Luma, Rgb};

    #[test]
    fn shape_is_preserved() {
        let img = RgbImage::from_pixel(13, 9, Rgb([40, 80, 120]));
        let smoothed = gaussian(&img);
        assert_eq!(smoothed.dimensions(), (13, 9));
    }

    /// A constant image is a fixed point of any normalised blur.
    #[test]
    fn uniform_image_is_unchanged() {
        let img = GrayImage::from_pixel(12, 12, Luma([77u8]));
        let smoothed = gaussian_luma(&img);
        assert!(smoothed.pixels().all(|p| p[0] == 77));
    }

    /// Blurring must strictly reduce an isolated extreme value.
    #[test]
    fn peak_is_attenuated() {
        let mut img = GrayImage::from_pixel(15, 15, Luma([0u8]));
        img.put_pixel(7, 7, Luma([255u8]));

        let smoothed = gaussian_luma(&img);
        assert!(smoothed.get_pixel(7, 7)[0] < 255);
        // Energy spreads to the neighbours.
        assert!(smoothed.get_pixel(8, 7)[0] > 0);
    }
}
