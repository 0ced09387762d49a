// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Edge detection — first-order Sobel derivatives and the Laplacian, delegated
// to imageproc's 3x3 kernels.

use image::{GrayImage, ImageBuffer, Luma};
use imageproc::filter::laplacian_filter;
use imageproc::gradients::{horizontal_sobel, vertical_sobel};

use bildwerk_core::types::SobelAxis;

/// Single-channel signed gradient image. The 3x3 Sobel response on 8-bit
/// input is exact in this representation; callers scale or cast as needed.
pub type GradientImage = ImageBuffer<Luma<f64>, Vec<f64>>;

/// First-order Sobel derivative of a greyscale image along the given axis.
///
/// `SobelAxis::Horizontal` differentiates along the rows and so responds to
/// horizontal edges; in kernel terms that is the library's *vertical* Sobel,
/// and vice versa.
pub fn sobel(gray: &GrayImage, axis: SobelAxis) -> GradientImage {
    let gradient = match axis {
        SobelAxis::Horizontal => vertical_sobel(gray),
        SobelAxis::Vertical => horizontal_sobel(gray),
    };

    let mut output = GradientImage::new(gray.width(), gray.height());
    for (x, y, pixel) in gradient.enumerate_pixels() {
        output.put_pixel(x, y, Luma([f64::from(pixel.0[0])]));
    }
    output
}

/// Second-order Laplacian of a greyscale image: absolute value of the filter
/// response, saturating-cast back to 8 bits.
pub fn laplacian(gray: &GrayImage) -> GrayImage {
    let response = laplacian_filter(gray);

    let mut output = GrayImage::new(gray.width(), gray.height());
    for (x, y, pixel) in response.enumerate_pixels() {
        let magnitude = pixel.0[0].unsigned_abs().min(255) as u8;
        output.put_pixel(x, y, Luma([magnitude]));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vertical_step_edge(width: u32, height: u32) -> GrayImage {
        // Dark left half, bright right half: a vertical edge down the middle.
        GrayImage::from_fn(width, height, |x, _| {
            Luma([if x < width / 2 { 0u8 } else { 200u8 }])
        })
    }

    #[test]
    fn outputs_are_single_channel_with_input_shape() {
        let img = vertical_step_edge(12, 9);

        let grad = sobel(&img, SobelAxis::Vertical);
        assert_eq!(grad.dimensions(), (12, 9));

        let lap = laplacian(&img);
        assert_eq!(lap.dimensions(), (12, 9));
    }

    /// Derivatives of a constant image are zero everywhere.
    #[test]
    fn uniform_image_has_no_response() {
        let img = GrayImage::from_pixel(10, 10, Luma([90u8]));

        for axis in [SobelAxis::Horizontal, SobelAxis::Vertical] {
            let grad = sobel(&img, axis);
            assert!(grad.pixels().all(|p| p.0[0] == 0.0));
        }
        let lap = laplacian(&img);
        assert!(lap.pixels().all(|p| p.0[0] == 0));
    }

    /// A vertical edge is a gradient along the columns: the vertical-axis
    /// derivative must respond and the horizontal-axis one must not.
    #[test]
    fn sobel_axes_discriminate_edge_orientation() {
        let img = vertical_step_edge(16, 16);

        let across = sobel(&img, SobelAxis::Vertical);
        assert!(across.pixels().any(|p| p.0[0] != 0.0));

        let along = sobel(&img, SobelAxis::Horizontal);
        assert!(along.pixels().all(|p| p.0[0] == 0.0));
    }

    /// The Sobel response is signed: rising and falling edges have opposite
    /// polarity in the float output.
    #[test]
    fn sobel_output_is_signed() {
        // Bright stripe in the middle: rising edge on its left, falling on
        // its right.
        let img = GrayImage::from_fn(18, 6, |x, _| Luma([if (6..12).contains(&x) { 200u8 } else { 0u8 }]));

        let grad = sobel(&img, SobelAxis::Vertical);
        let values: Vec<f64> = grad.pixels().map(|p| p.0[0]).collect();
        assert!(values.iter().any(|&v| v > 0.0));
        assert!(values.iter().any(|&v| v < 0.0));
    }

    #[test]
    fn laplacian_flags_the_edge_band_only() {
        let img = vertical_step_edge(16, 16);
        let lap = laplacian(&img);

        // Flat interiors on both sides have zero second derivative.
        assert_eq!(lap.get_pixel(1, 8)[0], 0);
        assert_eq!(lap.get_pixel(14, 8)[0], 0);
        // The transition column does not.
        assert!((0..16).any(|y| lap.get_pixel(8, y)[0] > 0));
    }
}
