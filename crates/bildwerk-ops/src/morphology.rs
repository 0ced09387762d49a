// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Greyscale morphology with a fixed 5x5 all-ones structuring element, applied
// independently per channel so colour and greyscale images are handled alike.

use image::{ImageBuffer, Pixel};

use bildwerk_core::types::MorphMode;

/// Half-width of the 5x5 structuring element.
const KERNEL_RADIUS: i64 = 2;

/// Apply a morphological operation.
///
/// Opening (erosion then dilation) removes small bright specks; closing
/// (dilation then erosion) fills small dark holes. Neighbours outside the
/// image are ignored, so border pixels see a truncated window.
pub fn morphological<P>(image: &ImageBuffer<P, Vec<u8>>, mode: MorphMode) -> ImageBuffer<P, Vec<u8>>
where
    P: Pixel<Subpixel = u8>,
{
    match mode {
        MorphMode::Open => dilate(&erode(image)),
        MorphMode::Close => erode(&dilate(image)),
    }
}

/// Erosion: each output sample is the minimum over the structuring element.
pub fn erode<P>(image: &ImageBuffer<P, Vec<u8>>) -> ImageBuffer<P, Vec<u8>>
where
    P: Pixel<Subpixel = u8>,
{
    window_reduce(image, u8::MAX, |acc, v| acc.min(v))
}

/// Dilation: each output sample is the maximum over the structuring element.
pub fn dilate<P>(image: &ImageBuffer<P, Vec<u8>>) -> ImageBuffer<P, Vec<u8>>
where
    P: Pixel<Subpixel = u8>,
{
    window_reduce(image, u8::MIN, |acc, v| acc.max(v))
}

/// Scan the 5x5 window around every pixel, folding each channel with `merge`
/// starting from `init`. Out-of-bounds neighbours are skipped.
fn window_reduce<P, F>(
    image: &ImageBuffer<P, Vec<u8>>,
    init: u8,
    merge: F,
) -> ImageBuffer<P, Vec<u8>>
where
    P: Pixel<Subpixel = u8>,
    F: Fn(u8, u8) -> u8,
{
    let (width, height) = image.dimensions();
    let channels = usize::from(P::CHANNEL_COUNT);
    let mut output: ImageBuffer<P, Vec<u8>> = ImageBuffer::new(width, height);

    for y in 0..i64::from(height) {
        for x in 0..i64::from(width) {
            for c in 0..channels {
                let mut acc = init;
                for ky in -KERNEL_RADIUS..=KERNEL_RADIUS {
                    for kx in -KERNEL_RADIUS..=KERNEL_RADIUS {
                        let (nx, ny) = (x + kx, y + ky);
                        if nx < 0 || ny < 0 || nx >= i64::from(width) || ny >= i64::from(height) {
                            continue;
                        }
                        acc = merge(acc, image.get_pixel(nx as u32, ny as u32).channels()[c]);
                    }
                }
                output.get_pixel_mut(x as u32, y as u32).channels_mut()[c] = acc;
            }
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayImage, Luma, Rgb, RgbImage};

    /// Black canvas with a single bright pixel: opening must wipe the speck.
    #[test]
    fn open_removes_isolated_speck() {
        let mut img = GrayImage::from_pixel(16, 16, Luma([0u8]));
        img.put_pixel(8, 8, Luma([255u8]));

        let opened = morphological(&img, MorphMode::Open);
        assert!(opened.pixels().all(|p| p[0] == 0));
    }

    /// White canvas with a single dark pixel: closing must fill the hole.
    #[test]
    fn close_fills_isolated_hole() {
        let mut img = GrayImage::from_pixel(16, 16, Luma([255u8]));
        img.put_pixel(8, 8, Luma([0u8]));

        let closed = morphological(&img, MorphMode::Close);
        assert!(closed.pixels().all(|p| p[0] == 255));
    }

    /// Opening then closing an already-clean binary image changes nothing —
    /// the standard idempotence property for a fixed structuring element.
    #[test]
    fn open_then_close_is_idempotent_on_clean_binary() {
        // A solid 8x8 white block on black, comfortably larger than the
        // structuring element, centred in a 20x20 canvas.
        let mut img = GrayImage::from_pixel(20, 20, Luma([0u8]));
        for y in 6..14 {
            for x in 6..14 {
                img.put_pixel(x, y, Luma([255u8]));
            }
        }

        let opened = morphological(&img, MorphMode::Open);
        let round_trip = morphological(&opened, MorphMode::Close);
        assert_eq!(round_trip.as_raw(), opened.as_raw());
    }

    #[test]
    fn output_shape_matches_input() {
        let img = RgbImage::from_pixel(9, 7, Rgb([90, 120, 150]));
        let out = morphological(&img, MorphMode::Close);
        assert_eq!(out.dimensions(), (9, 7));
    }

    /// Channels are independent: dilating a pure-red speck must not bleed
    /// into the green or blue planes.
    #[test]
    fn channels_do_not_interact() {
        let mut img = RgbImage::from_pixel(11, 11, Rgb([0, 0, 0]));
        img.put_pixel(5, 5, Rgb([200, 0, 0]));

        let dilated = dilate(&img);
        assert_eq!(*dilated.get_pixel(4, 4), Rgb([200, 0, 0]));
        assert!(dilated.pixels().all(|p| p[1] == 0 && p[2] == 0));
    }
}
