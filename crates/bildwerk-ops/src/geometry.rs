// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Geometric transforms — crop, constant white border, aspect-preserving
// resize.

use image::imageops::{self, FilterType};
use image::{DynamicImage, Rgb, RgbImage};

use bildwerk_core::error::{BildwerkError, Result};
use bildwerk_core::types::{Region, ResizeAxis};

/// Border fill colour (opaque white).
const BORDER_FILL: Rgb<u8> = Rgb([255, 255, 255]);

/// Crop a rectangular region out of an image, preserving all channels.
///
/// Bounds are validated against the image extent; a region that is empty on
/// either axis or reaches past the image is rejected, never clamped.
pub fn crop(image: &DynamicImage, region: Region) -> Result<DynamicImage> {
    let (width, height) = (image.width(), image.height());

    let valid = region.y_min < region.y_max
        && region.y_max <= height
        && region.x_min < region.x_max
        && region.x_max <= width;
    if !valid {
        return Err(BildwerkError::CropOutOfRange {
            region,
            width,
            height,
        });
    }

    Ok(image.crop_imm(region.x_min, region.y_min, region.width(), region.height()))
}

/// Pad all four sides of an image with a constant white border of the given
/// width. The output grows by `2 * width` in each dimension.
pub fn add_border(image: &RgbImage, width: u32) -> RgbImage {
    let (w, h) = image.dimensions();
    let mut canvas = RgbImage::from_pixel(w + 2 * width, h + 2 * width, BORDER_FILL);
    imageops::replace(&mut canvas, image, i64::from(width), i64::from(width));
    canvas
}

/// Resize so that the chosen dimension is exactly `max_pixels`, scaling the
/// other proportionally (integer-truncated) to preserve aspect ratio.
/// Resampling uses cubic (Catmull-Rom) interpolation.
pub fn resize(image: &DynamicImage, axis: ResizeAxis, max_pixels: u32) -> Result<DynamicImage> {
    if max_pixels == 0 {
        return Err(BildwerkError::InvalidArgument(
            "resize target must be positive".into(),
        ));
    }

    let (w, h) = (image.width(), image.height());
    let (out_w, out_h) = match axis {
        ResizeAxis::Height => {
            let out_w = (u64::from(max_pixels) * u64::from(w) / u64::from(h)) as u32;
            (out_w, max_pixels)
        }
        ResizeAxis::Width => {
            let out_h = (u64::from(max_pixels) * u64::from(h) / u64::from(w)) as u32;
            (max_pixels, out_h)
        }
    };

    if out_w == 0 || out_h == 0 {
        return Err(BildwerkError::InvalidArgument(format!(
            "resizing {w}x{h} to {} {max_pixels} collapses the other dimension to zero",
            axis.as_str()
        )));
    }

    Ok(image.resize_exact(out_w, out_h, FilterType::CatmullRom))
}
