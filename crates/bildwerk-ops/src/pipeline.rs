// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Image pipeline — chaining facade over the transform modules. Operates on a
// single in-memory image using the `image` and `imageproc` crates.

use image::DynamicImage;
use tracing::{debug, info, instrument};

use bildwerk_core::error::Result;
use bildwerk_core::types::{MorphMode, Region, ResizeAxis, SobelAxis, ThresholdMethod};

use crate::edges::{self, GradientImage};
use crate::{codec, geometry, morphology, smooth, threshold};

/// Image processing pipeline operating on a single in-memory image.
///
/// All operations are non-destructive: each method consumes `self` and returns
/// a new `ImagePipeline` wrapping the transformed image, enabling method
/// chaining.
///
/// ```ignore
/// let binary = ImagePipeline::open("scan.jpg")?
///     .crop(Region::new(200, 780, 100, 1000))?
///     .gaussian_smooth()
///     .adaptive_threshold(ThresholdMethod::Mean)
///     .to_png_bytes()?;
/// ```
#[derive(Clone, Debug)]
pub struct ImagePipeline {
    /// The current working image.
    image: DynamicImage,
}

impl ImagePipeline {
    // -- Construction ---------------------------------------------------------

    /// Load an image from a file path.
    pub fn open(path: impl AsRef<std::path::Path>) -> Result<Self> {
        Ok(Self {
            image: codec::open(path)?,
        })
    }

    /// Create a pipeline from raw encoded bytes (JPEG, PNG, etc.).
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        Ok(Self {
            image: codec::from_bytes(data)?,
        })
    }

    /// Wrap an already-decoded `DynamicImage`.
    pub fn from_dynamic(image: DynamicImage) -> Self {
        Self { image }
    }

    // -- Accessors ------------------------------------------------------------

    /// Current image width in pixels.
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    /// Current image height in pixels.
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Borrow the underlying `DynamicImage`.
    pub fn as_dynamic(&self) -> &DynamicImage {
        &self.image
    }

    /// Consume the pipeline and return the underlying `DynamicImage`.
    pub fn into_dynamic(self) -> DynamicImage {
        self.image
    }

    // -- Transformations (consume self, return new Self) -----------------------

    /// Crop to the given region. Bounds outside the image are an error.
    #[instrument(skip(self), fields(region = %region))]
    pub fn crop(self, region: Region) -> Result<Self> {
        info!(
            from_w = self.image.width(),
            from_h = self.image.height(),
            "Cropping image"
        );
        Ok(Self {
            image: geometry::crop(&self.image, region)?,
        })
    }

    /// Surround the image with a constant white border of the given width.
    #[instrument(skip(self), fields(width))]
    pub fn add_border(self, width: u32) -> Self {
        let bordered = geometry::add_border(&self.image.to_rgb8(), width);
        debug!(
            new_w = bordered.width(),
            new_h = bordered.height(),
            "Border added"
        );
        Self {
            image: DynamicImage::ImageRgb8(bordered),
        }
    }

    /// Resize so the chosen dimension equals `max_pixels`, preserving aspect
    /// ratio with cubic interpolation.
    #[instrument(skip(self), fields(axis = %axis, max_pixels))]
    pub fn resize(self, axis: ResizeAxis, max_pixels: u32) -> Result<Self> {
        info!(
            from_w = self.image.width(),
            from_h = self.image.height(),
            "Resizing image"
        );
        let resized = geometry::resize(&self.image, axis, max_pixels)?;
        debug!(
            new_w = resized.width(),
            new_h = resized.height(),
            "Resize complete"
        );
        Ok(Self { image: resized })
    }

    /// Morphological open or close with the fixed 5x5 structuring element.
    ///
    /// A greyscale working image stays single-channel; anything else is
    /// processed per RGB channel.
    #[instrument(skip(self), fields(mode = %mode))]
    pub fn morphology(self, mode: MorphMode) -> Self {
        info!("Applying morphological operation");
        let image = match self.image {
            DynamicImage::ImageLuma8(gray) => {
                DynamicImage::ImageLuma8(morphology::morphological(&gray, mode))
            }
            other => DynamicImage::ImageRgb8(morphology::morphological(&other.to_rgb8(), mode)),
        };
        Self { image }
    }

    /// Gaussian smoothing with the fixed small kernel.
    #[instrument(skip(self))]
    pub fn gaussian_smooth(self) -> Self {
        info!("Applying Gaussian smoothing");
        let image = match self.image {
            DynamicImage::ImageLuma8(gray) => {
                DynamicImage::ImageLuma8(smooth::gaussian_luma(&gray))
            }
            other => DynamicImage::ImageRgb8(smooth::gaussian(&other.to_rgb8())),
        };
        Self { image }
    }

    /// Convert to greyscale and binarize against the local neighbourhood
    /// statistic. The result holds only the values {0, 255}.
    #[instrument(skip(self), fields(method = %method))]
    pub fn adaptive_threshold(self, method: ThresholdMethod) -> Self {
        info!("Applying adaptive threshold");
        Self {
            image: DynamicImage::ImageLuma8(threshold::adaptive(&self.image.to_luma8(), method)),
        }
    }

    /// Convert to greyscale and take the first-order Sobel derivative along
    /// the given axis. Terminal operation: the signed float gradient is
    /// returned directly and the caller handles any scaling or casting.
    #[instrument(skip(self), fields(axis = %axis))]
    pub fn sobel(&self, axis: SobelAxis) -> GradientImage {
        debug!("Computing Sobel derivative");
        edges::sobel(&self.image.to_luma8(), axis)
    }

    /// Convert to greyscale and apply the Laplacian; the absolute response is
    /// folded back into an 8-bit single-channel working image.
    #[instrument(skip(self))]
    pub fn laplacian(self) -> Self {
        info!("Applying Laplacian filter");
        Self {
            image: DynamicImage::ImageLuma8(edges::laplacian(&self.image.to_luma8())),
        }
    }

    /// Convert the working image to greyscale (luma).
    #[instrument(skip(self))]
    pub fn grayscale(self) -> Self {
        debug!("Converting to grayscale");
        Self {
            image: self.image.grayscale(),
        }
    }

    // -- Output ---------------------------------------------------------------

    /// Encode the current image as PNG bytes.
    pub fn to_png_bytes(&self) -> Result<Vec<u8>> {
        codec::to_png_bytes(&self.image)
    }

    /// Write the image to a file. The format is inferred from the extension.
    pub fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        codec::save(&self.image, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bildwerk_core::error::BildwerkError;
    use image::{Rgb, RgbImage};

    fn mid_grey(width: u32, height: u32) -> ImagePipeline {
        ImagePipeline::from_dynamic(DynamicImage::ImageRgb8(RgbImage::from_pixel(
            width,
            height,
            Rgb([128, 128, 128]),
        )))
    }

    /// Crop followed by border: final extent is the cropped extent plus twice
    /// the border width on each axis.
    #[test]
    fn crop_border_dimensional_identity() {
        let result = mid_grey(12, 10)
            .crop(Region::new(2, 8, 3, 9))
            .unwrap()
            .add_border(5);
        assert_eq!(result.width(), 6 + 10);
        assert_eq!(result.height(), 6 + 10);
    }

    #[test]
    fn out_of_range_crop_propagates() {
        let err = mid_grey(4, 4).crop(Region::new(0, 9, 0, 2)).unwrap_err();
        assert!(matches!(err, BildwerkError::CropOutOfRange { .. }));
    }

    /// Greyscale-dependent stages leave a single-channel working image, and
    /// later stages keep it that way.
    #[test]
    fn threshold_then_morphology_stays_single_channel() {
        let result = mid_grey(24, 24)
            .adaptive_threshold(ThresholdMethod::Mean)
            .morphology(MorphMode::Open);
        assert!(matches!(
            result.as_dynamic(),
            DynamicImage::ImageLuma8(_)
        ));
        assert_eq!(result.width(), 24);
        assert_eq!(result.height(), 24);
    }

    #[test]
    fn grayscale_produces_single_channel() {
        let result = mid_grey(8, 8).grayscale();
        assert!(matches!(result.as_dynamic(), DynamicImage::ImageLuma8(_)));
    }

    #[test]
    fn sobel_matches_greyscale_dimensions() {
        let pipeline = mid_grey(9, 13);
        let grad = pipeline.sobel(SobelAxis::Horizontal);
        assert_eq!(grad.dimensions(), (9, 13));
    }

    #[test]
    fn full_showcase_chain_round_trips_through_png() {
        let bytes = mid_grey(20, 20)
            .gaussian_smooth()
            .morphology(MorphMode::Close)
            .laplacian()
            .to_png_bytes()
            .unwrap();

        let reloaded = ImagePipeline::from_bytes(&bytes).unwrap();
        assert_eq!(reloaded.width(), 20);
        assert_eq!(reloaded.height(), 20);
    }
}
