// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Image codec boundary — decode files or byte buffers into in-memory images,
// encode back to PNG. Delegates all format handling to the `image` crate.
//
// Decoded colour data is in RGB channel order; every operation in this crate
// assumes that convention, so this module is the single normalisation point.

use image::{DynamicImage, ImageFormat};
use tracing::{debug, info, instrument};

use bildwerk_core::error::{BildwerkError, Result};

/// Load an image from a file path.
#[instrument(skip_all, fields(path = %path.as_ref().display()))]
pub fn open(path: impl AsRef<std::path::Path>) -> Result<DynamicImage> {
    let img = image::open(path.as_ref()).map_err(|err| {
        BildwerkError::Codec(format!("failed to open {}: {}", path.as_ref().display(), err))
    })?;
    info!(width = img.width(), height = img.height(), "Image loaded");
    Ok(img)
}

/// Decode an image from raw encoded bytes (JPEG, PNG, etc.).
#[instrument(skip(data), fields(data_len = data.len()))]
pub fn from_bytes(data: &[u8]) -> Result<DynamicImage> {
    let img = image::load_from_memory(data)
        .map_err(|err| BildwerkError::Codec(format!("failed to decode image: {}", err)))?;
    debug!(
        width = img.width(),
        height = img.height(),
        "Image decoded from bytes"
    );
    Ok(img)
}

/// Encode an image as PNG bytes.
pub fn to_png_bytes(image: &DynamicImage) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    let mut cursor = std::io::Cursor::new(&mut buffer);
    image
        .write_to(&mut cursor, ImageFormat::Png)
        .map_err(|err| BildwerkError::Codec(format!("PNG encoding failed: {}", err)))?;
    Ok(buffer)
}

/// Write an image to a file. The format is inferred from the file extension.
pub fn save(image: &DynamicImage, path: impl AsRef<std::path::Path>) -> Result<()> {
    image.save(path.as_ref()).map_err(|err| {
        BildwerkError::Codec(format!(
            "failed to save image to {}: {}",
            path.as_ref().display(),
            err
        ))
    })
}
