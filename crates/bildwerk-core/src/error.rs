// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error types for Bildwerk.

use thiserror::Error;

use crate::types::Region;

/// Top-level error type for all Bildwerk operations.
#[derive(Debug, Error)]
pub enum BildwerkError {
    // -- Contract errors --
    #[error("unrecognised {what} selector: {value:?}")]
    UnknownSelector { what: &'static str, value: String },

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("crop region ({region}) out of range for {width}x{height} image")]
    CropOutOfRange {
        region: Region,
        width: u32,
        height: u32,
    },

    // -- Codec errors --
    #[error("image codec error: {0}")]
    Codec(String),

    // -- Storage / configuration --
    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, BildwerkError>;
