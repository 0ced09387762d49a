// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Core domain types for the Bildwerk image toolkit.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::BildwerkError;

/// Morphological operation selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MorphMode {
    /// Erosion followed by dilation — removes small noise specks.
    Open,
    /// Dilation followed by erosion — fills small holes.
    Close,
}

impl MorphMode {
    /// Stable lowercase keyword, used in log fields and output file names.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Close => "close",
        }
    }
}

impl FromStr for MorphMode {
    type Err = BildwerkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "open" => Ok(Self::Open),
            "close" => Ok(Self::Close),
            _ => Err(BildwerkError::UnknownSelector {
                what: "morphology",
                value: s.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for MorphMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Neighbourhood statistic used by adaptive thresholding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ThresholdMethod {
    /// Gaussian-weighted sum of the neighbourhood.
    Gaussian,
    /// Plain mean of the neighbourhood.
    Mean,
}

impl ThresholdMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Gaussian => "gaussian",
            Self::Mean => "mean",
        }
    }
}

impl FromStr for ThresholdMethod {
    type Err = BildwerkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "gaussian" => Ok(Self::Gaussian),
            "mean" => Ok(Self::Mean),
            _ => Err(BildwerkError::UnknownSelector {
                what: "threshold",
                value: s.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for ThresholdMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Direction of the first-order Sobel derivative.
///
/// `Horizontal` differentiates along the rows (top-to-bottom) and therefore
/// responds to horizontal edges; `Vertical` differentiates along the columns
/// and responds to vertical edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SobelAxis {
    Horizontal,
    Vertical,
}

impl SobelAxis {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Horizontal => "horizontal",
            Self::Vertical => "vertical",
        }
    }
}

impl FromStr for SobelAxis {
    type Err = BildwerkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "h" | "horizontal" => Ok(Self::Horizontal),
            "v" | "vertical" => Ok(Self::Vertical),
            _ => Err(BildwerkError::UnknownSelector {
                what: "sobel axis",
                value: s.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for SobelAxis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which dimension a resize pins to the requested pixel count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResizeAxis {
    Height,
    Width,
}

impl ResizeAxis {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Height => "height",
            Self::Width => "width",
        }
    }
}

impl FromStr for ResizeAxis {
    type Err = BildwerkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "h" | "height" => Ok(Self::Height),
            "w" | "width" => Ok(Self::Width),
            _ => Err(BildwerkError::UnknownSelector {
                what: "resize axis",
                value: s.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for ResizeAxis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Crop bounds as half-open pixel ranges: rows `y_min..y_max`, columns
/// `x_min..x_max`.
///
/// A region is only meaningful against a concrete image; bounds are validated
/// at the point of use, not at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    pub y_min: u32,
    pub y_max: u32,
    pub x_min: u32,
    pub x_max: u32,
}

impl Region {
    pub fn new(y_min: u32, y_max: u32, x_min: u32, x_max: u32) -> Self {
        Self {
            y_min,
            y_max,
            x_min,
            x_max,
        }
    }

    /// Number of columns covered by the region.
    pub fn width(&self) -> u32 {
        self.x_max.saturating_sub(self.x_min)
    }

    /// Number of rows covered by the region.
    pub fn height(&self) -> u32 {
        self.y_max.saturating_sub(self.y_min)
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "rows {}..{}, cols {}..{}",
            self.y_min, self.y_max, self.x_min, self.x_max
        )
    }
}

impl FromStr for Region {
    type Err = BildwerkError;

    /// Parse `"y_min,y_max,x_min,x_max"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(',').map(str::trim).collect();
        if parts.len() != 4 {
            return Err(BildwerkError::InvalidArgument(format!(
                "expected crop region as y_min,y_max,x_min,x_max — got {s:?}"
            )));
        }
        let mut bounds = [0u32; 4];
        for (slot, part) in bounds.iter_mut().zip(&parts) {
            *slot = part.parse().map_err(|_| {
                BildwerkError::InvalidArgument(format!(
                    "crop bound {part:?} is not a non-negative integer"
                ))
            })?;
        }
        Ok(Self::new(bounds[0], bounds[1], bounds[2], bounds[3]))
    }
}
