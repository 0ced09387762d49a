// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Showcase driver configuration.

use serde::{Deserialize, Serialize};

use crate::types::Region;

/// Settings for a showcase pipeline run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShowcaseConfig {
    /// Optional crop applied to the source image before any other stage.
    pub crop: Option<Region>,
    /// White border width in pixels added around the working image.
    pub border_width: u32,
    /// Upper bound on either image dimension; dimensions above it trigger an
    /// aspect-preserving resize.
    pub max_pixels: u32,
}

impl Default for ShowcaseConfig {
    fn default() -> Self {
        Self {
            crop: None,
            border_width: 10,
            max_pixels: 800,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_showcase() {
        let config = ShowcaseConfig::default();
        assert!(config.crop.is_none());
        assert_eq!(config.border_width, 10);
        assert_eq!(config.max_pixels, 800);
    }

    /// Config files are plain JSON; a round-trip must preserve every field.
    #[test]
    fn json_round_trip() {
        let config = ShowcaseConfig {
            crop: Some(Region::new(200, 780, 100, 1000)),
            border_width: 4,
            max_pixels: 640,
        };
        let json = serde_json::to_string(&config).unwrap();
        let back: ShowcaseConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.crop, config.crop);
        assert_eq!(back.border_width, 4);
        assert_eq!(back.max_pixels, 640);
    }
}
