// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! RON-backed configuration for the quality strategies.
//!
//! ```ron
//! (
//!     tier: Low,
//!     unlit_texture_max: (width: 512, height: 512),
//! )
//! ```
//!
//! Missing fields fall back to their defaults.

use std::path::{Path, PathBuf};

use khora_core::math::Extent2D;
use khora_core::renderer::QualityTier;
use serde::{Deserialize, Serialize};

use crate::material_lane::UNLIT_TEXTURE_MAX;

/// Errors raised while loading or saving [`QualitySettings`].
#[derive(Debug, thiserror::Error)]
pub enum QualityConfigError {
    /// The settings file could not be read or written.
    #[error("I/O error on quality settings '{path}': {source}")]
    Io {
        /// The file involved.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },
    /// The text is not valid RON for [`QualitySettings`].
    #[error("Invalid quality settings: {0}")]
    Parse(#[from] ron::error::SpannedError),
    /// The settings could not be encoded.
    #[error("Failed to serialize quality settings: {0}")]
    Serialize(#[from] ron::Error),
    /// The unlit texture cap has a zero axis.
    #[error("Unlit texture cap must be non-zero, got {width}x{height}")]
    ZeroTextureCap {
        /// Configured width.
        width: u32,
        /// Configured height.
        height: u32,
    },
}

/// Tunables for the material quality lane.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QualitySettings {
    /// Tier applied when the lane context does not carry one.
    pub tier: QualityTier,
    /// Largest texture size kept by unlit conversion.
    pub unlit_texture_max: Extent2D,
}

impl Default for QualitySettings {
    fn default() -> Self {
        Self {
            tier: QualityTier::High,
            unlit_texture_max: UNLIT_TEXTURE_MAX,
        }
    }
}

impl QualitySettings {
    /// Default settings with `tier` as the configured tier.
    pub fn with_tier(tier: QualityTier) -> Self {
        Self {
            tier,
            ..Self::default()
        }
    }

    /// Parses settings from RON text.
    pub fn from_ron_str(text: &str) -> Result<Self, QualityConfigError> {
        let settings: Self = ron::from_str(text)?;
        settings.validate()
    }

    /// Reads and parses a RON settings file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, QualityConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| QualityConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_ron_str(&text)?;
        log::debug!("Loaded quality settings from '{}': {:?}", path.display(), settings);
        Ok(settings)
    }

    /// Encodes the settings as pretty RON.
    pub fn to_ron_string(&self) -> Result<String, QualityConfigError> {
        Ok(ron::ser::to_string_pretty(
            self,
            ron::ser::PrettyConfig::default(),
        )?)
    }

    /// Writes the settings to `path` as pretty RON.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), QualityConfigError> {
        let path = path.as_ref();
        let text = self.to_ron_string()?;
        std::fs::write(path, text).map_err(|source| QualityConfigError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    fn validate(self) -> Result<Self, QualityConfigError> {
        let Extent2D { width, height } = self.unlit_texture_max;
        if width == 0 || height == 0 {
            return Err(QualityConfigError::ZeroTextureCap { width, height });
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_mirror_constants() {
        let settings = QualitySettings::default();
        assert_eq!(settings.tier, QualityTier::High);
        assert_eq!(settings.unlit_texture_max, Extent2D::new(1024, 1024));
    }

    #[test]
    fn test_partial_ron_uses_defaults() {
        let settings = QualitySettings::from_ron_str("(tier: Medium)").unwrap();
        assert_eq!(settings.tier, QualityTier::Medium);
        assert_eq!(settings.unlit_texture_max, UNLIT_TEXTURE_MAX);
    }

    #[test]
    fn test_full_ron() {
        let text = "(tier: Low, unlit_texture_max: (width: 256, height: 128))";
        let settings = QualitySettings::from_ron_str(text).unwrap();
        assert_eq!(settings.tier, QualityTier::Low);
        assert_eq!(settings.unlit_texture_max, Extent2D::new(256, 128));
    }

    #[test]
    fn test_round_trip_defaults() {
        let text = QualitySettings::default().to_ron_string().unwrap();
        let parsed = QualitySettings::from_ron_str(&text).unwrap();
        assert_eq!(parsed, QualitySettings::default());
    }

    #[test]
    fn test_rejects_zero_cap() {
        let err = QualitySettings::from_ron_str("(unlit_texture_max: (width: 0, height: 64))")
            .unwrap_err();
        assert!(matches!(
            err,
            QualityConfigError::ZeroTextureCap {
                width: 0,
                height: 64
            }
        ));
    }

    #[test]
    fn test_unknown_tier_reads_as_high() {
        let settings = QualitySettings::from_ron_str("(tier: Ultra)").unwrap();
        assert_eq!(settings.tier, QualityTier::High);
        assert_eq!(settings.tier, QualityTier::from_name("Ultra"));

        let settings = QualitySettings::from_ron_str("(tier: low)").unwrap();
        assert_eq!(settings.tier, QualityTier::Low);
    }

    #[test]
    fn test_rejects_malformed_text() {
        let err = QualitySettings::from_ron_str("(tier: ").unwrap_err();
        assert!(matches!(err, QualityConfigError::Parse(_)));

        let err = QualitySettings::from_ron_str("(tier: Low(1))").unwrap_err();
        assert!(matches!(err, QualityConfigError::Parse(_)));
    }
}
