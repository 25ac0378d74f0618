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

//! Rendering quality tiers.

use serde::de::{self, EnumAccess, VariantAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// The requested rendering fidelity.
///
/// `High` keeps materials untouched, `Medium` swaps physically-based
/// materials for Phong ones, `Low` swaps them for unlit ones with
/// downscaled textures.
///
/// Deserialization goes through [`QualityTier::from_name`], so an unknown
/// tier in a config file reads as `High` instead of failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum QualityTier {
    /// Cheapest shading, capped texture sizes.
    Low,
    /// Lit but non-physically-based shading.
    Medium,
    /// Source materials as authored.
    #[default]
    High,
}

impl QualityTier {
    /// Maps a generic quality level (1=Low, 2=Medium, 3=High).
    ///
    /// Any other value maps to `High`.
    pub fn from_level(level: u32) -> Self {
        match level {
            1 => QualityTier::Low,
            2 => QualityTier::Medium,
            _ => QualityTier::High,
        }
    }

    /// Parses a tier name, case-insensitively.
    ///
    /// Unrecognized names map to `High`.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "low" => QualityTier::Low,
            "medium" => QualityTier::Medium,
            _ => QualityTier::High,
        }
    }

    /// The lowercase tier name.
    pub fn as_str(&self) -> &'static str {
        match self {
            QualityTier::Low => "low",
            QualityTier::Medium => "medium",
            QualityTier::High => "high",
        }
    }
}

impl FromStr for QualityTier {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_name(s))
    }
}

impl fmt::Display for QualityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

struct TierVisitor;

impl<'de> Visitor<'de> for TierVisitor {
    type Value = QualityTier;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a quality tier name or level")
    }

    fn visit_str<E: de::Error>(self, name: &str) -> Result<QualityTier, E> {
        Ok(QualityTier::from_name(name))
    }

    fn visit_u64<E: de::Error>(self, level: u64) -> Result<QualityTier, E> {
        Ok(u32::try_from(level).map_or(QualityTier::High, QualityTier::from_level))
    }

    fn visit_enum<A: EnumAccess<'de>>(self, data: A) -> Result<QualityTier, A::Error> {
        let (TierName(tier), variant) = data.variant()?;
        variant.unit_variant()?;
        Ok(tier)
    }
}

/// A variant identifier resolved leniently.
struct TierName(QualityTier);

impl<'de> Deserialize<'de> for TierName {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_identifier(TierVisitor).map(TierName)
    }
}

impl<'de> Deserialize<'de> for QualityTier {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_enum("QualityTier", &["Low", "Medium", "High"], TierVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_high() {
        assert_eq!(QualityTier::default(), QualityTier::High);
    }

    #[test]
    fn test_from_name() {
        assert_eq!(QualityTier::from_name("low"), QualityTier::Low);
        assert_eq!(QualityTier::from_name(" Medium "), QualityTier::Medium);
        assert_eq!(QualityTier::from_name("high"), QualityTier::High);
        assert_eq!(QualityTier::from_name("ultra"), QualityTier::High);
        assert_eq!(QualityTier::from_name(""), QualityTier::High);
        assert_eq!("LOW".parse::<QualityTier>(), Ok(QualityTier::Low));
    }

    #[test]
    fn test_from_level() {
        assert_eq!(QualityTier::from_level(1), QualityTier::Low);
        assert_eq!(QualityTier::from_level(2), QualityTier::Medium);
        assert_eq!(QualityTier::from_level(3), QualityTier::High);
        assert_eq!(QualityTier::from_level(0), QualityTier::High);
    }

    #[test]
    fn test_deserialize_is_lenient() {
        use serde::de::value::{Error, StrDeserializer, U32Deserializer};

        let tier = |name| QualityTier::deserialize(StrDeserializer::<Error>::new(name));
        assert_eq!(tier("Low"), Ok(QualityTier::Low));
        assert_eq!(tier("medium"), Ok(QualityTier::Medium));
        assert_eq!(tier("Ultra"), Ok(QualityTier::High));

        let level = QualityTier::deserialize(U32Deserializer::<Error>::new(1));
        assert_eq!(level, Ok(QualityTier::Low));
    }

    #[test]
    fn test_display_round_trips_through_from_name() {
        for tier in [QualityTier::Low, QualityTier::Medium, QualityTier::High] {
            assert_eq!(QualityTier::from_name(&tier.to_string()), tier);
        }
    }
}
