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

//! The lane that applies a quality tier to a scene object's materials.

use std::collections::HashSet;
use std::sync::{Mutex, PoisonError};

use khora_core::asset::{AssetHandle, StandardMaterial, TextureSlot};
use khora_core::lane::{Lane, LaneContext, LaneError, LaneKind, Slot};
use khora_core::renderer::{QualityTier, Texture};
use khora_core::scene::{for_each_material, update_materials, MaterialHost};

use super::convert_material;
use crate::settings::QualitySettings;
use crate::texture_lane::TextureDownscaleCache;

/// Texture slots the unlit conversion carries over.
const UNLIT_SLOTS: [TextureSlot; 5] = [
    TextureSlot::Emissive,
    TextureSlot::BaseColor,
    TextureSlot::LightMap,
    TextureSlot::Occlusion,
    TextureSlot::Alpha,
];

/// Converts the materials of a [`MaterialHost`] to the active quality tier.
///
/// Reads from the [`LaneContext`]:
/// - `Slot<dyn MaterialHost>` (required)
/// - `QualityTier` (optional, falls back to the configured tier)
#[derive(Debug, Default)]
pub struct MaterialQualityLane {
    cache: Mutex<TextureDownscaleCache>,
    settings: QualitySettings,
}

impl MaterialQualityLane {
    /// Creates a lane with the given settings and an empty cache.
    pub fn new(settings: QualitySettings) -> Self {
        Self {
            cache: Mutex::new(TextureDownscaleCache::new()),
            settings,
        }
    }

    /// The lane's settings.
    pub fn settings(&self) -> &QualitySettings {
        &self.settings
    }

    /// Replaces every material of `host` with its `tier` counterpart.
    ///
    /// Returns how many materials were actually swapped.
    pub fn apply(&self, host: &mut dyn MaterialHost, tier: QualityTier) -> usize {
        let mut replaced = 0;
        self.with_cache(|cache| {
            update_materials(host, |material| {
                let converted = convert_material(material, tier, cache, &self.settings);
                if !AssetHandle::ptr_eq(&converted, material) {
                    replaced += 1;
                }
                converted
            });
        });
        if replaced > 0 {
            log::debug!("{} material(s) converted for tier {}", replaced, tier);
        }
        replaced
    }

    /// Disposes `texture` through the lane's cache.
    pub fn dispose_texture(&self, texture: &Texture) {
        self.with_cache(|cache| cache.dispose(texture));
    }

    /// Number of downscaled textures currently cached.
    pub fn cached_textures(&self) -> usize {
        self.with_cache(|cache| cache.len())
    }

    /// Counts the textures a low-tier conversion of `host` would downscale.
    ///
    /// Compressed and video textures are never resized, sources that already
    /// have a cached replacement are served from the cache, and a texture
    /// shared by several slots is only resized once.
    pub fn count_oversized_textures(&self, host: &dyn MaterialHost) -> usize {
        let bound = self.settings.unlit_texture_max;
        let mut pending = HashSet::new();
        self.with_cache(|cache| {
            for_each_material(host, |material| {
                if !material.is::<StandardMaterial>() {
                    return;
                }
                for (slot, texture) in material.textures() {
                    if !UNLIT_SLOTS.contains(&slot)
                        || texture.is_compressed()
                        || texture.is_video()
                        || cache.cached_replacement(texture.uuid()).is_some()
                    {
                        continue;
                    }
                    if texture.dimensions().is_some_and(|size| !size.fits_within(bound)) {
                        pending.insert(texture.uuid());
                    }
                }
            });
        });
        pending.len()
    }

    fn with_cache<R>(&self, f: impl FnOnce(&mut TextureDownscaleCache) -> R) -> R {
        let mut cache = self.cache.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut cache)
    }
}

impl Lane for MaterialQualityLane {
    fn strategy_name(&self) -> &'static str {
        "MaterialQuality"
    }

    fn lane_kind(&self) -> LaneKind {
        LaneKind::Asset
    }

    fn estimate_cost(&self, ctx: &LaneContext) -> f32 {
        let Some(slot) = ctx.get::<Slot<dyn MaterialHost>>() else {
            return 1.0;
        };
        let tier = ctx.get::<QualityTier>().copied().unwrap_or(self.settings.tier);
        if tier != QualityTier::Low {
            return 1.0;
        }
        1.0 + self.count_oversized_textures(slot.get_ref()) as f32
    }

    fn execute(&self, ctx: &mut LaneContext) -> Result<(), LaneError> {
        let tier = ctx.get::<QualityTier>().copied().unwrap_or(self.settings.tier);
        let host = ctx
            .get::<Slot<dyn MaterialHost>>()
            .ok_or(LaneError::missing("Slot<dyn MaterialHost>"))?
            .get();

        self.apply(host, tier);
        Ok(())
    }

    fn on_shutdown(&self, _ctx: &mut LaneContext) {
        self.with_cache(TextureDownscaleCache::clear);
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn std::any::Any {
        self
    }
}
