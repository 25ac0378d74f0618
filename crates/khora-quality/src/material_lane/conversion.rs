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

//! Standard-to-Phong and standard-to-unlit material conversion.

use khora_core::asset::{MaterialHandle, PhongMaterial, StandardMaterial, UnlitMaterial};
use khora_core::math::Extent2D;
use khora_core::renderer::QualityTier;

use crate::settings::QualitySettings;
use crate::texture_lane::TextureDownscaleCache;

/// Reflectivity given to every Phong material built from a standard one.
pub const PHONG_REFLECTIVITY: f32 = 0.5;

/// Default texture cap for unlit conversion.
pub const UNLIT_TEXTURE_MAX: Extent2D = Extent2D::new(1024, 1024);

/// Returns the material to render `material` with at `tier`.
///
/// Only [`StandardMaterial`]s are converted; anything else, and every
/// material at [`QualityTier::High`], comes back as the same handle.
pub fn convert_material(
    material: &MaterialHandle,
    tier: QualityTier,
    cache: &mut TextureDownscaleCache,
    settings: &QualitySettings,
) -> MaterialHandle {
    let Some(source) = material.downcast_ref::<StandardMaterial>() else {
        return material.clone();
    };

    match tier {
        QualityTier::High => material.clone(),
        QualityTier::Medium => {
            log::debug!("Converting '{}' to Phong", display_name(source));
            MaterialHandle::from_material(phong_from_standard(source))
        }
        QualityTier::Low => {
            log::debug!("Converting '{}' to unlit", display_name(source));
            MaterialHandle::from_material(unlit_from_standard(
                source,
                cache,
                settings.unlit_texture_max,
            ))
        }
    }
}

/// Builds a lit, non-physically-based copy of `source`.
///
/// Textures are shared as is. Reflectivity is fixed to
/// [`PHONG_REFLECTIVITY`]; specular and shininess keep Phong defaults.
pub fn phong_from_standard(source: &StandardMaterial) -> PhongMaterial {
    PhongMaterial {
        base: source.base.clone(),
        base_color: source.base_color,
        base_color_texture: source.base_color_texture.clone(),
        light_map: source.light_map.clone(),
        light_map_intensity: source.light_map_intensity,
        occlusion_map: source.occlusion_map.clone(),
        occlusion_intensity: source.occlusion_intensity,
        emissive: source.emissive,
        emissive_texture: source.emissive_texture.clone(),
        emissive_intensity: source.emissive_intensity,
        normal_map: source.normal_map.clone(),
        normal_map_type: source.normal_map_type,
        normal_scale: source.normal_scale,
        bump_map: source.bump_map.clone(),
        bump_scale: source.bump_scale,
        displacement_map: source.displacement_map.clone(),
        displacement_scale: source.displacement_scale,
        displacement_bias: source.displacement_bias,
        alpha_map: source.alpha_map.clone(),
        reflectivity: PHONG_REFLECTIVITY,
        refraction_ratio: source.refraction_ratio,
        wireframe: source.wireframe,
        ..PhongMaterial::default()
    }
}

/// Builds an unlit copy of `source` whose textures fit within `max`.
pub fn unlit_from_standard(
    source: &StandardMaterial,
    cache: &mut TextureDownscaleCache,
    max: Extent2D,
) -> UnlitMaterial {
    let Extent2D { width, height } = max;

    // Slot order decides which material first sizes a shared texture.
    let emissive_texture = cache.resize_slot(source.emissive_texture.as_ref(), width, height);
    let base_color_texture = cache.resize_slot(source.base_color_texture.as_ref(), width, height);
    let light_map = cache.resize_slot(source.light_map.as_ref(), width, height);
    let occlusion_map = cache.resize_slot(source.occlusion_map.as_ref(), width, height);
    let alpha_map = cache.resize_slot(source.alpha_map.as_ref(), width, height);

    let mut unlit = UnlitMaterial::default();
    unlit.base = source.base.clone();
    unlit.base_color = source.base_color;
    unlit.base_color_texture = base_color_texture;
    unlit.light_map = light_map;
    unlit.light_map_intensity = source.light_map_intensity;
    unlit.occlusion_map = occlusion_map;
    unlit.occlusion_intensity = source.occlusion_intensity;
    unlit.alpha_map = alpha_map;
    unlit.wireframe = source.wireframe;
    unlit.set_emissive(source.emissive);
    unlit.set_emissive_intensity(source.emissive_intensity);
    unlit.set_emissive_texture(emissive_texture);
    unlit
}

fn display_name(material: &StandardMaterial) -> &str {
    match material.base.name.as_str() {
        "" => "<unnamed>",
        name => name,
    }
}
