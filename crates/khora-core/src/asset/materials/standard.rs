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

use crate::{
    asset::{Asset, Material},
    math::{LinearRgba, Vec2},
    renderer::TextureHandle,
};

use super::{push_slot, MaterialBase, TextureSlot, Wireframe};

/// How the normal map encodes its vectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NormalMapType {
    /// Vectors relative to the surface tangent frame.
    #[default]
    TangentSpace,
    /// Vectors in object space.
    ObjectSpace,
}

/// A physically-based metallic/roughness material.
///
/// This is the authored, highest-fidelity representation. It is only read
/// when converting to a cheaper shading model.
#[derive(Clone, Debug)]
pub struct StandardMaterial {
    /// Properties shared by every shading model.
    pub base: MaterialBase,

    /// The base color (albedo) of the material.
    ///
    /// For metals, this is the reflectance color at normal incidence.
    /// For dielectrics, this is the diffuse color.
    pub base_color: LinearRgba,

    /// Optional texture for the base color, multiplied with `base_color`.
    pub base_color_texture: Option<TextureHandle>,

    /// The metallic factor (0.0 = dielectric, 1.0 = metal).
    pub metallic: f32,

    /// The roughness factor (0.0 = smooth, 1.0 = rough).
    pub roughness: f32,

    /// Optional texture for metallic (blue) and roughness (green) values.
    pub metallic_roughness_texture: Option<TextureHandle>,

    /// Optional baked lighting.
    pub light_map: Option<TextureHandle>,
    /// Strength of the baked lighting.
    pub light_map_intensity: f32,

    /// Optional ambient occlusion map (red channel).
    pub occlusion_map: Option<TextureHandle>,
    /// Strength of the ambient occlusion.
    pub occlusion_intensity: f32,

    /// Optional grayscale opacity map.
    pub alpha_map: Option<TextureHandle>,

    /// The emissive color of the material.
    ///
    /// Added to the shaded result and not affected by lighting.
    pub emissive: LinearRgba,
    /// Optional texture multiplied with `emissive`.
    pub emissive_texture: Option<TextureHandle>,
    /// Multiplier applied to the emitted color. Values above 1.0 feed bloom.
    pub emissive_intensity: f32,

    /// Optional normal map.
    pub normal_map: Option<TextureHandle>,
    /// Encoding of the normal map.
    pub normal_map_type: NormalMapType,
    /// Per-axis strength of the normal map.
    pub normal_scale: Vec2,

    /// Optional height map used for bump mapping.
    pub bump_map: Option<TextureHandle>,
    /// Strength of the bump map.
    pub bump_scale: f32,

    /// Optional height map used for vertex displacement.
    pub displacement_map: Option<TextureHandle>,
    /// Displacement scale.
    pub displacement_scale: f32,
    /// Displacement offset.
    pub displacement_bias: f32,

    /// Index-of-refraction ratio used by refraction environment maps.
    pub refraction_ratio: f32,
    /// Environment map strength.
    pub env_map_intensity: f32,

    /// Wireframe parameters.
    pub wireframe: Wireframe,
}

impl Default for StandardMaterial {
    fn default() -> Self {
        Self {
            base: MaterialBase::default(),
            base_color: LinearRgba::new(0.8, 0.8, 0.8, 1.0), // Light gray
            base_color_texture: None,
            metallic: 0.0,
            roughness: 0.5,
            metallic_roughness_texture: None,
            light_map: None,
            light_map_intensity: 1.0,
            occlusion_map: None,
            occlusion_intensity: 1.0,
            alpha_map: None,
            emissive: LinearRgba::BLACK,
            emissive_texture: None,
            emissive_intensity: 1.0,
            normal_map: None,
            normal_map_type: NormalMapType::TangentSpace,
            normal_scale: Vec2::ONE,
            bump_map: None,
            bump_scale: 1.0,
            displacement_map: None,
            displacement_scale: 1.0,
            displacement_bias: 0.0,
            refraction_ratio: 0.98,
            env_map_intensity: 1.0,
            wireframe: Wireframe::default(),
        }
    }
}

impl Asset for StandardMaterial {}

impl Material for StandardMaterial {
    fn base(&self) -> &MaterialBase {
        &self.base
    }

    fn base_color(&self) -> LinearRgba {
        self.base_color
    }

    fn emissive_color(&self) -> LinearRgba {
        self.emissive
    }

    fn textures(&self) -> Vec<(TextureSlot, TextureHandle)> {
        let mut out = Vec::new();
        push_slot(&mut out, TextureSlot::BaseColor, &self.base_color_texture);
        push_slot(
            &mut out,
            TextureSlot::MetallicRoughness,
            &self.metallic_roughness_texture,
        );
        push_slot(&mut out, TextureSlot::LightMap, &self.light_map);
        push_slot(&mut out, TextureSlot::Occlusion, &self.occlusion_map);
        push_slot(&mut out, TextureSlot::Alpha, &self.alpha_map);
        push_slot(&mut out, TextureSlot::Emissive, &self.emissive_texture);
        push_slot(&mut out, TextureSlot::Normal, &self.normal_map);
        push_slot(&mut out, TextureSlot::Bump, &self.bump_map);
        push_slot(&mut out, TextureSlot::Displacement, &self.displacement_map);
        out
    }

    fn clone_material(&self) -> Box<dyn Material> {
        Box::new(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::asset::AssetHandle;
    use crate::renderer::Texture;

    #[test]
    fn test_standard_material_default() {
        let material = StandardMaterial::default();

        assert_eq!(material.base_color, LinearRgba::new(0.8, 0.8, 0.8, 1.0));
        assert_eq!(material.metallic, 0.0);
        assert_eq!(material.roughness, 0.5);
        assert_eq!(material.emissive, LinearRgba::BLACK);
        assert_eq!(material.emissive_intensity, 1.0);
        assert_eq!(material.normal_scale, Vec2::ONE);
        assert_eq!(material.normal_map_type, NormalMapType::TangentSpace);
        assert!(material.base_color_texture.is_none());
        assert!(material.textures().is_empty());
    }

    #[test]
    fn test_standard_material_custom_creation() {
        let material = StandardMaterial {
            base_color: LinearRgba::new(1.0, 0.0, 0.0, 1.0),
            metallic: 1.0,
            roughness: 0.2,
            ..Default::default()
        };

        assert_eq!(material.base_color(), LinearRgba::new(1.0, 0.0, 0.0, 1.0));
        assert_eq!(material.metallic, 1.0);
        assert_eq!(material.roughness, 0.2);
    }

    #[test]
    fn test_textures_lists_bound_slots() {
        let albedo = AssetHandle::new(Texture::new(None));
        let normal = AssetHandle::new(Texture::new(None));
        let material = StandardMaterial {
            base_color_texture: Some(albedo.clone()),
            normal_map: Some(normal.clone()),
            ..Default::default()
        };

        let slots = material.textures();
        assert_eq!(slots.len(), 2);
        assert_eq!(slots[0].0, TextureSlot::BaseColor);
        assert!(AssetHandle::ptr_eq(&slots[0].1, &albedo));
        assert_eq!(slots[1].0, TextureSlot::Normal);
        assert!(AssetHandle::ptr_eq(&slots[1].1, &normal));
    }

    #[test]
    fn test_standard_material_clone_shares_textures() {
        let albedo = AssetHandle::new(Texture::new(None));
        let original = StandardMaterial {
            base_color_texture: Some(albedo.clone()),
            metallic: 0.8,
            ..Default::default()
        };

        let cloned = original.clone();
        assert_eq!(cloned.metallic, original.metallic);
        assert!(AssetHandle::ptr_eq(
            cloned.base_color_texture.as_ref().unwrap(),
            &albedo
        ));
    }
}
