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
    renderer::{chunk_patches::PHONG_PATCHES, ShaderPatch, TextureHandle},
};

use super::{push_slot, MaterialBase, NormalMapType, TextureSlot, Wireframe};

/// A lit Blinn-Phong material.
///
/// Cheaper than [`StandardMaterial`](super::StandardMaterial) but still
/// responds to lights. Its shader hook adds tangent-frame varyings so that
/// tangent-space normal maps keep working.
#[derive(Clone, Debug)]
pub struct PhongMaterial {
    /// Properties shared by every shading model.
    pub base: MaterialBase,
    /// Diffuse color.
    pub base_color: LinearRgba,
    /// Optional diffuse texture.
    pub base_color_texture: Option<TextureHandle>,
    /// Optional baked lighting.
    pub light_map: Option<TextureHandle>,
    /// Strength of the baked lighting.
    pub light_map_intensity: f32,
    /// Optional ambient occlusion map.
    pub occlusion_map: Option<TextureHandle>,
    /// Strength of the ambient occlusion.
    pub occlusion_intensity: f32,
    /// Emitted color.
    pub emissive: LinearRgba,
    /// Optional emissive texture.
    pub emissive_texture: Option<TextureHandle>,
    /// Multiplier applied to the emitted color.
    pub emissive_intensity: f32,
    /// Specular highlight color.
    pub specular: LinearRgba,
    /// Specular exponent.
    pub shininess: f32,
    /// Optional normal map.
    pub normal_map: Option<TextureHandle>,
    /// Encoding of the normal map.
    pub normal_map_type: NormalMapType,
    /// Per-axis strength of the normal map.
    pub normal_scale: Vec2,
    /// Optional bump map.
    pub bump_map: Option<TextureHandle>,
    /// Strength of the bump map.
    pub bump_scale: f32,
    /// Optional displacement map.
    pub displacement_map: Option<TextureHandle>,
    /// Displacement scale.
    pub displacement_scale: f32,
    /// Displacement offset.
    pub displacement_bias: f32,
    /// Optional grayscale opacity map.
    pub alpha_map: Option<TextureHandle>,
    /// How much the environment map is reflected.
    pub reflectivity: f32,
    /// Index-of-refraction ratio.
    pub refraction_ratio: f32,
    /// Wireframe parameters.
    pub wireframe: Wireframe,
}

impl Default for PhongMaterial {
    fn default() -> Self {
        Self {
            base: MaterialBase::default(),
            base_color: LinearRgba::WHITE,
            base_color_texture: None,
            light_map: None,
            light_map_intensity: 1.0,
            occlusion_map: None,
            occlusion_intensity: 1.0,
            emissive: LinearRgba::BLACK,
            emissive_texture: None,
            emissive_intensity: 1.0,
            specular: LinearRgba::from_srgb_hex(0x111111),
            shininess: 30.0,
            normal_map: None,
            normal_map_type: NormalMapType::TangentSpace,
            normal_scale: Vec2::ONE,
            bump_map: None,
            bump_scale: 1.0,
            displacement_map: None,
            displacement_scale: 1.0,
            displacement_bias: 0.0,
            alpha_map: None,
            reflectivity: 1.0,
            refraction_ratio: 0.98,
            wireframe: Wireframe::default(),
        }
    }
}

impl Asset for PhongMaterial {}

impl Material for PhongMaterial {
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
        push_slot(&mut out, TextureSlot::LightMap, &self.light_map);
        push_slot(&mut out, TextureSlot::Occlusion, &self.occlusion_map);
        push_slot(&mut out, TextureSlot::Emissive, &self.emissive_texture);
        push_slot(&mut out, TextureSlot::Normal, &self.normal_map);
        push_slot(&mut out, TextureSlot::Bump, &self.bump_map);
        push_slot(&mut out, TextureSlot::Displacement, &self.displacement_map);
        push_slot(&mut out, TextureSlot::Alpha, &self.alpha_map);
        out
    }

    fn shader_patches(&self) -> &'static [ShaderPatch] {
        PHONG_PATCHES
    }

    fn clone_material(&self) -> Box<dyn Material> {
        Box::new(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::ShaderTemplate;

    const VERTEX: &str = "varying vec3 vNormal;\nvoid main() {\n  vNormal = normalize( transformedNormal );\n}\n";
    const FRAGMENT: &str = "#include <lights_phong_pars_fragment>\nvoid main() {}\n";

    #[test]
    fn test_phong_material_default() {
        let material = PhongMaterial::default();
        assert_eq!(material.shininess, 30.0);
        assert_eq!(material.reflectivity, 1.0);
        assert_eq!(material.specular, LinearRgba::from_srgb_hex(0x111111));
        assert!(material.textures().is_empty());
    }

    #[test]
    fn test_phong_hook_adds_tangent_frame() {
        let material = PhongMaterial::default();
        let mut template = ShaderTemplate::new(VERTEX, FRAGMENT);

        material.on_before_compile(&mut template);

        assert!(template.vertex_source.contains("varying vec3 vTangent;"));
        assert!(template
            .vertex_source
            .contains("vTangent = normalize( transformedTangent );"));
        assert!(template
            .vertex_source
            .contains("vBitangent = normalize( cross( vNormal, vTangent ) * tangent.w );"));
        assert!(template.fragment_source.contains("#ifndef FLAT_SHADED"));
        assert!(template.fragment_source.contains("varying vec3 vBitangent;"));
        assert!(template.uniforms.is_empty());
    }

    #[test]
    fn test_phong_hook_on_unrelated_template_is_noop() {
        let material = PhongMaterial::default();
        let mut template = ShaderTemplate::new("void main() {}", "void main() {}");
        material.on_before_compile(&mut template);
        assert_eq!(template.vertex_source, "void main() {}");
        assert_eq!(template.fragment_source, "void main() {}");
    }
}
