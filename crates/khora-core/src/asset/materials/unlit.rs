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
    math::LinearRgba,
    renderer::{
        chunk_patches::UNLIT_PATCHES, ShaderPatch, ShaderTemplate, TextureHandle, Uniform,
        UniformBinding,
    },
};

use super::{push_slot, MaterialBase, TextureSlot, Wireframe};

/// An unlit material with an added emissive term.
///
/// The emissive color, intensity and texture live in shared [`Uniform`]
/// cells. [`on_before_compile`](Material::on_before_compile) binds those cells
/// into the shader, so later writes through the setters reach an already
/// compiled program.
#[derive(Debug)]
pub struct UnlitMaterial {
    /// Properties shared by every shading model.
    pub base: MaterialBase,
    /// The base color of the material.
    pub base_color: LinearRgba,
    /// Optional color texture.
    pub base_color_texture: Option<TextureHandle>,
    /// Optional baked lighting.
    pub light_map: Option<TextureHandle>,
    /// Strength of the baked lighting.
    pub light_map_intensity: f32,
    /// Optional ambient occlusion map.
    pub occlusion_map: Option<TextureHandle>,
    /// Strength of the ambient occlusion.
    pub occlusion_intensity: f32,
    /// Optional grayscale opacity map.
    pub alpha_map: Option<TextureHandle>,
    /// Wireframe parameters.
    pub wireframe: Wireframe,
    emissive: Uniform<LinearRgba>,
    emissive_intensity: Uniform<f32>,
    emissive_texture: Uniform<Option<TextureHandle>>,
}

impl UnlitMaterial {
    /// Current emissive color.
    pub fn emissive(&self) -> LinearRgba {
        self.emissive.get()
    }

    /// Sets the emissive color.
    pub fn set_emissive(&self, color: LinearRgba) {
        self.emissive.set(color);
    }

    /// Current emissive intensity.
    pub fn emissive_intensity(&self) -> f32 {
        self.emissive_intensity.get()
    }

    /// Sets the emissive intensity.
    pub fn set_emissive_intensity(&self, intensity: f32) {
        self.emissive_intensity.set(intensity);
    }

    /// Current emissive texture.
    pub fn emissive_texture(&self) -> Option<TextureHandle> {
        self.emissive_texture.get()
    }

    /// Sets the emissive texture.
    pub fn set_emissive_texture(&self, texture: Option<TextureHandle>) {
        self.emissive_texture.set(texture);
    }

    /// The shared emissive color cell.
    pub fn emissive_uniform(&self) -> &Uniform<LinearRgba> {
        &self.emissive
    }

    /// The shared emissive intensity cell.
    pub fn emissive_intensity_uniform(&self) -> &Uniform<f32> {
        &self.emissive_intensity
    }

    /// The shared emissive texture cell.
    pub fn emissive_texture_uniform(&self) -> &Uniform<Option<TextureHandle>> {
        &self.emissive_texture
    }
}

impl Default for UnlitMaterial {
    fn default() -> Self {
        Self {
            base: MaterialBase::default(),
            base_color: LinearRgba::WHITE,
            base_color_texture: None,
            light_map: None,
            light_map_intensity: 1.0,
            occlusion_map: None,
            occlusion_intensity: 1.0,
            alpha_map: None,
            wireframe: Wireframe::default(),
            emissive: Uniform::new(LinearRgba::BLACK),
            emissive_intensity: Uniform::new(1.0),
            emissive_texture: Uniform::new(None),
        }
    }
}

impl Clone for UnlitMaterial {
    /// The copy gets its own emissive cells, holding the same values.
    fn clone(&self) -> Self {
        Self {
            base: self.base.clone(),
            base_color: self.base_color,
            base_color_texture: self.base_color_texture.clone(),
            light_map: self.light_map.clone(),
            light_map_intensity: self.light_map_intensity,
            occlusion_map: self.occlusion_map.clone(),
            occlusion_intensity: self.occlusion_intensity,
            alpha_map: self.alpha_map.clone(),
            wireframe: self.wireframe,
            emissive: self.emissive.detached(),
            emissive_intensity: self.emissive_intensity.detached(),
            emissive_texture: self.emissive_texture.detached(),
        }
    }
}

impl Asset for UnlitMaterial {}

impl Material for UnlitMaterial {
    fn base(&self) -> &MaterialBase {
        &self.base
    }

    fn base_color(&self) -> LinearRgba {
        self.base_color
    }

    fn emissive_color(&self) -> LinearRgba {
        self.emissive()
    }

    fn textures(&self) -> Vec<(TextureSlot, TextureHandle)> {
        let mut out = Vec::new();
        push_slot(&mut out, TextureSlot::BaseColor, &self.base_color_texture);
        push_slot(&mut out, TextureSlot::LightMap, &self.light_map);
        push_slot(&mut out, TextureSlot::Occlusion, &self.occlusion_map);
        push_slot(&mut out, TextureSlot::Alpha, &self.alpha_map);
        push_slot(&mut out, TextureSlot::Emissive, &self.emissive_texture());
        out
    }

    fn shader_patches(&self) -> &'static [ShaderPatch] {
        UNLIT_PATCHES
    }

    fn on_before_compile(&self, template: &mut ShaderTemplate) {
        template.bind_uniform("emissive", UniformBinding::Color(self.emissive.clone()));
        template.bind_uniform(
            "emissiveIntensity",
            UniformBinding::Float(self.emissive_intensity.clone()),
        );
        template.bind_uniform(
            "emissiveMap",
            UniformBinding::Texture(self.emissive_texture.clone()),
        );
        for patch in self.shader_patches() {
            template.apply_patch(patch);
        }
    }

    fn clone_material(&self) -> Box<dyn Material> {
        Box::new(self.clone())
    }
}
