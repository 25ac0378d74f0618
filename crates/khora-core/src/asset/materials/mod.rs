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

//! The material family.
//!
//! [`StandardMaterial`] is the physically-based source representation.
//! [`PhongMaterial`] and [`UnlitMaterial`] are cheaper shading models a
//! standard material can be converted to. All of them are used through the
//! [`Material`] trait and shared as [`MaterialHandle`].

mod alpha_mode;
mod base;
mod phong;
mod standard;
mod unlit;
mod wireframe;

pub use alpha_mode::*;
pub use base::*;
pub use phong::*;
pub use standard::*;
pub use unlit::*;
pub use wireframe::*;

use std::any::Any;

use super::{Asset, AssetHandle};
use crate::math::LinearRgba;
use crate::renderer::{ShaderPatch, ShaderTemplate, TextureHandle};

/// A helper trait for downcasting trait objects.
pub trait AsAny {
    /// Returns a reference to the inner value as `&dyn Any`.
    fn as_any(&self) -> &dyn Any;
}

impl<T: Any> AsAny for T {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// The role a texture plays in a material.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextureSlot {
    /// Albedo / diffuse color.
    BaseColor,
    /// Packed metallic (blue) and roughness (green).
    MetallicRoughness,
    /// Baked lighting.
    LightMap,
    /// Ambient occlusion (red channel).
    Occlusion,
    /// Grayscale opacity.
    Alpha,
    /// Emitted color.
    Emissive,
    /// Normal perturbation.
    Normal,
    /// Height-based normal perturbation.
    Bump,
    /// Vertex displacement.
    Displacement,
}

/// A renderable material.
pub trait Material: Asset + AsAny + std::fmt::Debug {
    /// Properties shared by every shading model.
    fn base(&self) -> &MaterialBase;

    /// Returns the base color (albedo or diffuse) of the material.
    /// Default implementation is White.
    fn base_color(&self) -> LinearRgba {
        LinearRgba::WHITE
    }

    /// Returns the emissive color of the material.
    /// Default implementation is Black.
    fn emissive_color(&self) -> LinearRgba {
        LinearRgba::BLACK
    }

    /// Every bound texture, with the slot it is bound to.
    fn textures(&self) -> Vec<(TextureSlot, TextureHandle)> {
        Vec::new()
    }

    /// The literal patches applied by [`on_before_compile`](Material::on_before_compile).
    fn shader_patches(&self) -> &'static [ShaderPatch] {
        &[]
    }

    /// Called by the shader compiler once per program, before compilation.
    ///
    /// The default applies [`shader_patches`](Material::shader_patches) in order.
    fn on_before_compile(&self, template: &mut ShaderTemplate) {
        for patch in self.shader_patches() {
            template.apply_patch(patch);
        }
    }

    /// Produces an independent copy of this material.
    fn clone_material(&self) -> Box<dyn Material>;
}

impl Asset for Box<dyn Material> {}

impl dyn Material {
    /// Downcasts to a concrete material type.
    pub fn downcast_ref<T: Material>(&self) -> Option<&T> {
        self.as_any().downcast_ref::<T>()
    }

    /// `true` if the concrete type is `T`.
    pub fn is<T: Material>(&self) -> bool {
        self.as_any().is::<T>()
    }
}

/// A shared handle to a type-erased material.
pub type MaterialHandle = AssetHandle<Box<dyn Material>>;

impl AssetHandle<Box<dyn Material>> {
    /// Boxes a concrete material into a new shared handle.
    pub fn from_material<M: Material>(material: M) -> Self {
        Self::new(Box::new(material))
    }
}

/// Pushes `(slot, texture)` when the texture is bound.
pub(crate) fn push_slot(
    out: &mut Vec<(TextureSlot, TextureHandle)>,
    slot: TextureSlot,
    texture: &Option<TextureHandle>,
) {
    if let Some(texture) = texture {
        out.push((slot, texture.clone()));
    }
}
