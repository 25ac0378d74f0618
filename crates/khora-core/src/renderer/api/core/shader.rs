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

//! Editable shader templates and the textual patches materials apply to them.

use crate::math::LinearRgba;
use crate::renderer::{ShaderStage, TextureHandle};
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

/// A shared, mutable uniform value.
///
/// Cloning a `Uniform` shares the cell: a write through one clone is seen by
/// every other clone and by any [`ShaderTemplate`] the cell was bound into.
/// Use [`detached`](Uniform::detached) for an independent copy.
#[derive(Debug)]
pub struct Uniform<T>(Arc<RwLock<T>>);

impl<T> Uniform<T> {
    /// Creates a new cell.
    pub fn new(value: T) -> Self {
        Self(Arc::new(RwLock::new(value)))
    }

    /// Overwrites the value.
    pub fn set(&self, value: T) {
        *self.0.write().unwrap_or_else(PoisonError::into_inner) = value;
    }

    /// Returns `true` if both uniforms share the same cell.
    pub fn ptr_eq(a: &Self, b: &Self) -> bool {
        Arc::ptr_eq(&a.0, &b.0)
    }
}

impl<T: Clone> Uniform<T> {
    /// Returns a copy of the value.
    pub fn get(&self) -> T {
        self.0
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Creates a new cell holding a copy of the current value.
    pub fn detached(&self) -> Self {
        Self::new(self.get())
    }
}

impl<T> Clone for Uniform<T> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

/// A uniform bound into a [`ShaderTemplate`].
#[derive(Debug, Clone)]
pub enum UniformBinding {
    /// A `vec3` color.
    Color(Uniform<LinearRgba>),
    /// A `float`.
    Float(Uniform<f32>),
    /// A `sampler2D`, possibly unbound.
    Texture(Uniform<Option<TextureHandle>>),
}

impl UniformBinding {
    /// Returns `true` if both bindings point at the same cell.
    pub fn shares_cell_with(&self, other: &UniformBinding) -> bool {
        match (self, other) {
            (UniformBinding::Color(a), UniformBinding::Color(b)) => Uniform::ptr_eq(a, b),
            (UniformBinding::Float(a), UniformBinding::Float(b)) => Uniform::ptr_eq(a, b),
            (UniformBinding::Texture(a), UniformBinding::Texture(b)) => Uniform::ptr_eq(a, b),
            _ => false,
        }
    }
}

/// A fixed literal substitution in one shader stage.
///
/// The anchor is replaced by the replacement text, which by convention
/// re-emits the anchor first so that the original chunk stays in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShaderPatch {
    /// The stage whose source is edited.
    pub stage: ShaderStage,
    /// The literal text to look for.
    pub anchor: &'static str,
    /// The text substituted for the first occurrence of `anchor`.
    pub replacement: &'static str,
}

impl ShaderPatch {
    /// Replaces the first occurrence of the anchor in `source`.
    ///
    /// Returns `false`, leaving `source` untouched, when the anchor is absent.
    pub fn apply_to(&self, source: &mut String) -> bool {
        match source.find(self.anchor) {
            Some(start) => {
                source.replace_range(start..start + self.anchor.len(), self.replacement);
                true
            }
            None => false,
        }
    }
}

/// The in-progress shader program handed to a material before compilation.
#[derive(Debug, Clone, Default)]
pub struct ShaderTemplate {
    /// Vertex stage source.
    pub vertex_source: String,
    /// Fragment stage source.
    pub fragment_source: String,
    /// Uniforms by name.
    pub uniforms: HashMap<String, UniformBinding>,
}

impl ShaderTemplate {
    /// Creates a template without uniforms.
    pub fn new(vertex_source: impl Into<String>, fragment_source: impl Into<String>) -> Self {
        Self {
            vertex_source: vertex_source.into(),
            fragment_source: fragment_source.into(),
            uniforms: HashMap::new(),
        }
    }

    /// The source of one stage.
    pub fn source(&self, stage: ShaderStage) -> &str {
        match stage {
            ShaderStage::Vertex => &self.vertex_source,
            ShaderStage::Fragment => &self.fragment_source,
        }
    }

    /// Applies a patch to the matching stage.
    pub fn apply_patch(&mut self, patch: &ShaderPatch) -> bool {
        let source = match patch.stage {
            ShaderStage::Vertex => &mut self.vertex_source,
            ShaderStage::Fragment => &mut self.fragment_source,
        };
        let applied = patch.apply_to(source);
        if !applied {
            log::trace!("Shader anchor '{}' not found, patch skipped", patch.anchor);
        }
        applied
    }

    /// Binds a uniform, replacing any previous binding with that name.
    pub fn bind_uniform(&mut self, name: impl Into<String>, binding: UniformBinding) {
        self.uniforms.insert(name.into(), binding);
    }

    /// Looks up a bound uniform.
    pub fn uniform(&self, name: &str) -> Option<&UniformBinding> {
        self.uniforms.get(name)
    }
}
