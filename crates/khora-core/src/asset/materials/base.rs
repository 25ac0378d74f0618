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

use super::AlphaMode;

/// Which faces of a primitive are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Side {
    /// Front faces only; back faces are culled.
    #[default]
    Front,
    /// Back faces only.
    Back,
    /// Both faces.
    Double,
}

/// Color blending applied when the material is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Blending {
    /// No blending.
    None,
    /// Standard "over" blending.
    #[default]
    Normal,
    /// Source added to destination.
    Additive,
    /// Source subtracted from destination.
    Subtractive,
    /// Source multiplied with destination.
    Multiply,
}

/// Depth bias applied while rasterizing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolygonOffset {
    /// Slope-scaled factor.
    pub factor: f32,
    /// Constant units.
    pub units: f32,
}

/// Properties every material carries regardless of its shading model.
///
/// Converting a material from one model to another starts by cloning this
/// block, so anything listed here survives every conversion.
#[derive(Debug, Clone, PartialEq)]
pub struct MaterialBase {
    /// A human-readable name.
    pub name: String,
    /// How alpha is interpreted. `Mask` carries its own cutoff.
    pub alpha_mode: AlphaMode,
    /// Global opacity multiplier.
    pub opacity: f32,
    /// Which faces are rendered.
    pub side: Side,
    /// Blending equation.
    pub blending: Blending,
    /// Whether fragments are depth tested.
    pub depth_test: bool,
    /// Whether fragments write depth.
    pub depth_write: bool,
    /// Whether fragments write color.
    pub color_write: bool,
    /// Whether per-vertex colors are multiplied in.
    pub vertex_colors: bool,
    /// Optional depth bias.
    pub polygon_offset: Option<PolygonOffset>,
    /// Whether dithering is applied to the output.
    pub dithering: bool,
    /// Whether the output alpha is premultiplied.
    pub premultiplied_alpha: bool,
    /// Whether objects using the material are drawn at all.
    pub visible: bool,
    /// Whether tone mapping applies.
    pub tone_mapped: bool,
    /// Whether scene fog applies.
    pub fog: bool,
}

impl Default for MaterialBase {
    fn default() -> Self {
        Self {
            name: String::new(),
            alpha_mode: AlphaMode::Opaque,
            opacity: 1.0,
            side: Side::Front,
            blending: Blending::Normal,
            depth_test: true,
            depth_write: true,
            color_write: true,
            vertex_colors: false,
            polygon_offset: None,
            dithering: false,
            premultiplied_alpha: false,
            visible: true,
            tone_mapped: true,
            fog: true,
        }
    }
}

impl MaterialBase {
    /// `true` when back faces are rendered too.
    pub fn is_double_sided(&self) -> bool {
        self.side == Side::Double
    }
}
