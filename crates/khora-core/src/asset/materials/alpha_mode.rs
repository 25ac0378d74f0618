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

/// Defines how the alpha channel of a material is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum AlphaMode {
    /// The material is fully opaque; alpha is ignored.
    #[default]
    Opaque,

    /// Alpha testing: fragments below the cutoff are discarded.
    ///
    /// The f32 value is the alpha cutoff threshold (typically 0.5).
    Mask(f32),

    /// Full alpha blending. Requires back-to-front ordering.
    Blend,
}

impl AlphaMode {
    /// `true` if the material needs sorted, blended rendering.
    pub fn is_transparent(&self) -> bool {
        matches!(self, AlphaMode::Blend)
    }
}
