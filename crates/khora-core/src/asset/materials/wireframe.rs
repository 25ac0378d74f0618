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

/// Shape of line ends in wireframe rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LineCap {
    /// Flat end at the vertex.
    Butt,
    /// Rounded end.
    #[default]
    Round,
    /// Square end extending past the vertex.
    Square,
}

/// Shape of line joints in wireframe rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LineJoin {
    /// Rounded joint.
    #[default]
    Round,
    /// Beveled joint.
    Bevel,
    /// Sharp mitered joint.
    Miter,
}

/// Wireframe rendering parameters, carried unchanged by every conversion.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Wireframe {
    /// Whether the geometry is drawn as edges.
    pub enabled: bool,

    /// The width of the wireframe lines in pixels.
    ///
    /// Line width support varies by backend; many clamp anything but 1.0.
    pub line_width: f32,

    /// Line end style.
    pub line_cap: LineCap,

    /// Line joint style.
    pub line_join: LineJoin,
}

impl Default for Wireframe {
    fn default() -> Self {
        Self {
            enabled: false,
            line_width: 1.0,
            line_cap: LineCap::Round,
            line_join: LineJoin::Round,
        }
    }
}
