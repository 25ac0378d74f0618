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

//! Integer extents describing texture and image sizes in pixels.

use serde::{Deserialize, Serialize};

/// A two-dimensional extent, typically representing width and height.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Extent2D {
    /// The width component of the extent.
    pub width: u32,
    /// The height component of the extent.
    pub height: u32,
}

impl Extent2D {
    /// Creates a new extent.
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Returns `true` if both axes are less than or equal to `bound`.
    #[inline]
    pub fn fits_within(&self, bound: Extent2D) -> bool {
        self.width <= bound.width && self.height <= bound.height
    }

    /// Clamps each axis independently to `bound`.
    ///
    /// This never enlarges and does not try to keep the aspect ratio.
    #[inline]
    pub fn clamped_to(&self, bound: Extent2D) -> Extent2D {
        Extent2D {
            width: self.width.min(bound.width),
            height: self.height.min(bound.height),
        }
    }

    /// Number of pixels covered by this extent.
    #[inline]
    pub fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }
}
