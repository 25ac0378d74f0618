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

//! Defines the `LinearRgba` color type used by every material.

use serde::{Deserialize, Serialize};
use std::ops::Mul;

/// A color in **linear RGBA** space with `f32` components.
///
/// Materials store their base, emissive and specular colors with this type.
/// Components may exceed `1.0` (HDR emissive values are common).
///
/// `#[repr(C)]` keeps the layout stable so the value can be written straight
/// into a uniform buffer.
#[derive(
    Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable, Serialize, Deserialize,
)]
#[repr(C)]
pub struct LinearRgba {
    /// The red component in linear space.
    pub r: f32,
    /// The green component in linear space.
    pub g: f32,
    /// The blue component in linear space.
    pub b: f32,
    /// The alpha (opacity) component.
    pub a: f32,
}

impl LinearRgba {
    /// Opaque white (`[1.0, 1.0, 1.0, 1.0]`).
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);
    /// Opaque black (`[0.0, 0.0, 0.0, 1.0]`).
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);

    /// Creates a new `LinearRgba` with explicit RGBA values.
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Creates a new opaque `LinearRgba` (alpha = 1.0).
    #[inline]
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Creates an opaque color from a packed sRGB `0xRRGGBB` value.
    ///
    /// Material defaults are usually authored this way (e.g. a Phong specular
    /// of `0x111111`).
    ///
    /// ```
    /// use khora_core::math::LinearRgba;
    /// assert_eq!(LinearRgba::from_srgb_hex(0xFFFFFF), LinearRgba::WHITE);
    /// ```
    #[inline]
    pub fn from_srgb_hex(hex: u32) -> Self {
        let channel = |shift: u32| ((hex >> shift) & 0xFF) as f32 / 255.0;
        Self::rgb(
            srgb_to_linear(channel(16)),
            srgb_to_linear(channel(8)),
            srgb_to_linear(channel(0)),
        )
    }

    /// Returns the RGB part as an array, as expected by a `vec3` uniform.
    #[inline]
    pub fn rgb_array(&self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }
}

/// Converts an sRGB component to linear space.
#[inline]
fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

impl Default for LinearRgba {
    /// Returns opaque white by default.
    #[inline]
    fn default() -> Self {
        Self::WHITE
    }
}

impl Mul<f32> for LinearRgba {
    type Output = Self;
    /// Multiplies the RGB components by a scalar, leaving alpha untouched.
    #[inline]
    fn mul(self, scalar: f32) -> Self::Output {
        Self {
            r: self.r * scalar,
            g: self.g * scalar,
            b: self.b * scalar,
            a: self.a,
        }
    }
}
