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

use crate::asset::{Asset, AssetHandle, AssetUUID};
use crate::math::{Extent2D, Vec2};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, PoisonError};

use super::image::TextureImage;
use super::media::MediaBinding;

/// Defines how texture coordinates outside the `[0, 1]` range are handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AddressMode {
    /// Coordinates wrap around. `1.1` becomes `0.1`.
    Repeat,
    /// Coordinates are clamped to the edge. `1.1` becomes `1.0`.
    #[default]
    ClampToEdge,
    /// Coordinates wrap around, mirroring at each integer boundary.
    MirrorRepeat,
}

/// Defines the filtering mode for texture sampling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FilterMode {
    /// Point sampling. Returns the value of the nearest texel.
    Nearest,
    /// Linear interpolation of the nearest texels.
    #[default]
    Linear,
}

/// Defines the filtering mode for mipmap sampling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MipmapFilterMode {
    /// Use the nearest mipmap level.
    Nearest,
    /// Linearly interpolate between the two nearest mipmap levels.
    #[default]
    Linear,
}

/// Sampling state carried by a texture and copied by duplication.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SamplerState {
    /// The address mode for the U coordinate.
    pub address_mode_u: AddressMode,
    /// The address mode for the V coordinate.
    pub address_mode_v: AddressMode,
    /// The filter mode for magnification.
    pub mag_filter: FilterMode,
    /// The filter mode for minification.
    pub min_filter: FilterMode,
    /// The filter mode to use between mipmap levels.
    pub mipmap_filter: MipmapFilterMode,
    /// The maximum anisotropy level to use.
    pub anisotropy_clamp: u16,
}

impl Default for SamplerState {
    fn default() -> Self {
        Self {
            address_mode_u: AddressMode::ClampToEdge,
            address_mode_v: AddressMode::ClampToEdge,
            mag_filter: FilterMode::Linear,
            min_filter: FilterMode::Linear,
            mipmap_filter: MipmapFilterMode::Linear,
            anisotropy_clamp: 1,
        }
    }
}

/// UV transform applied when the texture is sampled.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UvTransform {
    /// Offset added after scaling.
    pub offset: Vec2,
    /// Number of repetitions on each axis.
    pub repeat: Vec2,
    /// Pivot for the rotation.
    pub center: Vec2,
    /// Rotation in radians.
    pub rotation: f32,
}

impl Default for UvTransform {
    fn default() -> Self {
        Self {
            offset: Vec2::ZERO,
            repeat: Vec2::ONE,
            center: Vec2::ZERO,
            rotation: 0.0,
        }
    }
}

/// Channel layout requested for the uploaded texture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TexelFormat {
    /// Single red channel.
    Red,
    /// Red and green channels.
    RedGreen,
    /// Three color channels.
    Rgb,
    /// Three color channels plus alpha.
    #[default]
    Rgba,
    /// Single luminance channel.
    Luminance,
    /// Luminance plus alpha.
    LuminanceAlpha,
}

/// Component type requested for the uploaded texture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TexelType {
    /// 8-bit unsigned normalized.
    #[default]
    UnsignedByte,
    /// 16-bit float.
    HalfFloat,
    /// 32-bit float.
    Float,
}

/// How color values stored in the texture are encoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ColorSpace {
    /// Values are linear.
    #[default]
    Linear,
    /// Values are sRGB encoded.
    Srgb,
}

/// A shared handle to a [`Texture`].
pub type TextureHandle = AssetHandle<Texture>;

/// An image-backed texture resource.
///
/// A texture is shared between materials through [`TextureHandle`], so the
/// state that changes after construction (media binding, upload and release
/// flags) uses interior mutability.
#[derive(Debug)]
pub struct Texture {
    uuid: AssetUUID,
    /// An optional debug label.
    pub label: Option<String>,
    /// The image payload, if any.
    pub image: Option<TextureImage>,
    /// Requested channel layout.
    pub format: TexelFormat,
    /// Requested component type.
    pub texel_type: TexelType,
    /// Color encoding of the stored values.
    pub color_space: ColorSpace,
    /// Sampling state.
    pub sampler: SamplerState,
    /// UV transform.
    pub uv: UvTransform,
    /// Whether mipmaps are generated on upload.
    pub generate_mipmaps: bool,
    /// Whether alpha is premultiplied on upload.
    pub premultiply_alpha: bool,
    /// Whether rows are flipped on upload.
    pub flip_y: bool,
    media: Mutex<MediaBinding>,
    needs_upload: AtomicBool,
    released: AtomicBool,
}

impl Asset for Texture {}

impl Texture {
    /// Creates a texture with default sampling state and a fresh identity.
    pub fn new(image: Option<TextureImage>) -> Self {
        Self {
            uuid: AssetUUID::new(),
            label: None,
            image,
            format: TexelFormat::default(),
            texel_type: TexelType::default(),
            color_space: ColorSpace::default(),
            sampler: SamplerState::default(),
            uv: UvTransform::default(),
            generate_mipmaps: true,
            premultiply_alpha: false,
            flip_y: true,
            media: Mutex::new(MediaBinding::default()),
            needs_upload: AtomicBool::new(false),
            released: AtomicBool::new(false),
        }
    }

    /// Attaches external media pipelines, replacing any bound before.
    pub fn with_media(self, binding: MediaBinding) -> Self {
        *self.media.lock().unwrap_or_else(PoisonError::into_inner) = binding;
        self
    }

    /// The identity of this texture instance.
    pub fn uuid(&self) -> AssetUUID {
        self.uuid
    }

    /// Readable dimensions of the image, if any.
    pub fn dimensions(&self) -> Option<Extent2D> {
        self.image.as_ref().and_then(TextureImage::dimensions)
    }

    /// `true` if the image is GPU block-compressed.
    pub fn is_compressed(&self) -> bool {
        matches!(self.image, Some(TextureImage::Compressed(_)))
    }

    /// `true` if the image is a live video element.
    pub fn is_video(&self) -> bool {
        matches!(self.image, Some(TextureImage::Video(_)))
    }

    /// `true` if an external media pipeline is still bound.
    pub fn has_media(&self) -> bool {
        !self
            .media
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_empty()
    }

    /// Detaches and returns the bound media pipelines, or `None` if there
    /// are none.
    pub fn take_media(&self) -> Option<MediaBinding> {
        let mut media = self.media.lock().unwrap_or_else(PoisonError::into_inner);
        let binding = std::mem::take(&mut *media);
        (!binding.is_empty()).then_some(binding)
    }

    /// Requests a (re-)upload of the image.
    pub fn mark_needs_upload(&self) {
        self.needs_upload.store(true, Ordering::Release);
    }

    /// `true` if the image must be uploaded before the next draw.
    pub fn needs_upload(&self) -> bool {
        self.needs_upload.load(Ordering::Acquire)
    }

    /// Releases the GPU-side resource.
    ///
    /// Returns `true` only for the first call.
    pub fn release(&self) -> bool {
        self.needs_upload.store(false, Ordering::Release);
        !self.released.swap(true, Ordering::AcqRel)
    }

    /// `true` once [`release`](Texture::release) has been called.
    pub fn is_released(&self) -> bool {
        self.released.load(Ordering::Acquire)
    }

    /// Copies every property of this texture onto a new instance carrying `image`.
    ///
    /// The copy gets its own identity. The media binding and the upload and
    /// release flags are not carried over.
    pub fn duplicate_with_image(&self, image: TextureImage) -> Texture {
        Texture {
            label: self.label.clone(),
            format: self.format,
            texel_type: self.texel_type,
            color_space: self.color_space,
            sampler: self.sampler,
            uv: self.uv,
            generate_mipmaps: self.generate_mipmaps,
            premultiply_alpha: self.premultiply_alpha,
            flip_y: self.flip_y,
            ..Texture::new(Some(image))
        }
    }
}
