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

use std::collections::HashMap;

use image::imageops::{self, FilterType};
use image::{DynamicImage, GrayAlphaImage, GrayImage, Rgba32FImage, RgbImage, RgbaImage};
use khora_core::asset::AssetUUID;
use khora_core::math::Extent2D;
use khora_core::renderer::{
    CpuImage, PixelLayout, TexelFormat, TexelType, TextureHandle, TextureImage,
};

/// Memoizes downscaled copies of textures, keyed by source identity.
///
/// The first request for a source decides the replacement's size; later
/// requests get the same replacement whatever bounds they pass. Replacements
/// are evicted when they go through [`dispose`](Self::dispose).
#[derive(Debug, Default)]
pub struct TextureDownscaleCache {
    /// source uuid -> replacement
    replacements: HashMap<AssetUUID, TextureHandle>,
    /// replacement uuid -> source uuid
    originals: HashMap<AssetUUID, AssetUUID>,
}

impl TextureDownscaleCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `texture` bounded to `max_width` x `max_height`.
    ///
    /// Compressed, video, imageless and already-fitting textures come back
    /// unchanged. Otherwise a downscaled RGBA8 copy replaces the source, and
    /// the source is disposed.
    pub fn resize(
        &mut self,
        texture: &TextureHandle,
        max_width: u32,
        max_height: u32,
    ) -> TextureHandle {
        let source_id = texture.uuid();

        if let Some(replacement) = self.replacements.get(&source_id) {
            log::trace!("Downscale cache hit for texture {}", source_id);
            return replacement.clone();
        }

        let bitmap = match &texture.image {
            Some(TextureImage::Compressed(_)) | Some(TextureImage::Video(_)) => {
                log::trace!("Texture {} is compressed or video, kept as is", source_id);
                return texture.clone();
            }
            Some(TextureImage::Pending) | None => {
                log::trace!("Texture {} has no readable image yet", source_id);
                return texture.clone();
            }
            Some(TextureImage::Bitmap(bitmap)) => bitmap,
        };

        let bound = Extent2D::new(max_width, max_height);
        let source_size = bitmap.size();
        if source_size.fits_within(bound) {
            return texture.clone();
        }

        let target = source_size.clamped_to(bound);
        if target.width == 0 || target.height == 0 {
            log::warn!(
                "Refusing to downscale texture {} to a zero-sized target {}x{}",
                source_id,
                target.width,
                target.height
            );
            return texture.clone();
        }

        let Some(scaled) = rasterize(bitmap, target) else {
            log::warn!("Texture {} pixels could not be rasterized", source_id);
            return texture.clone();
        };

        let mut duplicate = texture.duplicate_with_image(TextureImage::Bitmap(scaled));
        duplicate.format = TexelFormat::Rgba;
        duplicate.texel_type = TexelType::UnsignedByte;
        duplicate.mark_needs_upload();
        let replacement = TextureHandle::new(duplicate);

        self.dispose(texture);

        let replacement_id = replacement.uuid();
        self.replacements.insert(source_id, replacement.clone());
        self.originals.insert(replacement_id, source_id);

        log::debug!(
            "Downscaled texture {} from {}x{} to {}x{} (replacement {})",
            source_id,
            source_size.width,
            source_size.height,
            target.width,
            target.height,
            replacement_id
        );
        replacement
    }

    /// [`resize`](Self::resize) for an optional texture slot.
    pub fn resize_slot(
        &mut self,
        texture: Option<&TextureHandle>,
        max_width: u32,
        max_height: u32,
    ) -> Option<TextureHandle> {
        texture.map(|texture| self.resize(texture, max_width, max_height))
    }

    /// Number of cached replacements.
    pub fn len(&self) -> usize {
        self.replacements.len()
    }

    /// `true` if nothing is cached.
    pub fn is_empty(&self) -> bool {
        self.replacements.is_empty()
    }

    /// The replacement registered for source `source`, if any.
    pub fn cached_replacement(&self, source: AssetUUID) -> Option<&TextureHandle> {
        self.replacements.get(&source)
    }

    /// The source a replacement was made from, if `replacement` is one.
    pub fn original_of(&self, replacement: AssetUUID) -> Option<AssetUUID> {
        self.originals.get(&replacement).copied()
    }

    /// Forgets every entry. Replacements stay alive while referenced.
    pub fn clear(&mut self) {
        if !self.replacements.is_empty() {
            log::debug!("Clearing {} downscaled textures", self.replacements.len());
        }
        self.replacements.clear();
        self.originals.clear();
    }

    pub(super) fn evict_replacement(&mut self, replacement: AssetUUID) -> Option<AssetUUID> {
        let source = self.originals.remove(&replacement)?;
        self.replacements.remove(&source);
        Some(source)
    }
}

/// Redraws `bitmap` at `target` size into a fresh RGBA8 buffer.
fn rasterize(bitmap: &CpuImage, target: Extent2D) -> Option<CpuImage> {
    let rgba = to_dynamic(bitmap)?.to_rgba8();
    let scaled = imageops::resize(&rgba, target.width, target.height, FilterType::Triangle);
    CpuImage::new(target, PixelLayout::Rgba8, scaled.into_raw())
}

fn to_dynamic(bitmap: &CpuImage) -> Option<DynamicImage> {
    let Extent2D { width, height } = bitmap.size();
    let pixels = bitmap.pixels().to_vec();
    let image = match bitmap.layout() {
        PixelLayout::L8 => DynamicImage::ImageLuma8(GrayImage::from_raw(width, height, pixels)?),
        PixelLayout::La8 => {
            DynamicImage::ImageLumaA8(GrayAlphaImage::from_raw(width, height, pixels)?)
        }
        PixelLayout::Rgb8 => DynamicImage::ImageRgb8(RgbImage::from_raw(width, height, pixels)?),
        PixelLayout::Rgba8 => DynamicImage::ImageRgba8(RgbaImage::from_raw(width, height, pixels)?),
        PixelLayout::Rgba32F => {
            let floats = pixels
                .chunks_exact(4)
                .map(|c| f32::from_ne_bytes([c[0], c[1], c[2], c[3]]))
                .collect();
            DynamicImage::ImageRgba32F(Rgba32FImage::from_raw(width, height, floats)?)
        }
    };
    Some(image)
}

#[cfg(test)]
mod tests {
    use super::*;
    use khora_core::renderer::{CompressedFormat, CompressedImage, Texture};

    fn bitmap_texture(width: u32, height: u32) -> TextureHandle {
        let image = CpuImage::solid_rgba8(Extent2D::new(width, height), [200, 100, 50, 255]);
        TextureHandle::new(Texture::new(Some(TextureImage::Bitmap(image))))
    }

    #[test]
    fn test_fitting_texture_is_untouched() {
        let mut cache = TextureDownscaleCache::new();
        let texture = bitmap_texture(512, 512);
        let out = cache.resize(&texture, 1024, 1024);
        assert!(TextureHandle::ptr_eq(&out, &texture));
        assert!(cache.is_empty());
        assert!(!texture.is_released());
    }

    #[test]
    fn test_equal_size_is_untouched() {
        let mut cache = TextureDownscaleCache::new();
        let texture = bitmap_texture(1024, 1024);
        let out = cache.resize(&texture, 1024, 1024);
        assert!(TextureHandle::ptr_eq(&out, &texture));
    }

    #[test]
    fn test_oversized_texture_is_replaced() {
        let mut cache = TextureDownscaleCache::new();
        let texture = bitmap_texture(2048, 512);
        let out = cache.resize(&texture, 1024, 1024);

        assert!(!TextureHandle::ptr_eq(&out, &texture));
        assert_eq!(out.dimensions(), Some(Extent2D::new(1024, 512)));
        assert_eq!(out.format, TexelFormat::Rgba);
        assert_eq!(out.texel_type, TexelType::UnsignedByte);
        assert!(out.needs_upload());
        assert!(texture.is_released());
        assert_eq!(cache.original_of(out.uuid()), Some(texture.uuid()));
    }

    #[test]
    fn test_solid_color_survives_filtering() {
        let mut cache = TextureDownscaleCache::new();
        let texture = bitmap_texture(64, 64);
        let out = cache.resize(&texture, 16, 16);
        let pixels = out.image.as_ref().and_then(TextureImage::as_bitmap).unwrap().pixels();
        assert_eq!(pixels.len(), 16 * 16 * 4);
        assert!(pixels.chunks_exact(4).all(|p| p == [200, 100, 50, 255]));
    }

    #[test]
    fn test_first_caller_size_wins() {
        let mut cache = TextureDownscaleCache::new();
        let texture = bitmap_texture(2048, 2048);
        let first = cache.resize(&texture, 1024, 1024);
        let second = cache.resize(&texture, 256, 256);
        assert!(TextureHandle::ptr_eq(&first, &second));
        assert_eq!(second.dimensions(), Some(Extent2D::new(1024, 1024)));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_compressed_and_pending_are_untouched() {
        let mut cache = TextureDownscaleCache::new();
        let compressed = TextureHandle::new(Texture::new(Some(TextureImage::Compressed(
            CompressedImage {
                size: Extent2D::new(4096, 4096),
                format: CompressedFormat::Bc7,
                mip_levels: Vec::new(),
            },
        ))));
        let pending = TextureHandle::new(Texture::new(Some(TextureImage::Pending)));
        let empty = TextureHandle::new(Texture::new(None));

        for texture in [&compressed, &pending, &empty] {
            let out = cache.resize(texture, 16, 16);
            assert!(TextureHandle::ptr_eq(&out, texture));
        }
        assert!(cache.is_empty());
    }

    #[test]
    fn test_zero_target_is_refused() {
        let mut cache = TextureDownscaleCache::new();
        let texture = bitmap_texture(64, 64);
        let out = cache.resize(&texture, 0, 32);
        assert!(TextureHandle::ptr_eq(&out, &texture));
        assert!(cache.is_empty());
    }

    #[test]
    fn test_resize_slot() {
        let mut cache = TextureDownscaleCache::new();
        assert!(cache.resize_slot(None, 8, 8).is_none());
        let texture = bitmap_texture(32, 32);
        let out = cache.resize_slot(Some(&texture), 8, 8).unwrap();
        assert_eq!(out.dimensions(), Some(Extent2D::new(8, 8)));
    }

    #[test]
    fn test_rgb_and_float_layouts_rasterize() {
        let size = Extent2D::new(4, 4);
        let rgb = CpuImage::new(size, PixelLayout::Rgb8, vec![10; 4 * 4 * 3]).unwrap();
        let out = rasterize(&rgb, Extent2D::new(2, 2)).unwrap();
        assert_eq!(out.layout(), PixelLayout::Rgba8);
        assert!(out.pixels().chunks_exact(4).all(|p| p == [10, 10, 10, 255]));

        let one = 1.0f32.to_ne_bytes();
        let floats: Vec<u8> = std::iter::repeat(one).take(16 * 4).flatten().collect();
        let hdr = CpuImage::new(size, PixelLayout::Rgba32F, floats).unwrap();
        let out = rasterize(&hdr, Extent2D::new(2, 2)).unwrap();
        assert!(out.pixels().iter().all(|&b| b == 255));
    }

    #[test]
    fn test_clear_empties_both_maps() {
        let mut cache = TextureDownscaleCache::new();
        let texture = bitmap_texture(64, 64);
        let out = cache.resize(&texture, 8, 8);
        cache.clear();
        assert!(cache.is_empty());
        assert!(cache.original_of(out.uuid()).is_none());
        assert!(cache.cached_replacement(texture.uuid()).is_none());
    }
}
