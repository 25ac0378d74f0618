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

//! CPU-side image payloads a [`Texture`](super::Texture) can carry.

use crate::math::Extent2D;

use super::media::VideoSource;

/// Memory layout of the pixels stored in a [`CpuImage`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PixelLayout {
    /// One 8-bit luminance channel.
    L8,
    /// 8-bit luminance plus 8-bit alpha.
    La8,
    /// Three 8-bit channels.
    Rgb8,
    /// Four 8-bit channels.
    Rgba8,
    /// Four 32-bit float channels, native endianness.
    Rgba32F,
}

impl PixelLayout {
    /// Number of bytes taken by one pixel.
    pub const fn bytes_per_pixel(&self) -> usize {
        match self {
            PixelLayout::L8 => 1,
            PixelLayout::La8 => 2,
            PixelLayout::Rgb8 => 3,
            PixelLayout::Rgba8 => 4,
            PixelLayout::Rgba32F => 16,
        }
    }
}

/// A decoded bitmap with readable dimensions.
#[derive(Debug, Clone, PartialEq)]
pub struct CpuImage {
    size: Extent2D,
    layout: PixelLayout,
    pixels: Vec<u8>,
}

impl CpuImage {
    /// Wraps raw pixels.
    ///
    /// Returns `None` when `pixels.len()` does not match `size` and `layout`.
    pub fn new(size: Extent2D, layout: PixelLayout, pixels: Vec<u8>) -> Option<Self> {
        let expected = size.area() as usize * layout.bytes_per_pixel();
        if pixels.len() != expected {
            return None;
        }
        Some(Self {
            size,
            layout,
            pixels,
        })
    }

    /// Creates an image filled with a single RGBA8 color.
    pub fn solid_rgba8(size: Extent2D, rgba: [u8; 4]) -> Self {
        let pixels = rgba
            .iter()
            .copied()
            .cycle()
            .take(size.area() as usize * 4)
            .collect();
        Self {
            size,
            layout: PixelLayout::Rgba8,
            pixels,
        }
    }

    /// Image size in pixels.
    pub fn size(&self) -> Extent2D {
        self.size
    }

    /// Pixel memory layout.
    pub fn layout(&self) -> PixelLayout {
        self.layout
    }

    /// Raw pixel bytes, row-major, tightly packed.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Consumes the image and returns its pixel bytes.
    pub fn into_pixels(self) -> Vec<u8> {
        self.pixels
    }
}

/// GPU block-compression families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompressedFormat {
    /// BC1 / DXT1.
    Bc1,
    /// BC3 / DXT5.
    Bc3,
    /// BC7.
    Bc7,
    /// ETC2 with alpha.
    Etc2Rgba8,
    /// ASTC 4x4 blocks.
    Astc4x4,
}

/// A block-compressed mip chain, as produced by a transcoder.
///
/// Its pixels cannot be read back on the CPU, so it is never resampled.
#[derive(Debug, Clone, PartialEq)]
pub struct CompressedImage {
    /// Size of mip level 0.
    pub size: Extent2D,
    /// The block format of every level.
    pub format: CompressedFormat,
    /// Encoded blocks, one entry per mip level.
    pub mip_levels: Vec<Vec<u8>>,
}

/// The image payload of a texture.
#[derive(Debug, Clone)]
pub enum TextureImage {
    /// Decoded pixels with readable dimensions.
    Bitmap(CpuImage),
    /// GPU block-compressed data.
    Compressed(CompressedImage),
    /// A live video element.
    Video(VideoSource),
    /// Decoding has not completed yet.
    Pending,
}

impl TextureImage {
    /// Readable dimensions of the payload, if any.
    ///
    /// `Pending` and `Video` report `None`.
    pub fn dimensions(&self) -> Option<Extent2D> {
        match self {
            TextureImage::Bitmap(image) => Some(image.size()),
            TextureImage::Compressed(image) => Some(image.size),
            TextureImage::Video(_) | TextureImage::Pending => None,
        }
    }

    /// Returns the bitmap if this payload is one.
    pub fn as_bitmap(&self) -> Option<&CpuImage> {
        match self {
            TextureImage::Bitmap(image) => Some(image),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cpu_image_rejects_wrong_length() {
        let size = Extent2D::new(2, 2);
        assert!(CpuImage::new(size, PixelLayout::Rgba8, vec![0; 16]).is_some());
        assert!(CpuImage::new(size, PixelLayout::Rgba8, vec![0; 15]).is_none());
        assert!(CpuImage::new(size, PixelLayout::Rgb8, vec![0; 12]).is_some());
    }

    #[test]
    fn test_solid_rgba8() {
        let image = CpuImage::solid_rgba8(Extent2D::new(3, 1), [1, 2, 3, 4]);
        assert_eq!(image.pixels(), &[1, 2, 3, 4, 1, 2, 3, 4, 1, 2, 3, 4]);
        assert_eq!(image.layout(), PixelLayout::Rgba8);
    }

    #[test]
    fn test_dimensions() {
        let bitmap = TextureImage::Bitmap(CpuImage::solid_rgba8(Extent2D::new(4, 2), [0; 4]));
        assert_eq!(bitmap.dimensions(), Some(Extent2D::new(4, 2)));
        assert!(bitmap.as_bitmap().is_some());

        let compressed = TextureImage::Compressed(CompressedImage {
            size: Extent2D::new(8, 8),
            format: CompressedFormat::Bc7,
            mip_levels: vec![vec![0; 64]],
        });
        assert_eq!(compressed.dimensions(), Some(Extent2D::new(8, 8)));
        assert!(compressed.as_bitmap().is_none());

        assert_eq!(TextureImage::Pending.dimensions(), None);
    }
}
