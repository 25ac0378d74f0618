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

use khora_core::renderer::{MediaBinding, Texture, TextureImage};

use super::TextureDownscaleCache;

impl TextureDownscaleCache {
    /// Tears down `texture` and everything attached to it.
    ///
    /// Stops the bound streaming session, resets the transparency decoder
    /// and detaches a video image from its source. Then evicts the texture
    /// if it is one of this cache's replacements and releases it. Works for
    /// any texture, cached or not.
    pub fn dispose(&mut self, texture: &Texture) {
        let id = texture.uuid();

        if let Some(MediaBinding { stream, decoder }) = texture.take_media() {
            if let Some(mut stream) = stream {
                stream.stop_load();
                stream.detach_media();
                stream.destroy();
                log::trace!("Destroyed adaptive stream of texture {}", id);
            }
            if let Some(mut decoder) = decoder {
                decoder.reset();
                log::trace!("Reset transparency decoder of texture {}", id);
            }
        }

        if let Some(TextureImage::Video(video)) = &texture.image {
            let element = video.element();
            element.pause();
            element.set_source("");
            element.load();
        }

        if let Some(source) = self.evict_replacement(id) {
            log::debug!("Evicted downscaled texture {} (source {})", id, source);
        }

        if !texture.release() {
            log::trace!("Texture {} was already released", id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use khora_core::math::Extent2D;
    use khora_core::renderer::{
        AdaptiveStream, CpuImage, TextureHandle, TransparencyDecoder, VideoElement, VideoSource,
    };
    use std::sync::{Arc, Mutex};

    type Calls = Arc<Mutex<Vec<&'static str>>>;

    struct Recorder(Calls);

    impl AdaptiveStream for Recorder {
        fn stop_load(&mut self) {
            self.0.lock().unwrap().push("stop_load");
        }
        fn detach_media(&mut self) {
            self.0.lock().unwrap().push("detach_media");
        }
        fn destroy(&mut self) {
            self.0.lock().unwrap().push("destroy");
        }
    }

    impl TransparencyDecoder for Recorder {
        fn reset(&mut self) {
            self.0.lock().unwrap().push("reset");
        }
    }

    impl VideoElement for Recorder {
        fn pause(&self) {
            self.0.lock().unwrap().push("pause");
        }
        fn set_source(&self, source: &str) {
            assert!(source.is_empty());
            self.0.lock().unwrap().push("set_source");
        }
        fn load(&self) {
            self.0.lock().unwrap().push("load");
        }
    }

    #[test]
    fn test_stream_is_torn_down_in_order() {
        let calls = Calls::default();
        let texture = Texture::new(None)
            .with_media(MediaBinding::stream(Box::new(Recorder(calls.clone()))));

        TextureDownscaleCache::new().dispose(&texture);

        assert_eq!(*calls.lock().unwrap(), ["stop_load", "detach_media", "destroy"]);
        assert!(!texture.has_media());
        assert!(texture.is_released());
    }

    #[test]
    fn test_decoder_is_reset_once() {
        let calls = Calls::default();
        let texture = Texture::new(None)
            .with_media(MediaBinding::decoder(Box::new(Recorder(calls.clone()))));
        let mut cache = TextureDownscaleCache::new();

        cache.dispose(&texture);
        cache.dispose(&texture);

        assert_eq!(*calls.lock().unwrap(), ["reset"]);
    }

    #[test]
    fn test_stream_and_decoder_are_both_torn_down() {
        let calls = Calls::default();
        let binding = MediaBinding::stream(Box::new(Recorder(calls.clone())))
            .with_decoder(Box::new(Recorder(calls.clone())));
        let texture = Texture::new(None).with_media(binding);

        TextureDownscaleCache::new().dispose(&texture);

        assert_eq!(
            *calls.lock().unwrap(),
            ["stop_load", "detach_media", "destroy", "reset"]
        );
        assert!(!texture.has_media());
    }

    #[test]
    fn test_video_is_detached() {
        let calls = Calls::default();
        let video = VideoSource::new(Arc::new(Recorder(calls.clone())));
        let texture = Texture::new(Some(TextureImage::Video(video)));

        TextureDownscaleCache::new().dispose(&texture);

        assert_eq!(*calls.lock().unwrap(), ["pause", "set_source", "load"]);
        assert!(texture.is_released());
    }

    #[test]
    fn test_disposing_replacement_evicts_it() {
        let mut cache = TextureDownscaleCache::new();
        let image = CpuImage::solid_rgba8(Extent2D::new(64, 64), [0, 0, 0, 255]);
        let source = TextureHandle::new(Texture::new(Some(TextureImage::Bitmap(image))));
        let replacement = cache.resize(&source, 16, 16);
        assert_eq!(cache.len(), 1);

        cache.dispose(&replacement);

        assert!(cache.is_empty());
        assert!(cache.original_of(replacement.uuid()).is_none());
        assert!(replacement.is_released());
        assert!(!replacement.needs_upload());
    }

    #[test]
    fn test_disposing_unrelated_texture_keeps_cache() {
        let mut cache = TextureDownscaleCache::new();
        let image = CpuImage::solid_rgba8(Extent2D::new(64, 64), [0, 0, 0, 255]);
        let source = TextureHandle::new(Texture::new(Some(TextureImage::Bitmap(image))));
        cache.resize(&source, 16, 16);

        cache.dispose(&Texture::new(None));

        assert_eq!(cache.len(), 1);
    }
}
