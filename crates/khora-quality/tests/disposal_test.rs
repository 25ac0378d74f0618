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

use khora_core::math::Extent2D;
use khora_core::renderer::{
    AdaptiveStream, CpuImage, MediaBinding, Texture, TextureHandle, TextureImage,
    TransparencyDecoder, VideoElement, VideoSource,
};
use khora_quality::TextureDownscaleCache;
use std::sync::{Arc, Mutex};

// --- Test Setup: media doubles sharing one call log ---
#[derive(Clone, Default)]
struct CallLog(Arc<Mutex<Vec<String>>>);

impl CallLog {
    fn push(&self, call: impl Into<String>) {
        self.0.lock().unwrap().push(call.into());
    }

    fn calls(&self) -> Vec<String> {
        self.0.lock().unwrap().clone()
    }
}

struct FakeStream(CallLog);

impl AdaptiveStream for FakeStream {
    fn stop_load(&mut self) {
        self.0.push("stream.stop_load");
    }
    fn detach_media(&mut self) {
        self.0.push("stream.detach_media");
    }
    fn destroy(&mut self) {
        self.0.push("stream.destroy");
    }
}

struct FakeDecoder(CallLog);

impl TransparencyDecoder for FakeDecoder {
    fn reset(&mut self) {
        self.0.push("decoder.reset");
    }
}

struct FakeVideo(CallLog);

impl VideoElement for FakeVideo {
    fn pause(&self) {
        self.0.push("video.pause");
    }
    fn set_source(&self, source: &str) {
        self.0.push(format!("video.set_source({source:?})"));
    }
    fn load(&self) {
        self.0.push("video.load");
    }
}
// ---

#[test]
fn test_streamed_video_teardown_order() {
    // --- 1. Setup: a video texture fed by an adaptive stream ---
    let log = CallLog::default();
    let video = VideoSource::new(Arc::new(FakeVideo(log.clone())));
    let texture = Texture::new(Some(TextureImage::Video(video)))
        .with_media(MediaBinding::stream(Box::new(FakeStream(log.clone()))));
    let mut cache = TextureDownscaleCache::new();

    // --- 2. Dispose ---
    cache.dispose(&texture);

    // --- 3. Verify: stream first, then the element, then release ---
    assert_eq!(
        log.calls(),
        [
            "stream.stop_load",
            "stream.detach_media",
            "stream.destroy",
            "video.pause",
            "video.set_source(\"\")",
            "video.load",
        ]
    );
    assert!(!texture.has_media());
    assert!(texture.is_released());
}

#[test]
fn test_video_with_stream_and_decoder_releases_everything() {
    // --- 1. Setup: a streamed video that also carries a transparency decoder ---
    let log = CallLog::default();
    let video = VideoSource::new(Arc::new(FakeVideo(log.clone())));
    let binding = MediaBinding::stream(Box::new(FakeStream(log.clone())))
        .with_decoder(Box::new(FakeDecoder(log.clone())));
    let texture = Texture::new(Some(TextureImage::Video(video))).with_media(binding);
    let mut cache = TextureDownscaleCache::new();

    // --- 2. Dispose twice ---
    cache.dispose(&texture);
    cache.dispose(&texture);

    // --- 3. Verify: both pipelines stopped once, before the element ---
    let calls = log.calls();
    assert_eq!(
        calls[..4],
        [
            "stream.stop_load",
            "stream.detach_media",
            "stream.destroy",
            "decoder.reset",
        ]
    );
    assert_eq!(calls.iter().filter(|c| *c == "decoder.reset").count(), 1);
    assert_eq!(calls.iter().filter(|c| *c == "stream.destroy").count(), 1);
    assert_eq!(calls[4..7], ["video.pause", "video.set_source(\"\")", "video.load"]);
    assert!(!texture.has_media());
    assert!(texture.is_released());
}

#[test]
fn test_video_textures_are_never_downscaled() {
    let log = CallLog::default();
    let video = VideoSource::new(Arc::new(FakeVideo(log.clone())));
    let texture = TextureHandle::new(Texture::new(Some(TextureImage::Video(video))));
    let mut cache = TextureDownscaleCache::new();

    let out = cache.resize(&texture, 1, 1);

    assert!(TextureHandle::ptr_eq(&out, &texture));
    assert!(log.calls().is_empty());
    assert!(!texture.is_released());
}

#[test]
fn test_evicted_source_is_resized_again() {
    // --- 1. Setup ---
    let image = CpuImage::solid_rgba8(Extent2D::new(256, 256), [0, 255, 0, 255]);
    let source = TextureHandle::new(Texture::new(Some(TextureImage::Bitmap(image))));
    let mut cache = TextureDownscaleCache::new();

    // --- 2. Resize, dispose the replacement, resize again ---
    let first = cache.resize(&source, 64, 64);
    cache.dispose(&first);
    let second = cache.resize(&source, 32, 32);

    // --- 3. The second request produced a fresh replacement ---
    assert!(!TextureHandle::ptr_eq(&first, &second));
    assert_eq!(second.dimensions(), Some(Extent2D::new(32, 32)));
    assert_eq!(cache.original_of(second.uuid()), Some(source.uuid()));
    assert_eq!(cache.len(), 1);
}
