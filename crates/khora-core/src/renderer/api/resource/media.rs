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

//! External media pipelines that can feed a texture.
//!
//! These are consumed interfaces: the engine never decodes video itself, it
//! only has to shut the pipelines down when a texture is released.

use std::fmt;
use std::sync::Arc;

/// A playing video element backing a texture image.
///
/// Methods take `&self`; implementations are expected to use interior
/// mutability since the element is shared with the playback side.
pub trait VideoElement: Send + Sync {
    /// Pauses playback.
    fn pause(&self);
    /// Replaces the media source. An empty string detaches it.
    fn set_source(&self, source: &str);
    /// Reloads the element with its current source.
    fn load(&self);
}

/// A shared handle to a [`VideoElement`].
#[derive(Clone)]
pub struct VideoSource(Arc<dyn VideoElement>);

impl VideoSource {
    /// Wraps a video element.
    pub fn new(element: Arc<dyn VideoElement>) -> Self {
        Self(element)
    }

    /// The wrapped element.
    pub fn element(&self) -> &dyn VideoElement {
        self.0.as_ref()
    }
}

impl fmt::Debug for VideoSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VideoSource").finish_non_exhaustive()
    }
}

/// An adaptive streaming session (HLS-like) attached to a video texture.
pub trait AdaptiveStream: Send {
    /// Stops fetching segments.
    fn stop_load(&mut self);
    /// Detaches the session from its media element.
    fn detach_media(&mut self);
    /// Frees every resource held by the session.
    fn destroy(&mut self);
}

/// A side-channel decoder producing transparency for a video texture.
pub trait TransparencyDecoder: Send {
    /// Resets the decoder and releases its buffers.
    fn reset(&mut self);
}

/// The external pipelines bound to a texture.
///
/// A streamed video can carry both a stream session and a transparency
/// decoder at once, so each has its own slot.
#[derive(Default)]
pub struct MediaBinding {
    /// An adaptive streaming session.
    pub stream: Option<Box<dyn AdaptiveStream>>,
    /// A transparency side-channel decoder.
    pub decoder: Option<Box<dyn TransparencyDecoder>>,
}

impl MediaBinding {
    /// A binding holding only a streaming session.
    pub fn stream(stream: Box<dyn AdaptiveStream>) -> Self {
        Self {
            stream: Some(stream),
            decoder: None,
        }
    }

    /// A binding holding only a transparency decoder.
    pub fn decoder(decoder: Box<dyn TransparencyDecoder>) -> Self {
        Self {
            stream: None,
            decoder: Some(decoder),
        }
    }

    /// Adds a transparency decoder next to the existing pipelines.
    pub fn with_decoder(mut self, decoder: Box<dyn TransparencyDecoder>) -> Self {
        self.decoder = Some(decoder);
        self
    }

    /// `true` if neither pipeline is bound.
    pub fn is_empty(&self) -> bool {
        self.stream.is_none() && self.decoder.is_none()
    }
}

impl fmt::Debug for MediaBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MediaBinding")
            .field("stream", &self.stream.is_some())
            .field("decoder", &self.decoder.is_some())
            .finish()
    }
}
