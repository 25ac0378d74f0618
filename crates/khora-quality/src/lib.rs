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

//! # Khora Quality
//!
//! Strategies that trade material and texture fidelity for memory and speed.
//!
//! - [`texture_lane`]: the downscale cache and the texture release protocol.
//! - [`material_lane`]: standard-to-Phong / standard-to-unlit conversion and
//!   the [`MaterialQualityLane`](material_lane::MaterialQualityLane) that
//!   drives it over scene objects.
//! - [`settings`]: RON-backed configuration.

#![warn(missing_docs)]

pub mod material_lane;
pub mod settings;
pub mod texture_lane;

pub use material_lane::{convert_material, MaterialQualityLane};
pub use settings::{QualityConfigError, QualitySettings};
pub use texture_lane::TextureDownscaleCache;
