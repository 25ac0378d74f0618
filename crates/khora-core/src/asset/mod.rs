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

//! Asset identity, shared handles and the material family.
//!
//! The key components are:
//! - The [`Asset`] trait: a marker for all types that can be shared as assets.
//! - [`AssetUUID`]: the stable identity of one logical resource instance.
//! - [`AssetHandle`]: the `Arc`-backed shared handle.
//! - The [`Material`] trait and its concrete variants.

mod handle;
mod materials;
mod uuid;

pub use handle::*;
pub use materials::*;
pub use uuid::*;

/// A marker trait for types that can be managed by the asset system.
///
/// The supertraits enforce critical safety guarantees:
/// - `Send` + `Sync`: the asset can be shared between threads.
/// - `'static`: the asset holds no borrowed data.
///
/// # Examples
///
/// ```
/// use khora_core::asset::Asset;
///
/// struct Palette {
///     // ... fields
/// }
///
/// impl Asset for Palette {}
/// ```
pub trait Asset: Send + Sync + 'static {}
