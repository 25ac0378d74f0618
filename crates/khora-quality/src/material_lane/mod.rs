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

//! Material downgrade strategies.
//!
//! | Tier     | Result                                               |
//! |----------|------------------------------------------------------|
//! | `High`   | the source material, untouched                       |
//! | `Medium` | a [`PhongMaterial`](khora_core::asset::PhongMaterial) sharing every texture |
//! | `Low`    | an [`UnlitMaterial`](khora_core::asset::UnlitMaterial) with capped textures |

mod conversion;
mod quality_lane;

pub use conversion::*;
pub use quality_lane::*;
