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

//! Literal shader-chunk patches used by the simplified materials.
//!
//! Every anchor is an exact line of the stock chunk templates. If the host's
//! templates change these anchors may stop matching, in which case the patch
//! is silently skipped.

use super::shader::ShaderPatch;
use crate::renderer::ShaderStage;

/// Revision of the chunk templates the anchors below were taken from.
pub const CHUNK_TEMPLATE_REVISION: u32 = 128;

/// Declares the emissive uniforms in the unlit fragment shader.
pub const UNLIT_EMISSIVE_UNIFORMS: ShaderPatch = ShaderPatch {
    stage: ShaderStage::Fragment,
    anchor: "#include <lightmap_pars_fragment>",
    replacement: "#include <lightmap_pars_fragment>
uniform vec3 emissive;
uniform sampler2D emissiveMap;
",
};

/// Adds the emissive term to the unlit output color.
pub const UNLIT_EMISSIVE_OUTPUT: ShaderPatch = ShaderPatch {
    stage: ShaderStage::Fragment,
    anchor: "#include <envmap_fragment>",
    replacement: "#include <envmap_fragment>

vec3 totalEmissiveRadiance = emissive;
#include <emissivemap_fragment>
outgoingLight += totalEmissiveRadiance;

",
};

/// Declares the tangent frame varyings in the Phong vertex shader.
pub const PHONG_TANGENT_VARYINGS_VERTEX: ShaderPatch = ShaderPatch {
    stage: ShaderStage::Vertex,
    anchor: "varying vec3 vNormal;",
    replacement: "varying vec3 vNormal;
#ifdef USE_TANGENT
  varying vec3 vTangent;
  varying vec3 vBitangent;
#endif
",
};

/// Computes the tangent frame in the Phong vertex shader.
pub const PHONG_TANGENT_TRANSFORM: ShaderPatch = ShaderPatch {
    stage: ShaderStage::Vertex,
    anchor: "vNormal = normalize( transformedNormal );",
    replacement: "vNormal = normalize( transformedNormal );

  #ifdef USE_TANGENT

    vTangent = normalize( transformedTangent );
    vBitangent = normalize( cross( vNormal, vTangent ) * tangent.w );

  #endif
",
};

/// Declares the tangent frame varyings in the Phong fragment shader.
pub const PHONG_TANGENT_VARYINGS_FRAGMENT: ShaderPatch = ShaderPatch {
    stage: ShaderStage::Fragment,
    anchor: "#include <lights_phong_pars_fragment>",
    replacement: "#include <lights_phong_pars_fragment>
#ifndef FLAT_SHADED

  #ifdef USE_TANGENT
    varying vec3 vTangent;
    varying vec3 vBitangent;
  #endif

#endif
",
};

/// Patches applied by the unlit material, in order.
pub const UNLIT_PATCHES: &[ShaderPatch] = &[UNLIT_EMISSIVE_UNIFORMS, UNLIT_EMISSIVE_OUTPUT];

/// Patches applied by the Phong material, in order.
pub const PHONG_PATCHES: &[ShaderPatch] = &[
    PHONG_TANGENT_VARYINGS_VERTEX,
    PHONG_TANGENT_TRANSFORM,
    PHONG_TANGENT_VARYINGS_FRAGMENT,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_replacement_keeps_its_anchor_first() {
        for patch in UNLIT_PATCHES.iter().chain(PHONG_PATCHES) {
            assert!(
                patch.replacement.starts_with(patch.anchor),
                "{} does not re-emit its anchor",
                patch.anchor
            );
        }
    }

    #[test]
    fn test_patch_stages() {
        assert!(UNLIT_PATCHES
            .iter()
            .all(|p| p.stage == ShaderStage::Fragment));
        assert_eq!(
            PHONG_PATCHES
                .iter()
                .filter(|p| p.stage == ShaderStage::Vertex)
                .count(),
            2
        );
    }
}
