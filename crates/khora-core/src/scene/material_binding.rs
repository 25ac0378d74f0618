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

use crate::asset::MaterialHandle;

/// The material(s) bound to a renderable object.
#[derive(Debug, Clone, Default)]
pub enum MaterialBinding {
    /// No material.
    #[default]
    None,
    /// One material for the whole object.
    Single(MaterialHandle),
    /// One material per geometry group, in group order.
    Multiple(Vec<MaterialHandle>),
}

impl MaterialBinding {
    /// Iterates over the bound materials in order.
    pub fn iter(&self) -> std::slice::Iter<'_, MaterialHandle> {
        match self {
            MaterialBinding::None => std::slice::Iter::default(),
            MaterialBinding::Single(material) => std::slice::from_ref(material).iter(),
            MaterialBinding::Multiple(materials) => materials.iter(),
        }
    }

    /// Number of bound materials.
    pub fn len(&self) -> usize {
        self.iter().len()
    }

    /// `true` when nothing is bound.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Builds a binding of the same shape with every material replaced by `f`.
    pub fn map(&self, mut f: impl FnMut(&MaterialHandle) -> MaterialHandle) -> MaterialBinding {
        match self {
            MaterialBinding::None => MaterialBinding::None,
            MaterialBinding::Single(material) => MaterialBinding::Single(f(material)),
            MaterialBinding::Multiple(materials) => {
                MaterialBinding::Multiple(materials.iter().map(f).collect())
            }
        }
    }
}

/// A scene object that owns a material binding.
///
/// This is the only view the quality system needs of the scene graph.
pub trait MaterialHost {
    /// The current binding.
    fn material_binding(&self) -> &MaterialBinding;
    /// Replaces the binding.
    fn set_material_binding(&mut self, binding: MaterialBinding);
}

impl MaterialHost for MaterialBinding {
    fn material_binding(&self) -> &MaterialBinding {
        self
    }

    fn set_material_binding(&mut self, binding: MaterialBinding) {
        *self = binding;
    }
}

/// Calls `f` on every material of `host`, in order.
pub fn for_each_material<H>(host: &H, f: impl FnMut(&MaterialHandle))
where
    H: MaterialHost + ?Sized,
{
    host.material_binding().iter().for_each(f);
}

/// Replaces every material of `host` with the result of `f`, keeping the
/// binding's shape. Hosts without materials are left untouched.
pub fn update_materials<H>(host: &mut H, f: impl FnMut(&MaterialHandle) -> MaterialHandle)
where
    H: MaterialHost + ?Sized,
{
    if host.material_binding().is_empty() {
        return;
    }
    let updated = host.material_binding().map(f);
    host.set_material_binding(updated);
}

/// Collects the result of `f` for every material of `host`.
///
/// Always returns a list, even for a single binding.
pub fn map_materials<H, R>(host: &H, f: impl FnMut(&MaterialHandle) -> R) -> Vec<R>
where
    H: MaterialHost + ?Sized,
{
    host.material_binding().iter().map(f).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::asset::{AssetHandle, Material, PhongMaterial, StandardMaterial};

    fn standard() -> MaterialHandle {
        MaterialHandle::from_material(StandardMaterial::default())
    }

    #[test]
    fn test_empty_binding() {
        let mut host = MaterialBinding::None;
        let mut calls = 0;
        for_each_material(&host, |_| calls += 1);
        update_materials(&mut host, |m| {
            calls += 1;
            m.clone()
        });
        assert_eq!(calls, 0);
        assert!(map_materials(&host, |_| ()).is_empty());
        assert!(matches!(host, MaterialBinding::None));
    }

    #[test]
    fn test_single_binding_maps_to_one_element_list() {
        let host = MaterialBinding::Single(standard());
        let kinds = map_materials(&host, |m| m.is::<StandardMaterial>());
        assert_eq!(kinds, vec![true]);
    }

    #[test]
    fn test_update_keeps_shape() {
        let mut host = MaterialBinding::Multiple(vec![standard(), standard()]);
        update_materials(&mut host, |_| {
            MaterialHandle::from_material(PhongMaterial::default())
        });

        match &host {
            MaterialBinding::Multiple(materials) => {
                assert_eq!(materials.len(), 2);
                assert!(materials.iter().all(|m| m.is::<PhongMaterial>()));
            }
            other => panic!("shape changed: {other:?}"),
        }
    }

    #[test]
    fn test_for_each_visits_in_order() {
        let a = standard();
        let b = standard();
        let host = MaterialBinding::Multiple(vec![a.clone(), b.clone()]);
        let mut seen = Vec::new();
        for_each_material(&host, |m| seen.push(m.clone()));
        assert!(AssetHandle::ptr_eq(&seen[0], &a));
        assert!(AssetHandle::ptr_eq(&seen[1], &b));
    }

    #[test]
    fn test_works_through_trait_object() {
        let mut binding = MaterialBinding::Single(standard());
        let host: &mut dyn MaterialHost = &mut binding;
        update_materials(host, |m| {
            MaterialHandle::from_material(PhongMaterial {
                base: m.base().clone(),
                ..Default::default()
            })
        });
        assert_eq!(binding.len(), 1);
        assert!(binding.iter().all(|m| m.is::<PhongMaterial>()));
    }
}
