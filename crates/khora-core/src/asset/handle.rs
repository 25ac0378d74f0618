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

use super::Asset;
use std::{ops::Deref, sync::Arc};

/// A thread-safe, reference-counted handle to an asset.
///
/// Cloning a handle is cheap: it only increments the reference count and never
/// duplicates the asset. Two handles refer to "the same" resource when
/// [`ptr_eq`](AssetHandle::ptr_eq) returns `true`; materials and textures are
/// compared this way when deciding whether a conversion produced something new.
#[derive(Debug)]
pub struct AssetHandle<T: Asset>(Arc<T>);

impl<T: Asset> AssetHandle<T> {
    /// Creates a new `AssetHandle` that takes ownership of the asset data.
    pub fn new(asset: T) -> Self {
        Self(Arc::new(asset))
    }

    /// Returns `true` if both handles point at the same allocation.
    #[inline]
    pub fn ptr_eq(a: &Self, b: &Self) -> bool {
        Arc::ptr_eq(&a.0, &b.0)
    }

    /// Number of live handles sharing this asset.
    pub fn strong_count(this: &Self) -> usize {
        Arc::strong_count(&this.0)
    }
}

impl<T: Asset> Clone for AssetHandle<T> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<T: Asset> Deref for AssetHandle<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Dummy(u32);
    impl Asset for Dummy {}

    #[test]
    fn test_clone_shares_allocation() {
        let a = AssetHandle::new(Dummy(7));
        let b = a.clone();
        assert!(AssetHandle::ptr_eq(&a, &b));
        assert_eq!(AssetHandle::strong_count(&a), 2);
        assert_eq!((*b).0, 7);
    }

    #[test]
    fn test_distinct_handles_are_not_ptr_eq() {
        let a = AssetHandle::new(Dummy(1));
        let b = AssetHandle::new(Dummy(1));
        assert!(!AssetHandle::ptr_eq(&a, &b));
    }
}
