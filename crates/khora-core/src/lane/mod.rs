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

//! # Lane Abstraction
//!
//! A **Lane** is a reusable, swappable processing strategy. Quality adaptation
//! is expressed as lanes so that the owner can drive them through a
//! [`LaneContext`] without knowing what they do internally.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use khora_core::lane::{Lane, LaneKind, LaneError, LaneContext};
//!
//! struct MyCustomLane;
//!
//! impl Lane for MyCustomLane {
//!     fn strategy_name(&self) -> &'static str { "MyCustom" }
//!     fn lane_kind(&self) -> LaneKind { LaneKind::Asset }
//!
//!     fn execute(&self, _ctx: &mut LaneContext) -> Result<(), LaneError> {
//!         Ok(())
//!     }
//!
//!     fn as_any(&self) -> &dyn std::any::Any { self }
//!     fn as_any_mut(&mut self) -> &mut dyn std::any::Any { self }
//! }
//! ```

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::fmt;

// ─────────────────────────────────────────────────────────────────────────────
// LaneError
// ─────────────────────────────────────────────────────────────────────────────

/// Error type for lane operations.
#[derive(Debug)]
pub enum LaneError {
    /// The lane has not been initialized yet.
    NotInitialized,
    /// The execution context passed to the lane is missing data or has the wrong type.
    InvalidContext {
        /// What the lane expected.
        expected: &'static str,
        /// Description of what was received.
        received: String,
    },
    /// A domain-specific error occurred during execution.
    ExecutionFailed(Box<dyn std::error::Error + Send + Sync>),
}

impl fmt::Display for LaneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LaneError::NotInitialized => write!(f, "Lane not initialized"),
            LaneError::InvalidContext { expected, received } => {
                write!(
                    f,
                    "Invalid lane context: expected {expected}, got {received}"
                )
            }
            LaneError::ExecutionFailed(e) => write!(f, "Lane execution failed: {e}"),
        }
    }
}

impl std::error::Error for LaneError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LaneError::ExecutionFailed(e) => Some(e.as_ref()),
            _ => None,
        }
    }
}

impl LaneError {
    /// Convenience constructor for a missing context entry.
    pub fn missing(type_name: &'static str) -> Self {
        LaneError::InvalidContext {
            expected: type_name,
            received: "not found in LaneContext".into(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// LaneKind
// ─────────────────────────────────────────────────────────────────────────────

/// Classification of lane types, used for routing and filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LaneKind {
    /// Asset processing (texture downscaling, material conversion).
    Asset,
}

// ─────────────────────────────────────────────────────────────────────────────
// LaneContext
// ─────────────────────────────────────────────────────────────────────────────

/// A type-erased context for passing data to lanes.
///
/// Owners populate a `LaneContext` with the data their lanes need, then pass
/// it to [`Lane::execute`]. Lanes retrieve data by type using
/// [`get`](LaneContext::get).
///
/// Borrowed data goes through the [`Slot`] wrapper:
///
/// ```rust,ignore
/// use khora_core::lane::{LaneContext, Slot};
///
/// let mut value = 10u32;
/// let mut ctx = LaneContext::new();
/// ctx.insert(Slot::new(&mut value));
///
/// let slot = ctx.get::<Slot<u32>>().unwrap();
/// *slot.get() = 20;
/// ```
///
/// # Safety
///
/// `LaneContext` uses `unsafe impl Send + Sync` because it may hold [`Slot`]
/// wrappers containing raw pointers. The context is stack-scoped: it is
/// handed to one lane at a time and dropped before the borrowed data is.
pub struct LaneContext {
    data: HashMap<TypeId, Box<dyn Any>>,
}

// SAFETY: All values inserted via `insert<T: Send + Sync>()` are Send+Sync.
// Slot wrappers hold raw pointers but only live inside a single execution scope.
unsafe impl Send for LaneContext {}
unsafe impl Sync for LaneContext {}

impl LaneContext {
    /// Creates an empty context.
    pub fn new() -> Self {
        Self {
            data: HashMap::new(),
        }
    }

    /// Inserts a value, keyed by its concrete type.
    ///
    /// If a value of the same type was already present, it is replaced.
    pub fn insert<T: 'static + Send + Sync>(&mut self, value: T) {
        self.data.insert(TypeId::of::<T>(), Box::new(value));
    }

    /// Returns a shared reference to a value by type.
    pub fn get<T: 'static>(&self) -> Option<&T> {
        self.data.get(&TypeId::of::<T>())?.downcast_ref()
    }

    /// Checks whether a value of the given type is present.
    pub fn contains<T: 'static>(&self) -> bool {
        self.data.contains_key(&TypeId::of::<T>())
    }

    /// Removes and returns a value by type.
    pub fn remove<T: 'static>(&mut self) -> Option<T> {
        self.data
            .remove(&TypeId::of::<T>())
            .and_then(|b| b.downcast().ok().map(|b| *b))
    }
}

impl Default for LaneContext {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for LaneContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LaneContext")
            .field("entries", &self.data.len())
            .finish()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Slot
// ─────────────────────────────────────────────────────────────────────────────

/// A mutable borrow stored in a [`LaneContext`].
///
/// Works with unsized targets, so a lane can receive `Slot<dyn MaterialHost>`
/// without knowing the concrete scene object.
pub struct Slot<T: ?Sized>(*mut T);

// SAFETY: the pointer is only dereferenced while the owning scope is alive.
unsafe impl<T: ?Sized> Send for Slot<T> {}
unsafe impl<T: ?Sized> Sync for Slot<T> {}

impl<T: ?Sized> Slot<T> {
    /// Creates a `Slot` from a mutable reference.
    pub fn new(value: &mut T) -> Self {
        Self(value as *mut T)
    }

    /// Returns a mutable reference to the wrapped value.
    ///
    /// # Safety contract
    ///
    /// Safe when called within the scope where the original reference is
    /// still alive and no other reference to the same data exists.
    #[allow(clippy::mut_from_ref)]
    pub fn get(&self) -> &mut T {
        // SAFETY: guaranteed by single-lane-at-a-time execution
        unsafe { &mut *self.0 }
    }

    /// Returns a shared reference to the wrapped value.
    pub fn get_ref(&self) -> &T {
        // SAFETY: same as get()
        unsafe { &*self.0 }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Lane trait
// ─────────────────────────────────────────────────────────────────────────────

/// The common interface shared by every lane.
pub trait Lane: Send + Sync {
    /// Human-readable name identifying this lane's strategy.
    ///
    /// Should be unique within a lane kind (e.g. `"MaterialQuality"`).
    fn strategy_name(&self) -> &'static str;

    /// The kind of processing this lane performs.
    fn lane_kind(&self) -> LaneKind;

    /// Estimated cost of running this lane against the given context.
    ///
    /// Default returns `1.0`. The [`LaneContext`] may contain scene data
    /// needed for a more precise estimate.
    fn estimate_cost(&self, _ctx: &LaneContext) -> f32 {
        1.0
    }

    // --- Lifecycle ---

    /// Called once when the lane is registered or the underlying context resets.
    fn on_initialize(&self, _ctx: &mut LaneContext) -> Result<(), LaneError> {
        Ok(())
    }

    /// Main execution entry point.
    ///
    /// Lanes extract typed values using `ctx.get::<T>()`.
    fn execute(&self, _ctx: &mut LaneContext) -> Result<(), LaneError> {
        Ok(())
    }

    /// Called when the lane is being destroyed or the context is shutting down.
    fn on_shutdown(&self, _ctx: &mut LaneContext) {}

    // --- Downcasting ---

    /// Downcast to a concrete type for type-specific operations.
    fn as_any(&self) -> &dyn Any;

    /// Downcast to a concrete type (mutable) for type-specific operations.
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_insert_get_remove() {
        let mut ctx = LaneContext::new();
        ctx.insert(42u32);
        assert!(ctx.contains::<u32>());
        assert_eq!(ctx.get::<u32>(), Some(&42));
        assert_eq!(ctx.remove::<u32>(), Some(42));
        assert!(!ctx.contains::<u32>());
    }

    #[test]
    fn test_slot_writes_through() {
        let mut value = 10u32;
        {
            let mut ctx = LaneContext::new();
            ctx.insert(Slot::new(&mut value));
            let slot = ctx.get::<Slot<u32>>().unwrap();
            *slot.get() = 20;
            assert_eq!(*slot.get_ref(), 20);
        }
        assert_eq!(value, 20);
    }

    #[test]
    fn test_lane_error_display() {
        let err = LaneError::missing("Slot<dyn MaterialHost>");
        assert_eq!(
            err.to_string(),
            "Invalid lane context: expected Slot<dyn MaterialHost>, got not found in LaneContext"
        );
    }
}
