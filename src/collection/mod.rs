//! The live collection a cursor walks over.
//!
//! A [`Collection`] is the cursor's whole view of its host environment. It
//! enumerates the items that exist right now, derives identifiers for them,
//! measures them, and toggles presentation markers. The cursor calls
//! [`Collection::enumerate`] afresh for every operation and never keeps item
//! handles between operations, so the host is free to add, remove or
//! re-create items at any time.
//!
//! [`memory::MemoryCollection`] is an in-process implementation used by the
//! script runner and the tests.

pub mod memory;

use std::fmt::Debug;
use std::hash::Hash;

use crate::layout::SnapPolicy;
use crate::scroller::Markers;

/// Host side of a [`Scroller`](crate::scroller::Scroller).
pub trait Collection {
    /// Handle to a host-owned item. Equality is identity of the host object.
    type Item: Clone + PartialEq + Debug;

    /// Logical identifier, stable across re-enumeration of the same item.
    type Id: Clone + Eq + Hash + Debug;

    /// Returns the items in order, reflecting the live state at call time.
    fn enumerate(&self) -> Vec<Self::Item>;

    /// Derives the identifier of `item`. Must be deterministic.
    ///
    /// Identifiers must be unique within one enumeration. The cursor looks
    /// the current item up by identifier and takes the first match, so two
    /// items sharing one can leave the markers on the wrong item.
    fn identify(&self, item: &Self::Item) -> Self::Id;

    /// Rendered size of `item`. Zero marks content that has not loaded yet.
    fn extent(&self, item: &Self::Item) -> f64;

    /// Puts `markers` on `item`. Idempotent.
    fn apply_markers(&self, item: &Self::Item, markers: &Markers);

    /// Takes `markers` off `item`. Idempotent.
    fn remove_markers(&self, item: &Self::Item, markers: &Markers);

    /// Best-effort scroll of `item` into view.
    fn reveal(&self, item: &Self::Item, snap: SnapPolicy);

    /// Checks that the collection root is usable. Called once, at build time,
    /// before any enumeration.
    fn validate(&self) -> Result<(), String> {
        Ok(())
    }
}
