//! In-memory live collection.
//!
//! `MemoryCollection` is a cheaply clonable handle to shared state. One clone
//! is handed to a [`Scroller`](crate::scroller::Scroller); the owner keeps
//! another and mutates the collection behind the cursor's back, the way a page
//! mutates its DOM.
//!
//! Items are laid out top to bottom, each as tall as its extent, inside a
//! viewport with a scroll offset. Revealing an item moves that offset
//! according to [`layout::placement`](crate::layout::placement).
//!
//! # Example
//!
//! ```
//! use livescroll::collection::memory::MemoryCollection;
//! use livescroll::collection::Collection;
//! use livescroll::layout::LayoutMetrics;
//!
//! let collection = MemoryCollection::new(600.0, LayoutMetrics::default());
//! collection.push("a", 100.0);
//! collection.push("b", 0.0);
//!
//! assert_eq!(collection.ids(), vec!["a", "b"]);
//! let items = collection.enumerate();
//! assert_eq!(collection.extent(&items[1]), 0.0);
//! ```

use std::cell::RefCell;
use std::collections::BTreeSet;
use std::fmt;
use std::rc::Rc;

use tracing::trace;

use super::Collection;
use crate::layout::{self, ItemRect, LayoutMetrics, SnapPolicy};
use crate::scroller::Markers;

#[derive(Debug)]
struct Entry {
    id: String,
    extent: f64,
    markers: BTreeSet<String>,
}

/// Handle to one item of a [`MemoryCollection`].
///
/// Two handles are equal only if they point at the same item object. An item
/// replaced by [`MemoryCollection::rebuild`] is a different object even though
/// it sits at the same position.
#[derive(Clone)]
pub struct MemoryItem(Rc<RefCell<Entry>>);

impl MemoryItem {
    fn new(id: impl Into<String>, extent: f64) -> Self {
        Self(Rc::new(RefCell::new(Entry {
            id: id.into(),
            extent,
            markers: BTreeSet::new(),
        })))
    }

    /// Identifier the item currently carries.
    pub fn id(&self) -> String {
        self.0.borrow().id.clone()
    }

    /// Rendered size of the item.
    pub fn extent(&self) -> f64 {
        self.0.borrow().extent
    }

    /// True if the item carries `marker`.
    pub fn has_marker(&self, marker: &str) -> bool {
        self.0.borrow().markers.contains(marker)
    }

    /// True if the item carries any marker at all.
    pub fn is_marked(&self) -> bool {
        !self.0.borrow().markers.is_empty()
    }
}

impl PartialEq for MemoryItem {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for MemoryItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let entry = self.0.borrow();
        f.debug_struct("MemoryItem")
            .field("id", &entry.id)
            .field("extent", &entry.extent)
            .finish()
    }
}

#[derive(Debug)]
struct State {
    items: Vec<MemoryItem>,
    viewport_height: f64,
    scroll_offset: f64,
    metrics: LayoutMetrics,
    attached: bool,
    enumerations: usize,
}

/// Shared, mutable, ordered collection of [`MemoryItem`]s.
#[derive(Debug, Clone)]
pub struct MemoryCollection {
    state: Rc<RefCell<State>>,
}

impl MemoryCollection {
    /// Creates an empty collection shown in a viewport of `viewport_height`.
    pub fn new(viewport_height: f64, metrics: LayoutMetrics) -> Self {
        Self {
            state: Rc::new(RefCell::new(State {
                items: Vec::new(),
                viewport_height,
                scroll_offset: 0.0,
                metrics,
                attached: true,
                enumerations: 0,
            })),
        }
    }

    /// Creates a collection pre-filled with `(id, extent)` pairs.
    pub fn with_items<I, S>(viewport_height: f64, metrics: LayoutMetrics, items: I) -> Self
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        let collection = Self::new(viewport_height, metrics);
        for (id, extent) in items {
            collection.push(id, extent);
        }
        collection
    }

    /// Appends an item and returns its handle.
    pub fn push(&self, id: impl Into<String>, extent: f64) -> MemoryItem {
        let item = MemoryItem::new(id, extent);
        self.state.borrow_mut().items.push(item.clone());
        item
    }

    /// Inserts an item at `index` (clamped to the length) and returns it.
    pub fn insert(&self, index: usize, id: impl Into<String>, extent: f64) -> MemoryItem {
        let item = MemoryItem::new(id, extent);
        let mut state = self.state.borrow_mut();
        let index = index.min(state.items.len());
        state.items.insert(index, item.clone());
        item
    }

    /// Removes the first item carrying `id`. Returns false if there was none.
    pub fn remove(&self, id: &str) -> bool {
        let mut state = self.state.borrow_mut();
        match state.items.iter().position(|item| item.id() == id) {
            Some(index) => {
                state.items.remove(index);
                true
            }
            None => false,
        }
    }

    /// Changes the extent of the item carrying `id`, as when lazy content
    /// finishes loading. Returns false if there was no such item.
    pub fn set_extent(&self, id: &str, extent: f64) -> bool {
        match self.item(id) {
            Some(item) => {
                item.0.borrow_mut().extent = extent;
                true
            }
            None => false,
        }
    }

    /// Replaces every item with a new object named by `rename`.
    ///
    /// Order and extents are kept; markers are not, since they lived on the
    /// old objects.
    pub fn rebuild<F>(&self, mut rename: F)
    where
        F: FnMut(&str) -> String,
    {
        let mut state = self.state.borrow_mut();
        let rebuilt: Vec<MemoryItem> = state
            .items
            .iter()
            .map(|old| MemoryItem::new(rename(&old.id()), old.extent()))
            .collect();
        state.items = rebuilt;
    }

    /// Removes every item.
    pub fn clear(&self) {
        self.state.borrow_mut().items.clear();
    }

    /// Marks the collection root as gone. Building a cursor over a detached
    /// collection fails.
    pub fn detach(&self) {
        self.state.borrow_mut().attached = false;
    }

    /// Identifiers in order.
    pub fn ids(&self) -> Vec<String> {
        self.state.borrow().items.iter().map(MemoryItem::id).collect()
    }

    /// Identifiers of items that carry any marker.
    pub fn marked_ids(&self) -> Vec<String> {
        self.state
            .borrow()
            .items
            .iter()
            .filter(|item| item.is_marked())
            .map(MemoryItem::id)
            .collect()
    }

    /// True if some item carries `id`.
    pub fn contains(&self, id: &str) -> bool {
        self.state.borrow().items.iter().any(|item| item.id() == id)
    }

    /// Handle to the first item carrying `id`.
    pub fn item(&self, id: &str) -> Option<MemoryItem> {
        self.state
            .borrow()
            .items
            .iter()
            .find(|item| item.id() == id)
            .cloned()
    }

    /// Number of times [`Collection::enumerate`] has been called.
    pub fn enumerations(&self) -> usize {
        self.state.borrow().enumerations
    }

    /// Current scroll offset of the viewport.
    pub fn scroll_offset(&self) -> f64 {
        self.state.borrow().scroll_offset
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.state.borrow().items.len()
    }

    /// True if there are no items.
    pub fn is_empty(&self) -> bool {
        self.state.borrow().items.is_empty()
    }

    fn rect_of(state: &State, item: &MemoryItem) -> Option<ItemRect> {
        let mut top = 0.0;
        for candidate in &state.items {
            if candidate == item {
                let top = top - state.scroll_offset;
                return Some(ItemRect {
                    top,
                    bottom: top + candidate.extent(),
                });
            }
            top += candidate.extent();
        }
        None
    }
}

impl Collection for MemoryCollection {
    type Item = MemoryItem;
    type Id = String;

    fn enumerate(&self) -> Vec<MemoryItem> {
        let mut state = self.state.borrow_mut();
        state.enumerations += 1;
        trace!(count = state.items.len(), "enumerated memory collection");
        state.items.clone()
    }

    fn identify(&self, item: &MemoryItem) -> String {
        item.id()
    }

    fn extent(&self, item: &MemoryItem) -> f64 {
        item.extent()
    }

    fn apply_markers(&self, item: &MemoryItem, markers: &Markers) {
        let mut entry = item.0.borrow_mut();
        for marker in markers.iter() {
            entry.markers.insert(marker.to_string());
        }
    }

    fn remove_markers(&self, item: &MemoryItem, markers: &Markers) {
        let mut entry = item.0.borrow_mut();
        for marker in markers.iter() {
            entry.markers.remove(marker);
        }
    }

    fn reveal(&self, item: &MemoryItem, snap: SnapPolicy) {
        let mut state = self.state.borrow_mut();
        let Some(rect) = Self::rect_of(&state, item) else {
            return;
        };
        if let Some(align) = layout::placement(rect, state.viewport_height, snap, &state.metrics) {
            let delta = layout::scroll_delta(rect, state.viewport_height, align, &state.metrics);
            state.scroll_offset = (state.scroll_offset + delta).max(0.0);
            trace!(id = %item.id(), ?align, offset = state.scroll_offset, "revealed item");
        }
    }

    fn validate(&self) -> Result<(), String> {
        if self.state.borrow().attached {
            Ok(())
        } else {
            Err("collection root is detached".to_string())
        }
    }
}
