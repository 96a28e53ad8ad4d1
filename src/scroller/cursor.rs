//! The current-item cursor.

use std::fmt;

use tracing::{debug, debug_span, trace, warn};

use super::{Markers, PositionHistory, Result, ScrollerBuilder, ScrollerError, ScrollerOptions};
use crate::collection::Collection;
use crate::events::{Direction, Dispatcher, EventKind, HandlerId, ScrollerEvent};
use crate::layout::SnapPolicy;

/// Tracks the current item of a live [`Collection`].
///
/// Movement never fails because of what the collection looks like. When the
/// current item disappears, the cursor re-acquires whatever item now sits at
/// its last known index; when a step leaves the collection, current becomes
/// `None` and an [`ScrollerEvent::OutOfRange`] is emitted. The only errors are
/// bad construction input and use after [`destroy`](Self::destroy).
///
/// Handlers registered with [`on`](Self::on) run after the operation that
/// triggered them has finished updating the cursor and the markers.
pub struct Scroller<C: Collection> {
    collection: C,
    markers: Markers,
    snap: SnapPolicy,
    /// Identifier of the current item, `None` when nothing is current
    current_id: Option<C::Id>,
    /// Last known index of every identifier that has been current
    history: PositionHistory<C::Id>,
    dispatcher: Dispatcher<ScrollerEvent>,
    /// Events raised by the running operation, delivered when it completes
    pending: Vec<ScrollerEvent>,
    destroyed: bool,
}

impl<C: Collection> Scroller<C> {
    /// Starts a [`ScrollerBuilder`].
    pub fn builder() -> ScrollerBuilder<C> {
        ScrollerBuilder::new()
    }

    /// Creates a scroller over `collection`.
    ///
    /// # Errors
    ///
    /// Returns [`ScrollerError::InvalidArgument`] if the collection reports
    /// an invalid root. The collection is not enumerated.
    pub fn new(collection: C, options: ScrollerOptions) -> Result<Self> {
        collection.validate().map_err(|reason| {
            ScrollerError::InvalidArgument(format!("invalid collection: {}", reason))
        })?;
        debug!(markers = ?options.markers, snap = ?options.snap, "scroller constructed");
        Ok(Self {
            collection,
            markers: options.markers,
            snap: options.snap,
            current_id: None,
            history: PositionHistory::new(),
            dispatcher: Dispatcher::new(),
            pending: Vec::new(),
            destroyed: false,
        })
    }

    /// The collection being tracked.
    pub fn collection(&self) -> &C {
        &self.collection
    }

    /// Markers toggled on the current item.
    pub fn markers(&self) -> &Markers {
        &self.markers
    }

    /// How the current item is brought into view.
    pub fn snap_policy(&self) -> SnapPolicy {
        self.snap
    }

    /// Identifier of the current item as last recorded.
    ///
    /// Unlike [`current`](Self::current) this does not look at the
    /// collection, so it does not notice external changes.
    pub fn current_id(&self) -> Option<&C::Id> {
        self.current_id.as_ref()
    }

    /// Positions remembered for re-acquisition.
    pub fn history(&self) -> &PositionHistory<C::Id> {
        &self.history
    }

    /// Returns true once [`destroy`](Self::destroy) has run.
    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    /// Registers `handler` for events of `kind`.
    pub fn on<F>(&mut self, kind: EventKind, handler: F) -> HandlerId
    where
        F: FnMut(&ScrollerEvent) + 'static,
    {
        self.dispatcher.on(kind, handler)
    }

    /// Removes a handler registered with [`on`](Self::on).
    pub fn off(&mut self, id: HandlerId) -> bool {
        self.dispatcher.off(id)
    }

    /// Returns the current item, re-validated against the live collection.
    ///
    /// If the current identifier no longer matches any item but the index it
    /// was last seen at is still inside the collection, the item at that index
    /// becomes current (markers, history, reveal and a `Changed` event
    /// included) and is returned.
    ///
    /// # Errors
    ///
    /// Returns [`ScrollerError::IllegalState`] after [`destroy`](Self::destroy).
    pub fn current(&mut self) -> Result<Option<C::Item>> {
        let _span = debug_span!("scroller", op = "current").entered();
        self.ensure_alive()?;
        let items = self.collection.enumerate();
        let item = self.resolve(&items).map(|index| items[index].clone());
        self.flush();
        Ok(item)
    }

    /// Makes `item` current, or clears current with `None`.
    ///
    /// Markers move from the previous item to the new one. Setting the item
    /// that is already current only refreshes its recorded position and
    /// reveals it again. An item that is not part of the collection clears
    /// current.
    ///
    /// # Errors
    ///
    /// Returns [`ScrollerError::IllegalState`] after [`destroy`](Self::destroy).
    pub fn set_current(&mut self, item: Option<C::Item>) -> Result<()> {
        let _span = debug_span!("scroller", op = "set_current").entered();
        self.ensure_alive()?;
        let items = self.collection.enumerate();
        let previous = self.resolve(&items);
        let target = item.and_then(|item| {
            let index = items.iter().position(|candidate| *candidate == item);
            if index.is_none() {
                warn!(?item, "item is not in the collection, clearing current");
            }
            index
        });
        self.replace(&items, previous, target);
        self.flush();
        Ok(())
    }

    /// Moves to the next non-empty item.
    ///
    /// From no current item this selects the first item. Stepping past the
    /// end clears current and emits `OutOfRange(Forward)`.
    ///
    /// # Errors
    ///
    /// Returns [`ScrollerError::IllegalState`] after [`destroy`](Self::destroy).
    pub fn next(&mut self) -> Result<()> {
        self.step(Direction::Forward)
    }

    /// Moves to the previous non-empty item.
    ///
    /// From no current item this wraps around to the last non-empty item.
    /// Stepping past the start clears current and emits
    /// `OutOfRange(Backward)`.
    ///
    /// # Errors
    ///
    /// Returns [`ScrollerError::IllegalState`] after [`destroy`](Self::destroy).
    pub fn previous(&mut self) -> Result<()> {
        self.step(Direction::Backward)
    }

    /// Jumps to the first item. No-op on an empty collection.
    ///
    /// # Errors
    ///
    /// Returns [`ScrollerError::IllegalState`] after [`destroy`](Self::destroy).
    pub fn first(&mut self) -> Result<()> {
        self.jump_to_end(true)
    }

    /// Jumps to the last item that has loaded, skipping trailing empty items.
    /// No-op if there is none.
    ///
    /// # Errors
    ///
    /// Returns [`ScrollerError::IllegalState`] after [`destroy`](Self::destroy).
    pub fn last(&mut self) -> Result<()> {
        self.jump_to_end(false)
    }

    /// Brings the current item back into view.
    ///
    /// # Errors
    ///
    /// Returns [`ScrollerError::IllegalState`] after [`destroy`](Self::destroy).
    pub fn show(&mut self) -> Result<()> {
        let _span = debug_span!("scroller", op = "show").entered();
        self.ensure_alive()?;
        let items = self.collection.enumerate();
        if let Some(index) = self.resolve(&items) {
            self.collection.reveal(&items[index], self.snap);
        }
        self.flush();
        Ok(())
    }

    /// Puts the markers back on the current item, e.g. after the host
    /// re-rendered it and dropped them.
    ///
    /// # Errors
    ///
    /// Returns [`ScrollerError::IllegalState`] after [`destroy`](Self::destroy).
    pub fn shine(&mut self) -> Result<()> {
        let _span = debug_span!("scroller", op = "shine").entered();
        self.ensure_alive()?;
        let items = self.collection.enumerate();
        if let Some(index) = self.resolve(&items) {
            self.collection.apply_markers(&items[index], &self.markers);
        }
        self.flush();
        Ok(())
    }

    /// Takes the markers off the current item without changing which item is
    /// current.
    ///
    /// # Errors
    ///
    /// Returns [`ScrollerError::IllegalState`] after [`destroy`](Self::destroy).
    pub fn dull(&mut self) -> Result<()> {
        let _span = debug_span!("scroller", op = "dull").entered();
        self.ensure_alive()?;
        let items = self.collection.enumerate();
        if let Some(index) = self.resolve(&items) {
            self.collection.remove_markers(&items[index], &self.markers);
        }
        self.flush();
        Ok(())
    }

    /// Clears current (taking the markers off) and retires the scroller.
    ///
    /// Every later call except `destroy` itself fails with
    /// [`ScrollerError::IllegalState`]. Destroying twice is harmless.
    pub fn destroy(&mut self) {
        let _span = debug_span!("scroller", op = "destroy").entered();
        if self.destroyed {
            debug!("scroller already destroyed");
            return;
        }
        let items = self.collection.enumerate();
        let previous = self.resolve(&items);
        self.replace(&items, previous, None);
        self.destroyed = true;
        self.flush();
    }

    fn ensure_alive(&self) -> Result<()> {
        if self.destroyed {
            debug!("tried to work with a destroyed scroller");
            return Err(ScrollerError::IllegalState(
                "scroller has been destroyed".to_string(),
            ));
        }
        Ok(())
    }

    fn step(&mut self, direction: Direction) -> Result<()> {
        let _span = debug_span!("scroller", op = ?direction).entered();
        self.ensure_alive()?;
        let items = self.collection.enumerate();
        if items.is_empty() {
            trace!("nothing to scroll through");
            return Ok(());
        }

        // Re-validate first, in case the collection changed under us.
        let previous = self.resolve(&items);
        let len = items.len() as isize;
        let step = direction.step();
        let mut index = previous.map_or(-1, |index| index as isize) + step;
        debug!(?previous, index, "stepping");
        if index < -1 {
            index = len - 1;
        }

        let target = if index < 0 || index >= len {
            None
        } else {
            self.skip_empty(&items, index, step)
        };
        self.replace(&items, previous, target);
        if target.is_none() {
            debug!(?direction, "left the container");
            self.pending.push(ScrollerEvent::OutOfRange(direction));
        }
        self.flush();
        Ok(())
    }

    fn jump_to_end(&mut self, first: bool) -> Result<()> {
        let op = if first { "first" } else { "last" };
        let _span = debug_span!("scroller", op).entered();
        self.ensure_alive()?;
        let items = self.collection.enumerate();
        if items.is_empty() {
            trace!("nothing to jump to");
            return Ok(());
        }

        let previous = self.resolve(&items);
        // Freshly streamed content often shows up empty at the end.
        let target = if first {
            Some(0)
        } else {
            self.skip_empty(&items, items.len() as isize - 1, -1)
        };
        match target {
            Some(_) => self.replace(&items, previous, target),
            None => debug!("no loaded item to jump to"),
        }
        self.flush();
        Ok(())
    }

    /// Walks from `index` by `step` until a non-empty item is found.
    fn skip_empty(&self, items: &[C::Item], mut index: isize, step: isize) -> Option<usize> {
        while index >= 0 && (index as usize) < items.len() {
            let item = &items[index as usize];
            if self.collection.extent(item) > 0.0 {
                return Some(index as usize);
            }
            debug!(index, ?item, "skipping empty item");
            index += step;
        }
        None
    }

    /// Index of the current item in `items`, re-acquiring by position if its
    /// identifier is gone.
    fn resolve(&mut self, items: &[C::Item]) -> Option<usize> {
        let current_id = self.current_id.as_ref()?;
        if let Some(index) = items
            .iter()
            .position(|item| self.collection.identify(item) == *current_id)
        {
            return Some(index);
        }

        let index = self
            .history
            .get(current_id)
            .filter(|&index| index < items.len())?;
        debug!(?current_id, index, "current item lost, re-acquiring by position");
        self.adopt(items, Some(index));
        Some(index)
    }

    /// Moves current from `previous` to `target`. Marker removal and
    /// application both happen here, before any handler runs.
    fn replace(&mut self, items: &[C::Item], previous: Option<usize>, target: Option<usize>) {
        if let (Some(previous), Some(target)) = (previous, target) {
            if previous == target {
                let item = &items[target];
                self.history.record(self.collection.identify(item), target);
                self.collection.reveal(item, self.snap);
                return;
            }
        }
        if let Some(previous) = previous {
            self.collection.remove_markers(&items[previous], &self.markers);
        }
        self.adopt(items, target);
    }

    /// Records and marks the item at `index` as current, or clears current.
    fn adopt(&mut self, items: &[C::Item], index: Option<usize>) {
        let id = match index {
            Some(index) => {
                let item = &items[index];
                let id = self.collection.identify(item);
                self.history.record(id.clone(), index);
                self.collection.apply_markers(item, &self.markers);
                self.collection.reveal(item, self.snap);
                Some(id)
            }
            None => None,
        };
        if self.current_id != id {
            debug!(from = ?self.current_id, to = ?id, "current item changed");
            self.current_id = id;
            self.pending.push(ScrollerEvent::Changed);
        }
    }

    fn flush(&mut self) {
        for event in std::mem::take(&mut self.pending) {
            self.dispatcher.fire(&event);
        }
    }
}

impl<C> fmt::Debug for Scroller<C>
where
    C: Collection + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scroller")
            .field("collection", &self.collection)
            .field("markers", &self.markers)
            .field("snap", &self.snap)
            .field("current_id", &self.current_id)
            .field("history", &self.history)
            .field("dispatcher", &self.dispatcher)
            .field("destroyed", &self.destroyed)
            .finish()
    }
}
