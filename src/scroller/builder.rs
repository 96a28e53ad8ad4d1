//! Step-by-step construction of a [`Scroller`].

use super::{Markers, Result, Scroller, ScrollerError, ScrollerOptions};
use crate::collection::Collection;
use crate::layout::SnapPolicy;

/// Collects construction parameters and validates them in [`build`].
///
/// Nothing is validated until `build` is called, and `build` never touches
/// the collection's items: a bad argument is reported before the first
/// enumeration.
///
/// [`build`]: ScrollerBuilder::build
#[derive(Debug)]
pub struct ScrollerBuilder<C> {
    collection: Option<C>,
    markers: Vec<String>,
    snap: SnapPolicy,
}

impl<C: Collection> ScrollerBuilder<C> {
    /// Starts a builder with the default marker and [`SnapPolicy::Nearest`].
    pub fn new() -> Self {
        Self {
            collection: None,
            markers: Markers::default().iter().map(str::to_string).collect(),
            snap: SnapPolicy::default(),
        }
    }

    /// Sets the collection to walk over.
    pub fn collection(mut self, collection: C) -> Self {
        self.collection = Some(collection);
        self
    }

    /// Sets the collection from an optional value, as handed over by hosts
    /// whose lookup of the collection root may come up empty.
    pub fn maybe_collection(mut self, collection: Option<C>) -> Self {
        self.collection = collection;
        self
    }

    /// Replaces the markers toggled on the current item.
    pub fn markers<I, S>(mut self, markers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.markers = markers.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the snap policy.
    pub fn snap(mut self, snap: SnapPolicy) -> Self {
        self.snap = snap;
        self
    }

    /// Shorthand for [`snap`](Self::snap) from a boolean flag.
    pub fn snap_to_top(self, snap_to_top: bool) -> Self {
        self.snap(SnapPolicy::from_snap_to_top(snap_to_top))
    }

    /// Copies markers and snap policy from prepared options.
    pub fn options(mut self, options: ScrollerOptions) -> Self {
        self.markers = options.markers.iter().map(str::to_string).collect();
        self.snap = options.snap;
        self
    }

    /// Validates the parameters and builds the scroller.
    ///
    /// # Errors
    ///
    /// Returns [`ScrollerError::InvalidArgument`] if no collection was
    /// given, the collection reports an invalid root, or a marker is
    /// malformed.
    pub fn build(self) -> Result<Scroller<C>> {
        let collection = self.collection.ok_or_else(|| {
            ScrollerError::InvalidArgument("no collection was supplied".to_string())
        })?;
        let markers = Markers::new(self.markers)?;
        Scroller::new(
            collection,
            ScrollerOptions {
                markers,
                snap: self.snap,
            },
        )
    }
}

impl<C: Collection> Default for ScrollerBuilder<C> {
    fn default() -> Self {
        Self::new()
    }
}
