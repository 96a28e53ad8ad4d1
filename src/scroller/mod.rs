//! A cursor over a live, externally mutated collection.
//!
//! The [`Scroller`] keeps track of one "current" item in a [`Collection`]
//! whose items can be added, removed or re-created at any moment by someone
//! else. It never holds on to items: it remembers the current item's
//! identifier and, as a fallback, the index each identifier was last seen at.
//! Every operation enumerates the collection afresh and re-validates the
//! current item before acting.
//!
//! # Modules
//!
//! - `cursor`: the [`Scroller`] itself
//! - `builder`: [`ScrollerBuilder`] with construction-time validation
//! - `history`: [`PositionHistory`], the positional fallback memo
//! - `error`: [`ScrollerError`]
//!
//! # Example
//!
//! ```
//! use livescroll::collection::memory::MemoryCollection;
//! use livescroll::layout::LayoutMetrics;
//! use livescroll::scroller::Scroller;
//!
//! let posts = MemoryCollection::with_items(
//!     600.0,
//!     LayoutMetrics::default(),
//!     [("a", 100.0), ("b", 100.0), ("c", 100.0)],
//! );
//! let mut scroller = Scroller::builder()
//!     .collection(posts.clone())
//!     .markers(["current"])
//!     .build()
//!     .unwrap();
//!
//! scroller.next().unwrap();
//! scroller.next().unwrap();
//! assert_eq!(scroller.current_id(), Some(&"b".to_string()));
//! assert_eq!(posts.marked_ids(), vec!["b"]);
//! ```
//!
//! [`Collection`]: crate::collection::Collection

mod builder;
mod cursor;
mod error;
pub mod history;

pub use builder::ScrollerBuilder;
pub use cursor::Scroller;
pub use error::{Result, ScrollerError};
pub use history::PositionHistory;

use crate::layout::SnapPolicy;

/// Presentation markers put on the current item (CSS classes in a browser).
///
/// Markers are non-empty tokens without whitespace. Duplicates are dropped,
/// keeping the first occurrence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Markers(Vec<String>);

impl Markers {
    /// Validates and collects `markers`.
    pub fn new<I, S>(markers: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut tokens: Vec<String> = Vec::new();
        for marker in markers {
            let marker = marker.into();
            if marker.is_empty() {
                return Err(ScrollerError::InvalidArgument(
                    "marker must not be empty".to_string(),
                ));
            }
            if marker.chars().any(char::is_whitespace) {
                return Err(ScrollerError::InvalidArgument(format!(
                    "marker '{}' contains whitespace",
                    marker
                )));
            }
            if !tokens.contains(&marker) {
                tokens.push(marker);
            }
        }
        Ok(Self(tokens))
    }

    /// Iterates over the markers in the order given.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Number of distinct markers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if no marker is configured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for Markers {
    fn default() -> Self {
        Self(vec!["current".to_string()])
    }
}

/// Presentation settings for a [`Scroller`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScrollerOptions {
    /// Markers toggled on the current item
    pub markers: Markers,
    /// How the current item is brought into view
    pub snap: SnapPolicy,
}
