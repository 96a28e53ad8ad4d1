//! Viewport placement for the current item.
//!
//! Hosts reveal the current item by scrolling it into view. How far to scroll
//! depends on fixed chrome at the top of the page (a navigation bar) and a
//! breathing margin at the bottom. Those values are carried in
//! [`LayoutMetrics`] and passed to whoever needs them; nothing here reads
//! ambient state.
//!
//! # Example
//!
//! ```
//! use livescroll::layout::{placement, Align, ItemRect, LayoutMetrics, SnapPolicy};
//!
//! let metrics = LayoutMetrics { nav_bar_height: 50.0, bottom_margin: 48.0 };
//!
//! // Entirely visible: nothing to do.
//! let rect = ItemRect { top: 100.0, bottom: 200.0 };
//! assert_eq!(placement(rect, 600.0, SnapPolicy::Nearest, &metrics), None);
//!
//! // Hidden under the navigation bar: bring its top into view.
//! let rect = ItemRect { top: 20.0, bottom: 120.0 };
//! assert_eq!(placement(rect, 600.0, SnapPolicy::Nearest, &metrics), Some(Align::Top));
//! ```

use serde::{Deserialize, Serialize};

/// Fixed page chrome that affects where a revealed item should land.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutMetrics {
    /// Height of the fixed navigation bar covering the top of the viewport
    pub nav_bar_height: f64,
    /// Space to keep below an item aligned to the bottom of the viewport
    pub bottom_margin: f64,
}

impl Default for LayoutMetrics {
    fn default() -> Self {
        Self {
            nav_bar_height: 0.0,
            bottom_margin: 48.0,
        }
    }
}

/// How the current item is brought into view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SnapPolicy {
    /// Always align the item with the top of the viewport.
    Top,
    /// Scroll only as far as needed to make the item visible.
    #[default]
    Nearest,
}

impl SnapPolicy {
    /// Maps the boolean "snap to top" flag onto a policy.
    pub fn from_snap_to_top(snap_to_top: bool) -> Self {
        if snap_to_top {
            SnapPolicy::Top
        } else {
            SnapPolicy::Nearest
        }
    }
}

/// Vertical bounds of an item relative to the top of the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemRect {
    pub top: f64,
    pub bottom: f64,
}

/// Edge of the viewport an item is aligned with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Top,
    Bottom,
}

/// Decides whether, and how, an item must be scrolled to be visible.
///
/// With [`SnapPolicy::Nearest`] an item hanging off the bottom is aligned to
/// the bottom, and an item whose top is under the navigation bar is aligned
/// to the top. When both hold the item is taller than the viewport and the
/// top wins.
pub fn placement(
    rect: ItemRect,
    viewport_height: f64,
    snap: SnapPolicy,
    metrics: &LayoutMetrics,
) -> Option<Align> {
    match snap {
        SnapPolicy::Top => Some(Align::Top),
        SnapPolicy::Nearest => {
            let mut align = None;
            if rect.bottom > viewport_height {
                align = Some(Align::Bottom);
            }
            if rect.top < metrics.nav_bar_height {
                align = Some(Align::Top);
            }
            align
        }
    }
}

/// Offset change that realises `align` for an item at `rect`.
///
/// Positive values scroll the content up (the item moves towards the top).
pub fn scroll_delta(
    rect: ItemRect,
    viewport_height: f64,
    align: Align,
    metrics: &LayoutMetrics,
) -> f64 {
    match align {
        Align::Top => rect.top - metrics.nav_bar_height,
        Align::Bottom => rect.bottom + metrics.bottom_margin - viewport_height,
    }
}
