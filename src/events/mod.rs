//! Typed notification channel.
//!
//! A [`Dispatcher`] delivers events of one type to callbacks registered per
//! event kind. The set of kinds is fixed by the event type, so there is no
//! way to subscribe to a kind that can never fire.
//!
//! # Example
//!
//! ```
//! use std::cell::Cell;
//! use std::rc::Rc;
//! use livescroll::events::{Direction, Dispatcher, EventKind, ScrollerEvent};
//!
//! let hits = Rc::new(Cell::new(0));
//! let mut dispatcher = Dispatcher::<ScrollerEvent>::new();
//! let counter = Rc::clone(&hits);
//! dispatcher.on(EventKind::OutOfRange, move |_| counter.set(counter.get() + 1));
//!
//! dispatcher.fire(&ScrollerEvent::Changed);
//! dispatcher.fire(&ScrollerEvent::OutOfRange(Direction::Forward));
//! assert_eq!(hits.get(), 1);
//! ```

mod dispatcher;

pub use dispatcher::{Dispatcher, HandlerId};

/// An event that can be routed by kind.
pub trait Event {
    /// Discriminant used to route the event to its handlers.
    type Kind: Copy + Eq + std::fmt::Debug;

    /// Returns the kind of this event.
    fn kind(&self) -> Self::Kind;
}

/// Direction of a step through the collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    /// Signed index increment for one step in this direction.
    pub fn step(self) -> isize {
        match self {
            Direction::Forward => 1,
            Direction::Backward => -1,
        }
    }
}

/// Notifications emitted by a [`Scroller`](crate::scroller::Scroller).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollerEvent {
    /// The current item changed.
    Changed,
    /// A directional move left the collection through one of its ends.
    ///
    /// This is a normal control-flow signal, not an error. Owners typically
    /// move focus somewhere else in response.
    OutOfRange(Direction),
}

/// Kinds of [`ScrollerEvent`] that handlers subscribe to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    Changed,
    OutOfRange,
}

impl Event for ScrollerEvent {
    type Kind = EventKind;

    fn kind(&self) -> EventKind {
        match self {
            ScrollerEvent::Changed => EventKind::Changed,
            ScrollerEvent::OutOfRange(_) => EventKind::OutOfRange,
        }
    }
}
