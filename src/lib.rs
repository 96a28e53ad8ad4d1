//! livescroll - a cursor over a live, externally mutated collection.
//!
//! The [`Scroller`](scroller::Scroller) tracks the current item of a
//! collection that someone else keeps changing: items appear, disappear, get
//! rebuilt under new identities or show up empty while their content loads.
//! It re-validates on every operation, recovers the current item by position
//! when its identity is lost, skips items that have not loaded, and reports
//! leaving either end of the collection as an event rather than an error.
//!
//! # Modules
//!
//! - `collection`: the host interface and an in-memory implementation
//! - `scroller`: the cursor, its builder and errors
//! - `events`: typed notifications and the dispatcher
//! - `layout`: viewport placement of the current item
//! - `config`: TOML configuration
//! - `script`: fixture-driven replay used by the `livescroll` binary

pub mod collection;
pub mod config;
pub mod events;
pub mod layout;
pub mod scroller;
pub mod script;
