//! Replaying cursor commands against an in-memory collection.
//!
//! A fixture describes a starting collection and a script of commands. Some
//! commands drive the scroller, others mutate the collection behind its back
//! the way a page rewrites its DOM. Running the fixture produces one
//! transcript line per command with the current identifier and the events
//! that fired.
//!
//! ```toml
//! viewport_height = 600.0
//! script = ["next", "rebuild", "current", "previous", "previous"]
//!
//! [[items]]
//! id = "a"
//! extent = 120.0
//!
//! [[items]]
//! id = "b"
//! extent = 0.0
//! ```

mod command;

pub use command::Command;

use std::cell::RefCell;
use std::fs;
use std::path::Path;
use std::rc::Rc;

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use tracing::info;

use crate::collection::memory::MemoryCollection;
use crate::config::Config;
use crate::events::{EventKind, ScrollerEvent};
use crate::scroller::Scroller;

/// Starting collection plus the commands to replay.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Fixture {
    /// Overrides the configured viewport height
    #[serde(default)]
    pub viewport_height: Option<f64>,

    /// Initial items, in order
    #[serde(default)]
    pub items: Vec<FixtureItem>,

    /// Commands, one per entry; blank entries and `#` comments are skipped
    #[serde(default)]
    pub script: Vec<String>,
}

/// One item of a [`Fixture`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FixtureItem {
    pub id: String,
    #[serde(default = "default_extent")]
    pub extent: f64,
}

fn default_extent() -> f64 {
    100.0
}

/// Parses a fixture from TOML text.
pub fn parse_fixture(content: &str) -> Result<Fixture> {
    toml::from_str(content).context("Failed to parse fixture")
}

/// Loads and parses a fixture file.
pub fn load_fixture<P: AsRef<Path>>(path: P) -> Result<Fixture> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read fixture {}", path.display()))?;
    parse_fixture(&content)
}

/// Runs `fixture` with the markers, snap policy and layout from `config`.
///
/// Scroller errors (such as moving after `destroy`) and pushes of an id that
/// is already present are written to the transcript instead of aborting the
/// run; a command that does not parse aborts it.
pub fn run_script(fixture: &Fixture, config: &Config) -> Result<Vec<String>> {
    let viewport_height = fixture.viewport_height.unwrap_or(config.viewport_height);
    let collection = MemoryCollection::with_items(
        viewport_height,
        config.layout_metrics(),
        fixture
            .items
            .iter()
            .map(|item| (item.id.clone(), item.extent)),
    );
    let options = config.scroller_options()?;
    let mut scroller = Scroller::new(collection.clone(), options)?;

    let fired = Rc::new(RefCell::new(Vec::new()));
    for kind in [EventKind::Changed, EventKind::OutOfRange] {
        let fired = Rc::clone(&fired);
        scroller.on(kind, move |event: &ScrollerEvent| {
            fired.borrow_mut().push(describe_event(event));
        });
    }

    let mut transcript = Vec::new();
    for (number, line) in fixture.script.iter().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let command: Command = line
            .parse()
            .with_context(|| format!("script entry {}", number + 1))?;
        info!(%command, "running");

        let outcome = execute(&command, &mut scroller, &collection);
        let current = scroller.current_id().map_or("-", String::as_str);
        let mut entry = match outcome {
            Ok(()) => format!("{} -> {}", command, current),
            Err(err) => format!("{} -> error: {}", command, err),
        };
        let events = std::mem::take(&mut *fired.borrow_mut());
        if !events.is_empty() {
            entry.push_str(&format!(" [{}]", events.join(", ")));
        }
        transcript.push(entry);
    }
    Ok(transcript)
}

fn execute(
    command: &Command,
    scroller: &mut Scroller<MemoryCollection>,
    collection: &MemoryCollection,
) -> Result<()> {
    match command {
        Command::Next => scroller.next()?,
        Command::Previous => scroller.previous()?,
        Command::First => scroller.first()?,
        Command::Last => scroller.last()?,
        Command::Current => {
            scroller.current()?;
        }
        Command::Show => scroller.show()?,
        Command::Shine => scroller.shine()?,
        Command::Dull => scroller.dull()?,
        Command::Destroy => scroller.destroy(),
        Command::Push { id, extent } => {
            // Identifiers must stay unique for the cursor to find its item
            if collection.contains(id) {
                bail!("duplicate id '{}'", id);
            }
            collection.push(id.clone(), *extent);
        }
        Command::Remove { id } => {
            collection.remove(id);
        }
        Command::Extent { id, extent } => {
            collection.set_extent(id, *extent);
        }
        Command::Rebuild => collection.rebuild(|id| format!("{}'", id)),
        Command::Clear => collection.clear(),
    }
    Ok(())
}

fn describe_event(event: &ScrollerEvent) -> String {
    match event {
        ScrollerEvent::Changed => "changed".to_string(),
        ScrollerEvent::OutOfRange(direction) => {
            format!("out-of-range {:?}", direction).to_lowercase()
        }
    }
}
