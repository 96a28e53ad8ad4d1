#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use livescroll::collection::memory::MemoryCollection;
use livescroll::events::{EventKind, ScrollerEvent};
use livescroll::layout::LayoutMetrics;
use livescroll::scroller::Scroller;

/// Collection of 100-tall items named by `ids`, in a 600-tall viewport.
pub fn collection(ids: &[&str]) -> MemoryCollection {
    with_extents(&ids.iter().map(|id| (*id, 100.0)).collect::<Vec<_>>())
}

pub fn with_extents(items: &[(&str, f64)]) -> MemoryCollection {
    MemoryCollection::with_items(
        600.0,
        LayoutMetrics::default(),
        items.iter().map(|(id, extent)| (id.to_string(), *extent)),
    )
}

pub fn scroller(collection: &MemoryCollection) -> Scroller<MemoryCollection> {
    Scroller::builder()
        .collection(collection.clone())
        .markers(["current"])
        .build()
        .expect("valid scroller")
}

/// Records every event the scroller fires, in order.
pub fn record_events(scroller: &mut Scroller<MemoryCollection>) -> Rc<RefCell<Vec<ScrollerEvent>>> {
    let events = Rc::new(RefCell::new(Vec::new()));
    for kind in [EventKind::Changed, EventKind::OutOfRange] {
        let events = Rc::clone(&events);
        scroller.on(kind, move |event| events.borrow_mut().push(*event));
    }
    events
}

pub fn current(scroller: &Scroller<MemoryCollection>) -> Option<&str> {
    scroller.current_id().map(String::as_str)
}
