use livescroll::collection::memory::MemoryCollection;
use livescroll::collection::Collection;
use livescroll::layout::{LayoutMetrics, SnapPolicy};
use livescroll::scroller::Markers;

fn sample() -> MemoryCollection {
    MemoryCollection::with_items(
        300.0,
        LayoutMetrics::default(),
        [("a", 100.0), ("b", 100.0), ("c", 100.0), ("d", 100.0)],
    )
}

#[test]
fn test_enumerate_reflects_live_state() {
    let collection = sample();
    let before = collection.enumerate();

    collection.remove("b");
    collection.insert(0, "z", 50.0);

    assert_eq!(before.len(), 4);
    assert_eq!(collection.ids(), vec!["z", "a", "c", "d"]);
    assert_eq!(collection.enumerations(), 1);
}

#[test]
fn test_items_compare_by_object() {
    let collection = sample();
    let first = collection.enumerate();
    let second = collection.enumerate();
    assert_eq!(first, second);

    collection.rebuild(|id| id.to_string());
    let rebuilt = collection.enumerate();

    // Same identifiers, different objects
    assert_eq!(collection.identify(&rebuilt[0]), "a");
    assert_ne!(first[0], rebuilt[0]);
}

#[test]
fn test_rebuild_drops_markers_and_keeps_extents() {
    let collection = MemoryCollection::with_items(300.0, LayoutMetrics::default(), [("a", 0.0)]);
    let markers = Markers::new(["current"]).unwrap();
    let item = collection.item("a").unwrap();
    collection.apply_markers(&item, &markers);
    assert_eq!(collection.marked_ids(), vec!["a"]);

    collection.rebuild(|id| format!("{}-new", id));

    assert!(collection.marked_ids().is_empty());
    assert_eq!(collection.ids(), vec!["a-new"]);
    assert_eq!(collection.item("a-new").unwrap().extent(), 0.0);
}

#[test]
fn test_markers_are_idempotent() {
    let collection = sample();
    let markers = Markers::new(["tom", "dick"]).unwrap();
    let item = collection.item("c").unwrap();

    collection.apply_markers(&item, &markers);
    collection.apply_markers(&item, &markers);
    assert!(item.has_marker("tom"));
    assert!(item.has_marker("dick"));

    collection.remove_markers(&item, &markers);
    collection.remove_markers(&item, &markers);
    assert!(!item.is_marked());
}

#[test]
fn test_reveal_scrolls_viewport() {
    let collection = sample();
    let d = collection.item("d").unwrap();

    collection.reveal(&d, SnapPolicy::Nearest);
    // d spans 300..400, bottom-aligned with a 48 margin in a 300 viewport
    assert_eq!(collection.scroll_offset(), 148.0);

    let a = collection.item("a").unwrap();
    collection.reveal(&a, SnapPolicy::Nearest);
    assert_eq!(collection.scroll_offset(), 0.0);
}

#[test]
fn test_reveal_of_missing_item_does_nothing() {
    let collection = sample();
    let stranger = MemoryCollection::new(300.0, LayoutMetrics::default()).push("x", 10.0);

    collection.reveal(&stranger, SnapPolicy::Top);

    assert_eq!(collection.scroll_offset(), 0.0);
}

#[test]
fn test_set_extent_and_remove_report_missing_ids() {
    let collection = sample();
    assert!(collection.set_extent("a", 0.0));
    assert!(!collection.set_extent("nope", 1.0));
    assert!(collection.remove("a"));
    assert!(!collection.remove("a"));
}

#[test]
fn test_contains_tracks_live_ids() {
    let collection = sample();
    assert!(collection.contains("b"));

    collection.remove("b");
    collection.rebuild(|id| id.to_uppercase());

    assert!(!collection.contains("b"));
    assert!(collection.contains("C"));
}

#[test]
fn test_detach_invalidates_root() {
    let collection = sample();
    assert!(collection.validate().is_ok());

    collection.detach();

    assert!(collection.validate().is_err());
}

#[test]
fn test_clear_empties_collection() {
    let collection = sample();
    collection.clear();
    assert!(collection.is_empty());
    assert_eq!(collection.len(), 0);
}
