use std::cell::RefCell;
use std::rc::Rc;

use livescroll::events::{Direction, Dispatcher, EventKind, ScrollerEvent};

#[test]
fn test_handlers_run_in_registration_order() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut dispatcher = Dispatcher::<ScrollerEvent>::new();
    for name in ["first", "second", "third"] {
        let log = Rc::clone(&log);
        dispatcher.on(EventKind::Changed, move |_| log.borrow_mut().push(name));
    }

    dispatcher.fire(&ScrollerEvent::Changed);

    assert_eq!(*log.borrow(), vec!["first", "second", "third"]);
}

#[test]
fn test_handlers_only_see_their_kind() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut dispatcher = Dispatcher::<ScrollerEvent>::new();
    let changed = Rc::clone(&log);
    dispatcher.on(EventKind::Changed, move |event| changed.borrow_mut().push(*event));
    let out = Rc::clone(&log);
    dispatcher.on(EventKind::OutOfRange, move |event| out.borrow_mut().push(*event));

    dispatcher.fire(&ScrollerEvent::OutOfRange(Direction::Backward));

    assert_eq!(
        *log.borrow(),
        vec![ScrollerEvent::OutOfRange(Direction::Backward)]
    );
}

#[test]
fn test_off_removes_one_registration() {
    let hits = Rc::new(RefCell::new(0));
    let mut dispatcher = Dispatcher::<ScrollerEvent>::new();
    let a = Rc::clone(&hits);
    let first = dispatcher.on(EventKind::Changed, move |_| *a.borrow_mut() += 1);
    let b = Rc::clone(&hits);
    dispatcher.on(EventKind::Changed, move |_| *b.borrow_mut() += 10);

    assert!(dispatcher.off(first));
    assert!(!dispatcher.off(first));
    assert_eq!(dispatcher.handler_count(EventKind::Changed), 1);

    dispatcher.fire(&ScrollerEvent::Changed);
    assert_eq!(*hits.borrow(), 10);
}

#[test]
fn test_fire_without_handlers_is_fine() {
    let mut dispatcher = Dispatcher::<ScrollerEvent>::default();
    dispatcher.fire(&ScrollerEvent::Changed);
    assert_eq!(dispatcher.handler_count(EventKind::OutOfRange), 0);
}

#[test]
fn test_direction_steps() {
    assert_eq!(Direction::Forward.step(), 1);
    assert_eq!(Direction::Backward.step(), -1);
}
