//! Callback registry keyed by event kind.

use std::fmt;

use super::Event;

/// Handle returned by [`Dispatcher::on`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HandlerId(u64);

type Handler<E> = Box<dyn FnMut(&E)>;

/// Registered callbacks, invoked synchronously in registration order.
pub struct Dispatcher<E: Event> {
    handlers: Vec<(HandlerId, E::Kind, Handler<E>)>,
    next_id: u64,
}

impl<E: Event> Dispatcher<E> {
    /// Creates a dispatcher with no handlers.
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
            next_id: 0,
        }
    }

    /// Attaches `handler` to events of `kind`.
    ///
    /// The same closure logic may be registered several times; each
    /// registration gets its own id and is invoked once per event.
    pub fn on<F>(&mut self, kind: E::Kind, handler: F) -> HandlerId
    where
        F: FnMut(&E) + 'static,
    {
        let id = HandlerId(self.next_id);
        self.next_id += 1;
        self.handlers.push((id, kind, Box::new(handler)));
        id
    }

    /// Detaches a handler.
    ///
    /// Returns false if the id was not registered (or already removed).
    pub fn off(&mut self, id: HandlerId) -> bool {
        let before = self.handlers.len();
        self.handlers.retain(|(handler_id, _, _)| *handler_id != id);
        self.handlers.len() != before
    }

    /// Calls every handler registered for the event's kind.
    pub fn fire(&mut self, event: &E) {
        let kind = event.kind();
        for (_, _, handler) in self
            .handlers
            .iter_mut()
            .filter(|(_, handler_kind, _)| *handler_kind == kind)
        {
            handler(event);
        }
    }

    /// Number of handlers registered for `kind`.
    #[must_use]
    pub fn handler_count(&self, kind: E::Kind) -> usize {
        self.handlers
            .iter()
            .filter(|(_, handler_kind, _)| *handler_kind == kind)
            .count()
    }
}

impl<E: Event> Default for Dispatcher<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Event> fmt::Debug for Dispatcher<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kinds: Vec<_> = self.handlers.iter().map(|(id, kind, _)| (id, kind)).collect();
        f.debug_struct("Dispatcher").field("handlers", &kinds).finish()
    }
}
