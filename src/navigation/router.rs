//! Router - Navigation event subscription registry.
//!
//! The seam to the routing collaborator: whatever turns user input into
//! navigation actions dispatches events here, and consumers subscribe with a
//! handler. Dispatch is synchronous and in subscription order; every handler
//! sees every event exactly once, with no reordering, debouncing, or drops.
//!
//! A `Router` is an explicitly constructed instance passed to whoever needs
//! it: there is no ambient global registry.

use std::cell::{Cell, RefCell};

use super::NavigationEvent;

/// Identifies one subscription for removal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubscriptionId(usize);

type Handler = Box<dyn Fn(&NavigationEvent)>;

/// Navigation event registry with synchronous in-order dispatch.
#[derive(Default)]
pub struct Router {
    handlers: RefCell<Vec<(usize, Handler)>>,
    next_id: Cell<usize>,
}

impl Router {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler. Returns an id for [`unsubscribe`](Self::unsubscribe).
    pub fn subscribe<F>(&self, handler: F) -> SubscriptionId
    where
        F: Fn(&NavigationEvent) + 'static,
    {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.handlers.borrow_mut().push((id, Box::new(handler)));
        SubscriptionId(id)
    }

    /// Remove a subscription. Removing an already-removed id is a no-op.
    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.handlers
            .borrow_mut()
            .retain(|(handler_id, _)| *handler_id != id.0);
    }

    /// Dispatch one event to every handler, in subscription order.
    ///
    /// Handlers must not subscribe or unsubscribe from inside dispatch; the
    /// registry is borrowed for the duration of the call.
    pub fn dispatch(&self, event: &NavigationEvent) {
        for (_, handler) in self.handlers.borrow().iter() {
            handler(event);
        }
    }

    /// Convenience: dispatch a selection event.
    pub fn navigate(&self, id: impl Into<String>) {
        self.dispatch(&NavigationEvent::select(id));
    }

    /// Number of live subscriptions.
    pub fn handler_count(&self) -> usize {
        self.handlers.borrow().len()
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_dispatch_reaches_handlers_in_order() {
        let router = Router::new();
        let log = Rc::new(RefCell::new(Vec::new()));

        let log_a = log.clone();
        router.subscribe(move |e| log_a.borrow_mut().push(format!("a:{:?}", e.selected())));
        let log_b = log.clone();
        router.subscribe(move |e| log_b.borrow_mut().push(format!("b:{:?}", e.selected())));

        router.navigate("x");

        assert_eq!(
            *log.borrow(),
            vec!["a:Some(\"x\")".to_string(), "b:Some(\"x\")".to_string()]
        );
    }

    #[test]
    fn test_unsubscribe_stops_delivery() {
        let router = Router::new();
        let count = Rc::new(Cell::new(0));

        let count_clone = count.clone();
        let id = router.subscribe(move |_| count_clone.set(count_clone.get() + 1));

        router.navigate("a");
        assert_eq!(count.get(), 1);

        router.unsubscribe(id);
        router.navigate("b");
        assert_eq!(count.get(), 1);
        assert_eq!(router.handler_count(), 0);
    }

    #[test]
    fn test_unsubscribe_twice_is_noop() {
        let router = Router::new();
        let id = router.subscribe(|_| {});
        let other = router.subscribe(|_| {});

        router.unsubscribe(id);
        router.unsubscribe(id);

        assert_eq!(router.handler_count(), 1);
        router.unsubscribe(other);
        assert_eq!(router.handler_count(), 0);
    }

    #[test]
    fn test_every_event_delivered_once() {
        let router = Router::new();
        let count = Rc::new(Cell::new(0));

        let count_clone = count.clone();
        router.subscribe(move |_| count_clone.set(count_clone.get() + 1));

        for _ in 0..5 {
            router.dispatch(&NavigationEvent::none());
        }
        assert_eq!(count.get(), 5);
    }
}
