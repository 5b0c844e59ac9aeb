//! Navigator - Navigation listener and current-document state.
//!
//! Consumes navigation events, resolves them against the index, and
//! republishes the result as a reactive signal. A lookup miss is not an
//! error: the state simply becomes absent and whatever renders it shows
//! the neutral empty projection.

use std::rc::Rc;
use std::sync::Arc;

use spark_signals::{signal, Signal};
use tracing::debug;

use crate::content::{Document, DocumentIndex};

use super::{NavigationEvent, Router, ViewHandle};

/// Navigation listener owning the current-document signal.
///
/// The index is injected at construction and only ever read. Cloning a
/// `Navigator` is cheap and shares both the index and the signal, which is
/// how the subscription closure and the render pipeline observe the same
/// state.
#[derive(Clone)]
pub struct Navigator {
    index: Arc<DocumentIndex>,
    current: Signal<Option<Arc<Document>>>,
}

impl Navigator {
    pub fn new(index: Arc<DocumentIndex>) -> Self {
        Self {
            index,
            current: signal(None),
        }
    }

    /// Handle one navigation event, synchronously.
    ///
    /// Present identifier → state becomes the looked-up document.
    /// Absent, empty, or unknown identifier → state becomes `None`.
    /// Observers of the signal refresh as a side effect of the write.
    pub fn on_navigate(&self, event: &NavigationEvent) {
        let doc = event.selected().and_then(|id| {
            let found = self.index.get(id);
            if found.is_none() {
                debug!(id, "navigation to unknown identifier");
            }
            found
        });
        self.current.set(doc);
    }

    /// Current document, or `None` before the first event / after a miss.
    pub fn current(&self) -> Option<Arc<Document>> {
        self.current.get()
    }

    /// The underlying signal, for reactive consumers (deriveds, effects).
    pub fn current_signal(&self) -> Signal<Option<Arc<Document>>> {
        self.current.clone()
    }

    /// The index this navigator resolves against.
    pub fn index(&self) -> &Arc<DocumentIndex> {
        &self.index
    }

    /// Register this navigator as a consumer of `router` events.
    ///
    /// The returned handle scopes the subscription: dropping or detaching it
    /// releases the registration exactly once, on every exit path. If the
    /// router itself is gone by then, the release is a no-op: there is no
    /// resubscription logic here.
    pub fn attach(&self, router: &Rc<Router>) -> ViewHandle {
        let listener = self.clone();
        let id = router.subscribe(move |event| listener.on_navigate(event));

        let weak = Rc::downgrade(router);
        ViewHandle::new(move || {
            if let Some(router) = weak.upgrade() {
                router.unsubscribe(id);
            }
        })
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::DocumentIndex;

    fn sample_index() -> Arc<DocumentIndex> {
        Arc::new(DocumentIndex::build(
            "root/posts/",
            ".md",
            [
                ("root/posts/hello.md".to_string(), "# Hello".to_string()),
                ("root/posts/world.md".to_string(), "# World".to_string()),
            ],
        ))
    }

    #[test]
    fn test_initial_state_absent() {
        let nav = Navigator::new(sample_index());
        assert!(nav.current().is_none());
    }

    #[test]
    fn test_navigate_to_known_identifier() {
        let nav = Navigator::new(sample_index());

        nav.on_navigate(&NavigationEvent::select("world"));
        assert_eq!(nav.current().unwrap().body, "# World");

        nav.on_navigate(&NavigationEvent::select("hello"));
        assert_eq!(nav.current().unwrap().body, "# Hello");
    }

    #[test]
    fn test_navigate_to_missing_identifier_clears_state() {
        let nav = Navigator::new(sample_index());

        nav.on_navigate(&NavigationEvent::select("hello"));
        assert!(nav.current().is_some());

        nav.on_navigate(&NavigationEvent::select("missing"));
        assert!(nav.current().is_none());
    }

    #[test]
    fn test_absent_and_empty_identifier_clear_state() {
        let nav = Navigator::new(sample_index());

        nav.on_navigate(&NavigationEvent::select("hello"));
        nav.on_navigate(&NavigationEvent::none());
        assert!(nav.current().is_none());

        nav.on_navigate(&NavigationEvent::select("hello"));
        nav.on_navigate(&NavigationEvent::select(""));
        assert!(nav.current().is_none());
    }

    #[test]
    fn test_repeated_event_is_idempotent() {
        let nav = Navigator::new(sample_index());

        nav.on_navigate(&NavigationEvent::select("hello"));
        let first = nav.current();
        nav.on_navigate(&NavigationEvent::select("hello"));
        let second = nav.current();

        assert_eq!(first, second);
        assert_eq!(second.unwrap().body, "# Hello");
    }

    #[test]
    fn test_attach_routes_events() {
        let nav = Navigator::new(sample_index());
        let router = Rc::new(Router::new());

        let _view = nav.attach(&router);
        router.navigate("world");

        assert_eq!(nav.current().unwrap().body, "# World");
    }

    #[test]
    fn test_detach_is_terminal() {
        let nav = Navigator::new(sample_index());
        let router = Rc::new(Router::new());

        let view = nav.attach(&router);
        router.navigate("hello");
        view.detach();

        router.navigate("world");
        // State still reflects the last event before detach.
        assert_eq!(nav.current().unwrap().body, "# Hello");
        assert_eq!(router.handler_count(), 0);
    }

    #[test]
    fn test_release_survives_router_drop() {
        let nav = Navigator::new(sample_index());
        let router = Rc::new(Router::new());

        let view = nav.attach(&router);
        drop(router);
        view.detach(); // must not panic
    }
}
