//! Navigation Module - Route events, listener, lifecycle
//!
//! The routing collaborator emits "selected identifier" events; the navigator
//! looks the identifier up and republishes the matching document as
//! current-document state; a view handle scopes the subscription to the
//! owning view's lifetime.
//!
//! # API
//!
//! - `NavigationEvent` - One navigation action (identifier or "no selection")
//! - `Router` - Subscription registry + synchronous dispatch
//! - `Navigator` - Event consumer owning current-document state
//! - `ViewHandle` - Scoped subscription, released exactly once
//!
//! # Example
//!
//! ```
//! use std::rc::Rc;
//! use std::sync::Arc;
//! use docdeck::content::DocumentIndex;
//! use docdeck::navigation::{NavigationEvent, Navigator, Router};
//!
//! let index = Arc::new(DocumentIndex::build(
//!     "posts/",
//!     ".md",
//!     [("posts/hello.md".to_string(), "# Hello".to_string())],
//! ));
//! let router = Rc::new(Router::new());
//! let navigator = Navigator::new(index);
//!
//! let view = navigator.attach(&router);
//! router.dispatch(&NavigationEvent::select("hello"));
//! assert_eq!(navigator.current().unwrap().body, "# Hello");
//!
//! view.detach();
//! router.dispatch(&NavigationEvent::none());
//! // Detached: the event no longer reaches the navigator.
//! assert!(navigator.current().is_some());
//! ```

mod navigator;
mod router;
mod view;

pub use navigator::Navigator;
pub use router::{Router, SubscriptionId};
pub use view::ViewHandle;

// =============================================================================
// NavigationEvent
// =============================================================================

/// One navigation action, produced by the routing collaborator.
///
/// An absent identifier means "no document selected". A present but empty
/// identifier is treated the same way by the route layer.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NavigationEvent {
    pub id: Option<String>,
}

impl NavigationEvent {
    /// Event selecting a document.
    pub fn select(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
        }
    }

    /// Event clearing the selection.
    pub fn none() -> Self {
        Self { id: None }
    }

    /// The selected identifier, with the empty string folded into `None`.
    pub fn selected(&self) -> Option<&str> {
        match self.id.as_deref() {
            None | Some("") => None,
            some => some,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selected_folds_empty_string() {
        assert_eq!(NavigationEvent::select("a").selected(), Some("a"));
        assert_eq!(NavigationEvent::select("").selected(), None);
        assert_eq!(NavigationEvent::none().selected(), None);
    }
}
