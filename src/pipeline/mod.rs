//! Pipeline Module - The reactive document pipeline.
//!
//! ```text
//! DocumentIndex (built once)
//!   │
//!   Router ──NavigationEvent──▶ Navigator ──▶ current-document signal
//!                                                │
//!                                                ├─▶ display_derived
//!                                                │     markdown → DisplayTree
//!                                                │
//!                                                └─▶ render effect
//!                                                      layout + ANSI paint
//! ```
//!
//! One navigation event is fully processed (lookup, state write, reactive
//! re-render) before the next is read. Everything is single-threaded and
//! cooperative; nothing here blocks except the input poll.

mod mount;

pub use mount::{mount, run, tick, unmount, MountHandle};

use spark_signals::{derived, Derived};

use crate::navigation::Navigator;
use crate::render;
use crate::types::DisplayTree;

/// Create the display derived.
///
/// Returns a Derived that projects the current document and automatically
/// re-runs when the navigator's state changes. Pure: reading it never
/// touches the terminal.
pub fn create_display_derived(
    navigator: &Navigator,
) -> Derived<DisplayTree> {
    let current = navigator.current_signal();
    derived(move || {
        // Read current document (creates reactive dependency)
        let doc = current.get();
        render::render(doc.as_deref())
    })
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::content::DocumentIndex;
    use crate::navigation::NavigationEvent;

    fn navigator() -> Navigator {
        Navigator::new(Arc::new(DocumentIndex::build(
            "d/",
            ".md",
            [("d/a.md".to_string(), "# A".to_string())],
        )))
    }

    #[test]
    fn test_display_derived_empty_before_navigation() {
        let nav = navigator();
        let display = create_display_derived(&nav);
        assert!(display.get().is_empty());
    }

    #[test]
    fn test_display_derived_follows_navigation() {
        let nav = navigator();
        let display = create_display_derived(&nav);

        nav.on_navigate(&NavigationEvent::select("a"));
        let tree = display.get();
        assert_eq!(tree.len(), 1);

        nav.on_navigate(&NavigationEvent::select("missing"));
        assert!(display.get().is_empty());
    }
}
