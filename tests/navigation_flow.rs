//! End-to-end navigation flow: manifest → index → router → navigator →
//! display tree, including lifecycle teardown on normal and abnormal paths.

use std::rc::Rc;
use std::sync::Arc;

use docdeck::content::DocumentIndex;
use docdeck::navigation::{NavigationEvent, Navigator, Router};
use docdeck::pipeline::create_display_derived;
use docdeck::types::{Block, Span};
use docdeck::render;

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
fn index_matches_discovery_scenario() {
    let index = sample_index();

    assert_eq!(index.len(), 2);
    assert_eq!(index.get("hello").unwrap().body, "# Hello");
    assert_eq!(index.get("world").unwrap().body, "# World");
}

#[test]
fn full_browse_flow() {
    let index = sample_index();
    let router = Rc::new(Router::new());
    let navigator = Navigator::new(index);
    let display = create_display_derived(&navigator);

    let view = navigator.attach(&router);

    // Navigate to a known document.
    router.dispatch(&NavigationEvent::select("world"));
    assert_eq!(navigator.current().unwrap().body, "# World");
    assert_eq!(
        display.get().blocks,
        vec![Block::Heading {
            level: 1,
            spans: vec![Span::plain("World")],
        }]
    );

    // A miss clears the state and the projection goes neutral.
    router.dispatch(&NavigationEvent::select("missing"));
    assert!(navigator.current().is_none());
    assert!(display.get().is_empty());

    // Detach is terminal: later events change nothing.
    router.dispatch(&NavigationEvent::select("hello"));
    view.detach();
    router.dispatch(&NavigationEvent::select("world"));
    assert_eq!(navigator.current().unwrap().body, "# Hello");
}

#[test]
fn repeated_event_is_idempotent() {
    let index = sample_index();
    let router = Rc::new(Router::new());
    let navigator = Navigator::new(index);
    let _view = navigator.attach(&router);

    router.dispatch(&NavigationEvent::select("hello"));
    let first = navigator.current();
    router.dispatch(&NavigationEvent::select("hello"));
    let second = navigator.current();

    assert_eq!(first, second);
}

#[test]
fn subscription_released_on_abnormal_teardown() {
    let index = sample_index();
    let router = Rc::new(Router::new());
    let navigator = Navigator::new(index);

    let router_in = router.clone();
    let navigator_in = navigator.clone();
    let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(move || {
        let _view = navigator_in.attach(&router_in);
        router_in.dispatch(&NavigationEvent::select("hello"));
        panic!("sibling operation failed");
    }));
    assert!(result.is_err());

    // Unwinding dropped the handle; the registration is gone and later
    // events no longer touch the state.
    assert_eq!(router.handler_count(), 0);
    router.dispatch(&NavigationEvent::select("world"));
    assert_eq!(navigator.current().unwrap().body, "# Hello");
}

#[test]
fn renderer_sees_same_tree_as_direct_projection() {
    let index = sample_index();
    let router = Rc::new(Router::new());
    let navigator = Navigator::new(index.clone());
    let _view = navigator.attach(&router);

    router.dispatch(&NavigationEvent::select("world"));

    let via_state = render::render(navigator.current().as_deref());
    let direct = render::render(index.get("world").as_deref());
    assert_eq!(via_state, direct);
}
