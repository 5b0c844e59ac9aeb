//! # docdeck
//!
//! Reactive terminal documentation browser.
//!
//! Built on [spark-signals](https://crates.io/crates/spark-signals) for
//! fine-grained reactivity.
//!
//! ## Architecture
//!
//! Documents are discovered once at startup and indexed by a stable
//! identifier derived from each discovery path. Navigation is event-driven:
//! a router dispatches "selected identifier" events, a navigator resolves
//! them against the index and republishes the result as a signal, and one
//! render effect projects that state to the terminal.
//!
//! ```text
//! Discovery manifest → DocumentIndex → Navigator → current-document signal
//!                                         ▲              │
//!                            Router ──────┘              ▼
//!                       (NavigationEvent)      display derived → render effect
//! ```
//!
//! Subscriptions are lifecycle-scoped: attaching a navigator to a router
//! yields a [`navigation::ViewHandle`] that releases the registration exactly
//! once, on every exit path.
//!
//! ## Modules
//!
//! - [`types`] - Core types (DocId, Style, Span, Block, DisplayTree)
//! - [`content`] - Document model, index, filesystem discovery, metadata
//! - [`navigation`] - Router, navigator, lifecycle-scoped view handles
//! - [`render`] - Markdown to display-tree projection
//! - [`renderer`] - ANSI layout and painting
//! - [`pipeline`] - Mount API and event loop
//! - [`bench`] - Remote benchmark results contract

pub mod bench;
pub mod content;
pub mod error;
pub mod navigation;
pub mod pipeline;
pub mod render;
pub mod renderer;
pub mod types;

// Re-export commonly used items
pub use types::*;

pub use content::{discover::read_dir_entries, Document, DocumentIndex};

pub use navigation::{NavigationEvent, Navigator, Router, ViewHandle};

pub use render::render;

pub use renderer::{layout, AnsiRenderer, OutputBuffer};

pub use pipeline::{create_display_derived, mount, run, tick, unmount, MountHandle};

pub use error::ContentError;
