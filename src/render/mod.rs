//! Render Module - Document projection.
//!
//! Turns current-document state into a [`DisplayTree`]. This is a pure
//! projection: the same state always produces the same tree, nothing here
//! mutates the index or the state, and the absent state projects to the
//! neutral empty tree.
//!
//! # Example
//!
//! ```
//! use docdeck::content::Document;
//! use docdeck::render;
//!
//! let doc = Document {
//!     id: "hello".to_string(),
//!     body: "# Hello\n\nSome *emphasis*.".to_string(),
//! };
//! let tree = render::render(Some(&doc));
//! assert_eq!(tree.len(), 2);
//!
//! assert!(render::render(None).is_empty());
//! ```

pub mod markdown;

use crate::content::Document;
use crate::types::DisplayTree;

/// Project current-document state into a display tree.
pub fn render(state: Option<&Document>) -> DisplayTree {
    match state {
        None => DisplayTree::empty(),
        Some(doc) => DisplayTree {
            blocks: markdown::to_blocks(&doc.body),
        },
    }
}

// =============================================================================
// Tests
// =============================================================================
