//! Content Module - Document model and index
//!
//! Documents are discovered once, at startup, and indexed by a stable
//! identifier derived from their discovery path. The index is built exactly
//! once and read-only afterwards; consumers receive it by `Rc`/`Arc` from
//! whoever constructed it, never from ambient global state.
//!
//! # API
//!
//! - `DocumentIndex::build(prefix, suffix, entries)` - Build the index
//! - `index.get(id)` - Look up a document
//! - `index.ids()` - Sorted identifiers (for listing pages)
//! - `discover::read_dir_entries(root)` - Filesystem discovery collaborator
//! - `meta::DocMeta` - Display metadata supplied by listing pages
//!
//! # Example
//!
//! ```
//! use docdeck::content::DocumentIndex;
//!
//! let index = DocumentIndex::build(
//!     "root/posts/",
//!     ".md",
//!     [
//!         ("root/posts/hello.md".to_string(), "# Hello".to_string()),
//!         ("root/posts/world.md".to_string(), "# World".to_string()),
//!     ],
//! );
//! assert_eq!(index.get("hello").unwrap().body, "# Hello");
//! ```

pub mod discover;
pub mod meta;

use std::collections::HashMap;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::types::DocId;

// =============================================================================
// Document
// =============================================================================

/// An immutable document: identifier plus raw markdown body.
///
/// Created once at index-build time, never mutated, shared by `Arc` so the
/// navigation layer can hand it around without cloning bodies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub id: DocId,
    pub body: String,
}

// =============================================================================
// DocumentIndex
// =============================================================================

/// Read-only mapping from identifier to document.
///
/// Built exactly once from a manifest of `(path, content)` entries. Paths that
/// don't match the configured prefix/suffix pattern are skipped: discovery is
/// a closed, startup-known set, so a mismatch is not an error. When two paths
/// derive the same identifier the last entry wins; a warning is logged because
/// the overwrite is otherwise silent.
#[derive(Debug, Default)]
pub struct DocumentIndex {
    docs: HashMap<DocId, Arc<Document>>,
}

impl DocumentIndex {
    /// Build the index from discovered entries.
    ///
    /// The identifier of each matching entry is its path with `prefix` and
    /// `suffix` stripped. Deterministic: the same entry sequence always yields
    /// the same mapping.
    pub fn build(
        prefix: &str,
        suffix: &str,
        entries: impl IntoIterator<Item = (String, String)>,
    ) -> Self {
        let mut docs: HashMap<DocId, Arc<Document>> = HashMap::new();

        for (path, content) in entries {
            let Some(id) = derive_id(&path, prefix, suffix) else {
                debug!(%path, "skipping entry outside content pattern");
                continue;
            };

            if docs.contains_key(&id) {
                warn!(%id, %path, "duplicate identifier, last entry wins");
            }

            docs.insert(
                id.clone(),
                Arc::new(Document { id, body: content }),
            );
        }

        Self { docs }
    }

    /// Look up a document by identifier.
    pub fn get(&self, id: &str) -> Option<Arc<Document>> {
        self.docs.get(id).cloned()
    }

    /// Check whether an identifier is indexed.
    pub fn contains(&self, id: &str) -> bool {
        self.docs.contains_key(id)
    }

    /// All identifiers, sorted. Listing pages iterate this.
    pub fn ids(&self) -> Vec<DocId> {
        let mut ids: Vec<DocId> = self.docs.keys().cloned().collect();
        ids.sort();
        ids
    }

    pub fn len(&self) -> usize {
        self.docs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }
}

/// Derive an identifier from a path, or `None` if the path doesn't match
/// the prefix/suffix pattern.
///
/// An entry that is nothing but prefix + suffix would derive the empty
/// identifier, which the router reserves for "no selection": treat it as a
/// mismatch.
fn derive_id(path: &str, prefix: &str, suffix: &str) -> Option<DocId> {
    let id = path.strip_prefix(prefix)?.strip_suffix(suffix)?;
    if id.is_empty() {
        return None;
    }
    Some(id.to_string())
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(path: &str, content: &str) -> (String, String) {
        (path.to_string(), content.to_string())
    }

    #[test]
    fn test_build_derives_identifiers() {
        let index = DocumentIndex::build(
            "root/posts/",
            ".md",
            [
                entry("root/posts/hello.md", "# Hello"),
                entry("root/posts/world.md", "# World"),
            ],
        );

        assert_eq!(index.len(), 2);
        assert_eq!(index.get("hello").unwrap().body, "# Hello");
        assert_eq!(index.get("world").unwrap().body, "# World");
    }

    #[test]
    fn test_non_matching_paths_skipped() {
        let index = DocumentIndex::build(
            "root/posts/",
            ".md",
            [
                entry("root/posts/keep.md", "kept"),
                entry("root/assets/logo.png", "binary"),
                entry("elsewhere/keep.md", "wrong prefix"),
                entry("root/posts/notes.txt", "wrong suffix"),
            ],
        );

        assert_eq!(index.len(), 1);
        assert!(index.contains("keep"));
    }

    #[test]
    fn test_collision_last_wins() {
        let index = DocumentIndex::build(
            "docs/",
            ".md",
            [
                entry("docs/page.md", "first"),
                entry("docs/page.md", "second"),
            ],
        );

        assert_eq!(index.len(), 1);
        assert_eq!(index.get("page").unwrap().body, "second");
    }

    #[test]
    fn test_deterministic_for_same_entries() {
        let entries = || {
            vec![
                entry("d/a.md", "A"),
                entry("d/b.md", "B"),
                entry("d/c.md", "C"),
            ]
        };
        let a = DocumentIndex::build("d/", ".md", entries());
        let b = DocumentIndex::build("d/", ".md", entries());

        assert_eq!(a.ids(), b.ids());
        for id in a.ids() {
            assert_eq!(a.get(&id), b.get(&id));
        }
    }

    #[test]
    fn test_lookup_miss_is_none() {
        let index = DocumentIndex::build("d/", ".md", [entry("d/a.md", "A")]);
        assert!(index.get("missing").is_none());
        assert!(!index.contains("missing"));
    }

    #[test]
    fn test_empty_identifier_rejected() {
        // "d/.md" would derive "": reserved for "no selection".
        let index = DocumentIndex::build("d/", ".md", [entry("d/.md", "ghost")]);
        assert!(index.is_empty());
    }

    #[test]
    fn test_ids_sorted() {
        let index = DocumentIndex::build(
            "d/",
            ".md",
            [entry("d/zeta.md", ""), entry("d/alpha.md", ""), entry("d/mid.md", "")],
        );
        assert_eq!(index.ids(), vec!["alpha", "mid", "zeta"]);
    }

    #[test]
    fn test_nested_paths_keep_subdirectory_in_id() {
        let index = DocumentIndex::build(
            "docs/",
            ".md",
            [entry("docs/guide/setup.md", "setup")],
        );
        assert!(index.contains("guide/setup"));
    }
}
