//! Filesystem discovery collaborator.
//!
//! Walks a content root once at startup and produces the `(path, content)`
//! manifest that [`DocumentIndex::build`](super::DocumentIndex::build)
//! consumes. Paths are relative to the root, use forward slashes on every
//! platform, and come back sorted so index construction is deterministic
//! regardless of directory iteration order.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{ContentError, Result};

/// Read every file under `root` (recursively) as UTF-8 text.
///
/// Hidden entries (leading `.`) are skipped. Files that are not valid UTF-8
/// are skipped with a debug log: the content set is markdown, anything else
/// under the root is an asset the index has no use for.
pub fn read_dir_entries(root: &Path) -> Result<Vec<(String, String)>> {
    if !root.is_dir() {
        return Err(ContentError::NotADirectory(root.to_path_buf()));
    }

    let mut entries = Vec::new();
    walk(root, root, &mut entries)?;
    entries.sort_by(|(a, _), (b, _)| a.cmp(b));
    Ok(entries)
}

fn walk(root: &Path, dir: &Path, out: &mut Vec<(String, String)>) -> Result<()> {
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();

        if is_hidden(&path) {
            continue;
        }

        if path.is_dir() {
            walk(root, &path, out)?;
            continue;
        }

        let bytes = fs::read(&path).map_err(|source| ContentError::Read {
            path: path.clone(),
            source,
        })?;

        match String::from_utf8(bytes) {
            Ok(content) => out.push((relative_key(root, &path), content)),
            Err(_) => debug!(path = %path.display(), "skipping non-UTF-8 file"),
        }
    }
    Ok(())
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.starts_with('.'))
}

/// Relative path with forward slashes, suitable as an index entry path.
fn relative_key(root: &Path, path: &Path) -> String {
    let rel: PathBuf = path.strip_prefix(root).unwrap_or(path).to_path_buf();
    rel.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

// =============================================================================
// Tests
// =============================================================================
