//! Browse a directory of markdown documents.
//!
//! ```sh
//! cargo run --example browse -- path/to/docs
//! ```
//!
//! Down/j and Up/k walk the documents, PageUp/PageDown scroll,
//! Esc clears the selection, q quits.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{ensure, Context, Result};

use docdeck::content::{discover, DocumentIndex};
use docdeck::pipeline;

fn main() -> Result<()> {
    // The terminal belongs to the UI; logs go to a file.
    let log = std::fs::File::create("docdeck.log")?;
    tracing_subscriber::fmt()
        .with_writer(std::sync::Mutex::new(log))
        .with_ansi(false)
        .init();

    let root = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .context("usage: browse <content-dir>")?;

    let entries = discover::read_dir_entries(&root)?;
    let index = Arc::new(DocumentIndex::build("", ".md", entries));
    ensure!(
        !index.is_empty(),
        "no markdown documents under {}",
        root.display()
    );

    let handle = pipeline::mount(index)?;
    pipeline::run(&handle)?;
    handle.unmount()?;
    Ok(())
}
