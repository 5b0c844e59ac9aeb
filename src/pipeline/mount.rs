//! Mount API - Browser lifecycle and render effect.
//!
//! Entry point for mounting the document browser on a terminal. Sets up the
//! reactive pipeline, enters the alternate screen, and returns a handle whose
//! teardown restores the terminal and releases the navigation subscription on
//! every exit path.
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use docdeck::content::DocumentIndex;
//! use docdeck::pipeline;
//!
//! let index = Arc::new(DocumentIndex::build("docs/", ".md", entries));
//! let handle = pipeline::mount(index)?;
//!
//! // Option 1: blocking event loop
//! pipeline::run(&handle)?;
//!
//! // Option 2: tick manually in your own loop
//! while pipeline::tick(&handle)? {
//!     // Your logic here
//! }
//!
//! handle.unmount()?;
//! ```

use std::cell::Cell;
use std::io::{self, stdout};
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use crossterm::cursor::{Hide, Show};
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use spark_signals::{effect, signal, Signal};
use tracing::info;

use crate::content::DocumentIndex;
use crate::navigation::{NavigationEvent, Navigator, Router, ViewHandle};
use crate::renderer::AnsiRenderer;
use crate::types::DocId;

use super::create_display_derived;

// =============================================================================
// Mount Handle
// =============================================================================

/// Handle returned by mount() that allows unmounting.
///
/// Holds the navigation subscription, the render effect stop function, and
/// the running flag. Both cleanups use the take-once pattern so explicit
/// `unmount()` followed by drop releases each exactly once.
pub struct MountHandle {
    router: Rc<Router>,
    ids: Vec<DocId>,
    selected: Cell<Option<usize>>,
    scroll: Signal<u16>,
    size: Signal<(u16, u16)>,
    running: Arc<AtomicBool>,
    view: Option<ViewHandle>,
    stop_effect: Option<Box<dyn FnOnce()>>,
}

impl MountHandle {
    /// Stop the render effect, release the subscription, restore the
    /// terminal.
    pub fn unmount(mut self) -> io::Result<()> {
        self.running.store(false, Ordering::SeqCst);
        self.teardown();
        restore_terminal()
    }

    /// Check if still running.
    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }

    /// Stop the event loop (sets running to false).
    pub fn stop(&self) {
        self.running.store(false, Ordering::SeqCst);
    }

    /// The router feeding this view. Exposed so hosts can dispatch
    /// navigation events from their own sources (deep links, tests).
    pub fn router(&self) -> &Rc<Router> {
        &self.router
    }

    fn teardown(&mut self) {
        if let Some(view) = self.view.take() {
            view.detach();
        }
        if let Some(stop) = self.stop_effect.take() {
            stop();
        }
    }

    fn select(&self, index: usize) {
        if let Some(id) = self.ids.get(index) {
            self.selected.set(Some(index));
            self.scroll.set(0);
            self.router.dispatch(&NavigationEvent::select(id.clone()));
        }
    }

    fn select_next(&self) {
        let next = match self.selected.get() {
            None => 0,
            Some(i) => (i + 1).min(self.ids.len().saturating_sub(1)),
        };
        self.select(next);
    }

    fn select_previous(&self) {
        let prev = match self.selected.get() {
            None => 0,
            Some(i) => i.saturating_sub(1),
        };
        self.select(prev);
    }

    fn clear_selection(&self) {
        self.selected.set(None);
        self.scroll.set(0);
        self.router.dispatch(&NavigationEvent::none());
    }

    fn scroll_by(&self, delta: i32) {
        let current = i32::from(self.scroll.get());
        let next = current.saturating_add(delta).clamp(0, i32::from(u16::MAX));
        self.scroll.set(next as u16);
    }

    fn page(&self) -> i32 {
        i32::from(self.size.get().1.saturating_sub(1).max(1))
    }
}

impl Drop for MountHandle {
    fn drop(&mut self) {
        self.teardown();
        // Restore terminal on drop (best effort)
        let _ = restore_terminal();
    }
}

// =============================================================================
// Mount Function
// =============================================================================

/// Mount the document browser.
///
/// Wires the pipeline: router → navigator (subscription scoped by a view
/// handle) → display derived → ONE render effect that paints to the
/// terminal. Enters the alternate screen in raw mode.
///
/// Returns a MountHandle for cleanup.
pub fn mount(index: Arc<DocumentIndex>) -> io::Result<MountHandle> {
    let ids = index.ids();

    let router = Rc::new(Router::new());
    let navigator = Navigator::new(index);
    let view = navigator.attach(&router);

    let display_derived = create_display_derived(&navigator);

    let (tw, th) = crossterm::terminal::size().unwrap_or((80, 24));
    let size: Signal<(u16, u16)> = signal((tw, th));
    let scroll: Signal<u16> = signal(0);

    enable_raw_mode()?;
    execute!(stdout(), EnterAlternateScreen, Hide)?;

    let running = Arc::new(AtomicBool::new(true));
    let running_for_effect = running.clone();

    // The ONE render effect: re-paints whenever the document, the scroll
    // position, or the terminal size changes.
    let size_for_effect = size.clone();
    let scroll_for_effect = scroll.clone();
    let mut renderer = AnsiRenderer::new();
    let stop_fn = effect(move || {
        // Reads create the reactive dependencies.
        let tree = display_derived.get();
        let (width, height) = size_for_effect.get();
        let offset = scroll_for_effect.get();

        if !running_for_effect.load(Ordering::SeqCst) {
            return;
        }

        // Paint (side effect!)
        let _ = renderer.draw(&tree, width, height, offset);
    });

    info!(docs = ids.len(), "mounted document browser");

    Ok(MountHandle {
        router,
        ids,
        selected: Cell::new(None),
        scroll,
        size,
        running,
        view: Some(view),
        stop_effect: Some(Box::new(stop_fn)),
    })
}

/// Unmount and clean up.
pub fn unmount(handle: MountHandle) -> io::Result<()> {
    handle.unmount()
}

fn restore_terminal() -> io::Result<()> {
    execute!(stdout(), Show, LeaveAlternateScreen)?;
    disable_raw_mode()
}

// =============================================================================
// Event Loop
// =============================================================================

/// Run the event loop once (non-blocking, ~60fps poll).
///
/// * `Ok(true)` - Continue running
/// * `Ok(false)` - Stop requested (`q`, Ctrl+C, or `handle.stop()`)
/// * `Err(e)` - I/O error while polling
pub fn tick(handle: &MountHandle) -> io::Result<bool> {
    if !handle.is_running() {
        return Ok(false);
    }

    if event::poll(Duration::from_millis(16))? {
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
                KeyCode::Char('q') => handle.stop(),
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    handle.stop()
                }
                KeyCode::Down | KeyCode::Char('j') => handle.select_next(),
                KeyCode::Up | KeyCode::Char('k') => handle.select_previous(),
                KeyCode::PageDown => handle.scroll_by(handle.page()),
                KeyCode::PageUp => handle.scroll_by(-handle.page()),
                KeyCode::Esc => handle.clear_selection(),
                _ => {}
            },
            Event::Resize(w, h) => {
                handle.size.set((w, h));
            }
            _ => {}
        }
    }

    Ok(handle.is_running())
}

/// Run the event loop (blocking until stopped).
pub fn run(handle: &MountHandle) -> io::Result<()> {
    while tick(handle)? {
        // Continue processing events
    }
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================
