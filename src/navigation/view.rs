//! ViewHandle - Scoped subscription lifetime.
//!
//! Ties a router subscription to the owning view: acquired on attach,
//! released exactly once when the view goes away, whether that happens
//! through an explicit [`detach`](ViewHandle::detach), a normal drop, or
//! unwinding out of an error somewhere else in the view. Release cannot be
//! skipped and cannot run twice.

/// Handle for one attached subscription.
///
/// The release closure is stored as an `Option` and taken on first release,
/// so `detach()` followed by the implicit drop runs it only once. Detached
/// is terminal: events dispatched afterwards never reach the listener.
pub struct ViewHandle {
    release: Option<Box<dyn FnOnce()>>,
}

impl ViewHandle {
    pub(crate) fn new(release: impl FnOnce() + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    /// Explicitly release the subscription.
    pub fn detach(mut self) {
        self.release_once();
    }

    /// Whether the subscription is still live.
    pub fn is_attached(&self) -> bool {
        self.release.is_some()
    }

    fn release_once(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl Drop for ViewHandle {
    fn drop(&mut self) {
        self.release_once();
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    fn counting_handle(count: &Rc<Cell<u32>>) -> ViewHandle {
        let count = count.clone();
        ViewHandle::new(move || count.set(count.get() + 1))
    }

    #[test]
    fn test_detach_releases_once() {
        let count = Rc::new(Cell::new(0));
        let handle = counting_handle(&count);

        assert!(handle.is_attached());
        handle.detach();
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn test_drop_releases_once() {
        let count = Rc::new(Cell::new(0));
        {
            let _handle = counting_handle(&count);
        }
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn test_release_on_unwind() {
        let count = Rc::new(Cell::new(0));
        let count_clone = count.clone();

        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(move || {
            let _handle = counting_handle(&count_clone);
            panic!("sibling operation failed during teardown");
        }));

        assert!(result.is_err());
        assert_eq!(count.get(), 1);
    }
}
