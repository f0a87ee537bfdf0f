//! Render scheduling context

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Clonable handle that lets state owners ask for a re-render.
///
/// Subscribing a store to a `RenderHandle` is what makes the UI follow
/// the data: the store notifies, the handle flips its flag, and the
/// runtime folds any number of requests into a single render at the end
/// of the current dispatch.
#[derive(Clone, Default)]
pub struct RenderHandle {
    dirty: Arc<AtomicBool>,
}

impl RenderHandle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ask for a re-render. Safe to call any number of times; requests
    /// coalesce until the runtime takes them.
    pub fn request_render(&self) {
        self.dirty.store(true, Ordering::SeqCst);
    }

    /// True if a render has been requested and not yet taken.
    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::SeqCst)
    }

    /// Consume the pending request, if any.
    pub fn take_request(&self) -> bool {
        self.dirty.swap(false, Ordering::SeqCst)
    }
}

/// Context passed to components during render and event handling.
pub struct Context {
    handle: RenderHandle,
    frame: u64,
}

impl Context {
    pub fn new() -> Self {
        Self {
            handle: RenderHandle::new(),
            frame: 0,
        }
    }

    /// The render handle for this runtime. Clone it into subscriptions.
    pub fn render_handle(&self) -> RenderHandle {
        self.handle.clone()
    }

    /// Shorthand for `render_handle().request_render()`.
    pub fn request_render(&self) {
        self.handle.request_render();
    }

    /// Number of completed renders.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub(crate) fn advance_frame(&mut self) {
        self.frame += 1;
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_requests_coalesce() {
        let handle = RenderHandle::new();
        assert!(!handle.is_dirty());

        handle.request_render();
        handle.request_render();
        assert!(handle.is_dirty());

        assert!(handle.take_request());
        assert!(!handle.take_request());
    }

    #[test]
    fn test_context_shares_handle() {
        let ctx = Context::new();
        let handle = ctx.render_handle();
        ctx.request_render();
        assert!(handle.is_dirty());
    }
}
