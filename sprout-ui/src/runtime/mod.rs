//! Headless runtime driver
//!
//! The runtime owns the root component and runs the whole
//! event-then-render cycle on one thread: an event is dispatched into the
//! tree, handlers run to completion, and if anything asked for a render
//! the tree is rendered exactly once before the next event is looked at.
//! Shells (and tests) sit on top of this and decide where events come
//! from and where rendered trees go.

use crate::core::{BoxedComponent, Component, Context, Event, Node, RenderHandle};

pub struct Runtime {
    root: BoxedComponent,
    ctx: Context,
}

impl Runtime {
    /// Mount a root component. This happens once per session; the runtime
    /// takes ownership of the tree and immediately gives the root a
    /// chance to wire its subscriptions.
    pub fn mount(root: impl Component + 'static) -> Self {
        let mut runtime = Self {
            root: Box::new(root),
            ctx: Context::new(),
        };
        runtime.root.mounted(&mut runtime.ctx);
        tracing::debug!(root_id = runtime.root.id(), "root component mounted");
        runtime
    }

    /// Handle for out-of-band render requests (state subscriptions).
    pub fn render_handle(&self) -> RenderHandle {
        self.ctx.render_handle()
    }

    /// Dispatch one event into the tree. Returns the freshly rendered
    /// tree if the event was consumed or any handler requested a render;
    /// `None` means nothing changed and the previous tree still stands.
    pub fn dispatch(&mut self, event: &Event) -> Option<Node> {
        let handled = self.root.on_event(event, &mut self.ctx);
        let requested = self.ctx.render_handle().take_request();
        if handled || requested {
            Some(self.render())
        } else {
            tracing::trace!(?event, "event not handled");
            None
        }
    }

    /// Render if a request is pending (e.g. a store changed outside of
    /// event dispatch). Returns `None` when the tree is already current.
    pub fn flush(&mut self) -> Option<Node> {
        if self.ctx.render_handle().take_request() {
            Some(self.render())
        } else {
            None
        }
    }

    /// Render the tree unconditionally.
    pub fn render(&mut self) -> Node {
        // A render folds in every request made so far.
        self.ctx.render_handle().take_request();
        let tree = self.root.render(&mut self.ctx);
        self.ctx.advance_frame();
        tracing::trace!(frame = self.ctx.frame(), "rendered");
        tree
    }

    /// Number of completed renders.
    pub fn frames(&self) -> u64 {
        self.ctx.frame()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{next_component_id, ComponentId, Key, State};

    struct CounterView {
        id: ComponentId,
        count: State<i32>,
    }

    impl CounterView {
        fn new(count: State<i32>) -> Self {
            Self {
                id: next_component_id(),
                count,
            }
        }
    }

    impl Component for CounterView {
        fn id(&self) -> ComponentId {
            self.id
        }

        fn render(&self, _ctx: &mut Context) -> Node {
            Node::text(format!("count: {}", self.count.get()))
        }

        fn on_event(&mut self, event: &Event, _ctx: &mut Context) -> bool {
            if matches!(event, Event::Click) {
                self.count.update(|c| *c += 1);
                return true;
            }
            false
        }

        fn mounted(&mut self, ctx: &mut Context) {
            let handle = ctx.render_handle();
            self.count.subscribe(move || handle.request_render());
        }
    }

    #[test]
    fn test_dispatch_renders_once_per_event() {
        let count = State::new(0);
        let mut runtime = Runtime::mount(CounterView::new(count));

        let tree = runtime.dispatch(&Event::Click).unwrap();
        assert_eq!(tree.text_content(), Some("count: 1"));
        assert_eq!(runtime.frames(), 1);

        // Handled and subscription-requested in the same dispatch still
        // means a single render.
        runtime.dispatch(&Event::Click).unwrap();
        assert_eq!(runtime.frames(), 2);
    }

    #[test]
    fn test_unhandled_event_does_not_render() {
        let count = State::new(0);
        let mut runtime = Runtime::mount(CounterView::new(count));
        assert!(runtime
            .dispatch(&Event::KeyDown { key: Key::Escape })
            .is_none());
        assert_eq!(runtime.frames(), 0);
    }

    #[test]
    fn test_flush_picks_up_outside_changes() {
        let count = State::new(0);
        let mut runtime = Runtime::mount(CounterView::new(count.clone()));
        assert!(runtime.flush().is_none());

        // Change the state without going through an event.
        count.set(7);
        let tree = runtime.flush().unwrap();
        assert_eq!(tree.text_content(), Some("count: 7"));
        assert!(runtime.flush().is_none());
    }
}
