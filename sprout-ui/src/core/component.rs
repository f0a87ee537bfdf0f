//! Component trait and identifiers

use crate::core::{Context, Event, Node};

/// Unique identifier for components.
pub type ComponentId = u64;

/// Core trait that all UI components implement.
///
/// Data flows one way: a component reads its inputs and state in
/// [`Component::render`] and declares the structure to display; events
/// flow back up through [`Component::on_event`], where a component either
/// handles the event itself or forwards it to its children. A component
/// never reaches into its parent - if it needs to report something
/// upward, the parent hands it a callback at construction time.
pub trait Component: Send + Sync {
    /// Returns the component's unique identifier.
    fn id(&self) -> ComponentId;

    /// Declare the visual structure for the current state.
    fn render(&self, ctx: &mut Context) -> Node;

    /// Handle an event. Return `true` if the event was consumed.
    fn on_event(&mut self, event: &Event, ctx: &mut Context) -> bool {
        let _ = (event, ctx);
        false
    }

    /// Called once, right after the component tree is mounted. The usual
    /// place to wire state subscriptions to the render handle.
    fn mounted(&mut self, ctx: &mut Context) {
        let _ = ctx;
    }
}

/// A boxed component for dynamic dispatch.
pub type BoxedComponent = Box<dyn Component>;

impl Component for BoxedComponent {
    fn id(&self) -> ComponentId {
        (**self).id()
    }

    fn render(&self, ctx: &mut Context) -> Node {
        (**self).render(ctx)
    }

    fn on_event(&mut self, event: &Event, ctx: &mut Context) -> bool {
        (**self).on_event(event, ctx)
    }

    fn mounted(&mut self, ctx: &mut Context) {
        (**self).mounted(ctx)
    }
}

/// Helper to generate unique component IDs.
pub fn next_component_id() -> ComponentId {
    use std::sync::atomic::{AtomicU64, Ordering};
    static COUNTER: AtomicU64 = AtomicU64::new(1);
    COUNTER.fetch_add(1, Ordering::Relaxed)
}
