//! Button widget

use crate::core::{next_component_id, Component, ComponentId, Context, Event, Node};
use std::sync::Arc;

/// Callback type for button clicks
pub type OnClick = Arc<dyn Fn() + Send + Sync>;

/// Standard button widget
pub struct Button {
    id: ComponentId,
    label: String,
    on_click: Option<OnClick>,
    disabled: bool,
}

impl Button {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            id: next_component_id(),
            label: label.into(),
            on_click: None,
            disabled: false,
        }
    }

    pub fn on_click<F: Fn() + Send + Sync + 'static>(mut self, handler: F) -> Self {
        self.on_click = Some(Arc::new(handler));
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

impl Component for Button {
    fn id(&self) -> ComponentId {
        self.id
    }

    fn render(&self, _ctx: &mut Context) -> Node {
        Node::button(self.label.clone())
    }

    fn on_event(&mut self, event: &Event, _ctx: &mut Context) -> bool {
        if self.disabled {
            return false;
        }

        if matches!(event, Event::Click) {
            if let Some(ref handler) = self.on_click {
                handler();
                return true;
            }
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_click_fires_handler() {
        let clicks = Arc::new(AtomicUsize::new(0));
        let seen = Arc::clone(&clicks);
        let mut button = Button::new("Add").on_click(move || {
            seen.fetch_add(1, Ordering::SeqCst);
        });

        let mut ctx = Context::new();
        assert!(button.on_event(&Event::Click, &mut ctx));
        assert_eq!(clicks.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_disabled_button_ignores_clicks() {
        let clicks = Arc::new(AtomicUsize::new(0));
        let seen = Arc::clone(&clicks);
        let mut button = Button::new("Add")
            .on_click(move || {
                seen.fetch_add(1, Ordering::SeqCst);
            })
            .disabled(true);

        let mut ctx = Context::new();
        assert!(!button.on_event(&Event::Click, &mut ctx));
        assert_eq!(clicks.load(Ordering::SeqCst), 0);
    }
}
