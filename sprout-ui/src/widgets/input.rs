//! Input widgets

use crate::core::{next_component_id, Component, ComponentId, Context, Event, Key, Node};
use std::sync::Arc;

pub type OnChange = Arc<dyn Fn(String) + Send + Sync>;
pub type OnSubmit = Arc<dyn Fn(String) + Send + Sync>;

/// Controlled text input field.
///
/// The widget owns the text buffer and the rendered node always carries
/// exactly that buffer, so what the user sees and what the program reads
/// can never drift apart. Typing appends, backspace pops, enter fires
/// `on_submit` with the current value. The owner can also read or reset
/// the buffer directly through [`TextInput::value`] and
/// [`TextInput::set_value`].
pub struct TextInput {
    id: ComponentId,
    value: String,
    placeholder: String,
    on_change: Option<OnChange>,
    on_submit: Option<OnSubmit>,
}

impl TextInput {
    pub fn new() -> Self {
        Self {
            id: next_component_id(),
            value: String::new(),
            placeholder: String::new(),
            on_change: None,
            on_submit: None,
        }
    }

    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn on_change<F: Fn(String) + Send + Sync + 'static>(mut self, handler: F) -> Self {
        self.on_change = Some(Arc::new(handler));
        self
    }

    pub fn on_submit<F: Fn(String) + Send + Sync + 'static>(mut self, handler: F) -> Self {
        self.on_submit = Some(Arc::new(handler));
        self
    }

    /// Current buffer contents.
    pub fn current_value(&self) -> &str {
        &self.value
    }

    /// Replace the buffer, e.g. to clear the field after a submission.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    fn changed(&self) {
        if let Some(ref handler) = self.on_change {
            handler(self.value.clone());
        }
    }
}

impl Default for TextInput {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for TextInput {
    fn id(&self) -> ComponentId {
        self.id
    }

    fn render(&self, _ctx: &mut Context) -> Node {
        Node::text_field(self.value.clone()).with_placeholder(self.placeholder.clone())
    }

    fn on_event(&mut self, event: &Event, _ctx: &mut Context) -> bool {
        match event {
            Event::TextInput { text } => {
                self.value.push_str(text);
                self.changed();
                true
            }
            Event::KeyDown { key } => match key {
                Key::Backspace => {
                    self.value.pop();
                    self.changed();
                    true
                }
                Key::Enter => {
                    if let Some(ref handler) = self.on_submit {
                        handler(self.value.clone());
                    }
                    true
                }
                _ => false,
            },
            _ => false,
        }
    }
}

/// Toggle/Switch widget
pub struct Toggle {
    id: ComponentId,
    on: bool,
    on_change: Option<Arc<dyn Fn(bool) + Send + Sync>>,
}

impl Toggle {
    pub fn new() -> Self {
        Self {
            id: next_component_id(),
            on: false,
            on_change: None,
        }
    }

    pub fn on(mut self, on: bool) -> Self {
        self.on = on;
        self
    }

    pub fn on_change<F: Fn(bool) + Send + Sync + 'static>(mut self, handler: F) -> Self {
        self.on_change = Some(Arc::new(handler));
        self
    }

    pub fn is_on(&self) -> bool {
        self.on
    }
}

impl Default for Toggle {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for Toggle {
    fn id(&self) -> ComponentId {
        self.id
    }

    fn render(&self, _ctx: &mut Context) -> Node {
        Node::button(if self.on { "ON" } else { "OFF" })
    }

    fn on_event(&mut self, event: &Event, _ctx: &mut Context) -> bool {
        if matches!(event, Event::Click) {
            self.on = !self.on;
            if let Some(ref handler) = self.on_change {
                handler(self.on);
            }
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::NodeKind;
    use std::sync::Mutex;

    #[test]
    fn test_typing_appends_and_backspace_pops() {
        let mut input = TextInput::new();
        let mut ctx = Context::new();

        for event in Event::typing("hi!") {
            assert!(input.on_event(&event, &mut ctx));
        }
        assert_eq!(input.current_value(), "hi!");

        input.on_event(
            &Event::KeyDown {
                key: Key::Backspace,
            },
            &mut ctx,
        );
        assert_eq!(input.current_value(), "hi");
    }

    #[test]
    fn test_rendered_value_tracks_buffer() {
        let mut input = TextInput::new().placeholder("Type here");
        let mut ctx = Context::new();

        for event in Event::typing("ok") {
            input.on_event(&event, &mut ctx);
        }
        let node = input.render(&mut ctx);
        assert_eq!(node.kind, NodeKind::TextField);
        assert_eq!(node.text_content(), Some("ok"));
        assert_eq!(node.placeholder.as_deref(), Some("Type here"));
    }

    #[test]
    fn test_enter_fires_submit_with_current_value() {
        let submitted: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));
        let seen = Arc::clone(&submitted);
        let mut input = TextInput::new().on_submit(move |value| {
            seen.lock().unwrap().push(value);
        });
        let mut ctx = Context::new();

        for event in Event::typing("go") {
            input.on_event(&event, &mut ctx);
        }
        input.on_event(&Event::KeyDown { key: Key::Enter }, &mut ctx);

        assert_eq!(*submitted.lock().unwrap(), vec!["go".to_string()]);
        // Submitting does not clear by itself; that is the owner's call.
        assert_eq!(input.current_value(), "go");
    }

    #[test]
    fn test_toggle_flips_on_click() {
        let mut toggle = Toggle::new();
        let mut ctx = Context::new();
        assert!(!toggle.is_on());

        toggle.on_event(&Event::Click, &mut ctx);
        assert!(toggle.is_on());
        assert_eq!(toggle.render(&mut ctx).text_content(), Some("ON"));

        toggle.on_event(&Event::Click, &mut ctx);
        assert!(!toggle.is_on());
    }
}
