//! Event system for Sprout UI

/// All UI events the runtime dispatches into the component tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Text typed into the focused control.
    TextInput { text: String },
    /// A non-text key press.
    KeyDown { key: Key },
    /// A pointer click (the headless runtime does no hit-testing; a click
    /// goes to the first component that claims it).
    Click,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Enter,
    Backspace,
    Escape,
    Unknown,
}

impl Event {
    /// Convenience constructor for typing a whole string one event at a
    /// time, mostly used by examples and tests.
    pub fn typing(text: &str) -> Vec<Event> {
        text.chars()
            .map(|c| Event::TextInput {
                text: c.to_string(),
            })
            .collect()
    }
}
