//! The new-goal form component

use std::sync::Arc;

use sprout_ui::core::{next_component_id, Component, ComponentId, Context, Event, Key, Node};
use sprout_ui::widgets::{Button, TextInput};

use crate::goal::{Goal, GoalError};

/// Callback the parent injects to receive finished goals.
pub type OnAddGoal = Arc<dyn Fn(Goal) + Send + Sync>;

/// Collects one line of text and reports finished goals upward.
///
/// The form owns nothing but its input buffer. On submit (enter, or a
/// click on the add button) it builds a record from the buffer, hands it
/// to the injected callback, and clears the buffer so the field shows
/// blank again. A blank buffer is refused on the spot: the callback is
/// not invoked and nothing reaches the list.
pub struct NewGoalForm {
    id: ComponentId,
    input: TextInput,
    button: Button,
    on_add: OnAddGoal,
}

impl NewGoalForm {
    pub fn new<F: Fn(Goal) + Send + Sync + 'static>(on_add: F) -> Self {
        Self {
            id: next_component_id(),
            input: TextInput::new().placeholder("New Goal"),
            button: Button::new("Add Goal"),
            on_add: Arc::new(on_add),
        }
    }

    /// What the user has typed so far.
    pub fn entered_text(&self) -> &str {
        self.input.current_value()
    }

    fn submit(&mut self) -> bool {
        match Goal::new(self.input.current_value()) {
            Ok(goal) => {
                (self.on_add)(goal);
                self.input.set_value("");
                true
            }
            Err(GoalError::BlankText) => {
                tracing::debug!("ignoring blank goal submission");
                true
            }
        }
    }
}

impl Component for NewGoalForm {
    fn id(&self) -> ComponentId {
        self.id
    }

    fn render(&self, ctx: &mut Context) -> Node {
        Node::row(vec![self.input.render(ctx), self.button.render(ctx)])
    }

    fn on_event(&mut self, event: &Event, ctx: &mut Context) -> bool {
        match event {
            Event::KeyDown { key: Key::Enter } | Event::Click => self.submit(),
            other => self.input.on_event(other, ctx),
        }
    }
}
