//! Conditional rendering example - one component, three branches

use sprout_ui::prelude::*;

/// Renders a different structure depending on its flags, the way a
/// status banner would while data is on its way.
struct StatusMessage {
    id: ComponentId,
    loading: bool,
    error: bool,
}

impl StatusMessage {
    fn new(loading: bool, error: bool) -> Self {
        Self {
            id: next_component_id(),
            loading,
            error,
        }
    }
}

impl Component for StatusMessage {
    fn id(&self) -> ComponentId {
        self.id
    }

    fn render(&self, _ctx: &mut Context) -> Node {
        if self.error {
            return Node::text("Something went wrong.");
        }
        if self.loading {
            Node::text("Loading...")
        } else {
            Node::text("All set!")
        }
    }
}

fn main() {
    for (loading, error) in [(true, false), (false, false), (false, true)] {
        let mut runtime = Runtime::mount(StatusMessage::new(loading, error));
        println!("{}", runtime.render().to_json());
    }
}
