//! Controlled input example - type and watch the live mirror

use sprout_ui::prelude::*;

/// A text field plus a text node that always shows the same buffer.
struct MirrorInput {
    id: ComponentId,
    input: TextInput,
}

impl MirrorInput {
    fn new() -> Self {
        Self {
            id: next_component_id(),
            input: TextInput::new().placeholder("Type here"),
        }
    }
}

impl Component for MirrorInput {
    fn id(&self) -> ComponentId {
        self.id
    }

    fn render(&self, ctx: &mut Context) -> Node {
        let typed = self.input.current_value();
        let mirror = if typed.is_empty() {
            "You typed: (nothing yet)".to_string()
        } else {
            format!("You typed: {typed}")
        };
        Node::column(vec![self.input.render(ctx), Node::text(mirror)])
    }

    fn on_event(&mut self, event: &Event, ctx: &mut Context) -> bool {
        self.input.on_event(event, ctx)
    }
}

fn main() {
    let mut runtime = Runtime::mount(MirrorInput::new());
    println!("{}", runtime.render().to_json());

    for event in Event::typing("hi!") {
        runtime.dispatch(&event);
    }
    // One backspace: the field and the mirror move together.
    if let Some(tree) = runtime.dispatch(&Event::KeyDown {
        key: Key::Backspace,
    }) {
        println!("{}", tree.to_json());
    }
}
