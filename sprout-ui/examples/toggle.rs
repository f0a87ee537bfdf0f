//! Toggle example - click handler flips a piece of component state

use sprout_ui::prelude::*;

/// A light switch: the label always tells you what the bulb is doing.
struct LightSwitch {
    id: ComponentId,
    switch: Toggle,
}

impl LightSwitch {
    fn new() -> Self {
        Self {
            id: next_component_id(),
            switch: Toggle::new().on_change(|on| println!("bulb is now {}", on)),
        }
    }
}

impl Component for LightSwitch {
    fn id(&self) -> ComponentId {
        self.id
    }

    fn render(&self, ctx: &mut Context) -> Node {
        let status = if self.switch.is_on() { "ON" } else { "OFF" };
        Node::column(vec![
            Node::text(format!("The light is: {status}")),
            self.switch.render(ctx),
        ])
    }

    fn on_event(&mut self, event: &Event, ctx: &mut Context) -> bool {
        self.switch.on_event(event, ctx)
    }
}

fn main() {
    let mut runtime = Runtime::mount(LightSwitch::new());
    println!("{}", runtime.render().to_json());

    // Two clicks: on, then off again.
    for _ in 0..2 {
        if let Some(tree) = runtime.dispatch(&Event::Click) {
            println!("{}", tree.to_json());
        }
    }
}
