//! Container widgets (Column, Row)

use crate::core::{next_component_id, BoxedComponent, Component, ComponentId, Context, Event, Node};

/// Vertical layout container.
///
/// Containers render their children in order and forward events to them
/// depth-first until one claims the event.
pub struct Column {
    id: ComponentId,
    children: Vec<BoxedComponent>,
}

impl Column {
    pub fn new() -> Self {
        Self {
            id: next_component_id(),
            children: Vec::new(),
        }
    }

    pub fn child(mut self, child: impl Component + 'static) -> Self {
        self.children.push(Box::new(child));
        self
    }

    pub fn with_children(mut self, children: Vec<BoxedComponent>) -> Self {
        self.children = children;
        self
    }
}

impl Default for Column {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for Column {
    fn id(&self) -> ComponentId {
        self.id
    }

    fn render(&self, ctx: &mut Context) -> Node {
        Node::column(self.children.iter().map(|c| c.render(ctx)).collect())
    }

    fn on_event(&mut self, event: &Event, ctx: &mut Context) -> bool {
        self.children
            .iter_mut()
            .any(|child| child.on_event(event, ctx))
    }

    fn mounted(&mut self, ctx: &mut Context) {
        for child in &mut self.children {
            child.mounted(ctx);
        }
    }
}

/// Horizontal layout container.
pub struct Row {
    id: ComponentId,
    children: Vec<BoxedComponent>,
}

impl Row {
    pub fn new() -> Self {
        Self {
            id: next_component_id(),
            children: Vec::new(),
        }
    }

    pub fn child(mut self, child: impl Component + 'static) -> Self {
        self.children.push(Box::new(child));
        self
    }

    pub fn with_children(mut self, children: Vec<BoxedComponent>) -> Self {
        self.children = children;
        self
    }
}

impl Default for Row {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for Row {
    fn id(&self) -> ComponentId {
        self.id
    }

    fn render(&self, ctx: &mut Context) -> Node {
        Node::row(self.children.iter().map(|c| c.render(ctx)).collect())
    }

    fn on_event(&mut self, event: &Event, ctx: &mut Context) -> bool {
        self.children
            .iter_mut()
            .any(|child| child.on_event(event, ctx))
    }

    fn mounted(&mut self, ctx: &mut Context) {
        for child in &mut self.children {
            child.mounted(ctx);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::NodeKind;
    use crate::widgets::{Text, Toggle};

    #[test]
    fn test_column_renders_children_in_order() {
        let column = Column::new()
            .child(Text::new("first"))
            .child(Text::new("second"));
        let mut ctx = Context::new();
        let node = column.render(&mut ctx);
        assert_eq!(node.kind, NodeKind::Column);
        assert_eq!(node.children[0].text_content(), Some("first"));
        assert_eq!(node.children[1].text_content(), Some("second"));
    }

    #[test]
    fn test_events_stop_at_first_handler() {
        // Two toggles: only the first should flip.
        let mut row = Row::new().child(Toggle::new()).child(Toggle::new());
        let mut ctx = Context::new();
        assert!(row.on_event(&Event::Click, &mut ctx));

        let node = row.render(&mut ctx);
        assert_eq!(node.children[0].text_content(), Some("ON"));
        assert_eq!(node.children[1].text_content(), Some("OFF"));
    }
}
