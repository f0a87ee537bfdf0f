//! Text widgets

use crate::core::{next_component_id, Component, ComponentId, Context, Node};

/// Text display widget
pub struct Text {
    id: ComponentId,
    content: String,
}

impl Text {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            id: next_component_id(),
            content: content.into(),
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

impl Component for Text {
    fn id(&self) -> ComponentId {
        self.id
    }

    fn render(&self, _ctx: &mut Context) -> Node {
        Node::text(self.content.clone())
    }
}

/// Heading widget - same as [`Text`] but declares itself as a heading so
/// a consumer can render it more prominently.
pub struct Heading {
    id: ComponentId,
    content: String,
}

impl Heading {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            id: next_component_id(),
            content: content.into(),
        }
    }
}

impl Component for Heading {
    fn id(&self) -> ComponentId {
        self.id
    }

    fn render(&self, _ctx: &mut Context) -> Node {
        Node::heading(self.content.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::NodeKind;

    #[test]
    fn test_text_renders_content() {
        let mut ctx = Context::new();
        let node = Text::new("hello").render(&mut ctx);
        assert_eq!(node.kind, NodeKind::Text);
        assert_eq!(node.text_content(), Some("hello"));
    }

    #[test]
    fn test_heading_kind() {
        let mut ctx = Context::new();
        let node = Heading::new("Title").render(&mut ctx);
        assert_eq!(node.kind, NodeKind::Heading);
    }
}
