//! Declarative render tree
//!
//! Components do not paint anything. They describe what should be on
//! screen as a tree of [`Node`] values, and a shell (or a test) consumes
//! the tree. Diffing and painting belong to whatever host consumes the
//! nodes, which keeps the framework itself free of graphics code.

use serde::Serialize;

/// What a node represents on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    Column,
    Row,
    Heading,
    Text,
    List,
    ListItem,
    TextField,
    Button,
    Empty,
}

/// One element of the declared visual structure.
///
/// `key` gives a row a stable identity among its siblings so a consumer
/// can track it across renders. `text` carries the visible content - for
/// a `TextField` it is the current value of the control.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Node {
    pub kind: NodeKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Node>,
}

impl Node {
    fn bare(kind: NodeKind) -> Self {
        Self {
            kind,
            key: None,
            text: None,
            placeholder: None,
            children: Vec::new(),
        }
    }

    pub fn column(children: Vec<Node>) -> Self {
        Self {
            children,
            ..Self::bare(NodeKind::Column)
        }
    }

    pub fn row(children: Vec<Node>) -> Self {
        Self {
            children,
            ..Self::bare(NodeKind::Row)
        }
    }

    pub fn heading(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Self::bare(NodeKind::Heading)
        }
    }

    pub fn text(content: impl Into<String>) -> Self {
        Self {
            text: Some(content.into()),
            ..Self::bare(NodeKind::Text)
        }
    }

    pub fn list(items: Vec<Node>) -> Self {
        Self {
            children: items,
            ..Self::bare(NodeKind::List)
        }
    }

    pub fn list_item(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Self::bare(NodeKind::ListItem)
        }
    }

    pub fn text_field(value: impl Into<String>) -> Self {
        Self {
            text: Some(value.into()),
            ..Self::bare(NodeKind::TextField)
        }
    }

    pub fn button(label: impl Into<String>) -> Self {
        Self {
            text: Some(label.into()),
            ..Self::bare(NodeKind::Button)
        }
    }

    /// A node that renders nothing. Useful for "render nothing" branches.
    pub fn empty() -> Self {
        Self::bare(NodeKind::Empty)
    }

    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    /// Visible text of this node, if any.
    pub fn text_content(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Depth-first search for the first node of the given kind.
    pub fn find(&self, kind: NodeKind) -> Option<&Node> {
        if self.kind == kind {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(kind))
    }

    /// Serialize the tree to pretty JSON for logging or inspection.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| String::from("{}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builders() {
        let tree = Node::column(vec![
            Node::heading("Hi"),
            Node::list(vec![Node::list_item("one").with_key("a")]),
        ]);
        assert_eq!(tree.kind, NodeKind::Column);
        assert_eq!(tree.children.len(), 2);
        assert_eq!(tree.children[1].children[0].key.as_deref(), Some("a"));
    }

    #[test]
    fn test_find() {
        let tree = Node::column(vec![
            Node::row(vec![Node::text_field("abc").with_placeholder("Type")]),
            Node::text("mirror"),
        ]);
        let field = tree.find(NodeKind::TextField).unwrap();
        assert_eq!(field.text_content(), Some("abc"));
        assert!(tree.find(NodeKind::List).is_none());
    }

    #[test]
    fn test_json_skips_empty_fields() {
        let json = Node::text("hello").to_json();
        assert!(json.contains("\"text\""));
        assert!(!json.contains("\"key\""));
        assert!(!json.contains("\"children\""));
    }
}
