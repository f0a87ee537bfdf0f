//! List widget for rendering arrays of items

use crate::core::{next_component_id, Component, ComponentId, Context, Node};
use std::sync::Arc;

/// Builder function for list items
pub type ItemBuilder<T> = Arc<dyn Fn(&T, usize) -> Node + Send + Sync>;

/// Key function giving each item a stable identity among its siblings.
pub type KeyFn<T> = Arc<dyn Fn(&T) -> String + Send + Sync>;

/// Renders a sequence of items as a keyed list.
///
/// The view is a pure projection of the items handed to it: same items
/// in, same list out. An empty sequence renders the configured
/// empty-state message (or an empty node when none is set) rather than
/// failing.
pub struct ListView<T: Clone + Send + Sync + 'static> {
    id: ComponentId,
    items: Vec<T>,
    item_builder: Option<ItemBuilder<T>>,
    key_fn: Option<KeyFn<T>>,
    empty_message: Option<String>,
}

impl<T: Clone + Send + Sync + 'static> ListView<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self {
            id: next_component_id(),
            items,
            item_builder: None,
            key_fn: None,
            empty_message: None,
        }
    }

    pub fn builder<F>(mut self, builder: F) -> Self
    where
        F: Fn(&T, usize) -> Node + Send + Sync + 'static,
    {
        self.item_builder = Some(Arc::new(builder));
        self
    }

    pub fn key<F>(mut self, key_fn: F) -> Self
    where
        F: Fn(&T) -> String + Send + Sync + 'static,
    {
        self.key_fn = Some(Arc::new(key_fn));
        self
    }

    pub fn empty_message(mut self, message: impl Into<String>) -> Self {
        self.empty_message = Some(message.into());
        self
    }
}

impl<T: Clone + Send + Sync + 'static> Component for ListView<T> {
    fn id(&self) -> ComponentId {
        self.id
    }

    fn render(&self, _ctx: &mut Context) -> Node {
        if self.items.is_empty() {
            return match self.empty_message {
                Some(ref message) => Node::text(message.clone()),
                None => Node::empty(),
            };
        }

        let rows = self
            .items
            .iter()
            .enumerate()
            .map(|(index, item)| {
                let row = match self.item_builder {
                    Some(ref build) => build(item, index),
                    None => Node::list_item(format!("item {index}")),
                };
                match self.key_fn {
                    Some(ref key) => row.with_key(key(item)),
                    None => row,
                }
            })
            .collect();

        Node::list(rows)
    }
}
