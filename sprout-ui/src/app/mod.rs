//! Application entry point

mod window;

pub use window::*;

use crate::core::{BoxedComponent, Component};

/// Window configuration
#[derive(Debug, Clone)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub resizable: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Sprout UI".to_string(),
            width: 480,
            height: 640,
            resizable: true,
        }
    }
}

/// Main application builder: pick a title and size, hand over a root
/// component, call [`App::run`]. The root is mounted into the window
/// exactly once, when the OS delivers the first `resumed` event.
pub struct App {
    config: WindowConfig,
    root: Option<BoxedComponent>,
}

impl App {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            config: WindowConfig {
                title: title.into(),
                ..Default::default()
            },
            root: None,
        }
    }

    pub fn size(mut self, width: u32, height: u32) -> Self {
        self.config.width = width;
        self.config.height = height;
        self
    }

    pub fn resizable(mut self, resizable: bool) -> Self {
        self.config.resizable = resizable;
        self
    }

    pub fn root(mut self, component: impl Component + 'static) -> Self {
        self.root = Some(Box::new(component));
        self
    }

    /// Run the event loop until the window is closed.
    pub fn run(self) -> Result<(), ShellError> {
        let root = self.root.ok_or(ShellError::NoRoot)?;
        Shell::new(self.config, root).run()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{next_component_id, ComponentId, Context, Node};

    struct Nothing(ComponentId);

    impl Component for Nothing {
        fn id(&self) -> ComponentId {
            self.0
        }
        fn render(&self, _ctx: &mut Context) -> Node {
            Node::empty()
        }
    }

    #[test]
    fn test_builder_collects_config() {
        let app = App::new("Demo")
            .size(320, 240)
            .resizable(false)
            .root(Nothing(next_component_id()));
        assert_eq!(app.config.title, "Demo");
        assert_eq!((app.config.width, app.config.height), (320, 240));
        assert!(!app.config.resizable);
        assert!(app.root.is_some());
    }

    #[test]
    fn test_run_without_root_is_an_error() {
        let result = App::new("Demo").run();
        assert!(matches!(result, Err(ShellError::NoRoot)));
    }
}
