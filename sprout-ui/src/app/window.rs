//! Window management and event loop
//!
//! The shell owns the OS window and nothing else. It translates winit
//! input into framework [`Event`]s, pushes them through the [`Runtime`],
//! and reports each freshly rendered tree on the log. Rasterizing the
//! tree into pixels is deliberately left to whichever host consumes the
//! nodes; a teaching setup reads the JSON instead.

use std::sync::Arc;

use winit::{
    application::ApplicationHandler,
    dpi::LogicalSize,
    event::{ElementState, MouseButton, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowId},
};

use super::WindowConfig;
use crate::core::{BoxedComponent, Event, Key};
use crate::runtime::Runtime;

/// Failures while standing up or running the shell.
#[derive(Debug, thiserror::Error)]
pub enum ShellError {
    #[error("no root component was provided")]
    NoRoot,
    #[error("event loop: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),
}

/// Live state once the window exists.
struct ShellState {
    window: Arc<Window>,
    runtime: Runtime,
}

/// Desktop shell driving a mounted component tree.
pub struct Shell {
    config: WindowConfig,
    root: Option<BoxedComponent>,
    state: Option<ShellState>,
}

impl Shell {
    pub fn new(config: WindowConfig, root: BoxedComponent) -> Self {
        Self {
            config,
            root: Some(root),
            state: None,
        }
    }

    pub fn run(mut self) -> Result<(), ShellError> {
        let event_loop = EventLoop::new()?;
        event_loop.set_control_flow(ControlFlow::Wait);
        event_loop.run_app(&mut self)?;
        Ok(())
    }

    fn dispatch(state: &mut ShellState, event: Event) {
        if let Some(tree) = state.runtime.dispatch(&event) {
            tracing::info!(frame = state.runtime.frames(), "view\n{}", tree.to_json());
            state.window.request_redraw();
        }
    }
}

impl ApplicationHandler for Shell {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.state.is_some() {
            return;
        }

        let attrs = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(LogicalSize::new(self.config.width, self.config.height))
            .with_resizable(self.config.resizable);

        let window = Arc::new(
            event_loop
                .create_window(attrs)
                .expect("failed to create window"),
        );

        let root = self.root.take().expect("root already mounted");
        let mut runtime = Runtime::mount(root);
        let tree = runtime.render();
        tracing::info!("mounted\n{}", tree.to_json());

        self.state = Some(ShellState { window, runtime });
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        let Some(state) = &mut self.state else { return };

        match event {
            WindowEvent::CloseRequested => {
                tracing::debug!("close requested");
                event_loop.exit();
            }
            WindowEvent::KeyboardInput {
                event,
                is_synthetic: false,
                ..
            } => {
                if event.state.is_pressed() {
                    if let Some(ui_event) = translate_key(&event.logical_key) {
                        Self::dispatch(state, ui_event);
                    }
                }
            }
            WindowEvent::MouseInput {
                state: ElementState::Released,
                button: MouseButton::Left,
                ..
            } => {
                Self::dispatch(state, Event::Click);
            }
            WindowEvent::RedrawRequested => {
                // Painting is the host's side of the rendering contract.
            }
            WindowEvent::Resized(size) => {
                tracing::trace!(?size, "resized");
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        let Some(state) = &mut self.state else { return };
        if let Some(tree) = state.runtime.flush() {
            tracing::info!(frame = state.runtime.frames(), "view\n{}", tree.to_json());
            state.window.request_redraw();
        }
    }
}

/// Map winit keyboard input onto framework events. Printable characters
/// become text input; a handful of named keys are forwarded; everything
/// else is dropped here.
fn translate_key(key: &winit::keyboard::Key) -> Option<Event> {
    use winit::keyboard::{Key as WinitKey, NamedKey};

    match key {
        WinitKey::Named(NamedKey::Enter) => Some(Event::KeyDown { key: Key::Enter }),
        WinitKey::Named(NamedKey::Backspace) => Some(Event::KeyDown {
            key: Key::Backspace,
        }),
        WinitKey::Named(NamedKey::Escape) => Some(Event::KeyDown { key: Key::Escape }),
        WinitKey::Named(NamedKey::Space) => Some(Event::TextInput {
            text: " ".to_string(),
        }),
        WinitKey::Character(text) => Some(Event::TextInput {
            text: text.to_string(),
        }),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use winit::keyboard::{Key as WinitKey, NamedKey, SmolStr};

    #[test]
    fn test_characters_become_text_input() {
        let event = translate_key(&WinitKey::Character(SmolStr::new("q"))).unwrap();
        assert_eq!(event, Event::TextInput { text: "q".into() });
    }

    #[test]
    fn test_named_keys() {
        assert_eq!(
            translate_key(&WinitKey::Named(NamedKey::Enter)),
            Some(Event::KeyDown { key: Key::Enter })
        );
        assert_eq!(
            translate_key(&WinitKey::Named(NamedKey::Space)),
            Some(Event::TextInput { text: " ".into() })
        );
        assert_eq!(translate_key(&WinitKey::Named(NamedKey::F1)), None);
    }
}
