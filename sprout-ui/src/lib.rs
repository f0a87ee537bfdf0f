//! Sprout UI - a small component UI framework for teaching
//!
//! The moving parts, in the order data flows through them:
//!
//! 1. [`core::State`] holds a value and notifies subscribers on change.
//! 2. A [`core::Component`] reads state in `render` and declares a
//!    [`core::Node`] tree; events come back up through `on_event`, and a
//!    child reports to its parent only through a callback handed to it at
//!    construction time.
//! 3. The [`runtime::Runtime`] mounts one root component per session,
//!    dispatches events into the tree, and re-renders at most once per
//!    dispatched event.
//! 4. The [`app::App`] shell puts the runtime behind a winit window and
//!    translates OS input into framework events. Painting the declared
//!    tree is left to the host.
//!
//! See `examples/` for small, self-contained patterns (toggle,
//! conditional rendering, controlled input, list rendering).

pub mod app;
pub mod core;
pub mod runtime;
pub mod widgets;

pub use app::{App, ShellError, WindowConfig};
pub use widgets::*;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::app::{App, ShellError, WindowConfig};
    pub use crate::core::{
        next_component_id, Component, ComponentId, Context, Event, Key, Node, NodeKind, State,
    };
    pub use crate::runtime::Runtime;
    pub use crate::widgets::*;
}
