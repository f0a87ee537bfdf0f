//! Course Goals - a beginner-friendly goals list built on Sprout UI
//!
//! The whole app is three components and one store:
//!
//! - [`GoalStore`] owns the ordered goal sequence and its only mutation,
//!   append.
//! - [`GoalList`] displays whatever sequence it is handed. It cannot
//!   change anything.
//! - [`NewGoalForm`] keeps the text being typed and reports a finished
//!   [`Goal`] upward through a callback.
//! - [`GoalApp`] ties them together: it injects the callback into the
//!   form, appends to the store, and the store's change notification
//!   triggers the next render.
//!
//! That is the whole loop: data down, events up, one owner of state.

pub mod components;
pub mod config;
pub mod goal;
pub mod store;

pub use components::{GoalApp, GoalList, NewGoalForm, OnAddGoal};
pub use config::AppConfig;
pub use goal::{Goal, GoalError, GoalId};
pub use store::GoalStore;
