//! The goal store
//!
//! One owner for the whole list. Components that display goals get
//! snapshots through [`GoalStore::goals`]; components that produce goals
//! go through a callback that ends in [`GoalStore::append`]. Nobody else
//! holds the sequence.

use sprout_ui::core::State;

use crate::goal::{Goal, GoalError};

/// Owns the ordered goal sequence and its only mutation: append.
///
/// Cloning a `GoalStore` clones the handle, not the data - all clones
/// see and change the same sequence.
#[derive(Clone)]
pub struct GoalStore {
    goals: State<Vec<Goal>>,
}

impl GoalStore {
    pub fn new(seed: Vec<Goal>) -> Self {
        Self {
            goals: State::new(seed),
        }
    }

    /// Snapshot of the current sequence, in insertion order.
    pub fn goals(&self) -> Vec<Goal> {
        self.goals.get()
    }

    pub fn len(&self) -> usize {
        self.goals.get().len()
    }

    pub fn is_empty(&self) -> bool {
        self.goals.get().is_empty()
    }

    /// Run `callback` after every successful append.
    pub fn subscribe<F: Fn() + Send + Sync + 'static>(&self, callback: F) {
        self.goals.subscribe(callback);
    }

    /// Append one validated record. The stored sequence is replaced with
    /// a fresh one; records already in the list are never touched, so an
    /// observer holding an old snapshot sees exactly what it saw before.
    pub fn append(&self, goal: Goal) -> Result<(), GoalError> {
        if goal.text.trim().is_empty() {
            return Err(GoalError::BlankText);
        }
        tracing::debug!(id = %goal.id, "appending goal");
        let mut next = self.goals.get();
        next.push(goal);
        self.goals.set(next);
        Ok(())
    }

    /// Build a record with a fresh identifier from `text` and append it.
    pub fn add_goal(&self, text: impl Into<String>) -> Result<Goal, GoalError> {
        let goal = Goal::new(text)?;
        self.append(goal.clone())?;
        Ok(goal)
    }
}

impl Default for GoalStore {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}
