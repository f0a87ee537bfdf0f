//! The goal record

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Why a goal was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GoalError {
    #[error("goal text is empty or only whitespace")]
    BlankText,
}

/// Opaque unique identifier for a goal.
///
/// Identifiers only need to be unique within one session - they give
/// list rows a stable identity, nothing more - so a process-wide counter
/// is plenty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GoalId(String);

impl GoalId {
    /// Generate a fresh identifier, distinct from every one handed out
    /// before it in this session.
    pub fn fresh() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(1);
        Self(format!("g{}", COUNTER.fetch_add(1, Ordering::Relaxed)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for GoalId {
    fn from(raw: &str) -> Self {
        Self(raw.to_string())
    }
}

impl From<String> for GoalId {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}

impl fmt::Display for GoalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One user-entered list item: an identifier and the entered text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Goal {
    pub id: GoalId,
    pub text: String,
}

impl Goal {
    /// Build a goal with a fresh identifier. Text that is empty or only
    /// whitespace is refused; what the user actually typed is kept
    /// verbatim otherwise.
    pub fn new(text: impl Into<String>) -> Result<Self, GoalError> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(GoalError::BlankText);
        }
        Ok(Self {
            id: GoalId::fresh(),
            text,
        })
    }

    /// Build a goal with a caller-chosen identifier (seed data).
    pub fn with_id(id: impl Into<GoalId>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
        }
    }
}
