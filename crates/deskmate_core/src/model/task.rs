//! Task domain model.
//!
//! # Responsibility
//! - Define the persisted to-do record and its status lifecycle.
//!
//! # Invariants
//! - `id` is store-assigned and never reused.
//! - `created_at` is set once at insert and never rewritten.
//! - `sort_order` is meaningful only within one sibling scope (tasks that
//!   share the same `parent_id`, or all root tasks).

use serde::{Deserialize, Serialize};

/// Store-assigned task identifier.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type TaskId = i64;

/// Task lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// Created but not done.
    Pending,
    /// Checked off.
    Completed,
}

impl TaskStatus {
    /// Database/text representation of this status.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Completed => "completed",
        }
    }

    /// Parses a status string from the UI or storage boundary.
    ///
    /// Anything outside `pending`/`completed` is rejected.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "pending" => Some(Self::Pending),
            "completed" => Some(Self::Completed),
            _ => None,
        }
    }
}

/// Persisted to-do entry, possibly nested under a parent task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Store-assigned id, immutable after creation.
    pub id: TaskId,
    /// Non-empty description text.
    pub content: String,
    /// Lifecycle state.
    pub status: TaskStatus,
    /// Epoch ms creation timestamp, set once by the store.
    pub created_at: i64,
    /// Display order among siblings. Rewritten wholesale by reorder.
    pub sort_order: i64,
    /// Parent task id; `None` for root-level tasks.
    pub parent_id: Option<TaskId>,
    /// Epoch ms archival timestamp; archived tasks are hidden, not deleted.
    pub archived_at: Option<i64>,
}

impl Task {
    /// Returns whether this task is hidden from normal views.
    pub fn is_archived(&self) -> bool {
        self.archived_at.is_some()
    }

    /// Returns whether this task sits at the root level.
    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }
}
