//! Workspace launcher domain model.
//!
//! # Responsibility
//! - Define the persisted shape of launch workspaces and their items.
//!
//! # Invariants
//! - `kind` is a closed enum; unknown strings are rejected at the boundary.
//! - Opening the targets themselves (shell, browser) happens outside core.

use serde::{Deserialize, Serialize};

/// Store-assigned workspace identifier.
pub type WorkspaceId = i64;

/// Store-assigned launcher item identifier.
pub type LauncherItemId = i64;

/// Named group of launch targets opened in bulk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Workspace {
    pub id: WorkspaceId,
    pub name: String,
}

/// What a launcher item points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LaunchKind {
    File,
    Folder,
    Url,
}

impl LaunchKind {
    /// Database/text representation of this kind.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::File => "file",
            Self::Folder => "folder",
            Self::Url => "url",
        }
    }

    /// Parses a kind string from the UI or storage boundary.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "file" => Some(Self::File),
            "folder" => Some(Self::Folder),
            "url" => Some(Self::Url),
            _ => None,
        }
    }
}

/// Single launch target inside a workspace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LauncherItem {
    pub id: LauncherItemId,
    /// User-facing label.
    pub name: String,
    /// Filesystem path or URL, depending on `kind`.
    pub target: String,
    pub kind: LaunchKind,
    pub workspace_id: WorkspaceId,
}
