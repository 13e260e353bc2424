//! Workspace launcher use-case service.
//!
//! # Responsibility
//! - Validate workspace/item input and expose the ordered launch plan.
//!
//! # Invariants
//! - Blank names or targets never reach storage.
//! - Opening the targets (shell, browser) happens outside this crate; the
//!   service stops at producing the item list.

use crate::model::launcher::{LaunchKind, LauncherItem, LauncherItemId, Workspace, WorkspaceId};
use crate::repo::launcher_repo::{LauncherRepoError, LauncherRepository};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from launcher service operations.
#[derive(Debug)]
pub enum LauncherServiceError {
    /// Name or target is empty or all-whitespace.
    EmptyField(&'static str),
    Repo(LauncherRepoError),
}

impl Display for LauncherServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyField(field) => write!(f, "launcher {field} must not be blank"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for LauncherServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            Self::EmptyField(_) => None,
        }
    }
}

impl From<LauncherRepoError> for LauncherServiceError {
    fn from(value: LauncherRepoError) -> Self {
        Self::Repo(value)
    }
}

/// Launcher service facade over repository implementations.
pub struct LauncherService<R: LauncherRepository> {
    repo: R,
}

impl<R: LauncherRepository> LauncherService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Creates one workspace.
    pub fn add_workspace(&self, name: &str) -> Result<Workspace, LauncherServiceError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(LauncherServiceError::EmptyField("workspace name"));
        }
        self.repo.add_workspace(name).map_err(Into::into)
    }

    /// Lists all workspaces ordered by name.
    pub fn list_workspaces(&self) -> Result<Vec<Workspace>, LauncherServiceError> {
        self.repo.list_workspaces().map_err(Into::into)
    }

    /// Removes one workspace together with its items.
    pub fn delete_workspace(&self, id: WorkspaceId) -> Result<(), LauncherServiceError> {
        self.repo.delete_workspace(id).map_err(Into::into)
    }

    /// Adds one launch target to a workspace.
    pub fn add_item(
        &self,
        name: &str,
        target: &str,
        kind: LaunchKind,
        workspace_id: WorkspaceId,
    ) -> Result<LauncherItem, LauncherServiceError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(LauncherServiceError::EmptyField("item name"));
        }
        let target = target.trim();
        if target.is_empty() {
            return Err(LauncherServiceError::EmptyField("item target"));
        }
        self.repo
            .add_item(name, target, kind, workspace_id)
            .map_err(Into::into)
    }

    /// Lists one workspace's items ordered by name.
    pub fn list_items(
        &self,
        workspace_id: WorkspaceId,
    ) -> Result<Vec<LauncherItem>, LauncherServiceError> {
        self.repo.list_items(workspace_id).map_err(Into::into)
    }

    /// Removes one launch item.
    pub fn delete_item(&self, id: LauncherItemId) -> Result<(), LauncherServiceError> {
        self.repo.delete_item(id).map_err(Into::into)
    }

    /// Returns the ordered item list the OS-shell collaborator walks to
    /// open everything in the workspace.
    pub fn launch_plan(
        &self,
        workspace_id: WorkspaceId,
    ) -> Result<Vec<LauncherItem>, LauncherServiceError> {
        self.list_items(workspace_id)
    }
}
