//! Core domain logic for deskmate.
//! This crate is the single source of truth for business invariants.

pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use config::{ConfigError, ConfigResult, SettingsStore};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::launcher::{LaunchKind, LauncherItem, LauncherItemId, Workspace, WorkspaceId};
pub use model::task::{Task, TaskId, TaskStatus};
pub use model::task_tree::TaskTree;
pub use model::template::{Template, TemplateId};
pub use repo::launcher_repo::{
    LauncherRepoError, LauncherRepoResult, LauncherRepository, SqliteLauncherRepository,
};
pub use repo::task_repo::{
    RepoError, RepoResult, SqliteTaskRepository, TaskListQuery, TaskRepository,
};
pub use repo::template_repo::{
    SqliteTemplateRepository, TemplateRepoError, TemplateRepoResult, TemplateRepository,
};
pub use service::clipboard_history::ClipboardHistory;
pub use service::launcher_service::{LauncherService, LauncherServiceError};
pub use service::task_service::{TaskService, TaskServiceError};
pub use service::template_service::{TemplateService, TemplateServiceError};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
