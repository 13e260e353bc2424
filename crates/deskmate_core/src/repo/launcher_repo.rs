//! Workspace launcher repository contracts and SQLite implementation.
//!
//! # Invariants
//! - Workspace names are unique.
//! - Items always belong to an existing workspace (enforced by foreign key).
//! - Deleting a workspace removes its items in the same transaction.

use crate::db::DbError;
use crate::model::launcher::{LaunchKind, LauncherItem, LauncherItemId, Workspace, WorkspaceId};
use rusqlite::{params, Connection, Row, Transaction, TransactionBehavior};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type LauncherRepoResult<T> = Result<T, LauncherRepoError>;

/// Errors from launcher persistence operations.
#[derive(Debug)]
pub enum LauncherRepoError {
    Db(DbError),
    WorkspaceNotFound(WorkspaceId),
    ItemNotFound(LauncherItemId),
    /// Another workspace already holds this name.
    DuplicateName(String),
    InvalidData(String),
}

impl Display for LauncherRepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::WorkspaceNotFound(id) => write!(f, "workspace not found: {id}"),
            Self::ItemNotFound(id) => write!(f, "launcher item not found: {id}"),
            Self::DuplicateName(name) => write!(f, "workspace name already exists: `{name}`"),
            Self::InvalidData(message) => {
                write!(f, "invalid persisted launcher data: {message}")
            }
        }
    }
}

impl Error for LauncherRepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DbError> for LauncherRepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for LauncherRepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Repository interface for workspace/item operations.
pub trait LauncherRepository {
    /// Inserts one workspace and returns the stored row.
    fn add_workspace(&self, name: &str) -> LauncherRepoResult<Workspace>;
    /// Lists all workspaces ordered by name.
    fn list_workspaces(&self) -> LauncherRepoResult<Vec<Workspace>>;
    /// Removes one workspace together with its items.
    fn delete_workspace(&self, id: WorkspaceId) -> LauncherRepoResult<()>;
    /// Inserts one launch item into a workspace.
    fn add_item(
        &self,
        name: &str,
        target: &str,
        kind: LaunchKind,
        workspace_id: WorkspaceId,
    ) -> LauncherRepoResult<LauncherItem>;
    /// Lists one workspace's items ordered by name.
    fn list_items(&self, workspace_id: WorkspaceId) -> LauncherRepoResult<Vec<LauncherItem>>;
    /// Removes one launch item.
    fn delete_item(&self, id: LauncherItemId) -> LauncherRepoResult<()>;
}

/// SQLite-backed launcher repository.
pub struct SqliteLauncherRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteLauncherRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl LauncherRepository for SqliteLauncherRepository<'_> {
    fn add_workspace(&self, name: &str) -> LauncherRepoResult<Workspace> {
        self.conn
            .execute("INSERT INTO workspaces (name) VALUES (?1);", params![name])
            .map_err(|err| match err.sqlite_error_code() {
                // The only constraint on `workspaces` is the unique name.
                Some(rusqlite::ErrorCode::ConstraintViolation) => {
                    LauncherRepoError::DuplicateName(name.to_string())
                }
                _ => LauncherRepoError::from(err),
            })?;
        Ok(Workspace {
            id: self.conn.last_insert_rowid(),
            name: name.to_string(),
        })
    }

    fn list_workspaces(&self) -> LauncherRepoResult<Vec<Workspace>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, name FROM workspaces ORDER BY name ASC;")?;
        let mut rows = stmt.query([])?;
        let mut workspaces = Vec::new();
        while let Some(row) = rows.next()? {
            workspaces.push(Workspace {
                id: row.get("id")?,
                name: row.get("name")?,
            });
        }
        Ok(workspaces)
    }

    fn delete_workspace(&self, id: WorkspaceId) -> LauncherRepoResult<()> {
        let tx = Transaction::new_unchecked(self.conn, TransactionBehavior::Immediate)?;
        tx.execute(
            "DELETE FROM launcher_items WHERE workspace_id = ?1;",
            params![id],
        )?;
        let changed = tx.execute("DELETE FROM workspaces WHERE id = ?1;", params![id])?;
        if changed == 0 {
            return Err(LauncherRepoError::WorkspaceNotFound(id));
        }
        tx.commit()?;
        Ok(())
    }

    fn add_item(
        &self,
        name: &str,
        target: &str,
        kind: LaunchKind,
        workspace_id: WorkspaceId,
    ) -> LauncherRepoResult<LauncherItem> {
        self.conn
            .execute(
                "INSERT INTO launcher_items (name, target, kind, workspace_id)
                 VALUES (?1, ?2, ?3, ?4);",
                params![name, target, kind.as_str(), workspace_id],
            )
            .map_err(|err| match err.sqlite_error_code() {
                // `kind` comes from the closed enum, so the only constraint
                // an insert can trip is the workspace foreign key.
                Some(rusqlite::ErrorCode::ConstraintViolation) => {
                    LauncherRepoError::WorkspaceNotFound(workspace_id)
                }
                _ => LauncherRepoError::from(err),
            })?;
        Ok(LauncherItem {
            id: self.conn.last_insert_rowid(),
            name: name.to_string(),
            target: target.to_string(),
            kind,
            workspace_id,
        })
    }

    fn list_items(&self, workspace_id: WorkspaceId) -> LauncherRepoResult<Vec<LauncherItem>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, name, target, kind, workspace_id
             FROM launcher_items
             WHERE workspace_id = ?1
             ORDER BY name ASC;",
        )?;
        let mut rows = stmt.query(params![workspace_id])?;
        let mut items = Vec::new();
        while let Some(row) = rows.next()? {
            items.push(parse_item_row(row)?);
        }
        Ok(items)
    }

    fn delete_item(&self, id: LauncherItemId) -> LauncherRepoResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM launcher_items WHERE id = ?1;", params![id])?;
        if changed == 0 {
            return Err(LauncherRepoError::ItemNotFound(id));
        }
        Ok(())
    }
}

fn parse_item_row(row: &Row<'_>) -> LauncherRepoResult<LauncherItem> {
    let kind_text: String = row.get("kind")?;
    let kind = LaunchKind::parse(&kind_text).ok_or_else(|| {
        LauncherRepoError::InvalidData(format!(
            "invalid launch kind `{kind_text}` in launcher_items.kind"
        ))
    })?;

    Ok(LauncherItem {
        id: row.get("id")?,
        name: row.get("name")?,
        target: row.get("target")?,
        kind,
        workspace_id: row.get("workspace_id")?,
    })
}
