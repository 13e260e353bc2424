//! Task repository contracts and SQLite implementation.
//!
//! # Responsibility
//! - Provide stable CRUD plus ordering/hierarchy/archival queries over the
//!   canonical `tasks` storage.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - `sort_order` for a new task is computed among non-archived siblings of
//!   the same parent; siblings under other parents never influence it.
//! - List ordering is deterministic: effective parent group, then
//!   `sort_order ASC`, then `created_at ASC`.
//! - Read paths reject invalid persisted state instead of masking it.

use crate::db::migrations::latest_version;
use crate::db::DbError;
use crate::model::task::{Task, TaskId, TaskStatus};
use rusqlite::types::Value;
use rusqlite::{params, params_from_iter, Connection, Row, Transaction, TransactionBehavior};
use std::error::Error;
use std::fmt::{Display, Formatter};

const TASK_SELECT_SQL: &str = "SELECT
    id,
    content,
    status,
    created_at,
    sort_order,
    parent_id,
    archived_at
FROM tasks";

pub type RepoResult<T> = Result<T, RepoError>;

/// Generic repository error for task persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    NotFound(TaskId),
    /// Connection schema is not at the expected migrated version.
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "task not found: {id}"),
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "task repository requires schema version {expected_version}, got {actual_version}"
            ),
            Self::InvalidData(message) => write!(f, "invalid persisted task data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::NotFound(_) => None,
            Self::UninitializedConnection { .. } => None,
            Self::InvalidData(_) => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Query options for listing tasks.
#[derive(Debug, Clone, Copy, Default)]
pub struct TaskListQuery {
    pub status: Option<TaskStatus>,
    pub include_archived: bool,
}

/// Repository interface for task store operations.
pub trait TaskRepository {
    /// Inserts one task and returns the row re-read from storage.
    fn create(&self, content: &str, parent_id: Option<TaskId>) -> RepoResult<Task>;
    /// Loads one task by id, archived or not.
    fn get(&self, id: TaskId) -> RepoResult<Option<Task>>;
    /// Lists tasks filtered and ordered for tree rendering.
    fn list(&self, query: &TaskListQuery) -> RepoResult<Vec<Task>>;
    /// Sets the status of every given id. Returns the changed row count.
    fn set_status_bulk(&self, ids: &[TaskId], status: TaskStatus) -> RepoResult<usize>;
    /// Deletes the given ids and all of their descendants. Returns the
    /// removed row count, cascaded rows included.
    fn delete_bulk(&self, ids: &[TaskId]) -> RepoResult<usize>;
    /// Rewrites `sort_order` to consecutive values starting at 1, in the
    /// order given. The caller supplies the complete sibling set.
    fn reorder(&self, parent_id: Option<TaskId>, ordered_ids: &[TaskId]) -> RepoResult<()>;
    /// Archives completed, not-yet-archived tasks older than `days` days.
    /// Returns the archived row count.
    fn archive_stale_completed(&self, days: i64) -> RepoResult<usize>;
}

/// SQLite-backed task repository.
pub struct SqliteTaskRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteTaskRepository<'conn> {
    /// Creates a repository from a migrated connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_connection_ready(conn)?;
        Ok(Self { conn })
    }
}

impl TaskRepository for SqliteTaskRepository<'_> {
    fn create(&self, content: &str, parent_id: Option<TaskId>) -> RepoResult<Task> {
        let sort_order = next_sort_order(self.conn, parent_id)?;
        self.conn.execute(
            "INSERT INTO tasks (content, status, sort_order, parent_id)
             VALUES (?1, ?2, ?3, ?4);",
            params![
                content,
                TaskStatus::Pending.as_str(),
                sort_order,
                parent_id,
            ],
        )?;

        let id = self.conn.last_insert_rowid();
        self.get(id)?.ok_or(RepoError::NotFound(id))
    }

    fn get(&self, id: TaskId) -> RepoResult<Option<Task>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{TASK_SELECT_SQL} WHERE id = ?1;"))?;
        let mut rows = stmt.query(params![id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_task_row(row)?));
        }
        Ok(None)
    }

    fn list(&self, query: &TaskListQuery) -> RepoResult<Vec<Task>> {
        let mut sql = format!("{TASK_SELECT_SQL} WHERE 1 = 1");
        let mut bind_values: Vec<Value> = Vec::new();

        if !query.include_archived {
            sql.push_str(" AND archived_at IS NULL");
        }

        if let Some(status) = query.status {
            sql.push_str(" AND status = ?");
            bind_values.push(Value::Text(status.as_str().to_string()));
        }

        // Root tasks group under their own id so every parent's children
        // follow it; the UI re-derives actual nesting from parent_id.
        sql.push_str(" ORDER BY COALESCE(parent_id, id) ASC, sort_order ASC, created_at ASC");

        let mut stmt = self.conn.prepare(&sql)?;
        let mut rows = stmt.query(params_from_iter(bind_values))?;
        let mut tasks = Vec::new();
        while let Some(row) = rows.next()? {
            tasks.push(parse_task_row(row)?);
        }
        Ok(tasks)
    }

    fn set_status_bulk(&self, ids: &[TaskId], status: TaskStatus) -> RepoResult<usize> {
        if ids.is_empty() {
            return Ok(0);
        }

        let sql = format!(
            "UPDATE tasks SET status = ? WHERE id IN ({});",
            id_placeholders(ids.len())
        );
        let mut bind_values: Vec<Value> = Vec::with_capacity(ids.len() + 1);
        bind_values.push(Value::Text(status.as_str().to_string()));
        bind_values.extend(ids.iter().map(|&id| Value::Integer(id)));

        let changed = self.conn.execute(&sql, params_from_iter(bind_values))?;
        Ok(changed)
    }

    fn delete_bulk(&self, ids: &[TaskId]) -> RepoResult<usize> {
        if ids.is_empty() {
            return Ok(0);
        }

        // UNION (not UNION ALL) keeps the walk terminating even if bad data
        // ever introduced a parent cycle.
        let sql = format!(
            "WITH RECURSIVE doomed(id) AS (
                SELECT id FROM tasks WHERE id IN ({})
                UNION
                SELECT child.id
                FROM tasks child
                INNER JOIN doomed parent ON child.parent_id = parent.id
            )
            DELETE FROM tasks WHERE id IN (SELECT id FROM doomed);",
            id_placeholders(ids.len())
        );
        let bind_values: Vec<Value> = ids.iter().map(|&id| Value::Integer(id)).collect();

        let removed = self.conn.execute(&sql, params_from_iter(bind_values))?;
        Ok(removed)
    }

    fn reorder(&self, parent_id: Option<TaskId>, ordered_ids: &[TaskId]) -> RepoResult<()> {
        if ordered_ids.is_empty() {
            return Ok(());
        }

        // `IS ?` matches the NULL parent of root tasks as well. An id from a
        // different sibling scope is skipped, not re-parented.
        let tx = Transaction::new_unchecked(self.conn, TransactionBehavior::Immediate)?;
        for (index, id) in ordered_ids.iter().enumerate() {
            tx.execute(
                "UPDATE tasks SET sort_order = ?2 WHERE id = ?1 AND parent_id IS ?3;",
                params![id, index as i64 + 1, parent_id],
            )?;
        }
        tx.commit()?;
        Ok(())
    }

    fn archive_stale_completed(&self, days: i64) -> RepoResult<usize> {
        let archived = self.conn.execute(
            "UPDATE tasks
             SET archived_at = (strftime('%s', 'now') * 1000)
             WHERE status = ?1
               AND archived_at IS NULL
               AND created_at < (strftime('%s', 'now') - ?2 * 86400) * 1000;",
            params![TaskStatus::Completed.as_str(), days],
        )?;
        Ok(archived)
    }
}

fn next_sort_order(conn: &Connection, parent_id: Option<TaskId>) -> RepoResult<i64> {
    let next = if let Some(parent_id) = parent_id {
        conn.query_row(
            "SELECT COALESCE(MAX(sort_order), 0) + 1
             FROM tasks
             WHERE parent_id = ?1
               AND archived_at IS NULL;",
            params![parent_id],
            |row| row.get(0),
        )?
    } else {
        conn.query_row(
            "SELECT COALESCE(MAX(sort_order), 0) + 1
             FROM tasks
             WHERE parent_id IS NULL
               AND archived_at IS NULL;",
            [],
            |row| row.get(0),
        )?
    };
    Ok(next)
}

fn id_placeholders(count: usize) -> String {
    let mut placeholders = String::with_capacity(count * 3);
    for index in 0..count {
        if index > 0 {
            placeholders.push_str(", ");
        }
        placeholders.push('?');
    }
    placeholders
}

fn parse_task_row(row: &Row<'_>) -> RepoResult<Task> {
    let status_text: String = row.get("status")?;
    let status = TaskStatus::parse(&status_text).ok_or_else(|| {
        RepoError::InvalidData(format!("invalid task status `{status_text}` in tasks.status"))
    })?;

    Ok(Task {
        id: row.get("id")?,
        content: row.get("content")?,
        status,
        created_at: row.get("created_at")?,
        sort_order: row.get("sort_order")?,
        parent_id: row.get("parent_id")?,
        archived_at: row.get("archived_at")?,
    })
}

fn ensure_connection_ready(conn: &Connection) -> RepoResult<()> {
    let expected_version = latest_version();
    let actual_version: u32 = conn.query_row("PRAGMA user_version;", [], |row| row.get(0))?;
    if actual_version != expected_version {
        return Err(RepoError::UninitializedConnection {
            expected_version,
            actual_version,
        });
    }
    Ok(())
}
