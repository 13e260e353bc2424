//! Template repository contracts and SQLite implementation.
//!
//! # Invariants
//! - Template titles are unique; a clashing insert or rename surfaces as
//!   `DuplicateTitle`, never as a silent overwrite.

use crate::db::DbError;
use crate::model::template::{Template, TemplateId};
use rusqlite::{params, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type TemplateRepoResult<T> = Result<T, TemplateRepoError>;

/// Errors from template persistence operations.
#[derive(Debug)]
pub enum TemplateRepoError {
    Db(DbError),
    NotFound(TemplateId),
    /// Another template already holds this title.
    DuplicateTitle(String),
}

impl Display for TemplateRepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "template not found: {id}"),
            Self::DuplicateTitle(title) => {
                write!(f, "template title already exists: `{title}`")
            }
        }
    }
}

impl Error for TemplateRepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::NotFound(_) => None,
            Self::DuplicateTitle(_) => None,
        }
    }
}

impl From<DbError> for TemplateRepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for TemplateRepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Repository interface for template CRUD operations.
pub trait TemplateRepository {
    /// Inserts one template and returns its assigned id.
    fn add(&self, title: &str, content: &str) -> TemplateRepoResult<TemplateId>;
    /// Lists all templates ordered by title.
    fn list(&self) -> TemplateRepoResult<Vec<Template>>;
    /// Loads one template by id.
    fn get(&self, id: TemplateId) -> TemplateRepoResult<Option<Template>>;
    /// Replaces title and content of an existing template.
    fn update(&self, id: TemplateId, title: &str, content: &str) -> TemplateRepoResult<()>;
    /// Removes one template.
    fn delete(&self, id: TemplateId) -> TemplateRepoResult<()>;
}

/// SQLite-backed template repository.
pub struct SqliteTemplateRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteTemplateRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl TemplateRepository for SqliteTemplateRepository<'_> {
    fn add(&self, title: &str, content: &str) -> TemplateRepoResult<TemplateId> {
        self.conn
            .execute(
                "INSERT INTO templates (title, content) VALUES (?1, ?2);",
                params![title, content],
            )
            .map_err(|err| map_title_conflict(err, title))?;
        Ok(self.conn.last_insert_rowid())
    }

    fn list(&self) -> TemplateRepoResult<Vec<Template>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, title, content FROM templates ORDER BY title ASC;")?;
        let mut rows = stmt.query([])?;
        let mut templates = Vec::new();
        while let Some(row) = rows.next()? {
            templates.push(parse_template_row(row)?);
        }
        Ok(templates)
    }

    fn get(&self, id: TemplateId) -> TemplateRepoResult<Option<Template>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, title, content FROM templates WHERE id = ?1;")?;
        let mut rows = stmt.query(params![id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_template_row(row)?));
        }
        Ok(None)
    }

    fn update(&self, id: TemplateId, title: &str, content: &str) -> TemplateRepoResult<()> {
        let changed = self
            .conn
            .execute(
                "UPDATE templates SET title = ?2, content = ?3 WHERE id = ?1;",
                params![id, title, content],
            )
            .map_err(|err| map_title_conflict(err, title))?;
        if changed == 0 {
            return Err(TemplateRepoError::NotFound(id));
        }
        Ok(())
    }

    fn delete(&self, id: TemplateId) -> TemplateRepoResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM templates WHERE id = ?1;", params![id])?;
        if changed == 0 {
            return Err(TemplateRepoError::NotFound(id));
        }
        Ok(())
    }
}

// The only constraint on `templates` is the unique title.
fn map_title_conflict(err: rusqlite::Error, title: &str) -> TemplateRepoError {
    match err.sqlite_error_code() {
        Some(rusqlite::ErrorCode::ConstraintViolation) => {
            TemplateRepoError::DuplicateTitle(title.to_string())
        }
        _ => TemplateRepoError::from(err),
    }
}

fn parse_template_row(row: &Row<'_>) -> TemplateRepoResult<Template> {
    Ok(Template {
        id: row.get("id")?,
        title: row.get("title")?,
        content: row.get("content")?,
    })
}
