//! Template use-case service.
//!
//! # Invariants
//! - Blank titles or content never reach storage.
//! - Duplicate-title conflicts pass through unchanged for the UI to report.

use crate::model::template::{Template, TemplateId};
use crate::repo::template_repo::{TemplateRepoError, TemplateRepository};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from template service operations.
#[derive(Debug)]
pub enum TemplateServiceError {
    /// Title or content is empty or all-whitespace.
    EmptyField(&'static str),
    Repo(TemplateRepoError),
}

impl Display for TemplateServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyField(field) => write!(f, "template {field} must not be blank"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for TemplateServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            Self::EmptyField(_) => None,
        }
    }
}

impl From<TemplateRepoError> for TemplateServiceError {
    fn from(value: TemplateRepoError) -> Self {
        Self::Repo(value)
    }
}

/// Template service facade over repository implementations.
pub struct TemplateService<R: TemplateRepository> {
    repo: R,
}

impl<R: TemplateRepository> TemplateService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Saves a new template. Returns its assigned id.
    pub fn add(&self, title: &str, content: &str) -> Result<TemplateId, TemplateServiceError> {
        let (title, content) = validated(title, content)?;
        self.repo.add(title, content).map_err(Into::into)
    }

    /// Lists all templates ordered by title.
    pub fn list(&self) -> Result<Vec<Template>, TemplateServiceError> {
        self.repo.list().map_err(Into::into)
    }

    /// Loads one template by id.
    pub fn get(&self, id: TemplateId) -> Result<Option<Template>, TemplateServiceError> {
        self.repo.get(id).map_err(Into::into)
    }

    /// Replaces an existing template's title and content.
    pub fn update(
        &self,
        id: TemplateId,
        title: &str,
        content: &str,
    ) -> Result<(), TemplateServiceError> {
        let (title, content) = validated(title, content)?;
        self.repo.update(id, title, content).map_err(Into::into)
    }

    /// Removes one template.
    pub fn delete(&self, id: TemplateId) -> Result<(), TemplateServiceError> {
        self.repo.delete(id).map_err(Into::into)
    }
}

fn validated<'a>(
    title: &'a str,
    content: &'a str,
) -> Result<(&'a str, &'a str), TemplateServiceError> {
    let title = title.trim();
    if title.is_empty() {
        return Err(TemplateServiceError::EmptyField("title"));
    }
    let content = content.trim();
    if content.is_empty() {
        return Err(TemplateServiceError::EmptyField("content"));
    }
    Ok((title, content))
}
