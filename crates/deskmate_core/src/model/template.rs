//! Message template domain model.

use serde::{Deserialize, Serialize};

/// Store-assigned template identifier.
pub type TemplateId = i64;

/// Reusable message/email template.
///
/// Titles are unique across the whole table; the repository surfaces a
/// duplicate-title error instead of silently overwriting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Template {
    pub id: TemplateId,
    pub title: String,
    pub content: String,
}
