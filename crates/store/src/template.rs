//! Insert statement template loaded from disk.

use std::path::Path;

use crate::error::StoreError;

/// One parameterised insert statement with seven positional placeholders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsertTemplate {
    sql: String,
}

impl InsertTemplate {
    /// Wraps a statement string; surrounding whitespace is trimmed.
    ///
    /// Returns `None` for a blank statement.
    pub fn new(sql: impl Into<String>) -> Option<Self> {
        let sql = sql.into();
        let trimmed = sql.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(Self {
            sql: trimmed.to_string(),
        })
    }

    /// Reads the template from a file.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::TemplateUnreadable`] if the file cannot be read,
    /// is not UTF-8, or contains only whitespace.
    pub fn from_file(path: &Path) -> Result<Self, StoreError> {
        let unreadable = |reason: String| StoreError::TemplateUnreadable {
            path: path.to_path_buf(),
            reason,
        };
        let sql = std::fs::read_to_string(path).map_err(|e| unreadable(e.to_string()))?;
        Self::new(sql).ok_or_else(|| unreadable("file is empty".to_string()))
    }

    /// Returns the statement text.
    pub fn sql(&self) -> &str {
        &self.sql
    }
}
