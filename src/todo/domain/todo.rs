//! Todo record and the validated content it carries.

use super::{TodoId, TodoTitle};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Caller-controlled fields of a todo, validated and ready to persist.
///
/// Both creation and update write exactly these fields; `id` and
/// `created_date` stay under storage control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoContent {
    title: TodoTitle,
    description: String,
    status: bool,
}

impl TodoContent {
    /// Creates content with an empty description and an open status.
    #[must_use]
    pub const fn new(title: TodoTitle) -> Self {
        Self {
            title,
            description: String::new(),
            status: false,
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the completion status.
    #[must_use]
    pub const fn with_status(mut self, status: bool) -> Self {
        self.status = status;
        self
    }

    /// Returns the title.
    #[must_use]
    pub const fn title(&self) -> &TodoTitle {
        &self.title
    }

    /// Returns the description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the completion status.
    #[must_use]
    pub const fn status(&self) -> bool {
        self.status
    }
}

/// Persisted todo record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    id: TodoId,
    content: TodoContent,
    created_date: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted todo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTodoData {
    /// Storage-assigned identifier.
    pub id: TodoId,
    /// Persisted title, description and status.
    pub content: TodoContent,
    /// Storage-assigned creation timestamp.
    pub created_date: DateTime<Utc>,
}

impl Todo {
    /// Reconstructs a todo from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTodoData) -> Self {
        Self {
            id: data.id,
            content: data.content,
            created_date: data.created_date,
        }
    }

    /// Returns a copy carrying new content; identity and creation date are kept.
    #[must_use]
    pub fn with_content(&self, content: TodoContent) -> Self {
        Self {
            id: self.id,
            content,
            created_date: self.created_date,
        }
    }

    /// Returns the todo identifier.
    #[must_use]
    pub const fn id(&self) -> TodoId {
        self.id
    }

    /// Returns the todo content.
    #[must_use]
    pub const fn content(&self) -> &TodoContent {
        &self.content
    }

    /// Returns the title.
    #[must_use]
    pub fn title(&self) -> &str {
        self.content.title().as_str()
    }

    /// Returns the description.
    #[must_use]
    pub fn description(&self) -> &str {
        self.content.description()
    }

    /// Returns the completion status.
    #[must_use]
    pub const fn status(&self) -> bool {
        self.content.status()
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_date(&self) -> DateTime<Utc> {
        self.created_date
    }
}
