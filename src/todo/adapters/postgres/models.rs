//! Diesel row models for todo persistence.

use super::schema::todos;
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Query result row for todo records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = todos)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TodoRow {
    /// Storage-assigned identity.
    pub id: i64,
    /// Todo title.
    pub title: String,
    /// Todo description.
    pub description: String,
    /// Completion status.
    pub status: bool,
    /// Insertion timestamp.
    pub created_date: DateTime<Utc>,
}

/// Insert and update model carrying the caller-controlled columns.
///
/// `id` and `created_date` are absent so storage defaults apply on insert
/// and the creation date is never rewritten on update.
#[derive(Debug, Clone, Insertable, AsChangeset)]
#[diesel(table_name = todos)]
pub struct TodoContentRow {
    /// Todo title.
    pub title: String,
    /// Todo description.
    pub description: String,
    /// Completion status.
    pub status: bool,
}
