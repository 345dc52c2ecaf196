//! Diesel row models for board persistence.

use super::schema::tasks;
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Query result row for task records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = tasks)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct TaskRow {
    /// Task identifier as a UUID string.
    pub id: String,
    /// Task title.
    pub title: String,
    /// Task description.
    pub description: String,
    /// Status column label.
    pub status: String,
    /// Position within the status column.
    pub sort_order: i64,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Insert model for task records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = tasks)]
pub struct NewTaskRow {
    /// Task identifier as a UUID string.
    pub id: String,
    /// Task title.
    pub title: String,
    /// Task description.
    pub description: String,
    /// Status column label.
    pub status: String,
    /// Position within the status column.
    pub sort_order: i64,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Changeset applied when persisting task mutations.
///
/// The identifier and creation timestamp never change after insert.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = tasks)]
pub struct TaskChangeset {
    /// Updated title.
    pub title: String,
    /// Updated description.
    pub description: String,
    /// Updated status column label.
    pub status: String,
    /// Updated column position.
    pub sort_order: i64,
    /// Mutation timestamp.
    pub updated_at: DateTime<Utc>,
}
