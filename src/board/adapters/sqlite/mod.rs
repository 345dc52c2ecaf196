//! SQLite adapters for board persistence.

mod models;
mod repository;
mod schema;

pub use repository::{SqliteTaskRepository, TaskSqlitePool};
