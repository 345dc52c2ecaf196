//! Diesel schema for board persistence.

diesel::table! {
    /// Task records with per-column position ordering.
    tasks (id) {
        /// Task identifier (UUID string).
        id -> Text,
        /// Task title.
        title -> Text,
        /// Task description, possibly empty.
        description -> Text,
        /// Status column label.
        status -> Text,
        /// Position within the status column.
        sort_order -> BigInt,
        /// Creation timestamp.
        created_at -> TimestamptzSqlite,
        /// Last update timestamp.
        updated_at -> TimestamptzSqlite,
    }
}
