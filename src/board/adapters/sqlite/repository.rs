//! SQLite repository implementation for board persistence.

use super::{
    models::{NewTaskRow, TaskChangeset, TaskRow},
    schema::tasks,
};
use crate::board::{
    domain::{PersistedTaskData, SortOrder, Task, TaskId, TaskStatus, TaskTitle},
    ordering,
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};
use async_trait::async_trait;
use diesel::connection::SimpleConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use diesel::sqlite::SqliteConnection;
use uuid::Uuid;

/// SQLite connection pool type used by board adapters.
pub type TaskSqlitePool = Pool<ConnectionManager<SqliteConnection>>;

/// Schema bootstrap executed when opening a database.
///
/// The board owns its storage file and creates the table and indexes on
/// first use.
const CREATE_SCHEMA_SQL: &str = "
CREATE TABLE IF NOT EXISTS tasks (
    id TEXT PRIMARY KEY NOT NULL,
    title TEXT NOT NULL,
    description TEXT NOT NULL DEFAULT '',
    status TEXT NOT NULL DEFAULT 'To Do',
    sort_order BIGINT NOT NULL DEFAULT 1,
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL
);
CREATE INDEX IF NOT EXISTS idx_tasks_status ON tasks(status);
CREATE INDEX IF NOT EXISTS idx_tasks_sort_order ON tasks(sort_order);
";

/// SQLite-backed task repository.
#[derive(Debug, Clone)]
pub struct SqliteTaskRepository {
    pool: TaskSqlitePool,
}

impl SqliteTaskRepository {
    /// Opens the database at `database_url`, bootstrapping the schema when
    /// missing.
    ///
    /// Accepts a filesystem path or any SQLite URL diesel understands.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Persistence`] when the pool cannot be
    /// built or the schema bootstrap fails.
    pub fn open(database_url: &str) -> TaskRepositoryResult<Self> {
        let manager = ConnectionManager::<SqliteConnection>::new(database_url);
        let pool = Pool::builder()
            .build(manager)
            .map_err(TaskRepositoryError::persistence)?;
        let repository = Self { pool };
        repository.ensure_schema()?;
        tracing::debug!(database_url, "task store ready");
        Ok(repository)
    }

    /// Opens a private in-memory database, for tests and tooling.
    ///
    /// The pool is capped at a single connection so every operation sees
    /// the same in-memory database.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Persistence`] when the pool cannot be
    /// built or the schema bootstrap fails.
    pub fn open_in_memory() -> TaskRepositoryResult<Self> {
        let manager = ConnectionManager::<SqliteConnection>::new(":memory:");
        let pool = Pool::builder()
            .max_size(1)
            .build(manager)
            .map_err(TaskRepositoryError::persistence)?;
        let repository = Self { pool };
        repository.ensure_schema()?;
        Ok(repository)
    }

    fn ensure_schema(&self) -> TaskRepositoryResult<()> {
        let mut connection = self.pool.get().map_err(TaskRepositoryError::persistence)?;
        connection
            .batch_execute(CREATE_SCHEMA_SQL)
            .map_err(TaskRepositoryError::persistence)
    }

    async fn run_blocking<F, T>(&self, f: F) -> TaskRepositoryResult<T>
    where
        F: FnOnce(&mut SqliteConnection) -> TaskRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(TaskRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(TaskRepositoryError::persistence)?
    }
}

#[async_trait]
impl TaskRepository for SqliteTaskRepository {
    async fn insert(&self, task: &Task) -> TaskRepositoryResult<()> {
        let task_id = task.id();
        let new_row = to_new_row(task);
        self.run_blocking(move |connection| {
            diesel::insert_into(tasks::table)
                .values(&new_row)
                .execute(connection)
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                        TaskRepositoryError::DuplicateTask(task_id)
                    }
                    _ => TaskRepositoryError::persistence(err),
                })?;
            Ok(())
        })
        .await
    }

    async fn update(&self, task: &Task) -> TaskRepositoryResult<()> {
        let task_id = task.id();
        let row_id = task_id.into_inner().to_string();
        let changes = to_changeset(task);
        self.run_blocking(move |connection| {
            let affected = diesel::update(tasks::table.filter(tasks::id.eq(row_id.as_str())))
                .set(&changes)
                .execute(connection)
                .map_err(TaskRepositoryError::persistence)?;
            if affected == 0 {
                return Err(TaskRepositoryError::NotFound(task_id));
            }
            Ok(())
        })
        .await
    }

    async fn update_many(&self, batch: &[Task]) -> TaskRepositoryResult<()> {
        let rows: Vec<(String, TaskChangeset)> = batch
            .iter()
            .map(|task| (task.id().into_inner().to_string(), to_changeset(task)))
            .collect();
        self.run_blocking(move |connection| {
            connection
                .transaction(|txn| {
                    for (row_id, changes) in &rows {
                        // Ids deleted since the batch was assembled affect
                        // zero rows; the rest of the batch still commits.
                        diesel::update(tasks::table.filter(tasks::id.eq(row_id.as_str())))
                            .set(changes)
                            .execute(txn)?;
                    }
                    Ok(())
                })
                .map_err(|err: DieselError| TaskRepositoryError::persistence(err))
        })
        .await
    }

    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        let row_id = id.into_inner().to_string();
        self.run_blocking(move |connection| {
            let row = tasks::table
                .filter(tasks::id.eq(row_id.as_str()))
                .select(TaskRow::as_select())
                .first::<TaskRow>(connection)
                .optional()
                .map_err(TaskRepositoryError::persistence)?;
            row.map(row_to_task).transpose()
        })
        .await
    }

    async fn delete(&self, id: TaskId) -> TaskRepositoryResult<bool> {
        let row_id = id.into_inner().to_string();
        self.run_blocking(move |connection| {
            let affected = diesel::delete(tasks::table.filter(tasks::id.eq(row_id.as_str())))
                .execute(connection)
                .map_err(TaskRepositoryError::persistence)?;
            Ok(affected > 0)
        })
        .await
    }

    async fn list_all(&self) -> TaskRepositoryResult<Vec<Task>> {
        self.run_blocking(|connection| {
            let rows = tasks::table
                .select(TaskRow::as_select())
                .load::<TaskRow>(connection)
                .map_err(TaskRepositoryError::persistence)?;
            let mut result = rows
                .into_iter()
                .map(row_to_task)
                .collect::<TaskRepositoryResult<Vec<_>>>()?;
            // Column display order differs from the labels' lexical order,
            // so the canonical sort happens here rather than in SQL.
            ordering::sort_canonical(&mut result);
            Ok(result)
        })
        .await
    }

    async fn max_sort_order(&self, status: TaskStatus) -> TaskRepositoryResult<Option<SortOrder>> {
        let label = status.as_str();
        self.run_blocking(move |connection| {
            let current_max: Option<i64> = tasks::table
                .filter(tasks::status.eq(label))
                .select(diesel::dsl::max(tasks::sort_order))
                .first(connection)
                .map_err(TaskRepositoryError::persistence)?;
            current_max
                .map(|value| SortOrder::new(value).map_err(TaskRepositoryError::persistence))
                .transpose()
        })
        .await
    }
}

fn to_new_row(task: &Task) -> NewTaskRow {
    NewTaskRow {
        id: task.id().into_inner().to_string(),
        title: task.title().as_str().to_owned(),
        description: task.description().to_owned(),
        status: task.status().as_str().to_owned(),
        sort_order: task.sort_order().value(),
        created_at: task.created_at(),
        updated_at: task.updated_at(),
    }
}

fn to_changeset(task: &Task) -> TaskChangeset {
    TaskChangeset {
        title: task.title().as_str().to_owned(),
        description: task.description().to_owned(),
        status: task.status().as_str().to_owned(),
        sort_order: task.sort_order().value(),
        updated_at: task.updated_at(),
    }
}

fn row_to_task(row: TaskRow) -> TaskRepositoryResult<Task> {
    let TaskRow {
        id,
        title,
        description,
        status,
        sort_order,
        created_at,
        updated_at,
    } = row;

    let parsed_id = Uuid::parse_str(&id).map_err(TaskRepositoryError::persistence)?;
    let parsed_title = TaskTitle::new(title).map_err(TaskRepositoryError::persistence)?;
    let parsed_status =
        TaskStatus::try_from(status.as_str()).map_err(TaskRepositoryError::persistence)?;
    let position = SortOrder::new(sort_order).map_err(TaskRepositoryError::persistence)?;

    Ok(Task::from_persisted(PersistedTaskData {
        id: TaskId::from_uuid(parsed_id),
        title: parsed_title,
        description,
        status: parsed_status,
        sort_order: position,
        created_at,
        updated_at,
    }))
}
