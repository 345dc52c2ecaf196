//! Repository contract tests run against both adapters.
//!
//! The in-memory adapter is the reference implementation; the SQLite
//! adapter must behave identically, including the canonical list order and
//! the batch-update semantics behind bulk reorders.

use corkboard::board::adapters::memory::InMemoryTaskRepository;
use corkboard::board::adapters::sqlite::SqliteTaskRepository;
use corkboard::board::domain::{SortOrder, Task, TaskStatus, TaskTitle};
use corkboard::board::ports::{TaskRepository, TaskRepositoryError};
use eyre::{bail, ensure};
use mockable::DefaultClock;
use rstest::rstest;

fn sample_task(title: &str, status: TaskStatus, position: i64) -> eyre::Result<Task> {
    Ok(Task::new(
        TaskTitle::new(title)?,
        String::new(),
        status,
        SortOrder::new(position)?,
        &DefaultClock,
    ))
}

fn same_record(left: &Task, right: &Task) -> bool {
    left.id() == right.id()
        && left.title() == right.title()
        && left.description() == right.description()
        && left.status() == right.status()
        && left.sort_order() == right.sort_order()
}

async fn exercises_crud(repository: &impl TaskRepository) -> eyre::Result<()> {
    let task = sample_task("Persist me", TaskStatus::ToDo, 1)?;
    repository.insert(&task).await?;
    ensure!(matches!(
        repository.insert(&task).await,
        Err(TaskRepositoryError::DuplicateTask(_))
    ));

    let Some(found) = repository.find_by_id(task.id()).await? else {
        bail!("inserted task should be found");
    };
    ensure!(same_record(&found, &task));

    let mut renamed = found;
    renamed.rename(TaskTitle::new("Persisted and renamed")?, &DefaultClock);
    repository.update(&renamed).await?;
    let Some(reloaded) = repository.find_by_id(task.id()).await? else {
        bail!("updated task should be found");
    };
    ensure!(reloaded.title().as_str() == "Persisted and renamed");

    let never_stored = sample_task("Ghost", TaskStatus::ToDo, 1)?;
    ensure!(matches!(
        repository.update(&never_stored).await,
        Err(TaskRepositoryError::NotFound(_))
    ));

    ensure!(repository.delete(task.id()).await?);
    ensure!(!repository.delete(task.id()).await?);
    ensure!(repository.find_by_id(task.id()).await?.is_none());
    Ok(())
}

async fn exercises_order_queries(repository: &impl TaskRepository) -> eyre::Result<()> {
    ensure!(repository.max_sort_order(TaskStatus::Done).await?.is_none());

    let queued_second = sample_task("Queued second", TaskStatus::ToDo, 2)?;
    let queued_first = sample_task("Queued first", TaskStatus::ToDo, 1)?;
    let finished = sample_task("Finished", TaskStatus::Done, 5)?;
    repository.insert(&queued_second).await?;
    repository.insert(&finished).await?;
    repository.insert(&queued_first).await?;

    let max_todo = repository.max_sort_order(TaskStatus::ToDo).await?;
    ensure!(max_todo.map(SortOrder::value) == Some(2));
    let max_done = repository.max_sort_order(TaskStatus::Done).await?;
    ensure!(max_done.map(SortOrder::value) == Some(5));

    let listing = repository.list_all().await?;
    let order: Vec<(TaskStatus, i64)> = listing
        .iter()
        .map(|task| (task.status(), task.sort_order().value()))
        .collect();
    ensure!(
        order
            == vec![
                (TaskStatus::ToDo, 1),
                (TaskStatus::ToDo, 2),
                (TaskStatus::Done, 5),
            ]
    );
    Ok(())
}

async fn exercises_batch_updates(repository: &impl TaskRepository) -> eyre::Result<()> {
    let mut first = sample_task("First", TaskStatus::ToDo, 1)?;
    let mut second = sample_task("Second", TaskStatus::ToDo, 2)?;
    repository.insert(&first).await?;
    repository.insert(&second).await?;

    // Swap the two positions and sneak in a task that was never stored:
    // the batch still succeeds and skips the unknown id.
    first.place_at(SortOrder::new(2)?, &DefaultClock);
    second.place_at(SortOrder::new(1)?, &DefaultClock);
    let phantom = sample_task("Phantom", TaskStatus::ToDo, 9)?;
    repository
        .update_many(&[first.clone(), second.clone(), phantom.clone()])
        .await?;

    let Some(first_reloaded) = repository.find_by_id(first.id()).await? else {
        bail!("first task should survive the batch");
    };
    let Some(second_reloaded) = repository.find_by_id(second.id()).await? else {
        bail!("second task should survive the batch");
    };
    ensure!(first_reloaded.sort_order().value() == 2);
    ensure!(second_reloaded.sort_order().value() == 1);
    ensure!(repository.find_by_id(phantom.id()).await?.is_none());
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn in_memory_adapter_honours_the_contract() -> eyre::Result<()> {
    exercises_crud(&InMemoryTaskRepository::new()).await?;
    exercises_order_queries(&InMemoryTaskRepository::new()).await?;
    exercises_batch_updates(&InMemoryTaskRepository::new()).await?;
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn sqlite_adapter_honours_the_contract() -> eyre::Result<()> {
    exercises_crud(&SqliteTaskRepository::open_in_memory()?).await?;
    exercises_order_queries(&SqliteTaskRepository::open_in_memory()?).await?;
    exercises_batch_updates(&SqliteTaskRepository::open_in_memory()?).await?;
    Ok(())
}
