//! Boundary tests for the JSON envelope and endpoint validation rules.

use std::sync::Arc;

use crate::board::{
    adapters::memory::InMemoryTaskRepository,
    api::{ApiResponse, TaskBoardApi},
    domain::{Task, TaskId, TaskStatus},
    services::TaskBoardService,
};
use eyre::{bail, ensure};
use mockable::DefaultClock;
use rstest::{fixture, rstest};
use serde_json::json;

type TestApi = TaskBoardApi<InMemoryTaskRepository, DefaultClock>;

#[fixture]
fn api() -> TestApi {
    TaskBoardApi::new(TaskBoardService::new(
        Arc::new(InMemoryTaskRepository::new()),
        Arc::new(DefaultClock),
    ))
}

async fn created_task(api: &TestApi, title: &str, status: &str) -> eyre::Result<Task> {
    let response = api
        .create_task(&json!({"title": title, "status": status}).to_string())
        .await;
    match response.task {
        Some(task) => Ok(task),
        None => bail!("create should return the task: {response:?}"),
    }
}

fn failure_message(response: &ApiResponse) -> Option<&str> {
    (!response.success)
        .then_some(response.message.as_deref())
        .flatten()
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn malformed_bodies_report_invalid_json(api: TestApi) -> eyre::Result<()> {
    let garbled = "{not json";
    for response in [
        api.create_task(garbled).await,
        api.update_task(garbled).await,
        api.delete_task(garbled).await,
        api.reorder_tasks(garbled).await,
    ] {
        ensure!(failure_message(&response) == Some("Invalid JSON input"));
    }
    Ok(())
}

#[rstest]
#[case(json!({}))]
#[case(json!({"title": "   "}))]
#[tokio::test(flavor = "multi_thread")]
async fn create_requires_a_title(api: TestApi, #[case] body: serde_json::Value) {
    let response = api.create_task(&body.to_string()).await;
    assert_eq!(failure_message(&response), Some("Title is required"));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_coerces_unknown_status_to_todo(api: TestApi) -> eyre::Result<()> {
    let task = created_task(&api, "Surprise", "Someday").await?;
    ensure!(task.status() == TaskStatus::ToDo);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_answers_with_task_and_message(api: TestApi) -> eyre::Result<()> {
    let response = api
        .create_task(&json!({"title": "Hello", "description": "world"}).to_string())
        .await;
    ensure!(response.success);
    ensure!(response.message.as_deref() == Some("Task created successfully"));
    let Some(task) = response.task else {
        bail!("created task missing from envelope");
    };
    ensure!(task.title().as_str() == "Hello");
    ensure!(task.description() == "world");
    ensure!(response.tasks.is_none());
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_requires_an_id(api: TestApi) {
    let response = api
        .update_task(&json!({"title": "No id"}).to_string())
        .await;
    assert_eq!(failure_message(&response), Some("Task ID is required"));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_of_unknown_id_is_not_found(api: TestApi) {
    let response = api
        .update_task(&json!({"id": TaskId::new(), "title": "Ghost"}).to_string())
        .await;
    assert_eq!(failure_message(&response), Some("Task not found"));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_drops_invalid_fields_and_applies_the_rest(api: TestApi) -> eyre::Result<()> {
    let created = created_task(&api, "Original", "To Do").await?;
    let response = api
        .update_task(
            &json!({
                "id": created.id(),
                "title": "   ",
                "status": "Nope",
                "description": "kept",
            })
            .to_string(),
        )
        .await;
    ensure!(response.success);
    let Some(task) = response.task else {
        bail!("updated task missing from envelope");
    };
    ensure!(task.title().as_str() == "Original");
    ensure!(task.status() == TaskStatus::ToDo);
    ensure!(task.description() == "kept");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_with_no_valid_fields_is_an_error(api: TestApi) -> eyre::Result<()> {
    let created = created_task(&api, "Original", "To Do").await?;
    let response = api
        .update_task(&json!({"id": created.id(), "title": "   "}).to_string())
        .await;
    ensure!(failure_message(&response) == Some("No valid fields to update"));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn delete_requires_an_id(api: TestApi) {
    let response = api.delete_task(&json!({}).to_string()).await;
    assert_eq!(failure_message(&response), Some("Task ID is required"));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn delete_of_unknown_id_is_not_found(api: TestApi) {
    let response = api
        .delete_task(&json!({"id": TaskId::new()}).to_string())
        .await;
    assert_eq!(failure_message(&response), Some("Task not found"));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn delete_answers_with_a_message(api: TestApi) -> eyre::Result<()> {
    let created = created_task(&api, "Doomed", "To Do").await?;
    let response = api
        .delete_task(&json!({"id": created.id()}).to_string())
        .await;
    ensure!(response.success);
    ensure!(response.message.as_deref() == Some("Task deleted successfully"));
    ensure!(response.task.is_none());
    Ok(())
}

#[rstest]
#[case(json!({}))]
#[case(json!({"taskIds": []}))]
#[tokio::test(flavor = "multi_thread")]
async fn reorder_requires_a_non_empty_id_array(api: TestApi, #[case] body: serde_json::Value) {
    let response = api.reorder_tasks(&body.to_string()).await;
    assert_eq!(failure_message(&response), Some("Task IDs array is required"));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn reorder_with_unknown_status_applies_positions_only(api: TestApi) -> eyre::Result<()> {
    let task_a = created_task(&api, "A", "To Do").await?;
    let task_b = created_task(&api, "B", "To Do").await?;

    let response = api
        .reorder_tasks(
            &json!({"taskIds": [task_b.id(), task_a.id()], "status": "Someday"}).to_string(),
        )
        .await;
    ensure!(response.success);
    ensure!(response.message.as_deref() == Some("Tasks reordered successfully"));

    let listing = api.list_tasks().await;
    let Some(board) = listing.tasks else {
        bail!("listing should return tasks");
    };
    let first = board.first();
    ensure!(first.map(Task::id) == Some(task_b.id()));
    ensure!(board.iter().all(|task| task.status() == TaskStatus::ToDo));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn list_returns_the_board_in_canonical_order(api: TestApi) -> eyre::Result<()> {
    created_task(&api, "Queued", "To Do").await?;
    created_task(&api, "Active", "In Progress").await?;
    created_task(&api, "Finished", "Done").await?;

    let response = api.list_tasks().await;
    ensure!(response.success);
    let Some(board) = response.tasks else {
        bail!("listing should return tasks");
    };
    let statuses: Vec<TaskStatus> = board.iter().map(Task::status).collect();
    ensure!(
        statuses
            == vec![
                TaskStatus::ToDo,
                TaskStatus::InProgress,
                TaskStatus::Done,
            ]
    );
    Ok(())
}

#[rstest]
fn envelope_omits_absent_fields() -> eyre::Result<()> {
    let value = serde_json::to_value(ApiResponse::ok_message("done"))?;
    ensure!(value.get("success") == Some(&json!(true)));
    ensure!(value.get("task").is_none());
    ensure!(value.get("tasks").is_none());

    let failure = serde_json::to_value(ApiResponse::failure("broken"))?;
    ensure!(failure.get("success") == Some(&json!(false)));
    ensure!(failure.get("message") == Some(&json!("broken")));
    Ok(())
}
