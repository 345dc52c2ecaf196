//! Application services for board orchestration.

mod operations;

pub use operations::{
    CreateTaskRequest, ReorderRequest, TaskBoardError, TaskBoardResult, TaskBoardService,
    UpdateTaskRequest,
};
