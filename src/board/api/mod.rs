//! JSON request/response boundary for the board.
//!
//! The in-scope half of the HTTP surface: typed payloads, the uniform
//! response envelope, and one handler per endpoint. Method dispatch,
//! transport framing, CORS, and connection setup belong to the external
//! HTTP front, which hands each handler the raw request body.

mod handlers;
mod payload;
mod response;

pub use handlers::TaskBoardApi;
pub use payload::{CreateTaskPayload, DeleteTaskPayload, ReorderPayload, UpdateTaskPayload};
pub use response::ApiResponse;
