use serde::{Deserialize, Serialize};

use crate::domain::{SortBy, TaskView};

/// Body returned by `/add_task`, `/update_task`, and by the backend's error responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Body returned by `/get_tasks` and `/sort_tasks`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskListResponse {
    pub tasks: Vec<TaskView>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortTasksRequest {
    pub sort_by: SortBy,
}
