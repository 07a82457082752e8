//! Backend task service: the trait the controller talks to and its HTTP implementation.

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use shared::{
    domain::{SortBy, TaskInput, TaskUpdate, TaskView},
    protocol::{MessageResponse, SortTasksRequest, TaskListResponse},
};
use tracing::debug;
use url::Url;

use crate::error::ClientError;

pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:5000";

#[async_trait]
pub trait TaskService: Send + Sync {
    /// Submits a new task and returns the backend's human-readable message.
    async fn add_task(&self, task: &TaskInput) -> Result<String, ClientError>;
    async fn get_tasks(&self) -> Result<Vec<TaskView>, ClientError>;
    /// Asks the backend to reorder its list and returns the reordered tasks.
    async fn sort_tasks(&self, sort_by: SortBy) -> Result<Vec<TaskView>, ClientError>;
    async fn update_task(&self, update: &TaskUpdate) -> Result<String, ClientError>;
}

#[derive(Debug, Clone)]
struct Endpoints {
    add_task: Url,
    get_tasks: Url,
    sort_tasks: Url,
    update_task: Url,
}

impl Endpoints {
    fn resolve(base_url: &Url) -> Result<Self, url::ParseError> {
        // Url::join drops the last path segment unless the base ends with '/'.
        let mut base = base_url.clone();
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }

        Ok(Self {
            add_task: base.join("add_task")?,
            get_tasks: base.join("get_tasks")?,
            sort_tasks: base.join("sort_tasks")?,
            update_task: base.join("update_task")?,
        })
    }
}

pub struct TaskClient {
    http: Client,
    endpoints: Endpoints,
}

impl TaskClient {
    pub fn new(base_url: &Url) -> Result<Self, url::ParseError> {
        Self::with_http_client(base_url, Client::new())
    }

    pub fn with_http_client(base_url: &Url, http: Client) -> Result<Self, url::ParseError> {
        Ok(Self {
            http,
            endpoints: Endpoints::resolve(base_url)?,
        })
    }

    pub fn add_task_url(&self) -> &Url {
        &self.endpoints.add_task
    }

    pub fn get_tasks_url(&self) -> &Url {
        &self.endpoints.get_tasks
    }
}

async fn decode_response<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
    let status = response.status();
    let body = response.bytes().await?;
    if !status.is_success() {
        let message = serde_json::from_slice::<MessageResponse>(&body)
            .ok()
            .map(|body| body.message);
        return Err(ClientError::HttpStatus { status, message });
    }
    Ok(serde_json::from_slice(&body)?)
}

#[async_trait]
impl TaskService for TaskClient {
    async fn add_task(&self, task: &TaskInput) -> Result<String, ClientError> {
        debug!(url = %self.endpoints.add_task, name = %task.name, "posting task");
        let res = self
            .http
            .post(self.endpoints.add_task.clone())
            .json(task)
            .send()
            .await?;
        let body: MessageResponse = decode_response(res).await?;
        Ok(body.message)
    }

    async fn get_tasks(&self) -> Result<Vec<TaskView>, ClientError> {
        debug!(url = %self.endpoints.get_tasks, "fetching tasks");
        let res = self.http.get(self.endpoints.get_tasks.clone()).send().await?;
        let body: TaskListResponse = decode_response(res).await?;
        Ok(body.tasks)
    }

    async fn sort_tasks(&self, sort_by: SortBy) -> Result<Vec<TaskView>, ClientError> {
        debug!(url = %self.endpoints.sort_tasks, %sort_by, "sorting tasks");
        let res = self
            .http
            .post(self.endpoints.sort_tasks.clone())
            .json(&SortTasksRequest { sort_by })
            .send()
            .await?;
        let body: TaskListResponse = decode_response(res).await?;
        Ok(body.tasks)
    }

    async fn update_task(&self, update: &TaskUpdate) -> Result<String, ClientError> {
        debug!(url = %self.endpoints.update_task, name = %update.name, "updating task");
        let res = self
            .http
            .post(self.endpoints.update_task.clone())
            .json(update)
            .send()
            .await?;
        let body: MessageResponse = decode_response(res).await?;
        Ok(body.message)
    }
}
