//! UI controller: screen transitions and task relay between the view and the backend.

use shared::domain::{Category, SortBy, TaskInput, TaskUpdate, TaskView};
use tracing::{error, info};

use crate::{
    error::ClientError,
    service::TaskService,
    view::{ElementId, TaskBlock, View, HIDDEN_CLASS},
};

pub const ADD_TASK_FAILED: &str = "Failed to add task.";
pub const FETCH_TASKS_FAILED: &str = "Failed to fetch tasks.";
pub const SORT_TASKS_FAILED: &str = "Failed to sort tasks.";
pub const UPDATE_TASK_FAILED: &str = "Failed to update task.";

pub struct UiController<S, V> {
    service: S,
    view: V,
}

impl<S: TaskService, V: View> UiController<S, V> {
    pub fn new(service: S, view: V) -> Self {
        Self { service, view }
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub fn into_view(self) -> V {
        self.view
    }

    /// Login -> task input. Purely local; nothing is sent to the backend.
    pub fn reveal_task_form(&mut self) {
        self.view.add_class(ElementId::LoginScreen, HIDDEN_CLASS);
        self.view.remove_class(ElementId::TaskInputScreen, HIDDEN_CLASS);
    }

    pub async fn submit_task(&mut self) {
        let category = Category::from_form_value(&self.view.value(ElementId::Category));
        let task = TaskInput::from_form(
            self.view.value(ElementId::TaskName),
            self.view.value(ElementId::Deadline),
            self.view.value(ElementId::Time),
            category,
        );

        match self.service.add_task(&task).await {
            Ok(message) => {
                info!(name = %task.name, ?category, "task submitted");
                self.view.alert(&message);
                // Category keeps its selection between submissions.
                for id in [ElementId::TaskName, ElementId::Deadline, ElementId::Time] {
                    self.view.set_value(id, "");
                }
            }
            Err(err) => self.fail("submit_task", &err, ADD_TASK_FAILED),
        }
    }

    pub async fn generate_schedule(&mut self) {
        match self.service.get_tasks().await {
            Ok(tasks) => self.render_schedule(&tasks),
            Err(err) => self.fail("generate_schedule", &err, FETCH_TASKS_FAILED),
        }
    }

    pub async fn sort_schedule(&mut self, sort_by: SortBy) {
        match self.service.sort_tasks(sort_by).await {
            Ok(tasks) => self.render_schedule(&tasks),
            Err(err) => self.fail("sort_schedule", &err, SORT_TASKS_FAILED),
        }
    }

    pub async fn update_task(&mut self, update: &TaskUpdate) {
        match self.service.update_task(update).await {
            Ok(message) => {
                info!(name = %update.name, "task updated");
                self.view.alert(&message);
            }
            Err(err) => self.fail("update_task", &err, UPDATE_TASK_FAILED),
        }
    }

    fn render_schedule(&mut self, tasks: &[TaskView]) {
        self.view.clear_schedule();
        for task in tasks {
            self.view.append_task_block(TaskBlock::from_task(task));
        }
        info!(count = tasks.len(), "schedule rendered");
    }

    fn fail(&mut self, operation: &'static str, err: &ClientError, notice: &str) {
        error!(operation, kind = ?err.kind(), error = %err, "backend request failed");
        self.view.alert(notice);
    }
}
