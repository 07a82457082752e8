//! The document contract the controller renders into, plus an in-memory document.

use std::collections::{BTreeSet, HashMap};

use shared::domain::TaskView;

/// Class whose presence suppresses rendering of an element.
pub const HIDDEN_CLASS: &str = "hidden";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementId {
    LoginScreen,
    TaskInputScreen,
    TaskName,
    Deadline,
    Time,
    Category,
    ScheduleOutput,
}

impl ElementId {
    pub const ALL: [ElementId; 7] = [
        ElementId::LoginScreen,
        ElementId::TaskInputScreen,
        ElementId::TaskName,
        ElementId::Deadline,
        ElementId::Time,
        ElementId::Category,
        ElementId::ScheduleOutput,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::LoginScreen => "login-screen",
            Self::TaskInputScreen => "task-input-screen",
            Self::TaskName => "task-name",
            Self::Deadline => "deadline",
            Self::Time => "time",
            Self::Category => "category",
            Self::ScheduleOutput => "schedule-output",
        }
    }
}

/// One rendered task: a heading and its labelled paragraphs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskBlock {
    pub heading: String,
    pub paragraphs: Vec<String>,
}

impl TaskBlock {
    pub fn from_task(task: &TaskView) -> Self {
        Self {
            heading: task.name.clone(),
            paragraphs: vec![
                format!("Deadline: {}", task.deadline),
                format!("Priority: {}", task.priority),
                format!("AI Note: {}", task.ai_note),
            ],
        }
    }
}

pub trait View {
    fn add_class(&mut self, id: ElementId, class: &str);
    fn remove_class(&mut self, id: ElementId, class: &str);
    fn value(&self, id: ElementId) -> String;
    fn set_value(&mut self, id: ElementId, value: &str);
    /// Blocking, user-facing notice.
    fn alert(&mut self, message: &str);
    fn clear_schedule(&mut self);
    fn append_task_block(&mut self, block: TaskBlock);
}

#[derive(Debug, Clone, Default)]
struct Element {
    classes: BTreeSet<String>,
    value: String,
}

/// Headless document holding every element of the contract.
#[derive(Debug, Clone)]
pub struct Document {
    elements: HashMap<ElementId, Element>,
    schedule: Vec<TaskBlock>,
    alerts: Vec<String>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Starts on the login screen with empty fields.
    pub fn new() -> Self {
        let mut elements: HashMap<ElementId, Element> = ElementId::ALL
            .into_iter()
            .map(|id| (id, Element::default()))
            .collect();
        if let Some(screen) = elements.get_mut(&ElementId::TaskInputScreen) {
            screen.classes.insert(HIDDEN_CLASS.to_string());
        }
        Self {
            elements,
            schedule: Vec::new(),
            alerts: Vec::new(),
        }
    }

    pub fn has_class(&self, id: ElementId, class: &str) -> bool {
        self.elements
            .get(&id)
            .is_some_and(|element| element.classes.contains(class))
    }

    pub fn is_hidden(&self, id: ElementId) -> bool {
        self.has_class(id, HIDDEN_CLASS)
    }

    pub fn schedule(&self) -> &[TaskBlock] {
        &self.schedule
    }

    pub fn alerts(&self) -> &[String] {
        &self.alerts
    }
}

impl View for Document {
    fn add_class(&mut self, id: ElementId, class: &str) {
        self.elements
            .entry(id)
            .or_default()
            .classes
            .insert(class.to_string());
    }

    fn remove_class(&mut self, id: ElementId, class: &str) {
        if let Some(element) = self.elements.get_mut(&id) {
            element.classes.remove(class);
        }
    }

    fn value(&self, id: ElementId) -> String {
        self.elements
            .get(&id)
            .map(|element| element.value.clone())
            .unwrap_or_default()
    }

    fn set_value(&mut self, id: ElementId, value: &str) {
        self.elements.entry(id).or_default().value = value.to_string();
    }

    fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_string());
    }

    fn clear_schedule(&mut self) {
        self.schedule.clear();
    }

    fn append_task_block(&mut self, block: TaskBlock) {
        self.schedule.push(block);
    }
}
