use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Classification picked on the task-input screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Personal,
    Professional,
    Unknown,
}

impl Category {
    /// Exact, case-sensitive match on the form value.
    pub fn from_form_value(value: &str) -> Self {
        match value {
            "personal" => Self::Personal,
            "professional" => Self::Professional,
            _ => Self::Unknown,
        }
    }

    pub fn flags(self) -> CategoryFlags {
        match self {
            Self::Personal => CategoryFlags {
                project_related: false,
                is_personal: true,
            },
            Self::Professional => CategoryFlags {
                project_related: true,
                is_personal: false,
            },
            Self::Unknown => CategoryFlags {
                project_related: false,
                is_personal: false,
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryFlags {
    pub project_related: bool,
    pub is_personal: bool,
}

/// Task record as submitted to `/add_task`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskInput {
    pub name: String,
    pub deadline: String,
    pub estimated_effort: String,
    pub project_related: bool,
    pub is_personal: bool,
}

impl TaskInput {
    pub fn from_form(
        name: impl Into<String>,
        deadline: impl Into<String>,
        estimated_effort: impl Into<String>,
        category: Category,
    ) -> Self {
        let CategoryFlags {
            project_related,
            is_personal,
        } = category.flags();
        Self {
            name: name.into(),
            deadline: deadline.into(),
            estimated_effort: estimated_effort.into(),
            project_related,
            is_personal,
        }
    }
}

/// Task as listed by the backend. Priority and AI note are backend-owned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskView {
    pub name: String,
    pub deadline: String,
    #[serde(deserialize_with = "priority_label")]
    pub priority: String,
    pub ai_note: String,
}

// The reference backend ranks with integers; other backends may send labels.
fn priority_label<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Label {
        Number(serde_json::Number),
        Text(String),
    }

    Ok(match Label::deserialize(deserializer)? {
        Label::Number(n) => n.to_string(),
        Label::Text(s) => s,
    })
}

/// Partial update sent to `/update_task`; `None` fields are left as-is server side.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskUpdate {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deadline: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_effort: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortBy {
    #[default]
    Priority,
    Deadline,
    Name,
}

impl fmt::Display for SortBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Priority => "priority",
            Self::Deadline => "deadline",
            Self::Name => "name",
        })
    }
}
