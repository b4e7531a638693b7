use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::due;
use super::priority::Priority;
use crate::project::INBOX_PROJECT_ID;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default = "default_project_id")]
    pub project_id: String,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub due_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub completed_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub order: u32,
}

fn default_project_id() -> String {
    INBOX_PROJECT_ID.to_string()
}

impl Task {
    pub fn due_day(&self) -> Option<NaiveDate> {
        self.due_date.map(due::calendar_day)
    }

    /// Open and due before `today`.
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        !self.completed && self.due_date.is_some_and(|d| due::is_overdue(d, today))
    }

    pub fn matches_query(&self, needle_lower: &str) -> bool {
        self.title.to_lowercase().contains(needle_lower)
            || self.description.to_lowercase().contains(needle_lower)
    }

    pub(crate) fn mark_complete(&mut self, at: DateTime<Utc>) {
        self.completed = true;
        self.completed_at = Some(at);
    }

    pub(crate) fn mark_incomplete(&mut self) {
        self.completed = false;
        self.completed_at = None;
    }
}

/// Input for `TaskStore::create`. Unset fields take the store defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewTask {
    pub title: String,
    pub description: Option<String>,
    pub project_id: Option<String>,
    pub priority: Option<Priority>,
    pub due_date: Option<DateTime<Utc>>,
}

impl NewTask {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn project(mut self, project_id: impl Into<String>) -> Self {
        self.project_id = Some(project_id.into());
        self
    }

    pub fn priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    pub fn due(mut self, due_date: DateTime<Utc>) -> Self {
        self.due_date = Some(due_date);
        self
    }
}

/// Partial update merged onto an existing task. `None` leaves a field untouched;
/// the nested options on nullable fields distinguish "clear" from "keep".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub project_id: Option<String>,
    pub priority: Option<Priority>,
    pub due_date: Option<Option<DateTime<Utc>>>,
    pub completed: Option<bool>,
    pub completed_at: Option<Option<DateTime<Utc>>>,
    pub order: Option<u32>,
}

impl TaskPatch {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn project(mut self, project_id: impl Into<String>) -> Self {
        self.project_id = Some(project_id.into());
        self
    }

    pub fn priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    pub fn due(mut self, due_date: Option<DateTime<Utc>>) -> Self {
        self.due_date = Some(due_date);
        self
    }

    pub fn order(mut self, order: u32) -> Self {
        self.order = Some(order);
        self
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub(crate) fn apply(self, task: &mut Task) {
        if let Some(title) = self.title {
            task.title = title;
        }
        if let Some(description) = self.description {
            task.description = description;
        }
        if let Some(project_id) = self.project_id {
            task.project_id = project_id;
        }
        if let Some(priority) = self.priority {
            task.priority = priority;
        }
        if let Some(due_date) = self.due_date {
            task.due_date = due_date;
        }
        if let Some(completed) = self.completed {
            task.completed = completed;
        }
        if let Some(completed_at) = self.completed_at {
            task.completed_at = completed_at;
        }
        if let Some(order) = self.order {
            task.order = order;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample() -> Task {
        Task {
            id: "1".to_string(),
            title: "Write report".to_string(),
            description: "Quarterly numbers".to_string(),
            project_id: "2".to_string(),
            priority: Priority::High,
            due_date: None,
            completed: false,
            completed_at: None,
            created_at: Utc::now(),
            order: 1,
        }
    }

    #[test]
    fn test_deserialize_seed_shape() {
        let json = r#"{
            "id": "5",
            "title": "Call mom",
            "priority": 3,
            "dueDate": "2024-06-12T09:00:00Z",
            "createdAt": "2024-06-01T08:00:00Z"
        }"#;
        let task: Task = serde_json::from_str(json).unwrap();
        assert_eq!(task.project_id, INBOX_PROJECT_ID);
        assert_eq!(task.priority, Priority::Urgent);
        assert_eq!(task.description, "");
        assert!(!task.completed);
        assert!(task.completed_at.is_none());
    }

    #[test]
    fn test_serialize_uses_camel_case() {
        let json = serde_json::to_string(&sample()).unwrap();
        assert!(json.contains("\"projectId\":\"2\""));
        assert!(json.contains("\"completedAt\":null"));
        assert!(json.contains("\"priority\":2"));
    }

    #[test]
    fn test_patch_merges_only_given_fields() {
        let mut task = sample();
        TaskPatch::default().title("Write summary").apply(&mut task);

        let mut expected = sample();
        expected.title = "Write summary".to_string();
        expected.created_at = task.created_at;
        assert_eq!(task, expected);
    }

    #[test]
    fn test_patch_can_clear_due_date() {
        let mut task = sample();
        task.due_date = Some(Utc::now());
        TaskPatch::default().due(None).apply(&mut task);
        assert!(task.due_date.is_none());
    }

    #[test]
    fn test_matches_query_checks_description() {
        let task = sample();
        assert!(task.matches_query("quarterly"));
        assert!(task.matches_query("report"));
        assert!(!task.matches_query("invoice"));
    }

    #[test]
    fn test_empty_patch() {
        assert!(TaskPatch::default().is_empty());
        assert!(!TaskPatch::default().order(3).is_empty());
    }
}
