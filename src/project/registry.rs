use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::{StoreError, StoreResult};
use crate::storage::Latency;
use crate::storage::ids::IdSequence;

/// Reserved id of the default project. It can never be deleted.
pub const INBOX_PROJECT_ID: &str = "inbox";
pub const INBOX_PROJECT_NAME: &str = "Inbox";

pub const DEFAULT_PROJECT_COLOR: &str = "#6B7280";
pub const DEFAULT_PROJECT_ICON: &str = "Folder";

/// Colors offered by the project editor.
pub const PROJECT_COLORS: [&str; 15] = [
    "#DC4C3F", "#F59E0B", "#22C55E", "#3B82F6", "#8B5CF6", "#EF4444", "#F97316", "#84CC16",
    "#06B6D4", "#A855F7", "#EC4899", "#6B7280", "#14B8A6", "#F59E0B", "#10B981",
];

/// Icon names offered by the project editor.
pub const PROJECT_ICONS: [&str; 15] = [
    "Folder", "Briefcase", "Code", "TrendingUp", "User", "Heart", "Home", "Car", "Plane",
    "Camera", "Music", "Book", "Coffee", "Gamepad2", "Palette",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub name: String,
    #[serde(default = "default_color")]
    pub color: String,
    #[serde(default = "default_icon")]
    pub icon: String,
    #[serde(default)]
    pub order: u32,
    #[serde(default)]
    pub task_count: usize,
}

fn default_color() -> String {
    DEFAULT_PROJECT_COLOR.to_string()
}

fn default_icon() -> String {
    DEFAULT_PROJECT_ICON.to_string()
}

impl Project {
    pub fn inbox() -> Self {
        Self {
            id: INBOX_PROJECT_ID.to_string(),
            name: INBOX_PROJECT_NAME.to_string(),
            color: default_color(),
            icon: "Inbox".to_string(),
            order: 0,
            task_count: 0,
        }
    }

    pub fn is_inbox(&self) -> bool {
        self.id == INBOX_PROJECT_ID
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewProject {
    pub name: String,
    pub color: Option<String>,
    pub icon: Option<String>,
}

impl NewProject {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectPatch {
    pub name: Option<String>,
    pub color: Option<String>,
    pub icon: Option<String>,
    pub order: Option<u32>,
    pub task_count: Option<usize>,
}

impl ProjectPatch {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    fn apply(self, project: &mut Project) {
        if let Some(name) = self.name {
            project.name = name;
        }
        if let Some(color) = self.color {
            project.color = color;
        }
        if let Some(icon) = self.icon {
            project.icon = icon;
        }
        if let Some(order) = self.order {
            project.order = order;
        }
        if let Some(task_count) = self.task_count {
            project.task_count = task_count;
        }
    }
}

/// In-memory collection of projects. Every returned record is a copy.
#[derive(Debug, Clone, Default)]
pub struct ProjectStore {
    projects: Vec<Project>,
    ids: IdSequence,
    latency: Latency,
}

impl ProjectStore {
    pub fn new(projects: Vec<Project>) -> Self {
        Self {
            ids: IdSequence::after(projects.iter().map(|p| p.id.as_str())),
            projects,
            latency: Latency::default(),
        }
    }

    pub fn with_latency(mut self, latency: Latency) -> Self {
        self.latency = latency;
        self
    }

    /// Inserts the inbox at the front when the seed did not carry one.
    pub fn ensure_inbox(&mut self) -> &Project {
        if let Some(index) = self.index_of(INBOX_PROJECT_ID) {
            return &self.projects[index];
        }
        debug!("Seed has no inbox project, inserting one");
        self.projects.insert(0, Project::inbox());
        &self.projects[0]
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    fn index_of(&self, id: &str) -> Option<usize> {
        self.projects.iter().position(|p| p.id == id)
    }

    pub async fn list(&self) -> Vec<Project> {
        self.latency.wait().await;
        self.projects.clone()
    }

    pub async fn get_by_id(&self, id: &str) -> Option<Project> {
        self.latency.wait().await;
        self.projects.iter().find(|p| p.id == id).cloned()
    }

    pub async fn create(&mut self, input: NewProject) -> Project {
        self.latency.wait().await;
        let project = Project {
            id: self.ids.next_id(),
            name: input.name,
            color: input
                .color
                .filter(|c| !c.is_empty())
                .unwrap_or_else(default_color),
            icon: input
                .icon
                .filter(|i| !i.is_empty())
                .unwrap_or_else(default_icon),
            order: self.projects.len() as u32,
            task_count: 0,
        };
        info!(id = %project.id, name = %project.name, "Created project");
        self.projects.push(project.clone());
        project
    }

    pub async fn update(&mut self, id: &str, patch: ProjectPatch) -> StoreResult<Project> {
        self.latency.wait().await;
        let index = self
            .index_of(id)
            .ok_or_else(|| StoreError::project_not_found(id))?;
        patch.apply(&mut self.projects[index]);
        debug!(id = %id, "Updated project");
        Ok(self.projects[index].clone())
    }

    /// Removes a project. Tasks pointing at it are left as they are.
    pub async fn delete(&mut self, id: &str) -> StoreResult<Project> {
        self.latency.wait().await;
        if id == INBOX_PROJECT_ID {
            warn!("Refused to delete the inbox project");
            return Err(StoreError::forbidden("Cannot delete inbox"));
        }
        let index = self
            .index_of(id)
            .ok_or_else(|| StoreError::project_not_found(id))?;
        let removed = self.projects.remove(index);
        info!(id = %removed.id, name = %removed.name, "Deleted project");
        Ok(removed)
    }

    /// Writes the cached task count. Unknown ids are ignored.
    pub async fn update_task_count(&mut self, project_id: &str, count: usize) -> Option<Project> {
        self.latency.wait().await;
        let index = self.index_of(project_id)?;
        self.projects[index].task_count = count;
        Some(self.projects[index].clone())
    }
}
