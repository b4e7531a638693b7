//! A task store and a project store wired together.
//!
//! The stores know nothing about each other. Cross-collection follow-ups
//! (moving orphaned tasks to the inbox, refreshing cached counts) live here.

use anyhow::Result;
use tracing::info;

use crate::config::Config;
use crate::error::StoreResult;
use crate::project::{INBOX_PROJECT_ID, Project, ProjectStore};
use crate::storage::{Latency, load_seed_projects, load_seed_tasks};
use crate::todo::TaskStore;
use crate::utils::clock::SharedClock;

#[derive(Debug, Clone)]
pub struct Board {
    tasks: TaskStore,
    projects: ProjectStore,
}

impl Board {
    pub fn new(tasks: TaskStore, mut projects: ProjectStore) -> Self {
        projects.ensure_inbox();
        Self { tasks, projects }
    }

    /// Builds a board from the bundled dataset (or an empty one) per `config`.
    pub fn seeded(config: &Config) -> Result<Self> {
        let (tasks, projects) = if config.seed.enabled {
            (load_seed_tasks()?, load_seed_projects()?)
        } else {
            (Vec::new(), Vec::new())
        };
        info!(
            tasks = tasks.len(),
            projects = projects.len(),
            latency_ms = config.latency_ms,
            "Seeding board"
        );
        Ok(Self::new(
            TaskStore::new(tasks).with_latency(config.latency()),
            ProjectStore::new(projects).with_latency(config.latency()),
        ))
    }

    pub fn with_latency(self, latency: Latency) -> Self {
        Self {
            tasks: self.tasks.with_latency(latency),
            projects: self.projects.with_latency(latency),
        }
    }

    pub fn with_clock(mut self, clock: SharedClock) -> Self {
        self.tasks = self.tasks.with_clock(clock);
        self
    }

    pub fn tasks(&self) -> &TaskStore {
        &self.tasks
    }

    pub fn tasks_mut(&mut self) -> &mut TaskStore {
        &mut self.tasks
    }

    pub fn projects(&self) -> &ProjectStore {
        &self.projects
    }

    pub fn projects_mut(&mut self) -> &mut ProjectStore {
        &mut self.projects
    }

    /// Deletes a project and moves its tasks to the inbox.
    pub async fn delete_project(&mut self, id: &str) -> StoreResult<Project> {
        let removed = self.projects.delete(id).await?;
        let moved = self.tasks.reassign_project(id, INBOX_PROJECT_ID).await;
        info!(id = %id, moved, "Moved tasks of deleted project to inbox");
        self.refresh_task_counts().await;
        Ok(removed)
    }

    /// Recomputes every project's cached `task_count` from open tasks.
    pub async fn refresh_task_counts(&mut self) {
        let counts = self.tasks.count_open_by_project().await;
        let ids: Vec<String> = self.projects.list().await.into_iter().map(|p| p.id).collect();
        for id in ids {
            let count = counts.get(&id).copied().unwrap_or(0);
            self.projects.update_task_count(&id, count).await;
        }
    }
}
