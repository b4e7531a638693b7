use std::collections::HashMap;

use tracing::{debug, info};

use super::due;
use super::item::{NewTask, Task, TaskPatch};
use crate::error::{StoreError, StoreResult};
use crate::project::INBOX_PROJECT_ID;
use crate::storage::Latency;
use crate::storage::ids::IdSequence;
use crate::utils::clock::{SharedClock, system_clock};

/// In-memory collection of tasks.
///
/// Reads take `&self` and mutations `&mut self`, so two mutations can never
/// interleave on one store. Every returned record is an owned copy.
#[derive(Debug, Clone)]
pub struct TaskStore {
    tasks: Vec<Task>,
    ids: IdSequence,
    latency: Latency,
    clock: SharedClock,
}

impl Default for TaskStore {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl TaskStore {
    pub fn new(tasks: Vec<Task>) -> Self {
        Self {
            ids: IdSequence::after(tasks.iter().map(|t| t.id.as_str())),
            tasks,
            latency: Latency::default(),
            clock: system_clock(),
        }
    }

    pub fn with_latency(mut self, latency: Latency) -> Self {
        self.latency = latency;
        self
    }

    pub fn with_clock(mut self, clock: SharedClock) -> Self {
        self.clock = clock;
        self
    }

    pub fn clock(&self) -> &SharedClock {
        &self.clock
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    fn index_of(&self, id: &str) -> StoreResult<usize> {
        self.tasks
            .iter()
            .position(|t| t.id == id)
            .ok_or_else(|| StoreError::task_not_found(id))
    }

    fn collect_where(&self, predicate: impl Fn(&Task) -> bool) -> Vec<Task> {
        self.tasks.iter().filter(|t| predicate(t)).cloned().collect()
    }

    pub async fn list(&self) -> Vec<Task> {
        self.latency.wait().await;
        self.tasks.clone()
    }

    pub async fn get_by_id(&self, id: &str) -> Option<Task> {
        self.latency.wait().await;
        self.tasks.iter().find(|t| t.id == id).cloned()
    }

    pub async fn list_by_project(&self, project_id: &str) -> Vec<Task> {
        self.latency.wait().await;
        self.collect_where(|t| t.project_id == project_id)
    }

    /// Tasks due today or earlier. Overdue tasks are included.
    pub async fn list_due_today(&self) -> Vec<Task> {
        self.latency.wait().await;
        let today = self.clock.today();
        self.collect_where(|t| t.due_date.is_some_and(|d| due::is_due_on_or_before(d, today)))
    }

    /// Tasks due after today and no later than `window_days` from today.
    pub async fn list_upcoming(&self, window_days: u32) -> Vec<Task> {
        self.latency.wait().await;
        let today = self.clock.today();
        self.collect_where(|t| {
            t.due_date
                .is_some_and(|d| due::is_in_upcoming_window(d, today, window_days))
        })
    }

    pub async fn create(&mut self, input: NewTask) -> Task {
        self.latency.wait().await;
        let task = Task {
            id: self.ids.next_id(),
            title: input.title,
            description: input.description.unwrap_or_default(),
            project_id: input
                .project_id
                .filter(|id| !id.is_empty())
                .unwrap_or_else(|| INBOX_PROJECT_ID.to_string()),
            priority: input.priority.unwrap_or_default(),
            due_date: input.due_date,
            completed: false,
            completed_at: None,
            created_at: self.clock.now(),
            order: self.tasks.len() as u32 + 1,
        };
        info!(id = %task.id, project = %task.project_id, "Created task");
        self.tasks.push(task.clone());
        task
    }

    /// Shallow merge. No check that a new `project_id` exists.
    pub async fn update(&mut self, id: &str, patch: TaskPatch) -> StoreResult<Task> {
        self.latency.wait().await;
        let index = self.index_of(id)?;
        patch.apply(&mut self.tasks[index]);
        debug!(id = %id, "Updated task");
        Ok(self.tasks[index].clone())
    }

    pub async fn delete(&mut self, id: &str) -> StoreResult<Task> {
        self.latency.wait().await;
        let index = self.index_of(id)?;
        let removed = self.tasks.remove(index);
        info!(id = %removed.id, "Deleted task");
        Ok(removed)
    }

    pub async fn complete(&mut self, id: &str) -> StoreResult<Task> {
        self.latency.wait().await;
        let index = self.index_of(id)?;
        let now = self.clock.now();
        self.tasks[index].mark_complete(now);
        debug!(id = %id, "Completed task");
        Ok(self.tasks[index].clone())
    }

    pub async fn uncomplete(&mut self, id: &str) -> StoreResult<Task> {
        self.latency.wait().await;
        let index = self.index_of(id)?;
        self.tasks[index].mark_incomplete();
        debug!(id = %id, "Reopened task");
        Ok(self.tasks[index].clone())
    }

    /// Case-insensitive substring match on title or description, taking the
    /// query as given. A blank query matches nothing.
    pub async fn search(&self, query: &str) -> Vec<Task> {
        self.latency.wait().await;
        if query.trim().is_empty() {
            return Vec::new();
        }
        let needle = query.to_lowercase();
        self.collect_where(|t| t.matches_query(&needle))
    }

    /// Moves every task of `from` into `to`, returning how many moved.
    pub async fn reassign_project(&mut self, from: &str, to: &str) -> usize {
        self.latency.wait().await;
        let mut moved = 0;
        for task in self.tasks.iter_mut().filter(|t| t.project_id == from) {
            task.project_id = to.to_string();
            moved += 1;
        }
        if moved > 0 {
            info!(from = %from, to = %to, count = moved, "Reassigned tasks");
        }
        moved
    }

    /// Number of open tasks per project id.
    pub async fn count_open_by_project(&self) -> HashMap<String, usize> {
        self.latency.wait().await;
        let mut counts: HashMap<String, usize> = HashMap::new();
        for task in self.tasks.iter().filter(|t| !t.completed) {
            *counts.entry(task.project_id.clone()).or_default() += 1;
        }
        counts
    }
}
