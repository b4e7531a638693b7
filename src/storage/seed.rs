//! Static dataset the stores start from.
//!
//! The JSON files are embedded at compile time; nothing is written back.

use anyhow::{Context, Result};

use crate::project::Project;
use crate::todo::Task;

const TASKS_JSON: &str = include_str!("../../data/tasks.json");
const PROJECTS_JSON: &str = include_str!("../../data/projects.json");

pub fn load_seed_tasks() -> Result<Vec<Task>> {
    parse_tasks(TASKS_JSON).context("Failed to parse bundled task seed")
}

pub fn load_seed_projects() -> Result<Vec<Project>> {
    parse_projects(PROJECTS_JSON).context("Failed to parse bundled project seed")
}

pub fn parse_tasks(json: &str) -> Result<Vec<Task>> {
    Ok(serde_json::from_str(json)?)
}

pub fn parse_projects(json: &str) -> Result<Vec<Project>> {
    Ok(serde_json::from_str(json)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::project::INBOX_PROJECT_ID;
    use std::collections::HashSet;

    #[test]
    fn test_bundled_seed_parses() {
        let tasks = load_seed_tasks().unwrap();
        let projects = load_seed_projects().unwrap();
        assert!(!tasks.is_empty());
        assert!(projects.iter().any(|p| p.id == INBOX_PROJECT_ID));
    }

    #[test]
    fn test_seed_ids_are_unique() {
        let tasks = load_seed_tasks().unwrap();
        let ids: HashSet<&str> = tasks.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids.len(), tasks.len());
    }

    #[test]
    fn test_seed_tasks_reference_known_projects() {
        let tasks = load_seed_tasks().unwrap();
        let projects = load_seed_projects().unwrap();
        for task in &tasks {
            assert!(
                projects.iter().any(|p| p.id == task.project_id),
                "task {} points at unknown project {}",
                task.id,
                task.project_id
            );
        }
    }

    #[test]
    fn test_parse_rejects_bad_priority() {
        let json = r#"[{"id":"1","title":"x","priority":7,"createdAt":"2024-01-01T00:00:00Z"}]"#;
        assert!(parse_tasks(json).is_err());
    }
}
