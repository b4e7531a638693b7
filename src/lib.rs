//! In-memory task and project stores with date-bucketed views.

pub mod board;
pub mod config;
pub mod error;
pub mod project;
pub mod storage;
pub mod todo;
pub mod utils;
pub mod views;

pub use board::Board;
pub use config::Config;
pub use error::{Entity, StoreError, StoreResult};
pub use project::{NewProject, Project, ProjectPatch, ProjectStore, INBOX_PROJECT_ID};
pub use todo::{NewTask, Priority, Task, TaskPatch, TaskStore};
