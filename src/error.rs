use std::fmt;
use thiserror::Error;

/// Which collection an operation targeted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entity {
    Task,
    Project,
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Entity::Task => write!(f, "Task"),
            Entity::Project => write!(f, "Project"),
        }
    }
}

/// Failures surfaced by the task and project stores.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The target id does not exist in the collection
    #[error("{entity} not found: {id}")]
    NotFound { entity: Entity, id: String },

    /// The operation is never allowed on this record (deleting the inbox)
    #[error("Forbidden: {0}")]
    Forbidden(String),
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;

impl StoreError {
    pub fn task_not_found(id: impl Into<String>) -> Self {
        Self::NotFound {
            entity: Entity::Task,
            id: id.into(),
        }
    }

    pub fn project_not_found(id: impl Into<String>) -> Self {
        Self::NotFound {
            entity: Entity::Project,
            id: id.into(),
        }
    }

    pub fn forbidden(msg: impl Into<String>) -> Self {
        Self::Forbidden(msg.into())
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    pub fn is_forbidden(&self) -> bool {
        matches!(self, Self::Forbidden(_))
    }
}
