pub mod registry;

pub use registry::{
    DEFAULT_PROJECT_COLOR, DEFAULT_PROJECT_ICON, INBOX_PROJECT_ID, INBOX_PROJECT_NAME, NewProject,
    PROJECT_COLORS, PROJECT_ICONS, Project, ProjectPatch, ProjectStore,
};
