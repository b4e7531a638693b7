pub mod due;
pub mod item;
pub mod list;
pub mod priority;

pub use due::{DEFAULT_UPCOMING_WINDOW_DAYS, DueBucket};
pub use item::{NewTask, Task, TaskPatch};
pub use list::TaskStore;
pub use priority::Priority;
