pub mod ids;
pub mod latency;
pub mod seed;

pub use latency::{DEFAULT_LATENCY_MS, Latency};
pub use seed::{load_seed_projects, load_seed_tasks};
