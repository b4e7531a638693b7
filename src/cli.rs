use clap::{Parser, Subcommand};
use taskdeck::Priority;

#[derive(Parser, Debug)]
#[command(name = "taskdeck")]
#[command(about = "Inbox, today and upcoming task lists over an in-memory store", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Tasks with no project
    Inbox,
    /// Overdue and due-today tasks (default)
    Today,
    /// Tasks due in the next few days
    Upcoming {
        /// Window size in days (defaults to the configured value)
        #[arg(short, long)]
        days: Option<u32>,
    },
    /// Tasks of one project
    Project { id: String },
    /// List projects with their open task counts
    Projects,
    /// Case-insensitive search over titles and descriptions
    Search { query: String },
    /// Create a task and show it
    Add {
        title: String,
        #[arg(short, long)]
        project: Option<String>,
        /// 0-3 or low/normal/high/urgent
        #[arg(long)]
        priority: Option<Priority>,
        /// Due date as YYYY-MM-DD
        #[arg(short, long)]
        due: Option<String>,
    },
    /// Mark a task complete and show it
    Complete { id: String },
}
