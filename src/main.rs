mod cli;

use anyhow::{Context, Result, anyhow};
use chrono::NaiveDate;
use clap::Parser;
use cli::{Cli, Commands};
use std::fs;
use taskdeck::todo::due;
use taskdeck::utils::clock::local_noon;
use taskdeck::utils::paths::get_logs_dir;
use taskdeck::views::{ProjectView, SidebarCounts, TodayView, UpcomingView};
use taskdeck::{Board, Config, NewTask, Priority, Task};

/// Initialize file-based logging.
///
/// Logs are written to ~/.taskdeck/logs/taskdeck.log, rolling daily.
/// Log level can be controlled with RUST_LOG env var (default: info).
fn init_file_logging() -> Option<tracing_appender::non_blocking::WorkerGuard> {
    let logs_dir = get_logs_dir().ok()?;

    if let Err(e) = fs::create_dir_all(&logs_dir) {
        eprintln!("Warning: Could not create logs directory: {}", e);
        return None;
    }

    let file_appender = tracing_appender::rolling::daily(&logs_dir, "taskdeck.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    Some(guard)
}

fn format_task(task: &Task, today: NaiveDate) -> String {
    let mark = if task.completed { "x" } else { " " };
    let mut line = format!("[{}] #{} {}", mark, task.id, task.title);
    if task.priority != Priority::Normal {
        line.push_str(&format!(" ({})", task.priority));
    }
    if let Some(due_date) = task.due_date {
        line.push_str(&format!(" - {}", due::due_label(due_date, today)));
    }
    line
}

fn print_section(title: &str, tasks: &[Task], today: NaiveDate) {
    if tasks.is_empty() {
        return;
    }
    println!("{} ({})", title, tasks.len());
    for task in tasks {
        println!("  {}", format_task(task, today));
    }
}

fn parse_due(s: &str) -> Result<chrono::DateTime<chrono::Utc>> {
    let date = NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .with_context(|| format!("Invalid due date '{}', expected YYYY-MM-DD", s))?;
    Ok(local_noon(date))
}

async fn handle_today(board: &Board, today: NaiveDate) {
    let view = TodayView::load(board.tasks()).await;
    println!("Today, {} - {} remaining", view.today.format("%A, %B %-d"), view.remaining());
    print_section("Overdue", &view.overdue, today);
    print_section("Today's tasks", &view.due_today, today);
    print_section("Completed", &view.completed, today);
}

async fn handle_upcoming(board: &Board, days: u32, today: NaiveDate) {
    let view = UpcomingView::load(board.tasks(), days).await;
    println!("Upcoming - next {} days, {} open", view.window_days, view.active_count());
    for group in &view.groups {
        print_section(&group.label, &group.tasks, today);
    }
}

async fn handle_project(board: &Board, id: &str, today: NaiveDate) -> Result<()> {
    let view = ProjectView::load(board, id).await;
    let project = view
        .project
        .ok_or_else(|| anyhow!("Project '{}' not found", id))?;
    println!("{} - {} open", project.name, view.active.len());
    print_section("Tasks", &view.active, today);
    print_section("Completed", &view.completed, today);
    Ok(())
}

async fn handle_projects(board: &mut Board) {
    board.refresh_task_counts().await;
    let sidebar = SidebarCounts::load(board).await;
    println!("Today: {}  Upcoming: {}", sidebar.today, sidebar.upcoming);
    for project in &sidebar.projects {
        println!("  {:>3}  {} ({})", project.id, project.name, project.task_count);
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let _log_guard = init_file_logging();

    let cli = Cli::parse();
    let config = Config::load()?;
    let mut board = Board::seeded(&config)?;
    let today = board.tasks().clock().today();

    tracing::info!(command = ?cli.command, "taskdeck starting");

    match cli.command {
        None | Some(Commands::Today) => handle_today(&board, today).await,
        Some(Commands::Inbox) => {
            let view = ProjectView::inbox(&board).await;
            println!("Inbox - {} open", view.active.len());
            print_section("Tasks", &view.active, today);
            print_section("Completed", &view.completed, today);
        }
        Some(Commands::Upcoming { days }) => {
            handle_upcoming(&board, days.unwrap_or(config.upcoming_days), today).await
        }
        Some(Commands::Project { id }) => handle_project(&board, &id, today).await?,
        Some(Commands::Projects) => handle_projects(&mut board).await,
        Some(Commands::Search { query }) => {
            let results = board.tasks().search(&query).await;
            print_section(&format!("Results for '{}'", query.trim()), &results, today);
        }
        Some(Commands::Add {
            title,
            project,
            priority,
            due,
        }) => {
            let title = title.trim();
            if title.is_empty() {
                return Err(anyhow!("Task title cannot be empty"));
            }
            let mut input = NewTask::new(title);
            input.project_id = project;
            input.priority = priority;
            if let Some(due) = due {
                input.due_date = Some(parse_due(&due)?);
            }
            let task = board.tasks_mut().create(input).await;
            println!("Created {}", format_task(&task, today));
        }
        Some(Commands::Complete { id }) => {
            let task = board.tasks_mut().complete(&id).await?;
            println!("Completed {}", format_task(&task, today));
        }
    }

    Ok(())
}
