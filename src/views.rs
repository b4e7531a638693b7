//! Task partitions behind the inbox, today, upcoming and project screens.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::board::Board;
use crate::project::{INBOX_PROJECT_ID, Project};
use crate::todo::due::{self, DEFAULT_UPCOMING_WINDOW_DAYS};
use crate::todo::{Task, TaskStore};

fn split_completed(tasks: Vec<Task>) -> (Vec<Task>, Vec<Task>) {
    tasks.into_iter().partition(|t| !t.completed)
}

/// Everything due today or earlier, split three ways.
#[derive(Debug, Clone, Default)]
pub struct TodayView {
    pub today: NaiveDate,
    pub overdue: Vec<Task>,
    pub due_today: Vec<Task>,
    pub completed: Vec<Task>,
}

impl TodayView {
    pub async fn load(store: &TaskStore) -> Self {
        let today = store.clock().today();
        let (active, completed) = split_completed(store.list_due_today().await);
        let (overdue, due_today): (Vec<Task>, Vec<Task>) =
            active.into_iter().partition(|t| t.is_overdue(today));
        Self {
            today,
            overdue,
            due_today,
            completed,
        }
    }

    pub fn remaining(&self) -> usize {
        self.overdue.len() + self.due_today.len()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayGroup {
    pub date: NaiveDate,
    pub label: String,
    pub tasks: Vec<Task>,
}

/// Upcoming tasks bucketed per day; days without tasks are dropped.
#[derive(Debug, Clone, Default)]
pub struct UpcomingView {
    pub window_days: u32,
    pub groups: Vec<DayGroup>,
}

impl UpcomingView {
    pub async fn load(store: &TaskStore, window_days: u32) -> Self {
        let today = store.clock().today();
        let tasks = store.list_upcoming(window_days).await;

        let mut by_day: BTreeMap<NaiveDate, Vec<Task>> = BTreeMap::new();
        for task in tasks {
            if let Some(day) = task.due_day() {
                by_day.entry(day).or_default().push(task);
            }
        }
        let groups = by_day
            .into_iter()
            .map(|(date, tasks)| DayGroup {
                date,
                label: due::day_label(date, today),
                tasks,
            })
            .collect();

        Self {
            window_days,
            groups,
        }
    }

    pub fn active_count(&self) -> usize {
        self.tasks().filter(|t| !t.completed).count()
    }

    pub fn completed_count(&self) -> usize {
        self.tasks().filter(|t| t.completed).count()
    }

    fn tasks(&self) -> impl Iterator<Item = &Task> {
        self.groups.iter().flat_map(|g| g.tasks.iter())
    }
}

/// One project's tasks, or the inbox.
#[derive(Debug, Clone, Default)]
pub struct ProjectView {
    pub project: Option<Project>,
    pub active: Vec<Task>,
    pub completed: Vec<Task>,
}

impl ProjectView {
    pub async fn load(board: &Board, project_id: &str) -> Self {
        let project = board.projects().get_by_id(project_id).await;
        let (active, completed) =
            split_completed(board.tasks().list_by_project(project_id).await);
        Self {
            project,
            active,
            completed,
        }
    }

    pub async fn inbox(board: &Board) -> Self {
        Self::load(board, INBOX_PROJECT_ID).await
    }
}

/// Badge counts and the project list shown beside every screen.
#[derive(Debug, Clone, Default)]
pub struct SidebarCounts {
    pub today: usize,
    pub upcoming: usize,
    pub projects: Vec<Project>,
}

impl SidebarCounts {
    pub async fn load(board: &Board) -> Self {
        let today = board
            .tasks()
            .list_due_today()
            .await
            .iter()
            .filter(|t| !t.completed)
            .count();
        let upcoming = board
            .tasks()
            .list_upcoming(DEFAULT_UPCOMING_WINDOW_DAYS)
            .await
            .iter()
            .filter(|t| !t.completed)
            .count();
        let projects = board
            .projects()
            .list()
            .await
            .into_iter()
            .filter(|p| !p.is_inbox())
            .collect();
        Self {
            today,
            upcoming,
            projects,
        }
    }
}

/// Search-as-you-type state. A blank query clears results without a store call.
#[derive(Debug, Clone, Default)]
pub struct LiveSearch {
    query: String,
    results: Vec<Task>,
    showing_results: bool,
}

impl LiveSearch {
    pub async fn set_query(&mut self, store: &TaskStore, query: &str) {
        self.query = query.to_string();
        if query.trim().is_empty() {
            self.clear_results();
            return;
        }
        self.results = store.search(query).await;
        self.showing_results = true;
    }

    pub fn clear_results(&mut self) {
        self.results.clear();
        self.showing_results = false;
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn results(&self) -> &[Task] {
        &self.results
    }

    pub fn is_showing_results(&self) -> bool {
        self.showing_results
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::project::{NewProject, ProjectStore};
    use crate::storage::Latency;
    use crate::todo::NewTask;
    use crate::utils::clock::{FixedClock, local_noon};
    use chrono::Days;
    use std::sync::Arc;
    use std::time::Duration;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 12).unwrap()
    }

    fn due_in(days: i64) -> chrono::DateTime<chrono::Utc> {
        let date = if days >= 0 {
            today().checked_add_days(Days::new(days as u64)).unwrap()
        } else {
            today().checked_sub_days(Days::new((-days) as u64)).unwrap()
        };
        local_noon(date)
    }

    fn board() -> Board {
        Board::new(TaskStore::default(), ProjectStore::default())
            .with_latency(Latency::none())
            .with_clock(Arc::new(FixedClock::at_local_noon(today())))
    }

    fn titles(tasks: &[Task]) -> Vec<&str> {
        tasks.iter().map(|t| t.title.as_str()).collect()
    }

    #[tokio::test]
    async fn test_today_view_partitions() {
        let mut board = board();
        let tasks = board.tasks_mut();
        tasks.create(NewTask::new("late").due(due_in(-2))).await;
        tasks.create(NewTask::new("now").due(due_in(0))).await;
        let done = tasks.create(NewTask::new("done").due(due_in(0))).await;
        tasks.create(NewTask::new("later").due(due_in(1))).await;
        tasks.complete(&done.id).await.unwrap();

        let view = TodayView::load(board.tasks()).await;
        assert_eq!(titles(&view.overdue), vec!["late"]);
        assert_eq!(titles(&view.due_today), vec!["now"]);
        assert_eq!(titles(&view.completed), vec!["done"]);
        assert_eq!(view.remaining(), 2);
    }

    #[tokio::test]
    async fn test_upcoming_view_groups_by_day() {
        let mut board = board();
        let tasks = board.tasks_mut();
        tasks.create(NewTask::new("a").due(due_in(1))).await;
        tasks.create(NewTask::new("b").due(due_in(3))).await;
        tasks.create(NewTask::new("c").due(due_in(1))).await;
        tasks.create(NewTask::new("d").due(due_in(9))).await;

        let view = UpcomingView::load(board.tasks(), 7).await;
        assert_eq!(view.groups.len(), 2);
        assert_eq!(view.groups[0].label, "Tomorrow");
        assert_eq!(titles(&view.groups[0].tasks), vec!["a", "c"]);
        assert_eq!(view.groups[1].date, today().checked_add_days(Days::new(3)).unwrap());
        assert_eq!(view.active_count(), 3);
        assert_eq!(view.completed_count(), 0);
    }

    #[tokio::test]
    async fn test_upcoming_view_orders_days_not_insertion() {
        let mut board = board();
        let tasks = board.tasks_mut();
        tasks.create(NewTask::new("far").due(due_in(400))).await;
        tasks.create(NewTask::new("near").due(due_in(2))).await;

        let view = UpcomingView::load(board.tasks(), u32::MAX).await;
        let dates: Vec<NaiveDate> = view.groups.iter().map(|g| g.date).collect();
        assert_eq!(dates, vec![today() + Days::new(2), today() + Days::new(400)]);
        assert_eq!(view.window_days, u32::MAX);
    }

    #[tokio::test]
    async fn test_project_view_and_inbox() {
        let mut board = board();
        let work = board.projects_mut().create(NewProject::new("Work")).await;
        let t = board
            .tasks_mut()
            .create(NewTask::new("deploy").project(&work.id))
            .await;
        board.tasks_mut().create(NewTask::new("stray")).await;
        board.tasks_mut().complete(&t.id).await.unwrap();

        let view = ProjectView::load(&board, &work.id).await;
        assert_eq!(view.project.map(|p| p.name), Some("Work".to_string()));
        assert!(view.active.is_empty());
        assert_eq!(titles(&view.completed), vec!["deploy"]);

        let inbox = ProjectView::inbox(&board).await;
        assert!(inbox.project.is_some_and(|p| p.is_inbox()));
        assert_eq!(titles(&inbox.active), vec!["stray"]);
    }

    #[tokio::test]
    async fn test_sidebar_counts_open_tasks_only() {
        let mut board = board();
        board.projects_mut().create(NewProject::new("Home")).await;
        let tasks = board.tasks_mut();
        tasks.create(NewTask::new("overdue").due(due_in(-1))).await;
        let done = tasks.create(NewTask::new("done").due(due_in(0))).await;
        tasks.create(NewTask::new("soon").due(due_in(2))).await;
        tasks.complete(&done.id).await.unwrap();

        let counts = SidebarCounts::load(&board).await;
        assert_eq!(counts.today, 1);
        assert_eq!(counts.upcoming, 1);
        assert_eq!(counts.projects.len(), 1);
        assert_eq!(counts.projects[0].name, "Home");
    }

    #[tokio::test(start_paused = true)]
    async fn test_live_search_blank_query_skips_store() {
        let mut store = TaskStore::default().with_latency(Latency::from_millis(300));
        store.create(NewTask::new("Pay rent")).await;

        let mut search = LiveSearch::default();
        search.set_query(&store, "rent").await;
        assert!(search.is_showing_results());
        assert_eq!(titles(search.results()), vec!["Pay rent"]);

        let start = tokio::time::Instant::now();
        search.set_query(&store, "  ").await;
        assert_eq!(start.elapsed(), Duration::ZERO);
        assert!(search.results().is_empty());
        assert!(!search.is_showing_results());
        assert_eq!(search.query(), "  ");
    }
}
