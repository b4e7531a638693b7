//! Calendar-day classification of due dates.
//!
//! Every comparison truncates timestamps to the local calendar day and compares
//! `NaiveDate` values, so a DST shift can never move a task across a bucket.

use chrono::{DateTime, Datelike, Days, Local, NaiveDate, Utc};

/// Window used by the upcoming view when the caller does not pick one.
pub const DEFAULT_UPCOMING_WINDOW_DAYS: u32 = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DueBucket {
    Overdue,
    Today,
    Upcoming,
    Later,
}

/// Local calendar day of a timestamp.
pub fn calendar_day(ts: DateTime<Utc>) -> NaiveDate {
    ts.with_timezone(&Local).date_naive()
}

pub fn is_overdue(due: DateTime<Utc>, today: NaiveDate) -> bool {
    calendar_day(due) < today
}

pub fn is_due_today(due: DateTime<Utc>, today: NaiveDate) -> bool {
    calendar_day(due) == today
}

/// The "today" list: due today or any earlier day.
pub fn is_due_on_or_before(due: DateTime<Utc>, today: NaiveDate) -> bool {
    calendar_day(due) <= today
}

/// True when the due day falls in `(today, today + window_days]`.
pub fn is_in_upcoming_window(due: DateTime<Utc>, today: NaiveDate, window_days: u32) -> bool {
    let day = calendar_day(due);
    match today.checked_add_days(Days::new(u64::from(window_days))) {
        Some(end) => day > today && day <= end,
        None => day > today,
    }
}

pub fn classify(due: DateTime<Utc>, today: NaiveDate, window_days: u32) -> DueBucket {
    if is_overdue(due, today) {
        DueBucket::Overdue
    } else if is_due_today(due, today) {
        DueBucket::Today
    } else if is_in_upcoming_window(due, today, window_days) {
        DueBucket::Upcoming
    } else {
        DueBucket::Later
    }
}

/// Short relative label for a due date, as shown next to a task.
pub fn due_label(due: DateTime<Utc>, today: NaiveDate) -> String {
    let day = calendar_day(due);
    if day == today {
        return "Today".to_string();
    }
    if day < today {
        return format!("Overdue {}", day.format("%b %-d"));
    }
    day_label(day, today)
}

/// Heading for a future day: "Tomorrow", a weekday name within the week, or a date.
pub fn day_label(day: NaiveDate, today: NaiveDate) -> String {
    let delta = (day - today).num_days();
    match delta {
        0 => "Today".to_string(),
        1 => "Tomorrow".to_string(),
        2..=6 => day.format("%A").to_string(),
        _ if day.year() == today.year() => day.format("%b %-d").to_string(),
        _ => day.format("%b %-d, %Y").to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::clock::local_noon;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 12).unwrap()
    }

    fn offset(days: i64) -> DateTime<Utc> {
        let date = if days >= 0 {
            today().checked_add_days(Days::new(days as u64)).unwrap()
        } else {
            today().checked_sub_days(Days::new((-days) as u64)).unwrap()
        };
        local_noon(date)
    }

    #[test]
    fn test_overdue_and_today() {
        assert!(is_overdue(offset(-1), today()));
        assert!(!is_overdue(offset(0), today()));
        assert!(is_due_today(offset(0), today()));
        assert!(!is_due_today(offset(1), today()));
    }

    #[test]
    fn test_due_on_or_before_includes_overdue() {
        assert!(is_due_on_or_before(offset(-30), today()));
        assert!(is_due_on_or_before(offset(0), today()));
        assert!(!is_due_on_or_before(offset(1), today()));
    }

    #[test]
    fn test_upcoming_window_boundaries() {
        assert!(!is_in_upcoming_window(offset(0), today(), 7));
        assert!(is_in_upcoming_window(offset(1), today(), 7));
        assert!(is_in_upcoming_window(offset(7), today(), 7));
        assert!(!is_in_upcoming_window(offset(8), today(), 7));
        assert!(!is_in_upcoming_window(offset(1), today(), 0));
    }

    #[test]
    fn test_time_of_day_is_truncated() {
        let late = today()
            .and_hms_opt(23, 59, 0)
            .unwrap()
            .and_local_timezone(Local)
            .earliest()
            .unwrap()
            .with_timezone(&Utc);
        let early = today()
            .and_hms_opt(0, 1, 0)
            .unwrap()
            .and_local_timezone(Local)
            .earliest()
            .unwrap()
            .with_timezone(&Utc);
        assert!(is_due_today(late, today()));
        assert!(is_due_today(early, today()));
    }

    #[test]
    fn test_classify() {
        assert_eq!(classify(offset(-2), today(), 7), DueBucket::Overdue);
        assert_eq!(classify(offset(0), today(), 7), DueBucket::Today);
        assert_eq!(classify(offset(3), today(), 7), DueBucket::Upcoming);
        assert_eq!(classify(offset(10), today(), 7), DueBucket::Later);
    }

    #[test]
    fn test_labels() {
        assert_eq!(due_label(offset(0), today()), "Today");
        assert_eq!(due_label(offset(1), today()), "Tomorrow");
        assert_eq!(due_label(offset(-1), today()), "Overdue Jun 11");
        // 2024-06-14 is a Friday
        assert_eq!(due_label(offset(2), today()), "Friday");
        assert_eq!(due_label(offset(20), today()), "Jul 2");
    }
}
