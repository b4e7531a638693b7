use chrono::{DateTime, Local, NaiveDate, NaiveTime, Utc};
use std::fmt;
use std::sync::Arc;

/// Source of "now" for the stores and views.
pub trait Clock: Send + Sync + fmt::Debug {
    fn now(&self) -> DateTime<Utc>;

    /// Calendar day of `now` in local time.
    fn today(&self) -> NaiveDate {
        self.now().with_timezone(&Local).date_naive()
    }
}

pub type SharedClock = Arc<dyn Clock>;

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Always reports the same instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl FixedClock {
    /// Pins the clock to noon local time on `date`.
    pub fn at_local_noon(date: NaiveDate) -> Self {
        Self(local_noon(date))
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

pub fn system_clock() -> SharedClock {
    Arc::new(SystemClock)
}

/// Noon local time on `date`, as UTC. Noon sits clear of every DST gap.
pub fn local_noon(date: NaiveDate) -> DateTime<Utc> {
    let naive = date
        .and_hms_opt(12, 0, 0)
        .unwrap_or_else(|| date.and_time(NaiveTime::MIN));
    naive
        .and_local_timezone(Local)
        .earliest()
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_else(|| naive.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_clock_today() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
        let clock = FixedClock::at_local_noon(date);
        assert_eq!(clock.today(), date);
    }

    #[test]
    fn test_local_noon_roundtrips_to_same_day() {
        let date = NaiveDate::from_ymd_opt(2024, 11, 3).unwrap();
        let noon = local_noon(date);
        assert_eq!(noon.with_timezone(&Local).date_naive(), date);
    }
}
