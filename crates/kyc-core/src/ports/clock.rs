use chrono::{DateTime, NaiveDate, Utc};

pub trait ClockPort: Send + Sync {
    fn now_ms(&self) -> i64;

    fn now(&self) -> DateTime<Utc> {
        DateTime::from_timestamp_millis(self.now_ms()).unwrap_or_default()
    }

    /// Calendar date in UTC, used to bound dates of birth.
    fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }
}
