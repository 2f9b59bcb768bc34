// Clock abstraction - injected now/today provider

use chrono::{DateTime, Local, NaiveDate, Utc};

/// Time source for the data service. The upcoming/past split depends on the
/// caller's local calendar day, so tests inject a fixed clock instead of
/// racing midnight.
pub trait Clock: Send + Sync {
    /// Current instant; stamps new registrations.
    fn now(&self) -> DateTime<Utc>;

    /// Local calendar day, day granularity.
    fn today(&self) -> NaiveDate;
}

#[derive(Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Fixed clock for tests.
#[derive(Debug, Clone)]
pub struct FixedClock {
    pub now: DateTime<Utc>,
    pub today: NaiveDate,
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.now
    }

    fn today(&self) -> NaiveDate {
        self.today
    }
}
