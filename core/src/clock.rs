// oasis/src/clock.rs

//! Source of "now" for date-based queries and order timestamps.
//!
//! Calendar-day questions ("placed today", "this week") are answered in the
//! UTC offset carried by `Clock::now()`.

use chrono::{DateTime, Duration, FixedOffset, Local, NaiveDate, NaiveTime, Utc};
use std::sync::Arc;

pub trait Clock: Send + Sync {
  fn now(&self) -> DateTime<FixedOffset>;

  fn now_utc(&self) -> DateTime<Utc> {
    self.now().with_timezone(&Utc)
  }

  fn today(&self) -> NaiveDate {
    self.now().date_naive()
  }
}

pub type SharedClock = Arc<dyn Clock>;

/// Wall-clock local time.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
  fn now(&self) -> DateTime<FixedOffset> {
    Local::now().fixed_offset()
  }
}

/// Always reports the same instant. Used by tests and replayable demos.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(DateTime<FixedOffset>);

impl FixedClock {
  pub fn new(at: DateTime<FixedOffset>) -> Self {
    FixedClock(at)
  }

  pub fn advanced_by(&self, by: Duration) -> Self {
    FixedClock(self.0 + by)
  }
}

impl Clock for FixedClock {
  fn now(&self) -> DateTime<FixedOffset> {
    self.0
  }
}

/// The calendar day `instant` falls on, as seen from `offset`.
pub fn local_day(instant: DateTime<Utc>, offset: &FixedOffset) -> NaiveDate {
  instant.with_timezone(offset).date_naive()
}

/// Midnight at the start of `day` in `offset`, as a UTC instant.
pub fn local_midnight(day: NaiveDate, offset: &FixedOffset) -> DateTime<Utc> {
  let local = day.and_time(NaiveTime::MIN);
  (local - Duration::seconds(i64::from(offset.local_minus_utc()))).and_utc()
}

#[cfg(test)]
mod tests {
  use super::*;
  use chrono::TimeZone;

  #[test]
  fn local_day_uses_the_offset() {
    let harare = FixedOffset::east_opt(2 * 3600).unwrap();
    // 23:30 UTC on the 1st is 01:30 on the 2nd in Harare.
    let instant = Utc.with_ymd_and_hms(2026, 3, 1, 23, 30, 0).unwrap();
    assert_eq!(local_day(instant, &harare), NaiveDate::from_ymd_opt(2026, 3, 2).unwrap());
  }

  #[test]
  fn local_midnight_is_offset_back_to_utc() {
    let harare = FixedOffset::east_opt(2 * 3600).unwrap();
    let midnight = local_midnight(NaiveDate::from_ymd_opt(2026, 3, 2).unwrap(), &harare);
    assert_eq!(midnight, Utc.with_ymd_and_hms(2026, 3, 1, 22, 0, 0).unwrap());
  }

  #[test]
  fn fixed_clock_advances() {
    let start = FixedOffset::east_opt(0).unwrap().with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
    let clock = FixedClock::new(start).advanced_by(Duration::hours(25));
    assert_eq!(clock.today(), NaiveDate::from_ymd_opt(2026, 1, 2).unwrap());
  }
}
