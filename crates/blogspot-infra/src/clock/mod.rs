//! Wall-clock implementation of the [`Clock`] port.

use chrono::{Local, Utc};

use blogspot_core::PostDate;
use blogspot_core::ports::Clock;

/// Reads the system clock; dates use the local time zone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        Utc::now().timestamp_millis()
    }

    fn today(&self) -> PostDate {
        PostDate::from(Local::now().date_naive())
    }
}
