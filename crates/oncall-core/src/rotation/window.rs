use chrono::{DateTime, Duration, Utc};

/// Time range used when asking the directory for shifts.
///
/// Looks back an hour to catch a shift that started just before the
/// invocation and a full week ahead for the upcoming assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShiftWindow {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl ShiftWindow {
    pub fn lookback() -> Duration {
        Duration::hours(1)
    }

    pub fn lookahead() -> Duration {
        Duration::weeks(1)
    }

    pub fn around(now: DateTime<Utc>) -> Self {
        Self {
            start: now - Self::lookback(),
            end: now + Self::lookahead(),
        }
    }

    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }

    pub fn end(&self) -> DateTime<Utc> {
        self.end
    }
}
