use time::{Date, OffsetDateTime};

/// Source of "today" for registration dates.
pub trait Clock {
    fn today(&self) -> Date;
}

/// Wall clock. Registration dates are UTC calendar days.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> Date {
        OffsetDateTime::now_utc().date()
    }
}

/// A clock pinned to one date.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub Date);

impl Clock for FixedClock {
    fn today(&self) -> Date {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_clock_uses_utc_date() {
        let before = OffsetDateTime::now_utc().date();
        let today = SystemClock.today();
        let after = OffsetDateTime::now_utc().date();
        assert!(today == before || today == after);
    }
}
