use chrono::{Local, NaiveDateTime, NaiveTime, TimeDelta};

/// Counts down to the end of the current local day, then starts over.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Countdown {
    end: NaiveDateTime,
}

fn end_of_day(now: NaiveDateTime) -> NaiveDateTime {
    let last_moment = NaiveTime::from_hms_milli_opt(23, 59, 59, 999).unwrap_or(NaiveTime::MIN);
    now.date().and_time(last_moment)
}

impl Countdown {
    pub fn starting_at(now: NaiveDateTime) -> Self {
        Self {
            end: end_of_day(now),
        }
    }

    pub fn starting_now() -> Self {
        Self::starting_at(Local::now().naive_local())
    }

    /// Time left at `now`. Once the deadline passes it moves to the next
    /// day's end.
    pub fn remaining(&mut self, now: NaiveDateTime) -> TimeDelta {
        if self.end <= now {
            self.end = end_of_day(now);
            if self.end <= now {
                self.end = end_of_day(now + TimeDelta::days(1));
            }
        }
        self.end - now
    }

    /// `HH:MM:SS` left at `now`.
    pub fn tick(&mut self, now: NaiveDateTime) -> String {
        format_hms(self.remaining(now))
    }

    pub fn tick_now(&mut self) -> String {
        self.tick(Local::now().naive_local())
    }
}

/// Zero-padded `HH:MM:SS`, truncating sub-second remainders.
pub fn format_hms(delta: TimeDelta) -> String {
    let total = delta.num_seconds().max(0);
    format!(
        "{:02}:{:02}:{:02}",
        total / 3600,
        (total % 3600) / 60,
        total % 60
    )
}
