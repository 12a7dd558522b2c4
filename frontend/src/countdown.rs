//! Remaining-time arithmetic and the countdown's lifecycle.
//!
//! Every tick recomputes from the fixed target and the current time, so a
//! late or skipped interval never accumulates drift.

use chrono::{DateTime, Utc};

pub const MS_PER_SECOND: i64 = 1_000;
pub const MS_PER_MINUTE: i64 = 60 * MS_PER_SECOND;
pub const MS_PER_HOUR: i64 = 60 * MS_PER_MINUTE;
pub const MS_PER_DAY: i64 = 24 * MS_PER_HOUR;

/// Milliseconds between two countdown ticks.
pub const TICK_INTERVAL_MS: u32 = 1_000;

/// Source of "now". The browser clock in the app, a fixed instant in tests.
#[cfg_attr(test, mockall::automock)]
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TimeLeft {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl TimeLeft {
    /// Splits a positive millisecond difference into calendar-ish fields.
    /// Returns `None` once the difference is zero or negative.
    pub fn from_millis(diff: i64) -> Option<Self> {
        if diff <= 0 {
            return None;
        }
        Some(Self {
            days: diff / MS_PER_DAY,
            hours: (diff / MS_PER_HOUR) % 24,
            minutes: (diff / MS_PER_MINUTE) % 60,
            seconds: (diff / MS_PER_SECOND) % 60,
        })
    }

    pub fn between(target: DateTime<Utc>, now: DateTime<Utc>) -> Option<Self> {
        Self::from_millis((target - now).num_milliseconds())
    }

    pub fn blocks(&self) -> [(&'static str, i64); 4] {
        [
            ("Days", self.days),
            ("Hours", self.hours),
            ("Minutes", self.minutes),
            ("Seconds", self.seconds),
        ]
    }
}

/// Zero-pads to at least two digits; larger values keep all their digits.
pub fn pad2(value: i64) -> String {
    format!("{:02}", value)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// No usable target was configured.
    Unscheduled,
    CountingDown,
    /// Terminal. Fields stay at whatever the last positive tick produced.
    Started,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Countdown {
    target: Option<DateTime<Utc>>,
    time_left: TimeLeft,
    phase: Phase,
}

impl Countdown {
    pub fn new(target: Option<DateTime<Utc>>) -> Self {
        let phase = match target {
            Some(_) => Phase::CountingDown,
            None => Phase::Unscheduled,
        };
        Self {
            target,
            time_left: TimeLeft::default(),
            phase,
        }
    }

    /// Recomputes against `now`. Returns true when anything visible changed.
    pub fn tick(&mut self, now: DateTime<Utc>) -> bool {
        let target = match (self.phase, self.target) {
            (Phase::CountingDown, Some(target)) => target,
            _ => return false,
        };

        match TimeLeft::between(target, now) {
            Some(time_left) => {
                let changed = time_left != self.time_left;
                self.time_left = time_left;
                changed
            }
            None => {
                log::info!("Countdown reached its target at {}", target);
                self.phase = Phase::Started;
                true
            }
        }
    }

    pub fn tick_with(&mut self, clock: &dyn Clock) -> bool {
        self.tick(clock.now())
    }

    pub fn time_left(&self) -> TimeLeft {
        self.time_left
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn heading(&self) -> &'static str {
        match self.phase {
            Phase::Unscheduled => "Dates To Be Announced",
            Phase::CountingDown => "Hackathon Starts In",
            Phase::Started => "Hackathon Is Live",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 2, 1, 12, 0, 0).unwrap()
    }

    fn total_millis(left: &TimeLeft) -> i64 {
        left.days * MS_PER_DAY
            + left.hours * MS_PER_HOUR
            + left.minutes * MS_PER_MINUTE
            + left.seconds * MS_PER_SECOND
    }

    #[test]
    fn decomposes_one_of_each_unit() {
        let target = now() + Duration::milliseconds(90_061_001);
        let left = TimeLeft::between(target, now()).unwrap();
        assert_eq!(
            left,
            TimeLeft { days: 1, hours: 1, minutes: 1, seconds: 1 }
        );
    }

    #[test]
    fn fields_stay_in_range_and_reconstruct_within_a_second() {
        let mut diff = 1i64;
        while diff < 400 * MS_PER_DAY {
            let left = TimeLeft::from_millis(diff).unwrap();
            assert!(left.days >= 0);
            assert!((0..=23).contains(&left.hours), "hours out of range for {}", diff);
            assert!((0..=59).contains(&left.minutes), "minutes out of range for {}", diff);
            assert!((0..=59).contains(&left.seconds), "seconds out of range for {}", diff);
            let error = diff - total_millis(&left);
            assert!((0..MS_PER_SECOND).contains(&error), "lost {}ms for {}", error, diff);
            diff = diff * 3 + 7;
        }
    }

    #[test]
    fn same_inputs_give_same_fields() {
        let target = now() + Duration::hours(50) + Duration::milliseconds(123);
        assert_eq!(TimeLeft::between(target, now()), TimeLeft::between(target, now()));
    }

    #[test]
    fn no_fields_at_or_after_target() {
        assert_eq!(TimeLeft::from_millis(0), None);
        assert_eq!(TimeLeft::from_millis(-1), None);
        assert_eq!(TimeLeft::between(now(), now()), None);
    }

    #[test]
    fn first_tick_fills_fields() {
        let mut countdown = Countdown::new(Some(now() + Duration::seconds(3_725)));
        assert_eq!(countdown.time_left(), TimeLeft::default());

        assert!(countdown.tick(now()));
        assert_eq!(
            countdown.time_left(),
            TimeLeft { days: 0, hours: 1, minutes: 2, seconds: 5 }
        );
        assert_eq!(countdown.phase(), Phase::CountingDown);
    }

    #[test]
    fn unchanged_second_reports_no_change() {
        let mut countdown = Countdown::new(Some(now() + Duration::milliseconds(10_500)));
        assert!(countdown.tick(now()));
        assert!(!countdown.tick(now() + Duration::milliseconds(400)));
    }

    #[test]
    fn exact_target_keeps_previous_fields() {
        let target = now() + Duration::seconds(2);
        let mut countdown = Countdown::new(Some(target));
        countdown.tick(now());
        let before = countdown.time_left();

        countdown.tick(target);
        assert_eq!(countdown.time_left(), before);
        assert_eq!(countdown.phase(), Phase::Started);
    }

    #[test]
    fn sub_second_target_shows_zero_then_freezes() {
        let target = now() + Duration::milliseconds(500);
        let mut countdown = Countdown::new(Some(target));

        countdown.tick(now());
        assert_eq!(countdown.time_left(), TimeLeft::default());
        assert_eq!(countdown.phase(), Phase::CountingDown);

        countdown.tick(now() + Duration::seconds(1));
        assert_eq!(countdown.phase(), Phase::Started);
        for secs in 2..6 {
            assert!(!countdown.tick(now() + Duration::seconds(secs)));
            assert_eq!(countdown.time_left(), TimeLeft::default());
        }
    }

    #[test]
    fn past_target_at_mount_stays_zero() {
        let mut countdown = Countdown::new(Some(now() - Duration::milliseconds(10_000)));
        countdown.tick(now());

        assert_eq!(countdown.time_left(), TimeLeft::default());
        assert_eq!(countdown.phase(), Phase::Started);
        let shown: Vec<String> = countdown
            .time_left()
            .blocks()
            .iter()
            .map(|(_, value)| pad2(*value))
            .collect();
        assert_eq!(shown, vec!["00", "00", "00", "00"]);
    }

    #[test]
    fn started_is_terminal_even_if_clock_goes_back() {
        let target = now() + Duration::seconds(5);
        let mut countdown = Countdown::new(Some(target));
        countdown.tick(now());
        let frozen = countdown.time_left();
        countdown.tick(target + Duration::seconds(1));

        assert!(!countdown.tick(now()));
        assert_eq!(countdown.phase(), Phase::Started);
        assert_eq!(countdown.time_left(), frozen);
        assert_eq!(countdown.heading(), "Hackathon Is Live");
    }

    #[test]
    fn unscheduled_never_changes() {
        let mut countdown = Countdown::new(None);
        assert!(!countdown.tick(now()));
        assert_eq!(countdown.phase(), Phase::Unscheduled);
        assert_eq!(countdown.time_left(), TimeLeft::default());
        assert_eq!(countdown.heading(), "Dates To Be Announced");
    }

    #[test]
    fn ticks_against_injected_clock() {
        let mut clock = MockClock::new();
        clock.expect_now().times(1).return_const(now());

        let mut countdown = Countdown::new(Some(now() + Duration::days(21)));
        assert!(countdown.tick_with(&clock));
        assert_eq!(countdown.time_left().days, 21);
    }

    #[test]
    fn pads_to_at_least_two_digits() {
        assert_eq!(pad2(0), "00");
        assert_eq!(pad2(7), "07");
        assert_eq!(pad2(23), "23");
        assert_eq!(pad2(123), "123");
    }

    #[test]
    fn blocks_are_labelled_in_order() {
        let left = TimeLeft { days: 4, hours: 3, minutes: 2, seconds: 1 };
        assert_eq!(
            left.blocks(),
            [("Days", 4), ("Hours", 3), ("Minutes", 2), ("Seconds", 1)]
        );
    }
}
