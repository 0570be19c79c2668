//! Wall-clock times as shown on a departure board.
//!
//! Board times are "HH:MM" strings with no date or timezone attached. The
//! upstream overloads its estimated-time field with status words, so every
//! parse here is fallible and callers are expected to degrade gracefully.

use chrono::{NaiveDateTime, NaiveTime, Timelike};
use std::fmt;

/// Error returned when parsing an invalid time string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid time: {reason}")]
pub struct TimeError {
    reason: &'static str,
}

impl TimeError {
    fn new(reason: &'static str) -> Self {
        Self { reason }
    }
}

/// A time of day with minute precision.
///
/// # Examples
///
/// ```
/// use departure_board::domain::ClockTime;
///
/// let time = ClockTime::parse_hhmm("14:30").unwrap();
/// assert_eq!(time.to_string(), "14:30");
///
/// assert!(ClockTime::parse_hhmm("1430").is_err());
/// assert!(ClockTime::parse_hhmm("14:3").is_err());
/// assert!(ClockTime::parse_hhmm("25:00").is_err());
/// assert!(ClockTime::parse_hhmm("On time").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClockTime(NaiveTime);

impl ClockTime {
    /// Parse a time from "HH:MM" format.
    pub fn parse_hhmm(s: &str) -> Result<Self, TimeError> {
        // Must be exactly 5 characters: HH:MM
        if s.len() != 5 {
            return Err(TimeError::new("expected HH:MM format"));
        }

        let bytes = s.as_bytes();

        if bytes[2] != b':' {
            return Err(TimeError::new("expected colon at position 2"));
        }

        let hour =
            parse_two_digits(&bytes[0..2]).ok_or_else(|| TimeError::new("invalid hour digits"))?;
        if hour > 23 {
            return Err(TimeError::new("hour must be 0-23"));
        }

        let minute = parse_two_digits(&bytes[3..5])
            .ok_or_else(|| TimeError::new("invalid minute digits"))?;
        if minute > 59 {
            return Err(TimeError::new("minute must be 0-59"));
        }

        NaiveTime::from_hms_opt(hour, minute, 0)
            .map(Self)
            .ok_or_else(|| TimeError::new("invalid time"))
    }

    /// The clock time of a local timestamp, seconds discarded.
    pub fn of(datetime: NaiveDateTime) -> Self {
        let time = datetime.time();
        // Seconds and below are dropped; hour and minute are always in range.
        Self(NaiveTime::from_hms_opt(time.hour(), time.minute(), 0).unwrap_or(time))
    }

    /// Returns the hour (0-23).
    pub fn hour(&self) -> u32 {
        self.0.hour()
    }

    /// Returns the minute (0-59).
    pub fn minute(&self) -> u32 {
        self.0.minute()
    }

    /// Signed whole minutes from `earlier` to `self`, both taken as the same day.
    pub fn minutes_since(&self, earlier: ClockTime) -> i32 {
        let mins = |t: &ClockTime| (t.hour() * 60 + t.minute()) as i32;
        mins(self) - mins(&earlier)
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

/// Delay in minutes between a scheduled and an estimated board time.
///
/// Both strings are read as same-day "HH:MM" values. Anything that does not
/// parse (an empty field, a status word such as "Delayed") yields 0.
/// Early running comes back negative.
///
/// ```
/// use departure_board::domain::delay_minutes;
///
/// assert_eq!(delay_minutes("10:00", "10:07"), 7);
/// assert_eq!(delay_minutes("10:00", "09:55"), -5);
/// assert_eq!(delay_minutes("10:00", "Delayed"), 0);
/// assert_eq!(delay_minutes("", "10:07"), 0);
/// ```
pub fn delay_minutes(scheduled: &str, estimated: &str) -> i32 {
    match (
        ClockTime::parse_hhmm(scheduled),
        ClockTime::parse_hhmm(estimated),
    ) {
        (Ok(scheduled), Ok(estimated)) => estimated.minutes_since(scheduled),
        _ => 0,
    }
}

/// Parse two ASCII digit bytes into a u32.
fn parse_two_digits(bytes: &[u8]) -> Option<u32> {
    if bytes.len() != 2 {
        return None;
    }
    let d1 = (bytes[0] as char).to_digit(10)?;
    let d2 = (bytes[1] as char).to_digit(10)?;
    Some(d1 * 10 + d2)
}
