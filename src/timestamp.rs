use regex::Regex;
use std::fmt;

/// `HH:MM:SS - HH:MM:SS`, nothing else on the line
const RANGE_PATTERN: &str =
    r"^([0-9]{2}):([0-9]{2}):([0-9]{2}) - ([0-9]{2}):([0-9]{2}):([0-9]{2})$";

/// A clock position as written in the timestamps file. Fields are not
/// range-checked; `00:75:00` is passed to ffmpeg as written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timestamp {
    pub hours: u8,
    pub minutes: u8,
    pub seconds: u8,
}

impl Timestamp {
    pub fn as_secs(&self) -> u32 {
        u32::from(self.hours) * 3600 + u32::from(self.minutes) * 60 + u32::from(self.seconds)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hours, self.minutes, self.seconds)
    }
}

/// Half-open range `[start, end)` taken from one valid line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeRange {
    pub start: Timestamp,
    pub end: Timestamp,
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.start, self.end)
    }
}

/// Recognises the valid lines of a timestamps file
#[derive(Debug, Clone)]
pub struct RangeParser {
    pattern: Regex,
}

impl RangeParser {
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            pattern: Regex::new(RANGE_PATTERN)?,
        })
    }

    /// Parse one line. Surrounding whitespace is ignored; anything else that
    /// is not exactly two timestamps yields `None`.
    pub fn parse_line(&self, line: &str) -> Option<TimeRange> {
        let cap = self.pattern.captures(line.trim())?;
        let field = |i: usize| cap[i].parse::<u8>().ok();

        Some(TimeRange {
            start: Timestamp {
                hours: field(1)?,
                minutes: field(2)?,
                seconds: field(3)?,
            },
            end: Timestamp {
                hours: field(4)?,
                minutes: field(5)?,
                seconds: field(6)?,
            },
        })
    }
}
