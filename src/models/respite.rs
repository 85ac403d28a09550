//! Respite model.

use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// A gap between clocking out and clocking back in.
///
/// Respites order by start time, then end time.
///
/// # Example
///
/// ```
/// use stamp_reports::models::Respite;
/// use chrono::{Duration, NaiveDateTime};
///
/// let start = NaiveDateTime::parse_from_str("2016-02-29 09:45:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// let end = NaiveDateTime::parse_from_str("2016-02-29 10:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// let respite = Respite::new(start, end).unwrap();
/// assert_eq!(respite.duration(), Duration::minutes(15));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Respite {
    start: NaiveDateTime,
    end: NaiveDateTime,
}

impl Respite {
    /// Creates a respite from `start` to `end`.
    ///
    /// Returns [`EngineError::InvalidArgument`] if `end` precedes `start`.
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> EngineResult<Self> {
        if end < start {
            return Err(EngineError::invalid_argument(
                "end",
                format!("respite end {} precedes its start {}", end, start),
            ));
        }
        Ok(Self { start, end })
    }

    /// When the employee clocked out.
    pub fn start(&self) -> NaiveDateTime {
        self.start
    }

    /// When the employee clocked back in.
    pub fn end(&self) -> NaiveDateTime {
        self.end
    }

    /// Length of the respite.
    pub fn duration(&self) -> Duration {
        self.end - self.start
    }
}
