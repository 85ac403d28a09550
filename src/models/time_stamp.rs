//! Time stamp model.
//!
//! A [`TimeStamp`] records a single in/out clock event of one employee.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// The direction of a clock event.
///
/// The declaration order matters: `In` sorts before `Out`, so two stamps
/// at the same instant order as In then Out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StampKind {
    /// The employee clocked in.
    In,
    /// The employee clocked out.
    Out,
}

impl StampKind {
    /// Returns the other kind.
    pub fn opposite(self) -> StampKind {
        match self {
            StampKind::In => StampKind::Out,
            StampKind::Out => StampKind::In,
        }
    }
}

impl std::fmt::Display for StampKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StampKind::In => write!(f, "In"),
            StampKind::Out => write!(f, "Out"),
        }
    }
}

/// A single in/out clock event for one employee at one instant.
///
/// Stamps are immutable values. Ordering compares employee id, then time,
/// then kind, which is the order the stamp store guarantees.
///
/// # Example
///
/// ```
/// use stamp_reports::models::{StampKind, TimeStamp};
/// use chrono::NaiveDateTime;
///
/// let time = NaiveDateTime::parse_from_str("2016-02-29 09:30:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// let early_in = TimeStamp::new(1, StampKind::In, time);
/// let early_out = TimeStamp::new(1, StampKind::Out, time);
/// assert!(early_in < early_out);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TimeStamp {
    employee_id: u32,
    time: NaiveDateTime,
    kind: StampKind,
}

impl TimeStamp {
    /// Creates a stamp for `employee_id` of the given kind at `time`.
    pub fn new(employee_id: u32, kind: StampKind, time: NaiveDateTime) -> Self {
        Self {
            employee_id,
            time,
            kind,
        }
    }

    /// The employee this stamp belongs to.
    pub fn employee_id(&self) -> u32 {
        self.employee_id
    }

    /// Whether this is an in- or out-stamp.
    pub fn kind(&self) -> StampKind {
        self.kind
    }

    /// The wall-clock instant of the stamp.
    pub fn time(&self) -> NaiveDateTime {
        self.time
    }

    /// The calendar day the stamp falls on.
    pub fn day(&self) -> NaiveDate {
        self.time.date()
    }
}
