//! Worked time over a corrected day.

use chrono::Duration;

use crate::models::TimeStamp;

/// Sums the length of every (in, out) pair of a corrected sequence.
///
/// `stamps` must alternate starting with an in-stamp; a trailing unpaired
/// stamp is ignored.
///
/// # Example
///
/// ```
/// use stamp_reports::models::{StampKind, TimeStamp};
/// use stamp_reports::reports::worked_time;
/// use chrono::{Duration, NaiveDate};
///
/// let day = NaiveDate::from_ymd_opt(2016, 2, 29).unwrap();
/// let stamps = vec![
///     TimeStamp::new(1, StampKind::In, day.and_hms_opt(9, 0, 0).unwrap()),
///     TimeStamp::new(1, StampKind::Out, day.and_hms_opt(12, 0, 0).unwrap()),
///     TimeStamp::new(1, StampKind::In, day.and_hms_opt(13, 0, 0).unwrap()),
///     TimeStamp::new(1, StampKind::Out, day.and_hms_opt(17, 30, 0).unwrap()),
/// ];
/// assert_eq!(worked_time(&stamps), Duration::minutes(450));
/// ```
pub fn worked_time(stamps: &[TimeStamp]) -> Duration {
    stamps
        .chunks_exact(2)
        .map(|pair| pair[1].time() - pair[0].time())
        .fold(Duration::zero(), |total, interval| total + interval)
}
