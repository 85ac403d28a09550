//! Respites over a corrected day.

use chrono::Duration;

use crate::models::{Respite, TimeStamp};

/// Finds the respites of a corrected sequence no longer than `max_duration`.
///
/// A respite is the gap between an out-stamp and the in-stamp that follows
/// it, so pairs are taken starting at the first out-stamp. The bound is
/// inclusive. Respites are returned in chronological order.
///
/// # Example
///
/// ```
/// use stamp_reports::models::{StampKind, TimeStamp};
/// use stamp_reports::reports::find_respites;
/// use chrono::{Duration, NaiveDate};
///
/// let day = NaiveDate::from_ymd_opt(2016, 2, 29).unwrap();
/// let stamps = vec![
///     TimeStamp::new(1, StampKind::In, day.and_hms_opt(9, 30, 0).unwrap()),
///     TimeStamp::new(1, StampKind::Out, day.and_hms_opt(9, 45, 0).unwrap()),
///     TimeStamp::new(1, StampKind::In, day.and_hms_opt(10, 0, 0).unwrap()),
///     TimeStamp::new(1, StampKind::Out, day.and_hms_opt(18, 30, 0).unwrap()),
/// ];
///
/// let respites = find_respites(&stamps, Duration::minutes(15));
/// assert_eq!(respites.len(), 1);
/// assert_eq!(respites[0].duration(), Duration::minutes(15));
/// ```
pub fn find_respites(stamps: &[TimeStamp], max_duration: Duration) -> Vec<Respite> {
    let after_first_in = stamps.get(1..).unwrap_or_default();

    after_first_in
        .chunks_exact(2)
        .filter(|pair| pair[1].time() - pair[0].time() <= max_duration)
        .filter_map(|pair| Respite::new(pair[0].time(), pair[1].time()).ok())
        .collect()
}
