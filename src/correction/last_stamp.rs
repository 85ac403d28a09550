//! Repair of the trailing stamp of a day.
//!
//! A day that ends while the employee is still clocked in is closed either
//! by an early out-stamp of the following day (an overnight shift) or by
//! the last second of the day itself.

use chrono::{Days, NaiveDate, NaiveTime};
use tracing::{debug, warn};

use crate::error::EngineResult;
use crate::models::notification::{
    END_OF_DAY_INSERTED, LAST_OUT_STAMP_NOT_FOUND, NEXT_DAY_OUT_STAMP_ADOPTED,
};
use crate::models::{Notification, StampKind, TimeStamp};

/// Ensures the day's stamps end with an out-stamp.
///
/// `next_day_stamps` is called with the following day only when the last
/// stamp is missing or is an in-stamp. If the following day starts with an out-stamp no later than
/// `next_day_cutoff`, a copy of that stamp closes the day; otherwise an
/// out-stamp at 23:59:59 of `day` is appended.
///
/// Errors from `next_day_stamps` are returned unchanged.
///
/// # Example
///
/// ```
/// use stamp_reports::correction::repair_last_stamp;
/// use stamp_reports::models::{StampKind, TimeStamp};
/// use chrono::{NaiveDate, NaiveTime};
///
/// let day = NaiveDate::from_ymd_opt(2016, 2, 29).unwrap();
/// let next_day = NaiveDate::from_ymd_opt(2016, 3, 1).unwrap();
/// let stamps = vec![TimeStamp::new(1, StampKind::In, day.and_hms_opt(18, 0, 0).unwrap())];
/// let overnight_out = TimeStamp::new(1, StampKind::Out, next_day.and_hms_opt(3, 0, 0).unwrap());
/// let cutoff = NaiveTime::from_hms_opt(4, 0, 0).unwrap();
/// let mut notifications = Vec::new();
///
/// let repaired =
///     repair_last_stamp(stamps, 1, day, cutoff, |_| Ok(vec![overnight_out]), &mut notifications)
///         .unwrap();
/// assert_eq!(repaired.last(), Some(&overnight_out));
/// ```
pub fn repair_last_stamp<F>(
    mut stamps: Vec<TimeStamp>,
    employee_id: u32,
    day: NaiveDate,
    next_day_cutoff: NaiveTime,
    next_day_stamps: F,
    notifications: &mut Vec<Notification>,
) -> EngineResult<Vec<TimeStamp>>
where
    F: FnOnce(NaiveDate) -> EngineResult<Vec<TimeStamp>>,
{
    if stamps.last().is_some_and(|s| s.kind() == StampKind::Out) {
        return Ok(stamps);
    }

    warn!(employee_id, %day, "Last out-stamp not found");
    notifications.push(Notification::warning(LAST_OUT_STAMP_NOT_FOUND));

    let adopted = match day.checked_add_days(Days::new(1)) {
        Some(next_day) => {
            let cutoff = next_day.and_time(next_day_cutoff);
            next_day_stamps(next_day)?
                .first()
                .filter(|s| s.kind() == StampKind::Out && s.time() <= cutoff)
                .copied()
        }
        None => None,
    };

    match adopted {
        Some(stamp) => {
            debug!(employee_id, %day, adopted = %stamp.time(), "Next day's out-stamp adopted");
            notifications.push(Notification::message(NEXT_DAY_OUT_STAMP_ADOPTED));
            stamps.push(stamp);
        }
        None => {
            let end_of_day = day.and_time(end_of_day_time());
            debug!(employee_id, %day, inserted = %end_of_day, "End of day inserted");
            notifications.push(Notification::message(END_OF_DAY_INSERTED));
            stamps.push(TimeStamp::new(employee_id, StampKind::Out, end_of_day));
        }
    }

    Ok(stamps)
}

fn end_of_day_time() -> NaiveTime {
    NaiveTime::from_hms_opt(23, 59, 59).expect("Valid end of day time")
}
