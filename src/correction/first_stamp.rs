//! Repair of the leading stamp of a day.

use chrono::{NaiveDate, NaiveTime};
use tracing::warn;

use crate::models::notification::{BEGIN_OF_DAY_INSERTED, FIRST_IN_STAMP_NOT_FOUND};
use crate::models::{Notification, StampKind, TimeStamp};

/// Ensures the day's stamps start with an in-stamp.
///
/// When the first stamp is missing or is an out-stamp, the employee is
/// assumed to have been working since midnight: an in-stamp at 00:00:00 of
/// `day` is prepended and a warning plus a message are recorded.
///
/// # Example
///
/// ```
/// use stamp_reports::correction::repair_first_stamp;
/// use stamp_reports::models::{StampKind, TimeStamp};
/// use chrono::NaiveDate;
///
/// let day = NaiveDate::from_ymd_opt(2016, 2, 29).unwrap();
/// let stamps = vec![TimeStamp::new(1, StampKind::Out, day.and_hms_opt(9, 0, 0).unwrap())];
/// let mut notifications = Vec::new();
///
/// let repaired = repair_first_stamp(stamps, 1, day, &mut notifications);
/// assert_eq!(repaired[0].kind(), StampKind::In);
/// assert_eq!(repaired[0].time(), day.and_hms_opt(0, 0, 0).unwrap());
/// assert_eq!(notifications.len(), 2);
/// ```
pub fn repair_first_stamp(
    mut stamps: Vec<TimeStamp>,
    employee_id: u32,
    day: NaiveDate,
    notifications: &mut Vec<Notification>,
) -> Vec<TimeStamp> {
    if stamps.first().is_some_and(|s| s.kind() == StampKind::In) {
        return stamps;
    }

    let begin_of_day = day.and_time(NaiveTime::MIN);
    warn!(employee_id, %day, inserted = %begin_of_day, "First in-stamp not found");

    notifications.push(Notification::warning(FIRST_IN_STAMP_NOT_FOUND));
    notifications.push(Notification::message(BEGIN_OF_DAY_INSERTED));
    stamps.insert(0, TimeStamp::new(employee_id, StampKind::In, begin_of_day));
    stamps
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Severity;
    use chrono::NaiveDateTime;

    fn make_datetime(date_str: &str, time_str: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(&format!("{} {}", date_str, time_str), "%Y-%m-%d %H:%M:%S")
            .unwrap()
    }

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_leading_in_stamp_is_kept() {
        let stamps = vec![
            TimeStamp::new(1, StampKind::In, make_datetime("2016-02-29", "09:30:00")),
            TimeStamp::new(1, StampKind::Out, make_datetime("2016-02-29", "18:30:00")),
        ];
        let mut notifications = Vec::new();

        let repaired =
            repair_first_stamp(stamps.clone(), 1, make_date("2016-02-29"), &mut notifications);

        assert_eq!(repaired, stamps);
        assert!(notifications.is_empty());
    }

    #[test]
    fn test_leading_out_stamp_gets_midnight_in_stamp() {
        let stamps = vec![TimeStamp::new(
            1,
            StampKind::Out,
            make_datetime("2016-02-29", "09:00:00"),
        )];
        let mut notifications = Vec::new();

        let repaired = repair_first_stamp(stamps, 1, make_date("2016-02-29"), &mut notifications);

        assert_eq!(
            repaired,
            vec![
                TimeStamp::new(1, StampKind::In, make_datetime("2016-02-29", "00:00:00")),
                TimeStamp::new(1, StampKind::Out, make_datetime("2016-02-29", "09:00:00")),
            ]
        );
        assert_eq!(
            notifications,
            vec![
                Notification::new(FIRST_IN_STAMP_NOT_FOUND, Severity::Warning),
                Notification::new(BEGIN_OF_DAY_INSERTED, Severity::Message),
            ]
        );
    }

    #[test]
    fn test_empty_day_gets_midnight_in_stamp() {
        let mut notifications = Vec::new();

        let repaired =
            repair_first_stamp(Vec::new(), 4, make_date("2016-02-29"), &mut notifications);

        assert_eq!(
            repaired,
            vec![TimeStamp::new(
                4,
                StampKind::In,
                make_datetime("2016-02-29", "00:00:00")
            )]
        );
        assert_eq!(notifications.len(), 2);
    }
}
