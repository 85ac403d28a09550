//! Repair of the in/out alternation inside a day.

use tracing::debug;

use crate::models::notification::{DUPLICATE_STAMP_REMOVED, SYNTHETIC_STAMP_INSERTED};
use crate::models::{Notification, TimeStamp};

/// Makes adjacent stamps alternate between in and out.
///
/// Scans adjacent pairs from left to right. Two stamps of the same kind at
/// the same instant are duplicates: the second is dropped and the pair is
/// compared again, so a run of equal stamps collapses to one. Two stamps of
/// the same kind at different instants get a stamp of the opposite kind
/// inserted halfway between them.
///
/// # Example
///
/// ```
/// use stamp_reports::correction::repair_sequence;
/// use stamp_reports::models::{StampKind, TimeStamp};
/// use chrono::NaiveDate;
///
/// let day = NaiveDate::from_ymd_opt(2016, 2, 29).unwrap();
/// let stamps = vec![
///     TimeStamp::new(1, StampKind::In, day.and_hms_opt(9, 0, 0).unwrap()),
///     TimeStamp::new(1, StampKind::In, day.and_hms_opt(9, 10, 0).unwrap()),
///     TimeStamp::new(1, StampKind::Out, day.and_hms_opt(12, 0, 0).unwrap()),
/// ];
/// let mut notifications = Vec::new();
///
/// let repaired = repair_sequence(stamps, &mut notifications);
/// assert_eq!(repaired[1].kind(), StampKind::Out);
/// assert_eq!(repaired[1].time(), day.and_hms_opt(9, 5, 0).unwrap());
/// ```
pub fn repair_sequence(
    mut stamps: Vec<TimeStamp>,
    notifications: &mut Vec<Notification>,
) -> Vec<TimeStamp> {
    let mut i = 0;

    while i + 1 < stamps.len() {
        let current = stamps[i];
        let next = stamps[i + 1];

        if current.kind() != next.kind() {
            i += 1;
            continue;
        }

        if current.time() == next.time() {
            debug!(
                employee_id = current.employee_id(),
                time = %next.time(),
                kind = %next.kind(),
                "Duplicate stamp removed"
            );
            notifications.push(Notification::warning(DUPLICATE_STAMP_REMOVED));
            stamps.remove(i + 1);
        } else {
            let middle = current.time() + (next.time() - current.time()) / 2;
            let inserted = TimeStamp::new(current.employee_id(), current.kind().opposite(), middle);
            debug!(
                employee_id = current.employee_id(),
                time = %middle,
                kind = %inserted.kind(),
                "Synthetic stamp inserted"
            );
            notifications.push(Notification::warning(SYNTHETIC_STAMP_INSERTED));
            stamps.insert(i + 1, inserted);
            i += 2;
        }
    }

    stamps
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::StampKind;
    use chrono::NaiveDateTime;

    fn make_datetime(time_str: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(&format!("2016-02-29 {}", time_str), "%Y-%m-%d %H:%M:%S")
            .unwrap()
    }

    fn stamp(kind: StampKind, time_str: &str) -> TimeStamp {
        TimeStamp::new(1, kind, make_datetime(time_str))
    }

    #[test]
    fn test_alternating_sequence_is_untouched() {
        let stamps = vec![
            stamp(StampKind::In, "09:00:00"),
            stamp(StampKind::Out, "12:00:00"),
            stamp(StampKind::In, "13:00:00"),
            stamp(StampKind::Out, "17:00:00"),
        ];
        let mut notifications = Vec::new();

        let repaired = repair_sequence(stamps.clone(), &mut notifications);

        assert_eq!(repaired, stamps);
        assert!(notifications.is_empty());
    }

    #[test]
    fn test_same_type_runs_are_split_at_midpoint() {
        let stamps = vec![
            stamp(StampKind::In, "09:00:00"),
            stamp(StampKind::In, "09:10:00"),
            stamp(StampKind::Out, "12:00:00"),
            stamp(StampKind::Out, "14:00:00"),
        ];
        let mut notifications = Vec::new();

        let repaired = repair_sequence(stamps, &mut notifications);

        assert_eq!(
            repaired,
            vec![
                stamp(StampKind::In, "09:00:00"),
                stamp(StampKind::Out, "09:05:00"),
                stamp(StampKind::In, "09:10:00"),
                stamp(StampKind::Out, "12:00:00"),
                stamp(StampKind::In, "13:00:00"),
                stamp(StampKind::Out, "14:00:00"),
            ]
        );
        assert_eq!(
            notifications,
            vec![
                Notification::warning(SYNTHETIC_STAMP_INSERTED),
                Notification::warning(SYNTHETIC_STAMP_INSERTED),
            ]
        );
    }

    #[test]
    fn test_duplicate_pair_collapses() {
        let stamps = vec![
            stamp(StampKind::Out, "09:30:00"),
            stamp(StampKind::Out, "09:30:00"),
        ];
        let mut notifications = Vec::new();

        let repaired = repair_sequence(stamps, &mut notifications);

        assert_eq!(repaired, vec![stamp(StampKind::Out, "09:30:00")]);
        assert_eq!(
            notifications,
            vec![Notification::warning(DUPLICATE_STAMP_REMOVED)]
        );
    }

    #[test]
    fn test_run_of_duplicates_collapses_to_one() {
        let stamps = vec![
            stamp(StampKind::In, "09:00:00"),
            stamp(StampKind::Out, "18:30:00"),
            stamp(StampKind::Out, "18:30:00"),
            stamp(StampKind::Out, "18:30:00"),
            stamp(StampKind::Out, "18:30:00"),
        ];
        let mut notifications = Vec::new();

        let repaired = repair_sequence(stamps, &mut notifications);

        assert_eq!(
            repaired,
            vec![
                stamp(StampKind::In, "09:00:00"),
                stamp(StampKind::Out, "18:30:00"),
            ]
        );
        assert_eq!(notifications.len(), 3);
    }

    #[test]
    fn test_long_same_type_run_alternates() {
        let stamps = vec![
            stamp(StampKind::In, "09:00:00"),
            stamp(StampKind::In, "10:00:00"),
            stamp(StampKind::In, "11:00:00"),
            stamp(StampKind::Out, "12:00:00"),
        ];
        let mut notifications = Vec::new();

        let repaired = repair_sequence(stamps, &mut notifications);

        let kinds: Vec<StampKind> = repaired.iter().map(|s| s.kind()).collect();
        assert_eq!(
            kinds,
            vec![
                StampKind::In,
                StampKind::Out,
                StampKind::In,
                StampKind::Out,
                StampKind::In,
                StampKind::Out,
            ]
        );
        assert_eq!(repaired[1].time(), make_datetime("09:30:00"));
        assert_eq!(repaired[3].time(), make_datetime("10:30:00"));
    }

    #[test]
    fn test_repairing_twice_changes_nothing() {
        let stamps = vec![
            stamp(StampKind::In, "08:00:00"),
            stamp(StampKind::In, "08:00:00"),
            stamp(StampKind::In, "09:00:00"),
            stamp(StampKind::Out, "17:00:00"),
        ];
        let mut first_notes = Vec::new();
        let once = repair_sequence(stamps, &mut first_notes);

        let mut second_notes = Vec::new();
        let twice = repair_sequence(once.clone(), &mut second_notes);

        assert_eq!(once, twice);
        assert!(second_notes.is_empty());
    }

    #[test]
    fn test_single_and_empty_sequences() {
        let mut notifications = Vec::new();
        assert!(repair_sequence(Vec::new(), &mut notifications).is_empty());

        let single = vec![stamp(StampKind::In, "09:00:00")];
        assert_eq!(repair_sequence(single.clone(), &mut notifications), single);
        assert!(notifications.is_empty());
    }
}
