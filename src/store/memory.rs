//! In-memory stamp store.

use chrono::NaiveDate;

use crate::error::EngineResult;
use crate::models::TimeStamp;

use super::StampStore;

/// A [`StampStore`] backed by a sorted vector.
///
/// # Example
///
/// ```
/// use stamp_reports::models::{StampKind, TimeStamp};
/// use stamp_reports::store::{InMemoryStampStore, StampStore};
/// use chrono::NaiveDate;
///
/// let day = NaiveDate::from_ymd_opt(2016, 2, 29).unwrap();
/// let store = InMemoryStampStore::new(vec![
///     TimeStamp::new(1, StampKind::Out, day.and_hms_opt(18, 30, 0).unwrap()),
///     TimeStamp::new(1, StampKind::In, day.and_hms_opt(9, 30, 0).unwrap()),
/// ]);
///
/// let stamps = store.get_by_employee_and_day(1, day).unwrap();
/// assert_eq!(stamps[0].kind(), StampKind::In);
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryStampStore {
    stamps: Vec<TimeStamp>,
}

impl InMemoryStampStore {
    /// Creates a store holding `stamps`, sorted into store order.
    pub fn new(mut stamps: Vec<TimeStamp>) -> Self {
        stamps.sort();
        Self { stamps }
    }

    /// Number of stamps held.
    pub fn len(&self) -> usize {
        self.stamps.len()
    }

    /// Whether the store holds no stamps.
    pub fn is_empty(&self) -> bool {
        self.stamps.is_empty()
    }
}

impl StampStore for InMemoryStampStore {
    fn get_all(&self) -> EngineResult<Vec<TimeStamp>> {
        Ok(self.stamps.clone())
    }

    fn get_by_employee(&self, employee_id: u32) -> EngineResult<Vec<TimeStamp>> {
        Ok(self
            .stamps
            .iter()
            .filter(|s| s.employee_id() == employee_id)
            .copied()
            .collect())
    }

    fn get_by_employee_and_day(
        &self,
        employee_id: u32,
        day: NaiveDate,
    ) -> EngineResult<Vec<TimeStamp>> {
        Ok(self
            .stamps
            .iter()
            .filter(|s| s.employee_id() == employee_id && s.day() == day)
            .copied()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::StampKind;
    use chrono::NaiveDateTime;

    fn make_datetime(date_str: &str, time_str: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(&format!("{} {}", date_str, time_str), "%Y-%m-%d %H:%M:%S")
            .unwrap()
    }

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn sample_store() -> InMemoryStampStore {
        InMemoryStampStore::new(vec![
            TimeStamp::new(2, StampKind::In, make_datetime("2016-02-29", "09:00:00")),
            TimeStamp::new(1, StampKind::Out, make_datetime("2016-02-29", "18:30:00")),
            TimeStamp::new(1, StampKind::In, make_datetime("2016-03-01", "08:00:00")),
            TimeStamp::new(1, StampKind::In, make_datetime("2016-02-29", "09:30:00")),
        ])
    }

    #[test]
    fn test_get_all_is_sorted() {
        let all = sample_store().get_all().unwrap();
        let mut sorted = all.clone();
        sorted.sort();
        assert_eq!(all, sorted);
        assert_eq!(all.len(), 4);
        assert_eq!(all[0].employee_id(), 1);
    }

    #[test]
    fn test_get_by_employee_filters_employee() {
        let stamps = sample_store().get_by_employee(1).unwrap();
        assert_eq!(stamps.len(), 3);
        assert!(stamps.iter().all(|s| s.employee_id() == 1));
    }

    #[test]
    fn test_get_by_employee_and_day_filters_both() {
        let stamps = sample_store()
            .get_by_employee_and_day(1, make_date("2016-02-29"))
            .unwrap();
        assert_eq!(
            stamps,
            vec![
                TimeStamp::new(1, StampKind::In, make_datetime("2016-02-29", "09:30:00")),
                TimeStamp::new(1, StampKind::Out, make_datetime("2016-02-29", "18:30:00")),
            ]
        );
    }

    #[test]
    fn test_unknown_employee_yields_empty() {
        let stamps = sample_store()
            .get_by_employee_and_day(99, make_date("2016-02-29"))
            .unwrap();
        assert!(stamps.is_empty());
    }
}
