//! Collection and repair of one employee's stamps for one day.

use chrono::NaiveDate;
use tracing::{debug, error};

use crate::config::CorrectionPolicy;
use crate::error::EngineError;
use crate::models::notification::STAMPS_NOT_READABLE;
use crate::models::{Notification, TimeStamp};
use crate::store::StampStore;

use super::{repair_first_stamp, repair_last_stamp, repair_sequence};

/// A day's stamps after repair, with the notifications describing the repair.
///
/// `stamps` is empty or starts with an in-stamp, ends with an out-stamp
/// and alternates in between.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorrectedDay {
    /// The repaired stamps.
    pub stamps: Vec<TimeStamp>,
    /// Notifications in the order the corrections were decided.
    pub notifications: Vec<Notification>,
}

/// Fetches raw stamps from a [`StampStore`] and repairs them.
///
/// The corrector keeps no state between calls; the store is queried for
/// the requested day and, only when the day lacks a final out-stamp, for
/// the day after.
///
/// # Example
///
/// ```
/// use stamp_reports::config::CorrectionPolicy;
/// use stamp_reports::correction::DailyDataCorrector;
/// use stamp_reports::models::{StampKind, TimeStamp};
/// use stamp_reports::store::InMemoryStampStore;
/// use chrono::NaiveDate;
///
/// let day = NaiveDate::from_ymd_opt(2016, 2, 29).unwrap();
/// let store = InMemoryStampStore::new(vec![
///     TimeStamp::new(1, StampKind::Out, day.and_hms_opt(9, 0, 0).unwrap()),
/// ]);
///
/// let corrector = DailyDataCorrector::new(&store, CorrectionPolicy::default());
/// let corrected = corrector.collect_and_repair(1, day);
/// assert_eq!(corrected.stamps.len(), 2);
/// assert_eq!(corrected.stamps[0].kind(), StampKind::In);
/// ```
pub struct DailyDataCorrector<'a, S: StampStore + ?Sized> {
    store: &'a S,
    policy: CorrectionPolicy,
}

impl<'a, S: StampStore + ?Sized> DailyDataCorrector<'a, S> {
    /// Creates a corrector reading from `store`.
    pub fn new(store: &'a S, policy: CorrectionPolicy) -> Self {
        Self { store, policy }
    }

    /// Collects the stamps of `employee_id` for `day` and repairs them.
    ///
    /// A day without stamps yields an empty sequence and no notifications.
    /// If the store fails, the failure is recorded as an error notification
    /// and the returned sequence is empty.
    pub fn collect_and_repair(&self, employee_id: u32, day: NaiveDate) -> CorrectedDay {
        let mut notifications = Vec::new();

        let stamps = match self.store.get_by_employee_and_day(employee_id, day) {
            Ok(stamps) => stamps,
            Err(err) => return Self::store_failure(employee_id, day, err, notifications),
        };

        if stamps.is_empty() {
            debug!(employee_id, %day, "No stamps for day");
            return CorrectedDay {
                stamps,
                notifications,
            };
        }

        let stamps = repair_first_stamp(stamps, employee_id, day, &mut notifications);

        let next_day_stamps =
            |next_day: NaiveDate| self.store.get_by_employee_and_day(employee_id, next_day);
        let stamps = match repair_last_stamp(
            stamps,
            employee_id,
            day,
            self.policy.next_day_cutoff,
            next_day_stamps,
            &mut notifications,
        ) {
            Ok(stamps) => stamps,
            Err(err) => return Self::store_failure(employee_id, day, err, notifications),
        };

        let stamps = repair_sequence(stamps, &mut notifications);

        debug!(
            employee_id,
            %day,
            stamps = stamps.len(),
            corrections = notifications.len(),
            "Stamps collected and repaired"
        );

        CorrectedDay {
            stamps,
            notifications,
        }
    }

    fn store_failure(
        employee_id: u32,
        day: NaiveDate,
        err: EngineError,
        mut notifications: Vec<Notification>,
    ) -> CorrectedDay {
        error!(employee_id, %day, error = %err, "Stamp store failed");
        notifications.push(Notification::error(format!("{}: {}", STAMPS_NOT_READABLE, err)));
        CorrectedDay {
            stamps: Vec::new(),
            notifications,
        }
    }
}
