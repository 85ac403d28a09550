//! Daily reports over a stamp store.

use chrono::{Duration, NaiveDate};
use tracing::{debug, warn};

use crate::config::CorrectionPolicy;
use crate::correction::{CorrectedDay, DailyDataCorrector};
use crate::error::{EngineError, EngineResult};
use crate::models::notification::NO_STAMPS_FOR_DAY;
use crate::models::{Notification, ReportResult, Respite, Severity};
use crate::store::StampStore;

use super::{find_respites, worked_time};

/// Makes daily reports for employees from the stamps in a [`StampStore`].
///
/// Every report collects and repairs the day's stamps afresh; nothing is
/// cached and nothing is written back to the store.
///
/// # Example
///
/// ```
/// use stamp_reports::config::CorrectionPolicy;
/// use stamp_reports::models::{StampKind, TimeStamp};
/// use stamp_reports::reports::DailyReportsManager;
/// use stamp_reports::store::InMemoryStampStore;
/// use chrono::{Duration, NaiveDate};
///
/// let day = NaiveDate::from_ymd_opt(2016, 2, 29).unwrap();
/// let store = InMemoryStampStore::new(vec![
///     TimeStamp::new(1, StampKind::Out, day.and_hms_opt(9, 0, 0).unwrap()),
/// ]);
///
/// let manager = DailyReportsManager::new(&store, CorrectionPolicy::default());
/// let report = manager.worked_time_for_day(1, day);
/// assert!(report.succeeded);
/// assert_eq!(report.result, Duration::hours(9));
/// ```
pub struct DailyReportsManager<'a, S: StampStore + ?Sized> {
    corrector: DailyDataCorrector<'a, S>,
}

impl<'a, S: StampStore + ?Sized> DailyReportsManager<'a, S> {
    /// Creates a manager reading from `store`.
    pub fn new(store: &'a S, policy: CorrectionPolicy) -> Self {
        Self {
            corrector: DailyDataCorrector::new(store, policy),
        }
    }

    /// Total time `employee_id` worked on `day`.
    ///
    /// Fails (with a zero duration) only if an error notification was
    /// recorded while collecting the stamps.
    pub fn worked_time_for_day(&self, employee_id: u32, day: NaiveDate) -> ReportResult<Duration> {
        let CorrectedDay {
            stamps,
            mut notifications,
        } = match self.collect(employee_id, day) {
            Ok(corrected) => corrected,
            Err(notifications) => return ReportResult::failure(Duration::zero(), notifications),
        };

        if stamps.is_empty() {
            notifications.push(Notification::message(NO_STAMPS_FOR_DAY));
            return ReportResult::success(Duration::zero(), notifications);
        }

        let total = worked_time(&stamps);
        debug!(employee_id, %day, worked_seconds = total.num_seconds(), "Worked time computed");
        ReportResult::success(total, notifications)
    }

    /// Respites of `employee_id` on `day` lasting at most `max_duration`.
    ///
    /// Returns [`EngineError::InvalidArgument`] for a negative
    /// `max_duration`. Otherwise behaves like
    /// [`worked_time_for_day`](Self::worked_time_for_day) with respect to
    /// failures and empty days.
    pub fn respites_for_day(
        &self,
        employee_id: u32,
        day: NaiveDate,
        max_duration: Duration,
    ) -> EngineResult<ReportResult<Vec<Respite>>> {
        if max_duration < Duration::zero() {
            return Err(EngineError::invalid_argument(
                "max_duration",
                format!("must not be negative, got {}", max_duration),
            ));
        }

        let CorrectedDay {
            stamps,
            mut notifications,
        } = match self.collect(employee_id, day) {
            Ok(corrected) => corrected,
            Err(notifications) => return Ok(ReportResult::failure(Vec::new(), notifications)),
        };

        if stamps.is_empty() {
            notifications.push(Notification::message(NO_STAMPS_FOR_DAY));
            return Ok(ReportResult::success(Vec::new(), notifications));
        }

        let respites = find_respites(&stamps, max_duration);
        debug!(employee_id, %day, respites = respites.len(), "Respites found");
        Ok(ReportResult::success(respites, notifications))
    }

    /// Runs the corrector, handing back only the notifications if any of
    /// them is an error.
    fn collect(
        &self,
        employee_id: u32,
        day: NaiveDate,
    ) -> Result<CorrectedDay, Vec<Notification>> {
        let corrected = self.corrector.collect_and_repair(employee_id, day);
        if corrected
            .notifications
            .iter()
            .any(|n| n.severity == Severity::Error)
        {
            warn!(employee_id, %day, "Report aborted on unrecoverable stamp data");
            return Err(corrected.notifications);
        }
        Ok(corrected)
    }
}
