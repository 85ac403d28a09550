//! The result envelope returned by every report.

use serde::Serialize;

use super::{Notification, Severity};

/// The outcome of a single report request.
///
/// Carries the computed value, whether the computation succeeded, and the
/// notifications recorded while the day's stamps were collected and
/// repaired. A fresh envelope is built for every request.
///
/// # Example
///
/// ```
/// use stamp_reports::models::{Notification, ReportResult, Severity};
///
/// let report = ReportResult::success(3_u32, vec![Notification::warning("duplicate stamp removed")]);
/// assert!(report.succeeded);
/// assert_eq!(report.notifications_of(Severity::Warning).len(), 1);
/// assert!(!report.has_errors());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportResult<T> {
    /// The computed value. Meaningless when `succeeded` is false.
    pub result: T,
    /// Whether the value could be computed.
    pub succeeded: bool,
    /// The audit trail, in the order corrections were decided.
    pub notifications: Vec<Notification>,
}

impl<T> ReportResult<T> {
    /// A successful report carrying `result`.
    pub fn success(result: T, notifications: Vec<Notification>) -> Self {
        Self {
            result,
            succeeded: true,
            notifications,
        }
    }

    /// A failed report; `result` is the placeholder value returned to callers.
    pub fn failure(result: T, notifications: Vec<Notification>) -> Self {
        Self {
            result,
            succeeded: false,
            notifications,
        }
    }

    /// Notifications with the given severity, in recorded order.
    pub fn notifications_of(&self, severity: Severity) -> Vec<&Notification> {
        self.notifications
            .iter()
            .filter(|n| n.severity == severity)
            .collect()
    }

    /// Whether any [`Severity::Error`] notification was recorded.
    pub fn has_errors(&self) -> bool {
        self.notifications
            .iter()
            .any(|n| n.severity == Severity::Error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_is_not_succeeded() {
        let report = ReportResult::failure(0_u64, vec![Notification::error("store offline")]);
        assert!(!report.succeeded);
        assert!(report.has_errors());
    }

    #[test]
    fn test_notifications_of_keeps_order() {
        let report = ReportResult::success(
            (),
            vec![
                Notification::warning("first"),
                Notification::message("between"),
                Notification::warning("second"),
            ],
        );

        let warnings: Vec<&str> = report
            .notifications_of(Severity::Warning)
            .iter()
            .map(|n| n.message.as_str())
            .collect();
        assert_eq!(warnings, vec!["first", "second"]);
    }
}
