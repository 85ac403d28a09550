//! Notifications recorded while collecting and repairing stamps.
//!
//! Notifications form the audit trail of a report: every correction the
//! corrector applies is appended in the order it was decided.

use serde::{Deserialize, Serialize};

/// Message recorded when the day has no in-stamp at its start.
pub const FIRST_IN_STAMP_NOT_FOUND: &str = "first in-stamp not found";
/// Message recorded when midnight is used as the first in-stamp.
pub const BEGIN_OF_DAY_INSERTED: &str = "begin of day inserted as first in-stamp";
/// Message recorded when the day has no out-stamp at its end.
pub const LAST_OUT_STAMP_NOT_FOUND: &str = "last out-stamp not found";
/// Message recorded when an early next-day out-stamp closes the day.
pub const NEXT_DAY_OUT_STAMP_ADOPTED: &str = "next day's out-stamp adopted as last";
/// Message recorded when 23:59:59 is used as the last out-stamp.
pub const END_OF_DAY_INSERTED: &str = "end of day inserted as last out-stamp";
/// Message recorded when an exact duplicate stamp is dropped.
pub const DUPLICATE_STAMP_REMOVED: &str = "duplicate stamp removed";
/// Message recorded when a same-type run is split by a synthetic stamp.
pub const SYNTHETIC_STAMP_INSERTED: &str = "synthetic stamp inserted between same-type run";
/// Message recorded when the day has no stamps at all.
pub const NO_STAMPS_FOR_DAY: &str = "no stamps found for day";
/// Prefix of the message recorded when the stamp store fails.
pub const STAMPS_NOT_READABLE: &str = "stamps could not be read from the store";

/// How serious a notification is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// An unrecoverable condition; the report cannot be computed.
    Error,
    /// A heuristic correction was applied to the data.
    Warning,
    /// Informational.
    Message,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "Error"),
            Severity::Warning => write!(f, "Warning"),
            Severity::Message => write!(f, "Message"),
        }
    }
}

/// A single audit-trail entry.
///
/// # Example
///
/// ```
/// use stamp_reports::models::{Notification, Severity};
///
/// let note = Notification::warning("duplicate stamp removed");
/// assert_eq!(note.severity, Severity::Warning);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    /// Human-readable description of what happened.
    pub message: String,
    /// How serious the event was.
    pub severity: Severity,
}

impl Notification {
    /// Creates a notification with the given severity.
    pub fn new(message: impl Into<String>, severity: Severity) -> Self {
        Self {
            message: message.into(),
            severity,
        }
    }

    /// Creates an [`Severity::Error`] notification.
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, Severity::Error)
    }

    /// Creates a [`Severity::Warning`] notification.
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(message, Severity::Warning)
    }

    /// Creates a [`Severity::Message`] notification.
    pub fn message(message: impl Into<String>) -> Self {
        Self::new(message, Severity::Message)
    }
}
