//! Configuration types for stamp reporting.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use chrono::{Duration, NaiveTime};
use serde::Deserialize;

use crate::models::TimeStamp;

/// Tunables of the stamp repair heuristics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct CorrectionPolicy {
    /// Latest time on the following day at which an out-stamp is still
    /// taken as the end of an overnight shift.
    #[serde(default = "default_next_day_cutoff")]
    pub next_day_cutoff: NaiveTime,
}

impl Default for CorrectionPolicy {
    fn default() -> Self {
        Self {
            next_day_cutoff: default_next_day_cutoff(),
        }
    }
}

fn default_next_day_cutoff() -> NaiveTime {
    NaiveTime::from_hms_opt(4, 0, 0).expect("Valid cutoff time")
}

fn default_max_respite_minutes() -> i64 {
    15
}

/// Reporting configuration from reporting.yaml.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ReportingConfig {
    /// Stamp repair settings.
    #[serde(default)]
    pub correction: CorrectionPolicy,
    /// Respite threshold used when a caller does not supply one.
    #[serde(default = "default_max_respite_minutes")]
    pub default_max_respite_minutes: i64,
}

impl ReportingConfig {
    /// The default respite threshold as a duration.
    pub fn default_max_respite(&self) -> Duration {
        Duration::minutes(self.default_max_respite_minutes)
    }
}

impl Default for ReportingConfig {
    fn default() -> Self {
        Self {
            correction: CorrectionPolicy::default(),
            default_max_respite_minutes: default_max_respite_minutes(),
        }
    }
}

/// Seed stamps file structure (stamps.yaml).
#[derive(Debug, Clone, Deserialize)]
pub struct StampsFile {
    /// The stamps to load, in any order.
    pub stamps: Vec<TimeStamp>,
}
