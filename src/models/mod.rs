//! Core data models for the stamp reporting system.
//!
//! This module contains all the domain models used throughout the crate.

pub mod notification;
mod report_result;
mod respite;
mod time_stamp;

pub use notification::{Notification, Severity};
pub use report_result::ReportResult;
pub use respite::Respite;
pub use time_stamp::{StampKind, TimeStamp};
