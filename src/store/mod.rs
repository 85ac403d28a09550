//! Sources of raw employee stamps.
//!
//! The reporting core only reads from a [`StampStore`]; corrected data is
//! never written back.

mod memory;

pub use memory::InMemoryStampStore;

use chrono::NaiveDate;

use crate::error::EngineResult;
use crate::models::TimeStamp;

/// A read-only source of employee time stamps.
///
/// Implementations must return stamps sorted by employee, time, and kind
/// (the [`TimeStamp`] ordering).
pub trait StampStore: Send + Sync {
    /// Every stamp in the store.
    fn get_all(&self) -> EngineResult<Vec<TimeStamp>>;

    /// Every stamp of one employee.
    fn get_by_employee(&self, employee_id: u32) -> EngineResult<Vec<TimeStamp>>;

    /// The stamps of one employee whose time falls on `day`.
    fn get_by_employee_and_day(
        &self,
        employee_id: u32,
        day: NaiveDate,
    ) -> EngineResult<Vec<TimeStamp>>;
}
