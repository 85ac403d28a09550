//! The report engine.
//!
//! Reports are computed over a day's stamps after they were repaired by
//! the [`correction`](crate::correction) module, so every computation can
//! rely on a strictly alternating in/out sequence.

mod manager;
mod respites;
mod worked_time;

pub use manager::DailyReportsManager;
pub use respites::find_respites;
pub use worked_time::worked_time;
