//! Repair of raw daily stamp sequences.
//!
//! Raw stamps from a store may lack a leading in-stamp or a trailing
//! out-stamp, contain duplicates, or contain runs of the same kind. The
//! repair runs in three ordered phases (leading stamp, trailing stamp,
//! internal alternation), each recording a notification for every
//! correction it applies.

mod corrector;
mod first_stamp;
mod last_stamp;
mod sequence;

pub use corrector::{CorrectedDay, DailyDataCorrector};
pub use first_stamp::repair_first_stamp;
pub use last_stamp::repair_last_stamp;
pub use sequence::repair_sequence;
