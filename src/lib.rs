//! Daily reports over employee in/out time stamps.
//!
//! Raw stamps for a day are repaired into a strictly alternating in/out
//! sequence, recording a notification for every correction, and then
//! reduced into the worked time or the list of short respites of the day.

#![warn(missing_docs)]

pub mod api;
pub mod config;
pub mod correction;
pub mod error;
pub mod models;
pub mod reports;
pub mod store;
