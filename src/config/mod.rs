//! Configuration loading and management for stamp reporting.
//!
//! This module loads the correction policy, the default respite threshold
//! and optional seed stamps from YAML files.
//!
//! # Example
//!
//! ```no_run
//! use stamp_reports::config::ConfigLoader;
//!
//! let loader = ConfigLoader::load("./config/default").unwrap();
//! println!("Default respite: {} min", loader.config().default_max_respite_minutes);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{CorrectionPolicy, ReportingConfig, StampsFile};
