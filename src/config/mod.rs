//! Configuration loading and management for the shift ledger.
//!
//! This module provides functionality to load the accounting policy from YAML
//! files: the expected-hours rate, the night premium window and quantum, and
//! the working-day counting policy.
//!
//! # Example
//!
//! ```no_run
//! use shift_ledger::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default").unwrap();
//! println!("Working-day policy: {}", config.working_day_policy());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    DEFAULT_MONTHLY_TARGET_HOURS, DEFAULT_NIGHT_CREDIT_MINUTES, DEFAULT_NIGHT_END_HOUR,
    DEFAULT_NIGHT_START_HOUR, DEFAULT_NORMALIZED_MONTH_DAYS, EngineConfig, EngineMetadata,
    ExpectedHoursConfig, LedgerConfig, NightPremiumConfig, WorkingDayPolicy, WorkingDaysConfig,
};
