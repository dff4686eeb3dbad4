//! Configuration types for monthly time accounting.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files, together with the named
//! defaults the engine falls back to.

use chrono::{DateTime, FixedOffset, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Nominal monthly hours target.
pub const DEFAULT_MONTHLY_TARGET_HOURS: Decimal = Decimal::from_parts(160, 0, 0, false, 0);

/// Days in the normalized month the target is spread across.
pub const DEFAULT_NORMALIZED_MONTH_DAYS: u32 = 30;

/// First hour of the night window.
pub const DEFAULT_NIGHT_START_HOUR: u8 = 23;

/// Hour at which the night window closes (exclusive).
pub const DEFAULT_NIGHT_END_HOUR: u8 = 5;

/// Premium minutes credited per qualifying whole-hour step.
pub const DEFAULT_NIGHT_CREDIT_MINUTES: u32 = 10;

/// Metadata about the deployment, from `engine.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct EngineMetadata {
    /// Human-readable name of the configuration set.
    pub name: String,
    /// Version or effective date of the policy.
    pub version: String,
    /// Locale used by presentation for labels.
    #[serde(default = "default_locale")]
    pub locale: String,
    /// Offset of the users' local time from UTC, in minutes (`-180` for UTC-3).
    ///
    /// Decides which calendar day "today" is when a month page falls back to
    /// the current month.
    #[serde(default)]
    pub utc_offset_minutes: i32,
}

fn default_locale() -> String {
    "en".to_string()
}

impl EngineMetadata {
    /// Checks that the UTC offset is less than a day.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidConfig`] for an out-of-range offset.
    pub fn validate(&self) -> EngineResult<()> {
        self.utc_offset().map(|_| ())
    }

    /// The configured offset as a chrono [`FixedOffset`].
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidConfig`] when the offset is a day or more.
    pub fn utc_offset(&self) -> EngineResult<FixedOffset> {
        self.utc_offset_minutes
            .checked_mul(60)
            .and_then(FixedOffset::east_opt)
            .ok_or_else(|| invalid("utc_offset_minutes", "must be within one day of UTC"))
    }

    /// The users' calendar date at the instant `now`.
    ///
    /// ```
    /// use chrono::{NaiveDate, TimeZone, Utc};
    /// use shift_ledger::config::EngineMetadata;
    ///
    /// let metadata = EngineMetadata {
    ///     name: "sp".to_string(),
    ///     version: "1".to_string(),
    ///     locale: "pt-BR".to_string(),
    ///     utc_offset_minutes: -180,
    /// };
    /// let now = Utc.with_ymd_and_hms(2026, 5, 1, 1, 30, 0).unwrap();
    /// assert_eq!(metadata.local_date(now), NaiveDate::from_ymd_opt(2026, 4, 30).unwrap());
    /// ```
    pub fn local_date(&self, now: DateTime<Utc>) -> NaiveDate {
        match self.utc_offset() {
            Ok(offset) => now.with_timezone(&offset).date_naive(),
            Err(_) => now.date_naive(),
        }
    }
}

/// How non-accounting-day records reduce the working-day count.
///
/// # Example
///
/// ```
/// use shift_ledger::config::WorkingDayPolicy;
///
/// let policy: WorkingDayPolicy = serde_yaml::from_str("count").unwrap();
/// assert_eq!(policy, WorkingDayPolicy::Count);
/// assert_eq!(WorkingDayPolicy::default(), WorkingDayPolicy::Span);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkingDayPolicy {
    /// Each overlapping record subtracts exactly one day.
    Count,
    /// Each overlapping record subtracts its full inclusive day span.
    #[default]
    Span,
}

impl std::fmt::Display for WorkingDayPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WorkingDayPolicy::Count => write!(f, "count"),
            WorkingDayPolicy::Span => write!(f, "span"),
        }
    }
}

/// Expected-hours rate: `monthly_target_hours / normalized_month_days` per working day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExpectedHoursConfig {
    /// The nominal monthly target (160).
    pub monthly_target_hours: Decimal,
    /// The normalized month length (30).
    pub normalized_month_days: u32,
}

impl Default for ExpectedHoursConfig {
    fn default() -> Self {
        Self {
            monthly_target_hours: DEFAULT_MONTHLY_TARGET_HOURS,
            normalized_month_days: DEFAULT_NORMALIZED_MONTH_DAYS,
        }
    }
}

impl ExpectedHoursConfig {
    /// The average expected hours per working day.
    pub fn daily_rate(&self) -> Decimal {
        if self.normalized_month_days == 0 {
            return Decimal::ZERO;
        }
        self.monthly_target_hours / Decimal::from(self.normalized_month_days)
    }
}

/// Night window `[start_hour, end_hour)` and the credit per qualifying hour.
///
/// The window wraps across midnight when `start_hour > end_hour`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NightPremiumConfig {
    /// First hour inside the window.
    pub start_hour: u8,
    /// First hour after the window.
    pub end_hour: u8,
    /// Minutes credited per qualifying whole-hour step.
    pub credit_minutes: u32,
}

impl Default for NightPremiumConfig {
    fn default() -> Self {
        Self {
            start_hour: DEFAULT_NIGHT_START_HOUR,
            end_hour: DEFAULT_NIGHT_END_HOUR,
            credit_minutes: DEFAULT_NIGHT_CREDIT_MINUTES,
        }
    }
}

/// Working-day counting settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkingDaysConfig {
    /// The counting policy, chosen once for the whole application.
    pub policy: WorkingDayPolicy,
}

/// All tunable policy values, from `policy.yaml`.
///
/// Every section is optional in YAML and falls back to the named defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Expected-hours rate.
    pub expected_hours: ExpectedHoursConfig,
    /// Night premium window and quantum.
    pub night_premium: NightPremiumConfig,
    /// Working-day policy.
    pub working_days: WorkingDaysConfig,
}

impl EngineConfig {
    /// Creates the default configuration with a different working-day policy.
    pub fn with_policy(policy: WorkingDayPolicy) -> Self {
        Self {
            working_days: WorkingDaysConfig { policy },
            ..Self::default()
        }
    }

    /// Checks that every value is in range.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidConfig`] naming the first offending field.
    pub fn validate(&self) -> EngineResult<()> {
        if self.expected_hours.monthly_target_hours.is_sign_negative() {
            return Err(invalid(
                "expected_hours.monthly_target_hours",
                "must not be negative",
            ));
        }
        if self.expected_hours.normalized_month_days == 0 {
            return Err(invalid(
                "expected_hours.normalized_month_days",
                "must be greater than zero",
            ));
        }
        if self.night_premium.start_hour > 23 {
            return Err(invalid(
                "night_premium.start_hour",
                "must be between 0 and 23",
            ));
        }
        if self.night_premium.end_hour > 23 {
            return Err(invalid("night_premium.end_hour", "must be between 0 and 23"));
        }
        if self.night_premium.credit_minutes > 60 {
            return Err(invalid(
                "night_premium.credit_minutes",
                "must not exceed 60 minutes per hour",
            ));
        }
        Ok(())
    }
}

fn invalid(field: &str, message: &str) -> EngineError {
    EngineError::InvalidConfig {
        field: field.to_string(),
        message: message.to_string(),
    }
}

/// The complete configuration loaded from a directory.
#[derive(Debug, Clone)]
pub struct LedgerConfig {
    metadata: EngineMetadata,
    engine: EngineConfig,
}

impl LedgerConfig {
    /// Creates a LedgerConfig from its component parts.
    pub fn new(metadata: EngineMetadata, engine: EngineConfig) -> Self {
        Self { metadata, engine }
    }

    /// Returns the deployment metadata.
    pub fn metadata(&self) -> &EngineMetadata {
        &self.metadata
    }

    /// Returns the policy configuration.
    pub fn engine(&self) -> &EngineConfig {
        &self.engine
    }
}
