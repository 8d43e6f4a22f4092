//! Tracker configuration and validation.
//!
//! [`TrackerConfig`] is the serializable form (JSON on disk).
//! [`TrackerSettings`] is the validated form a tracker is built from.
//!
//! Validation uses Stillwater's `Validation` type so that every problem
//! in a configuration is reported at once rather than one per attempt.
//!
//! # Example
//!
//! ```rust
//! use gesture_stage::config::TrackerConfig;
//!
//! let config = TrackerConfig::from_json(r#"{
//!     "period_secs": 0.05,
//!     "stages": [
//!         ["not-extended", "extended", "not-extended", "not-extended", "not-extended"],
//!         ["not-extended", "extended", "extended", "extended", "extended"]
//!     ]
//! }"#).unwrap();
//!
//! let settings = config.settings().unwrap();
//! assert_eq!(settings.stages().stage_count(), 2);
//! assert_eq!(settings.period().as_millis(), 50);
//! ```

pub mod error;

pub use error::{ConfigError, ConfigViolation};

use crate::core::{GestureStage, StageCodes, StageSequence};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::time::Duration;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Default poll period in seconds.
pub const DEFAULT_PERIOD_SECS: f64 = 0.1;

type Check = Validation<(), NonEmptyVec<ConfigViolation>>;

fn default_period_secs() -> f64 {
    DEFAULT_PERIOD_SECS
}

/// Serializable tracker configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TrackerConfig {
    /// Seconds between poll ticks.
    #[serde(default = "default_period_secs")]
    pub period_secs: f64,

    /// Stages in the order they must be performed.
    pub stages: Vec<GestureStage>,

    /// Level codes; numbered defaults when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub codes: Option<StageCodes>,
}

impl TrackerConfig {
    /// Configuration with the default period and numbered codes.
    pub fn new(stages: Vec<GestureStage>) -> Self {
        Self {
            period_secs: DEFAULT_PERIOD_SECS,
            stages,
            codes: None,
        }
    }

    /// Parse a JSON document and validate it.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.settings()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Validate and convert into [`TrackerSettings`].
    pub fn settings(&self) -> Result<TrackerSettings, ConfigError> {
        TrackerSettings::new(self.period_secs, self.stages.clone(), self.codes.clone())
    }
}

/// Validated tracker settings.
///
/// Only obtainable through [`TrackerSettings::new`], so holding one means
/// the period is positive, there is at least one stage and the code table
/// has a distinct code for every level.
#[derive(Clone, Debug, PartialEq)]
pub struct TrackerSettings {
    period: Duration,
    stages: StageSequence,
    codes: StageCodes,
}

impl TrackerSettings {
    /// Validate raw settings, accumulating ALL violations.
    pub fn new(
        period_secs: f64,
        stages: Vec<GestureStage>,
        codes: Option<StageCodes>,
    ) -> Result<Self, ConfigError> {
        let codes = codes.unwrap_or_else(|| StageCodes::numbered(stages.len()));

        let checks: Vec<Check> = vec![
            check_period(period_secs),
            check_stages(&stages),
            check_code_count(&codes, stages.len()),
            check_distinct_codes(&codes),
        ];

        match Validation::all_vec(checks) {
            Validation::Success(_) => {}
            Validation::Failure(violations) => {
                return Err(ConfigError::Invalid(violations.iter().cloned().collect()));
            }
        }

        Ok(Self {
            period: period_from_secs(period_secs),
            stages: StageSequence::new(stages)?,
            codes,
        })
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn stages(&self) -> &StageSequence {
        &self.stages
    }

    pub fn codes(&self) -> &StageCodes {
        &self.codes
    }
}

fn period_from_secs(secs: f64) -> Duration {
    Duration::try_from_secs_f64(secs).unwrap_or(Duration::ZERO)
}

fn check_period(secs: f64) -> Check {
    if secs.is_finite() && period_from_secs(secs) > Duration::ZERO {
        Validation::success(())
    } else {
        Validation::fail(ConfigViolation::InvalidPeriod { secs })
    }
}

fn check_stages(stages: &[GestureStage]) -> Check {
    if stages.is_empty() {
        Validation::fail(ConfigViolation::EmptyStages)
    } else {
        Validation::success(())
    }
}

fn check_code_count(codes: &StageCodes, stage_count: usize) -> Check {
    if codes.stages.len() == stage_count {
        Validation::success(())
    } else {
        Validation::fail(ConfigViolation::CodeCountMismatch {
            expected: stage_count,
            found: codes.stages.len(),
        })
    }
}

fn check_distinct_codes(codes: &StageCodes) -> Check {
    let mut seen = HashSet::new();
    for code in codes.iter() {
        if !seen.insert(code) {
            return Validation::fail(ConfigViolation::DuplicateCode {
                code: code.to_string(),
            });
        }
    }
    Validation::success(())
}
