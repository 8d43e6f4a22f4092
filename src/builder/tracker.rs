//! Builder for constructing gesture-stage trackers.

use crate::config::{ConfigError, TrackerConfig, TrackerSettings, DEFAULT_PERIOD_SECS};
use crate::core::{GestureStage, StageCodes};
use crate::effects::{GestureStageTracker, HandPoseSource, NotificationSink};
use std::time::Duration;

/// Builder for constructing trackers with a fluent API.
///
/// Nothing is validated until [`TrackerBuilder::build`], which reports
/// every configuration problem at once.
#[derive(Clone, Debug)]
pub struct TrackerBuilder {
    period_secs: f64,
    stages: Vec<GestureStage>,
    codes: Option<StageCodes>,
}

impl TrackerBuilder {
    /// Create a new builder with the default period and no stages.
    pub fn new() -> Self {
        Self {
            period_secs: DEFAULT_PERIOD_SECS,
            stages: Vec::new(),
            codes: None,
        }
    }

    /// Start from a loaded configuration.
    pub fn from_config(config: &TrackerConfig) -> Self {
        Self {
            period_secs: config.period_secs,
            stages: config.stages.clone(),
            codes: config.codes.clone(),
        }
    }

    /// Set the poll period.
    pub fn period(mut self, period: Duration) -> Self {
        self.period_secs = period.as_secs_f64();
        self
    }

    /// Set the poll period in seconds.
    pub fn period_secs(mut self, secs: f64) -> Self {
        self.period_secs = secs;
        self
    }

    /// Append one stage.
    pub fn stage(mut self, stage: GestureStage) -> Self {
        self.stages.push(stage);
        self
    }

    /// Append several stages in order.
    pub fn stages<I>(mut self, stages: I) -> Self
    where
        I: IntoIterator<Item = GestureStage>,
    {
        self.stages.extend(stages);
        self
    }

    /// Use a custom level-code table.
    pub fn codes(mut self, codes: StageCodes) -> Self {
        self.codes = Some(codes);
        self
    }

    /// Validate without building.
    pub fn settings(&self) -> Result<TrackerSettings, ConfigError> {
        TrackerSettings::new(self.period_secs, self.stages.clone(), self.codes.clone())
    }

    /// Build the tracker around its collaborators.
    /// Returns an error if the configuration is invalid.
    pub fn build<P, N>(self, source: P, sink: N) -> Result<GestureStageTracker<P, N>, ConfigError>
    where
        P: HandPoseSource,
        N: NotificationSink,
    {
        let settings = TrackerSettings::new(self.period_secs, self.stages, self.codes)?;
        Ok(GestureStageTracker::new(settings, source, sink))
    }
}

impl Default for TrackerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigViolation;
    use crate::core::{HandPose, Level};
    use crate::effects::Notification;

    #[test]
    fn builder_requires_stages() {
        let result = TrackerBuilder::new().build(None::<HandPose>, Vec::<Notification>::new());

        let err = result.err().unwrap();
        assert_eq!(err.violations(), &[ConfigViolation::EmptyStages]);
    }

    #[test]
    fn builder_rejects_zero_period() {
        let result = TrackerBuilder::new()
            .stage(GestureStage::any())
            .period(Duration::ZERO)
            .settings();

        assert!(matches!(
            result.unwrap_err().violations(),
            [ConfigViolation::InvalidPeriod { .. }]
        ));
    }

    #[test]
    fn fluent_api_builds_tracker() {
        let tracker = TrackerBuilder::new()
            .period(Duration::from_millis(50))
            .stage(GestureStage::exact(&HandPose::fist()))
            .stages([GestureStage::exact(&HandPose::open())])
            .build(None::<HandPose>, Vec::<Notification>::new())
            .unwrap();

        assert_eq!(tracker.level(), Level::Reset);
        assert_eq!(tracker.settings().stages().stage_count(), 2);
        assert_eq!(tracker.settings().period(), Duration::from_millis(50));
    }

    #[test]
    fn from_config_carries_every_field() {
        let mut config = TrackerConfig::new(vec![GestureStage::any()]);
        config.period_secs = 0.25;
        config.codes = Some(StageCodes {
            reset: "r".to_string(),
            stages: vec!["a".to_string()],
            completed: "z".to_string(),
        });

        let settings = TrackerBuilder::from_config(&config).settings().unwrap();

        assert_eq!(settings.period(), Duration::from_millis(250));
        assert_eq!(settings.codes().code_for(Level::Completed), Some("z"));
    }
}
