//! Level-to-code table handed to notification sinks.

use super::level::Level;
use serde::{Deserialize, Serialize};

/// Default code emitted when the tracker resets.
pub const DEFAULT_RESET_CODE: &str = "reset";

/// Default code emitted when the last stage is passed.
pub const DEFAULT_COMPLETED_CODE: &str = "complete";

/// Opaque string code for every level of a stage sequence.
///
/// Sinks treat codes as identifiers (a serial device might map them to
/// single bytes, an audio layer to clips). The tracker only looks them up.
///
/// # Example
///
/// ```rust
/// use gesture_stage::core::{Level, StageCodes};
///
/// let codes = StageCodes::numbered(2);
/// assert_eq!(codes.code_for(Level::Reset), Some("reset"));
/// assert_eq!(codes.code_for(Level::Stage(1)), Some("stage-1"));
/// assert_eq!(codes.code_for(Level::Completed), Some("complete"));
/// ```
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct StageCodes {
    /// Code for [`Level::Reset`].
    pub reset: String,
    /// One code per stage, indexed like the stage sequence.
    pub stages: Vec<String>,
    /// Code for [`Level::Completed`].
    pub completed: String,
}

impl StageCodes {
    /// Default table: `reset`, `stage-0` .. `stage-{N-1}`, `complete`.
    pub fn numbered(stage_count: usize) -> Self {
        Self {
            reset: DEFAULT_RESET_CODE.to_string(),
            stages: (0..stage_count).map(|l| format!("stage-{l}")).collect(),
            completed: DEFAULT_COMPLETED_CODE.to_string(),
        }
    }

    /// Code for `level`, or `None` for a stage index the table doesn't cover.
    pub fn code_for(&self, level: Level) -> Option<&str> {
        match level {
            Level::Reset => Some(self.reset.as_str()),
            Level::Stage(l) => self.stages.get(l).map(String::as_str),
            Level::Completed => Some(self.completed.as_str()),
        }
    }

    /// Every code in level order, reset first.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.reset.as_str())
            .chain(self.stages.iter().map(String::as_str))
            .chain(std::iter::once(self.completed.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbered_codes_are_distinct() {
        let codes = StageCodes::numbered(3);
        let all: Vec<&str> = codes.iter().collect();

        assert_eq!(all, ["reset", "stage-0", "stage-1", "stage-2", "complete"]);
    }

    #[test]
    fn stage_outside_table_has_no_code() {
        let codes = StageCodes::numbered(1);
        assert_eq!(codes.code_for(Level::Stage(1)), None);
    }

    #[test]
    fn custom_codes_deserialize() {
        let json = r#"{"reset": "0", "stages": ["1", "2"], "completed": "3"}"#;
        let codes: StageCodes = serde_json::from_str(json).unwrap();

        assert_eq!(codes.code_for(Level::Stage(0)), Some("1"));
        assert_eq!(codes.code_for(Level::Completed), Some("3"));
    }
}
