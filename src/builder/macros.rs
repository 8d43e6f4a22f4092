//! Macros for ergonomic stage declaration.

/// Declare a [`GestureStage`](crate::core::GestureStage) from five
/// `FingerRequirement` variant names, thumb first.
///
/// Anything other than exactly five requirements fails to compile.
///
/// # Example
///
/// ```
/// use gesture_stage::core::{Finger, FingerRequirement};
/// use gesture_stage::gesture_stage;
///
/// let point = gesture_stage![NotExtended, Extended, NotExtended, NotExtended, Either];
///
/// assert_eq!(point.requirement(Finger::Index), FingerRequirement::Extended);
/// assert_eq!(point.requirement(Finger::Pinky), FingerRequirement::Either);
/// ```
#[macro_export]
macro_rules! gesture_stage {
    ($thumb:ident, $index:ident, $middle:ident, $ring:ident, $pinky:ident $(,)?) => {
        $crate::core::GestureStage::new([
            $crate::core::FingerRequirement::$thumb,
            $crate::core::FingerRequirement::$index,
            $crate::core::FingerRequirement::$middle,
            $crate::core::FingerRequirement::$ring,
            $crate::core::FingerRequirement::$pinky,
        ])
    };
}

/// Declare a list of stages, one bracketed group per stage.
///
/// # Example
///
/// ```
/// use gesture_stage::gesture_stages;
///
/// let stages = gesture_stages![
///     [NotExtended, Extended, NotExtended, NotExtended, NotExtended],
///     [NotExtended, Extended, Extended, Extended, Extended],
/// ];
///
/// assert_eq!(stages.len(), 2);
/// ```
#[macro_export]
macro_rules! gesture_stages {
    ($([$($req:ident),+ $(,)?]),* $(,)?) => {
        vec![$($crate::gesture_stage!($($req),+)),*]
    };
}
