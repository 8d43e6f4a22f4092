//! Fingers, per-finger requirements and observed hand poses.
//!
//! These are the plain values the stage matcher works on. Nothing here
//! talks to a tracking device; a [`HandPose`] is just a snapshot of which
//! fingers were extended at one observation.

use serde::{Deserialize, Serialize};

/// Number of fingers on one hand.
pub const FINGER_COUNT: usize = 5;

/// The five fingers of one hand, in thumb-to-pinky order.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Finger {
    Thumb,
    Index,
    Middle,
    Ring,
    Pinky,
}

impl Finger {
    /// All fingers in index order.
    pub const ALL: [Finger; FINGER_COUNT] = [
        Finger::Thumb,
        Finger::Index,
        Finger::Middle,
        Finger::Ring,
        Finger::Pinky,
    ];

    /// Position of this finger in a five-element array (0-4).
    pub fn index(self) -> usize {
        self as usize
    }

    /// Lowercase name for logs and config files.
    pub fn name(self) -> &'static str {
        match self {
            Self::Thumb => "thumb",
            Self::Index => "index",
            Self::Middle => "middle",
            Self::Ring => "ring",
            Self::Pinky => "pinky",
        }
    }
}

/// What a gesture stage expects of a single finger.
///
/// # Example
///
/// ```rust
/// use gesture_stage::core::FingerRequirement;
///
/// assert!(FingerRequirement::Extended.is_satisfied_by(true));
/// assert!(!FingerRequirement::Extended.is_satisfied_by(false));
/// assert!(FingerRequirement::NotExtended.is_satisfied_by(false));
/// assert!(FingerRequirement::Either.is_satisfied_by(true));
/// assert!(FingerRequirement::Either.is_satisfied_by(false));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FingerRequirement {
    /// The finger must be extended.
    Extended,
    /// The finger must be curled.
    NotExtended,
    /// Don't care.
    Either,
}

impl FingerRequirement {
    /// Every requirement variant.
    pub const ALL: [FingerRequirement; 3] = [
        FingerRequirement::Extended,
        FingerRequirement::NotExtended,
        FingerRequirement::Either,
    ];

    /// Check one observed finger against this requirement (pure).
    pub fn is_satisfied_by(self, extended: bool) -> bool {
        match self {
            Self::Extended => extended,
            Self::NotExtended => !extended,
            Self::Either => true,
        }
    }

    /// The requirement that is satisfied only by the given observation.
    pub fn exactly(extended: bool) -> Self {
        if extended {
            Self::Extended
        } else {
            Self::NotExtended
        }
    }
}

/// Extension state of all five fingers at one observation.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct HandPose {
    extended: [bool; FINGER_COUNT],
}

impl HandPose {
    /// Build a pose from per-finger extension flags, thumb first.
    pub const fn new(extended: [bool; FINGER_COUNT]) -> Self {
        Self { extended }
    }

    /// Build a pose from the low five bits of `bits`; bit `i` is finger `i`.
    pub fn from_bits(bits: u8) -> Self {
        let mut extended = [false; FINGER_COUNT];
        for finger in Finger::ALL {
            extended[finger.index()] = bits & (1 << finger.index()) != 0;
        }
        Self { extended }
    }

    /// A closed fist.
    pub const fn fist() -> Self {
        Self::new([false; FINGER_COUNT])
    }

    /// An open hand.
    pub const fn open() -> Self {
        Self::new([true; FINGER_COUNT])
    }

    pub fn is_extended(&self, finger: Finger) -> bool {
        self.extended[finger.index()]
    }

    /// Per-finger extension flags, thumb first.
    pub fn extended(&self) -> [bool; FINGER_COUNT] {
        self.extended
    }

    /// Number of extended fingers.
    pub fn extended_count(&self) -> usize {
        self.extended.iter().filter(|&&e| e).count()
    }
}

impl From<[bool; FINGER_COUNT]> for HandPose {
    fn from(extended: [bool; FINGER_COUNT]) -> Self {
        Self::new(extended)
    }
}
