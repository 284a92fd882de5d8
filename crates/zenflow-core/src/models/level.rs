use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// A validated stress level in `1..=5`.
///
/// Records coming back from the server carry a raw integer; this type is
/// what input screens hand to the transport once the user has picked a
/// button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct StressLevel(u8);

impl StressLevel {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    /// Every level in ascending order, as rendered on the level picker.
    pub const ALL: [StressLevel; 5] = [
        StressLevel(1),
        StressLevel(2),
        StressLevel(3),
        StressLevel(4),
        StressLevel(5),
    ];

    pub fn new(value: u8) -> Result<Self, CoreError> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(CoreError::InvalidStressLevel(value))
        }
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// Levels 4 and 5 count as high stress.
    pub fn is_high(self) -> bool {
        self.0 >= 4
    }

    pub fn emoji(self) -> &'static str {
        match self.0 {
            1 => "😊",
            2 => "🙂",
            3 => "😐",
            4 => "😟",
            _ => "😰",
        }
    }

    /// Hex color used for the level badge.
    pub fn color(self) -> &'static str {
        match self.0 {
            1 => "#4CAF50",
            2 => "#8BC34A",
            3 => "#FFC107",
            4 => "#FF9800",
            _ => "#F44336",
        }
    }

    pub fn label(self) -> &'static str {
        match self.0 {
            1 => "Very low",
            2 => "Low",
            3 => "Moderate",
            4 => "High",
            _ => "Very high",
        }
    }
}

impl TryFrom<u8> for StressLevel {
    type Error = CoreError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<StressLevel> for u8 {
    fn from(level: StressLevel) -> Self {
        level.0
    }
}

impl fmt::Display for StressLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
