//! Learner's answer to a card, as picked from the four answer buttons.
use crate::error::SchedulerError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Ordered from total lapse to perfect recall.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseQuality {
    Again,
    Hard,
    Good,
    Easy,
}

impl ResponseQuality {
    pub const ALL: [ResponseQuality; 4] = [
        ResponseQuality::Again,
        ResponseQuality::Hard,
        ResponseQuality::Good,
        ResponseQuality::Easy,
    ];

    /// SM-2 quality score (0-5 scale) of a successful recall.
    /// `Again` has no score: a lapse never goes through the easiness formula.
    pub fn quality_score(self) -> Option<u8> {
        match self {
            ResponseQuality::Again => None,
            ResponseQuality::Hard => Some(3),
            ResponseQuality::Good => Some(4),
            ResponseQuality::Easy => Some(5),
        }
    }

    pub fn is_lapse(self) -> bool {
        self == ResponseQuality::Again
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ResponseQuality::Again => "again",
            ResponseQuality::Hard => "hard",
            ResponseQuality::Good => "good",
            ResponseQuality::Easy => "easy",
        }
    }
}

impl fmt::Display for ResponseQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResponseQuality {
    type Err = SchedulerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "again" => Ok(ResponseQuality::Again),
            "hard" => Ok(ResponseQuality::Hard),
            "good" => Ok(ResponseQuality::Good),
            "easy" => Ok(ResponseQuality::Easy),
            _ => Err(SchedulerError::InvalidResponse(s.to_string())),
        }
    }
}
