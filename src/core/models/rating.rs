//! Satisfaction rating scale
//!
//! Five levels, best first. Labels are accepted in English, Korean, or as
//! the numeric score printed on the form.

use serde::{Deserialize, Serialize};

/// Satisfaction level given in a survey response
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rating {
    /// Very satisfied (5)
    VerySatisfied,
    /// Satisfied (4)
    Satisfied,
    /// Neither satisfied nor dissatisfied (3)
    Neutral,
    /// Dissatisfied (2)
    Dissatisfied,
    /// Very dissatisfied (1)
    VeryDissatisfied,
}

/// Coarse grouping of ratings used for the headline rates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sentiment {
    /// Top two levels
    Positive,
    /// Middle level
    Neutral,
    /// Bottom two levels
    Negative,
}

impl Rating {
    /// All levels, best first
    pub const ALL: [Self; 5] = [
        Self::VerySatisfied,
        Self::Satisfied,
        Self::Neutral,
        Self::Dissatisfied,
        Self::VeryDissatisfied,
    ];

    /// Numeric score on the 1-5 scale
    #[must_use]
    pub const fn score(self) -> u8 {
        match self {
            Self::VerySatisfied => 5,
            Self::Satisfied => 4,
            Self::Neutral => 3,
            Self::Dissatisfied => 2,
            Self::VeryDissatisfied => 1,
        }
    }

    /// Which headline group this level falls into
    #[must_use]
    pub const fn sentiment(self) -> Sentiment {
        match self {
            Self::VerySatisfied | Self::Satisfied => Sentiment::Positive,
            Self::Neutral => Sentiment::Neutral,
            Self::Dissatisfied | Self::VeryDissatisfied => Sentiment::Negative,
        }
    }

    /// Human label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::VerySatisfied => "very satisfied",
            Self::Satisfied => "satisfied",
            Self::Neutral => "neutral",
            Self::Dissatisfied => "dissatisfied",
            Self::VeryDissatisfied => "very dissatisfied",
        }
    }
}

impl std::fmt::Display for Rating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for Rating {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(['_', '-'], " ");
        match normalized.as_str() {
            "very satisfied" | "매우 만족" | "5" => Ok(Self::VerySatisfied),
            "satisfied" | "만족" | "4" => Ok(Self::Satisfied),
            "neutral" | "보통" | "3" => Ok(Self::Neutral),
            "dissatisfied" | "불만족" | "2" => Ok(Self::Dissatisfied),
            "very dissatisfied" | "매우 불만족" | "1" => Ok(Self::VeryDissatisfied),
            _ => Err(format!(
                "Invalid rating: {s}. Use: very satisfied, satisfied, neutral, dissatisfied, very dissatisfied (or 5-1)"
            )),
        }
    }
}
