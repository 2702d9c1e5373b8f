//! Closed sets of per-run ant behaviours.
//!
//! Both strategies are picked once per run (usually from configuration
//! text) and stay fixed for an ant's lifetime. Unknown names are rejected
//! at parse time.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How an ant picks its next cell among the remaining candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum DecisionStrategy {
    /// Weighted smell: the largest `score/random_weight + U(0,max)/phero_weight` wins.
    #[default]
    Standard,
    /// Uniformly random candidate.
    Random,
    /// Same value as `Standard`, but the smallest wins (ties: lower index).
    Test,
}

impl DecisionStrategy {
    pub const NAMES: &'static str = "standard, random, test";

    pub fn as_str(&self) -> &'static str {
        match self {
            DecisionStrategy::Standard => "standard",
            DecisionStrategy::Random => "random",
            DecisionStrategy::Test => "test",
        }
    }
}

impl FromStr for DecisionStrategy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "standard" | "smell" => Ok(DecisionStrategy::Standard),
            "random" => Ok(DecisionStrategy::Random),
            "test" => Ok(DecisionStrategy::Test),
            _ => Err(ConfigError::UnknownStrategy {
                kind: "decision",
                name: s.to_string(),
                expected: Self::NAMES,
            }),
        }
    }
}

/// How an ant filters candidates, handles loops and recognises sites.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum LoopStrategy {
    /// Goal scan only.
    Specials,
    /// Never step onto a cell already on the trail.
    #[default]
    AvoidLoop,
    /// Cut the trail short when it loops back.
    ForgetLoop,
    /// Cut loops and never return to the cut cells.
    AvoidOrForgetLoop,
}

impl LoopStrategy {
    pub const NAMES: &'static str = "specials, avoidloop, forgetloop, avoidorforgetloop";

    pub fn as_str(&self) -> &'static str {
        match self {
            LoopStrategy::Specials => "specials",
            LoopStrategy::AvoidLoop => "avoidloop",
            LoopStrategy::ForgetLoop => "forgetloop",
            LoopStrategy::AvoidOrForgetLoop => "avoidorforgetloop",
        }
    }
}

impl FromStr for LoopStrategy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "specials" | "searchspecials" | "standard" => Ok(LoopStrategy::Specials),
            "avoidloop" => Ok(LoopStrategy::AvoidLoop),
            "forgetloop" => Ok(LoopStrategy::ForgetLoop),
            "avoidorforgetloop" => Ok(LoopStrategy::AvoidOrForgetLoop),
            _ => Err(ConfigError::UnknownStrategy {
                kind: "loop",
                name: s.to_string(),
                expected: Self::NAMES,
            }),
        }
    }
}

macro_rules! string_conversions {
    ($ty:ty) => {
        impl TryFrom<String> for $ty {
            type Error = ConfigError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                value.parse()
            }
        }

        impl From<$ty> for String {
            fn from(value: $ty) -> Self {
                value.as_str().to_string()
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

string_conversions!(DecisionStrategy);
string_conversions!(LoopStrategy);
