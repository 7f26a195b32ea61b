//! Exam subjects and their fallback concept labels.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::Error;

/// Label used when no subject-specific fallback applies.
pub const GENERIC_FALLBACK_LABEL: &str = "General Knowledge";

/// One of the four fixed exam domains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Subject {
    AncientHistory,
    Math,
    Physics,
    Economics,
}

impl Subject {
    /// All subjects in detection order. The first one is also the default.
    pub const ALL: [Subject; 4] = [
        Subject::AncientHistory,
        Subject::Math,
        Subject::Physics,
        Subject::Economics,
    ];

    /// Wire name, as used in file names and on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AncientHistory => "ancient_history",
            Self::Math => "math",
            Self::Physics => "physics",
            Self::Economics => "economics",
        }
    }

    /// Human-readable name (`"Ancient History"`).
    pub fn title(&self) -> &'static str {
        match self {
            Self::AncientHistory => "Ancient History",
            Self::Math => "Math",
            Self::Physics => "Physics",
            Self::Economics => "Economics",
        }
    }

    /// Concept assigned when no keyword matches a question of this subject.
    pub fn fallback_label(&self) -> &'static str {
        match self {
            Self::AncientHistory => "Ancient History",
            Self::Math => "Mathematics",
            Self::Physics => "Physics",
            Self::Economics => "Economics",
        }
    }

    /// Fallback label for a subject given by name; unknown names get the generic label.
    pub fn fallback_label_for(name: &str) -> &'static str {
        name.parse::<Subject>()
            .map(|s| s.fallback_label())
            .unwrap_or(GENERIC_FALLBACK_LABEL)
    }
}

impl Default for Subject {
    fn default() -> Self {
        Self::AncientHistory
    }
}

impl std::fmt::Display for Subject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Subject {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ancient_history" => Ok(Self::AncientHistory),
            "math" => Ok(Self::Math),
            "physics" => Ok(Self::Physics),
            "economics" => Ok(Self::Economics),
            other => Err(Error::UnknownSubject(other.to_string())),
        }
    }
}
