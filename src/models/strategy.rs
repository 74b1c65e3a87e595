use serde::{Deserialize, Serialize};

/// How the tool chooses a task when the daily plan has unaccounted hours.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum WriteOffStrategy {
    /// Only charge the task the user is watching; otherwise leave it unaccounted.
    #[default]
    Watch,
    /// Pick any of the user's open tasks.
    Random,
}

impl WriteOffStrategy {
    pub fn from_code(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "watch" | "w" => Some(Self::Watch),
            "random" | "r" => Some(Self::Random),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            WriteOffStrategy::Watch => "watch",
            WriteOffStrategy::Random => "random",
        }
    }
}
