//! Difficulty tiers.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::ConfigError;

/// How strong the automated opponent plays. Fixed for a whole game.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DifficultyTier {
    /// Uniformly random legal moves.
    #[default]
    #[serde(alias = "easy")]
    Random,
    /// Take a win, else block a loss, else random.
    #[serde(alias = "medium")]
    Heuristic,
    /// Exhaustive minimax; never loses.
    #[serde(alias = "hard")]
    Optimal,
}

impl DifficultyTier {
    /// All tiers, weakest first.
    pub const ALL: [DifficultyTier; 3] = [
        DifficultyTier::Random,
        DifficultyTier::Heuristic,
        DifficultyTier::Optimal,
    ];

    /// The player-facing label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            DifficultyTier::Random => "easy",
            DifficultyTier::Heuristic => "medium",
            DifficultyTier::Optimal => "hard",
        }
    }
}

impl std::fmt::Display for DifficultyTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for DifficultyTier {
    type Err = ConfigError;

    /// Accepts the labels (`easy`, `medium`, `hard`) and the tier names,
    /// ignoring case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" | "random" => Ok(DifficultyTier::Random),
            "medium" | "heuristic" => Ok(DifficultyTier::Heuristic),
            "hard" | "optimal" => Ok(DifficultyTier::Optimal),
            _ => Err(ConfigError::UnknownDifficulty {
                value: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_round_trip() {
        for tier in DifficultyTier::ALL {
            assert_eq!(tier.to_string().parse::<DifficultyTier>(), Ok(tier));
        }
    }

    #[test]
    fn test_parse_names() {
        assert_eq!("Optimal".parse(), Ok(DifficultyTier::Optimal));
        assert_eq!(" medium ".parse(), Ok(DifficultyTier::Heuristic));
        assert_eq!(
            "nightmare".parse::<DifficultyTier>(),
            Err(ConfigError::UnknownDifficulty {
                value: "nightmare".to_string()
            })
        );
    }

    #[test]
    fn test_serde_accepts_labels() {
        let tier: DifficultyTier = serde_json::from_str("\"hard\"").unwrap();
        assert_eq!(tier, DifficultyTier::Optimal);

        let json = serde_json::to_string(&DifficultyTier::Heuristic).unwrap();
        assert_eq!(json, "\"heuristic\"");
    }
}
