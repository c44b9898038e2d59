//! Session configuration.
//!
//! Chosen once before the first move and immutable for the game: the play
//! mode, which mark the human controls, the difficulty tier, and the two
//! display names (used for status text only).

use serde::{Deserialize, Serialize};

use crate::core::{ConfigError, Mark};
use crate::decision::DifficultyTier;

/// Display name given to the automated player when none is supplied.
pub const COMPUTER_NAME: &str = "Computer";

/// Who is at the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PlayMode {
    /// Two humans share the board. Player one holds `X`.
    HumanVsHuman,
    /// Player one plays `human` against the automated opponent.
    HumanVsComputer {
        human: Mark,
        difficulty: DifficultyTier,
    },
}

impl PlayMode {
    /// The automated player's mark, if there is one.
    #[must_use]
    pub fn computer_mark(&self) -> Option<Mark> {
        match self {
            PlayMode::HumanVsHuman => None,
            PlayMode::HumanVsComputer { human, .. } => Some(human.opponent()),
        }
    }

    /// The automated player's tier, if there is one.
    #[must_use]
    pub fn difficulty(&self) -> Option<DifficultyTier> {
        match self {
            PlayMode::HumanVsHuman => None,
            PlayMode::HumanVsComputer { difficulty, .. } => Some(*difficulty),
        }
    }
}

/// Everything a session needs before its first move.
///
/// ## Example
///
/// ```
/// use rust_ttt::core::Mark;
/// use rust_ttt::decision::DifficultyTier;
/// use rust_ttt::session::SessionConfig;
///
/// let config = SessionConfig::human_vs_computer("Ada")
///     .with_human_mark(Mark::O)
///     .with_difficulty(DifficultyTier::Optimal)
///     .with_seed(7);
///
/// let config = config.validated().unwrap();
/// assert_eq!(config.player_two, "Computer");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Play mode.
    pub mode: PlayMode,

    /// First player's display name (the human in human-vs-computer).
    pub player_one: String,

    /// Second player's display name. Optional against the computer.
    #[serde(default)]
    pub player_two: String,

    /// RNG seed. `None` draws one from the OS.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl SessionConfig {
    /// Two humans; `player_one` plays `X`.
    pub fn human_vs_human(player_one: impl Into<String>, player_two: impl Into<String>) -> Self {
        Self {
            mode: PlayMode::HumanVsHuman,
            player_one: player_one.into(),
            player_two: player_two.into(),
            seed: None,
        }
    }

    /// One human playing `X` against the random tier.
    pub fn human_vs_computer(player_one: impl Into<String>) -> Self {
        Self {
            mode: PlayMode::HumanVsComputer {
                human: Mark::X,
                difficulty: DifficultyTier::default(),
            },
            player_one: player_one.into(),
            player_two: String::new(),
            seed: None,
        }
    }

    /// Set the human's mark. No effect in human-vs-human mode.
    pub fn with_human_mark(mut self, mark: Mark) -> Self {
        if let PlayMode::HumanVsComputer { human, .. } = &mut self.mode {
            *human = mark;
        }
        self
    }

    /// Set the automated player's tier. No effect in human-vs-human mode.
    pub fn with_difficulty(mut self, tier: DifficultyTier) -> Self {
        if let PlayMode::HumanVsComputer { difficulty, .. } = &mut self.mode {
            *difficulty = tier;
        }
        self
    }

    /// Set a fixed RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Decode and validate a JSON configuration.
    ///
    /// ## Errors
    ///
    /// [`ConfigError::Parse`] for malformed JSON, otherwise as
    /// [`SessionConfig::validated`].
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: SessionConfig = serde_json::from_str(text)?;
        config.validated()
    }

    /// Return a normalised copy: names trimmed, the computer named.
    ///
    /// ## Errors
    ///
    /// [`ConfigError::MissingName`] if a human's name is blank.
    pub fn validated(&self) -> Result<Self, ConfigError> {
        let player_one = self.player_one.trim().to_string();
        let mut player_two = self.player_two.trim().to_string();

        if player_one.is_empty() {
            return Err(ConfigError::MissingName { slot: "player one" });
        }

        match self.mode {
            PlayMode::HumanVsHuman if player_two.is_empty() => {
                return Err(ConfigError::MissingName { slot: "player two" });
            }
            PlayMode::HumanVsComputer { .. } if player_two.is_empty() => {
                player_two = COMPUTER_NAME.to_string();
            }
            _ => {}
        }

        Ok(Self {
            mode: self.mode,
            player_one,
            player_two,
            seed: self.seed,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_human_vs_human_requires_both_names() {
        let config = SessionConfig::human_vs_human("Ada", "  ");
        assert_eq!(
            config.validated(),
            Err(ConfigError::MissingName { slot: "player two" })
        );

        let config = SessionConfig::human_vs_human("", "Bob");
        assert_eq!(
            config.validated(),
            Err(ConfigError::MissingName { slot: "player one" })
        );
    }

    #[test]
    fn test_names_are_trimmed() {
        let config = SessionConfig::human_vs_human(" Ada ", "Bob\n")
            .validated()
            .unwrap();
        assert_eq!(config.player_one, "Ada");
        assert_eq!(config.player_two, "Bob");
    }

    #[test]
    fn test_computer_gets_default_name() {
        let config = SessionConfig::human_vs_computer("Ada").validated().unwrap();
        assert_eq!(config.player_two, COMPUTER_NAME);
        assert_eq!(config.mode.computer_mark(), Some(Mark::O));
    }

    #[test]
    fn test_builders_ignored_for_two_humans() {
        let config = SessionConfig::human_vs_human("Ada", "Bob")
            .with_human_mark(Mark::O)
            .with_difficulty(DifficultyTier::Optimal);
        assert_eq!(config.mode, PlayMode::HumanVsHuman);
        assert_eq!(config.mode.computer_mark(), None);
        assert_eq!(config.mode.difficulty(), None);
    }

    #[test]
    fn test_from_json() {
        let json = r#"{
            "mode": { "kind": "human_vs_computer", "human": "O", "difficulty": "hard" },
            "player_one": "Ada",
            "seed": 5
        }"#;
        let config = SessionConfig::from_json(json).unwrap();

        assert_eq!(
            config.mode,
            PlayMode::HumanVsComputer {
                human: Mark::O,
                difficulty: DifficultyTier::Optimal,
            }
        );
        assert_eq!(config.player_two, COMPUTER_NAME);
        assert_eq!(config.seed, Some(5));
    }

    #[test]
    fn test_from_json_errors() {
        assert!(matches!(
            SessionConfig::from_json("{"),
            Err(ConfigError::Parse { .. })
        ));

        let blank = r#"{ "mode": { "kind": "human_vs_human" }, "player_one": "Ada" }"#;
        assert_eq!(
            SessionConfig::from_json(blank),
            Err(ConfigError::MissingName { slot: "player two" })
        );
    }

    #[test]
    fn test_serialization() {
        let config = SessionConfig::human_vs_computer("Ada")
            .with_difficulty(DifficultyTier::Heuristic)
            .with_seed(3);
        let json = serde_json::to_string(&config).unwrap();
        let back: SessionConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }
}
