use crate::constants::{DEFAULT_INITIAL_HAND_SIZE, DEFAULT_MAX_PLAYERS, DEFAULT_MIN_PLAYERS};
use crate::error::{Result, UnoError};

/// Table settings fixed for the lifetime of one game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameConfig {
    /// Cards dealt to every hand before the opening flip.
    pub initial_hand_size: usize,
    pub min_players: usize,
    pub max_players: usize,
    /// Shuffle seed. `None` shuffles from OS entropy.
    pub seed: Option<u64>,
}

impl GameConfig {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Rejects settings no game can be played with.
    pub fn validate(&self) -> Result<()> {
        if self.min_players < 2 {
            return Err(UnoError::InvalidConfig("a game needs at least two players"));
        }
        if self.min_players > self.max_players {
            return Err(UnoError::InvalidConfig("min_players is larger than max_players"));
        }
        if self.initial_hand_size == 0 {
            return Err(UnoError::InvalidConfig("hands must start with at least one card"));
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            initial_hand_size: DEFAULT_INITIAL_HAND_SIZE,
            min_players: DEFAULT_MIN_PLAYERS,
            max_players: DEFAULT_MAX_PLAYERS,
            seed: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert_eq!(GameConfig::default().validate(), Ok(()));
    }

    #[test]
    fn reject_degenerate_settings() {
        let too_few = GameConfig {
            min_players: 1,
            ..GameConfig::default()
        };
        assert!(matches!(too_few.validate(), Err(UnoError::InvalidConfig(_))));

        let inverted = GameConfig {
            min_players: 5,
            max_players: 4,
            ..GameConfig::default()
        };
        assert!(matches!(inverted.validate(), Err(UnoError::InvalidConfig(_))));

        let empty_hands = GameConfig {
            initial_hand_size: 0,
            ..GameConfig::default()
        };
        assert!(matches!(empty_hands.validate(), Err(UnoError::InvalidConfig(_))));
    }
}
