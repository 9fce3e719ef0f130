use thiserror::Error;

use crate::card::{Card, CardColor};
use crate::turn::GamePhase;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UnoError {
    #[error("Not enough players")]
    NotEnoughPlayers,
    #[error("Too many players")]
    TooManyPlayers,
    #[error("Invalid game config: {0}")]
    InvalidConfig(&'static str),
    #[error("Player {0} joined more than once")]
    DuplicatePlayer(u64),
    #[error("Player {0} is not in this game")]
    UnknownPlayer(u64),
    #[error("It is not player {0}'s turn")]
    NotYourTurn(u64),
    #[error("{0} is not in the player's hand")]
    CardNotInHand(Card),
    #[error("{card} cannot be played on {top} while the active color is {active_color}")]
    InvalidPlay {
        card: Card,
        top: Card,
        active_color: CardColor,
    },
    #[error("That action is not allowed while {0}")]
    InvalidState(GamePhase),
    #[error("Ran out of cards: {requested} requested but only {available} left")]
    OutOfCards { requested: usize, available: usize },
}

impl UnoError {
    /// Whether the game had to be abandoned because of this error.
    pub fn is_fatal(&self) -> bool {
        matches!(self, UnoError::OutOfCards { .. })
    }
}

pub type Result<T, E = UnoError> = std::result::Result<T, E>;
