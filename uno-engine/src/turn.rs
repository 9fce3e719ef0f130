use std::fmt;

use crate::card::{Card, CardColor, ColoredCard};
use crate::constants::{DRAW_CARD_PENALTY, WILD_DRAW_CARD_PENALTY};
use crate::error::{Result, UnoError};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GamePhase {
    #[default]
    AwaitingPlay,
    AwaitingColorChoice,
    GameOver,
    Abandoned,
}

impl GamePhase {
    pub fn is_terminal(&self) -> bool {
        matches!(self, GamePhase::GameOver | GamePhase::Abandoned)
    }
}

impl fmt::Display for GamePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GamePhase::AwaitingPlay => write!(f, "waiting for a card to be played"),
            GamePhase::AwaitingColorChoice => write!(f, "waiting for a wild color to be chosen"),
            GamePhase::GameOver => write!(f, "the game is over"),
            GamePhase::Abandoned => write!(f, "the game was abandoned"),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Direction {
    #[default]
    Forward,
    Reverse,
}

impl Direction {
    pub fn flipped(self) -> Self {
        match self {
            Direction::Forward => Direction::Reverse,
            Direction::Reverse => Direction::Forward,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnAction {
    Play(Card),
    Pass,
    ChooseColor(CardColor),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnActionResult {
    Neutral,
    Skip,
    Reverse,
    Draw,
    Wild,
    WildDraw,
    Passed,
    ColorChosen(CardColor),
}

/// Cards the player at `target` has to take.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Penalty {
    pub target: usize,
    pub count: usize,
}

/// What a just-played card does to the turn order.
///
/// `next_player` is `None` when the turn is held until a wild color is chosen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CardEffect {
    pub next_player: Option<usize>,
    pub direction: Direction,
    pub penalty: Option<Penalty>,
    pub result: TurnActionResult,
}

/// Index of the player after `from` in `direction`.
pub fn advance_turn(from: usize, direction: Direction, player_count: usize) -> usize {
    match direction {
        Direction::Forward => (from + 1) % player_count,
        Direction::Reverse => (from + player_count - 1) % player_count,
    }
}

/// Works out the next player, direction and forced draw caused by `card`
/// having just been played by the player at `current`.
pub fn evaluate_card_effect(
    card: &Card,
    current: usize,
    player_count: usize,
    direction: Direction,
) -> CardEffect {
    let mut act_on_player = advance_turn(current, direction, player_count);
    let mut effect = CardEffect {
        next_player: None,
        direction,
        penalty: None,
        result: TurnActionResult::Neutral,
    };

    match card {
        Card::WildDraw => {
            effect.penalty = Some(Penalty {
                target: act_on_player,
                count: WILD_DRAW_CARD_PENALTY,
            });
            effect.result = TurnActionResult::WildDraw;
            return effect;
        }
        Card::Wild => {
            effect.result = TurnActionResult::Wild;
            return effect;
        }
        Card::Colored(_, ColoredCard::Reverse) => {
            effect.direction = direction.flipped();
            // With two players the reverse acts as a skip.
            if player_count == 2 {
                act_on_player = advance_turn(act_on_player, effect.direction, player_count);
            }
            effect.result = TurnActionResult::Reverse;
        }
        Card::Colored(_, ColoredCard::Skip) => {
            act_on_player = advance_turn(act_on_player, direction, player_count);
            effect.result = TurnActionResult::Skip;
        }
        Card::Colored(_, ColoredCard::Draw) => {
            effect.penalty = Some(Penalty {
                target: act_on_player,
                count: DRAW_CARD_PENALTY,
            });
            effect.result = TurnActionResult::Draw;
        }
        Card::Colored(_, ColoredCard::Number(_)) => {}
    }

    effect.next_player = Some(act_on_player);
    effect
}

/// Whose turn it is, which way play goes and what the table is waiting for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TurnState {
    direction: Direction,
    current_player_index: usize,
    player_count: usize,
    phase: GamePhase,
}

impl TurnState {
    pub fn new(player_count: usize) -> Self {
        Self {
            direction: Direction::Forward,
            current_player_index: 0,
            player_count,
            phase: GamePhase::AwaitingPlay,
        }
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn current_player_index(&self) -> usize {
        self.current_player_index
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn wild_pending(&self) -> bool {
        self.phase == GamePhase::AwaitingColorChoice
    }

    pub fn next_player_index(&self) -> usize {
        advance_turn(self.current_player_index, self.direction, self.player_count)
    }

    pub fn ensure_phase(&self, expected: GamePhase) -> Result<()> {
        if self.phase == expected {
            Ok(())
        } else {
            Err(UnoError::InvalidState(self.phase))
        }
    }

    pub fn effect_of(&self, card: &Card) -> CardEffect {
        evaluate_card_effect(
            card,
            self.current_player_index,
            self.player_count,
            self.direction,
        )
    }

    /// Applies an evaluated card effect. Penalties are the caller's business
    /// and must be dealt before this is called.
    pub fn commit(&mut self, effect: &CardEffect) {
        self.direction = effect.direction;
        match effect.next_player {
            Some(next) => self.current_player_index = next,
            None => self.phase = GamePhase::AwaitingColorChoice,
        }
    }

    /// Hands the turn on to the next player without any card effect.
    pub fn advance(&mut self) {
        self.current_player_index = self.next_player_index();
    }

    /// Clears a pending wild and performs the turn advance it held back.
    pub fn resolve_color(&mut self) -> Result<()> {
        self.ensure_phase(GamePhase::AwaitingColorChoice)?;
        self.phase = GamePhase::AwaitingPlay;
        self.advance();
        Ok(())
    }

    pub(crate) fn await_color(&mut self) {
        self.phase = GamePhase::AwaitingColorChoice;
    }

    pub(crate) fn finish(&mut self) {
        self.phase = GamePhase::GameOver;
    }

    pub(crate) fn abandon(&mut self) {
        self.phase = GamePhase::Abandoned;
    }
}
