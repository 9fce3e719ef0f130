use std::collections::HashSet;

use time::OffsetDateTime;
use tracing::{debug, error, info};

use crate::card::{Card, CardColor};
use crate::config::GameConfig;
use crate::constants::PASS_PENALTY;
use crate::deck::Deck;
use crate::error::{Result, UnoError};
use crate::player::{Hand, Player};
use crate::rules::is_legal;
use crate::summary::GameSummary;
use crate::turn::{Direction, GamePhase, TurnAction, TurnActionResult, TurnState};

/// Outcome of an accepted action. `summary` is set only by the action that
/// ended the game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlayTurnResult {
    pub turn_action_result: TurnActionResult,
    pub summary: Option<GameSummary>,
}

impl PlayTurnResult {
    fn new(turn_action_result: TurnActionResult, summary: Option<GameSummary>) -> Self {
        Self {
            turn_action_result,
            summary,
        }
    }

    pub fn won(&self) -> bool {
        self.summary.is_some()
    }
}

/// One game in progress. Owns the deck, every hand and the turn order; all
/// mutation goes through the action methods below.
#[derive(Debug)]
pub struct Uno {
    deck: Deck,
    hands: Vec<Hand>,
    turn: TurnState,
    started_at: OffsetDateTime,
    summary: Option<GameSummary>,
}

impl Uno {
    pub fn new(players: &[Player]) -> Result<Self> {
        Self::with_config(players, GameConfig::default())
    }

    pub fn with_config(players: &[Player], config: GameConfig) -> Result<Self> {
        let deck = Deck::new(config.seed);
        Self::with_deck(players, deck, config)
    }

    /// Starts a game from an already prepared deck. Hands are dealt in player
    /// order before the opening card is flipped.
    pub fn with_deck(players: &[Player], mut deck: Deck, config: GameConfig) -> Result<Self> {
        config.validate()?;
        if players.len() < config.min_players {
            return Err(UnoError::NotEnoughPlayers);
        }
        if players.len() > config.max_players {
            return Err(UnoError::TooManyPlayers);
        }

        let mut seen = HashSet::with_capacity(players.len());
        if let Some(player) = players.iter().find(|player| !seen.insert(player.id)) {
            return Err(UnoError::DuplicatePlayer(player.id));
        }

        let mut hands = Vec::with_capacity(players.len());
        for player in players {
            let cards = deck.deal(config.initial_hand_size)?;
            hands.push(Hand::new(player.id, cards));
        }

        let opening = deck.flip_card()?;
        let mut turn = TurnState::new(players.len());
        if opening.is_wild() {
            turn.await_color();
        }

        info!(players = players.len(), %opening, "started a new game");

        Ok(Uno {
            deck,
            hands,
            turn,
            started_at: OffsetDateTime::now_utc(),
            summary: None,
        })
    }

    pub fn play_turn(&mut self, player_id: u64, turn_action: TurnAction) -> Result<PlayTurnResult> {
        match turn_action {
            TurnAction::Play(card) => self.play_card(player_id, &card),
            TurnAction::Pass => self.pass(player_id),
            TurnAction::ChooseColor(color) => {
                self.ensure_in_progress()?;
                self.ensure_current_player(player_id)?;
                self.choose_color(color)
            }
        }
    }

    pub fn play_card(&mut self, player_id: u64, card: &Card) -> Result<PlayTurnResult> {
        let index = self.current_hand_index(player_id)?;
        self.turn.ensure_phase(GamePhase::AwaitingPlay)?;

        let card = self.deck.play_card(&mut self.hands[index], card)?;
        debug!(player_id, %card, "card played");

        let effect = self.turn.effect_of(&card);
        if let Some(penalty) = effect.penalty {
            self.deal_to(penalty.target, penalty.count)?;
        }
        self.turn.commit(&effect);

        let summary = self.check_game_over();
        Ok(PlayTurnResult::new(effect.result, summary))
    }

    pub fn pass(&mut self, player_id: u64) -> Result<PlayTurnResult> {
        let index = self.current_hand_index(player_id)?;
        self.turn.ensure_phase(GamePhase::AwaitingPlay)?;

        self.deal_to(index, PASS_PENALTY)?;
        self.turn.advance();
        debug!(player_id, "player passed");

        let summary = self.check_game_over();
        Ok(PlayTurnResult::new(TurnActionResult::Passed, summary))
    }

    pub fn choose_color(&mut self, color: CardColor) -> Result<PlayTurnResult> {
        self.turn.ensure_phase(GamePhase::AwaitingColorChoice)?;
        self.deck.choose_color(color)?;
        self.turn.resolve_color()?;
        debug!(%color, "wild color chosen");

        Ok(PlayTurnResult::new(
            TurnActionResult::ColorChosen(color),
            None,
        ))
    }

    /// Indices into the player's hand of the cards they could legally play
    /// right now. Empty when it is not their turn to play a card.
    pub fn playable_cards(&self, player_id: u64) -> Vec<usize> {
        let (Some(top), Some(active_color)) = (self.deck.top_card(), self.deck.active_color())
        else {
            return vec![];
        };
        if self.turn.phase() != GamePhase::AwaitingPlay {
            return vec![];
        }
        match self.current_hand() {
            Some(hand) if hand.player_id() == player_id => hand
                .cards()
                .iter()
                .enumerate()
                .filter(|(_, card)| is_legal(card, top, active_color))
                .map(|(index, _)| index)
                .collect(),
            _ => vec![],
        }
    }

    pub fn player_ids(&self) -> Vec<u64> {
        self.hands.iter().map(Hand::player_id).collect()
    }

    pub fn hands(&self) -> &[Hand] {
        &self.hands
    }

    pub fn hand(&self, player_id: u64) -> Option<&Hand> {
        self.hands.iter().find(|hand| hand.player_id() == player_id)
    }

    pub fn current_hand(&self) -> Option<&Hand> {
        self.hands.get(self.turn.current_player_index())
    }

    pub fn current_player_id(&self) -> Option<u64> {
        self.current_hand().map(Hand::player_id)
    }

    pub fn current_player_index(&self) -> usize {
        self.turn.current_player_index()
    }

    pub fn direction(&self) -> Direction {
        self.turn.direction()
    }

    pub fn wild_pending(&self) -> bool {
        self.turn.wild_pending()
    }

    pub fn phase(&self) -> GamePhase {
        self.turn.phase()
    }

    pub fn top_card(&self) -> Option<&Card> {
        self.deck.top_card()
    }

    pub fn active_color(&self) -> Option<CardColor> {
        self.deck.active_color()
    }

    pub fn draw_pile_size(&self) -> usize {
        self.deck.draw_pile_size()
    }

    pub fn discard_pile_size(&self) -> usize {
        self.deck.discard_pile_size()
    }

    /// Every card in the game: both piles plus all hands.
    pub fn total_cards(&self) -> usize {
        self.deck.cards_count() + self.hands.iter().map(Hand::cards_count).sum::<usize>()
    }

    pub fn started_at(&self) -> OffsetDateTime {
        self.started_at
    }

    pub fn summary(&self) -> Option<&GameSummary> {
        self.summary.as_ref()
    }

    fn ensure_in_progress(&self) -> Result<()> {
        let phase = self.turn.phase();
        if phase.is_terminal() {
            Err(UnoError::InvalidState(phase))
        } else {
            Ok(())
        }
    }

    fn ensure_current_player(&self, player_id: u64) -> Result<usize> {
        let index = self
            .hands
            .iter()
            .position(|hand| hand.player_id() == player_id)
            .ok_or(UnoError::UnknownPlayer(player_id))?;
        if index != self.turn.current_player_index() {
            return Err(UnoError::NotYourTurn(player_id));
        }
        Ok(index)
    }

    fn current_hand_index(&self, player_id: u64) -> Result<usize> {
        self.ensure_in_progress()?;
        self.ensure_current_player(player_id)
    }

    fn deal_to(&mut self, index: usize, count: usize) -> Result<()> {
        match self.deck.deal(count) {
            Ok(cards) => {
                let hand = &mut self.hands[index];
                debug!(player_id = hand.player_id(), count, "forced draw");
                hand.add_cards(cards);
                Ok(())
            }
            Err(err) => {
                error!(%err, "abandoning game");
                self.turn.abandon();
                Err(err)
            }
        }
    }

    fn check_game_over(&mut self) -> Option<GameSummary> {
        let winner = self.hands.iter().find(|hand| hand.is_empty())?.player_id();
        let summary = GameSummary::new(self.started_at, winner, &self.hands);
        self.turn.finish();
        info!(winner, scores = ?summary.scores, "game over");
        self.summary = Some(summary.clone());
        Some(summary)
    }
}
