use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};
use strum::IntoEnumIterator;
use tracing::debug;

use crate::{
    card::{Card, CardColor, ColoredCard},
    constants::*,
    error::{Result, UnoError},
    player::Hand,
    rules::is_legal,
    turn::GamePhase,
};

/// Draw pile, discard pile and the color currently in effect.
///
/// The last element of each pile is its top. `active_color` is `None` only
/// while a wild card sits on top waiting for a color to be chosen.
#[derive(Debug)]
pub struct Deck {
    draw_pile: Vec<Card>,
    discard_pile: Vec<Card>,
    active_color: Option<CardColor>,
    rng: StdRng,
}

impl Deck {
    /// A freshly shuffled standard deck. The same `seed` always yields the
    /// same order.
    pub fn new(seed: Option<u64>) -> Self {
        let mut deck = Self::with_rng(Self::standard_cards(), Self::rng(seed));
        deck.shuffle();
        deck
    }

    /// A deck whose cards are drawn exactly in the order given, first element
    /// first.
    pub fn stacked(mut cards: Vec<Card>) -> Self {
        cards.reverse();
        Self::with_rng(cards, Self::rng(None))
    }

    fn with_rng(draw_pile: Vec<Card>, rng: StdRng) -> Self {
        Self {
            draw_pile,
            discard_pile: Vec::new(),
            active_color: None,
            rng,
        }
    }

    fn rng(seed: Option<u64>) -> StdRng {
        match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }

    pub(crate) fn standard_cards() -> Vec<Card> {
        let mut cards = Vec::with_capacity(TOTAL_CARDS_IN_DECK.into());

        // Colored Cards
        for color in CardColor::iter() {
            for action in [ColoredCard::Skip, ColoredCard::Reverse, ColoredCard::Draw] {
                for _ in 0..ACTION_CARDS_PER_COLOR {
                    cards.push(Card::Colored(color, action));
                }
            }

            for number in NUMBER_CARDS_PER_COLOR {
                cards.push(Card::Colored(color, ColoredCard::Number(*number)));
            }
        }

        for _ in 0..WILD_CARDS_IN_DECK {
            cards.push(Card::Wild);
        }

        for _ in 0..WILD_DRAW_CARDS_IN_DECK {
            cards.push(Card::WildDraw);
        }

        cards
    }

    pub(crate) fn shuffle(&mut self) {
        self.draw_pile.shuffle(&mut self.rng);
    }

    /// Takes `count` cards off the draw pile, recycling the discard pile
    /// underneath it when the draw pile runs short.
    ///
    /// Nothing moves when both piles together cannot cover the request.
    pub fn deal(&mut self, count: usize) -> Result<Vec<Card>> {
        if self.draw_pile.len() < count {
            let available = self.draw_pile.len() + self.discard_pile.len().saturating_sub(1);
            if available < count {
                return Err(UnoError::OutOfCards {
                    requested: count,
                    available,
                });
            }
            self.recycle_discard_pile();
        }

        let split_at = self.draw_pile.len() - count;
        Ok(self.draw_pile.drain(split_at..).rev().collect())
    }

    fn recycle_discard_pile(&mut self) {
        let Some(top) = self.discard_pile.pop() else {
            return;
        };
        let mut recycled = std::mem::replace(&mut self.discard_pile, vec![top]);
        recycled.shuffle(&mut self.rng);
        debug!(
            recycled = recycled.len(),
            remaining = self.draw_pile.len(),
            "reshuffling discard pile into draw pile"
        );
        // Cards still on the draw pile stay on top.
        recycled.append(&mut self.draw_pile);
        self.draw_pile = recycled;
    }

    /// Turns the top card of the draw pile face up to open the discard pile.
    /// A wild card leaves the active color unresolved.
    pub fn flip_card(&mut self) -> Result<Card> {
        let card = self.draw_pile.pop().ok_or(UnoError::OutOfCards {
            requested: 1,
            available: 0,
        })?;
        self.discard_pile.push(card);
        self.active_color = card.color();
        Ok(card)
    }

    /// Moves `card` out of `hand` onto the discard pile if it is legal on the
    /// current top. Either everything moves or nothing does.
    pub fn play_card(&mut self, hand: &mut Hand, card: &Card) -> Result<Card> {
        let (Some(top), Some(active_color)) = (self.top_card().copied(), self.active_color) else {
            return Err(UnoError::InvalidState(GamePhase::AwaitingColorChoice));
        };
        let index = hand
            .card_index(card)
            .ok_or(UnoError::CardNotInHand(*card))?;

        if !is_legal(card, &top, active_color) {
            return Err(UnoError::InvalidPlay {
                card: *card,
                top,
                active_color,
            });
        }

        let card = hand.remove_card(index);
        self.discard_pile.push(card);
        self.active_color = card.color();
        Ok(card)
    }

    /// Resolves the color of the wild card on top of the discard pile.
    pub fn choose_color(&mut self, color: CardColor) -> Result<()> {
        match self.top_card() {
            Some(top) if top.is_wild() && self.active_color.is_none() => {
                self.active_color = Some(color);
                Ok(())
            }
            _ => Err(UnoError::InvalidState(GamePhase::AwaitingPlay)),
        }
    }

    pub fn top_card(&self) -> Option<&Card> {
        self.discard_pile.last()
    }

    pub fn active_color(&self) -> Option<CardColor> {
        self.active_color
    }

    pub fn draw_pile_size(&self) -> usize {
        self.draw_pile.len()
    }

    pub fn discard_pile_size(&self) -> usize {
        self.discard_pile.len()
    }

    pub(crate) fn cards_count(&self) -> usize {
        self.draw_pile.len() + self.discard_pile.len()
    }
}
