use strum::EnumCount;

use crate::card::CardColor;

// Deck composition

/// Face values of one color: a single zero, then two of each 1 to 9.
pub(crate) const NUMBER_CARDS_PER_COLOR: &[u8] =
    &[0, 1, 1, 2, 2, 3, 3, 4, 4, 5, 5, 6, 6, 7, 7, 8, 8, 9, 9];
/// Copies of each of Skip, Reverse and Draw Two per color.
pub(crate) const ACTION_CARDS_PER_COLOR: u8 = 2;
const ACTION_KINDS: u8 = 3;
pub(crate) const WILD_CARDS_IN_DECK: u8 = 4;
pub(crate) const WILD_DRAW_CARDS_IN_DECK: u8 = 4;

const COLORS: u8 = CardColor::COUNT as u8;

pub const TOTAL_CARDS_IN_DECK: u8 = (NUMBER_CARDS_PER_COLOR.len() as u8
    + ACTION_CARDS_PER_COLOR * ACTION_KINDS)
    * COLORS
    + WILD_CARDS_IN_DECK
    + WILD_DRAW_CARDS_IN_DECK;

// Forced draws

pub(crate) const DRAW_CARD_PENALTY: usize = 2;
pub(crate) const WILD_DRAW_CARD_PENALTY: usize = 4;
pub(crate) const PASS_PENALTY: usize = 1;

// Scoring of cards left in losing hands. Number cards score their face value.

pub(crate) const ACTION_CARD_POINTS: u32 = 10;
pub(crate) const WILD_CARD_POINTS: u32 = 40;
pub(crate) const WILD_DRAW_CARD_POINTS: u32 = 50;

// Table defaults

pub(crate) const DEFAULT_INITIAL_HAND_SIZE: usize = 1;
pub(crate) const DEFAULT_MIN_PLAYERS: usize = 2;
pub(crate) const DEFAULT_MAX_PLAYERS: usize = 10;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{Card, ColoredCard};
    use crate::config::GameConfig;
    use crate::deck::Deck;

    #[test]
    fn correct_card_count_constants() {
        assert_eq!(NUMBER_CARDS_PER_COLOR.len(), 19);
        assert_eq!(ACTION_CARDS_PER_COLOR * ACTION_KINDS * COLORS, 24);
        assert_eq!(TOTAL_CARDS_IN_DECK, 108);
    }

    #[test]
    fn standard_deck_matches_composition() {
        let cards = Deck::standard_cards();
        assert_eq!(cards.len(), TOTAL_CARDS_IN_DECK as usize);

        let count = |wanted: Card| cards.iter().filter(|card| **card == wanted).count();
        let red = |card| Card::Colored(CardColor::Red, card);
        assert_eq!(count(red(ColoredCard::Number(0))), 1);
        assert_eq!(count(red(ColoredCard::Number(7))), 2);
        assert_eq!(count(red(ColoredCard::Skip)), ACTION_CARDS_PER_COLOR as usize);
        assert_eq!(count(Card::WildDraw), WILD_DRAW_CARDS_IN_DECK as usize);
    }

    #[test]
    fn penalties_and_points() {
        assert_eq!(DRAW_CARD_PENALTY, 2);
        assert_eq!(WILD_DRAW_CARD_PENALTY, 4);
        assert_eq!(PASS_PENALTY, 1);

        assert_eq!(Card::Colored(CardColor::Blue, ColoredCard::Number(9)).points(), 9);
        assert_eq!(
            Card::Colored(CardColor::Blue, ColoredCard::Reverse).points(),
            ACTION_CARD_POINTS
        );
        assert_eq!(Card::Wild.points(), WILD_CARD_POINTS);
        assert_eq!(Card::WildDraw.points(), WILD_DRAW_CARD_POINTS);
    }

    #[test]
    fn default_table_settings() {
        let config = GameConfig::default();
        assert_eq!(config.initial_hand_size, DEFAULT_INITIAL_HAND_SIZE);
        assert_eq!(config.min_players, DEFAULT_MIN_PLAYERS);
        assert_eq!(config.max_players, DEFAULT_MAX_PLAYERS);
        assert_eq!(config.seed, None);
        assert_eq!(config.validate(), Ok(()));
    }
}
