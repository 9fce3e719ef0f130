use core::fmt;
use std::fmt::Display;

use strum_macros::{Display, EnumCount as EnumCountMacro, EnumIter, EnumString};

use crate::constants::{ACTION_CARD_POINTS, WILD_CARD_POINTS, WILD_DRAW_CARD_POINTS};

#[derive(
    Clone, Copy, Debug, Display, EnumString, EnumCountMacro, EnumIter, PartialEq, Eq, Hash,
)]
#[strum(ascii_case_insensitive)]
pub enum CardColor {
    Red,
    Yellow,
    Green,
    Blue,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ColoredCard {
    Number(u8),
    Skip,
    Reverse,
    Draw,
}

impl ColoredCard {
    pub fn points(&self) -> u32 {
        match self {
            ColoredCard::Number(number) => u32::from(*number),
            ColoredCard::Skip | ColoredCard::Reverse | ColoredCard::Draw => ACTION_CARD_POINTS,
        }
    }
}

impl Display for ColoredCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColoredCard::Number(number) => write!(f, "{number}"),
            ColoredCard::Skip => write!(f, "Skip"),
            ColoredCard::Reverse => write!(f, "Reverse"),
            ColoredCard::Draw => write!(f, "Draw Two"),
        }
    }
}

/// A single card as it sits in a pile or a hand.
///
/// Wild cards carry no color of their own. The color chosen after playing one
/// lives on the [`Deck`](crate::deck::Deck) as the active color, so a wild that
/// gets recycled into the draw pile is colorless again.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Card {
    Colored(CardColor, ColoredCard),
    Wild,
    WildDraw,
}

impl Card {
    pub fn color(&self) -> Option<CardColor> {
        match self {
            Card::Colored(color, _) => Some(*color),
            Card::Wild | Card::WildDraw => None,
        }
    }

    pub fn is_wild(&self) -> bool {
        matches!(self, Card::Wild | Card::WildDraw)
    }

    /// Whether both cards show the same face, ignoring color.
    pub fn same_value(&self, other: &Card) -> bool {
        match (self, other) {
            (Card::Colored(_, this), Card::Colored(_, that)) => this == that,
            (Card::Wild, Card::Wild) | (Card::WildDraw, Card::WildDraw) => true,
            _ => false,
        }
    }

    /// Penalty points this card is worth when left in a hand at game end.
    pub fn points(&self) -> u32 {
        match self {
            Card::Colored(_, card) => card.points(),
            Card::Wild => WILD_CARD_POINTS,
            Card::WildDraw => WILD_DRAW_CARD_POINTS,
        }
    }
}

impl Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Card::Colored(color, card) => write!(f, "{color} {card}"),
            Card::Wild => write!(f, "Wild"),
            Card::WildDraw => write!(f, "Wild Draw Four"),
        }
    }
}
