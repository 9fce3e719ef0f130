use crate::card::Card;

/// A seat at the table. Owned by the caller and only referenced by id from
/// the game, so the same players can sit down for several games.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Player {
    pub id: u64,
    pub name: String,
}

impl Player {
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// The cards held by one player. Order is kept for display only.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Hand {
    player_id: u64,
    cards: Vec<Card>,
}

impl Hand {
    pub fn new(player_id: u64, cards: Vec<Card>) -> Self {
        Self { player_id, cards }
    }

    pub fn player_id(&self) -> u64 {
        self.player_id
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn cards_count(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn card_index(&self, card: &Card) -> Option<usize> {
        self.cards.iter().position(|x| x == card)
    }

    /// Sum of the penalty points of every card still held.
    pub fn points(&self) -> u32 {
        self.cards.iter().map(Card::points).sum()
    }

    pub(crate) fn add_cards(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.cards.extend(cards);
    }

    pub(crate) fn remove_card(&mut self, index: usize) -> Card {
        self.cards.remove(index)
    }
}
