use time::{Duration, OffsetDateTime};

use crate::player::Hand;

/// Final result of a game, produced once when a hand is emptied.
///
/// `scores` follows the order of the player list the game was started with.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameSummary {
    pub start: OffsetDateTime,
    pub end: OffsetDateTime,
    pub winner: u64,
    pub scores: Vec<u32>,
}

impl GameSummary {
    pub(crate) fn new(start: OffsetDateTime, winner: u64, hands: &[Hand]) -> Self {
        Self {
            start,
            end: OffsetDateTime::now_utc(),
            winner,
            scores: hands.iter().map(Hand::points).collect(),
        }
    }

    pub fn duration(&self) -> Duration {
        self.end - self.start
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{Card, CardColor, ColoredCard};

    #[test]
    fn scores_follow_hand_order() {
        let hands = vec![
            Hand::new(10, vec![Card::WildDraw, Card::Wild]),
            Hand::new(20, vec![]),
            Hand::new(
                30,
                vec![
                    Card::Colored(CardColor::Blue, ColoredCard::Number(3)),
                    Card::Colored(CardColor::Red, ColoredCard::Reverse),
                ],
            ),
        ];
        let start = OffsetDateTime::now_utc();

        let summary = GameSummary::new(start, 20, &hands);

        assert_eq!(summary.scores, vec![90, 0, 13]);
        assert_eq!(summary.winner, 20);
        assert!(summary.end >= summary.start);
        assert!(!summary.duration().is_negative());
    }
}
