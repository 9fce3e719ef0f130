use uno_engine::{
    card::{Card, CardColor, ColoredCard},
    player::Player,
    summary::GameSummary,
    turn::{Direction, TurnActionResult},
    uno::Uno,
};

pub trait AsSymbol {
    fn as_symbol(&self) -> String;
}

impl AsSymbol for CardColor {
    fn as_symbol(&self) -> String {
        match self {
            CardColor::Red => "R",
            CardColor::Yellow => "Y",
            CardColor::Green => "G",
            CardColor::Blue => "B",
        }
        .to_string()
    }
}

impl AsSymbol for Card {
    fn as_symbol(&self) -> String {
        match self {
            Card::Colored(color, card) => {
                let face = match card {
                    ColoredCard::Number(number) => number.to_string(),
                    ColoredCard::Skip => "⊘".to_string(),
                    ColoredCard::Reverse => "⇄".to_string(),
                    ColoredCard::Draw => "+2".to_string(),
                };
                format!("[{}{face}]", color.as_symbol())
            }
            Card::Wild => "[W]".to_string(),
            Card::WildDraw => "[W+4]".to_string(),
        }
    }
}

fn player_name(players: &[Player], player_id: u64) -> &str {
    players
        .iter()
        .find(|player| player.id == player_id)
        .map_or("?", |player| player.name.as_str())
}

/// Everything the player whose turn it is may see.
pub fn table(game: &Uno, players: &[Player]) -> String {
    let mut lines = Vec::new();

    let top = game
        .top_card()
        .map_or_else(|| "-".to_string(), |card| format!("{} {card}", card.as_symbol()));
    let active = game
        .active_color()
        .map_or_else(|| "to be chosen".to_string(), |color| color.to_string());
    let direction = match game.direction() {
        Direction::Forward => "→",
        Direction::Reverse => "←",
    };
    lines.push(format!(
        "Discard: {top} | Color: {active} | Draw pile: {} | Play goes {direction}",
        game.draw_pile_size()
    ));

    for (index, hand) in game.hands().iter().enumerate() {
        let marker = if index == game.current_player_index() {
            ">"
        } else {
            " "
        };
        lines.push(format!(
            "{marker} {} ({} cards)",
            player_name(players, hand.player_id()),
            hand.cards_count()
        ));
    }

    if let Some(hand) = game.current_hand() {
        let name = player_name(players, hand.player_id());
        if game.wild_pending() {
            lines.push(format!("{name}, choose a color with `color <name>`."));
        } else {
            let playable = game.playable_cards(hand.player_id());
            let cards = hand
                .cards()
                .iter()
                .enumerate()
                .map(|(index, card)| {
                    let mark = if playable.contains(&index) { "*" } else { "" };
                    format!("{}:{}{mark}", index + 1, card.as_symbol())
                })
                .collect::<Vec<_>>()
                .join(" ");
            lines.push(format!("{name}, your hand: {cards}"));
        }
    }

    lines.join("\n")
}

pub fn outcome(result: &TurnActionResult) -> String {
    match result {
        TurnActionResult::Neutral => "Card played.".to_string(),
        TurnActionResult::Skip => "Next player skipped!".to_string(),
        TurnActionResult::Reverse => "Direction reversed!".to_string(),
        TurnActionResult::Draw => "Next player draws two!".to_string(),
        TurnActionResult::Wild => "Wild card! Choose a color.".to_string(),
        TurnActionResult::WildDraw => "Next player draws four! Choose a color.".to_string(),
        TurnActionResult::Passed => "Passed and drew a card.".to_string(),
        TurnActionResult::ColorChosen(color) => format!("The color is now {color}."),
    }
}

pub fn summary(summary: &GameSummary, players: &[Player]) -> String {
    let mut lines = vec![format!(
        "{} wins after {} seconds!",
        player_name(players, summary.winner),
        summary.duration().whole_seconds()
    )];
    for (player, score) in players.iter().zip(&summary.scores) {
        lines.push(format!("  {}: {score}", player.name));
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use uno_engine::{config::GameConfig, deck::Deck};

    use super::*;

    fn players() -> Vec<Player> {
        vec![Player::new(1, "Ann"), Player::new(2, "Bob")]
    }

    #[test]
    fn card_symbols() {
        assert_eq!(
            Card::Colored(CardColor::Red, ColoredCard::Number(7)).as_symbol(),
            "[R7]"
        );
        assert_eq!(
            Card::Colored(CardColor::Blue, ColoredCard::Draw).as_symbol(),
            "[B+2]"
        );
        assert_eq!(Card::WildDraw.as_symbol(), "[W+4]");
    }

    #[test]
    fn table_marks_playable_cards() {
        let deck = Deck::stacked(vec![
            Card::Colored(CardColor::Red, ColoredCard::Number(7)),
            Card::Colored(CardColor::Blue, ColoredCard::Number(1)),
            Card::Colored(CardColor::Green, ColoredCard::Number(2)),
            Card::Colored(CardColor::Green, ColoredCard::Number(3)),
            Card::Colored(CardColor::Red, ColoredCard::Number(5)),
        ]);
        let config = GameConfig {
            initial_hand_size: 2,
            ..GameConfig::default()
        };
        let game = Uno::with_deck(&players(), deck, config).unwrap();

        let table = table(&game, &players());

        assert!(table.contains("Discard: [R5] Red 5 | Color: Red | Draw pile: 0"));
        assert!(table.contains("> Ann (2 cards)"));
        assert!(table.contains("Ann, your hand: 1:[R7]* 2:[B1]"));
    }
}
