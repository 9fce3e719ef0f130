use std::str::FromStr;

use color_eyre::{
    eyre::{bail, eyre},
    Report, Result,
};
use convert_case::{Case, Converter};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter};
use tracing::debug;
use uno_engine::{card::CardColor, player::Player, turn::TurnAction, uno::Uno};

use crate::render;

#[derive(Debug, Display, EnumIter, PartialEq, Eq)]
enum CommandKind {
    Play,
    Pass,
    Color,
    Hand,
    Help,
    Quit,
}

impl CommandKind {
    fn keyword(&self) -> String {
        let converter = Converter::new()
            .from_case(Case::Pascal)
            .to_case(Case::Lower);
        converter.convert(format!("{self}"))
    }

    fn label(&self) -> String {
        let converter = Converter::new()
            .from_case(Case::Pascal)
            .to_case(Case::Title);
        converter.convert(format!("{self}"))
    }

    fn usage(&self) -> &'static str {
        match self {
            CommandKind::Play => "play <n>     play the n-th card of your hand",
            CommandKind::Pass => "pass         draw one card and end your turn",
            CommandKind::Color => "color <name> pick the color after a wild card",
            CommandKind::Hand => "hand         show the table again",
            CommandKind::Help => "help         list the commands",
            CommandKind::Quit => "quit         leave the table",
        }
    }
}

/// A line typed at the table, already parsed.
#[derive(Debug, PartialEq, Eq)]
pub enum TableCommand {
    /// 1-based position in the current player's hand.
    Play(usize),
    Pass,
    Color(CardColor),
    Hand,
    Help,
    Quit,
}

impl FromStr for TableCommand {
    type Err = Report;

    fn from_str(line: &str) -> Result<Self> {
        let mut words = line.split_whitespace();
        let Some(word) = words.next() else {
            bail!("Type a command, or `help` to list them.");
        };
        let Some(kind) = CommandKind::iter().find(|kind| kind.keyword() == word.to_lowercase())
        else {
            bail!("Unknown command `{word}`, try `help`.");
        };
        let argument = words.next();

        let command = match kind {
            CommandKind::Play => {
                let position = argument
                    .ok_or_else(|| eyre!("Which card? Try `play 1`."))?
                    .parse::<usize>()
                    .map_err(|_| eyre!("Card numbers are whole numbers starting at 1."))?;
                if position == 0 {
                    bail!("Card numbers start at 1.");
                }
                TableCommand::Play(position)
            }
            CommandKind::Color => {
                let name = argument.ok_or_else(|| eyre!("Which color? Try `color red`."))?;
                let color = CardColor::from_str(name).map_err(|_| {
                    let colors = CardColor::iter()
                        .map(|color| color.to_string())
                        .collect::<Vec<_>>()
                        .join(", ");
                    eyre!("`{name}` is not a color, pick one of {colors}.")
                })?;
                TableCommand::Color(color)
            }
            CommandKind::Pass => TableCommand::Pass,
            CommandKind::Hand => TableCommand::Hand,
            CommandKind::Help => TableCommand::Help,
            CommandKind::Quit => TableCommand::Quit,
        };

        Ok(command)
    }
}

pub enum Flow {
    Continue,
    Quit,
}

pub fn help() -> String {
    CommandKind::iter()
        .map(|kind| format!("  {:<6} {}", kind.label(), kind.usage()))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Turns a parsed command into an engine action for whoever holds the turn.
fn to_turn_action(game: &Uno, command: &TableCommand) -> Result<(u64, TurnAction)> {
    let hand = game
        .current_hand()
        .ok_or_else(|| eyre!("Nobody holds the turn."))?;
    let action = match command {
        TableCommand::Play(position) => {
            let card = position
                .checked_sub(1)
                .and_then(|index| hand.cards().get(index))
                .ok_or_else(|| eyre!("You only hold {} cards.", hand.cards_count()))?;
            TurnAction::Play(*card)
        }
        TableCommand::Pass => TurnAction::Pass,
        TableCommand::Color(color) => TurnAction::ChooseColor(*color),
        _ => bail!("`{command:?}` does not change the game."),
    };
    Ok((hand.player_id(), action))
}

pub fn run(game: &mut Uno, players: &[Player], command: TableCommand) -> Flow {
    match command {
        TableCommand::Help => {
            println!("{}", help());
            return Flow::Continue;
        }
        TableCommand::Hand => {
            println!("{}", render::table(game, players));
            return Flow::Continue;
        }
        TableCommand::Quit => return Flow::Quit,
        _ => {}
    }

    let (player_id, action) = match to_turn_action(game, &command) {
        Ok(pair) => pair,
        Err(err) => {
            println!("{err}");
            return Flow::Continue;
        }
    };

    debug!(player_id, ?action, "submitting action");
    match game.play_turn(player_id, action) {
        Ok(result) => {
            println!("{}", render::outcome(&result.turn_action_result));
            if let Some(summary) = result.summary {
                println!("{}", render::summary(&summary, players));
                return Flow::Quit;
            }
            println!("{}", render::table(game, players));
            Flow::Continue
        }
        Err(err) if err.is_fatal() => {
            println!("The game had to be abandoned: {err}");
            Flow::Quit
        }
        Err(err) => {
            println!("Not accepted: {err}");
            Flow::Continue
        }
    }
}
