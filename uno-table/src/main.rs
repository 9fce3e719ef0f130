mod commands;
mod render;

use std::env::{args, var};

use color_eyre::{eyre::eyre, Result};
use commands::{Flow, TableCommand};
use tokio::io::{stdin, AsyncBufReadExt, BufReader};
use tracing::info;
use uno_engine::{config::GameConfig, player::Player, uno::Uno};

fn players_from_args() -> Vec<Player> {
    args()
        .skip(1)
        .enumerate()
        .map(|(index, name)| Player::new(index as u64, name))
        .collect()
}

fn config_from_env() -> Result<GameConfig> {
    let config = GameConfig::default();
    match var("UNO_SEED") {
        Ok(seed) => {
            let seed = seed
                .parse()
                .map_err(|err| eyre!("`UNO_SEED` must be a whole number: {err}"))?;
            Ok(config.with_seed(seed))
        }
        Err(_) => Ok(config),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let players = players_from_args();
    let mut game = Uno::with_config(&players, config_from_env()?)
        .map_err(|err| eyre!("{err}. Usage: uno-table <name> <name> [name...]"))?;
    info!(players = players.len(), "table is open");

    println!("{}\n\n{}", commands::help(), render::table(&game, &players));

    let mut lines = BufReader::new(stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let command = match line.parse::<TableCommand>() {
            Ok(command) => command,
            Err(err) => {
                println!("{err}");
                continue;
            }
        };

        if let Flow::Quit = commands::run(&mut game, &players, command) {
            break;
        }
    }

    Ok(())
}
