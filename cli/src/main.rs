//! Terminal frontend for the minelet board engine.
//!
//! All game logic lives in `minelet-core`; this binary only maps input lines
//! to `reveal` calls and renders the engine's state after every move.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::Parser;
use minelet_core::{
    CellKind, Coord, Coord2, Game, GameConfig, GameError, Outcome, RandomLayoutGenerator,
};

#[derive(Parser, Debug)]
#[command(name = "minelet")]
#[command(about = "Single-player mine-detection puzzle", version)]
struct Cli {
    /// Board rows
    #[arg(long, default_value_t = 5)]
    rows: Coord,

    /// Board columns
    #[arg(long, default_value_t = 5)]
    cols: Coord,

    /// Number of mines
    #[arg(long, default_value_t = 5)]
    mines: u16,

    /// Seed for a reproducible layout; omit for a random game
    #[arg(long)]
    seed: Option<u64>,
}

fn new_game(config: GameConfig, seed: Option<u64>) -> Game {
    let generator = match seed {
        Some(seed) => RandomLayoutGenerator::new(seed),
        None => RandomLayoutGenerator::from_entropy(),
    };
    log::info!("starting game with seed {}", generator.seed());
    Game::generate(config, generator)
}

fn render(game: &Game, out: &mut impl Write) -> Result<()> {
    let (rows, cols) = game.size();

    write!(out, "   ")?;
    for col in 0..cols {
        write!(out, " {col}")?;
    }
    writeln!(out)?;

    for row in 0..rows {
        write!(out, " {row} ")?;
        for col in 0..cols {
            let glyph = cell_glyph(game, (row, col))?;
            write!(out, " {glyph}")?;
        }
        writeln!(out)?;
    }

    Ok(())
}

fn cell_glyph(game: &Game, coords: Coord2) -> Result<char> {
    if !game.is_revealed(coords)? {
        return Ok('.');
    }
    Ok(match game.cell_kind(coords)? {
        CellKind::Mine => '*',
        CellKind::Safe => char::from_digit(game.adjacent_mine_count(coords)?.into(), 10)
            .context("adjacency count out of range")?,
    })
}

fn announce(outcome: Outcome) {
    match outcome {
        Outcome::Won => println!("Congrats!! You won!"),
        Outcome::Lost => println!("Game over :( You hit a mine!!"),
        Outcome::InProgress => {}
    }
}

fn play(config: GameConfig, seed: Option<u64>) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut game = new_game(config, seed);

    render(&game, &mut stdout)?;
    println!("Commands: ROW COL to reveal, 'new' for a new game, 'quit' to exit.");

    for line in stdin.lock().lines() {
        let line = line.context("failed to read input")?;
        match parse_command(&line) {
            Some(Command::Quit) => break,
            Some(Command::New) => {
                game = new_game(config, seed);
                println!("Reset successful!");
            }
            Some(Command::Reveal(coords)) => match game.reveal(coords) {
                Ok(outcome) => announce(outcome),
                Err(GameError::OutOfBounds) => {
                    println!("({}, {}) is outside the board.", coords.0, coords.1)
                }
                Err(GameError::AlreadyOver) => {
                    println!("The game is over; type 'new' to play again.")
                }
                Err(err) => return Err(err.into()),
            },
            None => println!("Could not parse that; try 'ROW COL', 'new' or 'quit'."),
        }
        render(&game, &mut stdout)?;
    }

    Ok(())
}

enum Command {
    Reveal(Coord2),
    New,
    Quit,
}

fn parse_command(line: &str) -> Option<Command> {
    let line = line.trim();
    match line {
        "new" | "n" => return Some(Command::New),
        "quit" | "q" | "exit" => return Some(Command::Quit),
        _ => {}
    }

    let mut parts = line.split_whitespace();
    let row = parts.next()?.parse().ok()?;
    let col = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some(Command::Reveal((row, col)))
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = GameConfig::new(cli.rows, cli.cols, cli.mines)
        .context("invalid board configuration")?;

    play(config, cli.seed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_reveal_coordinates() {
        assert!(matches!(
            parse_command(" 2 3 "),
            Some(Command::Reveal((2, 3)))
        ));
        assert!(parse_command("2 3 4").is_none());
        assert!(parse_command("a b").is_none());
    }

    #[test]
    fn parses_control_words() {
        assert!(matches!(parse_command("new"), Some(Command::New)));
        assert!(matches!(parse_command("q"), Some(Command::Quit)));
    }

    #[test]
    fn renders_hidden_and_revealed_cells() {
        let layout =
            minelet_core::MineLayout::from_mine_coords((2, 2), &[(0, 0)]).unwrap();
        let mut game = Game::new(layout);
        game.reveal((1, 1)).unwrap();

        let mut buffer = Vec::new();
        render(&game, &mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();

        assert!(text.contains('.'));
        assert!(text.contains('1'));
        assert!(!text.contains('*'));
    }
}
