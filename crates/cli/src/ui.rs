//! Line-oriented interface for terminals without full-screen support.

use colored::Colorize;
use rustyline::{DefaultEditor, error::ReadlineError};
use twenty48_core::{Direction, MoveOutcome};

use crate::game::{GAME_OVER_NOTICE, Game};

/// A parsed plain-mode command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Move(Direction),
    Undo,
    Hint,
    New(Option<usize>),
    Help,
    Quit,
}

/// Parses one input line.
pub fn parse_command(line: &str) -> Result<Command, String> {
    let mut parts = line.split_whitespace();
    let Some(cmd) = parts.next() else {
        return Err("Empty command".to_string());
    };

    match cmd.to_ascii_lowercase().as_str() {
        "undo" | "u" => Ok(Command::Undo),
        "hint" | "h" | "i" => Ok(Command::Hint),
        "help" | "?" => Ok(Command::Help),
        "quit" | "q" | "exit" => Ok(Command::Quit),
        "new" | "n" => match parts.next() {
            Some(size) => size
                .parse::<usize>()
                .map(|s| Command::New(Some(s)))
                .map_err(|_| format!("Invalid size: {size}")),
            None => Ok(Command::New(None)),
        },
        _ => cmd
            .parse::<Direction>()
            .map(Command::Move)
            .map_err(|_| format!("Unknown command: {cmd}")),
    }
}

fn print_help() {
    println!("  left|right|up|down (or a/d/w/s)  slide tiles");
    println!("  undo                             take back the last move");
    println!("  hint                             suggest a direction");
    println!("  new [size]                       start over");
    println!("  quit                             leave");
}

/// Main plain-mode loop.
pub fn ui_loop(mut game: Game) -> Result<(), String> {
    let mut rl = DefaultEditor::new().map_err(|e| e.to_string())?;

    game.print();
    println!();

    loop {
        let line = match rl.readline("> ") {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(err) => return Err(err.to_string()),
        };
        if line.trim().is_empty() {
            continue;
        }
        let _ = rl.add_history_entry(&line);

        match parse_command(&line) {
            Ok(Command::Move(dir)) => {
                let outcome = game.make_move(dir);
                if let Some(msg) = blocked_message(outcome, dir) {
                    println!("{msg}\n");
                    continue;
                }
                if outcome.gained > 0 {
                    println!("+{}", outcome.gained.to_string().bright_green());
                }
            }
            Ok(Command::Undo) => {
                if !game.undo() {
                    println!("Nothing to undo.\n");
                    continue;
                }
            }
            Ok(Command::Hint) => {
                match game.session().suggest() {
                    Some(dir) => println!("Hint: {} {}\n", dir.arrow(), dir.as_str().to_uppercase()),
                    None => println!("No move changes the grid.\n"),
                }
                continue;
            }
            Ok(Command::New(size)) => {
                let size = size.unwrap_or(game.session().size());
                if let Err(e) = game.new_game(size) {
                    println!("{e}\n");
                    continue;
                }
            }
            Ok(Command::Help) => {
                print_help();
                println!();
                continue;
            }
            Ok(Command::Quit) => break,
            Err(e) => {
                println!("{e}\n");
                continue;
            }
        }

        println!();
        game.print();
        println!();
    }

    Ok(())
}

/// What to tell the player when `dir` left the grid unchanged.
fn blocked_message(outcome: &MoveOutcome, dir: Direction) -> Option<String> {
    if outcome.moved {
        None
    } else if outcome.game_over {
        Some(GAME_OVER_NOTICE.bright_red().to_string())
    } else {
        Some(format!("Nothing moves {dir}."))
    }
}
