//! Headless games that always follow the advisor.
//!
//! Useful for checking the engine end to end and for comparing tie-break
//! policies. Autoplay never touches the persisted best score.

use std::collections::BTreeMap;
use std::time::{Duration, Instant};

use anyhow::Result;
use colored::Colorize;
use log::debug;
use num_format::{Locale, ToFormattedString};
use twenty48_core::Session;
use twenty48_core::advisor::TieBreak;
use twenty48_core::types::{Score, Tile};

/// Tile that counts as winning.
const WIN_TILE: Tile = 2048;

/// Result of one finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameResult {
    pub score: Score,
    pub max_tile: Tile,
    pub moves: u64,
}

/// Plays a session to the end following its own suggestions.
pub fn play_out(session: &mut Session) -> GameResult {
    let mut moves = 0;
    while let Some(dir) = session.suggest() {
        if !session.apply_move(dir).moved {
            break;
        }
        moves += 1;
    }
    GameResult {
        score: session.score(),
        max_tile: session.grid().max_tile(),
        moves,
    }
}

/// Aggregated results over many games.
#[derive(Debug, Default)]
struct Stats {
    games: u64,
    total_score: Score,
    best_score: Score,
    total_moves: u64,
    /// Games per highest tile reached
    max_tiles: BTreeMap<Tile, u64>,
    elapsed: Duration,
}

impl Stats {
    fn record(&mut self, result: &GameResult) {
        self.games += 1;
        self.total_score += result.score;
        self.best_score = self.best_score.max(result.score);
        self.total_moves += result.moves;
        *self.max_tiles.entry(result.max_tile).or_default() += 1;
    }

    fn mean_score(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            self.total_score as f64 / self.games as f64
        }
    }

    fn print(&self) {
        if self.games == 0 {
            println!("\n### No games were played");
            return;
        }

        let moves_per_sec = if self.elapsed.as_secs_f64() > 0.0 {
            (self.total_moves as f64 / self.elapsed.as_secs_f64()).round() as u64
        } else {
            0
        };
        let stats = [
            ("Games", self.games.to_formatted_string(&Locale::en)),
            ("Mean score", format!("{:.1}", self.mean_score())),
            ("Best score", self.best_score.to_formatted_string(&Locale::en)),
            ("Total moves", self.total_moves.to_formatted_string(&Locale::en)),
            ("Moves/s", moves_per_sec.to_formatted_string(&Locale::en)),
            ("Time", format!("{:.3}s", self.elapsed.as_secs_f64())),
        ];
        let max_label_len = stats.iter().map(|(label, _)| label.len()).max().unwrap_or(0);

        println!("\n### Statistics:");
        for (label, value) in stats {
            println!("- {label:<max_label_len$}: {value}");
        }

        println!("\n### Highest tile:");
        for (tile, count) in self.max_tiles.iter().rev() {
            let share = format!("{:5.1}%", *count as f64 / self.games as f64 * 100.0);
            let share = if *tile >= WIN_TILE {
                share.bright_green()
            } else {
                share.normal()
            };
            println!("- {tile:>6}: {share} ({count})");
        }
    }
}

/// Plays `games` games of edge `size` and prints a summary.
///
/// With a seed, game `i` uses `seed + i`, so runs are reproducible.
pub fn run(size: usize, games: u32, seed: Option<u64>, tie_break: TieBreak) -> Result<()> {
    println!(
        "Autoplay: {games} game(s) on {size}x{size}, tie-break {}",
        tie_break.to_string().cyan()
    );

    let mut stats = Stats::default();
    let start = Instant::now();
    for i in 0..games {
        let mut session = match seed {
            Some(seed) => Session::with_seed(size, seed.wrapping_add(u64::from(i)))?,
            None => Session::new(size)?,
        };
        session.set_tie_break(tie_break);

        let result = play_out(&mut session);
        debug!("game {}: {:?}", i + 1, result);
        println!(
            "| {:>5} | {:>10} | {:>6} | {:>7} |",
            i + 1,
            result.score.to_formatted_string(&Locale::en),
            result.max_tile,
            result.moves
        );
        stats.record(&result);
    }
    stats.elapsed = start.elapsed();
    stats.print();
    Ok(())
}
