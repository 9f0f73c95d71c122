//! Example generating a Cosmoku puzzle from the command line.
//!
//! This example shows how to:
//! - Create a `PuzzleGenerator` for a chosen difficulty
//! - Reproduce a puzzle from a seed or a phrase
//! - Sample many puzzles in parallel and summarize how open the boards get
//!
//! # Usage
//!
//! ```sh
//! cargo run --example generate_puzzle
//! ```
//!
//! Pick a difficulty (easy, medium, or hard):
//!
//! ```sh
//! cargo run --example generate_puzzle -- --difficulty hard
//! ```
//!
//! Reproduce a puzzle from its 64-character hex seed:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --seed 00112233445566778899aabbccddeeff00112233445566778899aabbccddeeff
//! ```
//!
//! Derive the seed from a phrase, e.g. for a daily puzzle:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --phrase "daily 2024-07-01"
//! ```
//!
//! Sample many random puzzles and report empty-cell statistics:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --difficulty hard --sample 1000
//! ```

use std::process;

use clap::{Parser, ValueEnum};
use cosmoku_core::Difficulty;
use cosmoku_generator::{GeneratedPuzzle, ParseSeedError, PuzzleGenerator, PuzzleSeed};
use rayon::prelude::*;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum DifficultyArg {
    Easy,
    Medium,
    Hard,
}

impl From<DifficultyArg> for Difficulty {
    fn from(arg: DifficultyArg) -> Self {
        match arg {
            DifficultyArg::Easy => Self::Easy,
            DifficultyArg::Medium => Self::Medium,
            DifficultyArg::Hard => Self::Hard,
        }
    }
}

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Difficulty to generate.
    #[arg(long, value_name = "DIFFICULTY", default_value = "medium")]
    difficulty: DifficultyArg,

    /// Seed to reproduce, as 64 hex characters.
    #[arg(long, value_name = "HEX", conflicts_with = "phrase")]
    seed: Option<String>,

    /// Phrase to derive the seed from.
    #[arg(long, value_name = "PHRASE")]
    phrase: Option<String>,

    /// Sample this many random puzzles and print statistics instead.
    #[arg(long, value_name = "COUNT", conflicts_with_all = ["seed", "phrase"])]
    sample: Option<usize>,
}

fn main() {
    env_logger::init();

    let args = Args::parse();
    let generator = PuzzleGenerator::new(args.difficulty.into());

    if let Some(count) = args.sample {
        if count == 0 {
            eprintln!("--sample must be at least 1.");
            process::exit(1);
        }
        print_sample_stats(&generator, count);
        return;
    }

    let seed = match seed_from_args(&args) {
        Ok(seed) => seed,
        Err(err) => {
            eprintln!("Invalid seed: {err}");
            process::exit(2);
        }
    };
    let puzzle = match seed {
        Some(seed) => generator.generate_with_seed(seed),
        None => generator.generate(),
    };
    print_puzzle(&puzzle);
}

fn seed_from_args(args: &Args) -> Result<Option<PuzzleSeed>, ParseSeedError> {
    if let Some(hex) = &args.seed {
        return Ok(Some(hex.parse()?));
    }
    Ok(args.phrase.as_deref().map(PuzzleSeed::from_phrase))
}

fn print_sample_stats(generator: &PuzzleGenerator, count: usize) {
    let empty_counts = (0..count)
        .into_par_iter()
        .map(|_| generator.generate().problem.empty_count())
        .collect::<Vec<_>>();

    let min = empty_counts.iter().copied().min().unwrap_or(0);
    let max = empty_counts.iter().copied().max().unwrap_or(0);
    #[expect(clippy::cast_precision_loss)]
    let mean = empty_counts.iter().sum::<usize>() as f64 / count as f64;

    println!("Samples:");
    println!("  Count: {count}");
    println!("  Difficulty: {}", generator.difficulty());
    println!();
    println!("Empty cells:");
    println!("  Min: {min}");
    println!("  Mean: {mean:.1}");
    println!("  Max: {max}");
}

fn print_puzzle(puzzle: &GeneratedPuzzle) {
    println!("Seed:");
    println!("  {}", puzzle.seed);
    println!();
    println!("Difficulty:");
    println!("  {}", puzzle.difficulty);
    println!();
    println!("Problem:");
    println!("  {}", puzzle.problem);
    println!();
    println!("Solution:");
    println!("  {}", puzzle.solution);
    println!();
    println!("Empty cells:");
    println!("  {}", puzzle.problem.empty_count());
}
