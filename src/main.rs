//! Hangman - CLI
//!
//! Console and TUI front-ends for the hangman game.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use hangman::{
    commands::{PlaySettings, list_words, run_simple},
    core::{CategoryFilter, DifficultyFilter},
    wordlists::{WordDictionary, loader::load_from_file},
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "hangman",
    about = "Guess the hidden word one letter at a time",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word list: 'builtin' (default) or path to a tab-separated word file
    #[arg(short = 'w', long, global = true, default_value = "builtin")]
    wordlist: String,

    /// Seed for reproducible word selection
    #[arg(short, long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Console game with text menus (default)
    Play {
        /// Initial difficulty: random, easy, medium or hard
        #[arg(short, long, default_value = "random")]
        difficulty: DifficultyFilter,

        /// Initial category, or 'random'
        #[arg(short, long, default_value = "random")]
        category: CategoryFilter,
    },

    /// Full-screen interactive mode
    Tui,

    /// List the words in the word list
    List {
        /// Only words of this difficulty: random, easy, medium or hard
        #[arg(short, long, default_value = "random")]
        difficulty: DifficultyFilter,

        /// Only words of this category, or 'random'
        #[arg(short, long, default_value = "random")]
        category: CategoryFilter,
    },
}

/// Load the dictionary based on the -w flag
fn load_dictionary(wordlist: &str) -> Result<WordDictionary> {
    match wordlist {
        "builtin" => Ok(WordDictionary::builtin()),
        path => {
            let words = load_from_file(path)
                .with_context(|| format!("failed to read word list '{path}'"))?;
            anyhow::ensure!(!words.is_empty(), "word list '{path}' contains no valid words");
            Ok(WordDictionary::new(words))
        }
    }
}

fn make_rng(seed: Option<u64>) -> StdRng {
    seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64)
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let dictionary = load_dictionary(&cli.wordlist)?;
    let rng = make_rng(cli.seed);
    info!(words = dictionary.len(), seed = ?cli.seed, "word list loaded");

    // Default to the console game if no command given
    let command = cli.command.unwrap_or(Commands::Play {
        difficulty: DifficultyFilter::Random,
        category: CategoryFilter::Random,
    });

    match command {
        Commands::Play {
            difficulty,
            category,
        } => run_play_command(&dictionary, difficulty, category, rng),
        Commands::Tui => run_tui_command(&dictionary, rng),
        Commands::List {
            difficulty,
            category,
        } => run_list_command(&dictionary, difficulty, &category),
    }
}

fn run_play_command(
    dictionary: &WordDictionary,
    difficulty: DifficultyFilter,
    category: CategoryFilter,
    rng: StdRng,
) -> Result<()> {
    let settings = PlaySettings {
        difficulty,
        category,
    };
    let stats = run_simple(dictionary, settings, rng)?;
    info!(
        games = stats.total_games,
        won = stats.games_won,
        "console game finished"
    );
    Ok(())
}

fn run_tui_command(dictionary: &WordDictionary, rng: StdRng) -> Result<()> {
    use hangman::interactive::{App, run_tui};

    let app = App::new(dictionary, rng, PlaySettings::default());
    run_tui(app)
}

fn run_list_command(
    dictionary: &WordDictionary,
    difficulty: DifficultyFilter,
    category: &CategoryFilter,
) -> Result<()> {
    let mut stdout = io::stdout().lock();
    let count = list_words(&mut stdout, dictionary, difficulty, category)?;
    if count == 0 {
        anyhow::bail!("no words match category ({category}) and difficulty ({difficulty})");
    }
    Ok(())
}
