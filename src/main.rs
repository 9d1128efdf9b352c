//! Wordle Daily - CLI
//!
//! Daily word-guessing game with a terminal UI. Progress for the current
//! day persists across runs.

use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use wordle_daily::{
    engine::GameEngine,
    interactive::{App, run_tui},
    store::{JsonFileStore, StateStore},
    words::{DailyWordList, WordProvider},
};

#[derive(Parser)]
#[command(
    name = "wordle_daily",
    about = "Daily word-guessing game with six attempts and same-day persistence",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play today's game in the terminal (default)
    Play,

    /// Print the secret word for a date
    Peek {
        /// Date in YYYY-MM-DD format (default: today)
        #[arg(short, long)]
        date: Option<String>,
    },

    /// Delete the saved session
    Reset,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(),
        Commands::Peek { date } => run_peek_command(date.as_deref()),
        Commands::Reset => run_reset_command(),
    }
}

fn run_play_command() -> Result<()> {
    let words = DailyWordList::default();
    let store = JsonFileStore::new();
    let today = Local::now().date_naive();

    let engine = GameEngine::start(&words, Box::new(store), today);
    run_tui(App::new(engine))
}

fn run_peek_command(date: Option<&str>) -> Result<()> {
    let date = match date {
        Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d")?,
        None => Local::now().date_naive(),
    };

    let words = DailyWordList::default();
    println!("{}", words.word_for_date(date));
    Ok(())
}

fn run_reset_command() -> Result<()> {
    let store = JsonFileStore::new();
    store.clear()?;
    println!("Saved session cleared.");
    Ok(())
}
