//! Assembly: Endgame - CLI
//!
//! Word-guessing game with TUI and CLI modes, plus a bot simulator.

use anyhow::{Context, Result};
use assembly_endgame::{
    bot::GuesserType,
    commands::{SimulateConfig, run_simple, run_simulation},
    core::TargetWord,
    languages::LivesTable,
    output::print_simulation_result,
    wordlists::{
        RandomWordSupplier, SequenceSupplier, WORDS, WORDS_COUNT, WordSupplier,
        loader::{load_from_file, words_from_slice},
    },
};
use clap::{Parser, Subcommand};
use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "assembly_endgame",
    about = "Guess the word before the programming world is left with only Assembly",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'builtin' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "builtin")]
    wordlist: String,

    /// Lives table: 'builtin' (default) or path to a file of 'name, #bg, #fg' rows
    #[arg(short = 'l', long, global = true, default_value = "builtin")]
    lives: String,

    /// Seed for word selection (random when omitted)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Play the word list in file order instead of picking at random
    #[arg(long, global = true)]
    in_order: bool,

    /// Write logs to this file instead of stderr (filter with RUST_LOG)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based game without TUI)
    Simple,

    /// Let a bot play many games and report statistics
    Simulate {
        /// Number of games to play
        #[arg(short = 'n', long, default_value = "1000")]
        count: usize,

        /// Strategy: candidate (default), frequency, random
        #[arg(short, long, default_value = "candidate")]
        strategy: String,
    },
}

/// Install the tracing subscriber
///
/// Logs go to `log_file` when given, stderr otherwise. The TUI owns the
/// terminal, so interactive sessions only log when a file is supplied.
fn init_logging(log_file: Option<&PathBuf>, interactive: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create log file {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        None if interactive => {}
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }
    Ok(())
}

/// Load the word list based on the -w flag
fn load_words(wordlist: &str) -> Result<Vec<TargetWord>> {
    let words = match wordlist {
        "builtin" => {
            let words = words_from_slice(WORDS);
            debug!(embedded = WORDS_COUNT, usable = words.len(), "builtin word list");
            words
        }
        path => {
            load_from_file(path).with_context(|| format!("Failed to read wordlist {path}"))?
        }
    };
    info!(count = words.len(), source = wordlist, "loaded words");
    Ok(words)
}

/// Load the lives table based on the -l flag
fn load_lives(lives: &str) -> Result<LivesTable> {
    let table = match lives {
        "builtin" => LivesTable::builtin(),
        path => LivesTable::from_file(path)
            .with_context(|| format!("Failed to load lives table {path}"))?,
    };
    info!(languages = table.len(), budget = table.budget(), "loaded lives table");
    Ok(table)
}

fn main() -> Result<()> {
    let mut cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.take().unwrap_or(Commands::Play);
    init_logging(cli.log_file.as_ref(), matches!(command, Commands::Play))?;

    let words = load_words(&cli.wordlist)?;
    let lives = load_lives(&cli.lives)?;

    match command {
        Commands::Play => run_play_command(supplier(words, &cli)?, lives),
        Commands::Simple => run_simple_command(supplier(words, &cli)?, &lives),
        Commands::Simulate { count, strategy } => {
            run_simulate_command(&words, &lives, count, &strategy, cli.seed)
        }
    }
}

/// Word supplier for the interactive modes
fn supplier(words: Vec<TargetWord>, cli: &Cli) -> Result<Box<dyn WordSupplier>> {
    let supplier: Box<dyn WordSupplier> = match (cli.in_order, cli.seed) {
        (true, _) => Box::new(SequenceSupplier::new(words)?),
        (false, Some(seed)) => Box::new(RandomWordSupplier::with_seed(words, seed)?),
        (false, None) => Box::new(RandomWordSupplier::new(words)?),
    };
    Ok(supplier)
}

fn run_play_command(supplier: Box<dyn WordSupplier>, lives: LivesTable) -> Result<()> {
    use assembly_endgame::interactive::{App, run_tui};

    run_tui(App::new(supplier, lives))
}

fn run_simple_command(mut supplier: Box<dyn WordSupplier>, lives: &LivesTable) -> Result<()> {
    run_simple(&mut supplier, lives)?;
    Ok(())
}

fn run_simulate_command(
    words: &[TargetWord],
    lives: &LivesTable,
    count: usize,
    strategy_name: &str,
    seed: Option<u64>,
) -> Result<()> {
    let guesser = GuesserType::from_name(strategy_name, words);
    println!(
        "Simulating {count} games with the {} strategy ({} lives)...",
        guesser.name(),
        lives.budget()
    );

    let config = SimulateConfig {
        seed,
        ..SimulateConfig::new(count)
    };
    let result = run_simulation(&guesser, words, lives.budget(), &config)
        .context("Word list contains no valid words")?;

    print_simulation_result(&result, guesser.name());
    Ok(())
}
