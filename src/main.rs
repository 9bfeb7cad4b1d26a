//! Wordle Duel - CLI
//!
//! Play Wordle against an AI opponent that filters candidate words from the
//! feedback of both players.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rand::Rng;
use std::path::PathBuf;
use wordle_duel::{
    commands::{PlayOptions, run_benchmark, run_play, select_targets, session_rng},
    config::{DEFAULT_MAX_TURNS, DEFAULT_WORD_LENGTH, GameConfig},
    output::print_benchmark_result,
    solver::StrategyType,
    wordlists::WordPools,
};

#[derive(Parser)]
#[command(
    name = "wordle_duel",
    about = "Play Wordle against a candidate-filtering AI",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// AI strategy: diversity (default), random
    #[arg(short, long, global = true, default_value = "diversity")]
    strategy: String,

    /// Number of letters per word
    #[arg(
        short = 'l',
        long,
        global = true,
        default_value_t = DEFAULT_WORD_LENGTH
    )]
    word_length: usize,

    /// Guesses shared by the player and the AI
    #[arg(short = 't', long, global = true, default_value_t = DEFAULT_MAX_TURNS)]
    max_turns: usize,

    /// File of target words, one per line (default: embedded list)
    #[arg(long, global = true)]
    solutions: Option<PathBuf>,

    /// File of extra accepted guesses, one per line (default: embedded list)
    #[arg(long, global = true)]
    guesses: Option<PathBuf>,

    /// Seed for reproducible targets and AI choices
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Show what the AI has learned after every guess
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Play in the terminal, one line per guess (default)
    Play,

    /// Play in a full-screen interface
    Tui,

    /// Let the AI play alone against random targets
    Benchmark {
        /// Number of random targets to play
        #[arg(short = 'n', long, default_value = "100")]
        count: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = GameConfig {
        word_length: cli.word_length,
        max_turns: cli.max_turns,
        solutions_path: cli.solutions.clone(),
        guesses_path: cli.guesses.clone(),
    };
    config.validate()?;

    let pools = WordPools::load(&config).context("Failed to load word lists")?;

    let options = PlayOptions {
        strategy: StrategyType::from_name(&cli.strategy),
        seed: cli.seed,
        verbose: cli.verbose,
    };

    // Default to Play mode if no command given
    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => {
            run_play(&pools, &config, options).context("Terminal I/O failed")?;
            Ok(())
        }
        Commands::Tui => run_tui_command(&pools, &config, options),
        Commands::Benchmark { count } => {
            run_benchmark_command(&pools, &config, options, count);
            Ok(())
        }
    }
}

fn run_tui_command(pools: &WordPools, config: &GameConfig, options: PlayOptions) -> Result<()> {
    use wordle_duel::interactive::{App, run_tui};

    let app = App::new(pools, config.max_turns, options);
    run_tui(app)
}

fn run_benchmark_command(
    pools: &WordPools,
    config: &GameConfig,
    options: PlayOptions,
    count: usize,
) {
    let mut rng = session_rng(options.seed);
    let targets = select_targets(pools, count, &mut rng);

    println!(
        "Running benchmark on {} random words with the {} strategy...",
        targets.len(),
        options.strategy.name()
    );

    let result = run_benchmark(
        pools,
        options.strategy,
        &targets,
        config.max_turns,
        rng.random(),
    );
    print_benchmark_result(&result);
}
