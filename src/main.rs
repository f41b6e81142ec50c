use std::io::{self, BufRead};
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;

use memoarrr::cards::CardPool;
use memoarrr::collab::Console;
use memoarrr::core::{DisplayMode, MatchConfig, RulesMode};
use memoarrr::engine::Match;

/// Play a match of Memoarrr! in the terminal.
#[derive(Parser)]
#[command(name = "memoarrr", about = "Play Memoarrr! in the terminal")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "memoarrr.toml")]
    config: PathBuf,

    /// Play with animal abilities
    #[arg(long)]
    expert: bool,

    /// Show only the face-up cards instead of the full grid
    #[arg(long)]
    expert_display: bool,

    /// Seed for the card and ruby supplies
    #[arg(long)]
    seed: Option<u64>,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let mut config = MatchConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout(), config.display);

    if config.players.is_empty() {
        console.configure(&mut config).context("setting up the match")?;
    }

    // Apply CLI overrides
    if cli.expert {
        config.rules = RulesMode::Expert;
    }
    if cli.expert_display {
        config.display = DisplayMode::Expert;
    }
    if let Some(seed) = cli.seed {
        config.seed = Some(seed);
    }
    config.validate()?;
    console.set_display(config.display);

    play(&config, &mut console)
}

fn play<R: BufRead>(config: &MatchConfig, console: &mut Console<R, io::Stdout>) -> Result<()> {
    let roster = config.roster()?;
    let mut game = Match::setup(config, roster, Arc::new(CardPool::standard()))
        .context("dealing the board")?;
    game.play(console).context("playing the match")?;
    Ok(())
}
