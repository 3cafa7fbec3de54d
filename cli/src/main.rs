use clap::Parser;
use engine::{Game, GameConfig, Session};
use std::io;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "war")]
#[command(about = "Five-territory War game for the terminal")]
struct Cli {
    /// RNG seed for a replayable game (defaults to the clock)
    #[arg(long)]
    seed: Option<u64>,
    /// Do not wait for Enter after each action
    #[arg(long, default_value_t = false)]
    no_pause: bool,
}

fn init_logging() {
    // stderr keeps the game's stdout clean; RUST_LOG=engine=debug shows the dice.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging();

    let cfg = GameConfig {
        seed: cli.seed,
        pause: !cli.no_pause,
    };
    let game = Game::new(&cfg);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(game, stdin.lock(), stdout.lock()).with_pause(cfg.pause);
    let ending = session.run()?;
    tracing::info!(?ending, "game over");
    Ok(())
}
