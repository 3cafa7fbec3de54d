use clap::Parser;
use engine::api::{simulate_siege_many, SiegeConfig};
use std::io;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "simulate-battle")]
#[command(about = "Monte Carlo sim: repeated attacks of one garrison on another")]
struct Args {
    /// Troops in the attacking territory (must be >= 2)
    #[arg(long)]
    attacker_troops: u32,

    /// Troops in the defending territory
    #[arg(long)]
    defender_troops: u32,

    /// Number of trials
    #[arg(long, default_value_t = 1000)]
    trials: u32,

    /// RNG base seed (trial i uses seed+i)
    #[arg(long, default_value_t = 12345)]
    seed: u64,

    /// Print the summary as JSON
    #[arg(long, default_value_t = false)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cfg = SiegeConfig {
        attacker_troops: args.attacker_troops,
        defender_troops: args.defender_troops,
        seed: args.seed,
    };
    let stats = simulate_siege_many(&cfg, args.trials)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(());
    }

    println!("simulate-battle results");
    println!("-----------------------");
    println!("trials:               {}", stats.samples);
    println!(
        "garrisons:            attacker {} vs defender {}",
        cfg.attacker_troops, cfg.defender_troops
    );
    println!();
    println!("conquest rate:        {:.1}%", stats.conquest_rate * 100.0);
    println!("conquests:            {}", stats.conquests);
    println!("repulses:             {}", stats.repulses);
    println!("avg battles:          {:.2}", stats.avg_battles);
    println!("avg troops left:      {:.2}", stats.avg_attacker_troops_left);

    Ok(())
}
