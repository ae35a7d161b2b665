//! draw-auction — Command-line interface to the draw auction reward engine.
//!
//! Evaluates the reward curve, splits a reserve over completed phases, and
//! reports where the current draw sequence stands.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use draw_core::fixed::UFraction;
use draw_core::traits::AuctionTracker;
use draw_core::types::AuctionResult;
use draw_rewards::{current_reward_portion, distribute, AuctionConfig, RngAuction};
use tracing::{debug, info};

/// Draw auction reward engine.
#[derive(Parser)]
#[command(name = "draw-auction")]
#[command(version, about = "Parabolic draw auction rewards.")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Reward fraction at a point in an auction.
    Portion(PortionArgs),
    /// Split a reserve over completed phases, in order.
    Distribute(DistributeArgs),
    /// Show the draw sequence and auction state at a given time.
    Schedule(ScheduleArgs),
}

#[derive(Args)]
struct PortionArgs {
    /// Seconds elapsed in the auction.
    #[arg(short, long)]
    elapsed: u64,

    /// Auction duration in seconds.
    #[arg(short, long)]
    duration: u64,

    /// Elapsed fraction at which the target reward is paid.
    #[arg(short = 't', long, default_value = "0.5")]
    target_time: UFraction,

    /// Reward fraction paid at the target time.
    #[arg(short = 'r', long, default_value = "0.5")]
    target_reward: UFraction,
}

#[derive(Args)]
struct DistributeArgs {
    /// JSON file holding an array of `{ "recipient", "reward_fraction" }`.
    #[arg(short = 'f', long)]
    results: PathBuf,

    /// Reserve to distribute, in the smallest token unit.
    #[arg(short, long)]
    reserve: u128,
}

#[derive(Args)]
struct ScheduleArgs {
    /// Unix time to evaluate at.
    #[arg(short, long)]
    now: u64,

    /// Config file (default: ~/.draw-auction/config.json if present).
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Portion(args) => portion(args),
        Commands::Distribute(args) => distribute_reserve(args),
        Commands::Schedule(args) => schedule(args),
    }
}

fn portion(args: PortionArgs) -> Result<()> {
    let fraction = current_reward_portion(
        args.elapsed,
        args.duration,
        args.target_time,
        args.target_reward,
    )
    .context("failed to evaluate reward curve")?;
    debug!(elapsed = args.elapsed, duration = args.duration, %fraction, "portion evaluated");
    println!("{fraction}");
    Ok(())
}

fn distribute_reserve(args: DistributeArgs) -> Result<()> {
    let json = std::fs::read_to_string(&args.results)
        .with_context(|| format!("failed to read {}", args.results.display()))?;
    let results: Vec<AuctionResult> =
        serde_json::from_str(&json).context("failed to parse auction results")?;

    let distribution = distribute(&results, args.reserve).context("distribution failed")?;
    for (result, amount) in results.iter().zip(&distribution.amounts) {
        println!("{}  {}  {}", result.recipient, result.reward_fraction, amount);
    }
    println!("Paid:      {}", distribution.total());
    println!("Remaining: {}", distribution.remaining);
    info!(phases = results.len(), reserve = %args.reserve, "reserve distributed");
    Ok(())
}

fn schedule(args: ScheduleArgs) -> Result<()> {
    let config = load_config(args.config.as_deref())?;
    let auction = RngAuction::from_config(&config).context("invalid auction config")?;
    let sequence = auction.sequence();

    let sequence_id = sequence.sequence_id(args.now)?;
    let elapsed = sequence.elapsed_time(args.now)?;
    let open = sequence.is_auction_open(args.now)?;

    println!("Sequence:  {sequence_id}");
    println!("Elapsed:   {elapsed}s of {}s", auction.auction_duration());
    println!("Open:      {open}");
    if open {
        println!("Portion:   {}", auction.current_reward_portion(args.now)?);
    }
    Ok(())
}

fn load_config(path: Option<&Path>) -> Result<AuctionConfig> {
    let path = match path {
        Some(p) => Some(p.to_path_buf()),
        None => default_config_path().filter(|p| p.exists()),
    };
    match path {
        Some(p) => {
            debug!(path = %p.display(), "loading config");
            AuctionConfig::from_json_file(&p)
                .with_context(|| format!("failed to load config {}", p.display()))
        }
        None => Ok(AuctionConfig::default()),
    }
}

fn default_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".draw-auction").join("config.json"))
}
