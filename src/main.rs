use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use acis_engine::calculate::analyze_warzone;
use acis_engine::config::AcisConfig;
use acis_engine::models::{Tier, WarzoneAnalysis};
use acis_engine::storage::{append_analysis, load_roster};

#[derive(Parser)]
#[command(name = "acis")]
#[command(about = "Alliance combat index scoring and matchup analysis")]
#[command(version)]
struct Cli {
    /// Path to configuration file
    #[arg(long, default_value = "./acis.toml")]
    config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Output logs as JSON
    #[arg(long)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Score and rank every alliance in a roster
    Analyze {
        /// Roster file (.json array or .jsonl, one player per line)
        #[arg(long)]
        roster: PathBuf,

        /// Only show the top N alliances
        #[arg(long)]
        top: Option<usize>,

        /// Print the full analysis as JSON instead of a table
        #[arg(long)]
        json: bool,

        /// Append the analysis to a JSONL history file
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Simulate pairwise matchups between alliances
    Matchups {
        /// Roster file (.json array or .jsonl, one player per line)
        #[arg(long)]
        roster: PathBuf,

        /// Only show matchups involving this alliance
        #[arg(long)]
        alliance: Option<String>,
    },

    /// Show the resolved tier table (thresholds and weights)
    Tiers,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cli.log_level));

    if cli.json_logs {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }

    let config = load_config(&cli.config)?;

    match cli.command {
        Commands::Analyze {
            roster,
            top,
            json,
            out,
        } => {
            let players = load_roster(&roster)?;
            let analysis = analyze_warzone(&players, &config)?;

            if let Some(ref path) = out {
                append_analysis(path, &analysis)?;
                tracing::info!("Appended analysis to {:?}", path);
            }

            if json {
                println!("{}", serde_json::to_string_pretty(&analysis)?);
            } else {
                print_rankings(&analysis, top);
            }
        }
        Commands::Matchups { roster, alliance } => {
            let players = load_roster(&roster)?;
            let analysis = analyze_warzone(&players, &config)?;
            print_matchups(&analysis, alliance.as_deref());
        }
        Commands::Tiers => {
            print_tiers(&config);
        }
    }

    Ok(())
}

/// Load configuration, falling back to defaults when the file is absent.
fn load_config(path: &str) -> Result<AcisConfig> {
    if Path::new(path).exists() {
        tracing::info!("Loading config from {}", path);
        Ok(AcisConfig::from_file(path)?)
    } else {
        tracing::debug!("Config file {} not found, using defaults", path);
        Ok(AcisConfig::default())
    }
}

fn print_rankings(analysis: &WarzoneAnalysis, top: Option<usize>) {
    let shown = analysis.top(top.unwrap_or(usize::MAX));

    println!(
        "\n=== Warzone Rankings ({}) ===",
        if analysis.warzone.is_empty() {
            "unknown warzone"
        } else {
            &analysis.warzone
        }
    );
    println!("Floor power: {}", format_power(analysis.floor_power));
    println!(
        "Alliances:   {} ({} shown)\n",
        analysis.alliances.len(),
        shown.len()
    );

    for (rank, alliance) in shown.iter().enumerate() {
        println!(
            "#{:<3} {:<12} score {:>14}  (absolute {}, stability {:.2}, assumed slots {})",
            rank + 1,
            alliance.alliance,
            format_power(alliance.score()),
            format_power(alliance.acs_absolute),
            alliance.stability_factor,
            alliance.assumed_count(),
        );

        let tiers: Vec<String> = alliance
            .tier_counts
            .iter()
            .map(|(tier, count)| format!("{} x{}", tier, count))
            .collect();
        println!("     tiers: {}", tiers.join(", "));
    }
}

fn print_matchups(analysis: &WarzoneAnalysis, alliance: Option<&str>) {
    let matchups: Vec<_> = analysis
        .matchups
        .iter()
        .filter(|m| alliance.map_or(true, |a| m.involves(a)))
        .collect();

    println!("\n=== Matchups ({}) ===\n", matchups.len());
    for m in matchups {
        let outcome = match m.favored() {
            Some(name) => format!("favors {}", name),
            None => "even".to_string(),
        };
        println!(
            "{:<12} vs {:<12} ratio {:>8.2}  {}",
            m.alliance_a, m.alliance_b, m.ratio, outcome
        );
    }
}

fn print_tiers(config: &AcisConfig) {
    println!("\n=== Tier Table ===\n");
    for tier in Tier::ALL {
        let range = match config.tiers.range(tier) {
            Some((min, max)) => format!("{} - {}", format_power(min), format_power(max)),
            None if tier == Tier::MegaWhale => {
                format!("{} and up", format_power(config.tiers.mega_whale_min))
            }
            None if tier == Tier::Krill => {
                format!("below {}", format_power(config.tiers.shrimp_min))
            }
            None => "synthetic only".to_string(),
        };
        println!(
            "{:<12} weight {:<5} {}",
            tier.to_string(),
            config.weights.weight(tier),
            range
        );
    }
}

/// Render a power value compactly (e.g. "42.0M").
fn format_power(power: f64) -> String {
    if power >= 1_000_000.0 {
        format!("{:.1}M", power / 1_000_000.0)
    } else if power >= 1_000.0 {
        format!("{:.1}K", power / 1_000.0)
    } else {
        format!("{:.0}", power)
    }
}
