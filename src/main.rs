use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use f1_stats::api::{build_router, state::AppState};
use f1_stats::calculate::comparison::{compare, default_pair, HeadToHead};
use f1_stats::calculate::{aggregate, rank, summarize};
use f1_stats::config::AppConfig;
use f1_stats::models::RankedDriver;
use f1_stats::storage::{load_season, StorageConfig};

#[derive(Parser)]
#[command(name = "f1-stats")]
#[command(about = "Formula 1 driver statistics from season race results")]
#[command(version)]
struct Cli {
    /// Path to configuration file
    #[arg(long, default_value = "./f1-stats.toml")]
    config: PathBuf,

    /// Data directory path (overrides the config file)
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Output logs as JSON
    #[arg(long)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List configured seasons
    Seasons,

    /// Print the driver standings for a season
    Standings {
        /// Season year (defaults to the configured default season)
        #[arg(long)]
        season: Option<String>,

        /// Only show the top N drivers
        #[arg(long)]
        limit: Option<usize>,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Compare two drivers head to head
    Compare {
        /// Season year (defaults to the configured default season)
        #[arg(long)]
        season: Option<String>,

        /// First driver (defaults to the championship leader)
        #[arg(long)]
        driver1: Option<String>,

        /// Second driver (defaults to second place)
        #[arg(long)]
        driver2: Option<String>,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Start the API server
    Serve {
        /// Bind address
        #[arg(long)]
        host: Option<String>,

        /// Port number
        #[arg(long)]
        port: Option<u16>,
    },
}

fn init_tracing(log_level: &str, json: bool) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level));

    let registry = tracing_subscriber::registry().with(filter);
    if json {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

fn print_standings(season: &str, drivers: &[RankedDriver]) {
    println!("\n=== {} Season Standings ===", season);
    println!(
        "{:>4}  {:<24} {:<28} {:>7} {:>5} {:>5} {:>7} {:>5} {:>7}",
        "Pos", "Driver", "Team", "Points", "Races", "Wins", "Podiums", "FL", "AvgPos"
    );
    for d in drivers {
        let s = &d.stats;
        println!(
            "{:>4}  {:<24} {:<28} {:>7} {:>5} {:>5} {:>7} {:>5} {:>7}",
            d.rank,
            s.driver,
            s.team,
            s.total_points,
            s.races,
            s.wins,
            s.podiums,
            s.fastest_laps,
            s.average_position_label()
        );
    }
}

fn print_head_to_head(season: &str, h2h: &HeadToHead) {
    let (d1, d2) = (&h2h.driver1, &h2h.driver2);
    println!("\n=== {} Head to Head ===", season);
    println!("{:<16} {:>24} {:>24}", "", d1.driver, d2.driver);
    println!("{:<16} {:>24} {:>24}", "Team", d1.team, d2.team);
    for m in &h2h.metrics {
        println!("{:<16} {:>24} {:>24}", m.metric, m.left, m.right);
    }
    println!(
        "{:<16} {:>24} {:>24}",
        "Avg Position",
        d1.average_position_label(),
        d2.average_position_label()
    );
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load_or_default(&cli.config)?;
    if let Some(dir) = cli.data_dir {
        config.data_dir = dir;
    }
    if let Some(level) = cli.log_level {
        config.log_level = level;
    }

    init_tracing(&config.log_level, cli.json_logs);
    tracing::debug!("Starting f1-stats v{}", env!("CARGO_PKG_VERSION"));

    let storage = StorageConfig::new(config.data_dir.clone());

    match cli.command {
        Commands::Seasons => {
            for s in &config.seasons {
                let marker = if s.year == config.default_season { "*" } else { " " };
                let status = if storage.season_path(s).exists() {
                    "available"
                } else {
                    "missing"
                };
                println!("{} {}  {}  ({})", marker, s.year, s.file, status);
            }
        }
        Commands::Standings {
            season,
            limit,
            json,
        } => {
            let season = season.unwrap_or_else(|| config.default_season.clone());
            let results = load_season(&storage, &config.seasons, &season)?;
            let summary = summarize(&season, &results);
            let mut drivers = rank(aggregate(&results));
            if let Some(n) = limit {
                drivers.truncate(n);
            }

            if json {
                println!("{}", serde_json::to_string_pretty(&drivers)?);
            } else {
                print_standings(&season, &drivers);
                println!(
                    "\n{} drivers, {} races, {} results",
                    summary.drivers, summary.races, summary.results
                );
            }
        }
        Commands::Compare {
            season,
            driver1,
            driver2,
            json,
        } => {
            let season = season.unwrap_or_else(|| config.default_season.clone());
            let results = load_season(&storage, &config.seasons, &season)?;
            let stats = aggregate(&results);
            let (top1, top2) = default_pair(&stats);

            let (d1, d2) = match (driver1.as_deref().or(top1), driver2.as_deref().or(top2)) {
                (Some(d1), Some(d2)) => (d1, d2),
                _ => bail!("Season {} has fewer than two drivers to compare", season),
            };
            let h2h = compare(&stats, d1, d2)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&h2h)?);
            } else {
                print_head_to_head(&season, &h2h);
            }
        }
        Commands::Serve { host, port } => {
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }
            config.validate()?;

            let state = AppState::from_config(&config);
            let app = build_router(state);
            let addr = format!("{}:{}", config.server.host, config.server.port);
            let listener = tokio::net::TcpListener::bind(&addr).await?;
            tracing::info!("Dashboard API: http://{}", addr);
            axum::serve(listener, app).await?;
        }
    }

    Ok(())
}
