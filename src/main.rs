use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use livescroll::config::Config;
use livescroll::script::{load_fixture, run_script};

/// livescroll - replay cursor commands against a simulated live collection
#[derive(Parser)]
#[command(name = "livescroll")]
#[command(version)]
#[command(about = "Replay cursor commands against a simulated live collection", long_about = None)]
struct Cli {
    /// TOML fixture with the starting items and the script to run
    fixture: PathBuf,

    /// Always align the current item with the top of the viewport
    #[arg(long)]
    snap_to_top: bool,

    /// Marker to put on the current item (repeatable, replaces configured markers)
    #[arg(short, long = "marker")]
    markers: Vec<String>,

    /// Config file (default: ~/.config/livescroll/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_filter.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // CLI flags override the config file
    if cli.snap_to_top {
        config.snap_to_top = true;
    }
    if !cli.markers.is_empty() {
        config.markers = cli.markers;
    }

    let fixture = load_fixture(&cli.fixture)?;
    for line in run_script(&fixture, &config)? {
        println!("{}", line);
    }

    Ok(())
}
