use std::path::PathBuf;

use anyhow::Context;
use campusnav::{AppConfig, render_geojson, replay};
use campusnav_core::Navigator;
use campusnav_core::loading::{read_snapshot, read_trace};
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Replay a recorded walk through the campus navigation engine
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Map data snapshot (JSON)
    #[arg(short, long)]
    snapshot: PathBuf,
    /// GPS trace (CSV with latitude,longitude,timestamp)
    #[arg(short, long)]
    trace: PathBuf,
    /// Navigate to this building
    #[arg(long, conflicts_with = "apartment", required_unless_present = "apartment")]
    building: Option<i64>,
    /// Navigate to the building of this apartment
    #[arg(long)]
    apartment: Option<i64>,
    /// Write segments and the final route as GeoJSON
    #[arg(long)]
    geojson: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::default(),
    };

    let default_filter = config.log_filter.as_deref().unwrap_or("info");
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .init();

    let mut navigator = Navigator::new(config.navigation)?;
    let snapshot = read_snapshot(&args.snapshot)
        .with_context(|| format!("failed to load map data from {}", args.snapshot.display()))?;
    navigator.load_snapshot(snapshot)?;

    let target = match (args.building, args.apartment) {
        (Some(id), _) => navigator.target_for_building(id)?,
        (None, Some(id)) => navigator.target_for_apartment(id)?,
        (None, None) => anyhow::bail!("either --building or --apartment is required"),
    };

    let fixes = read_trace(&args.trace)
        .with_context(|| format!("failed to read trace {}", args.trace.display()))?;
    tracing::info!("Replaying {} location fixes", fixes.len());

    let report = replay(&mut navigator, &target, &fixes)?;
    println!("{}", serde_json::to_string_pretty(&report)?);

    if let Some(path) = &args.geojson {
        let collection = render_geojson(&navigator)?;
        std::fs::write(path, serde_json::to_string(&collection)?)
            .with_context(|| format!("failed to write {}", path.display()))?;
        tracing::info!("Wrote GeoJSON to {}", path.display());
    }

    Ok(())
}
