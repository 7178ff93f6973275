//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `voter_geo` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - Printing query results as JSON
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use voter_geo::api::NearQuery;
use voter_geo::geo::GeoPoint;
use voter_geo::initialization::init_logger_with;
use voter_geo::{run_group, run_near, run_region, run_seed, serve, Command, Opt};

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env is fine; RUST_LOG and friends may come from the shell
    let _ = dotenvy::dotenv();

    let opt = Opt::parse();
    let config = opt.to_config();

    init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")?;

    if let Err(e) = run(opt, config).await {
        eprintln!("voter_geo error: {:#}", e);
        process::exit(1);
    }
    Ok(())
}

async fn run(opt: Opt, config: voter_geo::Config) -> Result<()> {
    let db_path = config.db_path.clone();
    match opt.command {
        Command::Serve { .. } => serve(config).await,
        Command::Near {
            lat,
            lng,
            radius_km,
            limit,
        } => {
            let query = NearQuery {
                lat,
                lng,
                radius_km,
                limit: Some(limit),
            };
            print_json(&run_near(&db_path, query).await?)
        }
        Command::Region { file } => {
            let body = std::fs::read_to_string(&file)
                .with_context(|| format!("Failed to read region file: {}", file.display()))?;
            print_json(&run_region(&db_path, &body).await?)
        }
        Command::Group { file } => {
            let body = std::fs::read_to_string(&file)
                .with_context(|| format!("Failed to read centroid file: {}", file.display()))?;
            print_json(&run_group(&db_path, &body).await?)
        }
        Command::Seed {
            count,
            lat,
            lng,
            spread_km,
            missing_ratio,
        } => {
            let report = run_seed(
                &db_path,
                count,
                GeoPoint::new(lat, lng),
                spread_km,
                missing_ratio,
            )
            .await?;
            println!(
                "✅ Inserted {} voter{} ({} without coordinates) into {}",
                report.inserted,
                if report.inserted == 1 { "" } else { "s" },
                report.without_coordinates,
                db_path.display()
            );
            Ok(())
        }
    }
}

fn print_json(value: &serde_json::Value) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
