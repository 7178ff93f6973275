//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::config::constants::{
    DB_PATH, DEFAULT_NEAR_LIMIT, DEFAULT_PORT, DEFAULT_SEED_COUNT, DEFAULT_SEED_MISSING_RATIO,
    DEFAULT_SEED_SPREAD_KM,
};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Library configuration (no CLI dependencies).
///
/// # Examples
///
/// ```no_run
/// use voter_geo::Config;
/// use std::path::PathBuf;
///
/// let config = Config {
///     db_path: PathBuf::from("./campaign.db"),
///     port: 8080,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Database path (SQLite file)
    pub db_path: PathBuf,

    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,

    /// HTTP API port
    pub port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            db_path: PathBuf::from(DB_PATH),
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
            port: DEFAULT_PORT,
        }
    }
}

/// Command-line options.
///
/// # Examples
///
/// ```bash
/// # Serve the HTTP API
/// voter_geo --db-path ./campaign.db serve --port 8080
///
/// # Voters within 2 km of a point
/// voter_geo near --lat -23.5505 --lng -46.6333 --radius-km 2
///
/// # Voters inside a drawn region
/// voter_geo region --file region.json
/// ```
#[derive(Debug, Parser)]
#[command(
    name = "voter_geo",
    about = "Geofencing and proximity queries over voter records."
)]
pub struct Opt {
    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Info, global = true)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain, global = true)]
    pub log_format: LogFormat,

    /// Database path (SQLite file)
    #[arg(long, value_parser, default_value = DB_PATH, global = true)]
    pub db_path: PathBuf,

    /// Operation to run
    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands of the CLI.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Serve the HTTP API
    Serve {
        /// Port to listen on (127.0.0.1)
        #[arg(long, default_value_t = DEFAULT_PORT)]
        port: u16,
    },

    /// Voters within a radius of a point, nearest first
    Near {
        /// Center latitude
        #[arg(long, allow_hyphen_values = true)]
        lat: f64,
        /// Center longitude
        #[arg(long, allow_hyphen_values = true)]
        lng: f64,
        /// Search radius in kilometers
        #[arg(long)]
        radius_km: f64,
        /// Maximum number of voters to return
        #[arg(long, default_value_t = DEFAULT_NEAR_LIMIT)]
        limit: usize,
    },

    /// Voters inside a circle or polygon read from a JSON file
    ///
    /// The file uses the same body as `POST /voters/in-region`, e.g.
    /// {"type":"POLYGON","points":[{"lat":0,"lng":0},...]}
    Region {
        /// JSON region definition
        #[arg(long, value_parser)]
        file: PathBuf,
    },

    /// Voters grouped by proximity to labelled centroids read from a JSON file
    ///
    /// The file uses the same body as `POST /voters/by-proximity`.
    Group {
        /// JSON centroid list and maximum distance
        #[arg(long, value_parser)]
        file: PathBuf,
    },

    /// Insert random demo voters around a point
    Seed {
        /// Number of voters to insert
        #[arg(long, default_value_t = DEFAULT_SEED_COUNT)]
        count: usize,
        /// Center latitude
        #[arg(long, allow_hyphen_values = true)]
        lat: f64,
        /// Center longitude
        #[arg(long, allow_hyphen_values = true)]
        lng: f64,
        /// Scatter radius in kilometers
        #[arg(long, default_value_t = DEFAULT_SEED_SPREAD_KM)]
        spread_km: f64,
        /// Share of voters inserted without coordinates (0.0-1.0)
        #[arg(long, default_value_t = DEFAULT_SEED_MISSING_RATIO)]
        missing_ratio: f64,
    },
}

impl Opt {
    /// Library configuration derived from the global options.
    pub fn to_config(&self) -> Config {
        let port = match self.command {
            Command::Serve { port } => port,
            _ => DEFAULT_PORT,
        };
        Config {
            db_path: self.db_path.clone(),
            log_level: self.log_level.clone(),
            log_format: self.log_format.clone(),
            port,
        }
    }
}
