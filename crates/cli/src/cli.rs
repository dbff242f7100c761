//! CLI argument definitions using clap.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// GPS Bridge - emulated GPS sensor over a flight-dynamics simulator
#[derive(Parser, Debug)]
#[command(
    name = "gps-bridge",
    author,
    version,
    about = "Emulated GPS sensor bridging a flight-dynamics simulator and a telemetry client",
    long_about = "Maps named flight-dynamics properties and telemetry GNSS readings into\n\
                  GPS sensor records.\n\n\
                  Validates plugin configurations and replays recorded simulator traces\n\
                  through the GPS plugin, emitting one JSON record per update."
)]
pub struct Cli {
    /// Increase logging verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true, env = "GPS_BRIDGE_VERBOSE")]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log output format
    #[arg(
        long,
        value_enum,
        default_value = "pretty",
        global = true,
        env = "GPS_BRIDGE_LOG_FORMAT"
    )]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Replay a recorded simulator trace through the GPS plugin
    Replay(ReplayArgs),

    /// Validate configuration file without running
    Validate(ValidateArgs),

    /// Display the resolved GPS property map
    Info(InfoArgs),
}

/// Arguments for the `replay` command
#[derive(Parser, Debug, Clone)]
pub struct ReplayArgs {
    /// Path to configuration file (TOML or JSON)
    #[arg(short, long, default_value = "gps.toml", env = "GPS_BRIDGE_CONFIG")]
    pub config: PathBuf,

    /// Path to the recorded trace (JSONL, one simulator sample per line)
    #[arg(short, long, env = "GPS_BRIDGE_TRACE")]
    pub trace: PathBuf,

    /// Write records to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Override the GPS update period from configuration (seconds)
    #[arg(long)]
    pub update_rate: Option<f64>,

    /// Maximum number of records to produce (0 = unlimited)
    #[arg(long, default_value = "0", env = "GPS_BRIDGE_MAX_RECORDS")]
    pub max_records: u64,

    /// Pace samples by their recorded time deltas
    #[arg(long)]
    pub realtime: bool,

    /// Replay speed multiplier for --realtime (1.0 = original speed)
    #[arg(long, default_value = "1.0")]
    pub speed: f64,

    /// Keep going when a host query fails instead of stopping
    #[arg(long)]
    pub keep_going: bool,

    /// Metrics server port (0 = disabled)
    #[arg(long, default_value = "0", env = "GPS_BRIDGE_METRICS_PORT")]
    pub metrics_port: u16,
}

/// Arguments for the `validate` command
#[derive(Parser, Debug)]
pub struct ValidateArgs {
    /// Path to configuration file to validate
    #[arg(short, long, default_value = "gps.toml")]
    pub config: PathBuf,

    /// Output validation result as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `info` command
#[derive(Parser, Debug)]
pub struct InfoArgs {
    /// Path to configuration file
    #[arg(short, long, default_value = "gps.toml")]
    pub config: PathBuf,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Log output format
#[derive(ValueEnum, Clone, Copy, Debug, Default)]
pub enum LogFormat {
    /// JSON structured logging
    Json,
    /// Human-readable pretty format
    #[default]
    Pretty,
    /// Compact single-line format
    Compact,
}

impl From<LogFormat> for observability::LogFormat {
    fn from(format: LogFormat) -> Self {
        match format {
            LogFormat::Json => Self::Json,
            LogFormat::Pretty => Self::Pretty,
            LogFormat::Compact => Self::Compact,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_replay() {
        let cli = Cli::parse_from([
            "gps-bridge",
            "-v",
            "replay",
            "-c",
            "plane.toml",
            "-t",
            "flight.jsonl",
            "--max-records",
            "10",
        ]);
        assert_eq!(cli.verbose, 1);
        match cli.command {
            Commands::Replay(args) => {
                assert_eq!(args.config, PathBuf::from("plane.toml"));
                assert_eq!(args.trace, PathBuf::from("flight.jsonl"));
                assert_eq!(args.max_records, 10);
                assert!(!args.realtime);
                assert_eq!(args.speed, 1.0);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
