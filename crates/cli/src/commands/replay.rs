//! `replay` command implementation.

use std::fs::File;
use std::io::{self, BufWriter, Write};

use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::cli::ReplayArgs;
use crate::error::CliError;
use crate::pipeline::{ReplayConfig, ReplayDriver};

/// Execute the `replay` command
pub async fn run_replay(args: &ReplayArgs) -> Result<()> {
    info!(config = %args.config.display(), "Loading configuration");

    if !args.config.exists() {
        return Err(CliError::file_not_found("configuration", &args.config).into());
    }
    if !args.trace.exists() {
        return Err(CliError::file_not_found("trace", &args.trace).into());
    }

    let mut blueprint = config_loader::ConfigLoader::load_from_path(&args.config)
        .with_context(|| format!("Failed to load config from {}", args.config.display()))?;

    // Apply CLI overrides
    if let Some(update_rate) = args.update_rate {
        if !(update_rate.is_finite() && update_rate >= 0.0) {
            return Err(CliError::invalid_argument(
                "update-rate",
                format!("must be a non-negative number, got {update_rate}"),
            )
            .into());
        }
        info!(update_rate, "Overriding GPS update rate from CLI");
        blueprint.gps.update_rate = update_rate;
    }

    let samples = sensor_plugin::load_trace(&args.trace)
        .with_context(|| format!("Failed to load trace from {}", args.trace.display()))?;

    if args.metrics_port != 0 {
        observability::init_metrics_only(args.metrics_port)?;
    }

    let driver = ReplayDriver::new(ReplayConfig {
        blueprint,
        samples,
        max_records: if args.max_records == 0 {
            None
        } else {
            Some(args.max_records)
        },
        realtime: args.realtime,
        speed: args.speed,
        keep_going: args.keep_going,
    })?;

    let mut out: Box<dyn Write> = match &args.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file {}", path.display()))?;
            info!(output = %path.display(), "Writing records to file");
            Box::new(BufWriter::new(file))
        }
        None => Box::new(io::stdout().lock()),
    };

    let shutdown_signal = setup_shutdown_signal();

    let outcome = tokio::select! {
        result = driver.run(&mut out) => Some(result),
        _ = shutdown_signal => None,
    };

    match outcome {
        Some(result) => {
            let stats = result.context("Replay failed")?;
            info!(
                samples = stats.samples,
                records = stats.records(),
                duration_secs = stats.duration.as_secs_f64(),
                "Replay completed"
            );
            stats.print_summary();
        }
        None => {
            warn!("Received shutdown signal, stopping replay...");
            out.flush().context("Failed to flush records")?;
        }
    }

    info!("GPS Bridge finished");
    Ok(())
}

/// Resolve on Ctrl+C or SIGTERM
async fn setup_shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
