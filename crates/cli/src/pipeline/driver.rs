//! Replay driver.
//!
//! Owns a [`ReplayHost`] built from the trace, wires a [`GpsPlugin`] to it and
//! polls the plugin once per sample, writing every produced record as a JSON line.

use std::io::Write;
use std::time::{Duration, Instant};

use contracts::PluginBlueprint;
use sensor_plugin::{GpsPlugin, ReplayHost, SensorPlugin, TraceSample};
use tracing::{debug, info, warn};

use super::ReplayStats;
use crate::error::{CliError, Result};

/// Replay configuration
#[derive(Debug, Clone)]
pub struct ReplayConfig {
    /// Plugin configuration
    pub blueprint: PluginBlueprint,

    /// Recorded samples, sorted by time
    pub samples: Vec<TraceSample>,

    /// Stop after this many records (None = unlimited)
    pub max_records: Option<u64>,

    /// Pace samples by their recorded time deltas
    pub realtime: bool,

    /// Pacing multiplier (2.0 = twice as fast)
    pub speed: f64,

    /// Count host failures and continue instead of aborting
    pub keep_going: bool,
}

/// Replay driver
pub struct ReplayDriver {
    config: ReplayConfig,
}

impl ReplayDriver {
    /// Create a driver; rejects a non-positive pacing speed
    pub fn new(config: ReplayConfig) -> Result<Self> {
        if !(config.speed.is_finite() && config.speed > 0.0) {
            return Err(CliError::invalid_argument(
                "speed",
                format!("must be a positive number, got {}", config.speed),
            ));
        }
        Ok(Self { config })
    }

    /// Run the replay to completion, writing records to `out`
    pub async fn run<W: Write>(self, out: &mut W) -> Result<ReplayStats> {
        let start = Instant::now();
        let ReplayConfig {
            blueprint,
            samples,
            max_records,
            realtime,
            speed,
            keep_going,
        } = self.config;

        let host = ReplayHost::new(samples)?;
        let mut gps = GpsPlugin::new(&host, &host);
        gps.configure(&blueprint.gps.settings);
        gps.set_update_rate(blueprint.gps.update_rate)?;

        info!(
            samples = host.len(),
            update_rate = blueprint.gps.update_rate,
            realtime,
            "Replay started"
        );

        let mut stats = ReplayStats::default();
        let first_time = host.current().time;
        let mut previous_time = first_time;

        loop {
            let sample_time = host.current().time;

            if realtime {
                let delta = (sample_time - previous_time) / speed;
                if delta.is_finite() && delta > 0.0 {
                    tokio::time::sleep(Duration::from_secs_f64(delta)).await;
                }
            }
            previous_time = sample_time;
            stats.samples += 1;

            match gps.poll(sample_time) {
                Ok(Some(record)) => {
                    serde_json::to_writer(&mut *out, &record)?;
                    out.write_all(b"\n")?;
                    stats.metrics.update(&record);

                    if max_records.is_some_and(|max| stats.records() >= max) {
                        info!(records = stats.records(), "Record limit reached");
                        stats.hit_limit = true;
                        break;
                    }
                }
                Ok(None) => {
                    debug!(time = sample_time, "gps not due");
                    stats.metrics.record_skip();
                }
                Err(e) => {
                    stats.metrics.record_failure();
                    if !keep_going {
                        return Err(e.into());
                    }
                    warn!(
                        sample = host.position(),
                        time = sample_time,
                        error = %e,
                        "Skipping sample after host failure"
                    );
                }
            }

            if !host.advance() {
                break;
            }
        }

        out.flush()?;

        stats.sim_span = previous_time - first_time;
        stats.duration = start.elapsed();
        Ok(stats)
    }
}
