//! Replay statistics.

use std::time::Duration;

use observability::RetrievalMetricsAggregator;

/// Statistics from a replay run
#[derive(Debug, Clone, Default)]
pub struct ReplayStats {
    /// Trace samples visited
    pub samples: u64,

    /// Wall-clock duration of the run
    pub duration: Duration,

    /// Simulation time covered (first to last visited sample, seconds)
    pub sim_span: f64,

    /// Whether the run stopped at the record limit
    pub hit_limit: bool,

    /// Retrieval metrics aggregator
    pub metrics: RetrievalMetricsAggregator,
}

impl ReplayStats {
    /// Records written
    pub fn records(&self) -> u64 {
        self.metrics.total_records
    }

    /// Records per simulated second
    pub fn sim_rate(&self) -> f64 {
        if self.sim_span > 0.0 {
            self.records() as f64 / self.sim_span
        } else {
            0.0
        }
    }

    /// Print detailed summary to stderr; stdout may carry records
    pub fn print_summary(&self) {
        eprintln!("\n=== Replay Statistics ===\n");
        eprintln!("Overview");
        eprintln!("   |- Duration: {:.2}s", self.duration.as_secs_f64());
        eprintln!("   |- Samples: {}", self.samples);
        eprintln!("   |- Simulated span: {:.3}s", self.sim_span);
        eprintln!("   |- Records: {}", self.records());
        eprintln!("   |- Records per sim second: {:.2}", self.sim_rate());
        if self.hit_limit {
            eprintln!("   `- Stopped at record limit");
        } else {
            eprintln!("   `- Trace exhausted");
        }

        eprintln!();
        eprint!("{}", self.metrics.summary());
        eprintln!();
    }
}
