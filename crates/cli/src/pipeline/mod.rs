//! Replay pipeline - drives the GPS plugin over a recorded trace.

mod driver;
mod stats;

pub use driver::{ReplayConfig, ReplayDriver};
pub use stats::ReplayStats;
