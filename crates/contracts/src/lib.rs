//! # Contracts
//!
//! Frozen interface contracts shared by the plugin, the config loader and the drivers.
//! Business crates depend on this crate only, never the other way around.
//!
//! ## Time Model
//! - Simulator time in seconds (f64) is the only clock
//! - Output records carry it converted to microseconds

mod blueprint;
mod config_element;
mod error;
mod gps;
mod host;

pub use blueprint::*;
pub use config_element::ConfigElement;
pub use error::*;
pub use gps::*;
pub use host::{DynamicsHost, TelemetryHost};
