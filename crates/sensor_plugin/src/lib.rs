//! # Sensor Plugin
//!
//! Emulated sensors bridging a flight-dynamics simulator and a vehicle
//! telemetry client.
//!
//! Responsibilities:
//! - Update-rate gating on simulator time
//! - Mapping named dynamics properties into sensor records (unit conversion)
//! - Overlaying the telemetry host's GNSS reading
//!
//! ## Usage Example
//!
//! ```ignore
//! use sensor_plugin::{GpsPlugin, SensorPlugin};
//!
//! let mut gps = GpsPlugin::new(&dynamics, &telemetry);
//! gps.configure(&blueprint.gps.settings);
//! gps.set_update_rate(blueprint.gps.update_rate)?;
//!
//! if let Some(record) = gps.poll(sim_time)? {
//!     // forward record
//! }
//! ```
//!
//! ## Mock Testing
//!
//! ```ignore
//! use sensor_plugin::{MockDynamicsHost, MockTelemetryHost};
//!
//! let dynamics = MockDynamicsHost::new().with_property("position/lat-geod-deg", 47.1);
//! let telemetry = MockTelemetryHost::new();
//! ```

mod gate;
mod gps;
mod mock;
mod plugin;
mod properties;
mod replay;
mod units;

// Re-exports
pub use contracts::GpsRecord;
pub use gate::UpdateGate;
pub use gps::{
    apply_gnss_overlay, GpsPlugin, DEFAULT_EPH_M, DEFAULT_EPV_M, DEFAULT_FIX_TYPE,
    DEFAULT_SATELLITES, GPS_SENSOR_ID,
};
pub use mock::{MockDynamicsHost, MockHostConfig, MockTelemetryHost};
pub use plugin::SensorPlugin;
pub use properties::GpsPropertyMap;
pub use replay::{load_trace, parse_trace, ReplayHost, TraceGnss, TraceSample};
pub use units::{course_over_ground_deg, ft_to_m, wrap_pi_deg, FEET_TO_METERS};
