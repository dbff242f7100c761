//! Host abstractions
//!
//! The two simulators the plugin reads from. Both are owned by the driver;
//! plugins only borrow them.

use crate::{ContractError, GnssReading};

/// Flight-dynamics simulator exposing named numeric properties
///
/// Properties are looked up by string at run time (e.g. `"position/lat-geod-deg"`),
/// there is no static schema. Unknown names are reported by the host.
pub trait DynamicsHost {
    /// Current simulation time (seconds)
    fn sim_time(&self) -> Result<f64, ContractError>;

    /// Read a named property
    fn property(&self, name: &str) -> Result<f64, ContractError>;
}

/// Vehicle simulation / telemetry client
pub trait TelemetryHost {
    /// Current simulation time (seconds)
    fn sim_time(&self) -> Result<f64, ContractError>;

    /// Latest GNSS reading, in host-native units
    fn gnss(&self) -> Result<GnssReading, ContractError>;
}
