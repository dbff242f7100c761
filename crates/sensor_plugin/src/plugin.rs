//! SensorPlugin trait
//!
//! Common behavior of every emulated sensor: configuration, update-rate gating
//! and data retrieval.

use contracts::{ConfigElement, ContractError};

use crate::gate::UpdateGate;

/// Emulated sensor plugin
///
/// Implementors own an [`UpdateGate`] and produce one `Output` per retrieval.
/// Drivers poll with the current simulator time and forward whatever comes out.
///
/// # Example
///
/// ```ignore
/// let mut gps = GpsPlugin::new(&dynamics, &telemetry);
/// gps.configure(&settings);
/// if let Some(record) = gps.poll(sim_time)? {
///     forward(record);
/// }
/// ```
pub trait SensorPlugin {
    /// Sensor record type
    type Output;

    /// Short sensor name, used in logs and metrics
    fn name(&self) -> &'static str;

    /// Read settings from a configuration element
    ///
    /// Settings missing from the element keep their current value.
    fn configure<E: ConfigElement + ?Sized>(&mut self, element: &E);

    /// Update-rate gate
    fn gate(&self) -> &UpdateGate;

    /// Mutable update-rate gate
    fn gate_mut(&mut self) -> &mut UpdateGate;

    /// Retrieve one record and advance the gate to the sample time
    ///
    /// Host failures propagate unchanged and leave the gate untouched.
    fn get_data(&mut self) -> Result<Self::Output, ContractError>;

    /// Set the minimum interval between updates (seconds)
    fn set_update_rate(&mut self, period: f64) -> Result<(), ContractError> {
        self.gate_mut().set_update_rate(period)
    }

    /// Whether the sensor is due for an update at `now`
    fn is_due(&self, now: f64) -> bool {
        self.gate().is_due(now)
    }

    /// Retrieve a record if one is due at `now`
    fn poll(&mut self, now: f64) -> Result<Option<Self::Output>, ContractError> {
        if !self.is_due(now) {
            observability::record_gated_skip(self.name());
            return Ok(None);
        }
        self.get_data().map(Some)
    }
}
