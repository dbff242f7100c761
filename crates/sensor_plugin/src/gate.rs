//! Update-rate gate
//!
//! Decides whether a sensor is due for a new sample, based on simulator time.

use contracts::ContractError;

/// Update-rate gate
///
/// Tracks the last update time and the minimum period between updates.
/// A period of 0 means every poll is due.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct UpdateGate {
    /// Simulator time of the last successful update (seconds)
    last_update: f64,

    /// Minimum interval between updates (seconds, >= 0)
    period: f64,
}

impl UpdateGate {
    /// Create a gate that is always due
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a gate with an explicit period
    pub fn with_period(period: f64) -> Result<Self, ContractError> {
        let mut gate = Self::new();
        gate.set_update_rate(period)?;
        Ok(gate)
    }

    /// Gate with a known-valid constant period
    pub(crate) const fn fixed(period: f64) -> Self {
        Self {
            last_update: 0.0,
            period,
        }
    }

    /// Set the minimum interval between updates (seconds)
    ///
    /// Negative or non-finite periods are rejected and leave the gate unchanged.
    pub fn set_update_rate(&mut self, period: f64) -> Result<(), ContractError> {
        if !period.is_finite() || period < 0.0 {
            return Err(ContractError::config_validation(
                "update_rate",
                format!("update_rate must be a finite value >= 0, got {period}"),
            ));
        }
        self.period = period;
        Ok(())
    }

    /// Configured period (seconds)
    pub fn update_rate(&self) -> f64 {
        self.period
    }

    /// Simulator time of the last update (seconds)
    pub fn last_update(&self) -> f64 {
        self.last_update
    }

    /// Whether an update is due at `now`
    #[inline]
    pub fn is_due(&self, now: f64) -> bool {
        now - self.last_update >= self.period
    }

    /// Record a successful update at `now`
    pub fn mark_updated(&mut self, now: f64) {
        self.last_update = now;
    }
}
