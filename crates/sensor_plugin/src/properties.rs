//! GPS property map
//!
//! Which dynamics-host property backs each GPS field.

use contracts::{gps_keys, ConfigElement};
use serde::Serialize;

/// Sentinel meaning "use the hardcoded default"
const NONE_SENTINEL: &str = "none";

/// Dynamics-host property names backing the GPS fields
///
/// `Option` fields fall back to a hardcoded default when `None`; the others are
/// always queried, even when empty, and the host decides what an unknown name means.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GpsPropertyMap {
    /// Fix type code (default 3)
    pub fix_type: Option<String>,

    /// Latitude (deg)
    pub latitude: String,

    /// Longitude (deg)
    pub longitude: String,

    /// Altitude (m)
    pub altitude: String,

    /// Horizontal accuracy (m, default 1)
    pub eph: Option<String>,

    /// Vertical accuracy (m, default 2)
    pub epv: Option<String>,

    /// North velocity (ft/s)
    pub v_north: String,

    /// East velocity (ft/s)
    pub v_east: String,

    /// Down velocity (ft/s)
    pub v_down: String,

    /// Total velocity (ft/s)
    pub velocity: String,

    /// Satellites visible (default 16)
    pub satellites: Option<String>,
}

impl GpsPropertyMap {
    /// Build from a configuration element
    pub fn from_element<E: ConfigElement + ?Sized>(element: &E) -> Self {
        let mut map = Self::default();
        map.apply(element);
        map
    }

    /// Override the fields whose settings are present in `element`
    pub fn apply<E: ConfigElement + ?Sized>(&mut self, element: &E) {
        read_optional(element, gps_keys::FIX_TYPE, &mut self.fix_type);
        read_required(element, gps_keys::LATITUDE, &mut self.latitude);
        read_required(element, gps_keys::LONGITUDE, &mut self.longitude);
        read_required(element, gps_keys::ALTITUDE, &mut self.altitude);
        read_optional(element, gps_keys::EPH, &mut self.eph);
        read_optional(element, gps_keys::EPV, &mut self.epv);
        read_required(element, gps_keys::V_NORTH, &mut self.v_north);
        read_required(element, gps_keys::V_EAST, &mut self.v_east);
        read_required(element, gps_keys::V_DOWN, &mut self.v_down);
        read_required(element, gps_keys::VELOCITY, &mut self.velocity);
        read_optional(element, gps_keys::SATELLITES, &mut self.satellites);
    }

    /// Setting keys of always-queried fields that have no property name
    pub fn unset_required(&self) -> Vec<&'static str> {
        [
            (gps_keys::LATITUDE, &self.latitude),
            (gps_keys::LONGITUDE, &self.longitude),
            (gps_keys::ALTITUDE, &self.altitude),
            (gps_keys::V_NORTH, &self.v_north),
            (gps_keys::V_EAST, &self.v_east),
            (gps_keys::V_DOWN, &self.v_down),
            (gps_keys::VELOCITY, &self.velocity),
        ]
        .into_iter()
        .filter(|(_, name)| name.is_empty())
        .map(|(key, _)| key)
        .collect()
    }

    /// Setting keys of fields that fall back to their default
    pub fn defaulted(&self) -> Vec<&'static str> {
        gps_keys::WITH_DEFAULT
            .into_iter()
            .zip(self.sentinel_fields())
            .filter(|(_, name)| name.is_none())
            .map(|(key, _)| key)
            .collect()
    }

    /// Sentinel-able fields, in `gps_keys::WITH_DEFAULT` order
    fn sentinel_fields(&self) -> [&Option<String>; 4] {
        [&self.fix_type, &self.eph, &self.epv, &self.satellites]
    }
}

/// Parse an optional property name; blank or `none` means default
fn optional_property(text: &str) -> Option<String> {
    let text = text.trim();
    if text.is_empty() || text.eq_ignore_ascii_case(NONE_SENTINEL) {
        None
    } else {
        Some(text.to_string())
    }
}

fn read_optional<E: ConfigElement + ?Sized>(
    element: &E,
    key: &str,
    field: &mut Option<String>,
) {
    if let Some(text) = element.child_text(key) {
        *field = optional_property(text);
    }
}

fn read_required<E: ConfigElement + ?Sized>(element: &E, key: &str, field: &mut String) {
    if let Some(text) = element.child_text(key) {
        *field = text.trim().to_string();
    }
}
