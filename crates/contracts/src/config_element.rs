//! ConfigElement - configuration tree lookup
//!
//! Plugins read their settings by child name from a configuration element.
//! Decouples plugins from the concrete config format (TOML table, JSON object, ...).

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

/// Configuration element exposing string-valued child settings
pub trait ConfigElement {
    /// Raw text of the named child setting, `None` if absent
    fn child_text(&self, name: &str) -> Option<&str>;
}

impl ConfigElement for BTreeMap<String, String> {
    fn child_text(&self, name: &str) -> Option<&str> {
        self.get(name).map(String::as_str)
    }
}

impl<S: BuildHasher> ConfigElement for HashMap<String, String, S> {
    fn child_text(&self, name: &str) -> Option<&str> {
        self.get(name).map(String::as_str)
    }
}

impl ConfigElement for [(&str, &str)] {
    fn child_text(&self, name: &str) -> Option<&str> {
        self.iter().find(|(key, _)| *key == name).map(|(_, value)| *value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_lookup() {
        let mut settings = BTreeMap::new();
        settings.insert("jsb_gps_lat".to_string(), "position/lat-geod-deg".to_string());

        assert_eq!(
            settings.child_text("jsb_gps_lat"),
            Some("position/lat-geod-deg")
        );
        assert_eq!(settings.child_text("jsb_gps_lon"), None);
    }

    #[test]
    fn test_slice_lookup() {
        let settings: &[(&str, &str)] = &[("jsb_gps_eph", "none"), ("jsb_gps_epv", "")];
        assert_eq!(settings.child_text("jsb_gps_eph"), Some("none"));
        assert_eq!(settings.child_text("jsb_gps_epv"), Some(""));
        assert_eq!(settings.child_text("jsb_gps_alt"), None);
    }
}
