//! PluginBlueprint - Config Loader 的输出
//!
//! 描述要实例化的传感器插件及其设置。

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// 默认 GPS 更新周期（秒）
pub const DEFAULT_GPS_UPDATE_RATE: f64 = 1.0;

/// GPS 插件识别的设置键
pub mod gps_keys {
    pub const FIX_TYPE: &str = "jsb_gps_fix_type";
    pub const LATITUDE: &str = "jsb_gps_lat";
    pub const LONGITUDE: &str = "jsb_gps_lon";
    pub const ALTITUDE: &str = "jsb_gps_alt";
    pub const EPH: &str = "jsb_gps_eph";
    pub const EPV: &str = "jsb_gps_epv";
    pub const V_NORTH: &str = "jsb_gps_v_north";
    pub const V_EAST: &str = "jsb_gps_v_east";
    pub const V_DOWN: &str = "jsb_gps_v_down";
    pub const VELOCITY: &str = "jsb_gps_velocity";
    pub const SATELLITES: &str = "jsb_gps_satellites";

    /// 全部 GPS 设置键
    pub const ALL: [&str; 11] = [
        FIX_TYPE, LATITUDE, LONGITUDE, ALTITUDE, EPH, EPV, V_NORTH, V_EAST, V_DOWN, VELOCITY,
        SATELLITES,
    ];

    /// 未设置或为 `none` 时回退到硬编码默认值的键
    pub const WITH_DEFAULT: [&str; 4] = [FIX_TYPE, EPH, EPV, SATELLITES];
}

/// 配置版本
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ConfigVersion {
    #[default]
    V1,
}

/// 完整的插件配置蓝图
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PluginBlueprint {
    /// 配置版本
    #[serde(default)]
    pub version: ConfigVersion,

    /// GPS 传感器设置
    pub gps: GpsSensorConfig,
}

/// GPS 传感器配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GpsSensorConfig {
    /// 两次更新之间的最小间隔（秒）
    #[serde(default = "default_gps_update_rate")]
    pub update_rate: f64,

    /// 属性名设置，以 `jsb_gps_*` 为键
    #[serde(flatten)]
    pub settings: BTreeMap<String, String>,
}

fn default_gps_update_rate() -> f64 {
    DEFAULT_GPS_UPDATE_RATE
}

impl Default for GpsSensorConfig {
    fn default() -> Self {
        Self {
            update_rate: DEFAULT_GPS_UPDATE_RATE,
            settings: BTreeMap::new(),
        }
    }
}
