//! GPS 数据类型
//!
//! `GnssReading` 是遥测主机提供的输入，`GpsRecord` 是
//! GPS 插件产出的记录。

use serde::{Deserialize, Serialize};

/// GPS 传感器记录
///
/// 固定布局、整数缩放的数值，可直接填入 HIL GPS 消息。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GpsRecord {
    /// UTC 时间（微秒）
    pub time_utc_usec: u64,

    /// 定位类型代码（3 = 3D 定位）
    pub fix_type: u8,

    /// 水平精度 (cm)
    pub eph: u16,

    /// 垂直精度 (cm)
    pub epv: u16,

    /// 纬度（度 × 1e7）
    pub latitude_deg: i32,

    /// 经度（度 × 1e7）
    pub longitude_deg: i32,

    /// 高度 (mm)
    pub altitude: i32,

    /// 地速 (cm/s)
    pub velocity: u16,

    /// 北向速度 (cm/s)
    pub velocity_north: i32,

    /// 东向速度 (cm/s)
    pub velocity_east: i32,

    /// 地向速度 (cm/s)
    pub velocity_down: i32,

    /// 对地航向（度 × 100）
    pub cog: i32,

    /// 可见卫星数
    pub satellites_visible: u8,

    /// 传感器实例 ID
    pub id: u8,
}

/// 来自遥测主机的 GNSS 读数
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct GnssReading {
    /// 定位位置
    pub geo_point: GeoPoint,

    /// NED 速度 (m/s)
    pub velocity: Vector3,
}

/// 大地坐标位置
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    /// 纬度（度）
    pub latitude: f64,

    /// 经度（度）
    pub longitude: f64,

    /// 高度（米）
    pub altitude: f64,
}

/// 三维向量
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vector3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vector3 {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// 欧几里得范数
    pub fn norm(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }
}

impl From<[f64; 3]> for Vector3 {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Self { x, y, z }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vector_norm() {
        assert_eq!(Vector3::new(3.0, 4.0, 0.0).norm(), 5.0);
        assert_eq!(Vector3::default().norm(), 0.0);
    }

    #[test]
    fn test_record_serializes_flat() {
        let record = GpsRecord {
            fix_type: 3,
            id: 1,
            ..Default::default()
        };
        let json = serde_json::to_value(record).unwrap();
        assert_eq!(json["fix_type"], 3);
        assert_eq!(json["id"], 1);
        assert_eq!(json["latitude_deg"], 0);
    }

    #[test]
    fn test_reading_from_json() {
        let json = r#"{
            "geo_point": { "latitude": 47.1, "longitude": 8.5, "altitude": 488.0 },
            "velocity": { "x": 1.0, "y": 2.0, "z": -0.5 }
        }"#;
        let reading: GnssReading = serde_json::from_str(json).unwrap();
        assert_eq!(reading.geo_point.latitude, 47.1);
        assert_eq!(reading.velocity, Vector3::new(1.0, 2.0, -0.5));
    }
}
