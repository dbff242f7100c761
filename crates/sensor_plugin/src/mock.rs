//! 模拟仿真主机
//!
//! 用于单元测试和示例的内存主机，支持故障注入。

use std::collections::HashMap;
use std::sync::Mutex;

use contracts::{ContractError, DynamicsHost, GeoPoint, GnssReading, TelemetryHost, Vector3};

/// 模拟主机配置
#[derive(Debug, Default, Clone)]
pub struct MockHostConfig {
    /// 查询时应失败的属性名
    pub fail_properties: Vec<String>,
    /// `sim_time` 查询失败
    pub fail_time: bool,
    /// GNSS 查询失败
    pub fail_gnss: bool,
}

/// 模拟动力学主机
pub struct MockDynamicsHost {
    /// 配置（故障注入）
    config: MockHostConfig,
    /// 仿真时间（秒）
    time: Mutex<f64>,
    /// 属性值
    properties: Mutex<HashMap<String, f64>>,
    /// 按顺序记录的已查询属性名
    queries: Mutex<Vec<String>>,
}

impl MockDynamicsHost {
    /// 创建空的模拟主机
    pub fn new() -> Self {
        Self::with_config(MockHostConfig::default())
    }

    /// 使用配置创建模拟主机
    pub fn with_config(config: MockHostConfig) -> Self {
        Self {
            config,
            time: Mutex::new(0.0),
            properties: Mutex::new(HashMap::new()),
            queries: Mutex::new(Vec::new()),
        }
    }

    /// 构建器风格的属性设置
    pub fn with_property(self, name: &str, value: f64) -> Self {
        self.set_property(name, value);
        self
    }

    /// 设置属性值
    pub fn set_property(&self, name: &str, value: f64) {
        self.properties
            .lock()
            .unwrap()
            .insert(name.to_string(), value);
    }

    /// 设置仿真时间
    pub fn set_time(&self, time: f64) {
        *self.time.lock().unwrap() = time;
    }

    /// 目前已查询的属性名
    pub fn queried(&self) -> Vec<String> {
        self.queries.lock().unwrap().clone()
    }

    /// `name` 是否被查询过
    pub fn was_queried(&self, name: &str) -> bool {
        self.queries.lock().unwrap().iter().any(|q| q == name)
    }
}

impl Default for MockDynamicsHost {
    fn default() -> Self {
        Self::new()
    }
}

impl DynamicsHost for MockDynamicsHost {
    fn sim_time(&self) -> Result<f64, ContractError> {
        if self.config.fail_time {
            return Err(ContractError::host_query("dynamics", "mock failure"));
        }
        Ok(*self.time.lock().unwrap())
    }

    fn property(&self, name: &str) -> Result<f64, ContractError> {
        self.queries.lock().unwrap().push(name.to_string());

        if self.config.fail_properties.iter().any(|p| p == name) {
            return Err(ContractError::host_query("dynamics", "mock failure"));
        }

        self.properties
            .lock()
            .unwrap()
            .get(name)
            .copied()
            .ok_or_else(|| ContractError::property_not_found(name))
    }
}

/// 模拟遥测主机
pub struct MockTelemetryHost {
    /// 配置（故障注入）
    config: MockHostConfig,
    /// 仿真时间（秒）
    time: Mutex<f64>,
    /// 当前 GNSS 读数
    reading: Mutex<GnssReading>,
}

impl MockTelemetryHost {
    /// 创建时间为 0、读数清零的模拟主机
    pub fn new() -> Self {
        Self::with_config(MockHostConfig::default())
    }

    /// 使用配置创建模拟主机
    pub fn with_config(config: MockHostConfig) -> Self {
        Self {
            config,
            time: Mutex::new(0.0),
            reading: Mutex::new(GnssReading::default()),
        }
    }

    /// 设置仿真时间
    pub fn set_time(&self, time: f64) {
        *self.time.lock().unwrap() = time;
    }

    /// 设置定位位置
    pub fn set_position(&self, latitude: f64, longitude: f64, altitude: f64) {
        self.reading.lock().unwrap().geo_point = GeoPoint {
            latitude,
            longitude,
            altitude,
        };
    }

    /// 设置 NED 速度 (m/s)
    pub fn set_velocity(&self, north: f64, east: f64, down: f64) {
        self.reading.lock().unwrap().velocity = Vector3::new(north, east, down);
    }
}

impl Default for MockTelemetryHost {
    fn default() -> Self {
        Self::new()
    }
}

impl TelemetryHost for MockTelemetryHost {
    fn sim_time(&self) -> Result<f64, ContractError> {
        if self.config.fail_time {
            return Err(ContractError::host_query("telemetry", "mock failure"));
        }
        Ok(*self.time.lock().unwrap())
    }

    fn gnss(&self) -> Result<GnssReading, ContractError> {
        if self.config.fail_gnss {
            return Err(ContractError::host_query("telemetry", "mock failure"));
        }
        Ok(*self.reading.lock().unwrap())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_dynamics_property() {
        let host = MockDynamicsHost::new().with_property("position/lat-geod-deg", 47.1);
        assert_eq!(host.property("position/lat-geod-deg").unwrap(), 47.1);
        assert!(matches!(
            host.property("position/unknown"),
            Err(ContractError::PropertyNotFound { .. })
        ));
        assert_eq!(
            host.queried(),
            vec!["position/lat-geod-deg", "position/unknown"]
        );
    }

    #[test]
    fn test_mock_dynamics_failure_injection() {
        let host = MockDynamicsHost::with_config(MockHostConfig {
            fail_properties: vec!["velocities/vg-fps".into()],
            ..Default::default()
        })
        .with_property("velocities/vg-fps", 10.0);

        assert!(matches!(
            host.property("velocities/vg-fps"),
            Err(ContractError::HostQuery { .. })
        ));
    }

    #[test]
    fn test_mock_telemetry_reading() {
        let host = MockTelemetryHost::new();
        host.set_time(2.5);
        host.set_position(48.2, 11.6, 520.0);
        host.set_velocity(3.0, 4.0, 0.0);

        assert_eq!(host.sim_time().unwrap(), 2.5);
        let reading = host.gnss().unwrap();
        assert_eq!(reading.geo_point.latitude, 48.2);
        assert_eq!(reading.velocity.norm(), 5.0);
    }
}
