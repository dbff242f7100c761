//! GPS 传感器插件
//!
//! 将动力学主机属性映射为 `GpsRecord`，再用遥测主机的
//! GNSS 读数覆盖位置和速度。

use contracts::{
    ConfigElement, ContractError, DynamicsHost, GnssReading, GpsRecord, TelemetryHost,
    DEFAULT_GPS_UPDATE_RATE,
};
use tracing::{debug, trace, warn};

use crate::gate::UpdateGate;
use crate::plugin::SensorPlugin;
use crate::properties::GpsPropertyMap;
use crate::units::{course_over_ground_deg, ft_to_m, scaled};

/// 未配置时使用的定位类型（3D 定位）
pub const DEFAULT_FIX_TYPE: f64 = 3.0;

/// 未配置时使用的水平精度 (m)
pub const DEFAULT_EPH_M: f64 = 1.0;

/// 未配置时使用的垂直精度 (m)
pub const DEFAULT_EPV_M: f64 = 2.0;

/// 未配置时使用的卫星数
pub const DEFAULT_SATELLITES: f64 = 16.0;

/// 每条记录上的传感器实例 ID
pub const GPS_SENSOR_ID: u8 = 1;

/// GPS 传感器插件
///
/// Borrows both hosts; the driver owns them.
pub struct GpsPlugin<'a> {
    /// 飞行动力学主机
    dynamics: &'a dyn DynamicsHost,

    /// 遥测主机
    telemetry: &'a dyn TelemetryHost,

    /// 各字段对应的属性名
    properties: GpsPropertyMap,

    /// 更新率门控
    gate: UpdateGate,
}

impl<'a> GpsPlugin<'a> {
    /// Create a GPS plugin with an empty property map and a 1 s update period
    pub fn new(dynamics: &'a dyn DynamicsHost, telemetry: &'a dyn TelemetryHost) -> Self {
        Self {
            dynamics,
            telemetry,
            properties: GpsPropertyMap::default(),
            gate: UpdateGate::fixed(DEFAULT_GPS_UPDATE_RATE),
        }
    }

    /// Current property map
    pub fn properties(&self) -> &GpsPropertyMap {
        &self.properties
    }

    /// Build a record at the telemetry host's current time
    ///
    /// Does not touch the update gate.
    pub fn retrieve(&self) -> Result<GpsRecord, ContractError> {
        let sim_time = self.telemetry.sim_time()?;
        self.retrieve_at(sim_time)
    }

    /// Record built from the dynamics host alone, before the GNSS overlay
    pub fn dynamics_estimate(&self) -> Result<GpsRecord, ContractError> {
        let sim_time = self.telemetry.sim_time()?;
        self.estimate_at(sim_time)
    }

    fn retrieve_at(&self, sim_time: f64) -> Result<GpsRecord, ContractError> {
        let gnss = self.telemetry.gnss()?;

        let mut record = self.estimate_at(sim_time)?;
        debug!(
            source = "dynamics",
            fix_type = record.fix_type,
            eph = record.eph,
            epv = record.epv,
            satellites_visible = record.satellites_visible,
            latitude_deg = record.latitude_deg,
            longitude_deg = record.longitude_deg,
            altitude = record.altitude,
            velocity_north = record.velocity_north,
            velocity_east = record.velocity_east,
            velocity_down = record.velocity_down,
            velocity = record.velocity,
            cog = record.cog,
            "gps estimate"
        );

        // Position and velocity always come from the telemetry host.
        apply_gnss_overlay(&mut record, &gnss);
        debug!(
            source = "telemetry",
            latitude_deg = record.latitude_deg,
            longitude_deg = record.longitude_deg,
            altitude = record.altitude,
            velocity_north = record.velocity_north,
            velocity_east = record.velocity_east,
            velocity_down = record.velocity_down,
            velocity = record.velocity,
            cog = record.cog,
            "gps overlay"
        );

        Ok(record)
    }

    fn estimate_at(&self, sim_time: f64) -> Result<GpsRecord, ContractError> {
        let p = &self.properties;

        let fix_type = self.query_or(p.fix_type.as_deref(), DEFAULT_FIX_TYPE)?;
        let eph = self.query_or(p.eph.as_deref(), DEFAULT_EPH_M)?;
        let epv = self.query_or(p.epv.as_deref(), DEFAULT_EPV_M)?;
        let satellites = self.query_or(p.satellites.as_deref(), DEFAULT_SATELLITES)?;

        let latitude = self.query(&p.latitude)?;
        let longitude = self.query(&p.longitude)?;
        let altitude = self.query(&p.altitude)?;

        let v_north = ft_to_m(self.query(&p.v_north)?);
        let v_east = ft_to_m(self.query(&p.v_east)?);
        let v_down = ft_to_m(self.query(&p.v_down)?);
        let velocity = ft_to_m(self.query(&p.velocity)?);

        Ok(GpsRecord {
            time_utc_usec: scaled(sim_time, 1e6) as u64,
            fix_type: scaled(fix_type, 1.0) as u8,
            eph: scaled(eph, 100.0) as u16,
            epv: scaled(epv, 100.0) as u16,
            latitude_deg: scaled(latitude, 1e7) as i32,
            longitude_deg: scaled(longitude, 1e7) as i32,
            altitude: scaled(altitude, 1e3) as i32,
            velocity: scaled(velocity, 100.0) as u16,
            velocity_north: scaled(v_north, 100.0) as i32,
            velocity_east: scaled(v_east, 100.0) as i32,
            velocity_down: scaled(v_down, 100.0) as i32,
            cog: scaled(course_over_ground_deg(v_north, v_east), 100.0) as i32,
            satellites_visible: scaled(satellites, 1.0) as u8,
            id: GPS_SENSOR_ID,
        })
    }

    fn query(&self, name: &str) -> Result<f64, ContractError> {
        let value = self.dynamics.property(name)?;
        trace!(property = %name, value, "dynamics property");
        Ok(value)
    }

    fn query_or(&self, name: Option<&str>, default: f64) -> Result<f64, ContractError> {
        match name {
            Some(name) => self.query(name),
            None => Ok(default),
        }
    }
}

/// Overwrite position and velocity with a telemetry GNSS reading
///
/// Ground speed becomes the norm of the NED velocity and the course is
/// recomputed from it. Fix type, accuracies and satellites are kept.
pub fn apply_gnss_overlay(record: &mut GpsRecord, gnss: &GnssReading) {
    let position = &gnss.geo_point;
    let velocity = &gnss.velocity;

    record.latitude_deg = scaled(position.latitude, 1e7) as i32;
    record.longitude_deg = scaled(position.longitude, 1e7) as i32;
    record.altitude = scaled(position.altitude, 1e3) as i32;
    record.velocity_north = scaled(velocity.x, 100.0) as i32;
    record.velocity_east = scaled(velocity.y, 100.0) as i32;
    record.velocity_down = scaled(velocity.z, 100.0) as i32;
    record.velocity = scaled(velocity.norm(), 100.0) as u16;
    record.cog = scaled(course_over_ground_deg(velocity.x, velocity.y), 100.0) as i32;
}

impl SensorPlugin for GpsPlugin<'_> {
    type Output = GpsRecord;

    fn name(&self) -> &'static str {
        "gps"
    }

    fn configure<E: ConfigElement + ?Sized>(&mut self, element: &E) {
        self.properties.apply(element);

        let unset = self.properties.unset_required();
        if !unset.is_empty() {
            warn!(settings = ?unset, "gps settings without a property name");
        }
        debug!(properties = ?self.properties, "gps plugin configured");
    }

    fn gate(&self) -> &UpdateGate {
        &self.gate
    }

    fn gate_mut(&mut self) -> &mut UpdateGate {
        &mut self.gate
    }

    fn get_data(&mut self) -> Result<GpsRecord, ContractError> {
        let result = self
            .telemetry
            .sim_time()
            .and_then(|sim_time| Ok((sim_time, self.retrieve_at(sim_time)?)));

        match result {
            Ok((sim_time, record)) => {
                self.gate.mark_updated(sim_time);
                observability::record_gps_retrieval(&record);
                Ok(record)
            }
            Err(e) => {
                observability::record_host_failure(self.name());
                warn!(error = %e, "gps retrieval failed");
                Err(e)
            }
        }
    }
}
