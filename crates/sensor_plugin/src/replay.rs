//! Replay Host - 用录制的仿真轨迹驱动插件
//!
//! 读取 JSONL 轨迹，每行一个仿真样本：时间、
//! 该时刻的动力学属性和遥测 GNSS 读数。
//! 单个 `ReplayHost` 以当前样本同时实现两个主机 trait。

use std::cell::Cell;
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use contracts::{
    ContractError, DynamicsHost, GeoPoint, GnssReading, TelemetryHost, Vector3,
};
use serde::{Deserialize, Serialize};
use tracing::info;

/// 一条录制的仿真样本
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TraceSample {
    /// 仿真时间（秒）
    pub time: f64,

    /// 按名称索引的动力学属性
    #[serde(default)]
    pub properties: HashMap<String, f64>,

    /// 遥测 GNSS 读数
    pub gnss: TraceGnss,
}

/// 轨迹样本中的 GNSS 字段
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TraceGnss {
    /// 纬度（度）
    pub latitude: f64,

    /// 经度（度）
    pub longitude: f64,

    /// 高度（米）
    pub altitude: f64,

    /// NED 速度 (m/s)
    #[serde(default)]
    pub velocity: [f64; 3],
}

impl From<TraceGnss> for GnssReading {
    fn from(gnss: TraceGnss) -> Self {
        Self {
            geo_point: GeoPoint {
                latitude: gnss.latitude,
                longitude: gnss.longitude,
                altitude: gnss.altitude,
            },
            velocity: Vector3::from(gnss.velocity),
        }
    }
}

/// 加载 JSONL 轨迹文件
pub fn load_trace(path: &Path) -> Result<Vec<TraceSample>, ContractError> {
    let file = File::open(path)?;
    let samples = parse_trace(BufReader::new(file))?;
    info!(path = %path.display(), samples = samples.len(), "Loaded replay trace");
    Ok(samples)
}

/// 解析 JSONL 轨迹内容
///
/// 跳过空行，样本按时间排序。
pub fn parse_trace<R: BufRead>(reader: R) -> Result<Vec<TraceSample>, ContractError> {
    let mut samples = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let sample: TraceSample =
            serde_json::from_str(&line).map_err(|e| ContractError::TraceParse {
                line: idx + 1,
                message: e.to_string(),
            })?;
        samples.push(sample);
    }

    samples.sort_by(|a, b| a.time.total_cmp(&b.time));
    Ok(samples)
}

/// 回放主机
///
/// 提供游标处的样本，`advance` 移到下一条。
pub struct ReplayHost {
    samples: Vec<TraceSample>,
    cursor: Cell<usize>,
}

impl ReplayHost {
    /// 创建回放主机，轨迹不能为空
    pub fn new(samples: Vec<TraceSample>) -> Result<Self, ContractError> {
        if samples.is_empty() {
            return Err(ContractError::Other("replay trace is empty".into()));
        }
        Ok(Self {
            samples,
            cursor: Cell::new(0),
        })
    }

    /// 当前样本
    pub fn current(&self) -> &TraceSample {
        &self.samples[self.cursor.get()]
    }

    /// 当前样本的索引
    pub fn position(&self) -> usize {
        self.cursor.get()
    }

    /// 样本数量
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// 始终为 false：空轨迹在构造时即被拒绝
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// 移到下一条样本，到达轨迹末尾时返回 `false`
    pub fn advance(&self) -> bool {
        let next = self.cursor.get() + 1;
        if next < self.samples.len() {
            self.cursor.set(next);
            true
        } else {
            false
        }
    }

    /// 回到第一条样本
    pub fn rewind(&self) {
        self.cursor.set(0);
    }
}

impl DynamicsHost for ReplayHost {
    fn sim_time(&self) -> Result<f64, ContractError> {
        Ok(self.current().time)
    }

    fn property(&self, name: &str) -> Result<f64, ContractError> {
        self.current()
            .properties
            .get(name)
            .copied()
            .ok_or_else(|| ContractError::property_not_found(name))
    }
}

impl TelemetryHost for ReplayHost {
    fn sim_time(&self) -> Result<f64, ContractError> {
        Ok(self.current().time)
    }

    fn gnss(&self) -> Result<GnssReading, ContractError> {
        Ok(self.current().gnss.into())
    }
}
