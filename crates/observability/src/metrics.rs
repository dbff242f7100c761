//! 传感器插件指标
//!
//! `metrics` 门面记录，以及用于运行摘要的内存聚合器。

use contracts::GpsRecord;
use metrics::{counter, gauge, histogram};

/// 记录一次成功的 GPS 数据获取
///
/// # 示例
///
/// ```ignore
/// use observability::metrics::record_gps_retrieval;
///
/// let record = gps.get_data()?;
/// record_gps_retrieval(&record);
/// ```
pub fn record_gps_retrieval(record: &GpsRecord) {
    counter!("gps_bridge_records_total", "sensor" => "gps").increment(1);

    gauge!("gps_bridge_gps_fix_type").set(record.fix_type as f64);
    gauge!("gps_bridge_gps_satellites_visible").set(record.satellites_visible as f64);

    // cm/s -> m/s, cdeg -> deg
    histogram!("gps_bridge_gps_ground_speed_mps").record(record.velocity as f64 / 100.0);
    gauge!("gps_bridge_gps_cog_deg").set(record.cog as f64 / 100.0);
}

/// 记录被更新率门控跳过的轮询
pub fn record_gated_skip(sensor: &'static str) {
    counter!("gps_bridge_gated_skips_total", "sensor" => sensor).increment(1);
}

/// 记录因主机查询失败而失败的获取
pub fn record_host_failure(sensor: &'static str) {
    counter!("gps_bridge_host_failures_total", "sensor" => sensor).increment(1);
}

/// 获取指标聚合器
///
/// 在内存中聚合，用于统计和摘要输出。
#[derive(Debug, Clone, Default)]
pub struct RetrievalMetricsAggregator {
    /// 已产生的记录数
    pub total_records: u64,

    /// 被门控跳过的轮询数
    pub gated_skips: u64,

    /// 失败的获取次数
    pub host_failures: u64,

    /// 地速 (m/s)
    pub speed_stats: RunningStats,

    /// 可见卫星数
    pub satellite_stats: RunningStats,

    /// 相邻记录的时间间隔 (s)
    pub interval_stats: RunningStats,

    last_time_usec: Option<u64>,
}

impl RetrievalMetricsAggregator {
    /// 创建新的聚合器
    pub fn new() -> Self {
        Self::default()
    }

    /// 计入一条产生的记录
    pub fn update(&mut self, record: &GpsRecord) {
        self.total_records += 1;
        self.speed_stats.push(record.velocity as f64 / 100.0);
        self.satellite_stats.push(record.satellites_visible as f64);

        if let Some(last) = self.last_time_usec {
            let interval = record.time_utc_usec.saturating_sub(last) as f64 / 1e6;
            self.interval_stats.push(interval);
        }
        self.last_time_usec = Some(record.time_utc_usec);
    }

    /// 计入一次被门控的轮询
    pub fn record_skip(&mut self) {
        self.gated_skips += 1;
    }

    /// 计入一次失败的获取
    pub fn record_failure(&mut self) {
        self.host_failures += 1;
    }

    /// 生成摘要报告
    pub fn summary(&self) -> MetricsSummary {
        let polls = self.total_records + self.gated_skips + self.host_failures;
        MetricsSummary {
            total_records: self.total_records,
            gated_skips: self.gated_skips,
            host_failures: self.host_failures,
            failure_rate: if polls > 0 {
                self.host_failures as f64 / polls as f64 * 100.0
            } else {
                0.0
            },
            ground_speed_mps: StatsSummary::from(&self.speed_stats),
            satellites: StatsSummary::from(&self.satellite_stats),
            interval_sec: StatsSummary::from(&self.interval_stats),
        }
    }
}

/// 指标摘要
#[derive(Debug, Clone, Default)]
pub struct MetricsSummary {
    pub total_records: u64,
    pub gated_skips: u64,
    pub host_failures: u64,
    pub failure_rate: f64,
    pub ground_speed_mps: StatsSummary,
    pub satellites: StatsSummary,
    pub interval_sec: StatsSummary,
}

impl std::fmt::Display for MetricsSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "=== GPS Retrieval Summary ===")?;
        writeln!(f, "Records: {}", self.total_records)?;
        writeln!(f, "Gated polls: {}", self.gated_skips)?;
        writeln!(
            f,
            "Host failures: {} ({:.2}%)",
            self.host_failures, self.failure_rate
        )?;
        writeln!(f, "Ground speed (m/s): {}", self.ground_speed_mps)?;
        writeln!(f, "Satellites: {}", self.satellites)?;
        writeln!(f, "Record interval (s): {}", self.interval_sec)?;
        Ok(())
    }
}

/// 统计摘要
#[derive(Debug, Clone, Default)]
pub struct StatsSummary {
    pub count: u64,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub std_dev: f64,
}

impl From<&RunningStats> for StatsSummary {
    fn from(stats: &RunningStats) -> Self {
        Self {
            count: stats.count,
            min: stats.min,
            max: stats.max,
            mean: stats.mean(),
            std_dev: stats.std_dev(),
        }
    }
}

impl std::fmt::Display for StatsSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.count == 0 {
            write!(f, "N/A")
        } else {
            write!(
                f,
                "min={:.3}, max={:.3}, mean={:.3}, std={:.3} (n={})",
                self.min, self.max, self.mean, self.std_dev, self.count
            )
        }
    }
}

/// 在线统计 (Welford 算法)
#[derive(Debug, Clone, Default)]
pub struct RunningStats {
    count: u64,
    mean: f64,
    m2: f64,
    min: f64,
    max: f64,
}

impl RunningStats {
    /// 添加新值
    pub fn push(&mut self, value: f64) {
        self.count += 1;

        if self.count == 1 {
            self.min = value;
            self.max = value;
            self.mean = value;
            self.m2 = 0.0;
        } else {
            self.min = self.min.min(value);
            self.max = self.max.max(value);

            let delta = value - self.mean;
            self.mean += delta / self.count as f64;
            let delta2 = value - self.mean;
            self.m2 += delta * delta2;
        }
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn mean(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            self.mean
        }
    }

    /// 样本方差
    pub fn variance(&self) -> f64 {
        if self.count < 2 {
            0.0
        } else {
            self.m2 / (self.count - 1) as f64
        }
    }

    pub fn std_dev(&self) -> f64 {
        self.variance().sqrt()
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }
}
