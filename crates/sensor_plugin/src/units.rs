//! 单位换算

/// 英尺 -> 米
pub const FEET_TO_METERS: f64 = 0.3048;

/// 英尺（或 ft/s）转换为米（或 m/s）
#[inline]
pub fn ft_to_m(feet: f64) -> f64 {
    feet * FEET_TO_METERS
}

/// 将角度（度）折算到 (-180, 180]
///
/// -180 折为 +180，正南方向只有一种编码。
pub fn wrap_pi_deg(angle: f64) -> f64 {
    if !angle.is_finite() {
        return angle;
    }
    let wrapped = angle % 360.0;
    if wrapped > 180.0 {
        wrapped - 360.0
    } else if wrapped <= -180.0 {
        wrapped + 360.0
    } else {
        wrapped
    }
}

/// 由水平速度分量计算对地航向（度）
#[inline]
pub fn course_over_ground_deg(north: f64, east: f64) -> f64 {
    wrap_pi_deg(east.atan2(north).to_degrees())
}

/// 缩放并四舍五入到整数
///
/// 调用方用 `as` 收窄类型，超出范围时饱和。
#[inline]
pub(crate) fn scaled(value: f64, factor: f64) -> f64 {
    (value * factor).round()
}
