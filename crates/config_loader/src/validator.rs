//! 配置校验
//!
//! 规则：
//! - gps.update_rate 为有限值且 >= 0
//! - 每个 gps 设置都是已知的 `jsb_gps_*` 键

use contracts::{gps_keys, ContractError, PluginBlueprint};

/// 校验 PluginBlueprint
///
/// 返回遇到的第一个错误。
pub fn validate(blueprint: &PluginBlueprint) -> Result<(), ContractError> {
    validate_update_rate(blueprint)?;
    validate_gps_settings(blueprint)?;
    Ok(())
}

fn validate_update_rate(blueprint: &PluginBlueprint) -> Result<(), ContractError> {
    let rate = blueprint.gps.update_rate;
    if !rate.is_finite() || rate < 0.0 {
        return Err(ContractError::config_validation(
            "gps.update_rate",
            format!("update_rate must be a finite value >= 0, got {rate}"),
        ));
    }
    Ok(())
}

fn validate_gps_settings(blueprint: &PluginBlueprint) -> Result<(), ContractError> {
    for key in blueprint.gps.settings.keys() {
        if !gps_keys::ALL.contains(&key.as_str()) {
            return Err(ContractError::config_validation(
                format!("gps.{key}"),
                "unknown gps setting",
            ));
        }
    }
    Ok(())
}
