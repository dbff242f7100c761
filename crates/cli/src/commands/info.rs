//! `info` command implementation.

use anyhow::{Context, Result};
use contracts::PluginBlueprint;
use sensor_plugin::{
    GpsPropertyMap, DEFAULT_EPH_M, DEFAULT_EPV_M, DEFAULT_FIX_TYPE, DEFAULT_SATELLITES,
};
use serde::Serialize;
use tracing::info;

use crate::cli::InfoArgs;

/// Configuration info for JSON output
#[derive(Serialize)]
struct ConfigInfo {
    version: String,
    update_rate: f64,
    fields: Vec<FieldInfo>,
}

/// One GPS field and where its value comes from
#[derive(Serialize)]
struct FieldInfo {
    setting: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    property: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    default: Option<f64>,
}

/// Execute the `info` command
pub fn run_info(args: &InfoArgs) -> Result<()> {
    info!(config = %args.config.display(), "Loading configuration info");

    if !args.config.exists() {
        anyhow::bail!("Configuration file not found: {}", args.config.display());
    }

    let blueprint = config_loader::ConfigLoader::load_from_path(&args.config)
        .with_context(|| format!("Failed to load config from {}", args.config.display()))?;

    let info = build_config_info(&blueprint);
    if args.json {
        let json =
            serde_json::to_string_pretty(&info).context("Failed to serialize config info")?;
        println!("{}", json);
    } else {
        print_config_info(&info);
    }

    Ok(())
}

fn build_config_info(blueprint: &PluginBlueprint) -> ConfigInfo {
    let map = GpsPropertyMap::from_element(&blueprint.gps.settings);

    let with_default = |setting, property: &Option<String>, default| FieldInfo {
        setting,
        property: property.clone(),
        default: property.is_none().then_some(default),
    };
    let queried = |setting, property: &String| FieldInfo {
        setting,
        property: Some(property.clone()),
        default: None,
    };

    use contracts::gps_keys as keys;
    let fields = vec![
        with_default(keys::FIX_TYPE, &map.fix_type, DEFAULT_FIX_TYPE),
        queried(keys::LATITUDE, &map.latitude),
        queried(keys::LONGITUDE, &map.longitude),
        queried(keys::ALTITUDE, &map.altitude),
        with_default(keys::EPH, &map.eph, DEFAULT_EPH_M),
        with_default(keys::EPV, &map.epv, DEFAULT_EPV_M),
        queried(keys::V_NORTH, &map.v_north),
        queried(keys::V_EAST, &map.v_east),
        queried(keys::V_DOWN, &map.v_down),
        queried(keys::VELOCITY, &map.velocity),
        with_default(keys::SATELLITES, &map.satellites, DEFAULT_SATELLITES),
    ];

    ConfigInfo {
        version: format!("{:?}", blueprint.version),
        update_rate: blueprint.gps.update_rate,
        fields,
    }
}

fn print_config_info(info: &ConfigInfo) {
    println!("GPS Bridge Configuration");
    println!("========================\n");

    println!("  Version: {}", info.version);
    println!("  Update rate: {}s\n", info.update_rate);

    println!("  Fields ({})", info.fields.len());
    for (i, field) in info.fields.iter().enumerate() {
        let prefix = if i == info.fields.len() - 1 {
            "└─"
        } else {
            "├─"
        };
        let source = match (&field.property, field.default) {
            (_, Some(default)) => format!("default {default}"),
            (Some(property), None) if property.is_empty() => "(unset)".to_string(),
            (Some(property), None) => property.clone(),
            (None, None) => "(unset)".to_string(),
        };
        println!("   {} {:<20} {}", prefix, field.setting, source);
    }
}
