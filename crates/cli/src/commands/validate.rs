//! `validate` command implementation.

use anyhow::{Context, Result};
use contracts::PluginBlueprint;
use sensor_plugin::GpsPropertyMap;
use serde::Serialize;
use tracing::info;

use crate::cli::ValidateArgs;

/// Validation result for JSON output
#[derive(Serialize)]
struct ValidationResult {
    valid: bool,
    config_path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    warnings: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    summary: Option<ConfigSummary>,
}

#[derive(Serialize)]
struct ConfigSummary {
    version: String,
    update_rate: f64,
    configured_settings: usize,
    defaulted_settings: Vec<&'static str>,
}

/// Execute the `validate` command
pub fn run_validate(args: &ValidateArgs) -> Result<()> {
    info!(config = %args.config.display(), "Validating configuration");

    let result = validate_config(args);

    if args.json {
        let json = serde_json::to_string_pretty(&result)
            .context("Failed to serialize validation result")?;
        println!("{}", json);
    } else {
        print_validation_result(&result);
    }

    if result.valid {
        Ok(())
    } else {
        anyhow::bail!("Configuration validation failed")
    }
}

fn validate_config(args: &ValidateArgs) -> ValidationResult {
    let config_path = args.config.display().to_string();

    if !args.config.exists() {
        return ValidationResult {
            valid: false,
            config_path,
            error: Some(format!("File not found: {}", args.config.display())),
            warnings: None,
            summary: None,
        };
    }

    match config_loader::ConfigLoader::load_from_path(&args.config) {
        Ok(blueprint) => {
            let properties = GpsPropertyMap::from_element(&blueprint.gps.settings);
            let warnings = collect_warnings(&blueprint, &properties);

            ValidationResult {
                valid: true,
                config_path,
                error: None,
                warnings: if warnings.is_empty() {
                    None
                } else {
                    Some(warnings)
                },
                summary: Some(ConfigSummary {
                    version: format!("{:?}", blueprint.version),
                    update_rate: blueprint.gps.update_rate,
                    configured_settings: blueprint.gps.settings.len(),
                    defaulted_settings: properties.defaulted(),
                }),
            }
        }
        Err(e) => ValidationResult {
            valid: false,
            config_path,
            error: Some(e.to_string()),
            warnings: None,
            summary: None,
        },
    }
}

/// Collect configuration warnings (non-fatal issues)
fn collect_warnings(blueprint: &PluginBlueprint, properties: &GpsPropertyMap) -> Vec<String> {
    let mut warnings = Vec::new();

    for key in properties.unset_required() {
        warnings.push(format!(
            "'{key}' has no property name - every retrieval will query an empty name"
        ));
    }

    if blueprint.gps.update_rate == 0.0 {
        warnings.push("gps.update_rate is 0 - the sensor updates on every poll".to_string());
    }

    warnings
}

fn print_validation_result(result: &ValidationResult) {
    if result.valid {
        println!("✓ Configuration is valid: {}", result.config_path);

        if let Some(ref summary) = result.summary {
            println!("\n  Version: {}", summary.version);
            println!("  GPS update rate: {}s", summary.update_rate);
            println!("  Configured settings: {}", summary.configured_settings);
            if !summary.defaulted_settings.is_empty() {
                println!("  Using defaults: {}", summary.defaulted_settings.join(", "));
            }
        }

        if let Some(ref warnings) = result.warnings {
            println!("\n⚠ Warnings:");
            for warning in warnings {
                println!("  - {}", warning);
            }
        }
    } else {
        println!("✗ Configuration is invalid: {}", result.config_path);
        if let Some(ref error) = result.error {
            println!("\n  Error: {}", error);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_validate_reports_warnings() {
        let file = write_config("[gps]\nupdate_rate = 0.0\njsb_gps_lat = \"position/lat-geod-deg\"\n");
        let args = ValidateArgs {
            config: file.path().to_path_buf(),
            json: true,
        };

        let result = validate_config(&args);
        assert!(result.valid);
        let warnings = result.warnings.unwrap();
        assert!(warnings.iter().any(|w| w.contains("jsb_gps_lon")));
        assert!(!warnings.iter().any(|w| w.contains("jsb_gps_lat")));
        assert!(warnings.iter().any(|w| w.contains("update_rate is 0")));
        assert_eq!(result.summary.unwrap().defaulted_settings.len(), 4);
    }

    #[test]
    fn test_validate_invalid_config() {
        let file = write_config("[gps]\njsb_gps_bogus = \"x\"\n");
        let args = ValidateArgs {
            config: file.path().to_path_buf(),
            json: false,
        };

        let result = validate_config(&args);
        assert!(!result.valid);
        assert!(result.error.unwrap().contains("unknown gps setting"));
        assert!(run_validate(&args).is_err());
    }

    #[test]
    fn test_validate_missing_file() {
        let args = ValidateArgs {
            config: "does/not/exist.toml".into(),
            json: false,
        };
        let result = validate_config(&args);
        assert!(!result.valid);
        assert!(result.error.unwrap().contains("File not found"));
    }
}
