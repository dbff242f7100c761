//! # Integration Tests
//!
//! 集成测试与端到端测试。
//!
//! 负责：
//! - 记录与配置的合约快照测试
//! - 配置文件 -> GPS 插件 -> 记录（模拟主机）
//! - 轨迹回放经过 GPS 插件

#[cfg(test)]
mod contract_tests {
    use contracts::{gps_keys, GpsRecord, PluginBlueprint};

    #[test]
    fn test_gps_record_field_names() {
        let value = serde_json::to_value(GpsRecord::default()).unwrap();
        let mut keys: Vec<&str> = value
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        keys.sort_unstable();

        assert_eq!(
            keys,
            vec![
                "altitude",
                "cog",
                "eph",
                "epv",
                "fix_type",
                "id",
                "latitude_deg",
                "longitude_deg",
                "satellites_visible",
                "time_utc_usec",
                "velocity",
                "velocity_down",
                "velocity_east",
                "velocity_north",
            ]
        );
    }

    #[test]
    fn test_every_setting_key_is_accepted() {
        let settings: Vec<String> = gps_keys::ALL
            .iter()
            .map(|key| format!("{key} = \"none\""))
            .collect();
        let content = format!("[gps]\n{}\n", settings.join("\n"));

        let blueprint: PluginBlueprint =
            config_loader::ConfigLoader::load_from_str(&content, config_loader::ConfigFormat::Toml)
                .unwrap();
        assert_eq!(blueprint.gps.settings.len(), gps_keys::ALL.len());
    }
}

#[cfg(test)]
mod e2e_tests {
    use std::io::Write;

    use contracts::{ContractError, PluginBlueprint};
    use observability::RetrievalMetricsAggregator;
    use sensor_plugin::{
        load_trace, GpsPlugin, MockDynamicsHost, MockTelemetryHost, ReplayHost, SensorPlugin,
    };

    const CONFIG: &str = r#"
version = "V1"

[gps]
update_rate = 0.2
jsb_gps_fix_type = "none"
jsb_gps_lat = "position/lat-geod-deg"
jsb_gps_lon = "position/long-gc-deg"
jsb_gps_alt = "position/h-sl-meters"
jsb_gps_eph = " None "
jsb_gps_epv = ""
jsb_gps_v_north = "velocities/v-north-fps"
jsb_gps_v_east = "velocities/v-east-fps"
jsb_gps_v_down = "velocities/v-down-fps"
jsb_gps_velocity = "velocities/vg-fps"
"#;

    fn blueprint() -> PluginBlueprint {
        config_loader::ConfigLoader::load_from_str(CONFIG, config_loader::ConfigFormat::Toml)
            .unwrap()
    }

    fn dynamics() -> MockDynamicsHost {
        MockDynamicsHost::new()
            .with_property("position/lat-geod-deg", 47.1)
            .with_property("position/long-gc-deg", 8.5)
            .with_property("position/h-sl-meters", 488.0)
            .with_property("velocities/v-north-fps", 0.0)
            .with_property("velocities/v-east-fps", 10.0)
            .with_property("velocities/v-down-fps", 0.0)
            .with_property("velocities/vg-fps", 10.0)
    }

    /// 端到端：配置文件 -> 插件 -> 记录（模拟主机）
    #[test]
    fn test_e2e_mock_hosts() {
        let blueprint = blueprint();
        let dynamics = dynamics();
        let telemetry = MockTelemetryHost::new();
        telemetry.set_time(3.0);
        telemetry.set_position(48.2, 11.6, 520.0);
        telemetry.set_velocity(3.0, 4.0, 0.0);

        let mut gps = GpsPlugin::new(&dynamics, &telemetry);
        gps.configure(&blueprint.gps.settings);
        gps.set_update_rate(blueprint.gps.update_rate).unwrap();

        let estimate = gps.dynamics_estimate().unwrap();
        assert_eq!(estimate.latitude_deg, 471_000_000);
        assert_eq!(estimate.cog, 9000);

        let record = gps.poll(3.0).unwrap().expect("gps due at t=3");
        assert_eq!(record.time_utc_usec, 3_000_000);
        assert_eq!(record.fix_type, 3);
        assert_eq!(record.eph, 100);
        assert_eq!(record.epv, 200);
        assert_eq!(record.satellites_visible, 16);
        assert_eq!(record.latitude_deg, 482_000_000);
        assert_eq!(record.longitude_deg, 116_000_000);
        assert_eq!(record.altitude, 520_000);
        assert_eq!(record.velocity, 500);
        assert_eq!(record.id, 1);

        // Gated until 0.2 s have passed.
        telemetry.set_time(3.1);
        assert!(gps.poll(3.1).unwrap().is_none());
        telemetry.set_time(3.25);
        assert!(gps.poll(3.25).unwrap().is_some());
    }

    /// JSON and TOML configs drive the plugin the same way
    #[test]
    fn test_e2e_json_config_matches_toml() {
        let toml_blueprint = blueprint();
        let json = config_loader::ConfigLoader::to_json(&toml_blueprint).unwrap();
        let json_blueprint =
            config_loader::ConfigLoader::load_from_str(&json, config_loader::ConfigFormat::Json)
                .unwrap();

        let dynamics = dynamics();
        let telemetry = MockTelemetryHost::new();

        let mut from_toml = GpsPlugin::new(&dynamics, &telemetry);
        from_toml.configure(&toml_blueprint.gps.settings);
        let mut from_json = GpsPlugin::new(&dynamics, &telemetry);
        from_json.configure(&json_blueprint.gps.settings);

        assert_eq!(from_toml.properties(), from_json.properties());
        assert_eq!(
            from_toml.retrieve().unwrap(),
            from_json.retrieve().unwrap()
        );
    }

    /// 端到端：轨迹文件 -> 回放主机 -> 插件 -> 聚合指标
    #[test]
    fn test_e2e_trace_replay() {
        let mut file = tempfile::Builder::new()
            .suffix(".jsonl")
            .tempfile()
            .unwrap();
        for i in 0..=10 {
            let t = i as f64 * 0.1;
            writeln!(
                file,
                r#"{{"time": {t}, "properties": {{"position/lat-geod-deg": 47.1, "position/long-gc-deg": 8.5, "position/h-sl-meters": 488.0, "velocities/v-north-fps": 0.0, "velocities/v-east-fps": 10.0, "velocities/v-down-fps": 0.0, "velocities/vg-fps": 10.0}}, "gnss": {{"latitude": 48.2, "longitude": 11.6, "altitude": 520.0, "velocity": [0.0, -2.0, 0.0]}}}}"#
            )
            .unwrap();
        }

        let blueprint = blueprint();
        let host = ReplayHost::new(load_trace(file.path()).unwrap()).unwrap();
        let mut gps = GpsPlugin::new(&host, &host);
        gps.configure(&blueprint.gps.settings);
        gps.set_update_rate(0.25).unwrap();

        let mut metrics = RetrievalMetricsAggregator::new();
        loop {
            match gps.poll(host.current().time).unwrap() {
                Some(record) => {
                    assert_eq!(record.cog, -9000);
                    assert_eq!(record.velocity, 200);
                    metrics.update(&record);
                }
                None => metrics.record_skip(),
            }
            if !host.advance() {
                break;
            }
        }

        let summary = metrics.summary();
        assert_eq!(summary.total_records + summary.gated_skips, 11);
        assert!(summary.total_records >= 3);
        assert!(summary.interval_sec.min >= 0.25 - 1e-9);
    }

    /// A missing property aborts the retrieval without advancing the gate
    #[test]
    fn test_e2e_missing_property() {
        let blueprint = blueprint();
        let dynamics = MockDynamicsHost::new().with_property("position/lat-geod-deg", 47.1);
        let telemetry = MockTelemetryHost::new();
        telemetry.set_time(5.0);

        let mut gps = GpsPlugin::new(&dynamics, &telemetry);
        gps.configure(&blueprint.gps.settings);

        let err = gps.get_data().unwrap_err();
        assert!(matches!(
            err,
            ContractError::PropertyNotFound { ref property } if property == "position/long-gc-deg"
        ));
        assert_eq!(gps.gate().last_update(), 0.0);
    }

    /// The bundled demo config and trace replay cleanly
    #[test]
    fn test_e2e_demo_files() {
        let demos = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("../../demos");
        let blueprint = config_loader::ConfigLoader::load_from_path(&demos.join("gps.toml")).unwrap();
        let host = ReplayHost::new(load_trace(&demos.join("flight.jsonl")).unwrap()).unwrap();

        let mut gps = GpsPlugin::new(&host, &host);
        gps.configure(&blueprint.gps.settings);
        gps.set_update_rate(blueprint.gps.update_rate).unwrap();

        let mut records = Vec::new();
        loop {
            if let Some(record) = gps.poll(host.current().time).unwrap() {
                records.push(record);
            }
            if !host.advance() {
                break;
            }
        }

        assert!(!records.is_empty());
        for record in &records {
            assert_eq!(record.fix_type, 3);
            assert_eq!(record.satellites_visible, 16);
            assert_eq!(record.velocity_north, 3000);
            assert_eq!(record.velocity_down, -100);
        }
    }
}
