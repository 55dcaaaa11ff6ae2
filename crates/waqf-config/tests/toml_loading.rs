//! Integration tests for TOML configuration loading.
//!
//! Uses `figment::Jail` for sandboxed files and env vars.

use figment::{
    Figment, Jail,
    providers::{Env, Format, Serialized, Toml},
};
use pretty_assertions::assert_eq;
use waqf_config::WaqfConfig;

#[test]
fn loads_backlog_config_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[backlog]
summary_max_chars = 40
risk_owner = "Audit Committee"
risk_due_days = 7
"#,
        )?;

        let config: WaqfConfig = Figment::from(Serialized::defaults(WaqfConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.backlog.summary_max_chars, 40);
        assert_eq!(config.backlog.risk_owner, "Audit Committee");
        assert_eq!(config.backlog.risk_due_days, 7);
        // untouched keys keep their defaults
        assert_eq!(config.backlog.performance_owner, "Operations Manager");
        assert_eq!(config.backlog.compliance_due_months, 1);
        Ok(())
    });
}

#[test]
fn loads_scoring_and_general_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r"
[general]
cycle_year = 2025
top_institutions = 3

[scoring]
axis_precision = 2
weakness_threshold = 2.5
",
        )?;

        let config: WaqfConfig = Figment::from(Serialized::defaults(WaqfConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.general.cycle_year, Some(2025));
        assert_eq!(config.general.top_institutions, 3);
        assert_eq!(config.scoring.axis_precision, 2);
        assert_eq!(config.scoring.average_precision, 1);
        assert!((config.scoring.weakness_threshold - 2.5).abs() < f64::EPSILON);
        Ok(())
    });
}

#[test]
fn project_config_file_is_picked_up_by_load() {
    Jail::expect_with(|jail| {
        jail.create_dir(".waqf")?;
        jail.create_file(
            ".waqf/config.toml",
            r#"
[store]
data_dir = "/var/lib/waqf"
trail_enabled = false
"#,
        )?;

        let config = WaqfConfig::load().expect("config loads");
        assert_eq!(config.store.data_dir, "/var/lib/waqf");
        assert!(!config.store.trail_enabled);
        Ok(())
    });
}

#[test]
fn env_overrides_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r"
[scoring]
axis_precision = 2
",
        )?;
        jail.set_env("WAQF_SCORING__AXIS_PRECISION", "3");

        let config: WaqfConfig = Figment::from(Serialized::defaults(WaqfConfig::default()))
            .merge(Toml::file("config.toml"))
            .merge(Env::prefixed("WAQF_").split("__"))
            .extract()?;

        assert_eq!(config.scoring.axis_precision, 3);
        Ok(())
    });
}

#[test]
fn invalid_toml_value_fails_validation() {
    Jail::expect_with(|jail| {
        jail.create_dir(".waqf")?;
        jail.create_file(
            ".waqf/config.toml",
            r"
[scoring]
weakness_threshold = 7.0
",
        )?;

        let err = WaqfConfig::load().unwrap_err();
        assert!(err.to_string().contains("scoring.weakness_threshold"), "{err}");
        Ok(())
    });
}
