//! Configuration
//!
//! The monitor reads its own keys from the same layered config as the base
//! settings. Both are deserialized separately from one [`Config`] so that
//! string values from env overrides are coerced per field.
use config::Config;
use eyre::Result;
use hyperlane_base::settings::{load_config, settings_from_config, Settings};
use serde::Deserialize;

fn default_interval() -> u64 {
    60
}

#[derive(Debug, Deserialize)]
struct RawMonitorSettings {
    #[serde(default)]
    networks: Vec<String>,
    #[serde(default = "default_interval")]
    interval: u64,
}

/// Settings for the governance monitor
#[derive(Debug)]
pub struct MonitorSettings {
    base: Settings,
    /// Networks to monitor. Every chain with a governance router is
    /// monitored if empty.
    pub networks: Vec<String>,
    /// Seconds between monitoring rounds
    pub interval: u64,
}

impl AsRef<Settings> for MonitorSettings {
    fn as_ref(&self) -> &Settings {
        &self.base
    }
}

impl MonitorSettings {
    /// Read settings from the config files and env
    pub fn new() -> Result<Self> {
        Self::from_config(load_config()?)
    }

    /// Deserialize the base and monitor settings from a built config
    pub fn from_config(config: Config) -> Result<Self> {
        let base: Settings = settings_from_config(config.clone())?;
        let RawMonitorSettings { networks, interval } = settings_from_config(config)?;
        Ok(Self {
            base,
            networks,
            interval,
        })
    }
}

#[cfg(test)]
mod test {
    use config::{Environment, File, FileFormat};
    use hyperlane_base::settings::CaseAdapter;
    use maplit::hashmap;

    use super::*;

    fn config(json: &str) -> config::ConfigBuilder<config::builder::DefaultState> {
        Config::builder().add_source(CaseAdapter::flat(File::from_str(json, FileFormat::Json)))
    }

    fn parse(json: &str) -> MonitorSettings {
        MonitorSettings::from_config(config(json).build().unwrap()).unwrap()
    }

    #[test]
    fn monitor_fields_sit_beside_base_settings() {
        let settings = parse(
            r#"{
                "environment": "testnet",
                "metricsPort": 9090,
                "networks": ["alfajores", "fuji"],
                "interval": 15
            }"#,
        );
        assert_eq!(settings.as_ref().environment, "testnet");
        assert_eq!(settings.as_ref().metrics_port, Some(9090));
        assert_eq!(settings.networks, vec!["alfajores", "fuji"]);
        assert_eq!(settings.interval, 15);
    }

    #[test]
    fn defaults() {
        let settings = parse(r#"{ "environment": "mainnet" }"#);
        assert!(settings.networks.is_empty());
        assert_eq!(settings.interval, 60);
    }

    #[test]
    fn env_overrides_reach_base_and_monitor_fields() {
        let env = Environment::with_prefix("HYP")
            .separator("_")
            .source(Some(hashmap! {
                "HYP_INTERVAL".to_owned() => "5".to_owned(),
                "HYP_METRICSPORT".to_owned() => "9191".to_owned(),
            }));
        let config = config(r#"{ "environment": "testnet", "interval": 15 }"#)
            .add_source(CaseAdapter::flat(env))
            .build()
            .unwrap();

        let settings = MonitorSettings::from_config(config).unwrap();
        assert_eq!(settings.interval, 5);
        assert_eq!(settings.as_ref().metrics_port, Some(9191));
    }

    #[test]
    fn missing_environment_is_an_error() {
        let config = config(r#"{ "interval": 15 }"#).build().unwrap();
        assert!(MonitorSettings::from_config(config).is_err());
    }
}
