use serde::Deserialize;
use sklad_catalog::PricingConfig;
use std::env;

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Config {
    pub warehouse: WarehouseConfig,
    pub pricing: PricingConfig,
    pub log: LogConfig,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct WarehouseConfig {
    pub name: String,
}

impl Default for WarehouseConfig {
    fn default() -> Self {
        Self {
            name: "Main Warehouse".to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct LogConfig {
    /// `EnvFilter` directives, used when `RUST_LOG` is not set
    pub filter: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: "warn".to_string(),
        }
    }
}

impl Config {
    /// Every file source is optional; with none present the defaults apply.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        Self::builder("config", &run_mode)
            .add_source(config::Environment::with_prefix("SKLAD").separator("__"))
            .build()?
            .try_deserialize()
    }

    fn builder(dir: &str, run_mode: &str) -> config::ConfigBuilder<config::builder::DefaultState> {
        config::Config::builder()
            .add_source(config::File::with_name(&format!("{}/default", dir)).required(false))
            .add_source(config::File::with_name(&format!("{}/{}", dir, run_mode)).required(false))
            // Local overrides, not checked in
            .add_source(config::File::with_name(&format!("{}/local", dir)).required(false))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sklad_catalog::ZeroStockPolicy;

    #[test]
    fn test_defaults_without_sources() {
        let config: Config = Config::builder("does-not-exist", "test")
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.warehouse.name, "Main Warehouse");
        assert_eq!(config.pricing.zero_stock_policy, ZeroStockPolicy::Reject);
        assert_eq!(config.log.filter, "warn");
    }

    #[test]
    fn test_overrides_from_source() {
        let config: Config = config::Config::builder()
            .add_source(config::File::from_str(
                r#"
                [warehouse]
                name = "North Depot"

                [pricing]
                zero_stock_policy = "propagate"
                "#,
                config::FileFormat::Toml,
            ))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.warehouse.name, "North Depot");
        assert_eq!(config.pricing.zero_stock_policy, ZeroStockPolicy::Propagate);
        assert_eq!(config.log.filter, "warn");
    }
}
