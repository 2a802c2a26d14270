use std::env;
use std::time::Duration;

use serde::Deserialize;

use crate::engine::compressor::CompressorConfig;
use crate::shared::time::deserialize_duration;

#[derive(Debug, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub compressor: CompressorSettings,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// The `compressor` section. Every key is optional; missing keys are filled
/// by [`CompressorConfig::resolve`].
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CompressorSettings {
    pub timestamp: String,
    pub values: Vec<String>,
    pub groupby: Vec<String>,
    pub unique: Vec<String>,
    pub method: String,
    /// Integer seconds or a duration string such as `1m` or `90s`
    #[serde(deserialize_with = "deserialize_duration")]
    pub window: Duration,
    pub workers: i64,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub log_dir: String,
    /// Level for the console layer (written to stderr; stdout carries payloads)
    pub console_level: String,
    pub file_level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            log_dir: "logs".to_string(),
            console_level: "info".to_string(),
            file_level: "debug".to_string(),
        }
    }
}

impl Settings {
    pub fn compressor_config(&self) -> CompressorConfig {
        let c = &self.compressor;
        CompressorConfig {
            timestamp_field: c.timestamp.clone(),
            value_fields: c.values.clone(),
            group_by_fields: c.groupby.clone(),
            unique_fields: c.unique.clone(),
            aggregation_method: c.method.clone(),
            time_window: c.window,
            workers: c.workers,
        }
        .resolve()
    }
}

/// Loads settings from `path`, else `$TSC_CONFIG`, else an optional `config`
/// file in the working directory, then applies `TSC__SECTION__KEY` overrides.
pub fn load_settings(path: Option<&str>) -> Result<Settings, config::ConfigError> {
    load_settings_with_env(path, environment())
}

/// Environment overrides. List keys take comma-separated values, e.g.
/// `TSC__COMPRESSOR__GROUPBY=host,service`.
pub fn environment() -> config::Environment {
    LIST_KEYS.into_iter().fold(
        config::Environment::with_prefix("TSC")
            .separator("__")
            .try_parsing(true)
            .list_separator(","),
        |env, key| env.with_list_parse_key(key),
    )
}

const LIST_KEYS: [&str; 3] = ["compressor.values", "compressor.groupby", "compressor.unique"];

pub(crate) fn load_settings_with_env(
    path: Option<&str>,
    env: config::Environment,
) -> Result<Settings, config::ConfigError> {
    let explicit = path
        .map(str::to_string)
        .or_else(|| env::var("TSC_CONFIG").ok());
    let required = explicit.is_some();
    let config_path = explicit.unwrap_or_else(|| "config".to_string());

    let settings: Settings = config::Config::builder()
        .add_source(config::File::with_name(&config_path).required(required))
        .add_source(env)
        .build()?
        .try_deserialize()?;

    Ok(settings)
}
