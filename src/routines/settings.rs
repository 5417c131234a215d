use config::Config as eConfig;
use serde_derive::{Deserialize, Serialize};

/// Settings for an analysis run
///
/// The settings are read from a TOML file, and any value can be overridden with an environment
/// variable prefixed with `INFLAMMATION`, e.g. `INFLAMMATION_LOG_LEVEL=debug`.
///
/// ```toml
/// [paths]
/// data = "data/inflammation-01.csv"
///
/// [analysis]
/// threshold = 10.0
/// names = ["Alice", "Bob"]
///
/// [log]
/// level = "info"
/// file = "inflammation.log"
/// ```
#[derive(Debug, Deserialize, Clone, Serialize)]
pub struct Settings {
    pub paths: Paths,
    #[serde(default)]
    pub analysis: Analysis,
    #[serde(default)]
    pub log: Log,
}

#[derive(Debug, Deserialize, Clone, Serialize)]
pub struct Paths {
    /// Comma separated inflammation readings, one patient per line
    pub data: String,
}

#[derive(Debug, Deserialize, Clone, Serialize)]
pub struct Analysis {
    /// Readings strictly above this value are counted per patient
    #[serde(default = "default_threshold")]
    pub threshold: f64,
    /// Patient names in row order, defaults to `Patient 1`, `Patient 2`, ...
    pub names: Option<Vec<String>>,
}

impl Default for Analysis {
    fn default() -> Self {
        Analysis {
            threshold: default_threshold(),
            names: None,
        }
    }
}

#[derive(Debug, Deserialize, Clone, Serialize)]
pub struct Log {
    #[serde(default = "default_log_level")]
    pub level: String,
    pub file: Option<String>,
}

impl Default for Log {
    fn default() -> Self {
        Log {
            level: default_log_level(),
            file: None,
        }
    }
}

/// Read settings from a TOML configuration file
pub fn read_settings(path: &str) -> Result<Settings, config::ConfigError> {
    build(config::File::with_name(path).format(config::FileFormat::Toml))
}

/// Parse settings from the contents of a TOML configuration file
pub fn parse_settings(toml: &str) -> Result<Settings, config::ConfigError> {
    build(config::File::from_str(toml, config::FileFormat::Toml))
}

fn build<S>(source: S) -> Result<Settings, config::ConfigError>
where
    S: config::Source + Send + Sync + 'static,
{
    let parsed = eConfig::builder()
        .add_source(source)
        .add_source(config::Environment::with_prefix("INFLAMMATION").separator("_"))
        .build()?;

    parsed.try_deserialize()
}

// *********************************
// Default values for deserializing
// *********************************
fn default_threshold() -> f64 {
    0.0
}

fn default_log_level() -> String {
    "info".to_string()
}
