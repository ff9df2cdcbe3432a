use serde::Deserialize;

impl Config {

    pub fn init() -> Result<Self, config::ConfigError> {
        // get config toml dir from env, with default
        let config_path =
            std::env::var("MOVIES_CONFIG_PATH").unwrap_or_else(|_| String::from("./config.toml"));

        let config = config::Config::builder()
            // Add in config toml, if there is one
            .add_source(config::File::with_name(&config_path).required(false))
            // Add in settings from the environment (with a prefix of MOVIES)
            .add_source(environment())
            .build()?;

        config.try_deserialize()
    }
}

/// `MOVIES_LOGS__LEVEL=debug` -> `logs.level = "debug"`
fn environment() -> config::Environment {
    config::Environment::with_prefix("MOVIES")
        .prefix_separator("_")
        .separator("__")
}

// ================================================================================================
// Models
// ================================================================================================

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub logs: LogsConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
}

// ===============================================================================
// Logs
// ===============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct LogsConfig {
    #[serde(default = "default_level")]
    pub level: String,
}

impl Default for LogsConfig {
    fn default() -> Self {
        Self { level: default_level() }
    }
}

fn default_level() -> String { "warn".to_string() }

// ===============================================================================
// Catalog
// ===============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct CatalogConfig {
    /// CSV file loaded when none is given on the command line.
    #[serde(default)]
    pub path: Option<String>,
    /// Whether the first line of the file is a header to discard.
    #[serde(default = "default_true")]
    pub has_header: bool,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self { path: None, has_header: true }
    }
}

fn default_true() -> bool { true }
