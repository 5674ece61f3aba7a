use anyhow::Result;
use config::Config;
use serde::Deserialize;

/// Default bound on how many times the header/value boundary is moved past a
/// colon that sits inside a quoted parameter.
pub const DEFAULT_QUOTE_RETRY_LIMIT: u8 = 5;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub logging: LoggingConfig,
    pub parser: ParserConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ParserConfig {
    pub quote_retry_limit: u8,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            quote_retry_limit: DEFAULT_QUOTE_RETRY_LIMIT,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub pretty: bool,
}

impl Settings {
    /// ## Summary
    /// Loads configuration from `.env` file and environment variables into a `Settings`.
    /// Environment variables take precedence over `config.toml` values.
    ///
    /// ## Errors
    /// Returns an error if building the configuration or deserializing it fails.
    pub fn load() -> Result<Self> {
        Ok(Config::builder()
            .set_default("logging.level", "info")?
            .set_default("parser.quote_retry_limit", i64::from(DEFAULT_QUOTE_RETRY_LIMIT))?
            .set_default("output.pretty", true)?
            // TOML file
            .add_source(config::File::with_name("config.toml").required(false))
            // Env file
            .add_source(
                config::Environment::with_prefix("KUNAI")
                    .prefix_separator("_")
                    .separator("__")
                    .ignore_empty(true)
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize::<Settings>()?)
    }
}

/// ## Summary
/// Loads configuration from environment variables and `.env` file.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config() -> Result<Settings> {
    dotenvy::dotenv().ok();

    let settings = Settings::load()?;
    tracing::debug!(settings = ?settings, "Configuration loaded");

    Ok(settings)
}
