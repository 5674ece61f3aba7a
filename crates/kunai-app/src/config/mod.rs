pub use kunai_core::config::*;
use kunai_core::error::CoreError;
use kunai_rfc::rfc::vcard::{Parser, ParserOptions};

use crate::error::AppResult;

/// ## Summary
/// Loads the application configuration.
///
/// ## Errors
/// Returns a configuration error if the sources cannot be read or do not
/// deserialize into [`Settings`].
pub fn load() -> AppResult<Settings> {
    load_config().map_err(|e| CoreError::ConfigError(format!("{e:#}")).into())
}

/// ## Summary
/// Builds a vCard parser tuned by the loaded settings.
#[must_use]
pub fn parser(settings: &Settings) -> Parser {
    Parser::new().options(ParserOptions::from(&settings.parser))
}
