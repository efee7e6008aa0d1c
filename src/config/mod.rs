//! Application configuration module
//!
//! Configuration is read from environment variables using the `config` and
//! `dotenvy` crates. Variables carry the `BRIEFING_DECK` prefix and nested
//! values are separated by double underscores. Every section has defaults, so
//! an empty environment yields a usable configuration.
//!
//! # Example
//!
//! ```no_run
//! use briefing_deck::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Exporting to {}", config.export.directory.display());
//! ```

mod contact;
mod deck;
mod error;
mod export;
mod logging;
mod portfolio;

pub use contact::ContactConfig;
pub use deck::DeckConfig;
pub use error::{ConfigError, ValidationError};
pub use export::ExportConfig;
pub use logging::LoggingConfig;
pub use portfolio::PortfolioConfig;

use serde::Deserialize;

/// Root application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Deck input and incident settings
    #[serde(default)]
    pub deck: DeckConfig,

    /// Decision export destination
    #[serde(default)]
    pub export: ExportConfig,

    /// Contact form timings
    #[serde(default)]
    pub contact: ContactConfig,

    /// Portfolio scroll behavior
    #[serde(default)]
    pub portfolio: PortfolioConfig,

    /// Log filter and format
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// Loads `.env` if present, then reads variables with the `BRIEFING_DECK`
    /// prefix.
    ///
    /// # Environment Variable Format
    ///
    /// - `BRIEFING_DECK__DECK__SWIPE_THRESHOLD_PX=80` -> `deck.swipe_threshold_px = 80`
    /// - `BRIEFING_DECK__EXPORT__DIRECTORY=/tmp` -> `export.directory = /tmp`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("BRIEFING_DECK")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns the first `ValidationError` found.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.deck.validate()?;
        self.export.validate()?;
        self.contact.validate()?;
        self.portfolio.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}
