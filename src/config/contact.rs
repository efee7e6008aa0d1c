//! Contact form configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Contact form configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ContactConfig {
    /// Simulated submission delay in milliseconds
    #[serde(default = "default_submit_delay")]
    pub submit_delay_ms: u64,

    /// How long the success message stays visible, in milliseconds
    #[serde(default = "default_success_visible")]
    pub success_visible_ms: u64,
}

impl ContactConfig {
    pub fn submit_delay(&self) -> Duration {
        Duration::from_millis(self.submit_delay_ms)
    }

    pub fn success_visible(&self) -> Duration {
        Duration::from_millis(self.success_visible_ms)
    }

    /// Validate contact configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.submit_delay_ms > 60_000 {
            return Err(ValidationError::InvalidSubmitDelay);
        }
        Ok(())
    }
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            submit_delay_ms: default_submit_delay(),
            success_visible_ms: default_success_visible(),
        }
    }
}

fn default_submit_delay() -> u64 {
    1500
}

fn default_success_visible() -> u64 {
    5000
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contact_config_defaults() {
        let config = ContactConfig::default();
        assert_eq!(config.submit_delay(), Duration::from_millis(1500));
        assert_eq!(config.success_visible(), Duration::from_secs(5));
    }

    #[test]
    fn test_excessive_delay_rejected() {
        let config = ContactConfig {
            submit_delay_ms: 120_000,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidSubmitDelay));
    }
}
