use std::env;
use std::time::Duration;

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Forwarder configuration.
///
/// Every field has a usable default; a completely empty configuration
/// is valid and sends alarms with the documented literal templates and
/// an empty access key (which the remote API will reject, but that is
/// an operational problem, not a startup error).
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Shared secret identifying this installation to Divera247,
    /// sent as the `accesskey` query parameter on every request
    #[serde(default)]
    pub accesskey: String,
    /// Base URL of the remote API
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Per-request timeout in seconds (connect + response)
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
    /// FMS status alarm templates
    #[serde(default)]
    pub fms: FmsConfig,
    /// POCSAG paging alarm templates
    #[serde(default)]
    pub pocsag: AlarmConfig,
    /// ZVEI tone alarm templates
    #[serde(default)]
    pub zvei: AlarmConfig,
    /// Free-text message templates
    #[serde(default)]
    pub msg: AlarmConfig,
}

/// Templates for the FMS status endpoint.
///
/// Unset fields fall back to the literal defaults `{FMS}` for title and
/// message and the empty string for the vehicle identifier.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FmsConfig {
    /// Vehicle identifier template (wildcards allowed)
    pub vehicle: Option<String>,
    /// Notification title template
    pub title: Option<String>,
    /// Notification body template
    pub message: Option<String>,
    /// Whether notifications of this kind are flagged as priority
    #[serde(default)]
    pub priority: bool,
}

/// Templates for the generic alarm endpoint, shared by the POCSAG,
/// ZVEI and free-text message kinds. Per-kind literal defaults apply
/// when a field is unset.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AlarmConfig {
    /// Notification title template
    pub title: Option<String>,
    /// Receiver identifier template
    pub ric: Option<String>,
    /// Notification body template
    pub message: Option<String>,
    /// Whether notifications of this kind are flagged as priority
    #[serde(default)]
    pub priority: bool,
}

fn default_base_url() -> String {
    "https://www.divera247.com".to_string()
}

fn default_request_timeout_secs() -> u64 {
    10
}

impl Settings {
    /// Load settings from config files and environment variables.
    ///
    /// Sources, later ones overriding earlier ones: `config/default`,
    /// `config/<RUN_MODE>`, then `DIVERA_*` environment variables
    /// (`DIVERA_ACCESSKEY`, `DIVERA_POCSAG__TITLE`, ...). Validated
    /// before being returned.
    pub fn new() -> Result<Self, ConfigError> {
        // Load .env file if exists
        let _ = dotenvy::dotenv();

        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let builder = Config::builder()
            .set_default("base_url", default_base_url())?
            .set_default("request_timeout_secs", default_request_timeout_secs())?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            .add_source(
                Environment::with_prefix("divera")
                    .separator("__")
                    .try_parsing(true),
            );

        let settings: Settings = builder.build()?.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    /// Validate loaded settings, once, instead of per alarm.
    pub fn validate(&self) -> Result<(), ConfigError> {
        reqwest::Url::parse(&self.base_url)
            .map_err(|e| ConfigError::Message(format!("invalid base_url: {}", e)))?;

        if self.request_timeout_secs == 0 {
            return Err(ConfigError::Message(
                "request_timeout_secs must be greater than zero".to_string(),
            ));
        }

        if self.accesskey.is_empty() {
            tracing::warn!("No accesskey configured, Divera247 will reject requests");
        }

        Ok(())
    }

    /// Outbound request timeout as a `Duration`
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            accesskey: String::new(),
            base_url: default_base_url(),
            request_timeout_secs: default_request_timeout_secs(),
            fms: FmsConfig::default(),
            pocsag: AlarmConfig::default(),
            zvei: AlarmConfig::default(),
            msg: AlarmConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let settings = Settings::default();
        assert_eq!(settings.base_url, "https://www.divera247.com");
        assert_eq!(settings.request_timeout_secs, 10);
        assert_eq!(settings.accesskey, "");
        assert!(settings.pocsag.title.is_none());
        assert!(!settings.fms.priority);
    }

    #[test]
    fn test_default_settings_are_valid() {
        assert!(Settings::default().validate().is_ok());
    }

    #[test]
    fn test_invalid_base_url_rejected() {
        let settings = Settings {
            base_url: "not a url".to_string(),
            ..Default::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let settings = Settings {
            request_timeout_secs: 0,
            ..Default::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_request_timeout_duration() {
        let settings = Settings {
            request_timeout_secs: 3,
            ..Default::default()
        };
        assert_eq!(settings.request_timeout(), Duration::from_secs(3));
    }
}
