use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub email: EmailConfig,
    #[serde(default)]
    pub firm: FirmConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

#[derive(Debug, Deserialize, Clone)]
pub struct EmailConfig {
    #[serde(default = "default_smtp_host")]
    pub smtp_host: String,
    #[serde(default = "default_smtp_port")]
    pub smtp_port: u16,
    #[serde(default)]
    pub smtp_username: String,
    #[serde(default)]
    pub smtp_password: String,
    /// Operator mailbox: notification recipient and acknowledgment sender.
    /// Falls back to the SMTP account when unset.
    #[serde(default)]
    pub operator_email: String,
}

impl EmailConfig {
    pub fn operator_address(&self) -> &str {
        if self.operator_email.is_empty() {
            &self.smtp_username
        } else {
            &self.operator_email
        }
    }
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            smtp_host: default_smtp_host(),
            smtp_port: default_smtp_port(),
            smtp_username: String::new(),
            smtp_password: String::new(),
            operator_email: String::new(),
        }
    }
}

fn default_smtp_host() -> String {
    "smtp.gmail.com".to_string()
}

fn default_smtp_port() -> u16 {
    587
}

/// Identity of the firm the contact form fronts, interpolated into the
/// outgoing emails.
#[derive(Debug, Deserialize, Clone)]
pub struct FirmConfig {
    #[serde(default = "default_firm_name")]
    pub name: String,
    #[serde(default = "default_logo_light_url")]
    pub logo_light_url: String,
    #[serde(default = "default_logo_dark_url")]
    pub logo_dark_url: String,
}

impl Default for FirmConfig {
    fn default() -> Self {
        Self {
            name: default_firm_name(),
            logo_light_url: default_logo_light_url(),
            logo_dark_url: default_logo_dark_url(),
        }
    }
}

fn default_firm_name() -> String {
    "Sifrani Law".to_string()
}

fn default_logo_light_url() -> String {
    "https://sifranilaw.com/assets/logo-light.png".to_string()
}

fn default_logo_dark_url() -> String {
    "https://sifranilaw.com/assets/logo-dark.png".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Legacy environment variables (PORT, GMAIL_USER, GMAIL_PASS)
    /// 2. Prefixed environment variables (CONTACT_RELAY__EMAIL__SMTP_HOST, etc.)
    /// 3. Config file specified by path
    /// 4. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        // Load config file if path provided or CONFIG_PATH env var set
        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        // Try to load config file (optional - ignore if not found)
        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        // Override with environment variables (CONTACT_RELAY__SERVER__PORT, etc.)
        builder = builder.add_source(
            Environment::with_prefix("CONTACT_RELAY")
                .separator("__")
                .try_parsing(true),
        );

        // Also support the legacy environment variables the service has
        // always been deployed with
        if let Ok(port) = env::var("PORT") {
            builder = builder.set_override("server.port", port)?;
        }
        if let Ok(gmail_user) = env::var("GMAIL_USER") {
            builder = builder.set_override("email.smtp_username", gmail_user)?;
        }
        if let Ok(gmail_pass) = env::var("GMAIL_PASS") {
            builder = builder.set_override("email.smtp_password", gmail_pass)?;
        }

        builder.build()?.try_deserialize()
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.server.port == 0 {
            return Err("Server port must be greater than 0".to_string());
        }
        if self.email.operator_address().is_empty() {
            return Err(
                "Operator mailbox must be configured (email.operator_email or GMAIL_USER)"
                    .to_string(),
            );
        }
        Ok(())
    }
}
