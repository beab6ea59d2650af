use cohousy_notification::EmailConfig;
use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub email: EmailConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
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

/// Unprefixed variables the site was historically deployed with.
const LEGACY_ENV: [(&str, &str); 6] = [
    ("SMTP_HOST", "email.smtp_host"),
    ("SMTP_PORT", "email.smtp_port"),
    ("SMTP_USER", "email.smtp_username"),
    ("SMTP_PASS", "email.smtp_password"),
    ("FROM_EMAIL", "email.from_address"),
    ("ADMIN_EMAIL", "email.admin_address"),
];

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Legacy variables (SMTP_USER, SMTP_PASS, FROM_EMAIL, ADMIN_EMAIL, ...)
    /// 2. Environment variables (COHOUSY__EMAIL__SMTP_HOST, etc.)
    /// 3. Config file specified by path
    /// 4. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder()
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?
            .set_default("email.smtp_host", "smtp.gmail.com")?
            .set_default("email.smtp_port", 465)?
            .set_default("email.smtp_username", "")?
            .set_default("email.smtp_password", "")?
            .set_default("email.smtp_tls", "wrapper")?
            .set_default("email.from_address", "")?
            .set_default("email.admin_address", "")?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        // Optional, ignored if not found
        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("COHOUSY")
                .separator("__")
                .try_parsing(true),
        );

        for (var, key) in LEGACY_ENV {
            if let Ok(value) = env::var(var) {
                builder = builder.set_override(key, value)?;
            }
        }

        builder.build()?.try_deserialize()
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.server.port == 0 {
            return Err("Server port must be greater than 0".to_string());
        }
        if self.email.smtp_host.is_empty() {
            return Err("SMTP host must be set".to_string());
        }
        if self.email.from_address.is_empty() {
            return Err("Sender address (email.from_address / FROM_EMAIL) must be set".to_string());
        }
        if self.email.admin_address.is_empty() {
            return Err(
                "Staff address (email.admin_address / ADMIN_EMAIL) must be set".to_string(),
            );
        }
        if self.email.smtp_tls != cohousy_notification::SmtpTls::Disabled
            && (self.email.smtp_username.is_empty() || self.email.smtp_password.is_empty())
        {
            return Err("SMTP credentials are required when TLS is enabled".to_string());
        }
        Ok(())
    }
}
