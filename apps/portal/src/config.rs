use std::path::PathBuf;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every variable has a default; malformed numeric values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// JSON employee directory. The bundled seed directory is used when unset.
    pub employee_directory_path: Option<PathBuf>,
    pub company_name: String,
    pub support_email: String,
    /// Fixes the mock VIP generator's output when set.
    pub vip_mock_seed: Option<u64>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            employee_directory_path: optional_env("EMPLOYEE_DIRECTORY_PATH").map(PathBuf::from),
            company_name: optional_env("COMPANY_NAME").unwrap_or_else(|| "Fire22".to_string()),
            support_email: optional_env("SUPPORT_EMAIL")
                .unwrap_or_else(|| "support@fire22.com".to_string()),
            vip_mock_seed: optional_env("VIP_MOCK_SEED")
                .map(|raw| {
                    raw.parse::<u64>()
                        .with_context(|| format!("VIP_MOCK_SEED must be an unsigned integer, got '{raw}'"))
                })
                .transpose()?,
        })
    }

    /// The subset of configuration the page renderers need.
    pub fn site(&self) -> SiteConfig {
        SiteConfig {
            company_name: self.company_name.clone(),
            support_email: self.support_email.clone(),
        }
    }
}

/// Company-wide values interpolated into every generated page.
#[derive(Debug, Clone, PartialEq)]
pub struct SiteConfig {
    pub company_name: String,
    pub support_email: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            company_name: "Fire22".to_string(),
            support_email: "support@fire22.com".to_string(),
        }
    }
}

/// Reads a variable, treating an empty value the same as a missing one.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}
