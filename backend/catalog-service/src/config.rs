/// Configuration management for catalog-service
///
/// Loads configuration from environment variables with sensible defaults.
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub app: AppConfig,
    pub gcp: GcpConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub env: String,
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GcpConfig {
    /// Bucket holding the product media
    pub bucket: String,
    /// Path to a service account key file; unset means the key material
    /// comes from GCP_* environment variables.
    pub credentials_path: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        Ok(Config {
            app: AppConfig {
                env: std::env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
                host: std::env::var("CATALOG_SERVICE_HOST")
                    .unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: std::env::var("CATALOG_SERVICE_PORT")
                    .unwrap_or_else(|_| "8081".to_string())
                    .parse()?,
            },
            gcp: GcpConfig {
                bucket: std::env::var("STORAGE_BUCKET")
                    .unwrap_or_else(|_| "gearshop-media".to_string()),
                credentials_path: std::env::var("GOOGLE_APPLICATION_CREDENTIALS").ok(),
            },
        })
    }
}
