//! Configuration module
//!
//! Environment-backed configuration for the conversion service. Every value
//! has a development default; `validate` enforces the settings that must not
//! ship to production as-is.

use std::env;
use std::path::PathBuf;

const DEFAULT_PORT: u16 = 5000;
const DEFAULT_MAX_FILE_SIZE_MB: usize = 20;
const DEFAULT_UPLOAD_DIR: &str = "uploads";

/// Application configuration.
#[derive(Clone, Debug)]
pub struct Config {
    pub server_port: u16,
    pub cors_origins: Vec<String>,
    pub environment: String,
    /// Per-file upload cap, in bytes.
    pub max_file_size_bytes: usize,
    /// Scratch directory for request-scoped temp files. Created at startup.
    pub upload_dir: PathBuf,
}

impl Config {
    /// Check if the application is running in production mode
    pub fn is_production(&self) -> bool {
        let env = self.environment.to_lowercase();
        env == "production" || env == "prod"
    }

    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenvy::dotenv().ok();

        let server_port = env::var("PORT")
            .unwrap_or_else(|_| DEFAULT_PORT.to_string())
            .parse::<u16>()
            .map_err(|e| anyhow::anyhow!("Invalid PORT: {}", e))?;

        let cors_origins = env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "*".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let environment = env::var("ENVIRONMENT")
            .or_else(|_| env::var("APP_ENV"))
            .unwrap_or_else(|_| "development".to_string());

        let max_file_size_mb = env::var("MAX_FILE_SIZE_MB")
            .unwrap_or_else(|_| DEFAULT_MAX_FILE_SIZE_MB.to_string())
            .parse::<usize>()
            .map_err(|e| anyhow::anyhow!("Invalid MAX_FILE_SIZE_MB: {}", e))?;

        let upload_dir =
            PathBuf::from(env::var("UPLOAD_DIR").unwrap_or_else(|_| DEFAULT_UPLOAD_DIR.to_string()));

        let config = Config {
            server_port,
            cors_origins,
            environment,
            max_file_size_bytes: max_file_size_mb * 1024 * 1024,
            upload_dir,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), anyhow::Error> {
        if self.max_file_size_bytes == 0 {
            return Err(anyhow::anyhow!("MAX_FILE_SIZE_MB must be greater than 0"));
        }

        if self.is_production() && self.cors_origins.contains(&"*".to_string()) {
            return Err(anyhow::anyhow!(
                "CORS_ORIGINS must not be '*' in production; set an explicit origin list"
            ));
        }

        Ok(())
    }
}
