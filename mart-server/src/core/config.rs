//! Server configuration
//!
//! All settings are loaded once from the environment at startup.
//!
//! | Environment variable | Default | Meaning |
//! |----------------------|---------|---------|
//! | RUN_ADDRESS | localhost:8080 | HTTP listen address (host:port) |
//! | WORK_DIR | ./work_dir | Database and log storage |
//! | ACCRUAL_SYSTEM_ADDRESS | (empty) | Base URL of the external accrual system |
//! | LOG_LEVEL | info | Log level fallback when RUST_LOG is unset |
//! | ENVIRONMENT | development | development \| staging \| production |
//! | JWT_SECRET | generated (dev only) | Token signing secret, >= 32 chars |
//! | JWT_EXPIRATION_MINUTES | 60 | Session token lifetime |

use std::path::PathBuf;

use shared::AppError;

use crate::auth::JwtConfig;

/// Server configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP listen address (host:port)
    pub run_address: String,
    /// Working directory for database and log files
    pub work_dir: String,
    /// Base URL of the external accrual system (informational; the accrual
    /// engine connects out-of-band)
    pub accrual_address: String,
    /// Log level: trace | debug | info | warn | error
    pub log_level: String,
    /// Runtime environment: development | staging | production
    pub environment: String,
    /// JWT configuration (signing secret injected here, at construction)
    pub jwt: JwtConfig,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, AppError> {
        let jwt = JwtConfig::from_env().map_err(|e| AppError::config(e.to_string()))?;

        Ok(Self {
            run_address: std::env::var("RUN_ADDRESS")
                .unwrap_or_else(|_| "localhost:8080".into()),
            work_dir: std::env::var("WORK_DIR").unwrap_or_else(|_| "./work_dir".into()),
            accrual_address: std::env::var("ACCRUAL_SYSTEM_ADDRESS").unwrap_or_default(),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            jwt,
        })
    }

    /// Directory holding the embedded database
    pub fn database_dir(&self) -> PathBuf {
        PathBuf::from(&self.work_dir).join("database")
    }

    /// Directory holding log files
    pub fn log_dir(&self) -> PathBuf {
        PathBuf::from(&self.work_dir).join("logs")
    }

    /// Create the working directory structure if missing
    pub fn ensure_work_dir_structure(&self) -> std::io::Result<()> {
        std::fs::create_dir_all(self.database_dir())?;
        std::fs::create_dir_all(self.log_dir())?;
        Ok(())
    }

    /// Whether this is a production deployment
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}
