//! API server configuration

use std::env;
use std::str::FromStr;

use anyhow::{Context, Result};
use fanclub_shared_config::{DatabaseConfig, Environment};

/// Default maximum query nesting depth
const DEFAULT_MAX_DEPTH: usize = 5;

/// API server configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// Database configuration
    pub database: DatabaseConfig,

    /// Environment mode (development, staging, production)
    pub environment: Environment,

    /// Server port (default: 8080)
    pub port: u16,

    /// Maximum query nesting depth accepted by the depth guard (default: 5)
    pub graphql_max_depth: usize,

    /// CORS allowed origins (optional)
    pub cors_allowed_origins: Option<Vec<String>>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let environment = Environment::from_str(
            &env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
        )
        .unwrap_or_default();

        let database = DatabaseConfig::from_env()
            .map_err(|e| anyhow::anyhow!("failed to load database config: {}", e))?;

        Ok(Self {
            database,
            environment,

            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .context("invalid PORT value")?,

            graphql_max_depth: env::var("GRAPHQL_MAX_DEPTH")
                .unwrap_or_else(|_| DEFAULT_MAX_DEPTH.to_string())
                .parse()
                .context("invalid GRAPHQL_MAX_DEPTH value")?,

            cors_allowed_origins: env::var("CORS_ORIGINS").ok().map(|origins| {
                origins
                    .split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect()
            }),
        })
    }

    /// Check if running in production mode
    pub fn is_production(&self) -> bool {
        self.environment.is_production()
    }
}
