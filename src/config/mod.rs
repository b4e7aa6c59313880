mod file_config;

pub use file_config::{FileConfig, MatchingConfig};

use crate::server::{RequestsLoggingLevel, ServerConfig};
use anyhow::{bail, Result};
use clap::ValueEnum;
use std::path::PathBuf;

/// CLI arguments that can be used for config resolution.
/// This struct mirrors the CLI arguments that can be overridden by TOML config.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    pub db_dir: Option<PathBuf>,
    pub port: u16,
    pub logging_level: RequestsLoggingLevel,
    pub frontend_dir_path: Option<String>,
    pub default_match_limit: usize,
    pub max_match_limit: usize,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    // Core settings
    pub db_dir: PathBuf,
    pub port: u16,
    pub logging_level: RequestsLoggingLevel,
    pub frontend_dir_path: Option<String>,

    // Feature configs (with defaults)
    pub matching: MatchingSettings,
}

#[derive(Debug, Clone)]
pub struct MatchingSettings {
    pub default_limit: usize,
    pub max_limit: usize,
}

impl Default for MatchingSettings {
    fn default() -> Self {
        Self {
            default_limit: 6,
            max_limit: 24,
        }
    }
}

impl AppConfig {
    /// Resolve configuration from CLI arguments and optional TOML file config.
    /// TOML values override CLI values where present.
    pub fn resolve(cli: &CliConfig, file_config: Option<FileConfig>) -> Result<Self> {
        let file = file_config.unwrap_or_default();

        // TOML overrides CLI for each field
        let db_dir = file
            .db_dir
            .map(PathBuf::from)
            .or_else(|| cli.db_dir.clone())
            .ok_or_else(|| {
                anyhow::anyhow!("db_dir must be specified via --db-dir or in config file")
            })?;

        // Validate db_dir exists
        if !db_dir.exists() {
            bail!("Database directory does not exist: {:?}", db_dir);
        }
        if !db_dir.is_dir() {
            bail!("db_dir is not a directory: {:?}", db_dir);
        }

        let port = file.port.unwrap_or(cli.port);

        let logging_level = file
            .logging_level
            .and_then(|s| parse_logging_level(&s))
            .unwrap_or_else(|| cli.logging_level.clone());

        let frontend_dir_path = file
            .frontend_dir_path
            .or_else(|| cli.frontend_dir_path.clone());

        let matching_file = file.matching.unwrap_or_default();
        let matching = MatchingSettings {
            default_limit: matching_file.default_limit.unwrap_or(cli.default_match_limit),
            max_limit: matching_file.max_limit.unwrap_or(cli.max_match_limit),
        };
        if matching.default_limit > matching.max_limit {
            bail!(
                "matching.default_limit ({}) must not exceed matching.max_limit ({})",
                matching.default_limit,
                matching.max_limit
            );
        }

        Ok(Self {
            db_dir,
            port,
            logging_level,
            frontend_dir_path,
            matching,
        })
    }

    pub fn reference_db_path(&self) -> PathBuf {
        self.db_dir.join("references.db")
    }

    pub fn server_config(&self) -> ServerConfig {
        ServerConfig {
            requests_logging_level: self.logging_level.clone(),
            port: self.port,
            frontend_dir_path: self.frontend_dir_path.clone(),
            default_match_limit: self.matching.default_limit,
            max_match_limit: self.matching.max_limit,
        }
    }
}

/// Parses a logging level string into RequestsLoggingLevel.
/// Uses clap's ValueEnum trait for parsing.
fn parse_logging_level(s: &str) -> Option<RequestsLoggingLevel> {
    RequestsLoggingLevel::from_str(s, true).ok()
}
