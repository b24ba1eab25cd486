//! Configuration management for the MCP server.
//!
//! This module provides a centralized configuration structure that can be
//! populated from environment variables, configuration files, or defaults.

use super::transport::TransportConfig;
use crate::domains::facts::DEFAULT_SIMILARITY_THRESHOLD;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{info, warn};

/// Main configuration structure for the MCP server.
///
/// This struct contains all configurable aspects of the server, organized
/// by domain for clarity and maintainability.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Facts domain configuration.
    pub facts: FactsConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Configuration for the facts domain.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FactsConfig {
    /// Path to the reference dataset file (JSON array of fact records),
    /// resolved relative to the server's working directory.
    pub dataset_path: PathBuf,

    /// Acceptance threshold for the approximate matching pass. Scores must
    /// be strictly greater than this value to count as a match.
    pub similarity_threshold: f64,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,
}

impl Default for FactsConfig {
    fn default() -> Self {
        Self {
            dataset_path: PathBuf::from("data/facts.json"),
            similarity_threshold: DEFAULT_SIMILARITY_THRESHOLD,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "factcheck-mcp-server".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            facts: FactsConfig::default(),
            logging: LoggingConfig {
                level: "info".to_string(),
            },
            transport: TransportConfig::default(),
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables.
    ///
    /// Environment variables are expected to be prefixed with `MCP_`.
    /// For example: `MCP_SERVER_NAME`, `MCP_LOG_LEVEL`, `MCP_FACTS_DATASET`.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Ok(dataset_path) = std::env::var("MCP_FACTS_DATASET") {
            config.facts.dataset_path = PathBuf::from(dataset_path);
            info!(
                "Facts dataset path set to {}",
                config.facts.dataset_path.display()
            );
        }

        if let Ok(threshold) = std::env::var("MCP_FACTS_THRESHOLD") {
            match threshold.parse::<f64>() {
                Ok(value) if (0.0..=1.0).contains(&value) => {
                    config.facts.similarity_threshold = value;
                    info!("Similarity threshold set to {}", value);
                }
                _ => {
                    warn!(
                        "Ignoring invalid MCP_FACTS_THRESHOLD {:?} (expected a number in [0, 1]), \
                         keeping {}",
                        threshold, config.facts.similarity_threshold
                    );
                }
            }
        }

        // Load transport configuration from environment
        config.transport = TransportConfig::from_env();

        config
    }
}
