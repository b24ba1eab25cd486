//! Fact-Verification MCP Server Library
//!
//! This crate provides a Model Context Protocol (MCP) server that checks
//! two competing factual claims against a curated reference dataset.
//!
//! # Architecture
//!
//! The server is organized into the following modules:
//!
//! - **core**: Core infrastructure including configuration, error handling,
//!   the main server, and transports
//! - **domains**: Business logic organized by bounded contexts
//!   - **facts**: Reference dataset, similarity scorer, and fact matcher
//!   - **tools**: MCP tools that can be executed by clients
//!
//! # Example
//!
//! ```rust,no_run
//! use factcheck_mcp_server::{core::Config, core::McpServer};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let server = McpServer::new(config);
//!     // Start the server...
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
