// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! Process configuration
//!
//! Bind address and port, read once at startup from CLI flags with
//! environment fallbacks (`EMBED_BIND`, `EMBED_PORT`).

use crate::version::{SERVICE_NAME, VERSION_NUMBER};
use clap::Parser;

pub const DEFAULT_BIND: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8005;

/// Deterministic embedding demo server
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = SERVICE_NAME)]
#[command(version = VERSION_NUMBER)]
#[command(about = "Stand-in embedding service returning deterministic vectors", long_about = None)]
pub struct ServerConfig {
    /// Address or hostname to bind the HTTP listener to
    #[arg(long, env = "EMBED_BIND", default_value = DEFAULT_BIND)]
    pub bind: String,

    /// Port to listen on
    #[arg(long, env = "EMBED_PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: DEFAULT_BIND.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl ServerConfig {
    /// `host:port` form used for binding and logging.
    ///
    /// IPv6 literals are bracketed.
    pub fn listen_address(&self) -> String {
        if self.bind.contains(':') && !self.bind.starts_with('[') {
            format!("[{}]:{}", self.bind, self.port)
        } else {
            format!("{}:{}", self.bind, self.port)
        }
    }
}
