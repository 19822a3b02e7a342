// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::{bail, Result};
use std::env;

use crate::constants::{env as vars, DEFAULT_FIELD_MANAGER};

/// Runtime configuration, passed explicitly to the operations that need it
#[derive(Debug, Clone)]
pub struct Config {
    /// Emit debug level logs
    pub debug: bool,
    /// Field manager recorded by the API server for apply patches
    pub field_manager: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            debug: false,
            field_manager: DEFAULT_FIELD_MANAGER.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        // Any non-empty value turns debugging on, "false" included
        let debug = lookup(vars::DEBUG).is_some_and(|v| !v.is_empty());
        let field_manager =
            lookup(vars::FIELD_MANAGER).unwrap_or_else(|| DEFAULT_FIELD_MANAGER.to_string());
        if field_manager.trim().is_empty() {
            bail!("{} must not be empty", vars::FIELD_MANAGER);
        }

        Ok(Config {
            debug,
            field_manager,
        })
    }
}
