//! Engine configuration
//!
//! Every field has a default, so an empty file is a valid configuration:
//!
//! ```toml
//! crm_utility = "cibadmin"
//!
//! [poll]
//! max_retries = 10
//! retry_delay_ms = 2000
//! ```

use crate::poller::PollConfig;
use crmcib_core::errors::{CibError, Result};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

pub const DEFAULT_CRM_UTILITY: &str = "cibadmin";
pub const DEFAULT_MAX_RETRIES: u32 = 10;
pub const DEFAULT_RETRY_DELAY_MS: u64 = 2000;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    /// Path or name of the CIB administration utility
    pub crm_utility: String,
    pub poll: PollSettings,
}

/// Tunables of the stop poller
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PollSettings {
    /// Extra read cycles after the initial read before giving up
    pub max_retries: u32,
    pub retry_delay_ms: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            crm_utility: DEFAULT_CRM_UTILITY.to_string(),
            poll: PollSettings::default(),
        }
    }
}

impl Default for PollSettings {
    fn default() -> Self {
        Self {
            max_retries: DEFAULT_MAX_RETRIES,
            retry_delay_ms: DEFAULT_RETRY_DELAY_MS,
        }
    }
}

impl EngineConfig {
    /// Parse a TOML document
    ///
    /// # Errors
    ///
    /// Returns `Config` if the text is not valid TOML or has unknown keys.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| CibError::Config {
            message: e.to_string(),
        })
    }

    /// Load a TOML file
    ///
    /// # Errors
    ///
    /// Returns `Config` if the file cannot be read or parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| CibError::Config {
            message: format!("cannot read {}: {}", path.display(), e),
        })?;
        Self::from_toml_str(&text)
    }

    pub fn poll_config(&self) -> PollConfig {
        PollConfig {
            max_retries: self.poll.max_retries,
            retry_delay: Duration::from_millis(self.poll.retry_delay_ms),
        }
    }
}
