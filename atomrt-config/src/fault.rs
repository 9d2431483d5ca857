//! Fault-path configuration.
//!
//! Options consumed by the runtime's reporting side. The diagnostic
//! block itself is contractually fixed; these options only control what
//! may be appended after it.

use figment::{
    providers::{Env, Serialized},
    Figment,
};
use serde::{Deserialize, Serialize};
use validator::{self, Validate};

/// Fault reporting parameters.
#[derive(Debug, Serialize, Deserialize, Validate, Clone)]
pub struct FaultConfig {
    /// Print a captured backtrace after the closing separator of the
    /// diagnostic block.
    #[serde(default)]
    pub backtrace: bool,
}

impl Default for FaultConfig {
    fn default() -> Self {
        Self { backtrace: false }
    }
}

impl FaultConfig {
    /// Environment-only view (`ATOMRT_FAULT__*`).
    ///
    /// For consumers inside a process that is already terminating: no
    /// filesystem access, and any malformed value falls back to the
    /// defaults rather than erroring.
    pub fn from_env() -> Self {
        Figment::from(Serialized::defaults(FaultConfig::default()))
            .merge(Env::prefixed("ATOMRT_FAULT__"))
            .extract()
            .unwrap_or_default()
    }
}
