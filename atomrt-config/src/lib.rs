//! # Atom Runtime Configuration
//!
//! Hierarchical configuration for the Atom runtime support library.
//!
//! ## Features
//! - **Unified Configuration**: Single source of truth for the fault
//!   path and the harness
//! - **Validation**: Runtime validation of every loaded parameter
//! - **Environment Awareness**: `ATOMRT_*` variables override any file
//!
//! The runtime's hot path never reads configuration; only the cold fault
//! path and the harness do.

#![warn(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::path::{Path, PathBuf};

use figment::{
    providers::{Env, Format, Serialized, Yaml},
    Figment,
};
use serde::{Deserialize, Serialize};
use validator::Validate;

mod error;
mod fault;
mod telemetry;
mod validation;

pub use error::ConfigError;
pub use fault::FaultConfig;
pub use telemetry::TelemetryConfig;

/// Top-level configuration container for the Atom runtime.
#[derive(Debug, Serialize, Deserialize, Validate, Default)]
pub struct AtomRtConfig {
    /// Fault reporting options.
    #[validate(nested)]
    pub fault: FaultConfig,

    /// Telemetry and observability configuration.
    #[validate(nested)]
    pub telemetry: TelemetryConfig,
}

impl AtomRtConfig {
    /// Load configuration from default files and environment.
    ///
    /// Hierarchy:
    /// 1. Default Values
    /// 2. `config/atomrt.yaml` - Base settings. If missing, defaults are used.
    /// 3. `ATOMRT_*` environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        // Start with defaults.
        let mut figment = Figment::from(Serialized::defaults(AtomRtConfig::default()));

        if Path::new("config/atomrt.yaml").exists() {
            figment = figment.merge(Yaml::file("config/atomrt.yaml"));
        }

        figment
            .merge(Env::prefixed("ATOMRT_").split("__"))
            .extract()
            .map_err(ConfigError::from)
            .and_then(|config: Self| {
                config.validate()?;
                Ok(config)
            })
    }

    /// Load configuration from a specific path for testing/validation.
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ConfigError::FileNotFound(PathBuf::from(
                path.to_string_lossy().to_string(),
            )));
        }

        Figment::from(Serialized::defaults(AtomRtConfig::default()))
            .merge(Yaml::file(path))
            .merge(Env::prefixed("ATOMRT_").split("__"))
            .extract()
            .map_err(ConfigError::from)
            .and_then(|config: Self| {
                config.validate()?;
                Ok(config)
            })
    }
}
