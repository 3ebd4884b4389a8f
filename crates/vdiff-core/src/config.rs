//! Reconciliation configuration.
//!
//! A [`DiffConfig`] can be built in code, parsed from TOML, or read from the
//! environment:
//!
//! ```toml
//! traversal = "work_stack"
//! log_profile = "production"
//! ```
//!
//! | Variable            | Values                                 |
//! |---------------------|----------------------------------------|
//! | `VDIFF_TRAVERSAL`   | `recursive`, `work_stack`              |
//! | `VDIFF_LOG_PROFILE` | `development`, `production`, `test`    |

use crate::errors::{Result, VdiffError};
use crate::logging_facility::Profile;
use crate::{log_op_end, log_op_error, log_op_start};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const ENV_TRAVERSAL: &str = "VDIFF_TRAVERSAL";
pub const ENV_LOG_PROFILE: &str = "VDIFF_LOG_PROFILE";

/// How the engine walks matched child pairs.
///
/// Both strategies produce identical patch sequences.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Traversal {
    /// Plain structural recursion
    #[default]
    Recursive,
    /// Explicit heap-allocated stack; safe for very deep trees
    WorkStack,
}

impl Traversal {
    pub fn as_str(&self) -> &'static str {
        match self {
            Traversal::Recursive => "recursive",
            Traversal::WorkStack => "work_stack",
        }
    }
}

impl fmt::Display for Traversal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Traversal {
    type Err = VdiffError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "recursive" => Ok(Traversal::Recursive),
            "work_stack" | "workstack" => Ok(Traversal::WorkStack),
            _ => Err(VdiffError::UnknownTraversal {
                value: s.to_string(),
            }),
        }
    }
}

/// Engine configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DiffConfig {
    pub traversal: Traversal,
    pub log_profile: Profile,
}

impl DiffConfig {
    pub fn with_traversal(mut self, traversal: Traversal) -> Self {
        self.traversal = traversal;
        self
    }

    /// Parse a TOML document. Missing keys keep their defaults.
    ///
    /// # Errors
    ///
    /// - `InvalidConfig`: malformed TOML, unknown keys or unknown values
    pub fn from_toml_str(text: &str) -> Result<Self> {
        log_op_start!("load_config", source = "toml");
        let start = std::time::Instant::now();

        let config = toml::from_str::<DiffConfig>(text)
            .map_err(VdiffError::from)
            .map_err(|e| {
                log_op_error!(
                    "load_config",
                    e.clone(),
                    duration_ms = start.elapsed().as_millis() as u64
                );
                e
            })?;

        log_op_end!(
            "load_config",
            duration_ms = start.elapsed().as_millis() as u64,
            traversal = config.traversal.as_str()
        );
        Ok(config)
    }

    /// Read `VDIFF_TRAVERSAL` and `VDIFF_LOG_PROFILE` from the process
    /// environment.
    ///
    /// # Errors
    ///
    /// - `UnknownTraversal` / `UnknownProfile`: a variable is set to an
    ///   unrecognised value
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Same as [`DiffConfig::from_env`] with an injectable variable lookup.
    ///
    /// Unset, empty and whitespace-only values keep the default.
    ///
    /// # Errors
    ///
    /// - `UnknownTraversal` / `UnknownProfile`: a variable is set to an
    ///   unrecognised value
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        log_op_start!("load_config", source = "env");
        let start = std::time::Instant::now();

        let read = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        let mut config = DiffConfig::default();

        let parsed = (|| -> Result<()> {
            if let Some(value) = read(ENV_TRAVERSAL) {
                config.traversal = value.parse()?;
            }
            if let Some(value) = read(ENV_LOG_PROFILE) {
                config.log_profile = value.parse()?;
            }
            Ok(())
        })();

        if let Err(e) = parsed {
            log_op_error!(
                "load_config",
                e.clone(),
                duration_ms = start.elapsed().as_millis() as u64
            );
            return Err(e);
        }

        log_op_end!(
            "load_config",
            duration_ms = start.elapsed().as_millis() as u64,
            traversal = config.traversal.as_str()
        );
        Ok(config)
    }
}
