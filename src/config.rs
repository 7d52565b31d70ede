//! Startup configuration
//!
//! Three layers, later ones winning: built-in defaults, an optional TOML
//! file, then command-line flags. A config file looks like:
//!
//! ```toml
//! default_speed_ms = 300
//! initial_algorithm = "quick-sort"
//! log_file = "algotty.log"
//! log_filter = "algotty=debug"
//!
//! [params.quick-sort]
//! array = [9, 3, 7, 1]
//!
//! [params.binary-search]
//! target = 11
//! ```

use crate::params::{default_inputs, ParamError, ParamSpec};
use crate::registry::Registry;
use crate::snapshot::DEFAULT_HISTORY_LIMIT;
use crate::value::Value;
use rustc_hash::FxHashMap;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("unknown algorithm '{0}' in config")]
    UnknownAlgorithm(String),

    #[error("algorithm '{algorithm}' has no parameter '{param}'")]
    UnknownParam { algorithm: String, param: String },

    #[error("default_speed_ms must be greater than zero")]
    ZeroSpeed,

    #[error("default_speed_ms does not fit '{algorithm}': {source}")]
    Speed {
        algorithm: String,
        #[source]
        source: ParamError,
    },

    #[error("invalid override for '{algorithm}': {source}")]
    InvalidParam {
        algorithm: String,
        #[source]
        source: ParamError,
    },
}

/// A parameter override as written in TOML: text, a number or a list
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum RawParam {
    Text(String),
    Number(Value),
    List(Vec<Value>),
}

impl RawParam {
    /// The field text the input adapter expects
    pub fn to_input(&self) -> String {
        match self {
            RawParam::Text(s) => s.clone(),
            RawParam::Number(n) => n.to_string(),
            RawParam::List(values) => values
                .iter()
                .map(Value::to_string)
                .collect::<Vec<_>>()
                .join(","),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Delay for frames that carry no speed, and prefill for speed fields
    pub default_speed_ms: u64,
    pub initial_algorithm: String,
    pub history_limit_bytes: usize,
    pub log_file: Option<PathBuf>,
    pub log_filter: Option<String>,
    /// Field overrides keyed by algorithm id, then parameter id
    pub params: FxHashMap<String, FxHashMap<String, RawParam>>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            default_speed_ms: 500,
            initial_algorithm: "linear-search".to_string(),
            history_limit_bytes: DEFAULT_HISTORY_LIMIT,
            log_file: None,
            log_filter: None,
            params: FxHashMap::default(),
        }
    }
}

impl Config {
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// The file at `path`, or the defaults when no path is given
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_toml_file(path),
            None => Ok(Config::default()),
        }
    }

    /// Check every algorithm and parameter id against `registry`, and every
    /// value that will pre-fill a field against that field's schema
    pub fn validate(&self, registry: &Registry) -> Result<(), ConfigError> {
        if self.default_speed_ms == 0 {
            return Err(ConfigError::ZeroSpeed);
        }
        if !registry.contains(&self.initial_algorithm) {
            return Err(ConfigError::UnknownAlgorithm(self.initial_algorithm.clone()));
        }
        let speed = self.default_speed_ms.to_string();
        for meta in registry.iter() {
            if let Some(spec) = meta.params.iter().find(|p| p.id == "speed") {
                spec.parse(&speed).map_err(|source| ConfigError::Speed {
                    algorithm: meta.id.to_string(),
                    source,
                })?;
            }
        }
        for (algorithm, fields) in &self.params {
            let meta = registry
                .get(algorithm)
                .map_err(|_| ConfigError::UnknownAlgorithm(algorithm.clone()))?;
            for (id, value) in fields {
                let Some(spec) = meta.params.iter().find(|p| p.id == id.as_str()) else {
                    return Err(ConfigError::UnknownParam {
                        algorithm: algorithm.clone(),
                        param: id.clone(),
                    });
                };
                spec.parse(&value.to_input())
                    .map_err(|source| ConfigError::InvalidParam {
                        algorithm: algorithm.clone(),
                        source,
                    })?;
            }
        }
        Ok(())
    }

    pub fn default_delay(&self) -> Duration {
        Duration::from_millis(self.default_speed_ms)
    }

    /// Set one field override, replacing any earlier value
    pub fn set_param(&mut self, algorithm: &str, param: &str, value: RawParam) {
        self.params
            .entry(algorithm.to_string())
            .or_default()
            .insert(param.to_string(), value);
    }

    /// Initial field text for an algorithm: schema defaults, then the
    /// configured speed, then explicit overrides
    pub fn inputs_for(&self, algorithm: &str, schema: &[ParamSpec]) -> FxHashMap<String, String> {
        let mut inputs = default_inputs(schema);
        if let Some(speed) = inputs.get_mut("speed") {
            *speed = self.default_speed_ms.to_string();
        }
        if let Some(fields) = self.params.get(algorithm) {
            for (id, value) in fields {
                inputs.insert(id.clone(), value.to_input());
            }
        }
        inputs
    }
}
