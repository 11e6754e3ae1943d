//! # Configuration
//!
//! Runtime settings read from the environment at startup.
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | `MODEL_PATH` | `models/iris_model.json` | JSON model artifact loaded by the inference adapter |
//! | `ACTOR_BUFFER` | `32` | Channel capacity of every resource actor (must be > 0) |
//! | `SEED_DATA` | `true` | Start the collections with the sample todos and items |
//!
//! Log verbosity is controlled separately through `RUST_LOG`.

use std::env;
use std::path::PathBuf;
use thiserror::Error;

pub const DEFAULT_MODEL_PATH: &str = "models/iris_model.json";
pub const DEFAULT_ACTOR_BUFFER: usize = 32;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{name} must be {expected}, got {value:?}")]
    Invalid {
        name: &'static str,
        expected: &'static str,
        value: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub model_path: PathBuf,
    pub actor_buffer: usize,
    pub seed_data: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            model_path: PathBuf::from(DEFAULT_MODEL_PATH),
            actor_buffer: DEFAULT_ACTOR_BUFFER,
            seed_data: true,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds the config from any variable source. Unset or blank variables take their default.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        let model_path = var("MODEL_PATH").map_or(defaults.model_path, PathBuf::from);
        let actor_buffer = match var("ACTOR_BUFFER") {
            Some(raw) => parse_buffer(&raw)?,
            None => defaults.actor_buffer,
        };
        let seed_data = match var("SEED_DATA") {
            Some(raw) => parse_bool("SEED_DATA", &raw)?,
            None => defaults.seed_data,
        };

        Ok(Self {
            model_path,
            actor_buffer,
            seed_data,
        })
    }
}

fn parse_buffer(raw: &str) -> Result<usize, ConfigError> {
    match raw.trim().parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(ConfigError::Invalid {
            name: "ACTOR_BUFFER",
            expected: "a positive integer",
            value: raw.to_string(),
        }),
    }
}

fn parse_bool(name: &'static str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim() {
        "1" | "true" | "TRUE" | "yes" | "YES" => Ok(true),
        "0" | "false" | "FALSE" | "no" | "NO" => Ok(false),
        _ => Err(ConfigError::Invalid {
            name,
            expected: "a boolean",
            value: raw.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn defaults_apply_when_nothing_is_set() {
        assert_eq!(config(&[]).unwrap(), Config::default());
        assert_eq!(config(&[("ACTOR_BUFFER", "  ")]).unwrap(), Config::default());
    }

    #[test]
    fn variables_override_defaults() {
        let config = config(&[
            ("MODEL_PATH", "/srv/model.json"),
            ("ACTOR_BUFFER", "8"),
            ("SEED_DATA", "no"),
        ])
        .unwrap();
        assert_eq!(config.model_path, PathBuf::from("/srv/model.json"));
        assert_eq!(config.actor_buffer, 8);
        assert!(!config.seed_data);
    }

    #[test]
    fn zero_buffer_is_rejected() {
        let err = config(&[("ACTOR_BUFFER", "0")]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "ACTOR_BUFFER must be a positive integer, got \"0\""
        );
    }

    #[test]
    fn unknown_boolean_names_the_variable() {
        let err = config(&[("SEED_DATA", "maybe")]).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { name: "SEED_DATA", .. }));
    }
}
