//! Immutable machine configuration.
//!
//! Everything that would otherwise be a module-wide constant (the alphabet,
//! the names of the distinguished states, the characters state names may not
//! contain) lives in a [`MachineConfig`] value handed to every builder.

use super::symbol::Alphabet;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while loading or checking a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("alphabet characters must be distinct: {0:?}")]
    AmbiguousAlphabet(Alphabet),

    #[error("special state name for {role} is empty")]
    EmptyStateName { role: &'static str },

    #[error("special states must have distinct names, '{name}' is used twice")]
    DuplicateStateName { name: String },

    #[error("field width must be at least one bit")]
    ZeroFieldWidth,

    #[error("field width {bits} exceeds the {max}-bit codec limit")]
    FieldTooWide { bits: usize, max: usize },

    #[error("failed to parse configuration: {0}")]
    Json(#[from] serde_json::Error),
}

/// Alphabet, special state names and reserved characters for one family of
/// machines.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MachineConfig {
    pub alphabet: Alphabet,
    pub initial_state: String,
    pub accept_state: String,
    pub reject_state: String,
    /// Characters the Vim emitter uses as record delimiters.
    pub reserved: Vec<char>,
}

impl Default for MachineConfig {
    fn default() -> Self {
        Self {
            alphabet: Alphabet::default(),
            initial_state: "initial_state".to_string(),
            accept_state: "YES".to_string(),
            reject_state: "NO".to_string(),
            reserved: vec!['-', ':', '|'],
        }
    }
}

impl MachineConfig {
    /// Preset whose blank survives Vim's word motions.
    pub fn vim() -> Self {
        Self {
            alphabet: Alphabet {
                blank: 'X',
                ..Alphabet::default()
            },
            ..Self::default()
        }
    }

    /// Parse and check a JSON configuration. Missing fields take defaults.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.alphabet.is_unambiguous() {
            return Err(ConfigError::AmbiguousAlphabet(self.alphabet));
        }

        let roles = [
            ("initial", &self.initial_state),
            ("accept", &self.accept_state),
            ("reject", &self.reject_state),
        ];
        for (i, (role, name)) in roles.iter().enumerate() {
            if name.is_empty() {
                return Err(ConfigError::EmptyStateName { role: *role });
            }
            if roles[i + 1..].iter().any(|(_, other)| other == name) {
                return Err(ConfigError::DuplicateStateName {
                    name: name.to_string(),
                });
            }
        }

        Ok(())
    }
}
