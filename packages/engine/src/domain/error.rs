//! Error types for field construction and configuration.
//!
//! Interaction outcomes (missed clicks, wells at capacity) are not errors;
//! see `systems::interaction::Interaction`.

use std::fmt;

#[derive(Debug)]
pub enum FieldError {
    /// A field needs at least one particle.
    EmptyPopulation,
    /// A configuration value is out of range.
    InvalidConfig(String),
    /// Configuration JSON did not parse.
    ConfigParse(serde_json::Error),
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldError::EmptyPopulation => write!(f, "particle_count must be greater than zero"),
            FieldError::InvalidConfig(msg) => write!(f, "invalid field config: {}", msg),
            FieldError::ConfigParse(e) => write!(f, "failed to parse field config: {}", e),
        }
    }
}

impl std::error::Error for FieldError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FieldError::ConfigParse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for FieldError {
    fn from(e: serde_json::Error) -> Self {
        FieldError::ConfigParse(e)
    }
}
