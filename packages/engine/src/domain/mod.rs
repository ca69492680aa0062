//! Domain types: configuration, palettes and errors.

pub mod config;
pub mod error;
pub mod palette;

pub use config::{FieldConfig, WellAging};
pub use error::FieldError;
