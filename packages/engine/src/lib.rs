//! Gravwell Engine - interactive particle field in WASM
//!
//! A cloud of particles sprung to fixed home positions. Clicks place gravity
//! wells; clicking a well again collapses it into a radial burst, and the
//! springs pull everything back home.
//!
//! Architecture:
//! - core/          - Macros, logging, PRNG
//! - domain/        - Config, errors, palettes
//! - spatial/       - Particle columns, picking geometry
//! - systems/       - Integrator, wells, interaction
//! - simulation/    - Orchestration and the wasm facade
//! - api/           - Public API

// Macros first so every later module sees them.
#[macro_use]
pub mod core;
pub mod domain;
pub mod spatial;
pub mod systems;
pub mod simulation;

pub mod api {
    pub mod wasm {
        pub use crate::simulation::{AbiLayout, ClickResult, Field, PerfStats};
    }
}

pub use domain::{FieldConfig, FieldError, WellAging};
pub use simulation::{FieldCore, WellView, WELL_RECORD_STRIDE};
pub use spatial::CameraSample;
pub use systems::interaction::Interaction;

use wasm_bindgen::prelude::*;

// Thread pool setup for the parallel integrator (browser only)
#[cfg(all(feature = "parallel", target_arch = "wasm32"))]
pub use wasm_bindgen_rayon::init_thread_pool;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    console_log!("Gravwell engine {} initialized", env!("CARGO_PKG_VERSION"));
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

pub use api::wasm::Field;

/// Floats per record in the well buffer
#[wasm_bindgen]
pub fn well_record_stride() -> u32 {
    WELL_RECORD_STRIDE as u32
}

/// Default config as JSON, for hosts that want to tweak a few keys
#[wasm_bindgen]
pub fn default_config_json() -> String {
    FieldConfig::default().to_json()
}
