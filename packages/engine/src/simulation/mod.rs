//! Field - spring-bound particle cloud with interactive wells
//!
//! FieldCore only orchestrates; the work lives in systems/:
//! - integrator/  spring-to-home step over every particle
//! - wells/       registry, collapse burst, optional pull
//! - interaction/ click -> collapse or create
//!
//! Tick order is fixed: integrate, optional pull, well aging, publish.
//! Clicks are applied between ticks, so a burst always lands before the next
//! integration step.

use glam::{Vec2, Vec3};

use crate::domain::{FieldConfig, FieldError};
use crate::spatial::{CameraSample, ParticleStore};
use crate::systems::interaction::Interaction;
use crate::systems::wells::{Well, WellRegistry};

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "step/step.rs"]
mod step;
#[path = "commands/commands.rs"]
mod commands;
#[path = "render/render_extract.rs"]
mod render_extract;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
mod facade;

pub use facade::{AbiLayout, ClickResult, Field};
pub use perf_stats::PerfStats;

/// Floats per well record in the transfer buffer:
/// id, x, y, z, r, g, b, normalized_age, ramp
pub const WELL_RECORD_STRIDE: usize = 9;

/// What the renderer needs to draw one well.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WellView {
    pub id: u32,
    pub position: Vec3,
    pub color: Vec3,
    pub normalized_age: f32,
    pub ramp: f32,
}

pub(crate) struct RenderBuffers {
    /// Set when any particle moved since the host last took it.
    positions_dirty: bool,
    /// Flat well records, `WELL_RECORD_STRIDE` floats each
    well_transfer: Vec<f32>,
}

pub(crate) struct AbiLayoutData {
    pub(crate) positions_ptr: *const f32,
    pub(crate) colors_ptr: *const f32,
    pub(crate) home_ptr: *const f32,
    pub(crate) column_len_elements: usize,
    pub(crate) column_len_bytes: usize,
    pub(crate) wells_ptr: *const f32,
    pub(crate) wells_len_elements: usize,
    pub(crate) wells_len_bytes: usize,
}

/// The simulation field
pub struct FieldCore {
    config: FieldConfig,
    particles: ParticleStore,
    wells: WellRegistry,
    render: RenderBuffers,

    // State
    frame: u64,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: PerfStats,
}

impl FieldCore {
    /// Field with default settings and `particle_count` particles
    pub fn new(particle_count: usize) -> Result<Self, FieldError> {
        init::create_field_core(FieldConfig::with_particle_count(particle_count))
    }

    pub fn with_config(config: FieldConfig) -> Result<Self, FieldError> {
        init::create_field_core(config)
    }

    pub fn from_config_json(json: &str) -> Result<Self, FieldError> {
        init::create_field_core(FieldConfig::from_json(json)?)
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    pub fn particles(&self) -> &ParticleStore {
        &self.particles
    }

    pub fn wells(&self) -> &[Well] {
        self.wells.wells()
    }

    pub fn well_registry(&self) -> &WellRegistry {
        &self.wells
    }

    pub fn particle_count(&self) -> usize {
        self.particles.len()
    }

    pub fn well_count(&self) -> usize {
        self.wells.len()
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        settings::get_perf_stats(self)
    }

    /// Advance the field by one host frame of `delta` seconds
    pub fn step(&mut self, delta: f32) {
        step::step(self, delta);
    }

    /// Collapse the well at a field-local point, or create one there
    pub fn press_at(&mut self, point: Vec3) -> Interaction {
        commands::press_at(self, point)
    }

    /// Resolve a pointer click through the camera, then press
    pub fn click(&mut self, camera: &CameraSample, pointer_ndc: Vec2) -> Interaction {
        commands::click(self, camera, pointer_ndc)
    }

    /// Remove every well without bursting
    pub fn clear_wells(&mut self) {
        commands::clear_wells(self);
    }

    /// Rebuild the particle cloud from the current config and drop all wells
    pub fn reset(&mut self) {
        commands::reset(self);
    }

    /// Validate `config`, then rebuild the field with it. On error nothing changes.
    pub fn reconfigure(&mut self, config: FieldConfig) -> Result<(), FieldError> {
        commands::reconfigure(self, config)
    }

    // === RENDER API ===

    /// Whether positions changed since the last call; clears the flag
    pub fn take_positions_dirty(&mut self) -> bool {
        render_extract::take_positions_dirty(self)
    }

    pub fn positions_dirty(&self) -> bool {
        self.render.positions_dirty
    }

    /// Well records as of the last publish (`WELL_RECORD_STRIDE` floats each)
    pub fn well_buffer(&self) -> &[f32] {
        &self.render.well_transfer
    }

    pub fn well_views(&self) -> Vec<WellView> {
        render_extract::well_views(self)
    }

    pub fn positions_ptr(&self) -> *const f32 {
        self.particles.positions_ptr()
    }

    pub fn colors_ptr(&self) -> *const f32 {
        self.particles.colors_ptr()
    }

    pub fn home_ptr(&self) -> *const f32 {
        self.particles.home_ptr()
    }

    /// f32 elements per column (3 per particle)
    pub fn column_len(&self) -> usize {
        self.particles.column_len()
    }

    pub fn column_len_bytes(&self) -> usize {
        self.particles.column_len() * std::mem::size_of::<f32>()
    }

    pub fn wells_ptr(&self) -> *const f32 {
        self.render.well_transfer.as_ptr()
    }

    pub fn wells_len(&self) -> usize {
        self.render.well_transfer.len()
    }

    pub(crate) fn abi_layout_data(&self) -> AbiLayoutData {
        AbiLayoutData {
            positions_ptr: self.positions_ptr(),
            colors_ptr: self.colors_ptr(),
            home_ptr: self.home_ptr(),
            column_len_elements: self.column_len(),
            column_len_bytes: self.column_len_bytes(),
            wells_ptr: self.wells_ptr(),
            wells_len_elements: self.wells_len(),
            wells_len_bytes: self.wells_len() * std::mem::size_of::<f32>(),
        }
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
