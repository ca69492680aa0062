use crate::core::utils::random::seed_state;
use crate::domain::{FieldConfig, FieldError};
use crate::spatial::ParticleStore;
use crate::systems::wells::WellRegistry;

use super::perf_stats::PerfStats;
use super::render_extract;
use super::{FieldCore, RenderBuffers, WELL_RECORD_STRIDE};

pub(super) fn create_field_core(config: FieldConfig) -> Result<FieldCore, FieldError> {
    if let Err(e) = config.validate() {
        console_warn!("field config rejected: {}", e);
        return Err(e);
    }

    let particles = build_particles(&config)?;
    let wells = WellRegistry::new(config.max_wells);

    let mut field = FieldCore {
        render: RenderBuffers {
            // First frame always uploads.
            positions_dirty: true,
            well_transfer: Vec::with_capacity(config.max_wells * WELL_RECORD_STRIDE),
        },
        config,
        particles,
        wells,
        frame: 0,
        perf_enabled: false,
        perf_stats: PerfStats::default(),
    };
    render_extract::publish_wells(&mut field);

    console_log!(
        "field initialized: {} particles, {} well slots",
        field.particles.len(),
        field.config.max_wells
    );
    Ok(field)
}

/// Sample a fresh cloud; the same config always yields the same cloud.
pub(super) fn build_particles(config: &FieldConfig) -> Result<ParticleStore, FieldError> {
    let mut rng_state = seed_state(config.seed);
    ParticleStore::new(config, &mut rng_state)
}
