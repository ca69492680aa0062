use glam::{Vec2, Vec3};

use crate::domain::{FieldConfig, FieldError};
use crate::spatial::CameraSample;
use crate::systems::interaction::{self, Interaction};

use super::init::build_particles;
use super::render_extract::publish_wells;
use super::FieldCore;

pub(super) fn press_at(field: &mut FieldCore, point: Vec3) -> Interaction {
    let outcome = interaction::press(&mut field.wells, &mut field.particles, &field.config, point);
    after_interaction(field, outcome);
    outcome
}

pub(super) fn click(field: &mut FieldCore, camera: &CameraSample, pointer_ndc: Vec2) -> Interaction {
    let outcome = interaction::click(
        &mut field.wells,
        &mut field.particles,
        &field.config,
        camera,
        pointer_ndc,
    );
    after_interaction(field, outcome);
    outcome
}

fn after_interaction(field: &mut FieldCore, outcome: Interaction) {
    match outcome {
        Interaction::Created { id } => {
            console_log!("well {} created ({}/{})", id, field.wells.len(), field.wells.capacity());
        }
        Interaction::Collapsed { id } => {
            console_log!("well {} collapsed", id);
        }
        Interaction::AtCapacity | Interaction::Missed => return,
    }
    publish_wells(field);
}

pub(super) fn clear_wells(field: &mut FieldCore) {
    field.wells.clear();
    publish_wells(field);
}

pub(super) fn reset(field: &mut FieldCore) {
    // The config was validated on the way in, so rebuilding cannot fail;
    // keep the old cloud if it somehow does.
    match build_particles(&field.config) {
        Ok(particles) => field.particles = particles,
        Err(e) => console_warn!("reset kept the old particles: {}", e),
    }
    field.wells.clear();
    field.wells.set_capacity(field.config.max_wells);
    field.frame = 0;
    field.render.positions_dirty = true;
    field.perf_stats.reset();
    field.wells.take_burst_kicks();
    publish_wells(field);
}

/// Everything is built before anything is swapped, so an error leaves the
/// field exactly as it was.
pub(super) fn reconfigure(field: &mut FieldCore, config: FieldConfig) -> Result<(), FieldError> {
    let particles = config.validate().and_then(|()| build_particles(&config));
    let particles = match particles {
        Ok(particles) => particles,
        Err(e) => {
            console_warn!("reconfigure rejected: {}", e);
            return Err(e);
        }
    };

    field.config = config;
    field.particles = particles;
    field.wells.clear();
    field.wells.set_capacity(field.config.max_wells);
    field.frame = 0;
    field.render.positions_dirty = true;
    field.perf_stats.reset();
    field.wells.take_burst_kicks();
    publish_wells(field);

    console_log!(
        "field reconfigured: {} particles, {} well slots",
        field.particles.len(),
        field.config.max_wells
    );
    Ok(())
}
