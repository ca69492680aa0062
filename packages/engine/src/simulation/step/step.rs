use crate::systems::integrator::integrate;
use crate::systems::wells::apply_pull;

use super::perf_timer::{timed, PerfTimer};
use super::render_extract::publish_wells;
use super::FieldCore;

pub(super) fn step(field: &mut FieldCore, delta: f32) {
    let perf_on = field.perf_enabled;
    // Kicks landed by clicks since the last tick belong to this tick's stats.
    let burst_kicks = field.wells.take_burst_kicks();
    if perf_on {
        field.perf_stats.reset();
        field.perf_stats.particle_count = field.particles.len() as u32;
        // positions + velocities + home + colors, 3 f32 each
        field.perf_stats.memory_bytes = (field.particles.len() as u32).saturating_mul(48);
        field.perf_stats.burst_kicks = burst_kicks.min(u32::MAX as u64) as u32;
    }
    let step_start = if perf_on { Some(PerfTimer::start()) } else { None };

    // === INTEGRATE ===
    let (moved, integrate_ms) = timed(perf_on, || {
        integrate(&mut field.particles, &field.config, delta)
    });
    if moved > 0 {
        field.render.positions_dirty = true;
    }

    // === PULL (opt-in) ===
    let ((), pull_ms) = timed(perf_on, || {
        apply_pull(&mut field.particles, field.wells.wells(), &field.config, delta)
    });

    // === WELL AGING ===
    let (expired, wells_ms) = timed(perf_on, || field.wells.advance(delta, &field.config));
    if expired > 0 {
        console_log!("{} well(s) faded out, {} left", expired, field.wells.len());
    }

    // === PUBLISH ===
    let ((), publish_ms) = timed(perf_on, || publish_wells(field));

    field.frame += 1;

    if let Some(t0) = step_start {
        let stats = &mut field.perf_stats;
        stats.integrate_ms = integrate_ms;
        stats.pull_ms = pull_ms;
        stats.wells_ms = wells_ms;
        stats.publish_ms = publish_ms;
        stats.particles_moved = moved;
        stats.wells_active = field.wells.len() as u32;
        stats.wells_expired = expired;
        stats.step_ms = t0.elapsed_ms();
    }
}
