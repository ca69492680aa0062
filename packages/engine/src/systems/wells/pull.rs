use crate::domain::FieldConfig;
use crate::spatial::ParticleStore;
use crate::systems::integrator::clamp_delta;

use super::Well;

/// Continuous attraction toward live wells (off unless `well_pull > 0`).
///
/// Each well pulls particles inside `burst_radius` with acceleration
/// `well_pull * ramp * (1 - d / r)`, so a fresh well starts at zero strength
/// and reaches full pull after `well_ramp` seconds.
pub fn apply_pull(store: &mut ParticleStore, wells: &[Well], config: &FieldConfig, delta: f32) {
    if config.well_pull <= 0.0 || wells.is_empty() {
        return;
    }
    let dt = clamp_delta(delta, config.max_delta);
    let radius = config.burst_radius;
    let radius_sq = radius * radius;
    let min_dist_sq = config.burst_min_dist_sq;

    let count = store.len();
    let (positions, velocities) = store.kinematics_mut();

    for well in wells {
        let strength = config.well_pull * well.ramp(config.well_ramp) * dt;
        if strength <= 0.0 {
            continue;
        }
        let w = well.position;
        for i in 0..count {
            let base = i * 3;
            let dx = w.x - *fast!(positions, [base]);
            let dy = w.y - *fast!(positions, [base + 1]);
            let dz = w.z - *fast!(positions, [base + 2]);
            let dist_sq = dx * dx + dy * dy + dz * dz;
            if !(dist_sq > min_dist_sq && dist_sq < radius_sq) {
                continue;
            }
            let dist = dist_sq.sqrt();
            let scale = strength * (1.0 - dist / radius) / dist;
            let v = &mut velocities[base..base + 3];
            v[0] += dx * scale;
            v[1] += dy * scale;
            v[2] += dz * scale;
        }
    }
}
