use glam::Vec3;

use crate::domain::FieldConfig;
use crate::spatial::ParticleStore;

/// Radial velocity kick away from `center`.
///
/// Particles strictly inside `burst_radius` get `burst_strength * (1 - d / r)`
/// along the outward direction; particles within `sqrt(burst_min_dist_sq)` of
/// the center have no usable direction and are skipped. Positions are left
/// alone. Returns how many particles were kicked.
pub fn burst(store: &mut ParticleStore, center: Vec3, config: &FieldConfig) -> u32 {
    let radius = config.burst_radius;
    let radius_sq = radius * radius;
    let min_dist_sq = config.burst_min_dist_sq;
    let peak = config.burst_strength;

    let count = store.len();
    let (positions, velocities) = store.kinematics_mut();
    let mut kicked = 0u32;

    for i in 0..count {
        let base = i * 3;
        let dx = *fast!(positions, [base]) - center.x;
        let dy = *fast!(positions, [base + 1]) - center.y;
        let dz = *fast!(positions, [base + 2]) - center.z;
        let dist_sq = dx * dx + dy * dy + dz * dz;
        // Written so a NaN distance also skips.
        if !(dist_sq > min_dist_sq && dist_sq < radius_sq) {
            continue;
        }

        let dist = dist_sq.sqrt();
        // Unit direction folded into the scale: (d / dist) * strength
        let scale = peak * (1.0 - dist / radius) / dist;
        let v = &mut velocities[base..base + 3];
        v[0] += dx * scale;
        v[1] += dy * scale;
        v[2] += dz * scale;
        kicked += 1;
    }

    kicked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::utils::random::seed_state;

    fn store_with(points: &[Vec3]) -> (ParticleStore, FieldConfig) {
        let config = FieldConfig::with_particle_count(points.len());
        let mut rng = seed_state(5);
        let mut store = ParticleStore::new(&config, &mut rng).expect("store");
        for (i, p) in points.iter().enumerate() {
            store.set_position(i, *p);
        }
        (store, config)
    }

    #[test]
    fn kicks_outward_with_linear_falloff() {
        let center = Vec3::new(1.0, 0.0, 0.0);
        let (mut store, config) = store_with(&[
            center + Vec3::new(3.0, 0.0, 0.0),
            center + Vec3::new(0.0, -6.0, 0.0),
            center + Vec3::new(0.0, 0.0, 9.0),
        ]);

        assert_eq!(burst(&mut store, center, &config), 3);

        let v0 = store.velocity_at(0);
        let v1 = store.velocity_at(1);
        let v2 = store.velocity_at(2);
        assert!((v0 - Vec3::new(45.0, 0.0, 0.0)).length() < 1e-4);
        assert!((v1 - Vec3::new(0.0, -30.0, 0.0)).length() < 1e-4);
        assert!((v2 - Vec3::new(0.0, 0.0, 15.0)).length() < 1e-4);
    }

    #[test]
    fn ignores_particles_outside_radius_or_on_center() {
        let center = Vec3::ZERO;
        let (mut store, config) = store_with(&[
            Vec3::new(12.0, 0.0, 0.0),
            Vec3::new(0.0, 20.0, 0.0),
            Vec3::new(0.01, 0.0, 0.01),
        ]);
        assert_eq!(burst(&mut store, center, &config), 0);
        assert!(store.velocities().iter().all(|v| *v == 0.0));
    }

    #[test]
    fn leaves_positions_untouched() {
        let center = Vec3::ZERO;
        let (mut store, config) = store_with(&[Vec3::new(2.0, 1.0, -1.0)]);
        let before = store.positions().to_vec();
        burst(&mut store, center, &config);
        assert_eq!(store.positions(), &before[..]);
    }

    #[test]
    fn non_finite_center_kicks_nothing() {
        let (mut store, config) = store_with(&[Vec3::new(1.0, 0.0, 0.0), Vec3::new(0.0, 3.0, 0.0)]);
        assert_eq!(burst(&mut store, Vec3::new(f32::NAN, 0.0, 0.0), &config), 0);
        assert_eq!(burst(&mut store, Vec3::new(0.0, f32::INFINITY, 0.0), &config), 0);
        assert!(store.velocities().iter().all(|v| *v == 0.0));
    }

    #[test]
    fn adds_to_existing_velocity() {
        let center = Vec3::ZERO;
        let (mut store, config) = store_with(&[Vec3::new(6.0, 0.0, 0.0)]);
        store.set_velocity(0, Vec3::new(0.0, 1.0, 0.0));
        burst(&mut store, center, &config);
        assert!((store.velocity_at(0) - Vec3::new(30.0, 1.0, 0.0)).length() < 1e-4);
    }
}
