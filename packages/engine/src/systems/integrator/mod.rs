//! Integrator - spring-to-home velocity update and position advance
//!
//! Per particle, per step:
//! 1. `v += (home - p) * k * dt`
//! 2. `v *= damping` (a fixed per-step factor, not time-scaled)
//! 3. `p += v * dt` unless the particle has settled (|vx|+|vy|+|vz| <= epsilon)
//!
//! No particle reads another particle's state, so the `parallel` feature can
//! split the columns across the rayon pool freely.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::domain::FieldConfig;
use crate::spatial::ParticleStore;

/// Clamp a host frame delta to a usable step: non-finite or negative becomes
/// 0, long frames are cut to `max_delta`.
#[inline]
pub fn clamp_delta(delta: f32, max_delta: f32) -> f32 {
    if !delta.is_finite() || delta <= 0.0 {
        0.0
    } else {
        delta.min(max_delta)
    }
}

/// Advance one particle. Returns true if its position changed.
#[inline(always)]
fn integrate_particle(
    p: &mut [f32],
    v: &mut [f32],
    home: &[f32],
    k_dt: f32,
    damping: f32,
    dt: f32,
    settle_epsilon: f32,
) -> bool {
    for a in 0..3 {
        v[a] += (home[a] - p[a]) * k_dt;
        v[a] *= damping;
    }

    if v[0].abs() + v[1].abs() + v[2].abs() > settle_epsilon {
        for a in 0..3 {
            p[a] += v[a] * dt;
        }
        true
    } else {
        false
    }
}

/// Step every particle once. Returns how many particles moved; zero means the
/// position column is unchanged and need not be re-uploaded.
pub fn integrate(store: &mut ParticleStore, config: &FieldConfig, delta: f32) -> u32 {
    let dt = clamp_delta(delta, config.max_delta);
    let k_dt = config.spring_k * dt;
    let damping = config.damping;
    let eps = config.settle_epsilon;

    let (positions, velocities, home) = store.columns_mut();

    #[cfg(feature = "parallel")]
    let moved: u32 = positions
        .par_chunks_exact_mut(3)
        .zip(velocities.par_chunks_exact_mut(3))
        .zip(home.par_chunks_exact(3))
        .map(|((p, v), h)| integrate_particle(p, v, h, k_dt, damping, dt, eps) as u32)
        .sum();

    #[cfg(not(feature = "parallel"))]
    let moved: u32 = positions
        .chunks_exact_mut(3)
        .zip(velocities.chunks_exact_mut(3))
        .zip(home.chunks_exact(3))
        .map(|((p, v), h)| integrate_particle(p, v, h, k_dt, damping, dt, eps) as u32)
        .sum();

    moved
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;
    use crate::core::utils::random::{range_f32, seed_state};

    fn field(count: usize) -> (ParticleStore, FieldConfig) {
        let config = FieldConfig::with_particle_count(count);
        let mut rng = seed_state(3);
        let store = ParticleStore::new(&config, &mut rng).expect("store");
        (store, config)
    }

    fn scatter(store: &mut ParticleStore, amount: f32) {
        let mut rng = seed_state(11);
        for i in 0..store.len() {
            let offset = Vec3::new(
                range_f32(&mut rng, -amount, amount),
                range_f32(&mut rng, -amount, amount),
                range_f32(&mut rng, -amount, amount),
            );
            store.set_position(i, store.home_at(i) + offset);
            store.set_velocity(i, -offset);
        }
    }

    fn max_displacement(store: &ParticleStore) -> f32 {
        (0..store.len())
            .map(|i| (store.position_at(i) - store.home_at(i)).length())
            .fold(0.0, f32::max)
    }

    #[test]
    fn delta_is_clamped() {
        assert_eq!(clamp_delta(0.016, 0.05), 0.016);
        assert_eq!(clamp_delta(2.0, 0.05), 0.05);
        assert_eq!(clamp_delta(-1.0, 0.05), 0.0);
        assert_eq!(clamp_delta(f32::NAN, 0.05), 0.0);
        assert_eq!(clamp_delta(f32::INFINITY, 0.05), 0.0);
    }

    #[test]
    fn settled_field_does_not_move() {
        let (mut store, config) = field(200);
        let before = store.positions().to_vec();
        assert_eq!(integrate(&mut store, &config, 1.0 / 60.0), 0);
        assert_eq!(store.positions(), &before[..]);
    }

    #[test]
    fn single_step_matches_hand_computation() {
        let (mut store, config) = field(1);
        let home = store.home_at(0);
        store.set_position(0, home + Vec3::new(1.0, 0.0, 0.0));
        let dt = 0.02;

        assert_eq!(integrate(&mut store, &config, dt), 1);

        let expected_v = -1.0 * config.spring_k * dt * config.damping;
        let v = store.velocity_at(0);
        assert!((v.x - expected_v).abs() < 1e-7);
        assert_eq!(v.y, 0.0);
        let p = store.position_at(0);
        assert!((p.x - (home.x + 1.0 + expected_v * dt)).abs() < 1e-5);
    }

    #[test]
    fn damping_applies_even_with_zero_delta() {
        let (mut store, config) = field(1);
        store.set_velocity(0, Vec3::new(1.0, -2.0, 0.5));
        integrate(&mut store, &config, 0.0);
        let v = store.velocity_at(0);
        assert!((v - Vec3::new(1.0, -2.0, 0.5) * config.damping).length() < 1e-6);
    }

    #[test]
    fn long_frames_step_no_further_than_max_delta() {
        let (mut a, config) = field(50);
        let (mut b, _) = field(50);
        scatter(&mut a, 5.0);
        scatter(&mut b, 5.0);
        integrate(&mut a, &config, 3.0);
        integrate(&mut b, &config, config.max_delta);
        assert_eq!(a.positions(), b.positions());
    }

    #[test]
    fn displaced_particles_return_home() {
        let (mut store, config) = field(1000);
        scatter(&mut store, 20.0);
        let start = max_displacement(&store);

        let mut checkpoints = Vec::new();
        for tick in 0..3000 {
            integrate(&mut store, &config, config.max_delta);
            if tick % 500 == 499 {
                checkpoints.push(max_displacement(&store));
            }
        }

        assert!(checkpoints[0] < start);
        for pair in checkpoints.windows(2) {
            assert!(pair[1] <= pair[0] + 1e-4, "displacement grew: {:?}", checkpoints);
        }
        assert!(*checkpoints.last().unwrap() < 0.01, "final {:?}", checkpoints);
    }

    #[test]
    fn ten_thousand_ticks_stay_finite() {
        for delta in [1.0 / 240.0, 1.0 / 60.0, 0.05] {
            let (mut store, config) = field(300);
            scatter(&mut store, 50.0);
            for _ in 0..10_000 {
                integrate(&mut store, &config, delta);
            }
            assert!(store.positions().iter().all(|x| x.is_finite()));
            assert!(store.velocities().iter().all(|x| x.is_finite()));
            assert!(max_displacement(&store) < 50.0 * 3f32.sqrt());
        }
    }
}
