//! ParticleStore - Structure of Arrays (SoA) for the particle cloud
//!
//! Every column is a flat `[x0, y0, z0, x1, y1, z1, ...]` array of length 3N so
//! the JS renderer can wrap it in a `Float32Array` without copying.
//!
//! `home` and `colors` are written once here and never again; `positions` and
//! `velocities` are the only per-frame state.

use glam::Vec3;

use crate::core::utils::random::{bell_f32, next_index, range_f32};
use crate::domain::palette::{particle_tint, PARTICLE_PALETTE};
use crate::domain::config::PARTICLE_COUNT_LIMIT;
use crate::domain::{FieldConfig, FieldError};

mod accessors;

pub struct ParticleStore {
    count: usize,
    home: Vec<f32>,
    colors: Vec<f32>,
    pub(crate) positions: Vec<f32>,
    pub(crate) velocities: Vec<f32>,
}

impl ParticleStore {
    /// Sample a new cloud: bell-shaped homes stretched by `home_spread`,
    /// positions at home, zero velocity, palette tint at random brightness.
    pub fn new(config: &FieldConfig, rng_state: &mut u32) -> Result<Self, FieldError> {
        let count = config.particle_count;
        if count == 0 {
            return Err(FieldError::EmptyPopulation);
        }
        if count > PARTICLE_COUNT_LIMIT {
            return Err(FieldError::InvalidConfig(format!(
                "particle_count must not exceed {}",
                PARTICLE_COUNT_LIMIT
            )));
        }

        let len = count * 3;
        let mut home = Vec::with_capacity(len);
        let mut colors = Vec::with_capacity(len);
        let spread = config.home_spread;

        for _ in 0..count {
            let h = Vec3::new(
                bell_f32(rng_state) * spread.x,
                bell_f32(rng_state) * spread.y,
                bell_f32(rng_state) * spread.z,
            );
            home.extend_from_slice(&h.to_array());

            let tint = next_index(rng_state, PARTICLE_PALETTE.len());
            let brightness = range_f32(rng_state, config.brightness_min, config.brightness_max);
            colors.extend_from_slice(&particle_tint(tint, brightness).to_array());
        }

        Ok(Self {
            count,
            positions: home.clone(),
            velocities: vec![0.0; len],
            home,
            colors,
        })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.count
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Split borrow for the integrator: (positions, velocities, home).
    #[inline]
    pub(crate) fn columns_mut(&mut self) -> (&mut [f32], &mut [f32], &[f32]) {
        (&mut self.positions, &mut self.velocities, &self.home)
    }

    /// Split borrow for impulses: (positions, velocities).
    #[inline]
    pub(crate) fn kinematics_mut(&mut self) -> (&[f32], &mut [f32]) {
        (&self.positions, &mut self.velocities)
    }
}
