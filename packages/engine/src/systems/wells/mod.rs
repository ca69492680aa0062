//! Wells - user-placed attractor markers
//!
//! Wells live in a small dense arena (at most `max_wells`) kept in creation
//! order, so hit-testing always favours the oldest overlapping well. Ids come
//! from a free-standing counter and are never reused.
//!
//! A well touches the particles only when collapsed (radial burst), unless the
//! opt-in `well_pull` is configured.

mod burst;
mod pull;
mod registry;

use glam::Vec3;

pub use burst::burst;
pub use pull::apply_pull;
pub use registry::{Collapse, WellRegistry};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Well {
    pub id: u32,
    /// Field-local position, fixed at creation
    pub position: Vec3,
    /// Seconds since creation
    pub age: f32,
    pub color: Vec3,
}

impl Well {
    /// `age / well_life`, clamped to [0, 1]
    #[inline]
    pub fn normalized_age(&self, well_life: f32) -> f32 {
        (self.age / well_life).clamp(0.0, 1.0)
    }

    /// Ramp-in strength: `age / well_ramp`, clamped to [0, 1]
    #[inline]
    pub fn ramp(&self, well_ramp: f32) -> f32 {
        (self.age / well_ramp).clamp(0.0, 1.0)
    }

    #[inline]
    pub fn captures(&self, point: Vec3, radius_sq: f32) -> bool {
        self.position.distance_squared(point) < radius_sq
    }
}
