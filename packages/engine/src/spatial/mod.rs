//! Spatial data: the particle columns and the picking geometry.

pub mod particles;
pub mod picking;

pub use particles::ParticleStore;
pub use picking::{CameraSample, Plane, Ray};
