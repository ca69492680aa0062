//! Interaction - turn a pointer click into a well collapse or a new well
//!
//! 1. Billboard plane through the field origin, facing the camera
//! 2. Ray from the camera through the pointer NDC, hit the plane
//! 3. Hit point -> field-local coordinates (subtract `world_offset`)
//! 4. Collapse the well under the point, otherwise create one
//!
//! Every outcome is ordinary; nothing here is an error.

use glam::{Vec2, Vec3};

use crate::domain::FieldConfig;
use crate::spatial::{CameraSample, ParticleStore, Plane};
use crate::systems::wells::WellRegistry;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Interaction {
    /// A new well was placed.
    Created { id: u32 },
    /// An existing well was collapsed and burst.
    Collapsed { id: u32 },
    /// Empty space, but the registry is full.
    AtCapacity,
    /// The pointer ray never met the plane.
    Missed,
}

impl Interaction {
    /// Numeric tag for the JS side: 0 missed, 1 created, 2 collapsed, 3 at capacity.
    pub fn kind_code(&self) -> u8 {
        match self {
            Interaction::Missed => 0,
            Interaction::Created { .. } => 1,
            Interaction::Collapsed { .. } => 2,
            Interaction::AtCapacity => 3,
        }
    }

    pub fn well_id(&self) -> Option<u32> {
        match self {
            Interaction::Created { id } | Interaction::Collapsed { id } => Some(*id),
            _ => None,
        }
    }
}

/// Steps 1-3: camera + pointer -> field-local point.
pub fn resolve_point(camera: &CameraSample, pointer_ndc: Vec2, world_offset: Vec3) -> Option<Vec3> {
    let plane = Plane::billboard(world_offset, camera.position)?;
    let ray = camera.ray_through(pointer_ndc)?;
    let hit = ray.intersect_plane(&plane)?;
    Some(hit - world_offset)
}

/// Step 4: collapse-or-create at a field-local point. A non-finite point
/// touches nothing and reports `Missed`.
pub fn press(
    wells: &mut WellRegistry,
    store: &mut ParticleStore,
    config: &FieldConfig,
    point: Vec3,
) -> Interaction {
    if !point.is_finite() {
        return Interaction::Missed;
    }
    if let Some(collapse) = wells.try_collapse_at(point, store, config) {
        return Interaction::Collapsed { id: collapse.well.id };
    }
    match wells.create(point) {
        Some(id) => Interaction::Created { id },
        None => Interaction::AtCapacity,
    }
}

/// Full click: resolve then press. A missed ray leaves everything untouched.
pub fn click(
    wells: &mut WellRegistry,
    store: &mut ParticleStore,
    config: &FieldConfig,
    camera: &CameraSample,
    pointer_ndc: Vec2,
) -> Interaction {
    match resolve_point(camera, pointer_ndc, config.world_offset) {
        Some(point) => press(wells, store, config, point),
        None => Interaction::Missed,
    }
}
