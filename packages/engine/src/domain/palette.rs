//! Fixed color palettes (linear RGB, 0..1).

use glam::Vec3;

/// Particle tints; each particle picks one and scales it by a random brightness.
pub const PARTICLE_PALETTE: [Vec3; 7] = [
    Vec3::new(0.55, 0.70, 1.00), // ice blue
    Vec3::new(0.75, 0.55, 1.00), // lavender
    Vec3::new(1.00, 0.55, 0.80), // pink
    Vec3::new(0.45, 0.95, 0.95), // cyan
    Vec3::new(1.00, 0.85, 0.55), // warm gold
    Vec3::new(0.95, 0.95, 1.00), // white
    Vec3::new(0.50, 0.60, 0.95), // periwinkle
];

/// Well indicator colors, handed out round-robin.
pub const WELL_PALETTE: [Vec3; 5] = [
    Vec3::new(0.40, 0.75, 1.00),
    Vec3::new(0.85, 0.45, 1.00),
    Vec3::new(1.00, 0.45, 0.60),
    Vec3::new(0.45, 1.00, 0.75),
    Vec3::new(1.00, 0.80, 0.35),
];

#[inline]
pub fn particle_tint(index: usize, brightness: f32) -> Vec3 {
    PARTICLE_PALETTE[index % PARTICLE_PALETTE.len()] * brightness
}

#[inline]
pub fn well_color(slot: usize) -> Vec3 {
    WELL_PALETTE[slot % WELL_PALETTE.len()]
}
