use glam::Vec3;

use super::ParticleStore;

impl ParticleStore {
    // === Column views ===
    #[inline]
    pub fn positions(&self) -> &[f32] {
        &self.positions
    }

    #[inline]
    pub fn velocities(&self) -> &[f32] {
        &self.velocities
    }

    #[inline]
    pub fn home(&self) -> &[f32] {
        &self.home
    }

    #[inline]
    pub fn colors(&self) -> &[f32] {
        &self.colors
    }

    // === Per-particle access ===
    #[inline]
    pub fn position_at(&self, i: usize) -> Vec3 {
        Vec3::from_slice(&self.positions[i * 3..i * 3 + 3])
    }

    #[inline]
    pub fn velocity_at(&self, i: usize) -> Vec3 {
        Vec3::from_slice(&self.velocities[i * 3..i * 3 + 3])
    }

    #[inline]
    pub fn home_at(&self, i: usize) -> Vec3 {
        Vec3::from_slice(&self.home[i * 3..i * 3 + 3])
    }

    #[inline]
    pub fn color_at(&self, i: usize) -> Vec3 {
        Vec3::from_slice(&self.colors[i * 3..i * 3 + 3])
    }

    #[inline]
    pub fn set_position(&mut self, i: usize, p: Vec3) {
        p.write_to_slice(&mut self.positions[i * 3..i * 3 + 3]);
    }

    #[inline]
    pub fn set_velocity(&mut self, i: usize, v: Vec3) {
        v.write_to_slice(&mut self.velocities[i * 3..i * 3 + 3]);
    }

    // === Get raw pointers for JS interop ===
    pub fn positions_ptr(&self) -> *const f32 {
        self.positions.as_ptr()
    }

    pub fn colors_ptr(&self) -> *const f32 {
        self.colors.as_ptr()
    }

    pub fn home_ptr(&self) -> *const f32 {
        self.home.as_ptr()
    }

    /// Column length in f32 elements (3 per particle)
    pub fn column_len(&self) -> usize {
        self.count * 3
    }
}
