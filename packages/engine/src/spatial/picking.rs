//! Picking geometry: camera rays and the billboard plane
//!
//! The host hands over the camera pose each click; the field owns no camera.
//! Rays are built the way a GL renderer would: unproject the pointer's NDC at
//! the near and far clip planes through the inverse view-projection.

use glam::{Mat4, Quat, Vec2, Vec3};

/// Rays closer to parallel than this never hit the plane.
const PARALLEL_EPSILON: f32 = 1e-6;

const DEFAULT_NEAR: f32 = 0.1;
const DEFAULT_FAR: f32 = 1000.0;

/// Camera pose at the moment of a click (world space).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraSample {
    pub position: Vec3,
    pub rotation: Quat,
    /// Vertical field of view in radians
    pub fov_y: f32,
    /// Viewport width / height
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl CameraSample {
    pub fn new(position: Vec3, rotation: Quat, fov_y: f32, aspect: f32) -> Self {
        Self {
            position,
            rotation,
            fov_y,
            aspect,
            near: DEFAULT_NEAR,
            far: DEFAULT_FAR,
        }
    }

    /// Camera at `eye` looking at `target` with +Y up.
    pub fn looking_at(eye: Vec3, target: Vec3, fov_y: f32, aspect: f32) -> Self {
        let view = Mat4::look_at_rh(eye, target, Vec3::Y);
        let (_, rotation, _) = view.inverse().to_scale_rotation_translation();
        Self::new(eye, rotation, fov_y, aspect)
    }

    pub fn view_proj(&self) -> Mat4 {
        let view = Mat4::from_rotation_translation(self.rotation, self.position).inverse();
        let proj = Mat4::perspective_rh_gl(self.fov_y, self.aspect, self.near, self.far);
        proj * view
    }

    /// Ray from the camera through `ndc` (x, y in [-1, 1], +y up).
    pub fn ray_through(&self, ndc: Vec2) -> Option<Ray> {
        let inv_vp = self.view_proj().inverse();
        let near_point = inv_vp.project_point3(Vec3::new(ndc.x, ndc.y, -1.0));
        let far_point = inv_vp.project_point3(Vec3::new(ndc.x, ndc.y, 1.0));
        let direction = (far_point - near_point).try_normalize()?;
        if !self.position.is_finite() {
            return None;
        }
        Some(Ray {
            origin: self.position,
            direction,
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    /// Unit length
    pub direction: Vec3,
}

impl Ray {
    #[inline]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }

    /// Forward hit with `plane`; `None` when parallel or behind the origin.
    pub fn intersect_plane(&self, plane: &Plane) -> Option<Vec3> {
        let denom = plane.normal.dot(self.direction);
        if denom.abs() < PARALLEL_EPSILON {
            return None;
        }
        let t = -plane.distance_to(self.origin) / denom;
        if !t.is_finite() || t < 0.0 {
            return None;
        }
        Some(self.at(t))
    }
}

/// `normal . p + constant = 0`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Plane {
    pub normal: Vec3,
    pub constant: f32,
}

impl Plane {
    pub fn from_normal_and_point(normal: Vec3, point: Vec3) -> Option<Self> {
        let normal = normal.try_normalize()?;
        Some(Self {
            normal,
            constant: -normal.dot(point),
        })
    }

    /// Plane through `origin` facing the camera, whatever the orbit angle.
    /// `None` when the camera sits on the origin.
    pub fn billboard(origin: Vec3, camera_position: Vec3) -> Option<Self> {
        Self::from_normal_and_point(camera_position - origin, origin)
    }

    #[inline]
    pub fn distance_to(&self, point: Vec3) -> f32 {
        self.normal.dot(point) + self.constant
    }
}
