//! Perspective camera and pointer rays

use gestura_core::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

/// A half-line with unit direction
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    /// Build a ray; the direction is normalized
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize(),
        }
    }

    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }

    /// Nearest non-negative hit distance against a sphere
    ///
    /// Works from the closest-approach point along the ray, so a distant
    /// origin does not cancel against the radius.
    pub fn intersect_sphere(&self, center: Vec3, radius: f32) -> Option<f32> {
        let oc = self.origin - center;
        let closest = -oc.dot(&self.direction);
        let perp = oc + self.direction * closest;
        let disc = radius * radius - perp.dot(&perp);
        if disc < 0.0 {
            return None;
        }
        let half_chord = disc.sqrt();
        let near = closest - half_chord;
        if near >= 0.0 {
            return Some(near);
        }
        // Origin inside the sphere
        let far = closest + half_chord;
        (far >= 0.0).then_some(far)
    }
}

/// Perspective camera looking at a fixed point
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Camera {
    pub position: Vec3,
    pub look_at: Vec3,
    pub up: Vec3,
    /// Vertical field of view in degrees
    pub fov_y_degrees: f32,
    /// Viewport width / height
    pub aspect: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, 40.0),
            look_at: Vec3::ZERO,
            up: Vec3::UP,
            fov_y_degrees: 45.0,
            aspect: 1.0,
        }
    }
}

impl Camera {
    pub fn with_aspect(mut self, aspect: f32) -> Self {
        self.aspect = aspect;
        self
    }

    /// Ray from the camera through a point in normalized device coordinates
    /// (`-1..1`, origin at the viewport center, +y up)
    pub fn ray_from_ndc(&self, ndc: Vec2) -> Ray {
        let forward = (self.look_at - self.position).normalize();
        let right = forward.cross(&self.up).normalize();
        let up = right.cross(&forward);

        let half_height = (self.fov_y_degrees.to_radians() * 0.5).tan();
        let half_width = half_height * self.aspect;

        let direction = forward + right * (ndc.x * half_width) + up * (ndc.y * half_height);
        Ray::new(self.position, direction)
    }
}
