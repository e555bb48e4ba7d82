use super::{Shape, ShapeHit};
use crate::math::{Ray, Vec3};

/// A sphere object.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Sphere {
    center: Vec3<f32>,
    radius: f32,
}

impl Sphere {
    /// Creates a new `Sphere`. The radius is validated when the sphere is added to a scene.
    pub fn new(center: Vec3<f32>, radius: f32) -> Self {
        Self { center, radius }
    }

    pub fn center(&self) -> Vec3<f32> {
        self.center
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }
}

impl Shape for Sphere {
    fn intersect(&self, ray: &Ray<f32>) -> Option<ShapeHit> {
        // Half-b form of the quadratic, assumes a normalized direction
        let oc = ray.o - self.center;
        let b = oc.dot(ray.d);
        let c = oc.dot(oc) - self.radius * self.radius;
        let h = b * b - c;
        if h < 0.0 {
            return None;
        }

        // Near root only, a ray starting inside reports the hit behind it
        let t = -b - h.sqrt();

        // Also divided by its squared norm, which is a no-op only for points exactly on the surface
        let n = (ray.point(t) - self.center) * (1.0 / self.radius);
        let n = n / n.dot(n);

        Some(ShapeHit { t, n })
    }
}
