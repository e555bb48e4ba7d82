mod aa_box;
mod sphere;

pub use aa_box::AaBox;
pub use sphere::Sphere;

use crate::math::{Ray, Vec3};

/// Raw intersection of a [Ray] with a single [Shape].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ShapeHit {
    /// Distance along the ray, may be negative if the shape is behind the origin
    pub t: f32,
    /// Surface normal at the hit, not necessarily normalized
    pub n: Vec3<f32>,
}

pub trait Shape {
    /// Intersects [Ray] with this shape, returning the entry distance and normal.
    ///
    /// `t_max` of the ray is not considered, it's up to the caller to accept or reject the hit.
    fn intersect(&self, ray: &Ray<f32>) -> Option<ShapeHit>;
}

/// The primitive kinds a scene object can be.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Primitive {
    Sphere(Sphere),
    Box(AaBox),
}

impl Shape for Primitive {
    #[inline]
    fn intersect(&self, ray: &Ray<f32>) -> Option<ShapeHit> {
        match self {
            Primitive::Sphere(s) => s.intersect(ray),
            Primitive::Box(b) => b.intersect(ray),
        }
    }
}
