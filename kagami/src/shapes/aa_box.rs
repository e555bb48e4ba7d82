use super::{Shape, ShapeHit};
use crate::math::{sign, step, Ray, Vec3};

/// An axis-aligned box.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct AaBox {
    min: Vec3<f32>,
    max: Vec3<f32>,
}

impl AaBox {
    /// Creates a new `AaBox`. `min` should be component-wise at most `max`, [Scene](crate::scene::Scene) rejects boxes that aren't.
    pub fn new(min: Vec3<f32>, max: Vec3<f32>) -> Self {
        Self { min, max }
    }

    pub fn min(&self) -> Vec3<f32> {
        self.min
    }

    pub fn max(&self) -> Vec3<f32> {
        self.max
    }
}

fn sign3(v: Vec3<f32>) -> Vec3<f32> {
    Vec3 {
        x: sign(v.x),
        y: sign(v.y),
        z: sign(v.z),
    }
}

fn step3(edge: Vec3<f32>, v: Vec3<f32>) -> Vec3<f32> {
    Vec3 {
        x: step(edge.x, v.x),
        y: step(edge.y, v.y),
        z: step(edge.z, v.z),
    }
}

impl Shape for AaBox {
    fn intersect(&self, ray: &Ray<f32>) -> Option<ShapeHit> {
        // Slab test. Zero direction components divide into infinities, or NaNs when the
        // origin lies on a slab plane, and those fall out of the comparisons as misses.
        let t_min = (self.min - ray.o) / ray.d;
        let t_max = (self.max - ray.o) / ray.d;
        let t1 = t_min.min(t_max);
        let t2 = t_min.max(t_max);

        let t_near = t1.x.max(t1.y).max(t1.z);
        let t_far = t2.x.min(t2.y).min(t2.z);

        // Normal is non-zero on the axes that realize t_near, facing against the ray
        let n = -sign3(ray.d)
            * step3(t1.permuted(1, 2, 0), t1)
            * step3(t1.permuted(2, 0, 1), t1);

        if t_near > t_far {
            None
        } else {
            Some(ShapeHit { t: t_near, n })
        }
    }
}
