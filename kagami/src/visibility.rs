use crate::{
    math::{Ray, Vec3},
    scene::Scene,
};

// Based on Physically Based Rendering 3rd ed.
// https://www.pbr-book.org/3ed-2018/Light_Sources/Light_Interface#VisibilityTesting

pub struct VisibilityTester {
    p: Vec3<f32>,
    light_p: Vec3<f32>,
    t_max: f32,
}

impl VisibilityTester {
    /// Creates a tester from `p` toward `light_p` that considers hits up to `t_max`.
    pub fn new(p: Vec3<f32>, light_p: Vec3<f32>, t_max: f32) -> Self {
        Self { p, light_p, t_max }
    }

    pub fn ray(&self) -> Ray<f32> {
        Ray::new(self.p, (self.light_p - self.p).normalized(), self.t_max)
    }

    /// Any hit along the ray counts as occlusion, including ones past the light itself.
    pub fn unoccluded(&self, scene: &Scene) -> bool {
        scene.intersect(&self.ray()).is_none()
    }
}
