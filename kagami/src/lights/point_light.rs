use super::LightSample;
use crate::{
    math::{Vec3, Vec4},
    visibility::VisibilityTester,
};

/// A point light without falloff
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PointLight {
    p: Vec3<f32>,
    color: Vec4<f32>,
}

impl PointLight {
    /// Creates a new `PointLight` at `p` with the given rgba `color`.
    pub fn new(p: Vec3<f32>, color: Vec4<f32>) -> Self {
        Self { p, color }
    }

    pub fn position(&self) -> Vec3<f32> {
        self.p
    }

    pub fn color(&self) -> Vec4<f32> {
        self.color
    }

    /// Returns a [LightSample] from `p` to this `PointLight`, testing visibility up to `t_max`.
    ///
    /// A light at `p` has no direction toward it and contributes nothing.
    pub fn sample_li(&self, p: Vec3<f32>, t_max: f32) -> Option<LightSample> {
        let to_light = self.p - p;
        if to_light.len_sqr() == 0.0 {
            return None;
        }

        Some(LightSample {
            l: to_light.normalized(),
            li: self.color,
            vis: VisibilityTester::new(p, self.p, t_max),
        })
    }
}
