mod point_light;

pub use point_light::PointLight;

use crate::{
    math::{Vec3, Vec4},
    visibility::VisibilityTester,
};

// Based on Physically Based Rendering 3rd ed.
// http://www.pbr-book.org/3ed-2018/Light_Sources/Light_Interface.html#Light

/// Sample from a light source for visibility testing and shading
pub struct LightSample {
    /// Normalized direction toward the light
    pub l: Vec3<f32>,
    /// Incoming light
    pub li: Vec4<f32>,
    pub vis: VisibilityTester,
}
