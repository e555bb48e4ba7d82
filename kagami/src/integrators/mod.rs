mod direct_lighting;
mod whitted;

pub use direct_lighting::direct_lighting;
pub use whitted::{fold_bounces, Params as WhittedParams, Whitted, MAX_DEPTH};

use crate::{
    math::{Ray, Vec4},
    scene::Scene,
};

pub struct RadianceResult {
    pub li: Vec4<f32>,
    /// Number of rays, primary, reflected and shadow, that were tested against the scene
    pub ray_scene_intersections: usize,
    /// Number of surface hits that were shaded
    pub bounces: u32,
}

impl Default for RadianceResult {
    fn default() -> Self {
        Self {
            li: Vec4::zeros(),
            ray_scene_intersections: 0,
            bounces: 0,
        }
    }
}

#[derive(Debug)]
pub struct IntegratorRay {
    pub ray: Ray<f32>,
    pub ray_type: RayType,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum RayType {
    Direct,
    Reflection,
    Shadow,
}

// Public interface for scene integrators.
pub trait Integrator {
    /// Evaluates the incoming radiance along `ray`. Also returns the number of rays intersected with `scene`.
    fn li(&self, ray: Ray<f32>, scene: &Scene) -> RadianceResult;

    /// Should be identical with li() but also collects the traced rays.
    fn li_debug(
        &self,
        _ray: Ray<f32>,
        _scene: &Scene,
        _rays: &mut Vec<IntegratorRay>,
    ) -> RadianceResult {
        RadianceResult::default()
    }
}
