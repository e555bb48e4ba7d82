use crate::{
    camera::Camera,
    integrators::{Integrator, RadianceResult},
    math::{Vec2, Vec4},
    scene::Scene,
};

/// Output of a single kernel invocation
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PixelResult {
    /// Radiance clamped to `[0, 1]`
    pub color: Vec4<f32>,
    pub ray_scene_intersections: usize,
}

/// Evaluates the pixel at `texel` of a `frame` sized image.
///
/// Returns `None` for invocations outside the frame.
pub fn render_pixel(
    texel: Vec2<u32>,
    frame: Vec2<u32>,
    camera: &Camera,
    scene: &Scene,
    integrator: &dyn Integrator,
) -> Option<PixelResult> {
    if texel.x >= frame.x || texel.y >= frame.y {
        return None;
    }

    let ray = camera.ray(texel, frame);
    let RadianceResult {
        li,
        ray_scene_intersections,
        ..
    } = integrator.li(ray, scene);

    Some(PixelResult {
        color: li.clamped(0.0, 1.0),
        ray_scene_intersections,
    })
}
