use super::{direct_lighting, Integrator, IntegratorRay, RadianceResult, RayType};
use crate::{
    hit::Hit,
    math::{Ray, Vec4},
    scene::Scene,
};

/// Upper bound for the number of shaded bounces per ray
pub const MAX_DEPTH: u32 = 100;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Params {
    /// Number of shaded hits, zero gives only the background and emission
    pub max_depth: u32,
}

impl Default for Params {
    fn default() -> Self {
        Self { max_depth: 3 }
    }
}

/// Mirror-reflection tracer that unrolls the recursion into per-bounce arrays
pub struct Whitted {
    max_depth: u32,
}

impl Whitted {
    pub fn new(params: Params) -> Self {
        Self {
            max_depth: params.max_depth.min(MAX_DEPTH),
        }
    }

    pub fn max_depth(&self) -> u32 {
        self.max_depth
    }

    fn trace(
        &self,
        ray: Ray<f32>,
        scene: &Scene,
        mut rays: Option<&mut Vec<IntegratorRay>>,
    ) -> RadianceResult {
        let material = scene.material();
        let mut shading = [Vec4::zeros(); MAX_DEPTH as usize];
        let mut reflectivity = [Vec4::zeros(); MAX_DEPTH as usize];

        let mut ray = ray;
        let mut hit = scene.intersect(&ray);
        let mut ray_count = 1;
        if let Some(rays) = rays.as_deref_mut() {
            rays.push(IntegratorRay {
                ray: clipped(ray, hit),
                ray_type: RayType::Direct,
            });
        }

        let mut emission = material.background;
        if hit.is_some() {
            emission += material.emission;
        }

        let mut populated = 0;
        while populated < self.max_depth as usize {
            let Hit { t, object, n } = match hit {
                Some(h) => h,
                None => break,
            };

            let p = ray.point(t);
            shading[populated] = direct_lighting(scene, p, n, &scene.objects()[object], ray.t_max);
            reflectivity[populated] = material.reflectivity;
            ray_count += scene.lights().len();
            populated += 1;

            if let Some(rays) = rays.as_deref_mut() {
                rays.extend(
                    scene
                        .lights()
                        .iter()
                        .filter_map(|l| l.sample_li(p, ray.t_max))
                        .map(|sample| IntegratorRay {
                            ray: sample.vis.ray(),
                            ray_type: RayType::Shadow,
                        }),
                );
            }

            if populated < self.max_depth as usize {
                ray = ray.reflected(t, n);
                hit = scene.intersect(&ray);
                ray_count += 1;
                if let Some(rays) = rays.as_deref_mut() {
                    rays.push(IntegratorRay {
                        ray: clipped(ray, hit),
                        ray_type: RayType::Reflection,
                    });
                }
            }
        }

        let reflected = fold_bounces(&shading[..populated], &reflectivity[..populated]);

        RadianceResult {
            li: reflected + emission,
            ray_scene_intersections: ray_count,
            bounces: populated as u32,
        }
    }
}

impl Integrator for Whitted {
    fn li(&self, ray: Ray<f32>, scene: &Scene) -> RadianceResult {
        self.trace(ray, scene, None)
    }

    fn li_debug(
        &self,
        ray: Ray<f32>,
        scene: &Scene,
        rays: &mut Vec<IntegratorRay>,
    ) -> RadianceResult {
        self.trace(ray, scene, Some(rays))
    }
}

/// Folds per-bounce shading back to front as `s[k] + r[k] * acc`.
///
/// Equals the recursion `s[0] + r[0] * (s[1] + r[1] * (...))`.
pub fn fold_bounces(shading: &[Vec4<f32>], reflectivity: &[Vec4<f32>]) -> Vec4<f32> {
    debug_assert!(shading.len() == reflectivity.len());
    shading
        .iter()
        .zip(reflectivity)
        .rev()
        .fold(Vec4::zeros(), |acc, (&s, &r)| s + r * acc)
}

// Shortens debug rays to the hit so they draw nicely
fn clipped(ray: Ray<f32>, hit: Option<Hit>) -> Ray<f32> {
    match hit {
        Some(Hit { t, .. }) => Ray::new(ray.o, ray.d, t),
        None => ray,
    }
}
