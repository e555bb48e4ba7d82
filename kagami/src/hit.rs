use crate::math::Vec3;

/// Info of the closest surface hit along a ray
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Hit {
    /// Hit distance, pulled toward the ray origin by [HIT_BIAS]
    pub t: f32,
    /// Index of the hit object in the scene
    pub object: usize,
    /// Surface normal, not necessarily normalized
    pub n: Vec3<f32>,
}

/// Scale applied to hit distances so that rays spawned at the hit don't re-intersect the surface.
pub const HIT_BIAS: f32 = 0.99;
