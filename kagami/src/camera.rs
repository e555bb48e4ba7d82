use crate::math::{
    transforms::{look_at, perspective},
    vec3, Matrix4x4, Ray, Vec2, Vec3,
};

/// User-facing camera values, independent of the output resolution
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CameraParameters {
    pub eye: Vec3<f32>,
    pub target: Vec3<f32>,
    pub up: Vec3<f32>,
    /// Vertical field of view in radians
    pub fov_y: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for CameraParameters {
    fn default() -> Self {
        Self {
            eye: vec3(0.0, 0.0, 1.0),
            target: vec3(0.0, 0.0, 0.0),
            up: vec3(0.0, 1.0, 0.0),
            fov_y: std::f32::consts::FRAC_PI_4,
            near: 0.1,
            far: 1000.0,
        }
    }
}

impl CameraParameters {
    /// Checks that a valid view-projection can be built from these parameters.
    pub fn validate(&self) -> Result<(), String> {
        if self.eye.has_nans() || self.target.has_nans() || self.up.has_nans() {
            return Err("NaN in camera vectors".into());
        }
        if !(self.fov_y > 0.0 && self.fov_y < std::f32::consts::PI) {
            return Err(format!("fov_y {} is not in (0, pi)", self.fov_y));
        }
        if !(self.near > 0.0 && self.far > self.near) {
            return Err(format!(
                "Expected 0 < near < far, got near {} far {}",
                self.near, self.far
            ));
        }

        let forward = self.target - self.eye;
        if forward.len_sqr() == 0.0 {
            return Err("Eye and target are the same point".into());
        }
        if forward.cross(self.up).len_sqr() == 0.0 {
            return Err("Up is parallel to the view direction".into());
        }

        Ok(())
    }
}

/// A pinhole camera that unprojects texels through its inverse view-projection
#[derive(Clone, Debug)]
pub struct Camera {
    eye: Vec3<f32>,
    inverse_view_projection: Matrix4x4<f32>,
    near: f32,
    far: f32,
}

impl Camera {
    /// Creates a new `Camera` for a film of resolution `res`.
    pub fn new(params: &CameraParameters, res: Vec2<u16>) -> Self {
        let aspect = (res.x as f32) / (res.y as f32);
        let view = look_at(params.eye, params.target, params.up);
        let projection = perspective(params.fov_y, aspect, params.near, params.far);
        let inverse_view_projection = (&projection * &view).inverted();

        Self {
            eye: params.eye,
            inverse_view_projection,
            near: params.near,
            far: params.far,
        }
    }

    pub fn eye(&self) -> Vec3<f32> {
        self.eye
    }

    pub fn far(&self) -> f32 {
        self.far
    }

    /// Creates the primary ray through `texel` of a `frame` sized grid.
    ///
    /// Texel (0, 0) is the bottom left corner of the image.
    pub fn ray(&self, texel: Vec2<u32>, frame: Vec2<u32>) -> Ray<f32> {
        let u = (texel.x as f32) / (frame.x as f32);
        let v = (texel.y as f32) / (frame.y as f32);
        let ndc_x = 2.0 * u - 1.0;
        let ndc_y = 2.0 * v - 1.0;

        // Clip space point at the far plane scaled so that the unprojected w vanishes
        let fd = self.far - self.near;
        let fs = self.far + self.near;
        let p_clip = vec3(ndc_x * fd, ndc_y * fd, fs).extend(fd);
        let d = (&self.inverse_view_projection * p_clip).xyz().normalized();

        Ray::new(self.eye, d, self.far)
    }
}
