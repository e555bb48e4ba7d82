use super::{common::FloatValueType, matrix::Matrix4x4, vector::Vec3};

// These follow the OpenGL conventions: right-handed view space looking down -z and
// clip space z in [-w, w].

/// Creates a world-to-camera matrix with the camera at `pos` looking at `target` with `up` as the up vector.
pub fn look_at<T>(pos: Vec3<T>, target: Vec3<T>, up: Vec3<T>) -> Matrix4x4<T>
where
    T: FloatValueType,
{
    let f = (target - pos).normalized();
    let s = f.cross(up).normalized();
    let u = s.cross(f);

    Matrix4x4::new([
        [s.x, s.y, s.z, -s.dot(pos)],
        [u.x, u.y, u.z, -u.dot(pos)],
        [-f.x, -f.y, -f.z, f.dot(pos)],
        [T::zero(), T::zero(), T::zero(), T::one()],
    ])
}

/// Creates a perspective projection matrix. `fov_y` is the vertical field of view in radians.
pub fn perspective<T>(fov_y: T, aspect: T, near: T, far: T) -> Matrix4x4<T>
where
    T: FloatValueType,
{
    let two = T::one() + T::one();
    let tan_half = (fov_y / two).tan();
    let depth = far - near;

    let mut m = Matrix4x4::zeros();
    m.m[0][0] = T::one() / (aspect * tan_half);
    m.m[1][1] = T::one() / tan_half;
    m.m[2][2] = -(far + near) / depth;
    m.m[2][3] = -(two * far * near) / depth;
    m.m[3][2] = -T::one();
    m
}
