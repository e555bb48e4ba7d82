mod common;
mod matrix;
mod ray;
pub mod transforms;
mod vector;

pub use common::{sign, step, FloatValueType, ValueType};
pub use matrix::Matrix4x4;
pub use ray::Ray;
pub use vector::{vec2, vec3, vec4, Vec2, Vec3, Vec4};
