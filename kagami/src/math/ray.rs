use approx::{AbsDiffEq, RelativeEq};

use super::{common::FloatValueType, vector::Vec3};

// Based on Physically Based Rendering 3rd ed.
// http://www.pbr-book.org/3ed-2018/Geometry_and_Transformations/Rays.html

#[derive(Copy, PartialEq, Clone, Debug)]
pub struct Ray<T>
where
    T: FloatValueType,
{
    /// Origin
    pub o: Vec3<T>,
    /// Direction, not necessarily normalized
    pub d: Vec3<T>,
    /// Hits at or beyond this distance are ignored
    pub t_max: T,
}

impl<T> Ray<T>
where
    T: FloatValueType,
{
    /// Creates a new `Ray`.
    pub fn new(o: Vec3<T>, d: Vec3<T>, t_max: T) -> Self {
        let ret = Self { o, d, t_max };
        debug_assert!(!ret.has_nans());
        ret
    }

    /// Checks if any of the members in this `Ray` contain NaNs.
    pub fn has_nans(&self) -> bool {
        self.o.has_nans() || self.d.has_nans() || self.t_max.is_nan()
    }

    /// Finds the point on this `Ray` at distance `t`.
    pub fn point(&self, t: T) -> Vec3<T> {
        self.o + self.d * t
    }

    /// Returns this `Ray` mirrored about `n` at distance `t`.
    ///
    /// The new direction is `d - 2(d.n)n`, normalized. `n` is used as is so a non-unit
    /// normal scales the reflected component.
    pub fn reflected(&self, t: T, n: Vec3<T>) -> Self {
        let two = T::one() + T::one();
        let d = (self.d - n * (two * self.d.dot(n))).normalized();
        Self::new(self.point(t), d, self.t_max)
    }
}

impl<T> AbsDiffEq for Ray<T>
where
    T: FloatValueType + AbsDiffEq<Epsilon = T>,
{
    type Epsilon = T;

    fn default_epsilon() -> T {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: T) -> bool {
        self.o.abs_diff_eq(&other.o, epsilon)
            && self.d.abs_diff_eq(&other.d, epsilon)
            && self.t_max.abs_diff_eq(&other.t_max, epsilon)
    }
}

impl<T> RelativeEq for Ray<T>
where
    T: FloatValueType + RelativeEq + AbsDiffEq<Epsilon = T>,
{
    fn default_max_relative() -> T {
        T::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: T, max_relative: T) -> bool {
        self.o.relative_eq(&other.o, epsilon, max_relative)
            && self.d.relative_eq(&other.d, epsilon, max_relative)
            && self.t_max.relative_eq(&other.t_max, epsilon, max_relative)
    }
}
