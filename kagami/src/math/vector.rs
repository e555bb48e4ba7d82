use approx::{AbsDiffEq, RelativeEq};
use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

use super::common::{FloatValueType, ValueType};

// Based on Physically Based Rendering 3rd ed.
// http://www.pbr-book.org/3ed-2018/Geometry_and_Transformations/Vectors.html

/// A two-dimensional vector.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Vec2<T>
where
    T: ValueType,
{
    /// The x component of the vector.
    pub x: T,
    /// The y component of the vector.
    pub y: T,
}

/// A three-dimensional vector.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Vec3<T>
where
    T: ValueType,
{
    /// The x component of the vector.
    pub x: T,
    /// The y component of the vector.
    pub y: T,
    /// The z component of the vector.
    pub z: T,
}

/// A four-dimensional vector.
///
/// Also used for rgba colors, where the component-wise product acts as light modulation.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Vec4<T>
where
    T: ValueType,
{
    /// The x component of the vector.
    pub x: T,
    /// The y component of the vector.
    pub y: T,
    /// The z component of the vector.
    pub z: T,
    /// The w component of the vector.
    pub w: T,
}

macro_rules! impl_vec {
    ( $( $vec_type:ident
         [ $component0:ident $( $component:ident )* ]
         $shorthand:ident
       ),+
    ) => {
        $(
            impl<T> $vec_type<T>
            where
                T: ValueType,
            {
                /// Constructs a new vector.
                ///
                /// Has a debug assert that checks for NaNs.
                #[inline]
                pub fn new($component0: T $(, $component: T)*) -> Self {
                    let v = Self{ $component0 $(, $component)* };
                    debug_assert!(!v.has_nans());
                    v
                }

                /// Constructs a new vector of 0s.
                #[inline]
                pub fn zeros() -> Self {
                    Self::from(T::zero())
                }

                /// Returns `true` if any component is NaN.
                #[inline]
                #[allow(clippy::eq_op)]
                pub fn has_nans(&self) -> bool {
                    // Not all T have is_nan()
                    (self.$component0 != self.$component0) $(|| (self.$component != self.$component))*
                }

                /// Returns the dot product of the two vectors.
                #[inline]
                pub fn dot(&self, other: Self) -> T {
                    self.$component0 * other.$component0 $(+ self.$component * other.$component)*
                }

                /// Returns the vector's squared length.
                #[inline]
                pub fn len_sqr(&self) -> T {
                    self.dot(*self)
                }

                /// Returns the component-wise minimum of the two vectors.
                #[inline]
                pub fn min(&self, other: Self) -> Self {
                    Self {
                        $component0: self.$component0.mini(other.$component0),
                        $($component: self.$component.mini(other.$component),)*
                    }
                }

                /// Returns the component-wise maximum of the two vectors.
                #[inline]
                pub fn max(&self, other: Self) -> Self {
                    Self {
                        $component0: self.$component0.maxi(other.$component0),
                        $($component: self.$component.maxi(other.$component),)*
                    }
                }

                /// Returns the value of the minimum component.
                #[inline]
                pub fn min_comp(&self) -> T {
                    self.$component0 $(.mini(self.$component))*
                }

                /// Returns the value of the maximum component.
                #[inline]
                pub fn max_comp(&self) -> T {
                    self.$component0 $(.maxi(self.$component))*
                }

                /// Returns the vector with every component clamped to `[lo, hi]`.
                #[inline]
                pub fn clamped(&self, lo: T, hi: T) -> Self {
                    self.max(Self::from(lo)).min(Self::from(hi))
                }
            }

            impl<T> $vec_type<T>
            where
                T: FloatValueType,
            {
                /// Returns the vector's length.
                #[inline]
                pub fn len(&self) -> T {
                    self.len_sqr().sqrt()
                }

                /// Returns the normalized vector.
                #[inline]
                pub fn normalized(&self) -> Self {
                    *self / self.len()
                }
            }

            /// Shorthand constructor
            #[inline]
            pub fn $shorthand<T>($component0: T $(, $component: T)*) -> $vec_type<T>
            where
                T: ValueType
            {
                // Use new() to catch NANs
                $vec_type::new($component0 $(, $component)*)
            }

            impl<T> From<T> for $vec_type<T>
            where
                T: ValueType,
            {
                fn from(v: T) -> Self {
                    Self {
                        $component0: v,
                        $($component: v,)*
                    }
                }
            }

            impl<T> Index<usize> for $vec_type<T>
            where
                T: ValueType,
            {
                type Output = T;

                fn index(&self, i: usize) -> &T {
                    [&self.$component0 $(, &self.$component)*][i]
                }
            }

            impl<T> IndexMut<usize> for $vec_type<T>
            where
                T: ValueType,
            {
                fn index_mut(&mut self, i: usize) -> &mut T {
                    let $vec_type { $component0 $(, $component)* } = self;
                    [$component0 $(, $component)*].into_iter().nth(i).expect("Vector index out of bounds")
                }
            }

            impl<T> Neg for $vec_type<T>
            where
                T: ValueType + Neg<Output = T>,
            {
                type Output = Self;

                fn neg(self) -> Self {
                    Self {
                        $component0: -self.$component0,
                        $($component: -self.$component,)*
                    }
                }
            }

            impl<T> Add for $vec_type<T>
            where
                T: ValueType,
            {
                type Output = Self;

                fn add(self, other: Self) -> Self {
                    Self {
                        $component0: self.$component0 + other.$component0,
                        $($component: self.$component + other.$component,)*
                    }
                }
            }

            impl<T> Sub for $vec_type<T>
            where
                T: ValueType,
            {
                type Output = Self;

                fn sub(self, other: Self) -> Self {
                    Self {
                        $component0: self.$component0 - other.$component0,
                        $($component: self.$component - other.$component,)*
                    }
                }
            }

            /// Component-wise product.
            impl<T> Mul for $vec_type<T>
            where
                T: ValueType,
            {
                type Output = Self;

                fn mul(self, other: Self) -> Self {
                    Self {
                        $component0: self.$component0 * other.$component0,
                        $($component: self.$component * other.$component,)*
                    }
                }
            }

            /// Component-wise quotient.
            impl<T> Div for $vec_type<T>
            where
                T: ValueType,
            {
                type Output = Self;

                fn div(self, other: Self) -> Self {
                    Self {
                        $component0: self.$component0 / other.$component0,
                        $($component: self.$component / other.$component,)*
                    }
                }
            }

            impl<T> Mul<T> for $vec_type<T>
            where
                T: ValueType,
            {
                type Output = Self;

                fn mul(self, s: T) -> Self {
                    Self {
                        $component0: self.$component0 * s,
                        $($component: self.$component * s,)*
                    }
                }
            }

            impl<T> Div<T> for $vec_type<T>
            where
                T: ValueType,
            {
                type Output = Self;

                fn div(self, s: T) -> Self {
                    Self {
                        $component0: self.$component0 / s,
                        $($component: self.$component / s,)*
                    }
                }
            }

            impl<T> AddAssign for $vec_type<T>
            where
                T: ValueType,
            {
                fn add_assign(&mut self, other: Self) {
                    self.$component0 += other.$component0;
                    $(self.$component += other.$component;)*
                }
            }

            impl<T> SubAssign for $vec_type<T>
            where
                T: ValueType,
            {
                fn sub_assign(&mut self, other: Self) {
                    self.$component0 -= other.$component0;
                    $(self.$component -= other.$component;)*
                }
            }

            impl<T> MulAssign<T> for $vec_type<T>
            where
                T: ValueType,
            {
                fn mul_assign(&mut self, s: T) {
                    self.$component0 *= s;
                    $(self.$component *= s;)*
                }
            }

            impl<T> DivAssign<T> for $vec_type<T>
            where
                T: ValueType,
            {
                fn div_assign(&mut self, s: T) {
                    self.$component0 /= s;
                    $(self.$component /= s;)*
                }
            }

            impl<T> AbsDiffEq for $vec_type<T>
            where
                T: ValueType + AbsDiffEq<Epsilon = T>,
            {
                type Epsilon = T;

                fn default_epsilon() -> T {
                    T::default_epsilon()
                }

                fn abs_diff_eq(&self, other: &Self, epsilon: T) -> bool {
                    self.$component0.abs_diff_eq(&other.$component0, epsilon)
                        $(&& self.$component.abs_diff_eq(&other.$component, epsilon))*
                }
            }

            impl<T> RelativeEq for $vec_type<T>
            where
                T: ValueType + RelativeEq + AbsDiffEq<Epsilon = T>,
            {
                fn default_max_relative() -> T {
                    T::default_max_relative()
                }

                fn relative_eq(&self, other: &Self, epsilon: T, max_relative: T) -> bool {
                    self.$component0.relative_eq(&other.$component0, epsilon, max_relative)
                        $(&& self.$component.relative_eq(&other.$component, epsilon, max_relative))*
                }
            }
        )*
    };
}
impl<T> From<[T; 2]> for Vec2<T>
where
    T: ValueType,
{
    fn from([x, y]: [T; 2]) -> Self {
        Self::new(x, y)
    }
}

impl<T> From<[T; 3]> for Vec3<T>
where
    T: ValueType,
{
    fn from([x, y, z]: [T; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl<T> From<[T; 4]> for Vec4<T>
where
    T: ValueType,
{
    fn from([x, y, z, w]: [T; 4]) -> Self {
        Self::new(x, y, z, w)
    }
}

impl_vec!(
    Vec2 [x y] vec2,
    Vec3 [x y z] vec3,
    Vec4 [x y z w] vec4
);

impl<T> Vec3<T>
where
    T: ValueType,
{
    /// Returns the cross product of the two vectors.
    #[inline]
    pub fn cross(&self, other: Self) -> Self {
        Self {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }

    /// Returns the vector permutation defined by the indices.
    ///
    /// `v.permuted(1, 2, 0)` matches the `v.yzx` swizzle.
    #[inline]
    pub fn permuted(&self, x: usize, y: usize, z: usize) -> Self {
        Self {
            x: self[x],
            y: self[y],
            z: self[z],
        }
    }

    /// Extends the vector with `w`.
    #[inline]
    pub fn extend(&self, w: T) -> Vec4<T> {
        Vec4 {
            x: self.x,
            y: self.y,
            z: self.z,
            w,
        }
    }
}

impl<T> Vec4<T>
where
    T: ValueType,
{
    /// Drops the w component.
    #[inline]
    pub fn xyz(&self) -> Vec3<T> {
        Vec3 {
            x: self.x,
            y: self.y,
            z: self.z,
        }
    }
}
