#[cfg(test)]
mod tests {
    use approx::{assert_abs_diff_eq, assert_abs_diff_ne, assert_relative_eq, assert_relative_ne};
    use std::panic;

    use kagami::math::{vec2, vec3, vec4, Vec2, Vec3, Vec4};

    // The impls are generated per component list so Vec2 stands in for the
    // whole family where a check doesn't depend on the length.

    #[test]
    fn new() {
        let v = Vec2::new(0.0, 1.0);
        assert_eq!(v.x, 0.0);
        assert_eq!(v.y, 1.0);
        assert_eq!(vec2(0.0, 1.0), v);

        let v = Vec3::new(0.0, 1.0, 2.0);
        assert_eq!((v.x, v.y, v.z), (0.0, 1.0, 2.0));
        assert_eq!(vec3(0.0, 1.0, 2.0), v);

        let v = Vec4::new(0.0f32, 1.0, 2.0, 3.0);
        assert_eq!((v.x, v.y, v.z, v.w), (0.0, 1.0, 2.0, 3.0));
        assert_eq!(vec4(0.0, 1.0, 2.0, 3.0), v);
    }

    #[test]
    fn zeros() {
        assert_eq!(Vec2::zeros(), Vec2::new(0, 0));
        assert_eq!(Vec3::zeros(), Vec3::new(0, 0, 0));
        assert_eq!(Vec4::zeros(), Vec4::new(0, 0, 0, 0));
    }

    #[test]
    fn has_nans() {
        // Constructors debug assert
        let result = panic::catch_unwind(|| Vec2::new(f32::NAN, 0.0));
        assert!(result.is_err());
        let result = panic::catch_unwind(|| vec3(0.0, f32::NAN, 0.0));
        assert!(result.is_err());
        let result = panic::catch_unwind(|| vec4(0.0, 0.0, 0.0, f32::NAN));
        assert!(result.is_err());

        let mut v = Vec3::<f32>::zeros();
        assert!(!v.has_nans());
        v.z = f32::NAN;
        assert!(v.has_nans());
    }

    #[test]
    fn dot() {
        assert_eq!(Vec2::new(2, 3).dot(Vec2::new(4, 5)), 2 * 4 + 3 * 5);
        assert_eq!(
            Vec3::new(2, 3, 4).dot(Vec3::new(5, 6, 7)),
            2 * 5 + 3 * 6 + 4 * 7
        );
        assert_eq!(
            Vec4::new(2, 3, 4, 5).dot(Vec4::new(6, 7, 8, 9)),
            2 * 6 + 3 * 7 + 4 * 8 + 5 * 9
        );
    }

    #[test]
    fn cross() {
        assert_eq!(
            Vec3::new(2.0, 3.0, 4.0).cross(Vec3::new(5.0, 6.0, -7.0)),
            Vec3::new(-45.0, 34.0, -3.0)
        );
        // Right-handed
        assert_eq!(
            Vec3::new(1, 0, 0).cross(Vec3::new(0, 1, 0)),
            Vec3::new(0, 0, 1)
        );
    }

    #[test]
    fn len() {
        assert_eq!(Vec3::new(2, 3, 4).len_sqr(), 2 * 2 + 3 * 3 + 4 * 4);
        assert_abs_diff_eq!(Vec2::new(3.0f32, 4.0).len(), 5.0);
        assert_abs_diff_eq!(
            Vec4::new(2.0, 3.0, 4.0, 5.0).len(),
            (2.0f32 * 2.0 + 3.0 * 3.0 + 4.0 * 4.0 + 5.0 * 5.0).sqrt()
        );
    }

    #[test]
    fn normalized() {
        assert_abs_diff_eq!(Vec2::new(1.0f32, 1.0).normalized().len(), 1.0);
        assert_abs_diff_eq!(Vec3::new(1.0f32, -2.0, 3.0).normalized().len(), 1.0);
        assert_abs_diff_eq!(
            Vec3::new(0.0f32, 0.0, -4.0).normalized(),
            Vec3::new(0.0, 0.0, -1.0)
        );
    }

    #[test]
    fn min_max() {
        let a = Vec3::new(0, 2, 4);
        let b = Vec3::new(3, 1, 5);
        assert_eq!(a.min(b), Vec3::new(0, 1, 4));
        assert_eq!(a.min(b), b.min(a));
        assert_eq!(a.max(b), Vec3::new(3, 2, 5));
        assert_eq!(a.max(b), b.max(a));

        assert_eq!(Vec4::new(0.0, 1.0, -2.0, 3.0).min_comp(), -2.0);
        assert_eq!(Vec4::new(0.0, 1.0, -2.0, 3.0).max_comp(), 3.0);
    }

    #[test]
    fn clamped() {
        assert_eq!(
            Vec4::new(-0.5f32, 0.25, 1.5, 1.0).clamped(0.0, 1.0),
            Vec4::new(0.0, 0.25, 1.0, 1.0)
        );
        assert_eq!(
            Vec4::new(f32::INFINITY, f32::NEG_INFINITY, 0.0, 0.0).clamped(0.0, 1.0),
            Vec4::new(1.0, 0.0, 0.0, 0.0)
        );
    }

    #[test]
    fn permuted() {
        assert_eq!(
            Vec3::new(3.0, 4.0, 5.0).permuted(1, 2, 0),
            Vec3::new(4.0, 5.0, 3.0)
        );
        assert_eq!(
            Vec3::new(3.0, 4.0, 5.0).permuted(0, 0, 2),
            Vec3::new(3.0, 3.0, 5.0)
        );
    }

    #[test]
    fn extend_xyz() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(v.extend(4.0), Vec4::new(1.0, 2.0, 3.0, 4.0));
        assert_eq!(v.extend(4.0).xyz(), v);
    }

    #[test]
    fn from() {
        assert_eq!(Vec2::from(2), Vec2::new(2, 2));
        assert_eq!(Vec3::from(2), Vec3::new(2, 2, 2));
        assert_eq!(Vec4::from(2), Vec4::new(2, 2, 2, 2));

        assert_eq!(Vec2::from([1, 2]), Vec2::new(1, 2));
        let v: Vec3<f32> = [1.0, 2.0, 3.0].into();
        assert_eq!(v, Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(Vec4::from([1, 2, 3, 4]), Vec4::new(1, 2, 3, 4));

        let result = panic::catch_unwind(|| Vec3::from([0.0, f32::NAN, 0.0]));
        assert!(result.is_err());
    }

    #[test]
    fn index() {
        let v = Vec4::new(0.0, 1.0, 2.0, 3.0);
        assert_eq!(v[0], v.x);
        assert_eq!(v[1], v.y);
        assert_eq!(v[2], v.z);
        assert_eq!(v[3], v.w);

        let mut v = Vec3::zeros();
        v[0] = 1.0;
        v[2] = 3.0;
        assert_eq!(v, Vec3::new(1.0, 0.0, 3.0));

        let result = panic::catch_unwind(|| Vec2::new(0, 1)[2]);
        assert!(result.is_err());
    }

    #[test]
    fn neg() {
        assert_eq!(-Vec2::new(1, 2), Vec2::new(-1, -2));
        assert_eq!(-Vec3::new(1, 2, 3), Vec3::new(-1, -2, -3));
        assert_eq!(-Vec4::new(1, 2, 3, 4), Vec4::new(-1, -2, -3, -4));
    }

    #[test]
    fn add_sub() {
        assert_eq!(Vec2::new(1, 2) + Vec2::new(4, 6), Vec2::new(5, 8));
        assert_eq!(Vec3::new(1, 2, 3) + Vec3::new(4, 6, 7), Vec3::new(5, 8, 10));
        assert_eq!(Vec3::new(7, 7, 7) - Vec3::new(1, 2, 3), Vec3::new(6, 5, 4));
        assert_eq!(
            Vec4::new(9, 9, 9, 9) - Vec4::new(1, 2, 3, 4),
            Vec4::new(8, 7, 6, 5)
        );

        let mut v = Vec3::new(1, 2, 3);
        v += Vec3::new(4, 6, 7);
        assert_eq!(v, Vec3::new(5, 8, 10));
        v -= Vec3::new(1, 2, 3);
        assert_eq!(v, Vec3::new(4, 6, 7));
    }

    #[test]
    fn mul_div() {
        // Component-wise
        assert_eq!(
            Vec4::new(1, 2, 3, 4) * Vec4::new(2, 3, 4, 5),
            Vec4::new(2, 6, 12, 20)
        );
        assert_eq!(Vec3::new(8, 9, 10) / Vec3::new(4, 3, 5), Vec3::new(2, 3, 2));

        // Scalar
        assert_eq!(Vec2::new(2, 3) * 4, Vec2::new(8, 12));
        assert_eq!(Vec4::new(12, 18, 24, 30) / 6, Vec4::new(2, 3, 4, 5));

        let mut v = Vec3::new(2, 3, 4);
        v *= 5;
        assert_eq!(v, Vec3::new(10, 15, 20));
        v /= 5;
        assert_eq!(v, Vec3::new(2, 3, 4));
    }

    #[test]
    fn abs_diff_eq() {
        let v = Vec3::new(1.0f32, 2.0, 3.0);
        assert_abs_diff_eq!(v, v);
        assert_abs_diff_ne!(v, Vec3::new(1.0, 2.0, 3.1));
        assert_abs_diff_eq!(v, Vec3::new(1.0, 2.0, 3.1), epsilon = 0.2);
    }

    #[test]
    fn relative_eq() {
        let v = Vec2::new(100.0f32, 200.0);
        assert_relative_eq!(v, v);
        assert_relative_ne!(v, Vec2::new(101.0, 200.0));
        assert_relative_eq!(v, Vec2::new(101.0, 202.0), max_relative = 0.02);
    }
}
