#[cfg(test)]
mod tests {
    use approx::{assert_abs_diff_eq, assert_abs_diff_ne, assert_relative_eq, assert_relative_ne};
    use std::panic;

    use kagami::math::{vec4, Matrix4x4};

    fn identity() -> Matrix4x4<f32> {
        Matrix4x4::new([
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    fn sequential() -> Matrix4x4<f32> {
        Matrix4x4::new([
            [1.0, 2.0, 3.0, 4.0],
            [5.0, 6.0, 7.0, 8.0],
            [9.0, 10.0, 11.0, 12.0],
            [13.0, 14.0, 15.0, 16.0],
        ])
    }

    #[test]
    fn zeros() {
        assert_eq!(Matrix4x4::zeros(), Matrix4x4::new([[0.0f32; 4]; 4]));
    }

    #[test]
    fn has_nans() {
        assert!(!Matrix4x4::<f32>::zeros().has_nans());
        // Any position with NaN should panic in the constructor
        for row in 0..4 {
            for col in 0..4 {
                let mut m = [[0.0; 4]; 4];
                m[row][col] = f32::NAN;
                let result = panic::catch_unwind(|| Matrix4x4::new(m));
                assert!(result.is_err());
            }
        }
    }

    #[test]
    fn inverted() {
        // Non-singular
        let m = Matrix4x4::new([
            [9.2f32, 8.1, 8.0, -2.1],
            [-8.3, 16.0, 3.0, 8.0],
            [0.5, 9.3, -4.0, 7.1],
            [3.0, -8.0, 2.0, 10.0],
        ]);

        assert_abs_diff_eq!(m.inverted().inverted(), m, epsilon = 1e-4);
        assert_abs_diff_eq!(&m * &m.inverted(), identity(), epsilon = 1e-5);
        assert_abs_diff_eq!(&m.inverted() * &m, identity(), epsilon = 1e-5);
    }

    #[test]
    fn mul() {
        let m = sequential();
        assert_abs_diff_eq!(
            &m * &m,
            Matrix4x4::new([
                [90.0, 100.0, 110.0, 120.0],
                [202.0, 228.0, 254.0, 280.0],
                [314.0, 356.0, 398.0, 440.0],
                [426.0, 484.0, 542.0, 600.0],
            ])
        );
        assert_eq!(&m * &identity(), m);
    }

    #[test]
    fn mul_vec() {
        let m = sequential();
        assert_abs_diff_eq!(
            &m * vec4(1.0, 0.0, -1.0, 2.0),
            vec4(6.0, 14.0, 22.0, 30.0)
        );
        let v = vec4(0.5, -2.0, 3.0, 1.0);
        assert_eq!(&identity() * v, v);
    }

    #[test]
    fn abs_diff_eq() {
        assert_abs_diff_eq!(identity(), identity());
        for row in 0..4 {
            for col in 0..4 {
                let mut m = Matrix4x4::zeros();
                m.m[row][col] = 1.0;
                assert_abs_diff_ne!(m, identity());
                assert_abs_diff_eq!(m, identity(), epsilon = 1.0)
            }
        }
    }

    #[test]
    fn relative_eq() {
        let mut m = Matrix4x4::new([[2.0f32; 4]; 4]);
        let mc = m;
        m.m[1][2] = 1.0;
        assert_relative_ne!(m, mc);
        assert_relative_eq!(m, mc, epsilon = 1.0);
        assert_relative_eq!(m, mc, epsilon = 0.0, max_relative = 0.5);
    }
}
