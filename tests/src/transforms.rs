#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use kagami::math::{
        transforms::{look_at, perspective},
        vec3, vec4, Matrix4x4,
    };

    #[test]
    fn look_at_moves_eye_to_origin() {
        let eye = vec3(1.0f32, 2.0, 3.0);
        let view = look_at(eye, vec3(1.0, 2.0, -7.0), vec3(0.0, 1.0, 0.0));

        // Already looking down -z so only the translation remains
        assert_abs_diff_eq!(&view * eye.extend(1.0), vec4(0.0, 0.0, 0.0, 1.0), epsilon = 1e-6);
        assert_abs_diff_eq!(
            &view * vec4(1.0, 2.0, -7.0, 1.0),
            vec4(0.0, 0.0, -10.0, 1.0),
            epsilon = 1e-5
        );
    }

    #[test]
    fn look_at_is_right_handed() {
        let view = look_at(
            vec3(0.0f32, 0.0, 0.0),
            vec3(1.0, 0.0, 0.0),
            vec3(0.0, 0.0, 1.0),
        );
        // Looking down +x with +z up puts +y on the left
        assert_abs_diff_eq!(
            &view * vec4(0.0, 1.0, 0.0, 0.0),
            vec4(-1.0, 0.0, 0.0, 0.0),
            epsilon = 1e-6
        );
        assert_abs_diff_eq!(
            &view * vec4(0.0, 0.0, 1.0, 0.0),
            vec4(0.0, 1.0, 0.0, 0.0),
            epsilon = 1e-6
        );
        assert_abs_diff_eq!(
            &view * vec4(1.0, 0.0, 0.0, 0.0),
            vec4(0.0, 0.0, -1.0, 0.0),
            epsilon = 1e-6
        );
    }

    #[test]
    fn perspective_maps_near_and_far() {
        let (near, far) = (0.5f32, 50.0);
        let p = perspective(std::f32::consts::FRAC_PI_2, 2.0, near, far);

        let clip = &p * vec4(0.0, 0.0, -near, 1.0);
        assert_abs_diff_eq!(clip.z / clip.w, -1.0, epsilon = 1e-5);
        let clip = &p * vec4(0.0, 0.0, -far, 1.0);
        assert_abs_diff_eq!(clip.z / clip.w, 1.0, epsilon = 1e-5);

        // 90 degree vertical fov puts the top edge at y = -z
        let clip = &p * vec4(0.0, 3.0, -3.0, 1.0);
        assert_abs_diff_eq!(clip.y / clip.w, 1.0, epsilon = 1e-5);
        // and the aspect ratio widens x
        let clip = &p * vec4(6.0, 0.0, -3.0, 1.0);
        assert_abs_diff_eq!(clip.x / clip.w, 1.0, epsilon = 1e-5);
    }

    #[test]
    fn view_projection_inverts() {
        let view = look_at(
            vec3(750.0f32, 200.0, 250.0),
            vec3(0.0, 50.0, 0.0),
            vec3(0.0, 0.0, 1.0),
        );
        let projection = perspective(3.141592 / 5.0, 4.0 / 3.0, 0.1, 10000.0);
        let pv = &projection * &view;
        assert_abs_diff_eq!(
            &pv * &pv.inverted(),
            Matrix4x4::new([
                [1.0, 0.0, 0.0, 0.0],
                [0.0, 1.0, 0.0, 0.0],
                [0.0, 0.0, 1.0, 0.0],
                [0.0, 0.0, 0.0, 1.0],
            ]),
            epsilon = 1e-3
        );
    }
}
