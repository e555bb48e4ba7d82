use crate::{
    lights::LightSample,
    math::{Vec3, Vec4},
    scene::{Object, Scene},
};

/// Sums the contributions of all unoccluded lights at `p` on `object`.
///
/// Lights sitting exactly at `p` are skipped.
/// The cosine term is not clamped so back-facing lights subtract from the result.
/// Shadow rays consider hits up to `t_max`.
pub fn direct_lighting(
    scene: &Scene,
    p: Vec3<f32>,
    n: Vec3<f32>,
    object: &Object,
    t_max: f32,
) -> Vec4<f32> {
    scene
        .lights()
        .iter()
        .filter_map(|light| light.sample_li(p, t_max))
        .fold(Vec4::zeros(), |c, LightSample { l, li, vis }| {
            if vis.unoccluded(scene) {
                c + object.color * li * n.dot(l)
            } else {
                c
            }
        })
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::{
        lights::PointLight,
        math::{vec3, vec4},
        scene::SceneMaterial,
    };

    fn scene(objects: Vec<Object>, lights: Vec<PointLight>) -> Scene {
        let m = SceneMaterial::default();
        Scene::new(objects, lights, m.emission, m.reflectivity, m.background).unwrap()
    }

    #[test]
    fn occluder_blocks_light() {
        let floor = Object::aa_box(
            vec3(-10.0, -10.0, -1.0),
            vec3(10.0, 10.0, 0.0),
            vec4(1.0, 1.0, 1.0, 1.0),
        );
        let light = PointLight::new(vec3(0.0, 0.0, 100.0), vec4(0.5, 0.5, 0.5, 1.0));
        let p = vec3(0.0, 0.0, 0.5);
        let n = vec3(0.0, 0.0, 1.0);

        let open = scene(vec![floor], vec![light]);
        let lit = direct_lighting(&open, p, n, &open.objects()[0], 1000.0);
        assert_abs_diff_eq!(lit, vec4(0.5, 0.5, 0.5, 1.0));

        let blocker = Object::sphere(vec3(0.0, 0.0, 50.0), 5.0, vec4(1.0, 1.0, 1.0, 1.0));
        let blocked = scene(vec![floor, blocker], vec![light]);
        let lit = direct_lighting(&blocked, p, n, &blocked.objects()[0], 1000.0);
        assert_eq!(lit, Vec4::zeros());
    }

    #[test]
    fn occluders_past_the_light_still_block() {
        let floor = Object::aa_box(
            vec3(-10.0, -10.0, -1.0),
            vec3(10.0, 10.0, 0.0),
            vec4(1.0, 1.0, 1.0, 1.0),
        );
        let ceiling = Object::aa_box(
            vec3(-10.0, -10.0, 200.0),
            vec3(10.0, 10.0, 201.0),
            vec4(1.0, 1.0, 1.0, 1.0),
        );
        let light = PointLight::new(vec3(0.0, 0.0, 100.0), vec4(1.0, 1.0, 1.0, 1.0));
        let s = scene(vec![floor, ceiling], vec![light]);
        let p = vec3(0.0, 0.0, 0.5);
        let n = vec3(0.0, 0.0, 1.0);
        let lit = direct_lighting(&s, p, n, &s.objects()[0], 1000.0);
        assert_eq!(lit, Vec4::zeros());

        // A shorter search radius stops before the ceiling
        let lit = direct_lighting(&s, p, n, &s.objects()[0], 150.0);
        assert_abs_diff_eq!(lit, vec4(1.0, 1.0, 1.0, 1.0));
    }

    #[test]
    fn back_facing_light_is_negative() {
        let object = Object::sphere(vec3(0.0, 0.0, -100.0), 1.0, vec4(1.0, 0.5, 0.25, 1.0));
        let light = PointLight::new(vec3(0.0, 0.0, 10.0), vec4(1.0, 1.0, 1.0, 1.0));
        let s = scene(vec![object], vec![light]);
        let n = vec3(0.0, 0.0, -1.0);
        let lit = direct_lighting(&s, Vec3::zeros(), n, &s.objects()[0], 1000.0);
        assert_abs_diff_eq!(lit, vec4(-1.0, -0.5, -0.25, -1.0));
    }

    #[test]
    fn light_at_shaded_point_is_skipped() {
        let floor = Object::aa_box(
            vec3(-10.0, -10.0, -1.0),
            vec3(10.0, 10.0, 0.0),
            vec4(1.0, 1.0, 1.0, 1.0),
        );
        let lights = vec![
            PointLight::new(vec3(0.0, 0.0, 1.0), vec4(1.0, 1.0, 1.0, 1.0)),
            PointLight::new(vec3(0.0, 0.0, 100.0), vec4(0.5, 0.0, 0.0, 1.0)),
        ];
        let s = scene(vec![floor], lights);
        let p = vec3(0.0, 0.0, 1.0);
        let n = vec3(0.0, 0.0, 1.0);
        let lit = direct_lighting(&s, p, n, &s.objects()[0], 1000.0);
        assert!(!lit.has_nans());
        assert_abs_diff_eq!(lit, vec4(0.5, 0.0, 0.0, 1.0));
    }

    #[test]
    fn lights_accumulate() {
        let object = Object::sphere(vec3(0.0, 0.0, -100.0), 1.0, vec4(1.0, 1.0, 1.0, 1.0));
        let lights = vec![
            PointLight::new(vec3(0.0, 0.0, 10.0), vec4(0.25, 0.0, 0.0, 1.0)),
            PointLight::new(vec3(10.0, 0.0, 0.0), vec4(0.0, 0.5, 0.0, 1.0)),
        ];
        let s = scene(vec![object], lights);
        let n = vec3(1.0, 0.0, 1.0).normalized();
        let lit = direct_lighting(&s, Vec3::zeros(), n, &s.objects()[0], 1000.0);
        let cos = std::f32::consts::FRAC_1_SQRT_2;
        assert_abs_diff_eq!(lit, vec4(0.25 * cos, 0.5 * cos, 0.0, 2.0 * cos), epsilon = 1e-6);
    }
}
