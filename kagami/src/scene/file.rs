use serde::Deserialize;
use std::path::Path;

use super::{Object, Scene, SceneError, SceneMaterial};
use crate::{camera::CameraParameters, lights::PointLight};

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct SceneFile {
    name: Option<String>,
    camera: CameraFile,
    emission: [f32; 4],
    reflectivity: [f32; 4],
    background: Option<[f32; 4]>,
    #[serde(default)]
    objects: Vec<ObjectFile>,
    #[serde(default)]
    lights: Vec<LightFile>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct CameraFile {
    eye: [f32; 3],
    target: [f32; 3],
    up: [f32; 3],
    /// Radians
    fov_y: f32,
    near: f32,
    far: f32,
}

#[derive(Deserialize)]
#[serde(tag = "type", deny_unknown_fields)]
enum ObjectFile {
    Sphere {
        center: [f32; 3],
        radius: f32,
        color: [f32; 4],
    },
    Box {
        min: [f32; 3],
        max: [f32; 3],
        color: [f32; 4],
    },
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct LightFile {
    position: [f32; 3],
    color: [f32; 4],
}

pub fn load(path: &Path) -> Result<(Scene, CameraParameters), SceneError> {
    let text = std::fs::read_to_string(path)?;
    let (scene, camera_params) = parse(&text)?;

    let scene = match scene.name.as_str() {
        "unnamed" => {
            let stem = path
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_default();
            scene.with_name(&stem)
        }
        _ => scene,
    };

    Ok((scene, camera_params))
}

pub fn parse(text: &str) -> Result<(Scene, CameraParameters), SceneError> {
    let file: SceneFile = serde_yaml::from_str(text)?;

    let c = file.camera;
    let camera_params = CameraParameters {
        eye: c.eye.into(),
        target: c.target.into(),
        up: c.up.into(),
        fov_y: c.fov_y,
        near: c.near,
        far: c.far,
    };
    camera_params
        .validate()
        .map_err(SceneError::InvalidCamera)?;

    let objects = file
        .objects
        .into_iter()
        .map(|o| match o {
            ObjectFile::Sphere {
                center,
                radius,
                color,
            } => Object::sphere(center.into(), radius, color.into()),
            ObjectFile::Box { min, max, color } => {
                Object::aa_box(min.into(), max.into(), color.into())
            }
        })
        .collect();
    let lights = file
        .lights
        .into_iter()
        .map(|l| PointLight::new(l.position.into(), l.color.into()))
        .collect();

    let background = file
        .background
        .map(|b| b.into())
        .unwrap_or(SceneMaterial::default().background);

    let mut scene = Scene::new(
        objects,
        lights,
        file.emission.into(),
        file.reflectivity.into(),
        background,
    )?;
    if let Some(name) = file.name {
        scene = scene.with_name(&name);
    }

    Ok((scene, camera_params))
}
