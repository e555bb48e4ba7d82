mod file;

use std::{fmt, path::Path, time::Instant};

use crate::{
    camera::CameraParameters,
    hit::{Hit, HIT_BIAS},
    kagami_info,
    lights::PointLight,
    math::{vec3, vec4, Ray, Vec3, Vec4},
    shapes::{AaBox, Primitive, Shape, ShapeHit, Sphere},
};

/// Maximum number of objects a [Scene] can hold
pub const MAX_OBJECTS: usize = 20;
/// Maximum number of lights a [Scene] can hold
pub const MAX_LIGHTS: usize = 10;

/// A shape with its diffuse color
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Object {
    pub primitive: Primitive,
    /// Diffuse rgba response to incoming light
    pub color: Vec4<f32>,
}

impl Object {
    pub fn sphere(center: Vec3<f32>, radius: f32, color: Vec4<f32>) -> Self {
        Self {
            primitive: Primitive::Sphere(Sphere::new(center, radius)),
            color,
        }
    }

    pub fn aa_box(min: Vec3<f32>, max: Vec3<f32>, color: Vec4<f32>) -> Self {
        Self {
            primitive: Primitive::Box(AaBox::new(min, max)),
            color,
        }
    }
}

/// Material values shared by every object in a [Scene]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SceneMaterial {
    /// Added once per pixel whose primary ray hits anything
    pub emission: Vec4<f32>,
    /// Weight of the reflected contribution at every bounce
    pub reflectivity: Vec4<f32>,
    /// Radiance of rays that escape the scene
    pub background: Vec4<f32>,
}

impl Default for SceneMaterial {
    fn default() -> Self {
        Self {
            emission: vec4(0.1, 0.1, 0.1, 1.0),
            reflectivity: vec4(0.3, 0.3, 0.3, 1.0),
            background: vec4(0.0, 0.0, 0.0, 1.0),
        }
    }
}

/// Immutable scene description. Capacity and geometry are validated on construction.
#[derive(Clone, Debug)]
pub struct Scene {
    pub name: String,
    objects: Vec<Object>,
    lights: Vec<PointLight>,
    material: SceneMaterial,
}

impl Scene {
    /// Validates capacity and geometry, returning the first problem found.
    pub fn new(
        objects: Vec<Object>,
        lights: Vec<PointLight>,
        emission: Vec4<f32>,
        reflectivity: Vec4<f32>,
        background: Vec4<f32>,
    ) -> Result<Self, SceneError> {
        if objects.len() > MAX_OBJECTS {
            return Err(SceneError::TooManyObjects(objects.len()));
        }
        if lights.len() > MAX_LIGHTS {
            return Err(SceneError::TooManyLights(lights.len()));
        }

        for (index, o) in objects.iter().enumerate() {
            match o.primitive {
                Primitive::Sphere(s) => {
                    if s.radius().is_nan() || s.radius() <= 0.0 || s.center().has_nans() {
                        return Err(SceneError::InvalidSphere {
                            index,
                            radius: s.radius(),
                        });
                    }
                }
                Primitive::Box(b) => {
                    let (min, max) = (b.min(), b.max());
                    if !(min.x <= max.x && min.y <= max.y && min.z <= max.z) {
                        return Err(SceneError::InvalidBox { index });
                    }
                }
            }
        }

        Ok(Self {
            name: String::from("unnamed"),
            objects,
            lights,
            material: SceneMaterial {
                emission,
                reflectivity,
                background,
            },
        })
    }

    /// Sets the name shown in logs
    pub fn with_name(mut self, name: &str) -> Self {
        self.name = name.into();
        self
    }

    pub fn objects(&self) -> &[Object] {
        &self.objects
    }

    pub fn lights(&self) -> &[PointLight] {
        &self.lights
    }

    pub fn material(&self) -> &SceneMaterial {
        &self.material
    }

    /// Finds the closest hit with a distance in `(0, ray.t_max)`.
    ///
    /// Every object is tested. Ties keep the earlier object.
    pub fn intersect(&self, ray: &Ray<f32>) -> Option<Hit> {
        let mut closest = ray.t_max;
        let mut hit = None;
        for (object, o) in self.objects.iter().enumerate() {
            if let Some(ShapeHit { t, n }) = o.primitive.intersect(ray) {
                if t > 0.0 && t < closest {
                    closest = t;
                    hit = Some(Hit {
                        t: HIT_BIAS * t,
                        object,
                        n,
                    });
                }
            }
        }
        hit
    }

    /// The room of six boxes, two spheres and three lights that is shown by default.
    pub fn mirror_room() -> (Scene, CameraParameters) {
        let boxes = [
            ([-350.0, -350.0, -10.0], [350.0, 350.0, 10.0], [0.5, 0.5, 0.5, 1.0]),
            ([-60.0, -60.0, 30.0], [60.0, 60.0, 150.0], [1.0, 1.0, 1.0, 1.0]),
            ([-300.0, -330.0, 0.0], [330.0, -310.0, 300.0], [0.0, 0.5, 0.5, 1.0]),
            ([-330.0, -400.0, 0.0], [-310.0, 400.0, 300.0], [1.0, 1.0, 0.0, 1.0]),
            ([-300.0, 310.0, 0.0], [330.0, 330.0, 300.0], [0.5, 0.0, 1.0, 1.0]),
            ([100.0, 100.0, 40.0], [180.0, 180.0, 120.0], [0.0, 0.0, 1.0, 1.0]),
        ];
        let spheres = [
            ([-180.0, 180.0, 100.0], 75.0, [0.0, 0.8, 0.8, 1.0]),
            ([210.0, -25.0, 65.0], 55.0, [1.0, 0.0, 0.0, 1.0]),
        ];
        let lights = [
            ([50.0, -500.0, 800.0], [0.5, 0.5, 0.5, 1.0]),
            ([-350.0, 250.0, 600.0], [0.5, 0.5, 0.5, 1.0]),
            ([50.0, 500.0, 800.0], [0.5, 0.5, 0.5, 1.0]),
        ];

        // Spheres go first, the order decides ties between equally distant hits
        let objects = spheres
            .iter()
            .map(|&(c, r, color)| Object::sphere(c.into(), r, color.into()))
            .chain(
                boxes
                    .iter()
                    .map(|&(min, max, color)| Object::aa_box(min.into(), max.into(), color.into())),
            )
            .collect();
        let lights = lights
            .iter()
            .map(|&(p, color)| PointLight::new(p.into(), color.into()))
            .collect();

        let material = SceneMaterial::default();
        let scene = crate::expect!(
            Scene::new(
                objects,
                lights,
                material.emission,
                material.reflectivity,
                material.background
            ),
            "Built-in scene is invalid"
        )
        .with_name("mirror_room");

        let camera_params = CameraParameters {
            eye: vec3(750.0, 200.0, 250.0),
            target: vec3(0.0, 50.0, 0.0),
            up: vec3(0.0, 0.0, 1.0),
            fov_y: 3.141592 / 5.0,
            near: 0.1,
            far: 10000.0,
        };

        (scene, camera_params)
    }

    /// Loads a YAML scene description
    ///
    /// Also returns the time it took to load in seconds.
    pub fn yaml(path: &Path) -> Result<(Scene, CameraParameters, f32), SceneError> {
        let load_start = Instant::now();

        let (scene, camera_params) = file::load(path)?;

        let total_secs = load_start.elapsed().as_secs_f32();

        kagami_info!(
            "YAML: Loaded '{}' with {} objects and {} lights in {:.2}s",
            scene.name,
            scene.objects.len(),
            scene.lights.len(),
            total_secs
        );

        Ok((scene, camera_params, total_secs))
    }
}

#[derive(Debug)]
pub enum SceneError {
    TooManyObjects(usize),
    TooManyLights(usize),
    InvalidSphere { index: usize, radius: f32 },
    InvalidBox { index: usize },
    InvalidCamera(String),
    Io(std::io::Error),
    Parse(serde_yaml::Error),
}

impl fmt::Display for SceneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SceneError::TooManyObjects(n) => {
                write!(f, "Scene has {} objects, at most {} are supported", n, MAX_OBJECTS)
            }
            SceneError::TooManyLights(n) => {
                write!(f, "Scene has {} lights, at most {} are supported", n, MAX_LIGHTS)
            }
            SceneError::InvalidSphere { index, radius } => {
                write!(f, "Object {} is a sphere with invalid radius {}", index, radius)
            }
            SceneError::InvalidBox { index } => {
                write!(f, "Object {} is a box with min > max", index)
            }
            SceneError::InvalidCamera(why) => write!(f, "Invalid camera: {}", why),
            SceneError::Io(why) => write!(f, "Failed to read scene: {}", why),
            SceneError::Parse(why) => write!(f, "Failed to parse scene: {}", why),
        }
    }
}

impl std::error::Error for SceneError {}

impl From<std::io::Error> for SceneError {
    fn from(why: std::io::Error) -> Self {
        SceneError::Io(why)
    }
}

impl From<serde_yaml::Error> for SceneError {
    fn from(why: serde_yaml::Error) -> Self {
        SceneError::Parse(why)
    }
}
