use chrono::{Datelike, Timelike};
use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use crate::{
    camera::CameraParameters,
    kagami_info,
    math::Vec4,
    scene::Scene,
};

/// Loads the scene at `path` or the built-in room if there is none.
///
/// Also returns the load time in seconds.
pub fn try_load_scene(
    path: Option<&Path>,
) -> Result<(Arc<Scene>, CameraParameters, f32), String> {
    let path = match path {
        Some(path) => path,
        None => {
            let (scene, camera_params) = Scene::mirror_room();
            return Ok((Arc::new(scene), camera_params, 0.0));
        }
    };

    if !path.exists() {
        return Err(format!("Scene does not exist '{}'", path.to_string_lossy()));
    }

    match path.extension().and_then(|ext| ext.to_str()) {
        Some("yaml") | Some("yml") => match Scene::yaml(path) {
            Ok((scene, camera_params, total_secs)) => {
                kagami_info!("YAML scene loaded from '{}'", path.to_string_lossy());
                Ok((Arc::new(scene), camera_params, total_secs))
            }
            Err(why) => Err(format!("Loading YAML scene failed: {}", why)),
        },
        Some(ext) => Err(format!("Unknown extension '{}'", ext)),
        None => Err("Expected a file with an extension".into()),
    }
}

pub fn exr_path(scene: &Scene) -> Result<PathBuf, String> {
    match std::env::current_dir() {
        Ok(mut path) => {
            let now = chrono::Local::now();
            let timestamp = format!(
                "{:04}{:02}{:02}_{:02}{:02}{:02}",
                now.year(),
                now.month(),
                now.day(),
                now.hour(),
                now.minute(),
                now.second()
            );
            let filename = format!("{}_{}.exr", scene.name, timestamp);
            path.push(filename);

            Ok(path)
        }
        Err(why) => Err(format!(
            "Error getting current working directory: {:?}",
            why
        )),
    }
}

/// Writes bottom-up rgba `pixels` as a top-down EXR.
pub fn write_exr(
    width: usize,
    height: usize,
    pixels: &[Vec4<f32>],
    path: &Path,
) -> Result<(), String> {
    if pixels.len() != width * height {
        return Err(format!(
            "Expected {} pixels for {}x{}, got {}",
            width * height,
            width,
            height,
            pixels.len()
        ));
    }

    kagami_info!("Writing out EXR");
    match exr::prelude::write_rgba_file(path, width, height, |x, y| {
        let px = pixels[bottom_up_index(width, height, x, y)];
        (px.x, px.y, px.z, px.w)
    }) {
        Ok(_) => {
            kagami_info!("EXR written to '{}'", path.to_string_lossy());
            Ok(())
        }
        Err(why) => Err(format!(
            "Error writing EXR to '{}': {:?}",
            path.to_string_lossy(),
            why
        )),
    }
}

// Maps a top-down image coordinate to the bottom-up film storage
fn bottom_up_index(width: usize, height: usize, x: usize, y: usize) -> usize {
    (height - 1 - y) * width + x
}
