use std::{
    path::Path,
    sync::{Arc, Mutex},
};

use super::{
    util::{try_load_scene, write_exr},
    InitialSettings,
};
use crate::{
    expect,
    film::Film,
    kagami_info,
    renderer::{RenderResult, RenderSettings, Renderer},
};

/// Renders a single frame into `exr_path`.
pub fn render(exr_path: &Path, settings: InitialSettings) -> Result<(), String> {
    let (scene, camera_params, _) = try_load_scene(settings.scene_path.as_deref())?;

    let film = Arc::new(Mutex::new(Film::new(settings.res)));
    let mut renderer = Renderer::new();
    renderer.launch(
        scene,
        camera_params,
        Arc::clone(&film),
        RenderSettings {
            res: settings.res,
            integrator: settings.integrator,
            match_logical_cores: settings.match_logical_cores,
        },
    );

    let RenderResult { secs, ray_count } = renderer.wait_result()?;
    kagami_info!(
        "Render finished in {:.2}s, {:.2} Mrays/s",
        secs,
        ((ray_count as f32) / secs) * 1e-6
    );
    renderer.kill();

    let (w, h, pixels) = {
        let film = expect!(film.lock(), "Film lock poisoned");
        let res = film.res();
        (res.x as usize, res.y as usize, film.pixels().clone())
    };

    write_exr(w, h, &pixels, exr_path)
}
