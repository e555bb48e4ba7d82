use glium::{glutin, Surface};
use glutin::{
    dpi::LogicalSize,
    event::{ElementState, Event, KeyboardInput, MouseButton, VirtualKeyCode, WindowEvent},
    event_loop::{ControlFlow, EventLoop},
    window::WindowBuilder,
};
use std::{
    sync::{Arc, Mutex},
    time::Instant,
};

use super::{
    renderpasses::{FilmTexture, ScaleOutput},
    util::{exr_path, try_load_scene, write_exr},
    InitialSettings,
};
use crate::{
    camera::{Camera, CameraParameters},
    expect,
    film::Film,
    integrators::{Integrator, RayType, Whitted},
    kagami_debug, kagami_error, kagami_info, kagami_trace,
    math::{vec2, Vec2},
    renderer::{RenderSettings, Renderer},
    scene::Scene,
};

pub struct Window {
    // Window and GL context
    event_loop: EventLoop<()>,
    display: glium::Display,

    // Rendering
    film: Arc<Mutex<Film>>,
    film_texture: FilmTexture,
    render_settings: RenderSettings,
    single_frame: bool,

    // Scene
    scene: Arc<Scene>,
    camera_params: CameraParameters,
}

impl Window {
    pub fn new(title: &str, settings: InitialSettings) -> Result<Window, String> {
        let (scene, camera_params, load_secs) = try_load_scene(settings.scene_path.as_deref())?;
        kagami_info!("Scene '{}' ready in {:.2}s", scene.name, load_secs);

        // Create window and gl context
        let event_loop = EventLoop::new();
        let window_builder = WindowBuilder::new()
            .with_title(title.to_owned())
            .with_resizable(false)
            .with_inner_size(LogicalSize::new(
                settings.res.x as f64,
                settings.res.y as f64,
            ));
        // Vsync caps the redraw rate
        let context_builder = glutin::ContextBuilder::new().with_vsync(true);
        let display = expect!(
            glium::Display::new(window_builder, context_builder, &event_loop),
            "Failed to initialize glium display"
        );

        let film = Arc::new(Mutex::new(Film::new(settings.res)));
        let film_texture = expect!(
            FilmTexture::new(&display),
            "Failed to create film texture pass"
        );

        Ok(Window {
            event_loop,
            display,
            film,
            film_texture,
            render_settings: RenderSettings {
                res: settings.res,
                integrator: settings.integrator,
                match_logical_cores: settings.match_logical_cores,
            },
            single_frame: settings.single_frame,
            scene,
            camera_params,
        })
    }

    pub fn main_loop(self) {
        let Window {
            event_loop,
            display,
            film,
            mut film_texture,
            render_settings,
            single_frame,
            scene,
            camera_params,
        } = self;

        let mut renderer = Renderer::new();
        let mut frames_launched = 0usize;
        let mut cursor_state = CursorState::default();
        let mut write_exr_requested = false;

        event_loop.run(move |event, _, control_flow| match event {
            Event::MainEventsCleared => {
                kagami_trace!("main_loop: MainEventsCleared");
                // Ran out of events so let's prepare to draw
                display.gl_window().window().request_redraw();
            }
            Event::RedrawRequested(_) => {
                let redraw_start = Instant::now();
                kagami_trace!("main_loop: RedrawRequested");

                if let Some(result) = renderer.check_result() {
                    let mrays_per_s = ((result.ray_count as f32) / result.secs) * 1e-6;
                    kagami_info!(
                        "Frame finished in {:.2}ms, {:.2} Mrays/s",
                        result.secs * 1e3,
                        mrays_per_s
                    );
                    display.gl_window().window().set_title(&format!(
                        "kagami - {:.1}ms - {:.2} Mrays/s",
                        result.secs * 1e3,
                        mrays_per_s
                    ));
                }

                if !renderer.is_active() && (!single_frame || frames_launched == 0) {
                    kagami_trace!("main_loop: Launching render job");
                    renderer.launch(
                        Arc::clone(&scene),
                        camera_params,
                        Arc::clone(&film),
                        render_settings,
                    );
                    frames_launched += 1;
                }

                // Draw frame
                let mut render_target = display.draw();
                render_target.clear_color(0.0, 0.0, 0.0, 1.0);

                let film_texture = expect!(
                    film_texture.update(&display, &film),
                    "Film texture update failed"
                );
                ScaleOutput::draw(film_texture, &mut render_target);

                // Finish frame
                expect!(render_target.finish(), "Frame::finish() failed");

                if write_exr_requested {
                    write_film(&film, &scene);
                    write_exr_requested = false;
                }

                let spent_millis = (redraw_start.elapsed().as_micros() as f32) * 1e-3;
                kagami_trace!("main_loop: RedrawRequested took {:4.2}ms", spent_millis);
            }
            Event::LoopDestroyed => {
                kagami_debug!("main_loop: LoopDestroyed");
                renderer.kill();
            }
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => {
                    kagami_trace!("main_loop: CloseRequested");
                    *control_flow = ControlFlow::Exit;
                }
                WindowEvent::KeyboardInput {
                    input:
                        KeyboardInput {
                            virtual_keycode: Some(key),
                            state: ElementState::Pressed,
                            ..
                        },
                    ..
                } => {
                    kagami_trace!("main_loop: KeyboardInput");
                    match key {
                        VirtualKeyCode::Escape => {
                            *control_flow = ControlFlow::Exit;
                        }
                        VirtualKeyCode::S => write_exr_requested = true,
                        _ => {}
                    }
                }
                WindowEvent::ModifiersChanged(state) => cursor_state.ctrl_down = state.ctrl(),
                WindowEvent::CursorEntered { .. } => cursor_state.inside = true,
                WindowEvent::CursorLeft { .. } => cursor_state.inside = false,
                WindowEvent::CursorMoved { position, .. } => {
                    cursor_state.position = vec2(position.x, position.y);
                }
                WindowEvent::MouseInput { state, button, .. } => {
                    // Ctrl+LClick fires debug ray on pixel
                    if cursor_state.inside
                        && cursor_state.ctrl_down
                        && button == MouseButton::Left
                        && state == ElementState::Pressed
                    {
                        let window_size = {
                            let glutin::dpi::PhysicalSize { width, height } =
                                display.gl_window().window().inner_size();
                            vec2(width as f64, height as f64)
                        };
                        launch_debug_ray(
                            cursor_state.position,
                            window_size,
                            &scene,
                            &camera_params,
                            &render_settings,
                        );
                    }
                }
                _ => {}
            },
            _ => {}
        })
    }
}

struct CursorState {
    inside: bool,
    position: Vec2<f64>,
    ctrl_down: bool,
}

impl Default for CursorState {
    fn default() -> Self {
        Self {
            inside: false,
            position: Vec2::from(0.0),
            ctrl_down: false,
        }
    }
}

fn write_film(film: &Mutex<Film>, scene: &Scene) {
    let (w, h, pixels) = {
        kagami_trace!("write_film: Waiting for lock on film");
        let film = expect!(film.lock(), "Film lock poisoned");
        kagami_trace!("write_film: Acquired film");
        let res = film.res();
        (res.x as usize, res.y as usize, film.pixels().clone())
    };

    match exr_path(scene) {
        Ok(path) => {
            if let Err(why) = write_exr(w, h, &pixels, &path) {
                kagami_error!("{}", why);
            }
        }
        Err(why) => kagami_error!("{}", why),
    }
}

/// Maps a top-down window pixel to a bottom-up film pixel, taking the letterboxing into account.
pub(super) fn window_to_film(
    window_px: Vec2<f64>,
    window_size: Vec2<f64>,
    film_res: Vec2<u16>,
) -> Option<Vec2<u32>> {
    let film_w = film_res.x as f64;
    let film_h = film_res.y as f64;
    let film_aspect = film_w / film_h;
    let window_aspect = window_size.x / window_size.y;

    let (x, y_from_top) = if window_aspect < film_aspect {
        let film_scale = window_size.x / film_w;
        let top_margin = (window_size.y - film_h * film_scale) / 2.0;
        (window_px.x / film_scale, (window_px.y - top_margin) / film_scale)
    } else {
        let film_scale = window_size.y / film_h;
        let left_margin = (window_size.x - film_w * film_scale) / 2.0;
        ((window_px.x - left_margin) / film_scale, window_px.y / film_scale)
    };

    if x >= 0.0 && y_from_top >= 0.0 && x < film_w && y_from_top < film_h {
        #[allow(clippy::cast_sign_loss)] // We check above
        let px = vec2(x as u32, (film_h - 1.0 - y_from_top.floor()) as u32);
        Some(px)
    } else {
        None
    }
}

fn launch_debug_ray(
    window_px: Vec2<f64>,
    window_size: Vec2<f64>,
    scene: &Scene,
    camera_params: &CameraParameters,
    render_settings: &RenderSettings,
) {
    kagami_info!(
        "main_loop: Debug ray initiated at window px ({},{})",
        window_px.x,
        window_px.y
    );

    let res = render_settings.res;
    let film_px = match window_to_film(window_px, window_size, res) {
        Some(px) => px,
        None => {
            kagami_info!("main_loop: Window px is outside the film");
            return;
        }
    };

    kagami_info!(
        "main_loop: Launching debug ray at film px ({},{})",
        film_px.x,
        film_px.y
    );

    let camera = Camera::new(camera_params, res);
    let ray = camera.ray(film_px, vec2(res.x as u32, res.y as u32));
    let integrator = Whitted::new(render_settings.integrator);

    let mut rays = Vec::new();
    let result = integrator.li_debug(ray, scene, &mut rays);

    kagami_info!(
        "main_loop: Debug ray radiance {:?}, {} bounces, {} ray-scene intersections",
        result.li,
        result.bounces,
        result.ray_scene_intersections
    );
    let shadow_rays = rays.iter().filter(|r| r.ray_type == RayType::Shadow).count();
    kagami_info!(
        "main_loop: {} rays traced, {} of them shadow rays",
        rays.len(),
        shadow_rays
    );
    for r in &rays {
        kagami_debug!(
            "main_loop: {:?} o {:?} d {:?} t_max {}",
            r.ray_type,
            r.ray.o,
            r.ray.d,
            r.ray.t_max
        );
    }
}
