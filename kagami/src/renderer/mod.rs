mod dispatch;
mod kernel;

pub use dispatch::{dispatch, DispatchGrid, DispatchStats, GROUP_DIM};
pub use kernel::{render_pixel, PixelResult};

use std::{
    sync::{
        atomic::{AtomicBool, Ordering},
        mpsc::{channel, Receiver, RecvError, SendError, Sender, TryRecvError},
        Arc, Mutex,
    },
    thread::JoinHandle,
    time::Instant,
};

use crate::{
    camera::{Camera, CameraParameters},
    expect,
    film::Film,
    integrators::{Whitted, WhittedParams},
    kagami_debug, kagami_error, kagami_info, kagami_trace,
    math::{vec2, Vec2},
    scene::Scene,
};

#[derive(Copy, Clone, Debug)]
pub struct RenderResult {
    pub secs: f32,
    pub ray_count: usize,
}

/// Settings for a single frame
#[derive(Copy, Clone, Debug)]
pub struct RenderSettings {
    pub res: Vec2<u16>,
    pub integrator: WhittedParams,
    /// Use a thread per logical core instead of per physical core
    pub match_logical_cores: bool,
}

pub struct Renderer {
    manager: Option<RenderManager>,
    render_in_progress: bool,
    render_id: usize,
    interrupt: Arc<AtomicBool>,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer {
    pub fn new() -> Self {
        Self {
            manager: None,
            render_in_progress: false,
            render_id: 0,
            interrupt: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Checks if the render task is active.
    pub fn is_active(&self) -> bool {
        self.render_in_progress
    }

    /// Waits for the render task to end and returns its result
    pub fn wait_result(&mut self) -> Result<RenderResult, String> {
        if !self.render_in_progress {
            return Err("No render in progress".into());
        }
        let manager = match self.manager.as_ref() {
            Some(manager) => manager,
            None => return Err("No render manager".into()),
        };

        loop {
            match manager.rx.recv() {
                Ok(RenderManagerResult {
                    render_id,
                    secs,
                    ray_count,
                }) => {
                    if render_id == self.render_id {
                        kagami_debug!("wait_result: Render job has finished");
                        self.render_in_progress = false;

                        return Ok(RenderResult { secs, ray_count });
                    }
                    assert!(
                        render_id < self.render_id,
                        "Render result appears to be from the future"
                    );
                    kagami_debug!("wait_result: Stale render job has finished");
                }
                Err(RecvError {}) => {
                    return Err("Render manager disconnected".into());
                }
            }
        }
    }

    /// Returns the `RenderResult` if the task has finished.
    pub fn check_result(&mut self) -> Option<RenderResult> {
        if !self.render_in_progress {
            return None;
        }
        let manager = self.manager.as_ref()?;

        loop {
            match manager.rx.try_recv() {
                Ok(RenderManagerResult {
                    render_id,
                    secs,
                    ray_count,
                }) => {
                    if render_id == self.render_id {
                        kagami_debug!("check_result: Render job has finished");
                        self.render_in_progress = false;
                        return Some(RenderResult { secs, ray_count });
                    }
                    kagami_debug!("check_result: Stale render job has finished");
                }
                Err(TryRecvError::Empty) => {
                    kagami_trace!("check_result: Render job still running");
                    return None;
                }
                Err(TryRecvError::Disconnected) => {
                    panic!("check_result: Render manager has been terminated");
                }
            }
        }
    }

    pub fn kill(&mut self) {
        if let Some(RenderManager { tx, handle, .. }) = self.manager.take() {
            self.interrupt.store(true, Ordering::Relaxed);
            drop(tx.send(None));
            if handle.join().is_err() {
                kagami_error!("kill: Render manager panicked");
            }
        }
        self.render_in_progress = false;
    }

    /// Launch a new render task, overriding the previous one if one is already running.
    pub fn launch(
        &mut self,
        scene: Arc<Scene>,
        camera_params: CameraParameters,
        film: Arc<Mutex<Film>>,
        settings: RenderSettings,
    ) {
        self.render_id += 1;

        let interrupt = &self.interrupt;
        let manager = self.manager.get_or_insert_with(|| {
            let (tx, manager_rx) = channel();
            let (manager_tx, rx) = channel();

            let handle = launch_manager(manager_tx, manager_rx, Arc::clone(interrupt));

            RenderManager { tx, rx, handle }
        });

        // Stop the previous frame early, the manager clears this when it picks up new work
        self.interrupt.store(true, Ordering::Relaxed);

        kagami_debug!("launch: Sending new payload");
        match manager.tx.send(Some(RenderManagerPayload {
            render_id: self.render_id,
            scene,
            camera_params,
            film,
            settings,
        })) {
            Ok(_) => {
                self.render_in_progress = true;
            }
            Err(SendError(_)) => {
                panic!("launch: Render manager has been terminated");
            }
        }
    }
}

impl Drop for Renderer {
    fn drop(&mut self) {
        self.kill();
    }
}

fn launch_manager(
    to_parent: Sender<RenderManagerResult>,
    from_parent: Receiver<Option<RenderManagerPayload>>,
    interrupt: Arc<AtomicBool>,
) -> JoinHandle<()> {
    expect!(
        std::thread::Builder::new()
            .name("RenderManager".into())
            .spawn(move || {
                kagami_trace!("Render manager: Begin");
                let mut worker_pool: Option<(usize, rayon::ThreadPool)> = None;

                'thread: loop {
                    // Blocking recv to avoid spinlock when there is no need to message the parent
                    let mut newest_msg = match from_parent.recv() {
                        Ok(msg) => msg,
                        Err(RecvError {}) => {
                            panic!("Render manager: Receive channel disconnected")
                        }
                    };
                    // Skip payloads that were already replaced
                    loop {
                        match from_parent.try_recv() {
                            Ok(msg) => {
                                kagami_debug!("Render manager: Skipping stale payload");
                                newest_msg = msg;
                            }
                            Err(TryRecvError::Empty) => break,
                            Err(TryRecvError::Disconnected) => {
                                panic!("Render manager: Receive channel disconnected")
                            }
                        }
                    }

                    let payload = match newest_msg {
                        Some(payload) => {
                            kagami_debug!("Render manager: Received new payload");
                            payload
                        }
                        None => {
                            kagami_debug!("Render manager: Killed by parent");
                            break 'thread;
                        }
                    };
                    interrupt.store(false, Ordering::Relaxed);

                    let thread_count = if payload.settings.match_logical_cores {
                        num_cpus::get()
                    } else {
                        num_cpus::get_physical()
                    };
                    let pool = match worker_pool.take() {
                        Some((count, p)) if count == thread_count => {
                            worker_pool.insert((count, p))
                        }
                        _ => {
                            kagami_info!("Render manager: Using {} render threads", thread_count);
                            let p = expect!(
                                rayon::ThreadPoolBuilder::new()
                                    .num_threads(thread_count)
                                    .thread_name(|i| format!("RenderWorker{}", i))
                                    .build(),
                                "Failed to build render thread pool"
                            );
                            worker_pool.insert((thread_count, p))
                        }
                    };

                    let render_start = Instant::now();
                    match render_frame(&payload, &pool.1, &interrupt) {
                        Some(ray_count) => {
                            let secs = (render_start.elapsed().as_micros() as f32) * 1e-6;
                            kagami_trace!("Render manager: Report back");
                            if let Err(why) = to_parent.send(RenderManagerResult {
                                render_id: payload.render_id,
                                secs,
                                ray_count,
                            }) {
                                kagami_error!("Render manager: Error notifying parent: {}", why);
                            }
                        }
                        None => {
                            kagami_debug!(
                                "Render manager: Render {} interrupted",
                                payload.render_id
                            );
                        }
                    }
                }

                kagami_debug!("Render manager: End");
            }),
        "Failed to spawn RenderManager"
    )
}

// Renders into a back buffer and swaps it into the shared film once every group has finished
fn render_frame(
    payload: &RenderManagerPayload,
    pool: &rayon::ThreadPool,
    interrupt: &AtomicBool,
) -> Option<usize> {
    let RenderSettings {
        res, integrator, ..
    } = payload.settings;

    let camera = Camera::new(&payload.camera_params, res);
    let integrator = Whitted::new(integrator);
    let grid = DispatchGrid::new(vec2(res.x as u32, res.y as u32));
    kagami_trace!(
        "Render manager: Dispatching {}x{} groups",
        grid.groups.x,
        grid.groups.y
    );

    let mut back = Film::new(res);
    let stats = pool.install(|| {
        dispatch(
            &grid,
            &camera,
            &payload.scene,
            &integrator,
            &mut back,
            interrupt,
        )
    })?;

    {
        kagami_trace!("Render manager: Waiting for lock on film");
        let mut film = expect!(payload.film.lock(), "Film lock poisoned");
        kagami_trace!("Render manager: Acquired film");
        film.present(back);
        kagami_trace!("Render manager: Releasing film");
    }

    Some(stats.ray_count)
}

struct RenderManagerResult {
    render_id: usize,
    secs: f32,
    ray_count: usize,
}

struct RenderManager {
    tx: Sender<Option<RenderManagerPayload>>,
    rx: Receiver<RenderManagerResult>,
    handle: JoinHandle<()>,
}

struct RenderManagerPayload {
    render_id: usize,
    scene: Arc<Scene>,
    camera_params: CameraParameters,
    film: Arc<Mutex<Film>>,
    settings: RenderSettings,
}
