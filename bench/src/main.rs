use std::io::prelude::*;
use std::sync::atomic::AtomicBool;
use std::time::Instant;

use kagami::{
    camera::Camera,
    film::Film,
    integrators::{Whitted, WhittedParams},
    math::vec2,
    renderer::{dispatch, DispatchGrid},
    scene::Scene,
};

const ITERATIONS: usize = 20;

fn bench_frame(scene: &Scene, camera: &Camera, width: u16, height: u16, max_depth: u32) {
    let integrator = Whitted::new(WhittedParams { max_depth });
    let grid = DispatchGrid::new(vec2(width as u32, height as u32));
    let interrupt = AtomicBool::new(false);
    let mut film = Film::new(vec2(width, height));

    let mut ray_count = 0;
    let start = Instant::now();
    for _ in 0..ITERATIONS {
        let stats = dispatch(&grid, camera, scene, &integrator, &mut film, &interrupt)
            .expect("Nothing should interrupt the bench");
        ray_count += stats.ray_count;
    }
    let elapsed_s = start.elapsed().as_secs_f64();
    let ms_per_frame = elapsed_s * 1e3 / (ITERATIONS as f64);
    let mrays_per_s = (ray_count as f64) / elapsed_s * 1e-6;
    println!(
        "{:4}x{:<4} depth {:3} took {:6.2} ms per frame, {:7.2} Mrays/s",
        width, height, max_depth, ms_per_frame, mrays_per_s
    );
}

fn main() {
    let (scene, camera_params) = Scene::mirror_room();

    for &(width, height) in &[(640u16, 480u16), (1000, 1000)] {
        let camera = Camera::new(&camera_params, vec2(width, height));
        for &max_depth in &[0, 1, 3, 10] {
            bench_frame(&scene, &camera, width, height, max_depth);
        }
    }

    println!("Press enter to quit...");
    // Read a single byte and discard
    let _ = std::io::stdin().read(&mut [0u8]).unwrap();
}
