use rayon::prelude::*;
use std::sync::atomic::{AtomicBool, Ordering};

use super::kernel::{render_pixel, PixelResult};
use crate::{
    camera::Camera,
    film::{Film, FilmTile},
    integrators::Integrator,
    math::{vec2, Vec2},
    scene::Scene,
};

/// Side length of a square work group in invocations
pub const GROUP_DIM: u32 = 8;

/// Two-dimensional grid of work groups covering a frame
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DispatchGrid {
    /// Resolution of the frame being rendered
    pub frame: Vec2<u32>,
    /// Invocations per axis, the frame dimensions rounded up to powers of two
    pub extent: Vec2<u32>,
    /// Work groups per axis
    pub groups: Vec2<u32>,
}

impl DispatchGrid {
    pub fn new(frame: Vec2<u32>) -> Self {
        let extent = vec2(frame.x.next_power_of_two(), frame.y.next_power_of_two());
        let groups = vec2(
            (extent.x + GROUP_DIM - 1) / GROUP_DIM,
            (extent.y + GROUP_DIM - 1) / GROUP_DIM,
        );
        Self {
            frame,
            extent,
            groups,
        }
    }

    pub fn group_count(&self) -> usize {
        (self.groups.x as usize) * (self.groups.y as usize)
    }

    /// Returns the first invocation of group `i` in row-major group order.
    pub fn group_origin(&self, i: usize) -> Vec2<u32> {
        let gx = (i as u32) % self.groups.x;
        let gy = (i as u32) / self.groups.x;
        vec2(gx * GROUP_DIM, gy * GROUP_DIM)
    }
}

/// Totals of a finished dispatch
pub struct DispatchStats {
    pub ray_count: usize,
    /// Groups that produced at least one pixel
    pub active_groups: usize,
}

/// Runs every work group of `grid` on the current rayon pool and writes the results to `film`.
///
/// Returns `None` if `interrupt` was raised before all groups finished, `film` is left
/// partially written in that case.
pub fn dispatch(
    grid: &DispatchGrid,
    camera: &Camera,
    scene: &Scene,
    integrator: &(dyn Integrator + Sync),
    film: &mut Film,
    interrupt: &AtomicBool,
) -> Option<DispatchStats> {
    let film_ref = &*film;
    let results: Vec<Option<(FilmTile, usize)>> = (0..grid.group_count())
        .into_par_iter()
        .map(|i| {
            if interrupt.load(Ordering::Relaxed) {
                return None;
            }
            let origin = grid.group_origin(i);
            Some(render_group(origin, grid, camera, scene, integrator, film_ref))
        })
        .collect();

    if interrupt.load(Ordering::Relaxed) || results.iter().any(Option::is_none) {
        return None;
    }

    let mut stats = DispatchStats {
        ray_count: 0,
        active_groups: 0,
    };
    for (tile, rays) in results.into_iter().flatten() {
        stats.ray_count += rays;
        if !tile.is_empty() {
            stats.active_groups += 1;
            film.update_tile(&tile);
        }
    }

    Some(stats)
}

// Runs all invocations of a single group, the tile only covers its in-frame part
fn render_group(
    origin: Vec2<u32>,
    grid: &DispatchGrid,
    camera: &Camera,
    scene: &Scene,
    integrator: &(dyn Integrator + Sync),
    film: &Film,
) -> (FilmTile, usize) {
    let to_film = |v: u32| v.min(u16::MAX as u32) as u16;
    let mut tile = film.tile(
        vec2(to_film(origin.x), to_film(origin.y)),
        vec2(
            to_film(origin.x + GROUP_DIM),
            to_film(origin.y + GROUP_DIM),
        ),
    );
    let tile_width = tile.width() as u32;

    let mut ray_count = 0;
    for local_y in 0..GROUP_DIM {
        for local_x in 0..GROUP_DIM {
            let texel = vec2(origin.x + local_x, origin.y + local_y);
            if let Some(PixelResult {
                color,
                ray_scene_intersections,
            }) = render_pixel(texel, grid.frame, camera, scene, integrator)
            {
                tile.pixels[(local_y * tile_width + local_x) as usize] = color;
                ray_count += ray_scene_intersections;
            }
        }
    }

    (tile, ray_count)
}
