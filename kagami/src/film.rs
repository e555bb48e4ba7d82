use crate::{
    kagami_error,
    math::{vec2, Vec2, Vec4},
};

/// A film tile used for rendering.
#[derive(Debug, Clone)]
pub struct FilmTile {
    /// Inclusive minimum [Film] pixel of this tile
    pub p_min: Vec2<u16>,
    /// Exclusive maximum [Film] pixel of this tile
    pub p_max: Vec2<u16>,
    /// Pixel values in this tile stored in row-major rgba order
    pub pixels: Vec<Vec4<f32>>,
    // Generation of this tile. Used to verify inputs in update_tile.
    generation: u64,
}

impl FilmTile {
    /// Creates a new `FilmTile` covering `[p_min, p_max)`.
    pub fn new(p_min: Vec2<u16>, p_max: Vec2<u16>, generation: u64) -> Self {
        let width = p_max.x.saturating_sub(p_min.x) as usize;
        let height = p_max.y.saturating_sub(p_min.y) as usize;

        FilmTile {
            p_min,
            p_max,
            pixels: vec![Vec4::zeros(); width * height],
            generation,
        }
    }

    pub fn width(&self) -> u16 {
        self.p_max.x.saturating_sub(self.p_min.x)
    }

    pub fn height(&self) -> u16 {
        self.p_max.y.saturating_sub(self.p_min.y)
    }

    pub fn is_empty(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }
}

/// Rgba pixel buffer with the bottom row first.
pub struct Film {
    // Resolution of the stored pixel buffer.
    res: Vec2<u16>,
    // Pixel values.
    pixels: Vec<Vec4<f32>>,
    // Indicator for changed pixel values.
    dirty: bool,
    // Generation of the pixel buffer and tiles in flight. Used to verify inputs in update_tile.
    generation: u64,
}

impl Default for Film {
    fn default() -> Self {
        Self::new(vec2(4, 4))
    }
}

impl Film {
    /// Creates a black `Film` with resolution `res`.
    pub fn new(res: Vec2<u16>) -> Self {
        Self {
            res,
            pixels: vec![Vec4::zeros(); (res.x as usize) * (res.y as usize)],
            dirty: true,
            generation: 0,
        }
    }

    /// Returns the resolution of the currently stored pixels of this `Film`.
    pub fn res(&self) -> Vec2<u16> {
        self.res
    }

    /// Returns the generation of the current pixel buffer and corresponding tiles.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn pixels(&self) -> &Vec<Vec4<f32>> {
        &self.pixels
    }

    pub fn pixel(&self, p: Vec2<u16>) -> Option<Vec4<f32>> {
        if p.x < self.res.x && p.y < self.res.y {
            Some(self.pixels[(p.y as usize) * (self.res.x as usize) + (p.x as usize)])
        } else {
            None
        }
    }

    /// Clears the indicator for changed pixel values in this `Film`.
    pub fn clear_dirty(&mut self) {
        self.dirty = false;
    }

    /// Returns `true` if this `Film`s pixels have been written to since the last
    /// call to its [Film::clear_dirty].
    pub fn dirty(&self) -> bool {
        self.dirty
    }

    /// Creates a blank [FilmTile] of the current generation, clipped to the film.
    pub fn tile(&self, p_min: Vec2<u16>, p_max: Vec2<u16>) -> FilmTile {
        let p_min = p_min.min(self.res);
        let p_max = p_max.min(self.res);
        FilmTile::new(p_min, p_max, self.generation)
    }

    /// Updates this `Film` with the pixel values in a [FilmTile].
    pub fn update_tile(&mut self, tile: &FilmTile) {
        if tile.generation != self.generation {
            kagami_error!(
                "Tile generation {} doesn't match film generation {}",
                tile.generation,
                self.generation
            );
            return;
        }

        let tile_min = tile.p_min;
        let tile_max = tile.p_max;

        if tile_max.x > self.res.x || tile_max.y > self.res.y {
            kagami_error!(
                "Tile doesn't fit film ({:?} {:?} {:?})",
                self.res,
                tile_min,
                tile_max
            );
            return;
        }

        let tile_width = tile.width() as usize;

        // Copy pixels over to the film
        for (tile_row, film_row) in ((tile_min.y as usize)..(tile_max.y as usize)).enumerate() {
            let film_row_offset = film_row * (self.res.x as usize);

            let film_slice_start = film_row_offset + (tile_min.x as usize);
            let film_slice_end = film_row_offset + (tile_max.x as usize);

            let tile_slice_start = tile_row * tile_width;
            let tile_slice_end = (tile_row + 1) * tile_width;

            let film_slice = &mut self.pixels[film_slice_start..film_slice_end];
            let tile_slice = &tile.pixels[tile_slice_start..tile_slice_end];

            film_slice.copy_from_slice(tile_slice);
        }
        self.dirty = true;
    }

    /// Takes the pixels of a fully rendered back buffer.
    ///
    /// Tiles of earlier generations are rejected afterwards.
    pub fn present(&mut self, back: Film) {
        self.generation = self.generation.max(back.generation) + 1;
        self.res = back.res;
        self.pixels = back.pixels;
        self.dirty = true;
    }
}
