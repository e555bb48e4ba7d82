use std::{borrow::Cow, sync::Mutex};

use crate::{
    film::Film,
    kagami_debug, kagami_trace,
    math::{Vec2, Vec4},
};

/// Keeps a GPU copy of the [Film], refreshed whenever the film is dirty.
pub struct FilmTexture {
    texture: glium::Texture2d,
}

impl FilmTexture {
    pub fn new(display: &glium::Display) -> Result<Self, glium::texture::TextureCreationError> {
        let texture = glium::Texture2d::empty_with_format(
            display,
            FILM_FORMAT,
            glium::texture::MipmapsOption::NoMipmap,
            16,
            16,
        )?;

        Ok(Self { texture })
    }

    /// Returns the up-to-date texture for `film`.
    pub fn update<'a, 'b>(
        &'a mut self,
        display: &glium::Display,
        film: &'b Mutex<Film>,
    ) -> Result<&'a glium::Texture2d, UpdateError<'b>> {
        kagami_trace!("update_film_texture: Waiting for lock on film");
        let mut film = film.lock().map_err(UpdateError::FilmPoisonError)?;
        kagami_trace!("update_film_texture: Acquired film");

        if film.dirty() {
            kagami_debug!("update_film_texture: Film is dirty");
            // Frames are presented whole so the texture is rebuilt from the full film
            self.texture = glium::Texture2d::with_format(
                display,
                &*film,
                FILM_FORMAT,
                glium::texture::MipmapsOption::NoMipmap,
            )
            .map_err(UpdateError::TextureCreationError)?;

            film.clear_dirty();
            kagami_debug!("update_film_texture: Texture created");
        }

        kagami_trace!("update_film_texture: Releasing film");
        Ok(&self.texture)
    }
}

const FILM_FORMAT: glium::texture::UncompressedFloatFormat =
    glium::texture::UncompressedFloatFormat::F32F32F32F32;

unsafe impl glium::texture::PixelValue for Vec4<f32> {
    fn get_format() -> glium::texture::ClientFormat {
        glium::texture::ClientFormat::F32F32F32F32
    }
}

impl<'a> glium::texture::Texture2dDataSource<'a> for &'a Film {
    type Data = Vec4<f32>;

    fn into_raw(self) -> glium::texture::RawImage2d<'a, Vec4<f32>> {
        let Vec2 { x, y } = self.res();
        glium::texture::RawImage2d {
            data: Cow::from(self.pixels().as_slice()),
            width: x as u32,
            height: y as u32,
            format: glium::texture::ClientFormat::F32F32F32F32,
        }
    }
}

#[derive(Debug)]
pub enum UpdateError<'a> {
    FilmPoisonError(std::sync::PoisonError<std::sync::MutexGuard<'a, Film>>),
    TextureCreationError(glium::texture::TextureCreationError),
}
