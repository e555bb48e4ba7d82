mod film_texture;
mod scale_output;

pub use film_texture::FilmTexture;
pub use scale_output::ScaleOutput;
