mod macros;

pub mod app;
pub mod camera;
pub mod film;
pub mod hit;
pub mod integrators;
pub mod lights;
pub mod math;
pub mod renderer;
pub mod scene;
pub mod shapes;
pub mod visibility;
