mod cli;
mod headless;
mod renderpasses;
mod util;
mod window;

pub use cli::{Args, LogLevel};
pub use headless::render as render_headless;
pub use util::{exr_path, try_load_scene, write_exr};
pub use window::Window;

use std::{fmt, path::PathBuf};

use crate::{
    integrators::{WhittedParams, MAX_DEPTH},
    kagami_warn,
    math::{vec2, Vec2},
};

/// Validated startup configuration
#[derive(Clone, Debug)]
pub struct InitialSettings {
    pub res: Vec2<u16>,
    pub integrator: WhittedParams,
    pub scene_path: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub single_frame: bool,
    pub match_logical_cores: bool,
}

impl InitialSettings {
    /// Validates the resolution and clamps the depth into `[0, MAX_DEPTH]`.
    pub fn from_args(args: &Args) -> Result<Self, SettingsError> {
        let max = u16::MAX as i64;
        if args.width <= 0 || args.height <= 0 || args.width > max || args.height > max {
            return Err(SettingsError::InvalidResolution {
                width: args.width,
                height: args.height,
            });
        }

        let max_depth = args.depth.clamp(0, MAX_DEPTH as i64);
        if max_depth != args.depth {
            kagami_warn!("Depth {} clamped to {}", args.depth, max_depth);
        }

        if let Some(output) = &args.output {
            let is_exr = output
                .extension()
                .map_or(false, |ext| ext.eq_ignore_ascii_case("exr"));
            if !is_exr {
                return Err(SettingsError::InvalidOutput(output.clone()));
            }
        }

        Ok(Self {
            res: vec2(args.width as u16, args.height as u16),
            integrator: WhittedParams {
                max_depth: max_depth as u32,
            },
            scene_path: args.scene.clone(),
            output: args.output.clone(),
            single_frame: args.single_frame,
            match_logical_cores: args.match_logical_cores,
        })
    }
}

#[derive(Debug)]
pub enum SettingsError {
    InvalidResolution { width: i64, height: i64 },
    InvalidOutput(PathBuf),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::InvalidResolution { width, height } => write!(
                f,
                "Invalid resolution {}x{}, expected both to be in [1, {}]",
                width,
                height,
                u16::MAX
            ),
            SettingsError::InvalidOutput(path) => write!(
                f,
                "Output '{}' should be an .exr file",
                path.to_string_lossy()
            ),
        }
    }
}

impl std::error::Error for SettingsError {}
