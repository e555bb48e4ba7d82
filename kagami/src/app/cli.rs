use clap::{Parser, ValueEnum};
use log::LevelFilter;
use std::path::PathBuf;
use strum::Display;

#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum, Display)]
#[strum(serialize_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "kagami")]
#[command(about = "Mirror-reflection ray tracer for spheres and boxes")]
pub struct Args {
    /// Number of shaded bounces per pixel, clamped to [0, 100]
    #[arg(long, allow_negative_numbers = true)]
    pub depth: i64,

    /// Output width in pixels
    #[arg(long, allow_negative_numbers = true)]
    pub width: i64,

    /// Output height in pixels
    #[arg(long, allow_negative_numbers = true)]
    pub height: i64,

    /// YAML scene to render instead of the built-in room
    #[arg(long)]
    pub scene: Option<PathBuf>,

    /// Render a single frame into this EXR file without opening a window
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Render once instead of continuously
    #[arg(long)]
    pub single_frame: bool,

    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    /// Use a render thread per logical core instead of per physical core
    #[arg(long)]
    pub match_logical_cores: bool,
}
