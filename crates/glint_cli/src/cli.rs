use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use log::LevelFilter;

/// Log levels selectable on the command line
#[derive(Debug, Clone, Copy, ValueEnum)]
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

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "glint")]
#[command(about = "A Whitted-style sphere ray tracer")]
pub struct Args {
    /// Scene file (JSON) to render
    #[arg(short, long, conflicts_with = "builtin")]
    pub scene: Option<PathBuf>,

    /// Built-in scene to render when no scene file is given
    #[arg(short, long, default_value = "lit_spheres")]
    pub builtin: String,

    /// Image width in pixels
    #[arg(long, default_value_t = 1024)]
    pub width: u32,

    /// Image height in pixels
    #[arg(long, default_value_t = 1024)]
    pub height: u32,

    /// Output image path (always written as PNG)
    #[arg(short, long, default_value = "render.png")]
    pub output: PathBuf,

    /// Render on a single thread
    #[arg(long)]
    pub serial: bool,

    /// Logging level (RUST_LOG takes precedence when set)
    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,
}
