use std::path::PathBuf;
use thiserror::Error;

/// Errors that stop the segmenter before any segment is cut
#[derive(Error, Debug)]
pub enum SegmentError {
    #[error("Usage: segment <video_path> <timestamps_path>")]
    Usage,

    #[error("Video file not found: {}", .0.display())]
    VideoNotFound(PathBuf),

    #[error("Invalid video file name: {}", .0.display())]
    InvalidVideoName(PathBuf),

    #[error("Invalid timestamp pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("IO error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Launcher pre-check and spawn failures
#[derive(Error, Debug)]
pub enum LaunchError {
    #[error("Python interpreter not found at {}", .0.display())]
    MissingInterpreter(PathBuf),

    #[error("Download script not found at {}", .0.display())]
    MissingScript(PathBuf),

    #[error("Could not determine launcher directory: {0}")]
    BaseDir(#[source] std::io::Error),

    #[error("Failed to execute {}: {source}", program.display())]
    Spawn {
        program: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Configuration file errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}
