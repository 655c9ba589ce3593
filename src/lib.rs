//! Helpers around a YouTube download/transcription workflow.
//!
//! `segment` cuts a video into the ranges listed in a timestamps file using
//! ffmpeg stream copy, then appends a ready-to-run transcription command to
//! that file. `launch` runs the download script inside its virtualenv.

pub mod command_line;
pub mod config;
pub mod error;
pub mod ffmpeg;
pub mod launcher;
pub mod logging;
pub mod segment;
pub mod segmenter;
pub mod timestamp;

use std::path::Path;

pub use config::Config;
pub use error::{ConfigError, LaunchError, SegmentError};
pub use launcher::Launcher;
pub use segmenter::{Report, Segmenter};

/// Load configuration for `base_dir` and start logging. A broken config
/// file is reported once logging is up and replaced by defaults.
pub fn init(base_dir: &Path) -> Config {
    let (config, load_error) = match Config::load(base_dir) {
        Ok(config) => (config, None),
        Err(e) => (Config::default(), Some(e)),
    };

    logging::init_logging(&config);

    if let Some(e) = load_error {
        tracing::warn!("{}. Using defaults.", e);
    }
    tracing::debug!("Configuration loaded: {:?}", config);
    config
}
