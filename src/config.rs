//! Tool configuration
//!
//! Defaults cover the usual layout (a `venv/` next to the scripts, ffmpeg on
//! `PATH`). An optional TOML file can override any of them.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

/// Environment variable naming an explicit config file
pub const CONFIG_ENV: &str = "CLIP_TOOLS_CONFIG";

/// Config file looked up next to the executable
pub const CONFIG_FILE_NAME: &str = "clip-tools.toml";

/// Resolved configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// ffmpeg executable
    pub ffmpeg: String,
    /// Interpreter name used in the generated transcription command
    pub python: String,
    /// Virtualenv directory, relative to the base directory
    pub venv_dir: String,
    /// Script run by the launcher
    pub download_script: String,
    /// Script referenced by the generated transcription command
    pub transcribe_script: String,
    pub log_level: String,
    pub log_format: LogFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ffmpeg: "ffmpeg".to_string(),
            python: "python".to_string(),
            venv_dir: "venv".to_string(),
            download_script: "youtube_download.py".to_string(),
            transcribe_script: "transcribe_video.py".to_string(),
            log_level: "info".to_string(),
            log_format: LogFormat::Pretty,
        }
    }
}

impl Config {
    /// Interpreter inside the virtualenv
    pub fn venv_python(&self, base_dir: &Path) -> PathBuf {
        base_dir.join(&self.venv_dir).join("bin").join("python")
    }

    /// Activation script inside the virtualenv
    pub fn venv_activate(&self, base_dir: &Path) -> PathBuf {
        base_dir.join(&self.venv_dir).join("bin").join("activate")
    }

    /// Load configuration from `CLIP_TOOLS_CONFIG`, or from `clip-tools.toml`
    /// in `base_dir`. A missing file yields defaults.
    pub fn load(base_dir: &Path) -> Result<Self, ConfigError> {
        let path = match std::env::var_os(CONFIG_ENV) {
            Some(path) => PathBuf::from(path),
            None => base_dir.join(CONFIG_FILE_NAME),
        };

        if !path.exists() {
            return Ok(Config::default());
        }

        Ok(ConfigFile::from_file(&path)?.into_config())
    }
}

/// On-disk configuration format; every key is optional
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfigFile {
    pub tools: Option<ToolSettings>,
    pub paths: Option<PathSettings>,
    pub logging: Option<LoggingSettings>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ToolSettings {
    pub ffmpeg: Option<String>,
    pub python: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PathSettings {
    pub venv_dir: Option<String>,
    pub download_script: Option<String>,
    pub transcribe_script: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoggingSettings {
    /// Log level (trace, debug, info, warn, error)
    pub level: Option<String>,
    /// Output format (json, pretty)
    pub format: Option<String>,
}

impl ConfigFile {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn into_config(self) -> Config {
        let defaults = Config::default();
        let tools = self.tools.unwrap_or_default();
        let paths = self.paths.unwrap_or_default();
        let logging = self.logging.unwrap_or_default();

        let log_format = match logging.format.as_deref() {
            Some(format) if format.eq_ignore_ascii_case("json") => LogFormat::Json,
            _ => LogFormat::Pretty,
        };

        Config {
            ffmpeg: tools.ffmpeg.unwrap_or(defaults.ffmpeg),
            python: tools.python.unwrap_or(defaults.python),
            venv_dir: paths.venv_dir.unwrap_or(defaults.venv_dir),
            download_script: paths.download_script.unwrap_or(defaults.download_script),
            transcribe_script: paths.transcribe_script.unwrap_or(defaults.transcribe_script),
            log_level: logging.level.unwrap_or(defaults.log_level),
            log_format,
        }
    }
}
