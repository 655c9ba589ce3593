//! Runs the download script with the virtualenv interpreter that sits next
//! to the launcher.

use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};

use crate::config::Config;
use crate::error::LaunchError;

#[derive(Debug, Clone)]
pub struct Launcher {
    base_dir: PathBuf,
    config: Config,
}

impl Launcher {
    pub fn new(base_dir: impl Into<PathBuf>, config: Config) -> Self {
        Self {
            base_dir: base_dir.into(),
            config,
        }
    }

    /// Interpreter and script paths, both required to be regular files
    pub fn check(&self) -> Result<(PathBuf, PathBuf), LaunchError> {
        let python = self.config.venv_python(&self.base_dir);
        if !python.is_file() {
            return Err(LaunchError::MissingInterpreter(python));
        }

        let script = self.base_dir.join(&self.config.download_script);
        if !script.is_file() {
            return Err(LaunchError::MissingScript(script));
        }

        Ok((python, script))
    }

    /// Run the script and wait for it. Stdio is inherited: the download
    /// script is interactive.
    pub fn run(&self) -> Result<ExitStatus, LaunchError> {
        let (python, script) = self.check()?;

        tracing::info!("Executing: {} {}", python.display(), script.display());
        let status = Command::new(&python)
            .arg(&script)
            .status()
            .map_err(|source| LaunchError::Spawn {
                program: python.clone(),
                source,
            })?;

        tracing::info!("{} finished with {}", script.display(), status);
        Ok(status)
    }
}

/// Canonical directory of the running executable. Both tools resolve the
/// virtualenv from here, whatever the current working directory.
pub fn exe_dir() -> std::io::Result<PathBuf> {
    let exe = std::env::current_exe()?.canonicalize()?;
    Ok(exe
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(".")))
}
