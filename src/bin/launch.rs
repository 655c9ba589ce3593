use std::process::ExitCode;

use clip_tools::launcher::exe_dir;
use clip_tools::{LaunchError, Launcher};

fn main() -> ExitCode {
    let base_dir = match exe_dir() {
        Ok(dir) => dir,
        Err(e) => {
            eprintln!("Error: {}", LaunchError::BaseDir(e));
            return ExitCode::FAILURE;
        }
    };
    let config = clip_tools::init(&base_dir);

    // The script's own exit status is not propagated
    match Launcher::new(base_dir, config).run() {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
