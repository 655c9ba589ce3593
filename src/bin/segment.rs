use std::path::PathBuf;
use std::process::ExitCode;

use clip_tools::launcher::exe_dir;
use clip_tools::{SegmentError, Segmenter};

fn main() -> ExitCode {
    let args: Vec<_> = std::env::args_os().collect();

    let base_dir = exe_dir().unwrap_or_else(|_| PathBuf::from("."));
    let config = clip_tools::init(&base_dir);

    if args.len() != 3 {
        eprintln!("{}", SegmentError::Usage);
        return ExitCode::FAILURE;
    }
    let video = PathBuf::from(&args[1]);
    let timestamps = PathBuf::from(&args[2]);

    let result = Segmenter::with_ffmpeg(config, base_dir)
        .and_then(|segmenter| segmenter.run(&video, &timestamps));

    match result {
        Ok(report) => {
            tracing::info!(
                "Done: {} segments, {} failed, {} lines skipped",
                report.outputs.len(),
                report.failed,
                report.skipped
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
