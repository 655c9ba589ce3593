use std::path::Path;
use std::process::{Command, Stdio};

use crate::segment::Segment;

/// How one extraction ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractStatus {
    Success,
    /// Non-zero exit; `code` is `None` when killed by a signal
    Failed { code: Option<i32> },
}

/// Cuts one segment out of a source video
pub trait Extractor {
    fn extract(&self, input: &Path, segment: &Segment) -> std::io::Result<ExtractStatus>;
}

/// Runs the ffmpeg CLI with stream copy
#[derive(Debug, Clone)]
pub struct FfmpegExtractor {
    program: String,
}

impl FfmpegExtractor {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Build the extraction command. ffmpeg must never read stdin here: the
    /// caller may itself be fed from a redirected file.
    pub fn command(&self, input: &Path, segment: &Segment) -> Command {
        let mut ffmpeg_command = Command::new(&self.program);
        ffmpeg_command
            .arg("-nostdin")
            .arg("-hide_banner")
            .arg("-loglevel")
            .arg("error")
            .arg("-stats")
            .arg("-y")
            .arg("-i")
            .arg(input)
            .arg("-ss")
            .arg(segment.range.start.to_string())
            .arg("-to")
            .arg(segment.range.end.to_string())
            .arg("-c")
            .arg("copy")
            .arg(&segment.output)
            .stdin(Stdio::null());
        ffmpeg_command
    }
}

impl Extractor for FfmpegExtractor {
    fn extract(&self, input: &Path, segment: &Segment) -> std::io::Result<ExtractStatus> {
        let mut ffmpeg_command = self.command(input, segment);

        let command_str = format!(
            "{:?} {}",
            ffmpeg_command.get_program(),
            ffmpeg_command
                .get_args()
                .map(|arg| arg.to_string_lossy())
                .collect::<Vec<_>>()
                .join(" ")
        );
        tracing::debug!("Executing: {}", command_str);

        let status = ffmpeg_command.status()?;
        if status.success() {
            Ok(ExtractStatus::Success)
        } else {
            Ok(ExtractStatus::Failed {
                code: status.code(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timestamp::RangeParser;
    use std::path::PathBuf;

    fn segment() -> Segment {
        Segment {
            sequence: 2,
            range: RangeParser::new()
                .unwrap()
                .parse_line("00:01:00 - 00:02:30")
                .unwrap(),
            output: PathBuf::from("/out/input_2.mp4"),
        }
    }

    #[test]
    fn test_command_args() {
        let extractor = FfmpegExtractor::new("ffmpeg");
        let command = extractor.command(Path::new("/videos/input.mp4"), &segment());

        assert_eq!(command.get_program(), "ffmpeg");
        let args: Vec<_> = command
            .get_args()
            .map(|a| a.to_string_lossy().into_owned())
            .collect();
        assert_eq!(
            args,
            vec![
                "-nostdin",
                "-hide_banner",
                "-loglevel",
                "error",
                "-stats",
                "-y",
                "-i",
                "/videos/input.mp4",
                "-ss",
                "00:01:00",
                "-to",
                "00:02:30",
                "-c",
                "copy",
                "/out/input_2.mp4",
            ]
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_exit_status_is_reported() {
        let ok = FfmpegExtractor::new("true");
        assert_eq!(
            ok.extract(Path::new("in.mp4"), &segment()).unwrap(),
            ExtractStatus::Success
        );

        let failing = FfmpegExtractor::new("false");
        assert_eq!(
            failing.extract(Path::new("in.mp4"), &segment()).unwrap(),
            ExtractStatus::Failed { code: Some(1) }
        );
    }

    #[test]
    fn test_missing_program_is_io_error() {
        let extractor = FfmpegExtractor::new("definitely-not-an-ffmpeg-binary");
        assert!(extractor.extract(Path::new("in.mp4"), &segment()).is_err());
    }
}
