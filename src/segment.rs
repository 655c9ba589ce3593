//! Turning a timestamps file into an ordered list of segments to cut.

use std::path::{Path, PathBuf};

use crate::timestamp::{RangeParser, TimeRange};

/// Video file name split at its last `.`.
///
/// A name without any `.` keeps the whole name as both parts, so
/// `clip` plans outputs like `clip_1.clip`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoName {
    pub base_name: String,
    pub extension: String,
}

impl VideoName {
    pub fn from_file_name(file_name: &str) -> Self {
        match file_name.rsplit_once('.') {
            Some((base, ext)) => VideoName {
                base_name: base.to_string(),
                extension: ext.to_string(),
            },
            None => VideoName {
                base_name: file_name.to_string(),
                extension: file_name.to_string(),
            },
        }
    }

    /// `None` when the path has no final component (`/`, `..`)
    pub fn from_path(path: &Path) -> Option<Self> {
        let file_name = path.file_name()?.to_string_lossy();
        Some(Self::from_file_name(&file_name))
    }

    pub fn segment_file_name(&self, sequence: usize) -> String {
        format!("{}_{}.{}", self.base_name, sequence, self.extension)
    }
}

/// One range to extract
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    /// 1-based, counted over valid lines only
    pub sequence: usize,
    pub range: TimeRange,
    pub output: PathBuf,
}

/// Result of scanning a timestamps file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Plan {
    pub segments: Vec<Segment>,
    /// Rejected lines, trimmed, in file order
    pub skipped: Vec<String>,
}

/// Walk the file contents line by line. Valid lines become segments numbered
/// in encounter order; every other line lands in `skipped`.
pub fn plan_segments(
    parser: &RangeParser,
    contents: &str,
    video: &VideoName,
    out_dir: &Path,
) -> Plan {
    contents.lines().fold(Plan::default(), |mut plan, line| {
        let line = line.trim();
        match parser.parse_line(line) {
            Some(range) => {
                let sequence = plan.segments.len() + 1;
                plan.segments.push(Segment {
                    sequence,
                    range,
                    output: out_dir.join(video.segment_file_name(sequence)),
                });
            }
            None => plan.skipped.push(line.to_string()),
        }
        plan
    })
}

/// Absolute directory holding the timestamps file. Segments are written
/// there whatever directory the video lives in.
pub fn resolve_output_dir(timestamps: &Path) -> std::io::Result<PathBuf> {
    let parent = match timestamps.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    };

    match parent.canonicalize() {
        Ok(dir) => Ok(dir),
        Err(e) => {
            tracing::debug!("Cannot canonicalize {}: {}", parent.display(), e);
            Ok(std::env::current_dir()?.join(parent))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parser() -> RangeParser {
        RangeParser::new().unwrap()
    }

    #[test]
    fn test_video_name_split_at_last_dot() {
        let name = VideoName::from_file_name("my.talk.final.mkv");
        assert_eq!(name.base_name, "my.talk.final");
        assert_eq!(name.extension, "mkv");
        assert_eq!(name.segment_file_name(3), "my.talk.final_3.mkv");
    }

    #[test]
    fn test_video_name_without_extension() {
        let name = VideoName::from_file_name("recording");
        assert_eq!(name.base_name, "recording");
        assert_eq!(name.extension, "recording");
        assert_eq!(name.segment_file_name(1), "recording_1.recording");
    }

    #[test]
    fn test_video_name_from_path() {
        let name = VideoName::from_path(Path::new("/videos/input.mp4")).unwrap();
        assert_eq!(name.segment_file_name(1), "input_1.mp4");
        assert_eq!(VideoName::from_path(Path::new("/")), None);
    }

    #[test]
    fn test_single_line() {
        let video = VideoName::from_file_name("input.mp4");
        let plan = plan_segments(&parser(), "00:00:10 - 00:00:20", &video, Path::new("/data"));

        assert_eq!(plan.segments.len(), 1);
        assert_eq!(plan.segments[0].sequence, 1);
        assert_eq!(plan.segments[0].output, PathBuf::from("/data/input_1.mp4"));
        assert_eq!(plan.segments[0].range.to_string(), "00:00:10 - 00:00:20");
        assert!(plan.skipped.is_empty());
    }

    #[test]
    fn test_sequence_counts_valid_lines_only() {
        let contents = "\n\
            00:00:00 - 00:01:00\n\
            garbage\n\
            \n\
            00:01:00 - 00:02:00\n\
            # a note\n\
            00:02:00 - 00:03:00";
        let video = VideoName::from_file_name("talk.webm");
        let plan = plan_segments(&parser(), contents, &video, Path::new("/out"));

        let sequences: Vec<_> = plan.segments.iter().map(|s| s.sequence).collect();
        assert_eq!(sequences, vec![1, 2, 3]);
        assert_eq!(plan.segments[2].output, PathBuf::from("/out/talk_3.webm"));
        assert_eq!(plan.skipped, vec!["", "garbage", "", "# a note"]);
    }

    #[test]
    fn test_previous_command_block_is_skipped() {
        let contents = "00:00:10 - 00:00:20\n\
            \n\
            # Generated command for transcription:\n\
            source \"/app/venv/bin/activate\" && python \"/app/transcribe_video.py\" \"/out/input_1.mp4\"\n";
        let video = VideoName::from_file_name("input.mp4");
        let plan = plan_segments(&parser(), contents, &video, Path::new("/out"));

        assert_eq!(plan.segments.len(), 1);
        assert_eq!(plan.skipped.len(), 3);
    }

    #[test]
    fn test_crlf_line_endings() {
        let video = VideoName::from_file_name("a.mp4");
        let plan = plan_segments(
            &parser(),
            "00:00:01 - 00:00:02\r\n00:00:03 - 00:00:04\r\n",
            &video,
            Path::new("/o"),
        );
        assert_eq!(plan.segments.len(), 2);
    }

    #[test]
    fn test_resolve_output_dir_is_absolute() {
        let dir = tempfile::tempdir().unwrap();
        let timestamps = dir.path().join("stamps.txt");

        let resolved = resolve_output_dir(&timestamps).unwrap();
        assert!(resolved.is_absolute());
        assert_eq!(resolved, dir.path().canonicalize().unwrap());
    }

    #[test]
    fn test_resolve_output_dir_bare_file_name() {
        let resolved = resolve_output_dir(Path::new("stamps.txt")).unwrap();
        assert_eq!(resolved, std::env::current_dir().unwrap().canonicalize().unwrap());
    }
}
