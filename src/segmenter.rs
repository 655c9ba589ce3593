use std::fs::OpenOptions;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use crate::command_line::{generated_block, transcription_command};
use crate::config::Config;
use crate::error::SegmentError;
use crate::ffmpeg::{ExtractStatus, Extractor, FfmpegExtractor};
use crate::segment::{plan_segments, resolve_output_dir, VideoName};
use crate::timestamp::RangeParser;

/// Outcome of one segmenter run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    /// Output paths in timestamps-file order, including failed extractions
    pub outputs: Vec<PathBuf>,
    pub skipped: usize,
    /// Extractions that exited non-zero or could not be started
    pub failed: usize,
    /// Whether a command block was appended to the timestamps file
    pub appended: bool,
}

/// Cuts a video along a timestamps file and appends the transcription command
pub struct Segmenter<E> {
    extractor: E,
    config: Config,
    /// Directory holding the virtualenv and the transcription script
    base_dir: PathBuf,
    parser: RangeParser,
}

impl Segmenter<FfmpegExtractor> {
    pub fn with_ffmpeg(config: Config, base_dir: PathBuf) -> Result<Self, SegmentError> {
        let extractor = FfmpegExtractor::new(config.ffmpeg.clone());
        Self::new(extractor, config, base_dir)
    }
}

impl<E: Extractor> Segmenter<E> {
    pub fn new(extractor: E, config: Config, base_dir: PathBuf) -> Result<Self, SegmentError> {
        Ok(Self {
            extractor,
            config,
            base_dir,
            parser: RangeParser::new()?,
        })
    }

    pub fn run(&self, video: &Path, timestamps: &Path) -> Result<Report, SegmentError> {
        if !video.is_file() {
            return Err(SegmentError::VideoNotFound(video.to_path_buf()));
        }
        let video_name = VideoName::from_path(video)
            .ok_or_else(|| SegmentError::InvalidVideoName(video.to_path_buf()))?;

        let out_dir = resolve_output_dir(timestamps).map_err(|source| SegmentError::Io {
            path: timestamps.to_path_buf(),
            source,
        })?;

        let contents = read_timestamps(timestamps);
        let plan = plan_segments(&self.parser, &contents, &video_name, &out_dir);
        tracing::info!(
            "Planned {} segments from {} ({} lines skipped)",
            plan.segments.len(),
            timestamps.display(),
            plan.skipped.len()
        );

        for line in &plan.skipped {
            println!("Skipping invalid line: {}", line);
        }

        let mut report = Report {
            skipped: plan.skipped.len(),
            ..Report::default()
        };

        for segment in &plan.segments {
            println!(
                "Creating segment {}: {} -> {}",
                segment.sequence,
                segment.range,
                segment.output.display()
            );
            tracing::debug!(
                "Segment {} spans {}s",
                segment.sequence,
                i64::from(segment.range.end.as_secs()) - i64::from(segment.range.start.as_secs())
            );

            match self.extractor.extract(video, segment) {
                Ok(ExtractStatus::Success) => {
                    println!("Segment {} created successfully", segment.sequence);
                }
                Ok(ExtractStatus::Failed { code }) => {
                    report.failed += 1;
                    match code {
                        Some(code) => eprintln!(
                            "Warning: {} exited with code {} for segment {}",
                            self.config.ffmpeg, code, segment.sequence
                        ),
                        None => eprintln!(
                            "Warning: {} was terminated by a signal for segment {}",
                            self.config.ffmpeg, segment.sequence
                        ),
                    }
                }
                Err(err) => {
                    report.failed += 1;
                    eprintln!(
                        "Warning: failed to execute {} for segment {}: {}",
                        self.config.ffmpeg, segment.sequence, err
                    );
                }
            }

            report.outputs.push(segment.output.clone());
        }

        if report.outputs.is_empty() {
            eprintln!(
                "Warning: no valid timestamps found in {}; nothing was appended",
                timestamps.display()
            );
            return Ok(report);
        }

        let command = transcription_command(&self.config, &self.base_dir, &report.outputs);
        append_block(timestamps, &generated_block(&command))?;
        report.appended = true;

        println!(
            "Transcription command appended to {}:\n{}",
            timestamps.display(),
            command
        );

        Ok(report)
    }
}

/// Missing or unreadable files read as empty: no lines, no segments.
fn read_timestamps(path: &Path) -> String {
    match std::fs::read(path) {
        Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
        Err(e) if e.kind() == ErrorKind::NotFound => String::new(),
        Err(e) => {
            tracing::warn!("Cannot read {}: {}", path.display(), e);
            String::new()
        }
    }
}

fn append_block(path: &Path, block: &str) -> Result<(), SegmentError> {
    let io_err = |source: std::io::Error| SegmentError::Io {
        path: path.to_path_buf(),
        source,
    };
    let mut file = OpenOptions::new().append(true).open(path).map_err(io_err)?;
    file.write_all(block.as_bytes()).map_err(io_err)
}
