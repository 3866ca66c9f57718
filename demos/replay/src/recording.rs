//! JSON-lines landmark recordings
//!
//! One `LandmarkFrame` object per line. Blank lines and lines starting with
//! `#` are skipped.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use gestura_core::{FrameTime, LandmarkFrame};

/// Read a recording from a file, or from stdin when the path is `-`
pub fn read_recording(path: &Path) -> Result<Vec<LandmarkFrame>> {
    if path.as_os_str() == "-" {
        let stdin = io::stdin();
        return parse_lines(stdin.lock());
    }
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    parse_lines(BufReader::new(file)).with_context(|| format!("reading {}", path.display()))
}

pub fn parse_lines(reader: impl BufRead) -> Result<Vec<LandmarkFrame>> {
    let mut frames = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let frame: LandmarkFrame = serde_json::from_str(trimmed)
            .with_context(|| format!("line {}: not a landmark frame", idx + 1))?;
        frames.push(frame);
    }
    Ok(frames)
}

/// Time since the previous frame: from timestamps when both exist, else the
/// nominal frame interval
pub fn frame_interval(
    previous: Option<FrameTime>,
    current: Option<FrameTime>,
    nominal: Duration,
) -> Duration {
    match (previous, current) {
        (Some(prev), Some(now)) if now > prev => now.since(prev),
        _ => nominal,
    }
}
