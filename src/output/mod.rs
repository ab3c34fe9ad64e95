//! Output module for exporting digests outside the web UI
//!
//! This module handles:
//! - Rendering a digest report as markdown
//! - Writing the synthesized audio next to it

mod markdown;

pub use markdown::{format_markdown_report, generate_markdown_report};

use crate::digest::DigestReport;
use std::path::Path;

/// Writes the report's audio clip to `path`
///
/// # Returns
///
/// * `Ok(true)` - Audio was written
/// * `Ok(false)` - The report has no audio; nothing was written
/// * `Err(std::io::Error)` - Failed to write the file
pub fn write_audio(report: &DigestReport, path: &Path) -> std::io::Result<bool> {
    match &report.audio {
        Some(clip) => {
            std::fs::write(path, &clip.bytes)?;
            Ok(true)
        }
        None => Ok(false),
    }
}
