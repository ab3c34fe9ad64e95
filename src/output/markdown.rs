//! Markdown export of a digest report

use crate::digest::{DigestReport, NoticeLevel};
use chrono::{DateTime, Utc};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Writes a digest report as markdown to `output_path`
///
/// # Returns
///
/// * `Ok(())` - Successfully wrote the report
/// * `Err(std::io::Error)` - Failed to create or write the file
pub fn generate_markdown_report(report: &DigestReport, output_path: &Path) -> std::io::Result<()> {
    let markdown = format_markdown_report(report, Utc::now());

    let mut file = File::create(output_path)?;
    file.write_all(markdown.as_bytes())?;

    Ok(())
}

/// Formats a digest report as markdown
pub fn format_markdown_report(report: &DigestReport, generated_at: DateTime<Utc>) -> String {
    let mut md = String::new();

    md.push_str(&format!("# Résumé : {}\n\n", report.topic));

    md.push_str(&format!(
        "- **Généré le**: {}\n",
        generated_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));
    md.push_str(&format!("- **Fragments analysés**: {}\n", report.fragment_count));
    match &report.audio {
        Some(clip) => md.push_str(&format!(
            "- **Audio**: {} ({} octets)\n",
            report.audio_file_name(),
            clip.len()
        )),
        None => md.push_str("- **Audio**: non généré\n"),
    }
    md.push('\n');

    if !report.notices.is_empty() {
        for notice in &report.notices {
            let marker = match notice.level {
                NoticeLevel::Success => "✓",
                NoticeLevel::Info => "ℹ",
                NoticeLevel::Warning => "⚠",
                NoticeLevel::Error => "✗",
            };
            md.push_str(&format!("> {} {}\n", marker, notice.message));
        }
        md.push('\n');
    }

    md.push_str("## Résultats de l'analyse\n\n");
    md.push_str(report.summary.as_str().trim_end());
    md.push('\n');

    md
}
