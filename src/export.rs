//! Saving a diff to a timestamped file.

use crate::error::{DifflyError, Result};
use crate::serialization::{ToHtml, ToPlainText};
use crate::types::DiffResult;
use chrono::{DateTime, SecondsFormat, Utc};
use log::info;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Text,
    Html,
}

impl ExportFormat {
    pub fn mime_type(self) -> &'static str {
        match self {
            ExportFormat::Text => "text/plain",
            ExportFormat::Html => "text/html",
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Text => "txt",
            ExportFormat::Html => "html",
        }
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "text" | "txt" => Ok(ExportFormat::Text),
            "html" => Ok(ExportFormat::Html),
            other => Err(format!("unknown export format '{}', expected 'text' or 'html'", other)),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// `diffly-2024-05-01T12-30-45-123Z.txt`: the UTC time with `:` and `.` made file-name safe.
pub fn export_file_name(format: ExportFormat, now: DateTime<Utc>) -> String {
    let stamp = now
        .to_rfc3339_opts(SecondsFormat::Millis, true)
        .replace([':', '.'], "-");
    format!("diffly-{}.{}", stamp, format.extension())
}

pub fn render(result: &DiffResult, format: ExportFormat) -> String {
    match format {
        ExportFormat::Text => result.to_plain_text(),
        ExportFormat::Html => result.to_html(),
    }
}

/// Writes `result` into `dir` and returns the new file's path.
///
/// A comparison of two empty texts has nothing worth saving and is refused.
pub fn write_export(result: &DiffResult, format: ExportFormat, dir: &Path) -> Result<PathBuf> {
    if result.inline.is_empty() {
        return Err(DifflyError::NothingToExport);
    }

    let path = dir.join(export_file_name(format, Utc::now()));
    fs::write(&path, render(result, format))?;
    info!("exported {} diff ({}) to {}", format, format.mime_type(), path.display());
    Ok(path)
}
