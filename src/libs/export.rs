//! Task export for backup and calendar interchange.
//!
//! Backs the `export` subcommand. The calendar format (`.ics`) is what the
//! web interface serves for download; JSON and CSV cover backup and
//! spreadsheet use. Exports always cover the full collection — filtering
//! belongs to the views, not the backup path.

use crate::libs::{ics, messages::Message, task::Task};
use crate::msg_success;
use anyhow::Result;
use chrono::Local;
use std::fs;
use std::path::PathBuf;

/// Supported export output formats.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum ExportFormat {
    /// iCalendar document, one VEVENT per scheduled task.
    Ics,
    /// Pretty-printed JSON, identical to the document store layout.
    Json,
    /// Comma-separated values, one row per task.
    Csv,
}

impl ExportFormat {
    fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Ics => "ics",
            ExportFormat::Json => "json",
            ExportFormat::Csv => "csv",
        }
    }
}

pub struct Exporter {
    format: ExportFormat,
    output: Option<PathBuf>,
}

impl Exporter {
    pub fn new(format: ExportFormat, output: Option<PathBuf>) -> Self {
        Exporter { format, output }
    }

    /// Writes the export and returns the destination path.
    pub fn export(&self, tasks: &[Task]) -> Result<PathBuf> {
        let path = self.output.clone().unwrap_or_else(|| self.default_output());

        match self.format {
            ExportFormat::Ics => fs::write(&path, ics::calendar(tasks))?,
            ExportFormat::Json => fs::write(&path, serde_json::to_string_pretty(tasks)?)?,
            ExportFormat::Csv => {
                let mut writer = csv::Writer::from_path(&path)?;
                for task in tasks {
                    writer.serialize(task)?;
                }
                writer.flush()?;
            }
        }

        msg_success!(Message::TasksExportedTo(path.display().to_string()));
        Ok(path)
    }

    // Example: taskdeck_export_20250115_143022.ics
    fn default_output(&self) -> PathBuf {
        let timestamp = Local::now().format("%Y%m%d_%H%M%S");
        PathBuf::from(format!("taskdeck_export_{}.{}", timestamp, self.format.extension()))
    }
}
