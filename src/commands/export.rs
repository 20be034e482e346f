//! Data export command.
//!
//! Writes the full task collection to a file: an iCalendar document by
//! default, or JSON/CSV for backup and spreadsheet use.

use crate::libs::export::{ExportFormat, Exporter};
use crate::store::tasks::TaskStore;
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Output format for the exported data
    #[arg(short, long, value_enum, default_value = "ics")]
    format: ExportFormat,

    /// Custom output file path
    ///
    /// When omitted a timestamped filename is generated in the current
    /// directory, e.g. `taskdeck_export_20250115_143022.ics`.
    #[arg(short, long)]
    output: Option<PathBuf>,
}

pub fn cmd(args: ExportArgs) -> Result<()> {
    let store = TaskStore::open()?;
    Exporter::new(args.format, args.output).export(store.tasks())?;
    Ok(())
}
