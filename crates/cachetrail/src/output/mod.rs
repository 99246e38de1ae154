//! Output formatting functions.

pub mod json;
pub mod pretty;

use serde::Serialize;

use cachetrail_core::cache::{Key, StoredValue};
use cachetrail_core::replay::CallHistory;

use crate::cli::OutputFormat;

/// One value written by the CLI and what reading it back returned.
#[derive(Debug, Clone, Serialize)]
pub struct StoredEntry {
    pub key: Key,
    pub value: StoredValue,
    pub read_back: Option<StoredValue>,
}

/// Everything the CLI prints for a run.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub entries: Vec<StoredEntry>,
    pub history: CallHistory,
}

/// Format a report for output.
pub fn format_output(report: &Report, format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => json::format_json(report),
        OutputFormat::Pretty => pretty::format_report(report),
    }
}
