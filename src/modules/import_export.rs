use std::fmt;

use serde::{Deserialize, Serialize};
use tokio::time::Duration;

use crate::modules::task_timer::{schedule, DelayedTask};

pub const IMPORT_DELAY: Duration = Duration::from_millis(2000);
pub const EXPORT_DELAY: Duration = Duration::from_millis(1500);

const PREVIEW_LIMIT: usize = 500;

/// Fixed-shape summary returned after every import, regardless of what the
/// selected file contains. No parsing happens anywhere.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportSummary {
    pub total_records: u32,
    pub date_range: String,
    pub metrics: Vec<String>,
    pub apps: u32,
    pub categories: u32,
}

impl ImportSummary {
    fn canned() -> Self {
        ImportSummary {
            total_records: 30,
            date_range: "2024-01-01 to 2024-01-30".to_string(),
            metrics: ["screenTime", "mood", "sleep", "anxiety", "focus"]
                .iter()
                .map(|m| m.to_string())
                .collect(),
            apps: 15,
            categories: 5,
        }
    }

    pub fn banner(&self) -> String {
        format!(
            "Successfully imported {} records from {}",
            self.total_records, self.date_range
        )
    }

    /// Pretty-printed JSON of the summary for the dialog's preview pane,
    /// truncated to the first 500 characters.
    pub fn preview(&self) -> Result<String, String> {
        let json = serde_json::to_string_pretty(self).map_err(|e| e.to_string())?;
        if json.chars().count() <= PREVIEW_LIMIT {
            Ok(json)
        } else {
            let truncated: String = json.chars().take(PREVIEW_LIMIT).collect();
            Ok(format!("{}...", truncated))
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Pdf,
    Excel,
    Original,
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportFormat::Pdf => write!(f, "PDF"),
            ExportFormat::Excel => write!(f, "EXCEL"),
            ExportFormat::Original => write!(f, "ORIGINAL"),
        }
    }
}

/// Completion signal for an export. No artifact is produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportReceipt {
    pub format: ExportFormat,
    pub message: String,
}

/// Start a simulated import of `file_name`. The returned task yields the
/// canned summary after a fixed delay; cancel it if the dialog closes first.
/// Only a missing selection is refused.
pub fn begin_import(file_name: &str) -> Result<DelayedTask<ImportSummary>, String> {
    if file_name.trim().is_empty() {
        return Err("No dataset file selected".to_string());
    }
    log::info!("import started for {}", file_name);
    Ok(schedule(IMPORT_DELAY, ImportSummary::canned()))
}

/// Start a simulated export in the requested format. Always succeeds after
/// the fixed delay.
pub fn begin_export(format: ExportFormat) -> DelayedTask<ExportReceipt> {
    log::info!("{} export started", format);
    schedule(
        EXPORT_DELAY,
        ExportReceipt {
            format,
            message: format!("{} export started. Download will begin shortly.", format),
        },
    )
}
