//! Table and JSON output formatting.

use tabled::{Table, Tabled};

use trigger_collection::AuditEntry;
use trigger_core::result::TriggerResult;

use crate::cli::AuditReport;

/// Output format selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table
    #[default]
    Table,
    /// JSON output
    Json,
}

/// One audit entry as a table row.
#[derive(Tabled)]
struct AuditRow {
    #[tabled(rename = "operation")]
    operation: String,
    #[tabled(rename = "phase")]
    phase: String,
    #[tabled(rename = "input")]
    input: String,
    #[tabled(rename = "outcome")]
    outcome: String,
}

impl From<&AuditEntry> for AuditRow {
    fn from(entry: &AuditEntry) -> Self {
        Self {
            operation: entry.operation.to_string(),
            phase: format!("{:?}", entry.phase).to_lowercase(),
            input: entry.input.clone(),
            outcome: entry.outcome.clone().unwrap_or_else(|| "-".to_string()),
        }
    }
}

/// Print an audit report in the selected format
pub fn print_report(report: &AuditReport, format: OutputFormat) -> TriggerResult<()> {
    match format {
        OutputFormat::Table => {
            if report.entries.is_empty() {
                println!("No hook invocations recorded.");
            } else {
                let rows: Vec<AuditRow> = report.entries.iter().map(AuditRow::from).collect();
                println!("{}", Table::new(rows));
            }
            print_success(&format!("accepted: {:?}", report.accepted));
            if !report.rejected.is_empty() {
                print_warning(&format!("rejected by gate: {:?}", report.rejected));
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(report)?);
        }
    }
    Ok(())
}

/// Print a success message
pub fn print_success(msg: &str) {
    println!("✓ {}", msg);
}

/// Print a warning message
pub fn print_warning(msg: &str) {
    println!("⚠ {}", msg);
}
