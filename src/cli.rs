//! CLI definition and the audited run it drives.

use clap::Parser;
use serde::Serialize;
use tracing::info;

use trigger_collection::prelude::*;
use trigger_collection::{AuditEntry, AuditTrail};
use trigger_core::config::AppConfig;

use crate::output::{self, OutputFormat};

/// Adds values to a gated list and prints what the hooks saw.
#[derive(Debug, Parser)]
#[command(name = "trigger-audit", version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: String,

    /// Largest value the gate admits (overrides `audit.max_value`)
    #[arg(short, long)]
    pub max: Option<i64>,

    /// Comma-separated values to remove as one batch after all adds
    #[arg(short, long, value_delimiter = ',')]
    pub remove: Vec<i64>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Values to add, in order
    #[arg(allow_negative_numbers = true)]
    pub values: Vec<i64>,
}

impl Cli {
    /// Execute the audited run
    pub fn execute(&self, config: &AppConfig) -> TriggerResult<()> {
        let max = self.max.unwrap_or(config.audit.max_value);
        let report = run_audit(&self.values, &self.remove, max, config.audit.record_reads)?;
        output::print_report(&report, self.format)
    }
}

/// Outcome of one audited run.
#[derive(Debug, Serialize)]
pub struct AuditReport {
    /// Final list contents.
    pub accepted: Vec<i64>,
    /// Values the gate vetoed.
    pub rejected: Vec<i64>,
    /// Every hook invocation, in order.
    pub entries: Vec<AuditEntry>,
}

/// Adds `values` one by one to a list gated at `max`, removes `remove` as a
/// batch, then reads the list back by index.
pub fn run_audit(
    values: &[i64],
    remove: &[i64],
    max: i64,
    record_reads: bool,
) -> TriggerResult<AuditReport> {
    let trail = AuditTrail::new();
    let builder = trail.install(TriggerList::wrap(Vec::new()).gate_add(move |v: &i64| *v <= max));
    let builder = if record_reads {
        trail.install_reads(builder)
    } else {
        builder
    };
    let mut list = builder.build();

    let mut rejected = Vec::new();
    for value in values {
        if !list.add(*value)? {
            info!(value, max, "Value rejected by gate");
            rejected.push(*value);
        }
    }

    if !remove.is_empty() {
        list.remove_all(remove)?;
    }

    let accepted = (0..list.len())
        .map(|index| list.get(index).copied())
        .collect::<TriggerResult<Vec<_>>>()?;

    Ok(AuditReport {
        accepted,
        rejected,
        entries: trail.entries(),
    })
}
