//! Audit CLI commands
//!
//! Implements the audit log query, timeline and export commands. The
//! filter flags parse into the typed [`AuditFilters`], so malformed input
//! (bad dates, unknown actions) is rejected here and never reaches the
//! query engine.

use std::fs::File;
use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Subcommand};

use crate::audit::{AuditAction, AuditFilters, AuditStore, EntityType};
use crate::config::Settings;
use crate::display::{format_timeline, format_timeline_page};
use crate::error::{SlotdeskError, SlotdeskResult};
use crate::export::{export_audit_csv, export_audit_json};

/// Filter flags shared by the audit subcommands
#[derive(Args, Debug, Clone)]
pub struct FilterArgs {
    /// Filter by action (e.g. slot_edit, booking_cancel)
    #[arg(long)]
    action: Option<AuditAction>,

    /// Filter by performer name (case-insensitive substring)
    #[arg(long)]
    performer: Option<String>,

    /// Filter by exact project name
    #[arg(long)]
    project: Option<String>,

    /// Filter by entity type (slot, booking, assignment)
    #[arg(long)]
    entity_type: Option<EntityType>,

    /// Include entries on or after this date (YYYY-MM-DD)
    #[arg(long)]
    from: Option<NaiveDate>,

    /// Include entries on or before this date (YYYY-MM-DD)
    #[arg(long)]
    to: Option<NaiveDate>,

    /// Free-text search over details, slot, project and performer
    #[arg(long)]
    search: Option<String>,
}

impl FilterArgs {
    fn into_filters(self) -> AuditFilters {
        AuditFilters {
            action: self.action,
            performed_by: self.performer,
            project_name: self.project,
            entity_type: self.entity_type,
            from_date: self.from,
            to_date: self.to,
            search: self.search,
        }
    }
}

/// Audit subcommands
#[derive(Subcommand)]
pub enum AuditCommands {
    /// List audit entries matching the given filters, newest first
    List {
        #[command(flatten)]
        filters: FilterArgs,
        /// Maximum number of entries to show
        #[arg(short, long)]
        limit: Option<usize>,
    },
    /// Render the filtered audit trail as a timeline
    Timeline {
        #[command(flatten)]
        filters: FilterArgs,
        /// Entries per page before the "more" trailer
        #[arg(long)]
        page: Option<usize>,
    },
    /// Export the filtered audit trail to a file
    Export {
        #[command(flatten)]
        filters: FilterArgs,
        /// Output file path
        #[arg(short, long)]
        output: PathBuf,
        /// Export format (csv, json)
        #[arg(short, long, default_value = "csv")]
        format: String,
    },
}

/// Handle an audit command
pub fn handle_audit_command(
    store: &AuditStore,
    settings: &Settings,
    cmd: AuditCommands,
) -> SlotdeskResult<()> {
    match cmd {
        AuditCommands::List { filters, limit } => {
            let entries = store.filtered(&filters.into_filters());
            if entries.is_empty() {
                println!("No activities found.");
                return Ok(());
            }

            let shown = limit.unwrap_or(entries.len()).min(entries.len());
            for entry in &entries[..shown] {
                println!("{}", entry.format_compact());
            }
            println!();
            println!("Showing {} of {} activities", shown, entries.len());
        }
        AuditCommands::Timeline { filters, page } => {
            let entries = store.filtered(&filters.into_filters());
            let page = page.unwrap_or(settings.timeline_page_size);
            print!("{}", format_timeline_page(&entries, page));
        }
        AuditCommands::Export {
            filters,
            output,
            format,
        } => {
            if !matches!(format.as_str(), "csv" | "json") {
                return Err(SlotdeskError::Validation(format!(
                    "Invalid export format: '{}'. Valid formats: csv, json",
                    format
                )));
            }

            let entries = store.filtered(&filters.into_filters());
            let count = entries.len();
            let mut file = File::create(&output)?;

            match format.as_str() {
                "csv" => export_audit_csv(&entries, &mut file)?,
                _ => export_audit_json(entries, &mut file)?,
            }

            println!("Exported {} activities to {}", count, output.display());
        }
    }

    Ok(())
}

/// Render the full timeline (used by the demo command)
pub fn print_full_timeline(store: &AuditStore) {
    let entries = store.filtered(&AuditFilters::default());
    print!("{}", format_timeline(&entries));
    println!("{} activities recorded", entries.len());
}
