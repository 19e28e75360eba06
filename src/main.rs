use anyhow::Result;
use clap::{Parser, Subcommand};

use slotdesk::audit::AuditStore;
use slotdesk::cli::{handle_audit_command, print_full_timeline, AuditCommands};
use slotdesk::config::{RunMode, Settings};
use slotdesk::seed::seed_demo_data;

#[derive(Parser)]
#[command(
    name = "slotdesk",
    author = "Kaylee Beyene",
    version,
    about = "Slot-booking administration with an append-only audit trail",
    long_about = "slotdesk is the administration core of a slot-booking system. \
                  It seeds a synthetic dataset of projects, slots and bookings, \
                  drives the audited mutation flows over it, and exposes the \
                  resulting audit trail for listing, timeline display and export."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Seed the demo dataset and print the full audit timeline
    Demo,

    /// Query and export the audit trail of the seeded dataset
    #[command(subcommand)]
    Audit(AuditCommands),

    /// Show current configuration
    Config,
}

fn main() -> Result<()> {
    init_tracing()?;

    let cli = Cli::parse();
    let mode = RunMode::from_env();
    let settings = Settings::default();
    let mut store = AuditStore::new(mode);

    match cli.command {
        Some(Commands::Demo) => {
            let data = seed_demo_data(&mut store)?;
            print_full_timeline(&store);
            println!(
                "{} slots, {} bookings seeded",
                data.slots.list().len(),
                data.bookings.list().len()
            );
        }
        Some(Commands::Audit(cmd)) => {
            seed_demo_data(&mut store)?;
            handle_audit_command(&store, &settings, cmd)?;
        }
        Some(Commands::Config) => {
            println!("slotdesk Configuration");
            println!("======================");
            println!("Runtime mode:       {}", mode);
            println!("Date format:        {}", settings.date_format);
            println!("Time format:        {}", settings.time_format);
            println!("Timeline page size: {}", settings.timeline_page_size);
        }
        None => {
            println!("slotdesk - Slot-booking administration");
            println!();
            println!("Run 'slotdesk --help' for usage information.");
            println!("Run 'slotdesk demo' to seed the demo dataset and view the audit trail.");
        }
    }

    Ok(())
}

fn init_tracing() -> Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_env("SLOTDESK_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
