// Rust guideline compliant 2026-10-18

//! Bellhop CLI Application
//!
//! Command-line interface for the Bellhop staff-call log.

use bellhop_app::TicketRequest;
use bellhop_cli::{commands, create_formatter};
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(
    name = "bellhop",
    version,
    about = "Bellhop: hotel staff call notifications for AI front-desk agents",
    long_about = "Bellhop records guest requests for a human attendant, rings the operator, and lets staff resolve them. Run `bellhop serve` to expose it as MCP tools over stdio.",
    after_help = "Examples:\n  bellhop serve\n  bellhop call \"Guest wants to check in\" --priority urgent\n  bellhop status\n  bellhop pending --json\n  bellhop resolve TKT-20261018140309-3fa1\n"
)]
struct Cli {
    /// Enable JSON output
    #[arg(long, global = true)]
    json: bool,

    /// Desk directory holding bellhop.toml and the ticket log
    #[arg(long, global = true)]
    root: Option<PathBuf>,

    /// Never ring the terminal bell
    #[arg(long, global = true)]
    silent: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, clap::Subcommand)]
enum Commands {
    /// Run the MCP server on stdio
    Serve {
        /// Logging level (error, warn, info, debug, trace)
        #[arg(long, default_value = "info")]
        log_level: String,

        /// Write logs to this file instead of stderr
        #[arg(long)]
        log_file: Option<PathBuf>,
    },

    /// Call staff for a guest
    Call {
        /// Why staff is needed
        reason: String,

        /// Language the guest is speaking
        #[arg(long)]
        language: Option<String>,

        /// Priority (normal, high, urgent)
        #[arg(long)]
        priority: Option<String>,

        /// Where the guest is waiting
        #[arg(long)]
        location: Option<String>,

        /// Additional context for staff
        #[arg(long)]
        info: Option<String>,
    },

    /// Show the pending count and most recent pending tickets
    Status,

    /// List all pending staff calls
    Pending,

    /// Mark a staff call resolved
    Resolve {
        /// Ticket number
        id: String,
    },

    /// Show a staff call
    Show {
        /// Ticket number
        id: String,
    },
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    let formatter = create_formatter(cli.json);
    let root = cli.root.as_deref();

    match cli.command {
        Some(Commands::Serve {
            log_level,
            log_file,
        }) => {
            commands::serve::execute(cli.root.clone(), cli.silent, log_level, log_file)?;
        }
        Some(Commands::Call {
            reason,
            language,
            priority,
            location,
            info,
        }) => {
            let request = TicketRequest {
                reason,
                guest_language: language,
                priority,
                location,
                additional_info: info,
            };
            commands::call::execute(root, cli.silent, request, formatter.as_ref())?;
        }
        Some(Commands::Status) => {
            commands::status::execute(root, formatter.as_ref())?;
        }
        Some(Commands::Pending) => {
            commands::pending::execute(root, formatter.as_ref())?;
        }
        Some(Commands::Resolve { id }) => {
            if !commands::resolve::execute(root, &id, formatter.as_ref())? {
                return Ok(ExitCode::FAILURE);
            }
        }
        Some(Commands::Show { id }) => {
            commands::show::execute(root, &id, formatter.as_ref())?;
        }
        None => {
            println!("Use --help for usage information");
        }
    }

    Ok(ExitCode::SUCCESS)
}
