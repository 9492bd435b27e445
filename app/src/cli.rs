//! FILENAME: app/src/cli.rs
// PURPOSE: Command-line front end over the command handlers.
// CONTEXT: Every subcommand runs exactly one handler and prints its result.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use engine::{TicketForm, DEFAULT_QUANTITY};

use crate::api_types::PivotViewResponse;
use crate::commands::{
    add_ticket, apply_ticket_prefix, export_pivot_csv, get_pivot, list_item_types,
    reset_tickets,
};
use crate::config::AppConfig;
use crate::logging::init_logger;
use crate::{create_app_state, log_error, log_info};

#[derive(Parser, Debug)]
#[command(name = "ticketdesk")]
#[command(about = "Track support tickets and the items they request")]
#[command(version)]
pub struct Cli {
    /// JSON configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// SQLite database file (overrides the config file)
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    /// Echo log lines to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Record a ticket entry
    Add {
        /// Ticket number; bare digits get the configured prefix
        ticket_number: String,

        /// Item type, one of `ticketdesk types`
        item_type: String,

        /// Quantity requested
        #[arg(short, long, default_value = DEFAULT_QUANTITY)]
        quantity: String,
    },

    /// Print the pivot of tickets per item type
    Show {
        /// Print JSON instead of a text table
        #[arg(long)]
        json: bool,
    },

    /// Delete every ticket
    Reset {
        /// Confirm deletion of all data
        #[arg(long)]
        yes: bool,
    },

    /// Write the pivot to a semicolon-separated CSV file
    Export {
        /// Destination file (".csv" is added when missing)
        path: PathBuf,
    },

    /// List the accepted item types
    Types,
}

const RESET_UNCONFIRMED: &str = "reset deletes all tickets; rerun with --yes to confirm";

fn load_config(cli: &Cli) -> Result<AppConfig, String> {
    let mut config = match &cli.config {
        Some(path) => AppConfig::load(path).map_err(|e| e.to_string())?,
        None => AppConfig::default(),
    };
    if let Some(db) = &cli.db {
        config.database_path = db.clone();
    }
    Ok(config)
}

fn print_pivot(view: &PivotViewResponse) {
    if view.is_empty() {
        println!("No tickets recorded.");
    } else {
        print!("{}", view.to_table().to_grid().render_text());
    }
}

fn execute(cli: Cli) -> Result<(), String> {
    let config = load_config(&cli)?;
    if let Err(e) = init_logger(config.log_path.as_deref(), cli.verbose) {
        eprintln!("[LOG_INIT] FAILED: {}", e);
    }
    log_info!("SYS", "ticketdesk starting command={:?}", cli.command);

    // Refuse before the database is opened (and possibly created).
    if let Commands::Reset { yes: false } = cli.command {
        return Err(RESET_UNCONFIRMED.to_string());
    }

    let state = create_app_state(&config).map_err(|e| e.to_string())?;

    match cli.command {
        Commands::Add {
            ticket_number,
            item_type,
            quantity,
        } => {
            let ticket_number = apply_ticket_prefix(&config.ticket_prefix, &ticket_number);
            let form = TicketForm::new(ticket_number, item_type, quantity);
            let view = add_ticket(&state, form).map_err(|e| e.to_string())?;
            print_pivot(&view);
        }
        Commands::Show { json } => {
            let view = get_pivot(&state).map_err(|e| e.to_string())?;
            if json {
                let text = serde_json::to_string_pretty(&view).map_err(|e| e.to_string())?;
                println!("{}", text);
            } else {
                print_pivot(&view);
            }
        }
        Commands::Reset { .. } => {
            reset_tickets(&state).map_err(|e| e.to_string())?;
            println!("All tickets deleted.");
        }
        Commands::Export { path } => {
            let result = export_pivot_csv(&state, &path).map_err(|e| e.to_string())?;
            println!("Exported {} rows to {}", result.row_count, result.path.display());
        }
        Commands::Types => {
            for name in list_item_types(&state) {
                println!("{}", name);
            }
        }
    }
    Ok(())
}

/// Parses arguments, runs one command and maps failure to exit code 1.
pub fn run() -> ExitCode {
    let cli = Cli::parse();
    match execute(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            log_error!("SYS", "{}", message);
            eprintln!("Error: {}", message);
            ExitCode::FAILURE
        }
    }
}
