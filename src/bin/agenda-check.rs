//! CLI tool to check booking rules from a terminal.
//!
//! Usage:
//!   agenda-check slots 2026-10-20 --occupied horarios.json
//!   agenda-check slots 2026-10-20 --bookings agendamentos.json
//!   agenda-check phone 11987654321
//!   agenda-check password Segredo1
//!   agenda-check total corte barba

use agenda_rs::{
    AgendaConfig, DayStatus, OccupancyIndex, SlotState, mask_phone, parse_occupied,
    password_feedback, reconcile,
};
use clap::{Parser, Subcommand};
use std::fs;
use std::path::PathBuf;
use std::process;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Check the salon booking rules without a browser.
#[derive(Parser)]
#[command(name = "agenda-check")]
struct Cli {
    /// Page configuration (TOML); defaults to the stock salon page
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log rule decisions on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show the slot board for a date
    Slots {
        /// Date (YYYY-MM-DD)
        date: String,

        /// JSON file with the occupied times, as returned by /api/horarios/{date}
        #[arg(short, long)]
        occupied: Option<PathBuf>,

        /// JSON file with every booking as [date, time] rows
        #[arg(short, long, conflicts_with = "occupied")]
        bookings: Option<PathBuf>,

        /// Try to choose this slot
        #[arg(long)]
        choose: Option<String>,
    },
    /// Apply the phone mask to some text
    Phone { text: String },
    /// Show the password feedback
    Password { text: String },
    /// Sum the prices of the given service ids
    Total {
        #[arg(required = true)]
        services: Vec<String>,
    },
}

fn init_logger(verbose: bool) {
    let default = if verbose {
        "agenda_rs=debug,info"
    } else {
        "agenda_rs=info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    let config = match &cli.config {
        Some(path) => match AgendaConfig::load(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error loading config '{}': {e}", path.display());
                process::exit(1);
            }
        },
        None => AgendaConfig::default(),
    };

    let result = match cli.command {
        Command::Slots {
            date,
            occupied,
            bookings,
            choose,
        } => run_slots(&config, &date, occupied, bookings, choose),
        Command::Phone { text } => {
            println!("{}", mask_phone(&text));
            Ok(())
        }
        Command::Password { text } => {
            let feedback = password_feedback(&text);
            println!("{:?}: {}", feedback, feedback.message());
            Ok(())
        }
        Command::Total { services } => run_total(&config, &services),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run_slots(
    config: &AgendaConfig,
    date: &str,
    occupied: Option<PathBuf>,
    bookings: Option<PathBuf>,
    choose: Option<String>,
) -> Result<(), String> {
    let (date, status) = config
        .open_days
        .check_input(date)
        .map_err(|e| e.to_string())?;

    if let DayStatus::Closed { message } = status {
        println!("{message}");
        return Ok(());
    }

    let occupied = match (occupied, bookings) {
        (Some(path), _) => parse_occupied(&read_file(&path)?).map_err(|e| e.to_string())?,
        (None, Some(path)) => OccupancyIndex::from_rows_json(&read_file(&path)?)
            .map_err(|e| e.to_string())?
            .occupied_on(date)
            .to_vec(),
        (None, None) => Vec::new(),
    };

    let mut board = reconcile(&config.slots, &occupied);
    if let Some(time) = choose {
        board.select(&time).map_err(|e| e.to_string())?;
    }

    println!("{date}");
    for slot in board.slots() {
        let label = match (slot.state, slot.active) {
            (SlotState::Occupied, _) => "ocupado",
            (SlotState::Free, true) => "escolhido",
            (SlotState::Free, false) => "livre",
        };
        println!("  {}  {label}", slot.time);
    }
    eprintln!("{} of {} slots free", board.free_count(), board.slots().len());
    Ok(())
}

fn read_file(path: &PathBuf) -> Result<String, String> {
    fs::read_to_string(path).map_err(|e| format!("reading '{}': {e}", path.display()))
}

fn run_total(config: &AgendaConfig, services: &[String]) -> Result<(), String> {
    let mut selection = config.selection();
    for id in services {
        selection.toggle(id, true).map_err(|e| e.to_string())?;
    }
    for service in selection.checked() {
        println!("  {:<16} {:>8}", service.name, service.price);
    }
    println!("  {:<16} {:>8}", "Total", selection.total());
    if selection.total().is_zero() {
        eprintln!("Total is zero; the form would not be sent");
    }
    Ok(())
}
