//! FleetDesk CLI - fleet management from the terminal.
//!
//! # Usage
//!
//! ```bash
//! # List available cars
//! fleet-cli cars list --status available
//!
//! # Cancel a booking
//! fleet-cli bookings cancel 42
//!
//! # Suspend and later reactivate a staff member
//! fleet-cli staff suspend 7
//! fleet-cli staff reactivate 7
//!
//! # Send an SMS to selected customers
//! fleet-cli customers message --channel sms --body "Service notice" --recipients 1,2,3
//! ```
//!
//! # Commands
//!
//! - `cars` - fleet inventory
//! - `bookings` - rentals, cancellation, returns, availability
//! - `customers` - customer records, booking history, bulk messaging
//! - `staff` - staff records and lifecycle actions
//! - `dashboard` - fleet-wide rollup metrics

#![cfg_attr(not(test), forbid(unsafe_code))]
#![allow(clippy::print_stdout)]

use clap::{Parser, Subcommand};
use fleetdesk_admin::api::FleetClient;
use fleetdesk_admin::config::FleetConfig;
use fleetdesk_admin::store::Store;

mod commands;

#[derive(Parser)]
#[command(name = "fleet-cli")]
#[command(author, version, about = "FleetDesk CLI tools")]
struct Cli {
    /// Print raw JSON instead of tables
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fleet inventory
    Cars {
        #[command(subcommand)]
        action: commands::cars::CarsCommand,
    },
    /// Rentals
    Bookings {
        #[command(subcommand)]
        action: commands::bookings::BookingsCommand,
    },
    /// Customer records and messaging
    Customers {
        #[command(subcommand)]
        action: commands::customers::CustomersCommand,
    },
    /// Staff records and lifecycle
    Staff {
        #[command(subcommand)]
        action: commands::staff::StaffCommand,
    },
    /// Fleet-wide rollup metrics
    Dashboard,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = FleetConfig::from_env()?;
    let client = FleetClient::new(&config)?;
    let mut store = Store::new();

    match cli.command {
        Commands::Cars { action } => {
            commands::cars::run(&mut store, &client, action, cli.json).await?;
        }
        Commands::Bookings { action } => {
            commands::bookings::run(&mut store, &client, action, cli.json).await?;
        }
        Commands::Customers { action } => {
            commands::customers::run(&mut store, &client, action, cli.json).await?;
        }
        Commands::Staff { action } => {
            commands::staff::run(&mut store, &client, action, cli.json).await?;
        }
        Commands::Dashboard => {
            commands::dashboard::run(&mut store, &client, cli.json).await?;
        }
    }
    Ok(())
}
