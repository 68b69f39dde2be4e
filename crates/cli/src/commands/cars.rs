//! Car commands.

use clap::Subcommand;
use fleetdesk_admin::api::{ApiError, FleetClient};
use fleetdesk_admin::store::{Store, ops};
use fleetdesk_core::{CarId, CarStatus};

use super::parse_car_status;

#[derive(Subcommand)]
pub enum CarsCommand {
    /// List cars, filtered client-side like the admin grid
    List {
        /// Restrict to one status (available, rented, maintenance, retired)
        #[arg(long, value_parser = parse_car_status)]
        status: Option<CarStatus>,
        /// Restrict to one manufacturer
        #[arg(long)]
        make: Option<String>,
        /// Free-text search over make, model, plate, and color
        #[arg(long)]
        search: Option<String>,
    },
    /// Show one car with its nested history
    Get {
        /// Car ID
        id: i64,
    },
    /// Request a status change
    SetStatus {
        /// Car ID
        id: i64,
        /// Target status
        #[arg(value_parser = parse_car_status)]
        status: CarStatus,
    },
    /// Remove a car from the fleet
    Delete {
        /// Car ID
        id: i64,
    },
}

pub async fn run(
    store: &mut Store,
    client: &FleetClient,
    command: CarsCommand,
    json: bool,
) -> Result<(), ApiError> {
    match command {
        CarsCommand::List {
            status,
            make,
            search,
        } => {
            store.cars.filters.status = status;
            store.cars.filters.make = make;
            store.cars.search_term = search.unwrap_or_default();
            ops::fetch_cars(store, client).await?;

            let visible = store.cars.visible();
            if json {
                println!("{}", serde_json::to_string_pretty(&visible).unwrap_or_default());
                return Ok(());
            }
            println!(
                "{:<6} {:<12} {:<14} {:<6} {:<12} {:<12} {:>10}",
                "ID", "MAKE", "MODEL", "YEAR", "PLATE", "STATUS", "DAILY"
            );
            for car in visible {
                println!(
                    "{:<6} {:<12} {:<14} {:<6} {:<12} {:<12} {:>10}",
                    car.id,
                    car.make,
                    car.model,
                    car.year,
                    car.registration_number,
                    format!("{:?}", car.status).to_lowercase(),
                    car.daily_rate.to_string(),
                );
            }
        }
        CarsCommand::Get { id } => {
            ops::fetch_car(store, client, CarId::new(id)).await?;
            if let Some(car) = &store.cars.selected {
                if json {
                    println!("{}", serde_json::to_string_pretty(car).unwrap_or_default());
                } else {
                    println!("{} {} {} ({})", car.id, car.make, car.model, car.year);
                    println!("  plate:    {}", car.registration_number);
                    println!("  status:   {:?}", car.status);
                    println!("  revenue:  {}", car.total_revenue);
                    println!("  expenses: {}", car.total_expenses);
                    println!("  maintenance records: {}", car.maintenance_records.len());
                    println!("  insurance policies:  {}", car.insurance_policies.len());
                }
            }
        }
        CarsCommand::SetStatus { id, status } => {
            ops::set_car_status(store, client, CarId::new(id), status).await?;
            println!("car {id} -> {status:?}");
        }
        CarsCommand::Delete { id } => {
            ops::delete_car(store, client, CarId::new(id)).await?;
            println!("car {id} deleted");
        }
    }
    Ok(())
}
