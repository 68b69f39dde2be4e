//! Dashboard command.

use fleetdesk_admin::api::{ApiError, FleetClient};
use fleetdesk_admin::store::{Store, ops};

pub async fn run(store: &mut Store, client: &FleetClient, json: bool) -> Result<(), ApiError> {
    ops::fetch_dashboard(store, client).await?;

    let Some(metrics) = &store.dashboard.metrics else {
        return Ok(());
    };

    if json {
        println!("{}", serde_json::to_string_pretty(metrics).unwrap_or_default());
        return Ok(());
    }

    println!("fleet");
    println!("  cars:        {} total", metrics.total_cars);
    println!(
        "  by status:   {} available / {} rented / {} maintenance",
        metrics.available_cars, metrics.rented_cars, metrics.maintenance_cars
    );
    println!("bookings");
    println!(
        "  {} total, {} active",
        metrics.total_bookings, metrics.active_bookings
    );
    println!("people");
    println!("  customers:   {}", metrics.total_customers);
    println!(
        "  staff:       {} active / {} suspended",
        metrics.active_staff, metrics.suspended_staff
    );
    println!("revenue");
    println!("  lifetime:    {}", metrics.total_revenue);
    for month in &metrics.monthly_revenue {
        println!("  {}: {} ({} bookings)", month.month, month.revenue, month.bookings);
    }
    Ok(())
}
