//! Booking commands.

use chrono::NaiveDate;
use clap::Subcommand;
use fleetdesk_admin::api::types::AvailabilityQuery;
use fleetdesk_admin::api::{ApiError, FleetClient};
use fleetdesk_admin::store::{Store, ops};
use fleetdesk_core::{BookingId, BookingStatus, CarId, PaymentStatus};

use super::{parse_booking_status, parse_date, parse_payment_status};

#[derive(Subcommand)]
pub enum BookingsCommand {
    /// List one server-side page of bookings
    List {
        /// Restrict to one status (pending, active, completed, cancelled)
        #[arg(long, value_parser = parse_booking_status)]
        status: Option<BookingStatus>,
        /// Restrict to one payment status
        #[arg(long, value_parser = parse_payment_status)]
        payment_status: Option<PaymentStatus>,
        /// Free-text search (customer, car, plate)
        #[arg(long)]
        search: Option<String>,
        /// Page to fetch
        #[arg(long, default_value_t = 1)]
        page: u32,
    },
    /// Show one booking
    Get {
        /// Booking ID
        id: i64,
    },
    /// Cancel a booking
    Cancel {
        /// Booking ID
        id: i64,
    },
    /// Mark the booked car as returned
    Return {
        /// Booking ID
        id: i64,
    },
    /// Check whether a car is free over a date range
    Availability {
        /// Car ID
        #[arg(long)]
        car: i64,
        /// First rental day (YYYY-MM-DD)
        #[arg(long, value_parser = parse_date)]
        start_date: NaiveDate,
        /// Last rental day (YYYY-MM-DD)
        #[arg(long, value_parser = parse_date)]
        end_date: NaiveDate,
    },
}

pub async fn run(
    store: &mut Store,
    client: &FleetClient,
    command: BookingsCommand,
    json: bool,
) -> Result<(), ApiError> {
    match command {
        BookingsCommand::List {
            status,
            payment_status,
            search,
            page,
        } => {
            store.bookings.filters.status = status;
            store.bookings.filters.payment_status = payment_status;
            store.bookings.search_term = search.unwrap_or_default();
            ops::fetch_bookings(store, client, page).await?;

            let visible = store.bookings.visible();
            if json {
                println!("{}", serde_json::to_string_pretty(&visible).unwrap_or_default());
                return Ok(());
            }
            println!(
                "{:<6} {:<22} {:<18} {:<12} {:<12} {:>12}",
                "ID", "CUSTOMER", "CAR", "START", "STATUS", "TOTAL"
            );
            for booking in visible {
                println!(
                    "{:<6} {:<22} {:<18} {:<12} {:<12} {:>12}",
                    booking.id,
                    booking.customer.full_name,
                    format!("{} {}", booking.car.make, booking.car.model),
                    booking.start_date,
                    format!("{:?}", booking.status).to_lowercase(),
                    booking.total_amount.to_string(),
                );
            }
            let pagination = store.bookings.pagination;
            if pagination.total_pages > 0 {
                println!(
                    "page {}/{} ({} bookings)",
                    pagination.current_page, pagination.total_pages, pagination.total_items
                );
            }
        }
        BookingsCommand::Get { id } => {
            ops::fetch_booking(store, client, BookingId::new(id)).await?;
            if let Some(booking) = &store.bookings.selected {
                if json {
                    println!(
                        "{}",
                        serde_json::to_string_pretty(booking).unwrap_or_default()
                    );
                } else {
                    println!(
                        "booking {}: {} in {} {} ({} to {})",
                        booking.id,
                        booking.customer.full_name,
                        booking.car.make,
                        booking.car.model,
                        booking.start_date,
                        booking.end_date,
                    );
                    println!("  status:  {:?}", booking.status);
                    println!("  payment: {:?} ({:?})", booking.payment_status, booking.payment_method);
                    println!("  total:   {}", booking.total_amount);
                    println!("  paid:    {}", booking.amount_paid);
                }
            }
        }
        BookingsCommand::Cancel { id } => {
            ops::cancel_booking(store, client, BookingId::new(id)).await?;
            println!("booking {id} cancelled");
        }
        BookingsCommand::Return { id } => {
            ops::mark_booking_returned(store, client, BookingId::new(id)).await?;
            println!("booking {id} completed");
        }
        BookingsCommand::Availability {
            car,
            start_date,
            end_date,
        } => {
            let response = ops::check_availability(
                client,
                &AvailabilityQuery {
                    car: CarId::new(car),
                    start_date,
                    end_date,
                },
            )
            .await?;
            if response.available {
                println!("car {car} is free {start_date} to {end_date}");
            } else {
                println!(
                    "car {car} is NOT free; conflicting bookings: {:?}",
                    response.conflicting_bookings
                );
            }
        }
    }
    Ok(())
}
