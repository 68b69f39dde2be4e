//! Customer commands.

use clap::Subcommand;
use fleetdesk_admin::api::types::{BulkMessageRequest, MessageChannel};
use fleetdesk_admin::api::{ApiError, FleetClient};
use fleetdesk_admin::store::{Store, ops};
use fleetdesk_core::{CustomerId, LoyaltyTier};

use super::parse_loyalty_tier;

fn parse_channel(s: &str) -> Result<MessageChannel, String> {
    match s {
        "email" => Ok(MessageChannel::Email),
        "sms" => Ok(MessageChannel::Sms),
        _ => Err(format!("invalid channel (email|sms): {s}")),
    }
}

#[derive(Subcommand)]
pub enum CustomersCommand {
    /// List customers, filtered client-side like the admin grid
    List {
        /// Restrict to one loyalty tier (bronze..diamond)
        #[arg(long, value_parser = parse_loyalty_tier)]
        tier: Option<LoyaltyTier>,
        /// Free-text search over name, email, phone, national ID
        #[arg(long)]
        search: Option<String>,
    },
    /// Show one customer
    Get {
        /// Customer ID
        id: i64,
    },
    /// Show a customer's booking history
    History {
        /// Customer ID
        id: i64,
    },
    /// Send a bulk message to selected customers
    Message {
        /// Delivery channel (email|sms)
        #[arg(long, value_parser = parse_channel)]
        channel: MessageChannel,
        /// Subject line (email only)
        #[arg(long)]
        subject: Option<String>,
        /// Message body
        #[arg(long)]
        body: String,
        /// Recipient customer IDs, comma separated
        #[arg(long, value_delimiter = ',', required = true)]
        recipients: Vec<i64>,
    },
}

pub async fn run(
    store: &mut Store,
    client: &FleetClient,
    command: CustomersCommand,
    json: bool,
) -> Result<(), ApiError> {
    match command {
        CustomersCommand::List { tier, search } => {
            store.customers.filters.loyalty_tier = tier;
            store.customers.search_term = search.unwrap_or_default();
            ops::fetch_customers(store, client).await?;

            let visible = store.customers.visible();
            if json {
                println!("{}", serde_json::to_string_pretty(&visible).unwrap_or_default());
                return Ok(());
            }
            println!(
                "{:<6} {:<24} {:<26} {:<10} {:>8} {:>14}",
                "ID", "NAME", "EMAIL", "TIER", "BOOKINGS", "SPENT"
            );
            for customer in visible {
                println!(
                    "{:<6} {:<24} {:<26} {:<10} {:>8} {:>14}",
                    customer.id,
                    customer.full_name,
                    customer
                        .email
                        .as_ref()
                        .map_or("-", fleetdesk_core::Email::as_str),
                    customer.loyalty_tier.to_string(),
                    customer.total_bookings,
                    customer.total_spent.to_string(),
                );
            }
        }
        CustomersCommand::Get { id } => {
            ops::fetch_customer(store, client, CustomerId::new(id)).await?;
            if let Some(customer) = &store.customers.selected {
                if json {
                    println!(
                        "{}",
                        serde_json::to_string_pretty(customer).unwrap_or_default()
                    );
                } else {
                    println!("{} {}", customer.id, customer.full_name);
                    println!("  tier:     {}", customer.loyalty_tier);
                    println!("  bookings: {}", customer.total_bookings);
                    println!("  spent:    {}", customer.total_spent);
                    println!("  guarantors: {}", customer.guarantors.len());
                }
            }
        }
        CustomersCommand::History { id } => {
            let customer_id = CustomerId::new(id);
            ops::fetch_customer(store, client, customer_id).await?;
            ops::fetch_customer_bookings(store, client, customer_id).await?;
            if let Some(customer) = &store.customers.selected {
                if json {
                    println!(
                        "{}",
                        serde_json::to_string_pretty(&customer.bookings).unwrap_or_default()
                    );
                    return Ok(());
                }
                for booking in &customer.bookings {
                    println!(
                        "{:<6} {} {} {} to {} ({:?})",
                        booking.id,
                        booking.car.make,
                        booking.car.model,
                        booking.start_date,
                        booking.end_date,
                        booking.status,
                    );
                }
            }
        }
        CustomersCommand::Message {
            channel,
            subject,
            body,
            recipients,
        } => {
            let request = BulkMessageRequest {
                channel,
                subject,
                body,
                recipient_ids: recipients.into_iter().map(CustomerId::new).collect(),
                from: None,
            };
            let receipt = ops::send_bulk_message(store, client, &request).await?;
            println!(
                "campaign {} dispatched: {} accepted, {} rejected",
                receipt.campaign_id, receipt.accepted, receipt.rejected
            );
        }
    }
    Ok(())
}
